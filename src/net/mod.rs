//! Network layer: wire types and the transports that carry them.

#[cfg(feature = "hydrate")]
pub mod browser;
#[cfg(feature = "native")]
pub mod http;
pub mod transport;
pub mod types;

pub use transport::CartTransport;
