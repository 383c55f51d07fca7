//! The request seam between the controller and the network.
//!
//! DESIGN
//! ======
//! A transport only moves bytes: it sends a `GET` or a form `POST` to an
//! endpoint path and hands back the response body as text. Decoding and the
//! success/failure split stay in the controller so every transport behaves
//! the same way. HTTP status is not inspected, matching `fetch()`, so a JSON
//! error body still reaches the application tier.
//!
//! Futures are not `Send`: the browser event loop is single-threaded.

use crate::error::CartError;

pub trait CartTransport {
    /// Fetch `path` and return the body text.
    async fn get(&self, path: &str) -> Result<String, CartError>;

    /// Submit `fields` as a form to `path` and return the body text.
    async fn post_form(&self, path: &str, fields: &[(&'static str, String)]) -> Result<String, CartError>;
}

