//! # cart-ui
//!
//! Shopping-cart page controller. Talks to the store's cart endpoints
//! (count, add, update, remove) and patches the page with the result: the
//! item count, transient alert notifications, row removal, and reloads.
//!
//! The controller is generic over a `CartTransport` and a `Page`, so the same
//! code runs in the browser (`hydrate`: `gloo-net` + `web-sys`), natively
//! against a live server (`native`: `reqwest`), and in unit tests against an
//! in-memory page.

pub mod config;
pub mod controller;
pub mod error;
pub mod net;
pub mod notification;
pub mod page;
pub mod stepper;

#[cfg(feature = "hydrate")]
pub mod boot;
#[cfg(test)]
mod test_support;

pub use config::{CartConfig, SyncStrategy};
pub use controller::{CartController, CartOutcome, QuantityForm};
pub use error::CartError;
pub use net::CartTransport;
pub use notification::{Notification, NotificationId, Severity};
pub use page::Page;
