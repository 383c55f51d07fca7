//! Error type shared by the transport, page, and controller layers.
//!
//! ERROR HANDLING
//! ==============
//! Operations never panic on a bad response. Transport and decode failures
//! are captured here and turned into a fixed notification by the controller;
//! a missing page element is logged and the rest of the operation proceeds.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("request to {path} failed: {message}")]
    Transport { path: String, message: String },
    #[error("invalid response from {path}: {message}")]
    Decode { path: String, message: String },
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CartError {
    pub fn transport(path: &str, err: impl std::fmt::Display) -> Self {
        Self::Transport { path: path.to_owned(), message: err.to_string() }
    }

    pub fn decode(path: &str, err: impl std::fmt::Display) -> Self {
        Self::Decode { path: path.to_owned(), message: err.to_string() }
    }

    /// Whether this error belongs to the transport tier (no valid response
    /// was obtained from the server).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Decode { .. })
    }
}
