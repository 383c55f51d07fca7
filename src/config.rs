//! Controller configuration: endpoint paths, page element ids, and the
//! user-facing fallback strings.
//!
//! DESIGN
//! ======
//! Everything the controller used to look up globally is passed in here, so
//! a test can point it at a `MemoryPage` with arbitrary ids. `Default`
//! matches the server-rendered cart templates; `from_env` lets native
//! front ends override endpoints and timing.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::error::CartError;

pub const DEFAULT_COUNT_PATH: &str = "/api/cart_count";
pub const DEFAULT_ADD_PATH: &str = "/add_to_cart";
pub const DEFAULT_UPDATE_PATH: &str = "/update_cart";
pub const DEFAULT_REMOVE_PATH: &str = "/remove_from_cart";
pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u64 = 5000;

/// Server endpoint paths, relative to the page origin (browser) or the
/// configured base URL (native).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub cart_count: String,
    pub add: String,
    pub update: String,
    pub remove: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            cart_count: DEFAULT_COUNT_PATH.to_owned(),
            add: DEFAULT_ADD_PATH.to_owned(),
            update: DEFAULT_UPDATE_PATH.to_owned(),
            remove: DEFAULT_REMOVE_PATH.to_owned(),
        }
    }
}

/// Ids and selectors of the page elements the controller touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    /// Element whose text content shows the cart count.
    pub count: String,
    /// Selector of the container notifications are prepended to.
    pub notification_container: String,
    /// Prefix of cart row ids; the product id is appended.
    pub row_prefix: String,
    /// Selector matching the quantity forms intercepted at boot.
    pub quantity_form: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            count: "cart-count".to_owned(),
            notification_container: "main".to_owned(),
            row_prefix: "cart-item-".to_owned(),
            quantity_form: ".quantity-form".to_owned(),
        }
    }
}

impl ElementIds {
    pub fn row_id(&self, product_id: &str) -> String {
        format!("{}{product_id}", self.row_prefix)
    }
}

/// Fixed strings shown when no server message is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub add_failed: String,
    pub update_failed: String,
    pub remove_failed: String,
    pub confirm_remove: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            add_failed: "Failed to add to cart".to_owned(),
            update_failed: "Failed to update cart".to_owned(),
            remove_failed: "Failed to remove from cart".to_owned(),
            confirm_remove: "Are you sure you want to remove this product from the cart?".to_owned(),
        }
    }
}

/// How the page is brought back in line with the server after an update or
/// remove succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncStrategy {
    /// Reload the whole page so server-rendered totals are recomputed.
    #[default]
    Reload,
    /// Patch the affected row in place and rely on the refreshed count.
    Patch,
}

impl SyncStrategy {
    fn parse(raw: &str) -> Result<Self, CartError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "reload" => Ok(Self::Reload),
            "patch" => Ok(Self::Patch),
            other => Err(CartError::Config(format!("unknown CART_SYNC value: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    pub endpoints: Endpoints,
    pub elements: ElementIds,
    pub messages: Messages,
    pub notification_timeout: Duration,
    pub sync: SyncStrategy,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            elements: ElementIds::default(),
            messages: Messages::default(),
            notification_timeout: Duration::from_millis(DEFAULT_NOTIFICATION_TIMEOUT_MS),
            sync: SyncStrategy::default(),
        }
    }
}

impl CartConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// Optional:
    /// - `CART_COUNT_PATH`, `CART_ADD_PATH`, `CART_UPDATE_PATH`, `CART_REMOVE_PATH`
    /// - `CART_NOTIFICATION_TIMEOUT_MS`: default 5000
    /// - `CART_SYNC`: `reload` (default) or `patch`
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Config`] if `CART_SYNC` names an unknown strategy.
    pub fn from_env() -> Result<Self, CartError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CartError> {
        let defaults = Endpoints::default();
        let endpoints = Endpoints {
            cart_count: lookup("CART_COUNT_PATH").unwrap_or(defaults.cart_count),
            add: lookup("CART_ADD_PATH").unwrap_or(defaults.add),
            update: lookup("CART_UPDATE_PATH").unwrap_or(defaults.update),
            remove: lookup("CART_REMOVE_PATH").unwrap_or(defaults.remove),
        };

        let timeout_ms = lookup("CART_NOTIFICATION_TIMEOUT_MS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_NOTIFICATION_TIMEOUT_MS);

        let sync = match lookup("CART_SYNC") {
            Some(raw) => SyncStrategy::parse(&raw)?,
            None => SyncStrategy::default(),
        };

        Ok(Self {
            endpoints,
            notification_timeout: Duration::from_millis(timeout_ms),
            sync,
            ..Self::default()
        })
    }
}
