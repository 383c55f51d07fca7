//! Cart UI controller: the request/response handlers behind the cart page.
//!
//! DESIGN
//! ======
//! The controller owns a transport and a page and holds no cart state of its
//! own; the page is the only copy. After an add the count is re-fetched;
//! after an update or remove the page is resynchronized according to
//! `CartConfig::sync` (a full reload by default). The count refresh is a
//! separate request and always runs after the page has been patched, so a
//! slow count endpoint never holds back the notification, row removal, or
//! reload.
//!
//! Operations are plain `async fn`s returning a `CartOutcome`, so callers and
//! tests can await a typed result instead of inspecting side effects.
//! Nothing serializes overlapping calls: two adds for the same product both
//! go out and whichever response lands last decides the page.
//!
//! ERROR HANDLING
//! ==============
//! - `success: false` from the server: danger notification with the server's
//!   message, no structural change.
//! - no valid response (network, non-JSON body): logged, fixed fallback
//!   danger notification from `CartConfig::messages`.
//! - count refresh: logged only.
//!
//! Nothing is retried.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::{CartConfig, SyncStrategy};
use crate::error::CartError;
use crate::net::CartTransport;
use crate::net::types::{CartCountResponse, MutationRequest, MutationResponse, decode_body, parse_quantity};
use crate::notification::{Notification, NotificationId};
use crate::page::Page;

/// Result of an add/update/remove.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartOutcome {
    /// The server accepted the change.
    Applied(MutationResponse),
    /// The server answered `success: false` with this message.
    Rejected(String),
    /// No valid response was obtained.
    Failed(CartError),
    /// The user declined the confirmation prompt; nothing was sent.
    Declined,
}

impl CartOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Field values of a submitted quantity form, as raw strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuantityForm {
    pub product_id: String,
    pub cantidad: String,
}

#[derive(Debug)]
pub struct CartController<T, P> {
    transport: T,
    page: P,
    config: CartConfig,
}

impl<T: CartTransport, P: Page> CartController<T, P> {
    pub fn new(transport: T, page: P, config: CartConfig) -> Self {
        Self { transport, page, config }
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Page-ready work that does not need the browser: one count refresh.
    /// Form binding happens in the browser boot code.
    pub async fn initialize(&self) {
        // Failure is already logged and leaves the count as rendered.
        let _ = self.refresh_count().await;
    }

    /// Fetch the cart count and write it into the count element.
    ///
    /// On failure the displayed count is left unchanged and the error is
    /// logged; no notification is shown.
    ///
    /// # Errors
    ///
    /// Returns the transport, decode, or missing-element error.
    pub async fn refresh_count(&self) -> Result<u32, CartError> {
        let result = self.fetch_count().await;
        match &result {
            Ok(count) => log::debug!("cart count is {count}"),
            Err(e) => log::error!("cart count refresh failed: {e}"),
        }
        result
    }

    async fn fetch_count(&self) -> Result<u32, CartError> {
        let path = &self.config.endpoints.cart_count;
        let body = self.transport.get(path).await?;
        let resp: CartCountResponse = decode_body(path, &body)?;
        self.page.set_text(&self.config.elements.count, &resp.count.to_string())?;
        Ok(resp.count)
    }

    async fn submit(&self, path: &str, request: &MutationRequest) -> Result<MutationResponse, CartError> {
        let body = self.transport.post_form(path, &request.form_fields()).await?;
        decode_body(path, &body)
    }

    /// Add `cantidad` of `product_id` to the cart.
    ///
    /// The quantity is sent as given; use [`DEFAULT_QUANTITY`] when the
    /// caller has none.
    ///
    /// [`DEFAULT_QUANTITY`]: crate::net::types::DEFAULT_QUANTITY
    pub async fn add_to_cart(&self, product_id: &str, cantidad: u32) -> CartOutcome {
        let request = MutationRequest::with_quantity(product_id, cantidad);
        match self.submit(&self.config.endpoints.add, &request).await {
            Ok(resp) if resp.success => {
                self.notify(Notification::success(resp.message.clone()));
                let _ = self.refresh_count().await;
                CartOutcome::Applied(resp)
            }
            Ok(resp) => self.rejected(resp),
            Err(e) => self.failed(e, &self.config.messages.add_failed),
        }
    }

    /// Set the quantity of `product_id` to `cantidad`.
    pub async fn update_cart_item(&self, product_id: &str, cantidad: u32) -> CartOutcome {
        let request = MutationRequest::with_quantity(product_id, cantidad);
        match self.submit(&self.config.endpoints.update, &request).await {
            Ok(resp) if resp.success => {
                self.resync();
                let _ = self.refresh_count().await;
                CartOutcome::Applied(resp)
            }
            Ok(resp) => self.rejected(resp),
            Err(e) => self.failed(e, &self.config.messages.update_failed),
        }
    }

    /// Remove `product_id` from the cart after the user confirms.
    pub async fn remove_from_cart(&self, product_id: &str) -> CartOutcome {
        if !self.page.confirm(&self.config.messages.confirm_remove) {
            log::debug!("remove of {product_id} declined");
            return CartOutcome::Declined;
        }

        let request = MutationRequest::product_only(product_id);
        match self.submit(&self.config.endpoints.remove, &request).await {
            Ok(resp) if resp.success => {
                self.notify(Notification::success(resp.message.clone()));

                let row = self.config.elements.row_id(product_id);
                if !self.page.remove_element(&row) {
                    log::warn!("cart row {row} not on page");
                }
                if let Some(remaining) = resp.cart_count {
                    log::debug!("cart holds {remaining} items after remove");
                }
                // Empty or not, totals are server-rendered.
                self.resync();
                let _ = self.refresh_count().await;
                CartOutcome::Applied(resp)
            }
            Ok(resp) => self.rejected(resp),
            Err(e) => self.failed(e, &self.config.messages.remove_failed),
        }
    }

    /// Handle a submitted quantity form as an add.
    ///
    /// Returns `None` without sending anything when `cantidad` holds no
    /// integer.
    pub async fn submit_quantity_form(&self, form: QuantityForm) -> Option<CartOutcome> {
        let Some(cantidad) = parse_quantity(&form.cantidad) else {
            log::warn!("quantity form for {} has no integer quantity: {:?}", form.product_id, form.cantidad);
            return None;
        };
        Some(self.add_to_cart(&form.product_id, cantidad).await)
    }

    /// Show a notification and schedule its removal.
    ///
    /// Returns `None` if the notification container is not on the page.
    pub fn notify(&self, notification: Notification) -> Option<NotificationId> {
        match self
            .page
            .show_notification(&self.config.elements.notification_container, &notification)
        {
            Ok(id) => {
                self.page.schedule_dismiss(id, self.config.notification_timeout);
                Some(id)
            }
            Err(e) => {
                log::warn!("notification not shown ({}): {e}", notification.message);
                None
            }
        }
    }

    fn rejected(&self, resp: MutationResponse) -> CartOutcome {
        self.notify(Notification::danger(resp.message.clone()));
        CartOutcome::Rejected(resp.message)
    }

    fn failed(&self, err: CartError, fallback: &str) -> CartOutcome {
        log::error!("cart request failed: {err}");
        self.notify(Notification::danger(fallback));
        CartOutcome::Failed(err)
    }

    fn resync(&self) {
        match self.config.sync {
            SyncStrategy::Reload => self.page.reload(),
            SyncStrategy::Patch => log::debug!("page patched in place, no reload"),
        }
    }
}
