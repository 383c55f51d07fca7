//! The page surface the controller reads and patches.
//!
//! DESIGN
//! ======
//! `Page` is the whole DOM contract in one trait: a text slot for the count,
//! quantity inputs, removable rows, a notification container, the blocking
//! confirm prompt, reload, and the auto-dismiss timer. `DomPage` backs it with
//! `web-sys` in the browser; the test-only `MemoryPage` is an in-memory
//! document with a virtual clock.
//!
//! Methods take `&self`. The page is only touched from the single event-loop
//! thread, so implementations use `RefCell`/`Cell` internally.

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(test)]
pub mod memory;

use std::time::Duration;

use crate::error::CartError;
use crate::notification::{Notification, NotificationId};

#[cfg(test)]
pub use memory::MemoryPage;

pub trait Page {
    /// Replace the text content of element `element_id`.
    fn set_text(&self, element_id: &str, text: &str) -> Result<(), CartError>;

    /// Current value of input `element_id`, or `None` if there is no such input.
    fn input_value(&self, element_id: &str) -> Option<String>;

    /// Overwrite the value of input `element_id`.
    fn set_input_value(&self, element_id: &str, value: &str) -> Result<(), CartError>;

    /// Remove element `element_id`. Returns `false` if it was not present.
    fn remove_element(&self, element_id: &str) -> bool;

    /// Insert `notification` as the first child of `container`.
    fn show_notification(&self, container: &str, notification: &Notification) -> Result<NotificationId, CartError>;

    /// Remove a notification now. Returns `false` if it was already gone.
    fn dismiss_notification(&self, id: NotificationId) -> bool;

    /// Arrange for `id` to be dismissed once `after` has elapsed.
    fn schedule_dismiss(&self, id: NotificationId, after: Duration);

    /// Blocking yes/no prompt.
    fn confirm(&self, prompt: &str) -> bool;

    /// Reload the whole page.
    fn reload(&self);
}
