//! Browser page over `web-sys`.
//!
//! Notifications are Bootstrap alerts: the close button is wired by
//! Bootstrap itself (`data-bs-dismiss`), so an alert can leave the DOM without
//! this module noticing. Every removal path therefore checks for a parent
//! before calling `remove()`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, Window};

use super::Page;
use crate::error::CartError;
use crate::notification::{Notification, NotificationId};

type ShownAlerts = Rc<RefCell<HashMap<NotificationId, Element>>>;

#[derive(Debug)]
pub struct DomPage {
    window: Window,
    document: Document,
    shown: ShownAlerts,
    next_id: Cell<u64>,
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn detach(alert: &Element) -> bool {
    if alert.parent_element().is_some() {
        alert.remove();
        true
    } else {
        false
    }
}

impl DomPage {
    /// Bind to the current window's document.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::MissingElement`] outside a browser window.
    pub fn new() -> Result<Self, CartError> {
        let window = web_sys::window().ok_or_else(|| CartError::MissingElement("window".to_owned()))?;
        let document = window
            .document()
            .ok_or_else(|| CartError::MissingElement("document".to_owned()))?;
        Ok(Self { window, document, shown: Rc::new(RefCell::new(HashMap::new())), next_id: Cell::new(1) })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, id: &str) -> Result<Element, CartError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| CartError::MissingElement(id.to_owned()))
    }

    fn input(&self, id: &str) -> Option<HtmlInputElement> {
        self.document.get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()
    }

    /// Every form matching `selector`.
    pub fn forms(&self, selector: &str) -> Vec<HtmlFormElement> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            log::warn!("invalid form selector: {selector}");
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<HtmlFormElement>().ok())
            .collect()
    }

    fn render_alert(&self, notification: &Notification) -> Result<Element, JsValue> {
        let alert = self.document.create_element("div")?;
        alert.set_class_name(&notification.class_name());
        alert.set_attribute("role", "alert")?;
        alert.set_text_content(Some(&notification.message));

        let close = self.document.create_element("button")?;
        close.set_attribute("type", "button")?;
        close.set_class_name("btn-close");
        close.set_attribute("data-bs-dismiss", "alert")?;
        close.set_attribute("aria-label", "Close")?;
        alert.append_child(&close)?;
        Ok(alert)
    }
}

impl Page for DomPage {
    fn set_text(&self, element_id: &str, text: &str) -> Result<(), CartError> {
        self.element(element_id)?.set_text_content(Some(text));
        Ok(())
    }

    fn input_value(&self, element_id: &str) -> Option<String> {
        self.input(element_id).map(|input| input.value())
    }

    fn set_input_value(&self, element_id: &str, value: &str) -> Result<(), CartError> {
        let input = self
            .input(element_id)
            .ok_or_else(|| CartError::MissingElement(element_id.to_owned()))?;
        input.set_value(value);
        Ok(())
    }

    fn remove_element(&self, element_id: &str) -> bool {
        match self.document.get_element_by_id(element_id) {
            Some(element) => {
                element.remove();
                true
            }
            None => false,
        }
    }

    fn show_notification(&self, container: &str, notification: &Notification) -> Result<NotificationId, CartError> {
        let parent = self
            .document
            .query_selector(container)
            .ok()
            .flatten()
            .ok_or_else(|| CartError::MissingElement(container.to_owned()))?;
        let alert = self
            .render_alert(notification)
            .map_err(|e| CartError::MissingElement(format!("{container}: {}", js_error(&e))))?;
        parent
            .insert_before(&alert, parent.first_child().as_ref())
            .map_err(|e| CartError::MissingElement(format!("{container}: {}", js_error(&e))))?;

        let id = NotificationId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.shown.borrow_mut().insert(id, alert);
        Ok(id)
    }

    fn dismiss_notification(&self, id: NotificationId) -> bool {
        self.shown.borrow_mut().remove(&id).is_some_and(|alert| detach(&alert))
    }

    fn schedule_dismiss(&self, id: NotificationId, after: Duration) {
        let shown = Rc::clone(&self.shown);
        let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || {
            if let Some(alert) = shown.borrow_mut().remove(&id) {
                detach(&alert);
            }
        })
        .forget();
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.window.confirm_with_message(prompt).unwrap_or(false)
    }

    fn reload(&self) {
        if let Err(e) = self.window.location().reload() {
            log::error!("page reload failed: {}", js_error(&e));
        }
    }
}
