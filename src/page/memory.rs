//! In-memory document model.
//!
//! Elements are keyed by id and carry a text slot plus an optional input
//! value. Notifications live in per-container lists with the newest first.
//! Time only moves when `advance` is called, which fires any dismiss timers
//! that have come due.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use super::Page;
use crate::error::CartError;
use crate::notification::{Notification, NotificationId};

#[derive(Clone, Debug, Default)]
struct ElementState {
    text: String,
    value: Option<String>,
}

#[derive(Clone, Debug)]
struct ShownNotification {
    id: NotificationId,
    container: String,
    notification: Notification,
}

#[derive(Debug)]
struct Document {
    elements: HashMap<String, ElementState>,
    containers: Vec<String>,
    /// Newest first, across all containers.
    notifications: Vec<ShownNotification>,
    timers: Vec<(Duration, NotificationId)>,
    now: Duration,
    next_id: u64,
    reloads: usize,
    confirm_answer: bool,
    prompts: Vec<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            elements: HashMap::new(),
            containers: vec!["main".to_owned()],
            notifications: Vec::new(),
            timers: Vec::new(),
            now: Duration::ZERO,
            next_id: 1,
            reloads: 0,
            confirm_answer: true,
            prompts: Vec::new(),
        }
    }
}

impl Document {
    fn remove_notification(&mut self, id: NotificationId) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }
}

/// A page that exists only in memory. Starts with a `main` container and a
/// confirm prompt that answers yes.
#[derive(Debug, Default)]
pub struct MemoryPage {
    doc: RefCell<Document>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty element.
    #[must_use]
    pub fn with_element(self, id: &str) -> Self {
        self.doc.borrow_mut().elements.entry(id.to_owned()).or_default();
        self
    }

    /// Add an element with text content.
    #[must_use]
    pub fn with_text(self, id: &str, text: &str) -> Self {
        self.doc.borrow_mut().elements.entry(id.to_owned()).or_default().text = text.to_owned();
        self
    }

    /// Add an input element holding `value`.
    #[must_use]
    pub fn with_input(self, id: &str, value: &str) -> Self {
        self.doc.borrow_mut().elements.entry(id.to_owned()).or_default().value = Some(value.to_owned());
        self
    }

    /// Register another notification container selector.
    #[must_use]
    pub fn with_container(self, selector: &str) -> Self {
        self.doc.borrow_mut().containers.push(selector.to_owned());
        self
    }

    /// Drop every container, including the default `main`.
    #[must_use]
    pub fn without_containers(self) -> Self {
        self.doc.borrow_mut().containers.clear();
        self
    }

    /// Answer every confirm prompt with `answer`.
    #[must_use]
    pub fn with_confirm(self, answer: bool) -> Self {
        self.set_confirm(answer);
        self
    }

    pub fn set_confirm(&self, answer: bool) {
        self.doc.borrow_mut().confirm_answer = answer;
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.doc.borrow().elements.get(id).map(|e| e.text.clone())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.doc.borrow().elements.contains_key(id)
    }

    /// Visible notifications in document order (first child first).
    pub fn notifications(&self) -> Vec<Notification> {
        self.doc
            .borrow()
            .notifications
            .iter()
            .map(|n| n.notification.clone())
            .collect()
    }

    /// Visible notifications inside `container`, first child first.
    pub fn notifications_in(&self, container: &str) -> Vec<Notification> {
        self.doc
            .borrow()
            .notifications
            .iter()
            .filter(|n| n.container == container)
            .map(|n| n.notification.clone())
            .collect()
    }

    pub fn is_visible(&self, id: NotificationId) -> bool {
        self.doc.borrow().notifications.iter().any(|n| n.id == id)
    }

    pub fn reload_count(&self) -> usize {
        self.doc.borrow().reloads
    }

    /// Every confirm prompt shown so far.
    pub fn prompts(&self) -> Vec<String> {
        self.doc.borrow().prompts.clone()
    }

    pub fn now(&self) -> Duration {
        self.doc.borrow().now
    }

    /// Move the clock forward and fire dismiss timers that are now due.
    pub fn advance(&self, by: Duration) {
        let mut doc = self.doc.borrow_mut();
        doc.now += by;
        let now = doc.now;

        let (due, pending): (Vec<_>, Vec<_>) = doc.timers.drain(..).partition(|(deadline, _)| *deadline <= now);
        doc.timers = pending;
        for (_, id) in due {
            doc.remove_notification(id);
        }
    }
}

impl Page for MemoryPage {
    fn set_text(&self, element_id: &str, text: &str) -> Result<(), CartError> {
        let mut doc = self.doc.borrow_mut();
        let element = doc
            .elements
            .get_mut(element_id)
            .ok_or_else(|| CartError::MissingElement(element_id.to_owned()))?;
        element.text = text.to_owned();
        Ok(())
    }

    fn input_value(&self, element_id: &str) -> Option<String> {
        self.doc.borrow().elements.get(element_id)?.value.clone()
    }

    fn set_input_value(&self, element_id: &str, value: &str) -> Result<(), CartError> {
        let mut doc = self.doc.borrow_mut();
        match doc.elements.get_mut(element_id) {
            Some(element) if element.value.is_some() => {
                element.value = Some(value.to_owned());
                Ok(())
            }
            _ => Err(CartError::MissingElement(element_id.to_owned())),
        }
    }

    fn remove_element(&self, element_id: &str) -> bool {
        self.doc.borrow_mut().elements.remove(element_id).is_some()
    }

    fn show_notification(&self, container: &str, notification: &Notification) -> Result<NotificationId, CartError> {
        let mut doc = self.doc.borrow_mut();
        if !doc.containers.iter().any(|c| c == container) {
            return Err(CartError::MissingElement(container.to_owned()));
        }
        let id = NotificationId(doc.next_id);
        doc.next_id += 1;
        doc.notifications.insert(
            0,
            ShownNotification { id, container: container.to_owned(), notification: notification.clone() },
        );
        Ok(id)
    }

    fn dismiss_notification(&self, id: NotificationId) -> bool {
        self.doc.borrow_mut().remove_notification(id)
    }

    fn schedule_dismiss(&self, id: NotificationId, after: Duration) {
        let mut doc = self.doc.borrow_mut();
        let deadline = doc.now + after;
        doc.timers.push((deadline, id));
    }

    fn confirm(&self, prompt: &str) -> bool {
        let mut doc = self.doc.borrow_mut();
        doc.prompts.push(prompt.to_owned());
        doc.confirm_answer
    }

    fn reload(&self) {
        self.doc.borrow_mut().reloads += 1;
    }
}
