//! A `Page` that renders to the terminal.
//!
//! Notifications and the count go to stdout, page effects that have no
//! terminal equivalent (row removal, reload) are reported on stderr, and the
//! confirm prompt reads a y/N answer from stdin unless pre-answered.

use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use cart_ui::{CartError, Notification, NotificationId, Page};

#[derive(Debug, Default)]
pub struct TerminalPage {
    assume_yes: bool,
    next_id: Cell<u64>,
    reloaded: Cell<bool>,
}

impl TerminalPage {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes, ..Self::default() }
    }

    pub fn reloaded(&self) -> bool {
        self.reloaded.get()
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes" | "s" | "si" | "sí")
}

impl Page for TerminalPage {
    fn set_text(&self, element_id: &str, text: &str) -> Result<(), CartError> {
        println!("{element_id}: {text}");
        Ok(())
    }

    fn input_value(&self, _element_id: &str) -> Option<String> {
        None
    }

    fn set_input_value(&self, element_id: &str, _value: &str) -> Result<(), CartError> {
        Err(CartError::MissingElement(element_id.to_owned()))
    }

    fn remove_element(&self, element_id: &str) -> bool {
        eprintln!("(removed {element_id})");
        true
    }

    fn show_notification(&self, _container: &str, notification: &Notification) -> Result<NotificationId, CartError> {
        println!("[{}] {}", notification.severity.as_str(), notification.message);
        let id = NotificationId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        Ok(id)
    }

    fn dismiss_notification(&self, _id: NotificationId) -> bool {
        false
    }

    fn schedule_dismiss(&self, _id: NotificationId, _after: Duration) {}

    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{prompt} [y/N] ");
        if io::stderr().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                tracing::warn!(error = %e, "could not read confirmation");
                false
            }
        }
    }

    fn reload(&self) {
        self.reloaded.set(true);
        eprintln!("(page reload)");
    }
}
