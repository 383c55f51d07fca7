//! Transient outcome notifications.
//!
//! A notification is either visible or removed. It is removed by the user
//! (close button) or by a timer scheduled when it is shown, whichever comes
//! first; the later of the two is a no-op.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

/// Visual severity, mapped onto Bootstrap alert classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Danger,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self { message: message.into(), severity }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Danger)
    }

    /// Class attribute of the rendered alert element.
    pub fn class_name(&self) -> String {
        format!("alert alert-{} alert-dismissible fade show", self.severity.as_str())
    }
}

/// Handle to a notification currently (or formerly) on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);
