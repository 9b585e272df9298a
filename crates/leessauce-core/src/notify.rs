//! Toast payloads handed to the UI.

use serde::Serialize;

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

impl Severity {
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Default => "toast--default",
            Severity::Destructive => "toast--destructive",
        }
    }
}

/// A user-facing `{ title, description, severity }` message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Destructive,
            ..Self::new(title, description)
        }
    }
}
