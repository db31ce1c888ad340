// Alert state shared by login and form-submit flows
//
// Purely a data contract between validation outcomes and whatever
// renders them; the only operations are replace-and-show and hide.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    pub visible: bool,
}

impl Alert {
    /// Hidden placeholder, the state before any outcome has been reported
    pub fn hidden() -> Self {
        Self {
            kind: AlertKind::Info,
            message: String::new(),
            visible: false,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::show(AlertKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::show(AlertKind::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::show(AlertKind::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::show(AlertKind::Info, message)
    }

    fn show(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            visible: true,
        }
    }

    /// Replace the current alert with a new visible one
    pub fn replace(&mut self, kind: AlertKind, message: impl Into<String>) {
        *self = Self::show(kind, message);
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

impl Default for Alert {
    fn default() -> Self {
        Self::hidden()
    }
}
