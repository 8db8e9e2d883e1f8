//! UI Events
//!
//! Events emitted from the state layer to the presentation layer for toasts
//! and re-render notifications. The store never calls UI code directly.

use std::sync::Arc;

use crate::states::Operation;

/// UI events for user feedback
#[derive(Clone, Debug, PartialEq)]
pub enum UIEvent {
    /// Display a toast notification
    Toast {
        /// Message to display
        message: Arc<str>,
        /// Affects styling and lifetime
        severity: NotificationSeverity,
    },

    /// Store state written by an operation; views should re-render
    StateChanged {
        /// Operation that wrote the state
        operation: Operation,
    },
}

impl UIEvent {
    pub fn success(message: impl Into<Arc<str>>) -> Self {
        UIEvent::Toast {
            message: message.into(),
            severity: NotificationSeverity::Success,
        }
    }

    pub fn error(message: impl Into<Arc<str>>) -> Self {
        UIEvent::Toast {
            message: message.into(),
            severity: NotificationSeverity::Error,
        }
    }

    pub fn info(message: impl Into<Arc<str>>) -> Self {
        UIEvent::Toast {
            message: message.into(),
            severity: NotificationSeverity::Info,
        }
    }
}

/// Severity level for UI notifications
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationSeverity {
    /// Informational message
    Info,
    /// Success message
    Success,
    /// Error message
    Error,
}

impl NotificationSeverity {
    /// Short tag for terminal rendering
    pub fn tag(self) -> &'static str {
        match self {
            NotificationSeverity::Info => "info",
            NotificationSeverity::Success => "ok",
            NotificationSeverity::Error => "error",
        }
    }
}
