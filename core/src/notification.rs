//! Transient user notifications.

use std::fmt;

/// Shown when files are submitted before a tool is picked.
pub const SELECT_TOOL_NOTICE: &str = "Please select a tool first";

/// Shown when a submission is attempted while another is outstanding.
pub const IN_FLIGHT_NOTICE: &str = "A conversion is already in progress";

/// Shown after a successful conversion.
pub const SUCCESS_NOTICE: &str = "File converted successfully!";

/// Fallback when the server reports failure without a message.
pub const CONVERSION_FAILED_NOTICE: &str = "Conversion failed";

/// Shown for network and decoding failures.
pub const TRANSPORT_FAILED_NOTICE: &str = "An error occurred";

/// Notification severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// Icon class for the toast.
    pub fn icon_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "fas fa-check-circle",
            NotificationKind::Error => "fas fa-exclamation-circle",
        }
    }

    /// CSS modifier class for the toast.
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
        }
    }
}

/// A transient, auto-dismissing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
