//! User-visible notification channel.

use std::fmt;

use serde::Deserialize;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Neutral information.
    #[default]
    Info,
    /// A completed action.
    Success,
    /// Something needs attention.
    Warning,
    /// Something failed.
    Error,
}

impl NotificationKind {
    /// Icon glyph name (Font Awesome suffix).
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "info-circle",
            Self::Success => "check-circle",
            Self::Warning => "exclamation-triangle",
            Self::Error => "times-circle",
        }
    }

    /// Background color as a CSS hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Info => "#2C72B7",
            Self::Success => "#28a745",
            Self::Warning => "#ffc107",
            Self::Error => "#dc3545",
        }
    }

    /// Lowercase name, used for CSS class suffixes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sink for toast/banner messages.
///
/// The controller only raises notifications; showing, sliding and
/// auto-dismissing them belongs to the implementation.
pub trait Notifier {
    /// Shows `message` with the given severity.
    fn notify(&mut self, message: &str, kind: NotificationKind);
}
