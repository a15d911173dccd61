use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Info => "notification-info",
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
            NotificationKind::Warning => "notification-warning",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
        };
        f.write_str(name)
    }
}

/// A transient toast message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Increases with every toast so a newer one is never hidden by the
    /// timer of an older one
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(id: u64, kind: NotificationKind, message: impl Into<String>) -> Self {
        Self { id, kind, message: message.into() }
    }

    pub fn class(&self) -> String {
        format!("notification {} show", self.kind.css_class())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_classes() {
        let toast = Notification::new(1, NotificationKind::Success, "Saved");
        assert_eq!(toast.class(), "notification notification-success show");
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
        assert_eq!(NotificationKind::Warning.to_string(), "warning");
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&NotificationKind::Error).unwrap(), r#""error""#);
    }
}
