//! User-facing notifications
//!
//! A notification is a transient message with a success or error kind.
//! Views hold at most one at a time; a newer one replaces the older.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Visual intent of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A message raised by a dashboard action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Distinguishes two notifications that carry the same text
    pub id: Uuid,
    pub message: String,
    pub kind: NotificationKind,
    /// Server-provided or transport error text, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            detail: None,
            raised_at: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    /// Builder method: attach the underlying error text
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let ok = Notification::success("Asset submitted successfully");
        assert_eq!(ok.kind, NotificationKind::Success);
        assert!(!ok.is_error());
        assert!(ok.detail.is_none());

        let err = Notification::error("Failed to submit asset").with_detail("duplicate id");
        assert!(err.is_error());
        assert_eq!(err.detail.as_deref(), Some("duplicate id"));
        assert_ne!(ok.id, err.id);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&NotificationKind::Error).unwrap(),
            r#""error""#
        );
    }
}
