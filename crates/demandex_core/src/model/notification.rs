//! In-app notification record.

use crate::model::{epoch_ms_now, Record, RecordId, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity/intent bucket for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Neutral informational message.
    Info,
    /// Scheduled nudge (habit or task reminder).
    Reminder,
    /// Something needs attention now.
    Alert,
}

/// One entry in the notification center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: RecordId,
    pub kind: NotificationKind,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    /// Read state, toggled from the notification center.
    #[serde(default)]
    pub read: bool,
    pub created_at: i64,
}

impl Notification {
    /// Creates an unread notification with a generated id.
    pub fn new(kind: NotificationKind, title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), kind, title, epoch_ms_now())
    }

    /// Creates a notification with caller-provided identity.
    pub fn with_id(
        id: RecordId,
        kind: NotificationKind,
        title: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
            body: None,
            read: false,
            created_at,
        }
    }
}

/// Partial update for [`Notification`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationPatch {
    pub kind: Option<NotificationKind>,
    pub title: Option<String>,
    pub body: Option<Option<String>>,
    pub read: Option<bool>,
}

impl Record for Notification {
    type Patch = NotificationPatch;

    const COLLECTION: &'static str = "notifications";

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply_patch(&mut self, patch: NotificationPatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(read) = patch.read {
            self.read = read;
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                record: "notification",
                field: "title",
            });
        }
        Ok(())
    }
}
