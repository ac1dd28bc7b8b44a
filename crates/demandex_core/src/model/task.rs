//! Productivity task record.

use crate::model::{epoch_ms_now, Record, RecordId, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created but not started.
    Todo,
    /// Work is in progress.
    InProgress,
    /// Completed successfully.
    Done,
    /// No longer actionable.
    Cancelled,
}

/// One productivity task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: TaskStatus,
    /// Optional due date in epoch milliseconds; never before `created_at`.
    #[serde(default)]
    pub due_at: Option<i64>,
    pub created_at: i64,
}

impl TaskItem {
    /// Creates a task in `Todo` state with a generated id.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, epoch_ms_now())
    }

    /// Creates a task with caller-provided identity.
    pub fn with_id(id: RecordId, title: impl Into<String>, created_at: i64) -> Self {
        Self {
            id,
            title: title.into(),
            notes: None,
            status: TaskStatus::Todo,
            due_at: None,
            created_at,
        }
    }

    /// Whether this task still needs work.
    pub fn is_open(&self) -> bool {
        matches!(self.status, TaskStatus::Todo | TaskStatus::InProgress)
    }
}

/// Partial update for [`TaskItem`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub notes: Option<Option<String>>,
    pub status: Option<TaskStatus>,
    pub due_at: Option<Option<i64>>,
}

impl Record for TaskItem {
    type Patch = TaskPatch;

    const COLLECTION: &'static str = "tasks";

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply_patch(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(due_at) = patch.due_at {
            self.due_at = due_at;
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                record: "task",
                field: "title",
            });
        }
        if let Some(due_at) = self.due_at {
            if due_at < self.created_at {
                return Err(ValidationError::DueBeforeCreation {
                    due_at,
                    created_at: self.created_at,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{TaskItem, TaskPatch, TaskStatus};
    use crate::model::{Record, ValidationError};

    #[test]
    fn new_task_starts_as_todo() {
        let task = TaskItem::new("File taxes");
        assert_eq!(task.status, TaskStatus::Todo);
        assert!(task.is_open());
        assert!(task.due_at.is_none());
    }

    #[test]
    fn done_and_cancelled_are_closed() {
        let mut task = TaskItem::new("Inbox zero");
        task.status = TaskStatus::Done;
        assert!(!task.is_open());
        task.status = TaskStatus::Cancelled;
        assert!(!task.is_open());
    }

    #[test]
    fn due_date_cannot_precede_creation() {
        let mut task = TaskItem::new("Renew passport");
        task.apply_patch(TaskPatch {
            due_at: Some(Some(task.created_at - 1)),
            ..TaskPatch::default()
        });
        assert!(matches!(
            task.validate(),
            Err(ValidationError::DueBeforeCreation { .. })
        ));
    }
}
