//! Productivity task use-case service.

use crate::model::task::{TaskItem, TaskPatch, TaskStatus};
use crate::model::RecordId;
use crate::persist::SnapshotSlot;
use crate::store::{AppStore, StoreResult};

/// Input for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub notes: Option<String>,
    /// Optional due date in epoch milliseconds.
    pub due_at: Option<i64>,
}

/// Task service facade over the application store.
pub struct TaskService<'a, S: SnapshotSlot> {
    store: &'a mut AppStore<S>,
}

impl<'a, S: SnapshotSlot> TaskService<'a, S> {
    pub fn new(store: &'a mut AppStore<S>) -> Self {
        Self { store }
    }

    /// Creates a task in `Todo` state.
    pub fn create(&mut self, request: NewTask) -> StoreResult<TaskItem> {
        let mut task = TaskItem::new(request.title);
        task.notes = request.notes;
        task.due_at = request.due_at;

        self.store.add_task(task.clone())?;
        Ok(task)
    }

    /// Merges a partial update into an existing task.
    pub fn edit(&mut self, id: RecordId, patch: TaskPatch) -> StoreResult<()> {
        self.store.update_task(id, patch)
    }

    /// Moves a task to the given lifecycle state.
    pub fn set_status(&mut self, id: RecordId, status: TaskStatus) -> StoreResult<()> {
        self.edit(
            id,
            TaskPatch {
                status: Some(status),
                ..TaskPatch::default()
            },
        )
    }

    /// Deletes a task and returns the removed record.
    pub fn remove(&mut self, id: RecordId) -> StoreResult<TaskItem> {
        self.store.remove_task(id)
    }

    /// Tasks still needing work (`Todo` or `InProgress`), insertion order.
    pub fn open_tasks(&self) -> Vec<TaskItem> {
        self.store
            .tasks()
            .iter()
            .filter(|task| task.is_open())
            .cloned()
            .collect()
    }

    /// All tasks in insertion order.
    pub fn list(&self) -> Vec<TaskItem> {
        self.store.tasks().list()
    }
}
