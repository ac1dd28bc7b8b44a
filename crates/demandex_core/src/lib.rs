//! Core domain logic for DemandeX.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod persist;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::goal::{Goal, GoalPatch};
pub use model::habit::{Habit, HabitPatch};
pub use model::notification::{Notification, NotificationKind, NotificationPatch};
pub use model::settings::{Settings, SettingsPatch};
pub use model::task::{TaskItem, TaskPatch, TaskStatus};
pub use model::transaction::{Transaction, TransactionKind, TransactionPatch};
pub use model::{epoch_ms_now, is_http_url, Record, RecordId, ValidationError};
pub use persist::{
    FileSlot, MemorySlot, Snapshot, SnapshotError, SnapshotSlot, SNAPSHOT_SCHEMA_VERSION,
};
pub use service::goal_service::{GoalService, GoalServiceError, NewGoal};
pub use service::habit_service::{HabitService, NewHabit};
pub use service::ledger_service::{LedgerService, LedgerTotals, NewTransaction};
pub use service::notification_service::NotificationService;
pub use service::task_service::{NewTask, TaskService};
pub use store::{AppStore, Collection, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
