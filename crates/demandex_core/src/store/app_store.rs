//! Owned application state container with write-through persistence.
//!
//! # Responsibility
//! - Hold every domain collection plus settings as one owned value.
//! - Snapshot the full state to the durable slot after each mutation.
//!
//! # Invariants
//! - Every mutating operation attempts a write-through before returning.
//! - A failed write-through keeps the in-memory mutation and surfaces
//!   `StoreError::Storage`; retrying is the caller's decision.
//! - Opening never fails: unreadable snapshots restore to the default.
//!
//! # See also
//! - docs/architecture/persistence.md

use super::{Collection, StoreError, StoreResult};
use crate::model::goal::{Goal, GoalPatch};
use crate::model::habit::{Habit, HabitPatch};
use crate::model::notification::{Notification, NotificationPatch};
use crate::model::settings::{Settings, SettingsPatch};
use crate::model::task::{TaskItem, TaskPatch};
use crate::model::transaction::{Transaction, TransactionPatch};
use crate::model::{Record, RecordId};
use crate::persist::{Snapshot, SnapshotSlot, SNAPSHOT_SCHEMA_VERSION};
use log::{info, warn};

/// Single source of truth for all DemandeX collections.
///
/// The store is owned and passed explicitly to whoever needs it; there is
/// no ambient global state. All access is synchronous through `&`/`&mut`.
pub struct AppStore<S: SnapshotSlot> {
    slot: S,
    initialized: bool,
    settings: Settings,
    goals: Collection<Goal>,
    notifications: Collection<Notification>,
    transactions: Collection<Transaction>,
    tasks: Collection<TaskItem>,
    habits: Collection<Habit>,
}

impl<S: SnapshotSlot> AppStore<S> {
    /// Opens the store, restoring the previous snapshot when one exists.
    ///
    /// Restore is lenient: a missing, corrupt, or unsupported snapshot
    /// starts the store from the empty default, and individually invalid
    /// records are skipped rather than failing the whole restore.
    pub fn open(slot: S) -> Self {
        let loaded = slot.load();
        let restored = loaded.is_some();
        let snapshot = loaded.unwrap_or_default();

        let settings = match snapshot.settings.validate() {
            Ok(()) => snapshot.settings,
            Err(err) => {
                warn!("event=store_open status=warn error_code=invalid_settings error={err}");
                Settings::default()
            }
        };

        let store = Self {
            slot,
            initialized: true,
            settings,
            goals: Collection::restore(snapshot.goals),
            notifications: Collection::restore(snapshot.notifications),
            transactions: Collection::restore(snapshot.transactions),
            tasks: Collection::restore(snapshot.tasks),
            habits: Collection::restore(snapshot.habits),
        };

        info!(
            "event=store_open status=ok restored={restored} goals={} notifications={} transactions={} tasks={} habits={}",
            store.goals.len(),
            store.notifications.len(),
            store.transactions.len(),
            store.tasks.len(),
            store.habits.len()
        );

        store
    }

    /// Serializes the full current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            initialized: self.initialized,
            settings: self.settings.clone(),
            goals: self.goals.records().to_vec(),
            notifications: self.notifications.records().to_vec(),
            transactions: self.transactions.records().to_vec(),
            tasks: self.tasks.records().to_vec(),
            habits: self.habits.records().to_vec(),
        }
    }

    /// Read access to the underlying slot (test observability).
    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// First-run marker carried in the snapshot.
    pub fn initialized(&self) -> bool {
        self.initialized
    }

    fn persist(&mut self) -> StoreResult<()> {
        let snapshot = self.snapshot();
        self.slot.save(&snapshot).map_err(StoreError::Storage)
    }

    // --- settings ---------------------------------------------------------

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Merges a settings patch; the merged result must validate.
    pub fn update_settings(&mut self, patch: SettingsPatch) -> StoreResult<()> {
        let mut next = self.settings.clone();
        next.apply_patch(patch);
        next.validate()?;
        self.settings = next;
        self.persist()
    }

    // --- goals ------------------------------------------------------------

    pub fn goals(&self) -> &Collection<Goal> {
        &self.goals
    }

    pub fn add_goal(&mut self, goal: Goal) -> StoreResult<()> {
        self.goals.add(goal)?;
        self.persist()
    }

    pub fn update_goal(&mut self, id: RecordId, patch: GoalPatch) -> StoreResult<()> {
        self.goals.update(id, patch)?;
        self.persist()
    }

    pub fn remove_goal(&mut self, id: RecordId) -> StoreResult<Goal> {
        let removed = self.goals.remove(id)?;
        self.persist()?;
        Ok(removed)
    }

    pub(crate) fn amend_goal(
        &mut self,
        id: RecordId,
        change: impl FnOnce(&mut Goal),
    ) -> StoreResult<()> {
        self.goals.amend(id, change)?;
        self.persist()
    }

    // --- notifications ----------------------------------------------------

    pub fn notifications(&self) -> &Collection<Notification> {
        &self.notifications
    }

    pub fn add_notification(&mut self, notification: Notification) -> StoreResult<()> {
        self.notifications.add(notification)?;
        self.persist()
    }

    pub fn update_notification(
        &mut self,
        id: RecordId,
        patch: NotificationPatch,
    ) -> StoreResult<()> {
        self.notifications.update(id, patch)?;
        self.persist()
    }

    pub fn remove_notification(&mut self, id: RecordId) -> StoreResult<Notification> {
        let removed = self.notifications.remove(id)?;
        self.persist()?;
        Ok(removed)
    }

    /// Removes every notification in one write-through.
    pub fn clear_notifications(&mut self) -> StoreResult<()> {
        self.notifications.clear();
        self.persist()
    }

    pub(crate) fn amend_each_notification(
        &mut self,
        change: impl Fn(&mut Notification),
    ) -> StoreResult<()> {
        let ids: Vec<RecordId> = self.notifications.iter().map(Record::id).collect();
        for id in ids {
            self.notifications.amend(id, &change)?;
        }
        self.persist()
    }

    // --- transactions -----------------------------------------------------

    pub fn transactions(&self) -> &Collection<Transaction> {
        &self.transactions
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> StoreResult<()> {
        self.transactions.add(transaction)?;
        self.persist()
    }

    pub fn update_transaction(
        &mut self,
        id: RecordId,
        patch: TransactionPatch,
    ) -> StoreResult<()> {
        self.transactions.update(id, patch)?;
        self.persist()
    }

    pub fn remove_transaction(&mut self, id: RecordId) -> StoreResult<Transaction> {
        let removed = self.transactions.remove(id)?;
        self.persist()?;
        Ok(removed)
    }

    // --- tasks ------------------------------------------------------------

    pub fn tasks(&self) -> &Collection<TaskItem> {
        &self.tasks
    }

    pub fn add_task(&mut self, task: TaskItem) -> StoreResult<()> {
        self.tasks.add(task)?;
        self.persist()
    }

    pub fn update_task(&mut self, id: RecordId, patch: TaskPatch) -> StoreResult<()> {
        self.tasks.update(id, patch)?;
        self.persist()
    }

    pub fn remove_task(&mut self, id: RecordId) -> StoreResult<TaskItem> {
        let removed = self.tasks.remove(id)?;
        self.persist()?;
        Ok(removed)
    }

    // --- habits -----------------------------------------------------------

    pub fn habits(&self) -> &Collection<Habit> {
        &self.habits
    }

    pub fn add_habit(&mut self, habit: Habit) -> StoreResult<()> {
        self.habits.add(habit)?;
        self.persist()
    }

    pub fn update_habit(&mut self, id: RecordId, patch: HabitPatch) -> StoreResult<()> {
        self.habits.update(id, patch)?;
        self.persist()
    }

    pub fn remove_habit(&mut self, id: RecordId) -> StoreResult<Habit> {
        let removed = self.habits.remove(id)?;
        self.persist()?;
        Ok(removed)
    }

    pub(crate) fn amend_habit(
        &mut self,
        id: RecordId,
        change: impl FnOnce(&mut Habit),
    ) -> StoreResult<()> {
        self.habits.amend(id, change)?;
        self.persist()
    }
}
