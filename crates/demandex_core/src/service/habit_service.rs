//! Health habit use-case service.
//!
//! # Invariants
//! - Check-in history is append-only; a stamp earlier than the last
//!   recorded one is rejected before anything is written.

use crate::model::habit::{Habit, HabitPatch};
use crate::model::RecordId;
use crate::persist::SnapshotSlot;
use crate::store::{AppStore, StoreResult};

/// Input for creating a habit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHabit {
    pub name: String,
    /// Weekly check-in target, 1..=7.
    pub target_per_week: u8,
}

/// Habit service facade over the application store.
pub struct HabitService<'a, S: SnapshotSlot> {
    store: &'a mut AppStore<S>,
}

impl<'a, S: SnapshotSlot> HabitService<'a, S> {
    pub fn new(store: &'a mut AppStore<S>) -> Self {
        Self { store }
    }

    /// Creates a habit with an empty check-in history.
    pub fn create(&mut self, request: NewHabit) -> StoreResult<Habit> {
        let habit = Habit::new(request.name, request.target_per_week);
        self.store.add_habit(habit.clone())?;
        Ok(habit)
    }

    /// Merges a partial update into an existing habit.
    pub fn edit(&mut self, id: RecordId, patch: HabitPatch) -> StoreResult<()> {
        self.store.update_habit(id, patch)
    }

    /// Appends one check-in stamp for the given day.
    ///
    /// Out-of-order stamps surface as a validation error and leave the
    /// history unchanged.
    pub fn check_in(&mut self, id: RecordId, day_ms: i64) -> StoreResult<()> {
        self.store
            .amend_habit(id, |habit| habit.push_checkin(day_ms))
    }

    /// Deletes a habit and returns the removed record.
    pub fn remove(&mut self, id: RecordId) -> StoreResult<Habit> {
        self.store.remove_habit(id)
    }

    /// All habits in insertion order.
    pub fn list(&self) -> Vec<Habit> {
        self.store.habits().list()
    }
}
