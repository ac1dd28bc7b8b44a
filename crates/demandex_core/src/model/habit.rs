//! Health habit record with append-only check-in history.

use crate::model::{epoch_ms_now, Record, RecordId, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recurring health habit, e.g. "morning walk".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: RecordId,
    pub name: String,
    /// How many check-ins per week the user is aiming for, 1..=7.
    pub target_per_week: u8,
    /// Append-only day stamps in epoch milliseconds, non-decreasing.
    #[serde(default)]
    pub checkins: Vec<i64>,
    pub created_at: i64,
}

impl Habit {
    /// Creates a habit with a generated id and empty history.
    pub fn new(name: impl Into<String>, target_per_week: u8) -> Self {
        Self::with_id(Uuid::new_v4(), name, target_per_week, epoch_ms_now())
    }

    /// Creates a habit with caller-provided identity.
    pub fn with_id(
        id: RecordId,
        name: impl Into<String>,
        target_per_week: u8,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            target_per_week,
            checkins: Vec::new(),
            created_at,
        }
    }

    /// Appends one check-in stamp; ordering is enforced by `validate`.
    pub fn push_checkin(&mut self, day_ms: i64) {
        self.checkins.push(day_ms);
    }

    /// Most recent check-in stamp, if any.
    pub fn last_checkin(&self) -> Option<i64> {
        self.checkins.last().copied()
    }
}

/// Partial update for [`Habit`]; the check-in history is append-only and
/// deliberately not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitPatch {
    pub name: Option<String>,
    pub target_per_week: Option<u8>,
}

impl Record for Habit {
    type Patch = HabitPatch;

    const COLLECTION: &'static str = "habits";

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply_patch(&mut self, patch: HabitPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(target_per_week) = patch.target_per_week {
            self.target_per_week = target_per_week;
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                record: "habit",
                field: "name",
            });
        }
        if !(1..=7).contains(&self.target_per_week) {
            return Err(ValidationError::TargetPerWeekOutOfRange(
                self.target_per_week,
            ));
        }
        for pair in self.checkins.windows(2) {
            if pair[1] < pair[0] {
                return Err(ValidationError::CheckinsOutOfOrder {
                    previous: pair[0],
                    next: pair[1],
                });
            }
        }
        Ok(())
    }
}
