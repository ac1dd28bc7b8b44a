//! Snapshot persistence for the record store.
//!
//! # Responsibility
//! - Define the serialized snapshot shape holding every collection.
//! - Define the durable-slot contract and its error taxonomy.
//!
//! # Invariants
//! - `load` never fails; a missing or unreadable snapshot degrades to
//!   "nothing restored", not an error.
//! - `save` replaces the whole slot atomically or not at all.
//!
//! # See also
//! - docs/architecture/persistence.md

use crate::model::goal::Goal;
use crate::model::habit::Habit;
use crate::model::notification::Notification;
use crate::model::settings::Settings;
use crate::model::task::TaskItem;
use crate::model::transaction::Transaction;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod slot;

pub use slot::{FileSlot, MemorySlot, SnapshotSlot};

/// Highest snapshot schema version this binary can read and write.
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Failure writing the durable slot.
#[derive(Debug)]
pub enum SnapshotError {
    /// The medium rejected the write for lack of space.
    QuotaExceeded { needed_bytes: u64 },
    /// Any other I/O failure on the underlying medium.
    Io(std::io::Error),
    /// Snapshot could not be serialized.
    Encode(serde_json::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QuotaExceeded { needed_bytes } => {
                write!(f, "storage quota exceeded writing {needed_bytes} bytes")
            }
            Self::Io(err) => write!(f, "snapshot i/o failure: {err}"),
            Self::Encode(err) => write!(f, "snapshot encode failure: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::QuotaExceeded { .. } => None,
            Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Full serialized state of the application store.
///
/// Record sequences preserve collection insertion order; restoring a
/// snapshot reproduces the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Schema version stamped at save time.
    pub schema_version: u32,
    /// First-run marker, set once the store has been opened.
    pub initialized: bool,
    pub settings: Settings,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub tasks: Vec<TaskItem>,
    #[serde(default)]
    pub habits: Vec<Habit>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            initialized: false,
            settings: Settings::default(),
            goals: Vec::new(),
            notifications: Vec::new(),
            transactions: Vec::new(),
            tasks: Vec::new(),
            habits: Vec::new(),
        }
    }
}

impl Snapshot {
    /// Whether this snapshot was produced by a schema this binary supports.
    pub fn is_supported(&self) -> bool {
        self.schema_version <= SNAPSHOT_SCHEMA_VERSION
    }
}
