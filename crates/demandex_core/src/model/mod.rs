//! Domain model for DemandeX collections.
//!
//! # Responsibility
//! - Define the canonical record types backing each feature area.
//! - Define patch types with explicit merge semantics for partial updates.
//!
//! # Invariants
//! - Every keyed record carries a stable `RecordId` that is never reused.
//! - `created_at` is set once at creation and never patched.
//! - Patches carry no identity fields, so a merge cannot move a record.
//!
//! # See also
//! - docs/architecture/data-model.md

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

pub mod goal;
pub mod habit;
pub mod notification;
pub mod settings;
pub mod task;
pub mod transaction;

/// Stable identifier for every keyed record in the store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = Uuid;

static HTTP_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://\S+$").expect("valid url regex"));

/// Returns the current wall-clock time as Unix epoch milliseconds.
///
/// Clock skew before the epoch degrades to `0` instead of panicking.
pub fn epoch_ms_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}

/// Returns whether `value` looks like an absolute http(s) URL.
///
/// Intentionally shallow: the store validates shape, not reachability.
pub fn is_http_url(value: &str) -> bool {
    HTTP_URL_RE.is_match(value)
}

/// Field-level validation failure raised by record `validate()` impls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty after trimming.
    EmptyField {
        record: &'static str,
        field: &'static str,
    },
    /// A URL sequence entry is not an absolute http(s) URL.
    InvalidUrl {
        field: &'static str,
        value: String,
    },
    /// Transaction amounts must be strictly positive; sign lives in the kind.
    NonPositiveAmount(i64),
    /// Habit weekly target must stay within 1..=7.
    TargetPerWeekOutOfRange(u8),
    /// A task due date may not precede its creation time.
    DueBeforeCreation { due_at: i64, created_at: i64 },
    /// Habit check-in stamps must be non-decreasing.
    CheckinsOutOfOrder { previous: i64, next: i64 },
    /// Currency codes are exactly three uppercase ASCII letters.
    InvalidCurrencyCode(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { record, field } => {
                write!(f, "{record}.{field} must not be empty")
            }
            Self::InvalidUrl { field, value } => {
                write!(f, "{field} entry `{value}` is not an http(s) URL")
            }
            Self::NonPositiveAmount(amount) => {
                write!(f, "amount must be positive, got {amount} cents")
            }
            Self::TargetPerWeekOutOfRange(target) => {
                write!(f, "target_per_week must be within 1..=7, got {target}")
            }
            Self::DueBeforeCreation { due_at, created_at } => {
                write!(f, "due date {due_at} precedes creation time {created_at}")
            }
            Self::CheckinsOutOfOrder { previous, next } => {
                write!(f, "check-in {next} precedes previous check-in {previous}")
            }
            Self::InvalidCurrencyCode(code) => {
                write!(f, "invalid currency code `{code}`; expected three uppercase letters")
            }
        }
    }
}

impl Error for ValidationError {}

/// Contract shared by every keyed record stored in a collection.
///
/// The patch type is the only sanctioned way to mutate a stored record
/// besides the dedicated append operations, which keeps identity fields
/// structurally out of reach of callers.
pub trait Record: Clone {
    /// Partial-update companion type with merge semantics.
    type Patch;

    /// Collection name used in log events and diagnostics.
    const COLLECTION: &'static str;

    /// Stable identity of this record.
    fn id(&self) -> RecordId;

    /// Merges the supplied patch; absent fields leave state untouched.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Checks record-level invariants before any write is accepted.
    fn validate(&self) -> Result<(), ValidationError>;
}
