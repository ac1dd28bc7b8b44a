//! Record store layer: keyed collections and the owned state container.
//!
//! # Responsibility
//! - Define store-level error semantics shared by all collections.
//! - Keep mutation entry points behind the write-through container.
//!
//! # Invariants
//! - Store operations return semantic errors (`NotFound`, `DuplicateId`)
//!   in addition to storage transport errors.
//! - A failed operation leaves the targeted collection unchanged, except
//!   for storage failures after an applied in-memory mutation.

use crate::model::{RecordId, ValidationError};
use crate::persist::SnapshotError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod app_store;
mod collection;

pub use app_store::AppStore;
pub use collection::Collection;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level failure for collection operations.
#[derive(Debug)]
pub enum StoreError {
    /// Record invariants rejected the write.
    Validation(ValidationError),
    /// Operation referenced an id not present in the collection.
    NotFound(RecordId),
    /// `add` collided with an existing id.
    DuplicateId(RecordId),
    /// The durable slot rejected the write-through.
    Storage(SnapshotError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::DuplicateId(id) => write!(f, "record id already present: {id}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::DuplicateId(_) => None,
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<SnapshotError> for StoreError {
    fn from(value: SnapshotError) -> Self {
        Self::Storage(value)
    }
}
