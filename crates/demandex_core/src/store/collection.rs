//! In-memory keyed collection preserving insertion order.
//!
//! # Responsibility
//! - Provide the CRUD surface shared by every domain collection.
//! - Enforce id uniqueness and record validation on all write paths.
//!
//! # Invariants
//! - Iteration order is insertion order; updates never reorder.
//! - A rejected write leaves the collection bit-for-bit unchanged.

use super::{StoreError, StoreResult};
use crate::model::{Record, RecordId};
use log::warn;

/// Ordered keyed collection of one record type.
///
/// Backed by a plain vector; collections here are user-scale (dozens to
/// hundreds of records), so linear id lookup beats index upkeep.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Collection<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuilds a collection from snapshot records.
    ///
    /// Records failing validation or duplicating an earlier id are skipped
    /// with a warning; restore must never fail outright.
    pub(crate) fn restore(records: Vec<T>) -> Self {
        let mut collection = Self::new();
        for record in records {
            let id = record.id();
            if let Err(err) = collection.add(record) {
                warn!(
                    "event=record_restore_skipped collection={} id={id} error={err}",
                    T::COLLECTION
                );
            }
        }
        collection
    }

    /// Inserts a new record after validating it.
    ///
    /// # Errors
    /// - `DuplicateId` when the id is already present.
    /// - `Validation` when record invariants reject the value.
    pub fn add(&mut self, record: T) -> StoreResult<()> {
        record.validate()?;
        if self.contains(record.id()) {
            return Err(StoreError::DuplicateId(record.id()));
        }
        self.items.push(record);
        Ok(())
    }

    /// Merges a patch into the record with the given id.
    ///
    /// The patch is applied to a copy and re-validated before the stored
    /// record is replaced, so a failing patch changes nothing.
    pub fn update(&mut self, id: RecordId, patch: T::Patch) -> StoreResult<()> {
        self.amend(id, |record| record.apply_patch(patch))
    }

    /// Applies an arbitrary in-place change with the same copy-validate-swap
    /// discipline as `update`. Callers must not touch identity fields.
    pub(crate) fn amend(&mut self, id: RecordId, change: impl FnOnce(&mut T)) -> StoreResult<()> {
        let index = self.index_of(id).ok_or(StoreError::NotFound(id))?;
        let mut next = self.items[index].clone();
        change(&mut next);
        debug_assert_eq!(next.id(), id);
        next.validate()?;
        self.items[index] = next;
        Ok(())
    }

    /// Removes and returns the record with the given id.
    pub fn remove(&mut self, id: RecordId) -> StoreResult<T> {
        let index = self.index_of(id).ok_or(StoreError::NotFound(id))?;
        Ok(self.items.remove(index))
    }

    /// Borrow lookup by id.
    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.index_of(id).map(|index| &self.items[index])
    }

    /// Whether a record with this id is present.
    pub fn contains(&self, id: RecordId) -> bool {
        self.index_of(id).is_some()
    }

    /// Cloned snapshot of all records in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Borrowing iterator in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn records(&self) -> &[T] {
        &self.items
    }

    fn index_of(&self, id: RecordId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::Collection;
    use crate::model::goal::{Goal, GoalPatch};
    use crate::model::Record;
    use crate::store::StoreError;

    fn goals(titles: &[&str]) -> Collection<Goal> {
        let mut collection = Collection::new();
        for title in titles {
            collection.add(Goal::new(*title)).unwrap();
        }
        collection
    }

    #[test]
    fn add_then_list_preserves_insertion_order() {
        let collection = goals(&["first", "second", "third"]);
        let titles: Vec<_> = collection.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn duplicate_add_is_rejected_and_collection_unchanged() {
        let mut collection = goals(&["only"]);
        let existing = collection.list().remove(0);

        let mut duplicate = existing.clone();
        duplicate.title = "impostor".to_string();
        let err = collection.add(duplicate).unwrap_err();

        assert!(matches!(err, StoreError::DuplicateId(id) if id == existing.id()));
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get(existing.id()).unwrap().title, "only");
    }

    #[test]
    fn update_merges_only_patched_fields() {
        let mut collection = goals(&["draft"]);
        let id = collection.list()[0].id();

        collection
            .update(
                id,
                GoalPatch {
                    completed: Some(true),
                    ..GoalPatch::default()
                },
            )
            .unwrap();

        let updated = collection.get(id).unwrap();
        assert!(updated.completed);
        assert_eq!(updated.title, "draft");
    }

    #[test]
    fn failing_patch_leaves_record_unchanged() {
        let mut collection = goals(&["keep me"]);
        let id = collection.list()[0].id();

        let err = collection
            .update(
                id,
                GoalPatch {
                    title: Some("   ".to_string()),
                    ..GoalPatch::default()
                },
            )
            .unwrap_err();

        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(collection.get(id).unwrap().title, "keep me");
    }

    #[test]
    fn remove_then_reuse_id_fails_with_not_found() {
        let mut collection = goals(&["short lived"]);
        let id = collection.list()[0].id();

        let removed = collection.remove(id).unwrap();
        assert_eq!(removed.title, "short lived");
        assert!(collection.is_empty());

        assert!(matches!(
            collection.remove(id),
            Err(StoreError::NotFound(missing)) if missing == id
        ));
        assert!(matches!(
            collection.update(id, GoalPatch::default()),
            Err(StoreError::NotFound(missing)) if missing == id
        ));
    }

    #[test]
    fn clear_empties_the_collection() {
        let mut collection = goals(&["a", "b"]);
        collection.clear();
        assert!(collection.list().is_empty());
    }

    #[test]
    fn restore_skips_invalid_and_duplicate_records() {
        let valid = Goal::new("kept");
        let mut invalid = Goal::new("dropped");
        invalid.title = String::new();
        let duplicate = valid.clone();

        let collection = Collection::restore(vec![valid.clone(), invalid, duplicate]);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get(valid.id()).unwrap().title, "kept");
    }
}
