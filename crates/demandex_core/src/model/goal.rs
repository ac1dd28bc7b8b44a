//! Goal record for the vision-board feature.
//!
//! # Responsibility
//! - Define the goal shape persisted in the snapshot.
//! - Keep `images`/`links` append-only through dedicated helpers.
//!
//! # Invariants
//! - `title` is required and non-empty after trimming.
//! - `images`/`links` preserve insertion order and hold http(s) URLs only.
//! - `completed` starts as `false` at creation.

use crate::model::{epoch_ms_now, is_http_url, Record, RecordId, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tracked life goal with optional vision-board attachments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Stable identity, immutable after creation.
    pub id: RecordId,
    /// Short human-readable goal statement.
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Vision-board image URLs, append-only, insertion order.
    #[serde(default)]
    pub images: Vec<String>,
    /// Related link URLs, append-only, insertion order.
    #[serde(default)]
    pub links: Vec<String>,
    /// Creation timestamp in epoch milliseconds, immutable.
    pub created_at: i64,
    #[serde(default)]
    pub completed: bool,
}

impl Goal {
    /// Creates a goal with a generated id and the current timestamp.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, epoch_ms_now())
    }

    /// Creates a goal with caller-provided identity.
    ///
    /// Used by restore paths and tests where identity already exists.
    pub fn with_id(id: RecordId, title: impl Into<String>, created_at: i64) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            notes: None,
            images: Vec::new(),
            links: Vec::new(),
            created_at,
            completed: false,
        }
    }

    /// Appends one image URL, preserving insertion order.
    pub fn push_image(&mut self, url: impl Into<String>) {
        self.images.push(url.into());
    }

    /// Appends one link URL, preserving insertion order.
    pub fn push_link(&mut self, url: impl Into<String>) {
        self.links.push(url.into());
    }
}

/// Partial update for [`Goal`]; absent fields leave the record untouched.
///
/// `description` and `notes` use a double `Option` so a patch can clear
/// them (`Some(None)`) as well as replace them (`Some(Some(_))`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub notes: Option<Option<String>>,
    pub completed: Option<bool>,
}

impl Record for Goal {
    type Patch = GoalPatch;

    const COLLECTION: &'static str = "goals";

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply_patch(&mut self, patch: GoalPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                record: "goal",
                field: "title",
            });
        }
        for url in &self.images {
            if !is_http_url(url) {
                return Err(ValidationError::InvalidUrl {
                    field: "images",
                    value: url.clone(),
                });
            }
        }
        for url in &self.links {
            if !is_http_url(url) {
                return Err(ValidationError::InvalidUrl {
                    field: "links",
                    value: url.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Goal, GoalPatch};
    use crate::model::{Record, ValidationError};

    #[test]
    fn new_goal_starts_with_defaults() {
        let goal = Goal::new("Save $1000");
        assert_eq!(goal.title, "Save $1000");
        assert!(!goal.completed);
        assert!(goal.images.is_empty());
        assert!(goal.links.is_empty());
        assert!(goal.description.is_none());
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn patch_merges_only_supplied_fields() {
        let mut goal = Goal::new("Run a marathon");
        goal.description = Some("Spring race".to_string());

        goal.apply_patch(GoalPatch {
            completed: Some(true),
            ..GoalPatch::default()
        });

        assert!(goal.completed);
        assert_eq!(goal.title, "Run a marathon");
        assert_eq!(goal.description.as_deref(), Some("Spring race"));
    }

    #[test]
    fn patch_can_clear_optional_text() {
        let mut goal = Goal::new("Learn piano");
        goal.notes = Some("weekly lesson".to_string());

        goal.apply_patch(GoalPatch {
            notes: Some(None),
            ..GoalPatch::default()
        });

        assert!(goal.notes.is_none());
    }

    #[test]
    fn validate_rejects_blank_title_and_bad_urls() {
        let mut goal = Goal::new("  ");
        assert!(matches!(
            goal.validate(),
            Err(ValidationError::EmptyField { field: "title", .. })
        ));

        goal.title = "Vision".to_string();
        goal.push_image("not-a-url");
        assert!(matches!(
            goal.validate(),
            Err(ValidationError::InvalidUrl { field: "images", .. })
        ));
    }
}
