//! Goal/vision-board use-case service.
//!
//! # Responsibility
//! - Provide goal create/edit/complete/attach APIs for the goals page.
//! - Gate vision-board attachments behind URL shape validation.
//!
//! # Invariants
//! - Attachments are append-only; existing entries are never reordered.
//! - Only http(s) URLs are accepted for images and links.

use crate::model::goal::{Goal, GoalPatch};
use crate::model::{is_http_url, RecordId};
use crate::persist::SnapshotSlot;
use crate::store::{AppStore, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input for creating a goal; identity and timestamps are generated here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewGoal {
    pub title: String,
    pub description: Option<String>,
    pub notes: Option<String>,
}

/// Service error for goal use-cases.
#[derive(Debug)]
pub enum GoalServiceError {
    /// Target goal does not exist.
    GoalNotFound(RecordId),
    /// Attachment value is not an http(s) URL.
    InvalidUrl(String),
    /// Store-level failure.
    Store(StoreError),
}

impl Display for GoalServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GoalNotFound(id) => write!(f, "goal not found: {id}"),
            Self::InvalidUrl(value) => write!(f, "not an http(s) URL: `{value}`"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for GoalServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for GoalServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::GoalNotFound(id),
            other => Self::Store(other),
        }
    }
}

/// Goal service facade over the application store.
pub struct GoalService<'a, S: SnapshotSlot> {
    store: &'a mut AppStore<S>,
}

impl<'a, S: SnapshotSlot> GoalService<'a, S> {
    /// Creates a service borrowing the owned store.
    pub fn new(store: &'a mut AppStore<S>) -> Self {
        Self { store }
    }

    /// Creates a goal with a fresh id, current timestamp, and defaults
    /// (`completed = false`, empty attachment sequences).
    pub fn create(&mut self, request: NewGoal) -> Result<Goal, GoalServiceError> {
        let mut goal = Goal::new(request.title);
        goal.description = request.description;
        goal.notes = request.notes;

        self.store.add_goal(goal.clone())?;
        Ok(goal)
    }

    /// Merges a partial update into an existing goal.
    pub fn edit(&mut self, id: RecordId, patch: GoalPatch) -> Result<(), GoalServiceError> {
        self.store.update_goal(id, patch)?;
        Ok(())
    }

    /// Sets the completion flag explicitly.
    pub fn set_completed(&mut self, id: RecordId, completed: bool) -> Result<(), GoalServiceError> {
        self.edit(
            id,
            GoalPatch {
                completed: Some(completed),
                ..GoalPatch::default()
            },
        )
    }

    /// Flips the completion flag and returns the new state.
    pub fn toggle_completed(&mut self, id: RecordId) -> Result<bool, GoalServiceError> {
        let current = self
            .store
            .goals()
            .get(id)
            .ok_or(GoalServiceError::GoalNotFound(id))?
            .completed;
        self.set_completed(id, !current)?;
        Ok(!current)
    }

    /// Appends one image URL to the vision board.
    pub fn attach_image(&mut self, id: RecordId, url: &str) -> Result<(), GoalServiceError> {
        if !is_http_url(url) {
            return Err(GoalServiceError::InvalidUrl(url.to_string()));
        }
        self.store.amend_goal(id, |goal| goal.push_image(url))?;
        Ok(())
    }

    /// Appends one related link.
    pub fn attach_link(&mut self, id: RecordId, url: &str) -> Result<(), GoalServiceError> {
        if !is_http_url(url) {
            return Err(GoalServiceError::InvalidUrl(url.to_string()));
        }
        self.store.amend_goal(id, |goal| goal.push_link(url))?;
        Ok(())
    }

    /// Deletes a goal and returns the removed record.
    pub fn remove(&mut self, id: RecordId) -> Result<Goal, GoalServiceError> {
        Ok(self.store.remove_goal(id)?)
    }

    /// One goal by id.
    pub fn get(&self, id: RecordId) -> Option<Goal> {
        self.store.goals().get(id).cloned()
    }

    /// All goals in insertion order.
    pub fn list(&self) -> Vec<Goal> {
        self.store.goals().list()
    }
}
