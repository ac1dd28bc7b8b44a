//! Notification center use-case service.

use crate::model::notification::{Notification, NotificationKind, NotificationPatch};
use crate::model::RecordId;
use crate::persist::SnapshotSlot;
use crate::store::{AppStore, StoreResult};

/// Notification service facade over the application store.
pub struct NotificationService<'a, S: SnapshotSlot> {
    store: &'a mut AppStore<S>,
}

impl<'a, S: SnapshotSlot> NotificationService<'a, S> {
    pub fn new(store: &'a mut AppStore<S>) -> Self {
        Self { store }
    }

    /// Pushes a new unread notification and returns it.
    pub fn push(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        body: Option<String>,
    ) -> StoreResult<Notification> {
        let mut notification = Notification::new(kind, title);
        notification.body = body;

        self.store.add_notification(notification.clone())?;
        Ok(notification)
    }

    /// Marks one notification as read.
    pub fn mark_read(&mut self, id: RecordId) -> StoreResult<()> {
        self.store.update_notification(
            id,
            NotificationPatch {
                read: Some(true),
                ..NotificationPatch::default()
            },
        )
    }

    /// Marks every notification as read; returns how many were unread.
    pub fn mark_all_read(&mut self) -> StoreResult<usize> {
        let unread = self.unread_count();
        if unread > 0 {
            self.store
                .amend_each_notification(|notification| notification.read = true)?;
        }
        Ok(unread)
    }

    /// Removes one notification.
    pub fn dismiss(&mut self, id: RecordId) -> StoreResult<Notification> {
        self.store.remove_notification(id)
    }

    /// Removes every notification ("clear all").
    pub fn clear_all(&mut self) -> StoreResult<()> {
        self.store.clear_notifications()
    }

    /// Number of unread notifications, for the badge.
    pub fn unread_count(&self) -> usize {
        self.store
            .notifications()
            .iter()
            .filter(|notification| !notification.read)
            .count()
    }

    /// All notifications in insertion order.
    pub fn list(&self) -> Vec<Notification> {
        self.store.notifications().list()
    }
}
