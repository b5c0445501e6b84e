// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of
//! notifications. It limits the number of visible toasts and promotes queued
//! ones as space becomes available.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `MAX_VISIBLE` notifications are showing, it's displayed
    /// immediately. Otherwise, it's added to the queue and shown when space
    /// becomes available.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Removes expired notifications; called from the periodic tick.
    pub fn tick(&mut self) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired());
        if self.visible.len() < before {
            self.promote_from_queue();
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
        }
    }

    /// Whether any notification is visible or queued.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Currently visible notifications, newest first.
    #[must_use]
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(next) = self.queue.pop_front() else {
                break;
            };
            self.visible.push_front(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_shows_notification_immediately() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("notification-config-load-error"));

        assert!(manager.has_notifications());
        assert_eq!(manager.visible().count(), 1);
    }

    #[test]
    fn overflow_goes_to_queue_and_promotes_on_dismiss() {
        let mut manager = Manager::new();
        for _ in 0..MAX_VISIBLE + 1 {
            manager.push(Notification::error("notification-config-save-error"));
        }

        assert_eq!(manager.visible().count(), MAX_VISIBLE);

        let first_id = manager.visible().next().unwrap().id();
        assert!(manager.dismiss(first_id));

        // The queued notification takes the freed slot
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
        assert!(manager.has_notifications());
    }

    #[test]
    fn dismiss_unknown_id_returns_false() {
        let mut manager = Manager::new();
        assert!(!manager.dismiss(NotificationId::new()));
    }

    #[test]
    fn tick_keeps_fresh_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::error("notification-config-save-error"));
        manager.tick();
        assert_eq!(manager.visible().count(), 1);
    }
}
