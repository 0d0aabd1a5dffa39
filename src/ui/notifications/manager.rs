// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the visible toast stack. Toasts are stacked in
//! arrival order, never merged or deduplicated, and each expires on its
//! own deadline. Removing a toast drops its deadline with it, so an
//! expiry can never fire against an element that is already gone.

use super::notification::{Notification, NotificationId};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Owns the visible notifications, oldest first.
#[derive(Debug, Default)]
pub struct Manager {
    visible: Vec<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification onto the stack.
    pub fn push(&mut self, notification: Notification) {
        self.visible.push(notification);
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed. Unknown
    /// IDs are a no-op, so a stale dismiss is always safe.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            true
        } else {
            false
        }
    }

    /// Removes every notification whose deadline has passed.
    ///
    /// Called from the shared periodic tick.
    pub fn tick(&mut self) {
        self.visible.retain(|n| !n.is_expired());
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Returns the currently visible notifications, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns whether any notification is on screen.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty()
    }

    /// Clears all notifications.
    pub fn clear(&mut self) {
        self.visible.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn pushed_notifications_coexist_without_merging() {
        let mut manager = Manager::new();
        manager.push(Notification::info("same-key"));
        manager.push(Notification::info("same-key"));

        assert_eq!(manager.visible_count(), 2);
        let ids: Vec<_> = manager.visible().map(Notification::id).collect();
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut manager = Manager::new();
        let first = Notification::danger("one");
        let first_id = first.id();
        manager.push(first);
        manager.push(Notification::danger("two"));

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.visible().next().unwrap().message_key(), "two");
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let fake_id = Notification::success("temp").id();

        assert!(!manager.dismiss(fake_id));
    }

    #[test]
    fn dismissing_twice_is_a_safe_no_op() {
        let mut manager = Manager::new();
        let notification = Notification::info("once");
        let id = notification.id();
        manager.push(notification);

        assert!(manager.dismiss(id));
        assert!(!manager.dismiss(id));
    }

    #[test]
    fn tick_expires_notifications_independently() {
        let mut manager = Manager::new();
        manager.push(Notification::info("expired").timeout(Duration::ZERO));
        manager.push(Notification::info("fresh"));

        manager.tick();

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.visible().next().unwrap().message_key(), "fresh");
    }

    #[test]
    fn tick_with_nothing_expired_keeps_everything() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("a"));
        manager.push(Notification::danger("b"));

        manager.tick();
        assert_eq!(manager.visible_count(), 2);
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.push(Notification::success(format!("test-{i}")));
        }

        manager.clear();
        assert_eq!(manager.visible_count(), 0);
    }
}
