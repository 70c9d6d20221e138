//! Transient toast queue.
//!
//! Notifications are displayed for a fixed window and then pruned on the
//! next `Tick`. The queue is bounded; the oldest toast is dropped when a
//! new one would exceed the cap.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use scanalert_core::Notification;

/// Most toasts shown at once
pub const MAX_VISIBLE: usize = 4;

/// A queued notification with its display deadline
#[derive(Debug, Clone)]
pub struct ActiveToast {
    pub notification: Notification,
    pub expires_at: Instant,
}

/// Fire-and-forget display queue for notifications
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    toasts: VecDeque<ActiveToast>,
    ttl: Duration,
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
        }
    }

    /// Queue a notification for display, expiring `ttl` from now
    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    /// Queue a notification with an explicit clock (used by tests)
    pub fn push_at(&mut self, notification: Notification, now: Instant) {
        if self.toasts.len() == MAX_VISIBLE {
            self.toasts.pop_front();
        }
        self.toasts.push_back(ActiveToast {
            notification,
            expires_at: now + self.ttl,
        });
    }

    /// Drop every toast whose display window has elapsed
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    /// Active toasts, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &ActiveToast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
