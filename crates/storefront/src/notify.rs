//! Transient user notifications.
//!
//! Mutating cart operations that inform the user produce a short-lived
//! message: visible for a fixed display window, then fading briefly, then
//! gone. Timing is driven by caller-supplied instants so the contract is
//! testable without sleeping; the presentation layer passes the wall clock.

use std::time::{Duration, Instant};

/// How long a notification stays fully visible.
pub const DISPLAY_DURATION: Duration = Duration::from_secs(3);

/// How long the dismiss transition lasts after the display window.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// A single transient message.
#[derive(Debug, Clone)]
pub struct Notification {
    message: String,
    posted_at: Instant,
}

impl Notification {
    /// The message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// When the notification was posted.
    #[must_use]
    pub const fn posted_at(&self) -> Instant {
        self.posted_at
    }
}

/// Lifecycle phase of a notification at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Within the display window.
    Visible,
    /// Past the display window, mid dismiss transition.
    Fading,
}

/// Holds pending notifications and applies the timing contract.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    entries: Vec<Notification>,
    display: Duration,
    fade: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationCenter {
    /// Create a center with the standard timing.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_timing(DISPLAY_DURATION, FADE_DURATION)
    }

    /// Create a center with custom timing.
    #[must_use]
    pub const fn with_timing(display: Duration, fade: Duration) -> Self {
        Self {
            entries: Vec::new(),
            display,
            fade,
        }
    }

    /// Post a message at `now`.
    pub fn push(&mut self, message: impl Into<String>, now: Instant) {
        self.entries.push(Notification {
            message: message.into(),
            posted_at: now,
        });
    }

    /// The phase of `notification` at `now`, or `None` once it has expired.
    #[must_use]
    pub fn phase(&self, notification: &Notification, now: Instant) -> Option<NotificationPhase> {
        let age = now.duration_since(notification.posted_at);

        if age < self.display {
            Some(NotificationPhase::Visible)
        } else if age < self.display + self.fade {
            Some(NotificationPhase::Fading)
        } else {
            None
        }
    }

    /// Notifications that have not expired at `now`.
    pub fn active(&self, now: Instant) -> impl Iterator<Item = &Notification> {
        self.entries
            .iter()
            .filter(move |n| self.phase(n, now).is_some())
    }

    /// Drop notifications that have expired at `now`.
    pub fn sweep(&mut self, now: Instant) {
        let ttl = self.display + self.fade;
        self.entries
            .retain(|n| now.duration_since(n.posted_at) < ttl);
    }

    /// All pending notifications, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Number of pending notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no notifications are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
