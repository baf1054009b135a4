//! New-mail detection from sampled unread counts.
//!
//! The injected poller only reads numbers off the page; deciding whether a
//! sample means "new mail arrived" happens here, on the host side.

/// Tracks the previously observed unread count across poll cycles.
#[derive(Debug, Default)]
pub struct UnreadTracker {
    previous: u32,
}

impl UnreadTracker {
    /// Feeds one sample in. Returns `Some(delta)` when new mail should be
    /// announced: the count went up from a nonzero baseline. The first
    /// nonzero sample after startup (or after the count dropped to zero)
    /// only establishes the baseline.
    pub fn observe(&mut self, current: u32) -> Option<u32> {
        let previous = self.previous;
        self.previous = current;
        if current > previous && previous > 0 {
            Some(current - previous)
        } else {
            None
        }
    }
}

/// Picks the count to track: the inbox badge when the page exposes one,
/// otherwise the sum across all folder badges.
pub fn effective_count(badge_total: u32, inbox_badge: Option<u32>) -> u32 {
    inbox_badge.unwrap_or(badge_total)
}

/// Notification body for `n` newly arrived messages.
pub fn new_mail_body(n: u32) -> String {
    if n == 1 {
        "You have 1 new email".to_string()
    } else {
        format!("You have {n} new emails")
    }
}
