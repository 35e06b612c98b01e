use std::sync::atomic::{AtomicU64, Ordering};

/// Issues a generation token per platform selection so late-arriving
/// results from an earlier selection can be recognized and dropped.
///
/// The host calls [`SelectionTracker::begin`] when the user picks a
/// platform, carries the token through the fetch, and checks
/// [`SelectionTracker::is_current`] before applying the finished
/// payload. A selection made while an older fetch is still in flight
/// simply strands the old token; there is no cancellation.
#[derive(Debug, Default)]
pub struct SelectionTracker {
    latest: AtomicU64,
}

impl SelectionTracker {
    pub fn new() -> Self {
        SelectionTracker {
            latest: AtomicU64::new(0),
        }
    }

    /// Register a new selection, invalidating every earlier token
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `token` still identifies the most recent selection
    pub fn is_current(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionTracker;

    #[test]
    fn test_latest_selection_wins() {
        let tracker = SelectionTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_tokens_increase() {
        let tracker = SelectionTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(second > first);
    }

    #[test]
    fn test_no_selection_yet() {
        let tracker = SelectionTracker::new();
        assert!(!tracker.is_current(1));
    }
}
