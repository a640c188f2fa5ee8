//! Ordering guard for periodic re-queries.

/// Hands out a ticket per poll and says whether a finished poll may still
/// publish its result.
///
/// Only the most recently issued ticket is accepted, and nothing is accepted
/// once the fence is closed (the owning view went away).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollFence {
    generation: u64,
    open: bool,
}

impl Default for PollFence {
    fn default() -> Self {
        Self {
            generation: 0,
            open: true,
        }
    }
}

impl PollFence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn accepts(&self, ticket: u64) -> bool {
        self.open && ticket == self.generation
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut fence = PollFence::new();
        let first = fence.issue();
        assert!(fence.accepts(first));

        let second = fence.issue();
        assert!(!fence.accepts(first));
        assert!(fence.accepts(second));
    }

    #[test]
    fn test_slow_poll_cannot_overwrite_newer_one() {
        let mut fence = PollFence::new();
        let slow = fence.issue();
        let fast = fence.issue();

        // fast completes first, slow afterwards
        assert!(fence.accepts(fast));
        assert!(!fence.accepts(slow));
    }

    #[test]
    fn test_closed_fence_rejects_everything() {
        let mut fence = PollFence::new();
        let ticket = fence.issue();
        fence.close();
        assert!(!fence.is_open());
        assert!(!fence.accepts(ticket));

        let late = fence.issue();
        assert!(!fence.accepts(late));
    }

    #[test]
    fn test_unissued_ticket_rejected() {
        let fence = PollFence::new();
        assert!(!fence.accepts(1));
    }
}
