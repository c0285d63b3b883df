//! Cancellable single-shot deadline with last-write-wins semantics.
//!
//! The presentation layer briefly highlights a focus target after a
//! deletion and clears it about half a second later. Rather than a
//! literal timer, this is a deadline the caller's event loop polls with
//! its own clock, so tests never sleep. Re-scheduling before the
//! deadline fires discards the earlier one.

use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct DelayedReset {
    deadline: Option<Instant>,
}

impl DelayedReset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the deadline at `now + delay`. Any pending
    /// deadline is replaced.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True once the armed deadline has passed; fires at most once per
    /// `schedule`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn fires_once_after_deadline() {
        let start = Instant::now();
        let mut reset = DelayedReset::new();
        reset.schedule(start, DELAY);

        assert!(!reset.poll(start));
        assert!(!reset.poll(start + Duration::from_millis(499)));
        assert!(reset.poll(start + DELAY));
        // already fired
        assert!(!reset.poll(start + Duration::from_secs(10)));
        assert!(!reset.is_pending());
    }

    #[test]
    fn reschedule_discards_earlier_deadline() {
        let start = Instant::now();
        let mut reset = DelayedReset::new();
        reset.schedule(start, DELAY);
        reset.schedule(start + Duration::from_millis(300), DELAY);

        // the first deadline would have passed here; the second wins
        assert!(!reset.poll(start + Duration::from_millis(600)));
        assert!(reset.poll(start + Duration::from_millis(800)));
    }

    #[test]
    fn cancel_disarms() {
        let start = Instant::now();
        let mut reset = DelayedReset::new();
        reset.schedule(start, DELAY);
        reset.cancel();
        assert!(!reset.is_pending());
        assert!(!reset.poll(start + Duration::from_secs(1)));
    }

    #[test]
    fn unarmed_never_fires() {
        let mut reset = DelayedReset::new();
        assert!(!reset.poll(Instant::now()));
    }
}
