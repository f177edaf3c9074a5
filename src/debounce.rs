//! Quiet-period timer for the search query
//!
//! Every edit reschedules the pending fire; [`Debounce::cancel`] drops it.
//! At most one fire is pending at a time. Time is passed in explicitly so
//! the event loop and tests share the same code path.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debounce {
    deadline: Option<Instant>,
    delay: Duration,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            deadline: None,
            delay,
        }
    }

    /// Record an edit at `now`, replacing any pending fire
    pub fn set(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the pending fire, if any
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// True exactly once, on the first call after the quiet period
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
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

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn fires_once_after_quiet_period() {
        let t0 = Instant::now();
        let mut db = Debounce::new(DELAY);
        db.set(t0);

        assert!(!db.ready(t0 + Duration::from_millis(299)));
        assert!(db.ready(t0 + DELAY));
        assert!(!db.ready(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn edits_reset_the_timer() {
        let t0 = Instant::now();
        let mut db = Debounce::new(DELAY);
        db.set(t0);
        db.set(t0 + Duration::from_millis(200));
        db.set(t0 + Duration::from_millis(400));

        // 300ms after the first edit is inside the window of the third
        assert!(!db.ready(t0 + Duration::from_millis(500)));
        assert!(db.ready(t0 + Duration::from_millis(700)));
    }

    #[test]
    fn cancel_drops_pending_fire() {
        let t0 = Instant::now();
        let mut db = Debounce::new(DELAY);
        db.set(t0);
        db.cancel();

        assert!(!db.is_pending());
        assert!(!db.ready(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn next_deadline_counts_down() {
        let t0 = Instant::now();
        let mut db = Debounce::new(DELAY);
        assert_eq!(db.next_deadline(t0), None);

        db.set(t0);
        assert_eq!(
            db.next_deadline(t0 + Duration::from_millis(100)),
            Some(Duration::from_millis(200))
        );
        assert_eq!(
            db.next_deadline(t0 + Duration::from_millis(900)),
            Some(Duration::ZERO)
        );
    }
}
