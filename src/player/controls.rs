//! Auto-hide for the player controls
//!
//! A single deadline-based debounce. Every interaction reschedules it; the
//! UI loop calls [`ControlsTimer::poll`] on each tick and hides the controls
//! the one time it reports `true`.

use std::time::{Duration, Instant};

/// Delay before the controls hide after the last interaction
pub const HIDE_CONTROLS_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct ControlsTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Default for ControlsTimer {
    fn default() -> Self {
        Self::new(HIDE_CONTROLS_DELAY)
    }
}

impl ControlsTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Cancel any pending hide and start a fresh one from `now`
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before the pending hide fires
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Returns `true` exactly once when the deadline has passed
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

    #[test]
    fn test_fires_once_after_delay() {
        let start = Instant::now();
        let mut timer = ControlsTimer::default();
        timer.schedule(start);

        assert!(!timer.poll(start + Duration::from_secs(4)));
        assert!(timer.poll(start + Duration::from_secs(5)));
        assert!(!timer.poll(start + Duration::from_secs(6)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_reschedule_pushes_deadline() {
        let start = Instant::now();
        let mut timer = ControlsTimer::new(Duration::from_secs(5));
        timer.schedule(start);
        timer.schedule(start + Duration::from_secs(3));

        assert!(!timer.poll(start + Duration::from_secs(6)));
        assert_eq!(
            timer.remaining(start + Duration::from_secs(6)),
            Some(Duration::from_secs(2))
        );
        assert!(timer.poll(start + Duration::from_secs(8)));
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut timer = ControlsTimer::default();
        timer.schedule(start);
        timer.cancel();
        assert!(!timer.poll(start + Duration::from_secs(60)));
    }
}
