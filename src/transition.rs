//! Entrance animation timing.

use d3rs::ease;
use std::time::{Duration, Instant};

/// Cubic ease-in over `[0, 1]`: slow start, fast finish.
pub fn ease_cubic_in(t: f32) -> f32 {
    ease::ease_cubic_in(t.clamp(0.0, 1.0) as f64) as f32
}

/// A fixed-duration animation started at a known instant.
///
/// Starting a new transition simply replaces the old one; nothing needs to be cancelled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarTransition {
    started_at: Instant,
    duration: Duration,
}

impl BarTransition {
    pub fn new(started_at: Instant, duration: Duration) -> Self {
        Self {
            started_at,
            duration,
        }
    }

    /// Linear progress in `[0, 1]` at `now`.
    pub fn linear_progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: Instant) -> f32 {
        ease_cubic_in(self.linear_progress(now))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.linear_progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_cubic_in(0.0), 0.0);
        assert_eq!(ease_cubic_in(1.0), 1.0);
        assert_eq!(ease_cubic_in(0.5), 0.125);
        assert_eq!(ease_cubic_in(2.0), 1.0);
    }

    #[test]
    fn test_progress_over_time() {
        let start = Instant::now();
        let t = BarTransition::new(start, Duration::from_millis(500));
        assert_eq!(t.progress(start), 0.0);
        assert!(!t.is_finished(start));

        let half = t.progress(start + Duration::from_millis(250));
        assert!((half - 0.125).abs() < 1e-4);

        assert_eq!(t.progress(start + Duration::from_millis(800)), 1.0);
        assert!(t.is_finished(start + Duration::from_millis(500)));
        assert_eq!(t.progress(start + Duration::from_secs(1)), 1.0);
    }

    #[test]
    fn test_zero_duration_is_immediately_done() {
        let start = Instant::now();
        let t = BarTransition::new(start, Duration::ZERO);
        assert!(t.is_finished(start));
        assert_eq!(t.progress(start), 1.0);
    }
}
