//! One-shot delay timers driven by the frame tick.

use std::time::Duration;

/// A single-shot delay that fires once its duration has elapsed.
///
/// The timer has no handle outside its owner: a view that needs a delayed
/// transition stores the timer inside its own state variant, so replacing
/// the variant (or dropping the whole mini-app) cancels it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayTimer {
    elapsed: Duration,
    duration: Duration,
    fired: bool,
}

impl DelayTimer {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
            fired: false,
        }
    }

    /// Advance by `delta`. Returns `true` exactly once, on the tick that
    /// crosses the deadline.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if self.fired {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(delta);
        if self.elapsed >= self.duration {
            self.fired = true;
            return true;
        }
        false
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_on_crossing() {
        let mut timer = DelayTimer::new(Duration::from_millis(100));
        assert!(!timer.advance(Duration::from_millis(60)));
        assert!(timer.advance(Duration::from_millis(60)));
        assert!(!timer.advance(Duration::from_millis(60)));
        assert!(timer.has_fired());
    }

    #[test]
    fn zero_duration_fires_on_first_tick() {
        let mut timer = DelayTimer::new(Duration::ZERO);
        assert!(timer.advance(Duration::ZERO));
    }

    #[test]
    fn remaining_saturates() {
        let mut timer = DelayTimer::new(Duration::from_millis(50));
        timer.advance(Duration::from_millis(20));
        assert_eq!(timer.remaining(), Duration::from_millis(30));
        timer.advance(Duration::from_secs(1));
        assert_eq!(timer.remaining(), Duration::ZERO);
    }
}
