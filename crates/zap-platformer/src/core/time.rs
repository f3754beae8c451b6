use crate::error::ConfigError;

/// Repeating countdown. Accumulates elapsed time and wraps when it reaches
/// `length`, keeping the remainder so looping stays smooth.
///
/// `timeout` is sticky: once a cycle completes it stays set until `reset`.
#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    /// Cycle length in seconds (always > 0).
    length: f32,
    /// Elapsed time in the current cycle, in `[0, length)`.
    time: f32,
    timeout: bool,
}

impl Timer {
    pub fn new(length: f32) -> Result<Self, ConfigError> {
        if !length.is_finite() || length <= 0.0 {
            return Err(ConfigError::InvalidTimerLength(length));
        }
        Ok(Self {
            length,
            time: 0.0,
            timeout: false,
        })
    }

    /// A timer that starts out already timed out (e.g. a weapon that may fire
    /// on the very first request).
    pub fn expired(length: f32) -> Result<Self, ConfigError> {
        let mut timer = Self::new(length)?;
        timer.timeout = true;
        Ok(timer)
    }

    /// Advance by `dt` seconds. Returns true if a cycle completed during this step.
    pub fn step(&mut self, dt: f32) -> bool {
        self.time += dt;
        if self.time >= self.length {
            self.time %= self.length;
            self.timeout = true;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
        self.timeout = false;
    }

    pub fn is_timeout(&self) -> bool {
        self.timeout
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn length(&self) -> f32 {
        self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_non_positive_length() {
        assert!(matches!(Timer::new(0.0), Err(ConfigError::InvalidTimerLength(_))));
        assert!(matches!(Timer::new(-1.0), Err(ConfigError::InvalidTimerLength(_))));
        assert!(Timer::new(f32::NAN).is_err());
        assert!(Timer::new(f32::INFINITY).is_err());
    }

    #[test]
    fn step_reports_completion_and_keeps_remainder() {
        let mut t = Timer::new(1.0).unwrap();
        assert!(!t.step(0.75));
        assert!(!t.is_timeout());
        assert!(t.step(0.5));
        assert!(t.is_timeout());
        assert!((t.time() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn timeout_is_sticky_until_reset() {
        let mut t = Timer::new(0.5).unwrap();
        t.step(0.6);
        t.step(0.1);
        assert!(t.is_timeout());
        t.reset();
        assert!(!t.is_timeout());
        assert_eq!(t.time(), 0.0);
    }

    #[test]
    fn expired_starts_timed_out() {
        let t = Timer::expired(0.1).unwrap();
        assert!(t.is_timeout());
        assert_eq!(t.time(), 0.0);
    }

    #[test]
    fn large_step_wraps_more_than_once() {
        let mut t = Timer::new(0.1).unwrap();
        assert!(t.step(0.35));
        assert!(t.time() < t.length());
    }

    proptest! {
        #[test]
        fn time_stays_within_cycle(
            length in 0.001f32..10.0,
            steps in proptest::collection::vec(0.0f32..5.0, 1..64),
        ) {
            let mut t = Timer::new(length).unwrap();
            for dt in steps {
                t.step(dt);
                prop_assert!(t.time() >= 0.0);
                prop_assert!(t.time() < t.length());
            }
        }
    }
}
