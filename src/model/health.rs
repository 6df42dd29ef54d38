use serde::{Deserialize, Serialize};

pub const MAX_HEALTH: f64 = 100.0;

/// A bounded health meter. Every mutator clamps, so `0 <= current <= max`
/// holds at all times by construction.
///
/// Amounts are assumed non-negative; callers scale them by elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

impl Health {
    pub fn new(current: f64) -> Self {
        Self {
            current: current.clamp(0.0, MAX_HEALTH),
            max: MAX_HEALTH,
        }
    }

    pub fn increase(&mut self, amount: f64) {
        debug_assert!(amount >= 0.0, "health amounts must be non-negative");
        self.current = (self.current + amount).min(self.max);
    }

    pub fn decrease(&mut self, amount: f64) {
        debug_assert!(amount >= 0.0, "health amounts must be non-negative");
        self.current = (self.current - amount).max(0.0);
    }

    pub fn ratio(&self) -> f64 {
        self.current / self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increase_clamps_to_max() {
        let mut health = Health::new(50.0);
        health.increase(60.0);
        assert_eq!(health.current, 100.0);
    }

    #[test]
    fn test_decrease_clamps_to_zero() {
        let mut health = Health::new(50.0);
        health.increase(60.0);
        health.decrease(150.0);
        assert_eq!(health.current, 0.0);
    }

    #[test]
    fn test_health_can_stay_pinned_at_zero() {
        // No death semantics: a drained meter just keeps absorbing decay.
        let mut health = Health::new(0.0);
        health.decrease(10.0);
        assert_eq!(health.current, 0.0);
        health.increase(5.0);
        assert_eq!(health.current, 5.0);
    }

    #[test]
    fn test_ratio() {
        let health = Health::new(25.0);
        assert!((health.ratio() - 0.25).abs() < 1e-12);
    }
}
