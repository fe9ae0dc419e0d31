// zaimu-core-client/zaimu-realtime
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

/// Exponential backoff schedule for reconnection attempts. `delay` answers
/// `None` once the attempt budget is exhausted.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconnectStrategy {
    pub base_delay: Duration,
    pub multiplier: f64,
    pub max_delay: Duration,
    pub max_attempts: u32,
}

impl Default for ReconnectStrategy {
    fn default() -> Self {
        ReconnectStrategy {
            base_delay: Duration::from_secs(1),
            multiplier: 1.5,
            max_delay: Duration::from_secs(30),
            max_attempts: 10,
        }
    }
}

impl ReconnectStrategy {
    /// Delay before the given attempt, 1-based.
    pub fn delay(&self, attempt: u32) -> Option<Duration> {
        if attempt == 0 || attempt > self.max_attempts {
            return None;
        }
        let delay = self
            .base_delay
            .mul_f64(self.multiplier.powi(attempt as i32 - 1));
        Some(delay.min(self.max_delay))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_delays_grow_up_to_cap() {
        let strategy = ReconnectStrategy::default();

        assert_eq!(strategy.delay(1), Some(Duration::from_secs(1)));
        assert_eq!(strategy.delay(2), Some(Duration::from_millis(1500)));
        assert_eq!(strategy.delay(3), Some(Duration::from_millis(2250)));

        let strategy = ReconnectStrategy {
            max_delay: Duration::from_secs(2),
            ..Default::default()
        };
        assert_eq!(strategy.delay(5), Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_budget_is_bounded() {
        let strategy = ReconnectStrategy::default();

        assert_eq!(strategy.delay(0), None);
        assert!(strategy.delay(10).is_some());
        assert_eq!(strategy.delay(11), None);
    }
}
