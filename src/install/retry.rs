// file: src/install/retry.rs
// version: 1.0.0
// guid: 7f9b1d3e-5a6c-4d8f-a0b2-6c8e0a2d4f6c

//! Retry policy for the package installer

use std::time::Duration;

/// Fixed delay between install attempts
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(10);

/// Retry policy injected into the installer
///
/// The default policy retries forever with a fixed 10-second delay, matching
/// the expectation that transient mirror and network failures eventually
/// clear and that callers needing a deadline impose it externally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts, or `None` to retry until success
    pub max_attempts: Option<u32>,
    /// Fixed delay between attempts
    pub delay: Duration,
}

impl RetryPolicy {
    /// Retry indefinitely with the default fixed delay
    pub fn unbounded() -> Self {
        Self {
            max_attempts: None,
            delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Retry at most `attempts` times with the default fixed delay
    pub fn bounded(attempts: u32) -> Self {
        Self {
            max_attempts: Some(attempts),
            delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Override the delay between attempts
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Whether another attempt is allowed after `attempt` attempts have run
    pub fn allows_another(&self, attempt: u32) -> bool {
        match self.max_attempts {
            Some(max) => attempt < max,
            None => true,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_always_allows_another() {
        let policy = RetryPolicy::unbounded();
        assert!(policy.allows_another(0));
        assert!(policy.allows_another(1_000_000));
        assert_eq!(policy.delay, Duration::from_secs(10));
    }

    #[test]
    fn test_bounded_stops_at_max() {
        let policy = RetryPolicy::bounded(3);
        assert!(policy.allows_another(0));
        assert!(policy.allows_another(2));
        assert!(!policy.allows_another(3));
    }

    #[test]
    fn test_with_delay() {
        let policy = RetryPolicy::bounded(1).with_delay(Duration::from_millis(5));
        assert_eq!(policy.delay, Duration::from_millis(5));
    }
}
