use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

/// Default maximum number of attempts, including the first.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 8;

/// Default delay before the first retry.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(500);

/// Default per-retry delay growth factor.
pub const DEFAULT_GROWTH_FACTOR: f64 = 2.0;

/// Exponential backoff schedule for transient lookup failures.
///
/// The delay before retry `k` (1-indexed) is
/// `base_delay * growth_factor^(k - 1)`. No jitter is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first.
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub base_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub growth_factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl RetryPolicy {
    /// Returns the backoff delay preceding retry number `retry`
    /// (1-indexed).
    pub fn delay(&self, retry: u32) -> Duration {
        self.base_delay
            .mul_f64(self.growth_factor.powi(retry.saturating_sub(1) as i32))
    }
}

/// Passed to the backoff hook once per backoff sleep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffEvent {
    /// The attempt that just failed (1-indexed).
    pub attempt: u32,
    /// How long the client will sleep before the next attempt.
    pub delay: Duration,
}

/// Callback invoked on each backoff, e.g. for operator logging.
pub type BackoffHook = Box<dyn Fn(BackoffEvent) + Send + Sync>;

/// Cloneable cancellation signal checked between lookup attempts.
///
/// Cancelling aborts the remaining backoff sleeps promptly; it does
/// not interrupt a request already in flight.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::{CancelToken, RetryPolicy};
    use std::time::Duration;

    #[test]
    fn test_delay_grows_exponentially() {
        let policy = RetryPolicy {
            max_attempts: 8,
            base_delay: Duration::from_millis(500),
            growth_factor: 2.0,
        };
        assert_eq!(policy.delay(1), Duration::from_millis(500));
        assert_eq!(policy.delay(2), Duration::from_millis(1000));
        assert_eq!(policy.delay(3), Duration::from_millis(2000));
        assert_eq!(policy.delay(7), Duration::from_millis(32_000));
    }

    #[test]
    fn test_cancel_token_is_shared() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }
}
