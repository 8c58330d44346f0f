//! Rate-limit backoff policy.
//!
//! When a provider answers with HTTP 429 the client waits once for the
//! configured delay and then reports the failure — it never retries, so
//! a provider's backoff can never push the aggregator past its own
//! deadline. The policy is a plain value so tests can inject a zero
//! delay or run under tokio's paused clock.

use std::time::Duration;

/// A fixed, single-shot backoff applied on an explicit rate-limit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffPolicy {
    delay: Duration,
}

impl BackoffPolicy {
    /// A policy waiting `delay` once before giving up.
    pub fn fixed(delay: Duration) -> Self {
        Self { delay }
    }

    /// A policy that never waits. Useful in tests.
    pub fn none() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait out the backoff once.
    pub async fn wait(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn fixed_backoff_waits_configured_delay() {
        let policy = BackoffPolicy::fixed(Duration::from_secs(2));
        let before = Instant::now();
        policy.wait().await;
        assert_eq!(before.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn none_completes_without_advancing_time() {
        let policy = BackoffPolicy::none();
        let before = Instant::now();
        policy.wait().await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }

    #[test]
    fn delay_accessor() {
        assert_eq!(
            BackoffPolicy::fixed(Duration::from_millis(250)).delay(),
            Duration::from_millis(250)
        );
        assert_eq!(BackoffPolicy::none().delay(), Duration::ZERO);
    }
}
