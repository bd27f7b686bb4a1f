//! Optimistic-concurrency retry loop.
//!
//! Read-modify-write operations condition their write on the version they
//! read. When another writer got there first the store reports a conflict and
//! the whole read-modify-write is run again, with a short jittered pause.

use rand::Rng;
use std::future::Future;
use std::time::Duration;

/// Configuration for conflict retries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total attempts including the first (always at least 1)
    pub max_attempts: u32,
    /// Base delay in milliseconds before the second attempt
    pub base_delay_ms: u64,
    /// Maximum delay in milliseconds (caps exponential growth)
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay_ms: 10,
            max_delay_ms: 200,
        }
    }
}

impl RetryConfig {
    /// Retries without sleeping, for tests.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay_ms: 0,
            max_delay_ms: 0,
        }
    }

    /// Exponential backoff with up to 50% jitter, capped.
    fn delay_for(&self, attempt: u32) -> Duration {
        let exponential = self
            .base_delay_ms
            .saturating_mul(2u64.saturating_pow(attempt.saturating_sub(1)));
        let capped = exponential.min(self.max_delay_ms);
        if capped == 0 {
            return Duration::ZERO;
        }
        let jitter = rand::thread_rng().gen_range(0..=capped / 2);
        Duration::from_millis(capped + jitter)
    }
}

/// Errors a retried operation can fail with.
pub trait ConflictAware {
    fn is_conflict(&self) -> bool;
}

/// Run `attempt` until it succeeds, fails with a non-conflict error, or
/// `max_attempts` conflicts have happened. Returns the last error on
/// exhaustion.
pub async fn retry_on_conflict<T, E, F, Fut>(
    config: &RetryConfig,
    operation: &'static str,
    key: &str,
    mut attempt: F,
) -> Result<T, E>
where
    E: ConflictAware + std::fmt::Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let max_attempts = config.max_attempts.max(1);
    let mut tries = 1;
    loop {
        match attempt().await {
            Err(e) if e.is_conflict() && tries < max_attempts => {
                let delay = config.delay_for(tries);
                tracing::debug!(
                    operation,
                    key,
                    attempt = tries,
                    max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "Concurrent write detected, retrying"
                );
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                tries += 1;
            }
            Err(e) if e.is_conflict() => {
                tracing::warn!(
                    operation,
                    key,
                    attempts = tries,
                    "Giving up after repeated write conflicts"
                );
                return Err(e);
            }
            other => return other,
        }
    }
}
