//! Bounded retry for opening the database.
//!
//! Only errors that report themselves as transient are retried; anything
//! else fails on the first attempt.

use crate::DbError;

use std::fmt::Display;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::time::sleep;

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    pub max_attempts: u32,
    /// Wait before the second attempt
    pub initial_delay: Duration,
    /// Cap on any single wait
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
    /// Scale each wait by a random factor in [0.5, 1.5)
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(5),
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, initial_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_delay,
            ..Self::default()
        }
    }

    /// Single attempt, no waiting
    pub fn none() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Waits between consecutive attempts, before jitter.
    /// Yields `max_attempts - 1` values.
    pub fn backoff(&self) -> impl Iterator<Item = Duration> + '_ {
        let first = self.initial_delay.min(self.max_delay);
        std::iter::successors(Some(first), move |wait| {
            Some(scale(*wait, self.backoff_multiplier).min(self.max_delay))
        })
        .take(self.max_attempts.saturating_sub(1) as usize)
    }

    fn jittered(&self, wait: Duration) -> Duration {
        if self.jitter {
            scale(wait, rand::random_range(0.5..1.5))
        } else {
            wait
        }
    }
}

/// `wait * factor`, saturating instead of panicking on overflow or a negative factor
fn scale(wait: Duration, factor: f64) -> Duration {
    Duration::try_from_secs_f64(wait.as_secs_f64() * factor).unwrap_or(Duration::MAX)
}

pub trait IsRetryable {
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for DbError {
    fn is_retryable(&self) -> bool {
        self.is_transient()
    }
}

/// Run `operation` until it succeeds, fails permanently, or the policy's
/// attempts are used up. The last error is returned.
pub async fn with_retry<F, Fut, T, E>(
    policy: &RetryPolicy,
    what: &str,
    mut operation: F,
) -> std::result::Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
    E: Display + IsRetryable,
{
    let mut backoff = policy.backoff();
    let mut attempt = 1;

    loop {
        let error = match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    info!("{} succeeded on attempt {}", what, attempt);
                }
                return Ok(value);
            }
            Err(error) => error,
        };

        let wait = match backoff.next() {
            Some(wait) if error.is_retryable() => policy.jittered(wait),
            _ => {
                warn!(
                    "{} failed on attempt {} of {}: {}",
                    what, attempt, policy.max_attempts, error
                );
                return Err(error);
            }
        };

        debug!("{} attempt {} failed: {}; retrying in {:?}", what, attempt, error, wait);
        sleep(wait).await;
        attempt += 1;
    }
}
