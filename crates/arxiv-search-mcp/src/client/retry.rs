//! Bounded fixed-interval retry.
//!
//! A failed attempt is reissued after a constant delay while the error is
//! transient and the retry budget lasts; the last error is surfaced once it
//! runs out. No jitter, no exponential growth.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use crate::config::Config;
use crate::error::ClientError;

/// Errors that can tell whether reissuing the request may help.
pub trait Transient {
    /// True if the same request could succeed on another attempt.
    fn is_transient(&self) -> bool;
}

impl Transient for ClientError {
    fn is_transient(&self) -> bool {
        self.is_retryable()
    }
}

/// How many times to reissue a request and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: u32,

    /// Pause before each retry.
    pub delay: Duration,
}

impl RetryPolicy {
    /// Create a policy.
    #[must_use]
    pub const fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    /// Policy from client configuration.
    #[must_use]
    pub const fn from_config(config: &Config) -> Self {
        Self::new(config.max_retries, config.retry_delay)
    }

    /// Attempts including the first.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Run `operation` until it succeeds, fails permanently, or the budget is spent.
    pub async fn run<T, E, F, Fut>(&self, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Transient + Display,
    {
        let mut attempt = 1;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_transient() && attempt <= self.max_retries => {
                    tracing::warn!(
                        attempt,
                        max_attempts = self.max_attempts(),
                        error = %err,
                        "Transient failure, retrying in {:?}",
                        self.delay
                    );
                    tokio::time::sleep(self.delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    if err.is_transient() {
                        tracing::error!(attempts = attempt, error = %err, "Retries exhausted");
                    }
                    return Err(err);
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
