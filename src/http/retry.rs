//! Retry policies for HTTP requests.

use crate::error::HttpError;
use std::future::Future;
use std::time::Duration;

/// Retry policy for an HTTP request.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// Single attempt, no retries.
    None,
    /// The client's configured [`RetryConfig`].
    #[default]
    Default,
    /// Per-call override.
    Custom(RetryConfig),
}

/// Configuration for retry behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    /// Initial delay before the first retry.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    /// Whether to add jitter to the delay.
    pub jitter: bool,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    /// The public price API answers 403/429 when throttling and 5xx when
    /// overloaded, so all of those are worth another attempt.
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(1000),
            max_delay: Duration::from_secs(60),
            backoff_factor: 2.0,
            jitter: false,
            retryable_statuses: vec![403, 429, 500, 502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// A config that never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Calculate delay for a given attempt (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.initial_delay.as_millis() as f64
            * self.backoff_factor.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter {
            let jitter_range = capped * 0.25;
            let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;
            (capped + jitter).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }
}

/// Drive `op` until it succeeds, fails terminally, or retries run out.
///
/// Attempts are strictly sequential: the next one starts only after the
/// previous future resolved and the backoff delay elapsed.
pub async fn with_retry<T, F, Fut>(
    config: &RetryConfig,
    url: &str,
    mut op: F,
) -> Result<T, HttpError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, HttpError>>,
{
    let mut attempt: u32 = 0;
    loop {
        let err = match op().await {
            Ok(value) => return Ok(value),
            Err(e) => e,
        };

        if !err.is_retryable(config) {
            return Err(err);
        }

        if attempt >= config.max_retries {
            if config.max_retries == 0 {
                return Err(err);
            }
            tracing::error!(
                attempts = attempt + 1,
                error = %err,
                "Giving up on {}",
                url
            );
            return Err(HttpError::MaxRetriesExceeded {
                attempts: attempt + 1,
                last_error: Box::new(err),
            });
        }

        let mut delay = config.delay_for_attempt(attempt);
        if let HttpError::RateLimited {
            retry_after_ms: Some(ms),
        } = &err
        {
            delay = delay.max(Duration::from_millis(*ms)).min(config.max_delay);
        }

        tracing::warn!(
            attempt = attempt + 1,
            remaining = config.max_retries - attempt,
            delay_ms = delay.as_millis() as u64,
            error = %err,
            "Retrying request to {}",
            url
        );
        futures_timer::Delay::new(delay).await;
        attempt += 1;
    }
}
