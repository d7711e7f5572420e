//! Unified SDK error types.

#[cfg(feature = "http")]
use crate::http::retry::RetryConfig;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Transport failure: connect, timeout, reset, body read.
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed response body: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded {
        attempts: u32,
        #[source]
        last_error: Box<HttpError>,
    },
}

impl HttpError {
    /// HTTP status carried by this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            HttpError::RateLimited { .. } => Some(429),
            HttpError::NotFound(_) => Some(404),
            HttpError::MaxRetriesExceeded { last_error, .. } => last_error.status(),
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            HttpError::Parse(_) => None,
        }
    }

    /// Whether another attempt could succeed under `config`.
    ///
    /// Transport failures always qualify. Status errors qualify only when
    /// their code is in `config.retryable_statuses`.
    #[cfg(feature = "http")]
    pub fn is_retryable(&self, config: &RetryConfig) -> bool {
        match self {
            HttpError::Reqwest(_) => true,
            HttpError::Status { status, .. } => config.retryable_statuses.contains(status),
            HttpError::RateLimited { .. } => config.retryable_statuses.contains(&429),
            HttpError::NotFound(_) => config.retryable_statuses.contains(&404),
            HttpError::Parse(_) | HttpError::MaxRetriesExceeded { .. } => false,
        }
    }
}
