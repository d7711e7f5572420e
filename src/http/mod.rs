//! HTTP client layer — `CoinHttp` with retry policies.

pub mod client;
pub mod retry;

pub use client::CoinHttp;
pub use retry::{RetryConfig, RetryPolicy};
