//! High-level client — `CoinClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared configuration, and accessor methods.

use crate::domain::coin::client::Coins;
use crate::domain::ohlc::client::Ohlc;
use crate::error::SdkError;
use crate::http::{CoinHttp, RetryConfig};
use crate::network::{ALL_COINS_PAGE_SIZE, DEFAULT_API_URL, TAB_PAGE_SIZE};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::coin::client::Coins as CoinsClient;
pub use crate::domain::ohlc::client::Ohlc as OhlcClient;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.coins()`, `client.ohlc()`. Cloning is cheap and clones share the
/// underlying connection pool.
#[derive(Clone)]
pub struct CoinClient {
    pub(crate) http: CoinHttp,
    /// Page size for the Featured/Gainers/Losers tabs.
    pub(crate) tab_page_size: u32,
    /// Page size for the infinite-scroll "all coins" list.
    pub(crate) all_coins_page_size: u32,
}

impl CoinClient {
    pub fn builder() -> CoinClientBuilder {
        CoinClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    pub fn ohlc(&self) -> Ohlc<'_> {
        Ohlc { client: self }
    }

    /// Low-level HTTP client, for endpoints without a sub-client method.
    pub fn http(&self) -> &CoinHttp {
        &self.http
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinClientBuilder {
    base_url: String,
    retry: RetryConfig,
    timeout: Duration,
    tab_page_size: u32,
    all_coins_page_size: u32,
}

impl Default for CoinClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            retry: RetryConfig::default(),
            timeout: Duration::from_secs(30),
            tab_page_size: TAB_PAGE_SIZE,
            all_coins_page_size: ALL_COINS_PAGE_SIZE,
        }
    }
}

impl CoinClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Per-attempt request timeout (native only).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn tab_page_size(mut self, size: u32) -> Self {
        self.tab_page_size = size;
        self
    }

    pub fn all_coins_page_size(mut self, size: u32) -> Self {
        self.all_coins_page_size = size;
        self
    }

    pub fn build(self) -> Result<CoinClient, SdkError> {
        if self.base_url.trim().is_empty() {
            return Err(SdkError::Validation("base_url must not be empty".into()));
        }
        if self.tab_page_size == 0 || self.all_coins_page_size == 0 {
            return Err(SdkError::Validation("page sizes must be positive".into()));
        }

        Ok(CoinClient {
            http: CoinHttp::with_config(&self.base_url, self.retry, self.timeout),
            tab_page_size: self.tab_page_size,
            all_coins_page_size: self.all_coins_page_size,
        })
    }
}
