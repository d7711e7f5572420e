//! Low-level HTTP client — `CoinHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens at the sub-client boundary). `CoinClient` wraps this.

use crate::domain::coin::wire::CoinPricesResponse;
use crate::domain::ohlc::wire::OhlcResponse;
use crate::error::HttpError;
use crate::http::retry::{with_retry, RetryConfig, RetryPolicy};
use crate::shared::{ProductId, Timeframe};

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the coin price API.
#[derive(Clone)]
pub struct CoinHttp {
    base_url: String,
    client: Client,
    retry: RetryConfig,
}

impl CoinHttp {
    pub fn new(base_url: &str) -> Self {
        Self::with_config(base_url, RetryConfig::default(), Duration::from_secs(30))
    }

    pub fn with_config(base_url: &str, retry: RetryConfig, timeout: Duration) -> Self {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            retry,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    // ── Endpoints ────────────────────────────────────────────────────────

    pub fn coin_prices_url(&self, page: u32, page_size: u32) -> String {
        format!(
            "{}/coin-prices-all?currency=usd&page={}&pageSize={}",
            self.base_url, page, page_size
        )
    }

    pub fn ohlc_url(&self, product_id: &ProductId, timeframe: Timeframe) -> String {
        format!(
            "{}/coin-ohlc?productId={}&days={}",
            self.base_url,
            urlencoding::encode(product_id.as_str()),
            timeframe.as_days()
        )
    }

    pub async fn get_coin_prices(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<CoinPricesResponse, HttpError> {
        let url = self.coin_prices_url(page, page_size);
        self.get(&url, RetryPolicy::Default).await
    }

    pub async fn get_ohlc(
        &self,
        product_id: &ProductId,
        timeframe: Timeframe,
    ) -> Result<Vec<OhlcResponse>, HttpError> {
        let url = self.ohlc_url(product_id, timeframe);
        self.get(&url, RetryPolicy::Default).await
    }

    // ── Generic fetch ────────────────────────────────────────────────────

    /// GET `url` with explicit retry settings and parse the body as JSON.
    ///
    /// Transport failures and retryable statuses are retried with
    /// exponential backoff. A body that fails to parse is not retried.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: &RetryConfig,
    ) -> Result<T, HttpError> {
        tracing::debug!(url, "GET");
        let body = with_retry(retry, url, || self.fetch_body(url)).await?;
        serde_json::from_slice(&body).map_err(HttpError::Parse)
    }

    /// GET `url` under a per-call [`RetryPolicy`] and parse the body as JSON.
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match retry {
            RetryPolicy::None => RetryConfig::none(),
            RetryPolicy::Default => self.retry.clone(),
            RetryPolicy::Custom(c) => c,
        };
        self.fetch_json(url, &config).await
    }

    /// One attempt: send, check status, read the raw body.
    async fn fetch_body(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.bytes().await?.to_vec());
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(|secs| secs.saturating_mul(1000));
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited { retry_after_ms }),
            _ => Err(HttpError::Status {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_prices_url() {
        let http = CoinHttp::new("https://api.example.com/");
        assert_eq!(
            http.coin_prices_url(2, 20),
            "https://api.example.com/coin-prices-all?currency=usd&page=2&pageSize=20"
        );
    }

    #[test]
    fn test_ohlc_url_encodes_product_id() {
        let http = CoinHttp::new("https://api.example.com");
        let url = http.ohlc_url(&ProductId::from("usd coin"), Timeframe::All);
        assert_eq!(
            url,
            "https://api.example.com/coin-ohlc?productId=usd%20coin&days=max"
        );
    }

    #[test]
    fn test_ohlc_url_days_per_timeframe() {
        let http = CoinHttp::new("https://api.example.com");
        let id = ProductId::from("1");
        let days: Vec<String> = Timeframe::ALL
            .iter()
            .map(|tf| {
                let url = http.ohlc_url(&id, *tf);
                url.rsplit("days=").next().unwrap_or_default().to_string()
            })
            .collect();
        assert_eq!(days, ["1", "7", "30", "365", "max"]);
    }
}
