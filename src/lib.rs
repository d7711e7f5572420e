//! # Coin Market SDK
//!
//! Client core for a crypto market viewer: coin price listings, OHLC history,
//! and the screen-space geometry for candlestick charts and sparklines.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, formatting, domain slices (always available, WASM-safe)
//! 2. **HTTP API** — `CoinHttp` with exponential-backoff retry
//! 3. **High-Level Client** — `CoinClient` with nested sub-clients
//! 4. **Chart** — Pure layout functions for candlesticks and sparklines
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coin_market_sdk::prelude::*;
//!
//! let client = CoinClient::builder().build()?;
//!
//! let gainers = client.coins().tab(MarketTab::TopGainers).await;
//!
//! let mut list = CoinListState::new();
//! client.coins().load_page(&mut list, 1).await;
//! client.coins().load_more(&mut list).await;
//!
//! let bars = client.ohlc().fetch(&ProductId::from("1"), Timeframe::OneWeek).await;
//! let layout = layout_candles(&bars, 390.0, 250.0, &CandleStyle::default());
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and formatting used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CoinClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Chart geometry ──────────────────────────────────────────────────

/// Candlestick and sparkline layout.
pub mod chart;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + formatting
    pub use crate::shared::{
        coin_color, format_optional_price, format_price, format_price_change, ProductId,
        Timeframe,
    };

    // Domain types — coin
    pub use crate::domain::coin::{
        apply_filter, rank, CoinListState, CoinSummary, MarketTab, PageRequest, PricedPage,
    };

    // Domain types — OHLC
    pub use crate::domain::ohlc::{OhlcBar, OhlcRequest, OhlcState, OhlcStats};

    // Chart geometry
    pub use crate::chart::{
        layout_candles, layout_sparkline, sparkline_trend, CandleLayout, CandleStyle,
        SparklineLayout, Trend,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{CoinClient, CoinClientBuilder, CoinsClient, OhlcClient};
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
