//! Coin domain — market list rows, pages, search, tab ranking.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod ranking;
pub mod state;
pub mod wire;

use crate::shared::ProductId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use ranking::{rank, MarketTab, RANK_LIMIT};
pub use state::{apply_filter, CoinListState, PageRequest};

// ─── CoinSummary ─────────────────────────────────────────────────────────────

/// One coin as shown in the market list.
///
/// `id` keys list rows; `product_id` is what the detail screen hands to the
/// OHLC endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinSummary {
    pub product_id: ProductId,
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub current_price: f64,
    pub price_change_percentage_24h: f64,
    pub sparkline: Vec<f64>,
    pub market_cap: f64,
    pub trading_volume: f64,
}

impl CoinSummary {
    /// Case-insensitive substring match on name or symbol.
    ///
    /// `needle` must already be lowercased and trimmed.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.symbol.to_lowercase().contains(needle)
    }

    pub fn accent_color(&self) -> &'static str {
        crate::shared::coin_color(&self.symbol)
    }
}

// ─── PricedPage ──────────────────────────────────────────────────────────────

/// One page of the paginated price listing, items in API order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricedPage {
    pub items: Vec<CoinSummary>,
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

impl PricedPage {
    pub fn is_last(&self) -> bool {
        self.items.is_empty() || (self.total_pages > 0 && self.page >= self.total_pages)
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Coin row missing id (symbol {symbol:?})")]
    MissingId { symbol: String },
}
