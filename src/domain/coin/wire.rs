//! Wire types for coin price responses (REST).

use crate::shared::serde_util::{f64_or_zero, vec_or_empty};
use crate::shared::ProductId;
use serde::{Deserialize, Serialize};

/// One coin row from `/coin-prices-all`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinPriceResponse {
    #[serde(default)]
    pub product_id: ProductId,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, deserialize_with = "f64_or_zero::deserialize")]
    pub current_price: f64,
    #[serde(default, deserialize_with = "f64_or_zero::deserialize")]
    pub price_change_percentage_24h: f64,
    #[serde(default, deserialize_with = "vec_or_empty::deserialize")]
    pub sparkline: Vec<f64>,
    #[serde(default, deserialize_with = "f64_or_zero::deserialize")]
    pub market_cap: f64,
    #[serde(default, deserialize_with = "f64_or_zero::deserialize")]
    pub trading_volume: f64,
}

/// Paged envelope from `/coin-prices-all`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinPricesResponse {
    #[serde(default, deserialize_with = "vec_or_empty::deserialize")]
    pub data: Vec<CoinPriceResponse>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub total_pages: u32,
}
