//! Wire types for OHLC responses (REST).

use crate::shared::serde_util::f64_or_zero;
use serde::{Deserialize, Serialize};

/// Open/high/low/close in one currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OhlcQuote {
    #[serde(default, deserialize_with = "f64_or_zero::deserialize")]
    pub open: f64,
    #[serde(default, deserialize_with = "f64_or_zero::deserialize")]
    pub high: f64,
    #[serde(default, deserialize_with = "f64_or_zero::deserialize")]
    pub low: f64,
    #[serde(default, deserialize_with = "f64_or_zero::deserialize")]
    pub close: f64,
}

/// One element of the `/coin-ohlc` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcResponse {
    /// Bar open time, Unix milliseconds.
    pub date: i64,
    pub usd: OhlcQuote,
    #[serde(default)]
    pub aed: OhlcQuote,
}
