//! OHLC domain — candlestick bars for the coin detail chart.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use state::{OhlcRequest, OhlcState};

/// One sampling interval, USD and AED quotes.
///
/// `low <= open, close <= high` is not enforced; the backend occasionally
/// violates it and the chart copes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcBar {
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
    pub usd_open: f64,
    pub usd_high: f64,
    pub usd_low: f64,
    pub usd_close: f64,
    pub aed_open: f64,
    pub aed_high: f64,
    pub aed_low: f64,
    pub aed_close: f64,
}

impl OhlcBar {
    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp)
    }

    pub fn is_up(&self) -> bool {
        self.usd_close >= self.usd_open
    }
}

/// Summary row under the detail chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OhlcStats {
    /// High of the latest bar.
    pub high: f64,
    /// Low of the latest bar.
    pub low: f64,
    /// Open of the earliest bar.
    pub open: f64,
}

impl OhlcStats {
    pub fn from_bars(bars: &[OhlcBar]) -> Option<Self> {
        let first = bars.first()?;
        let last = bars.last()?;
        Some(Self {
            high: last.usd_high,
            low: last.usd_low,
            open: first.usd_open,
        })
    }
}
