//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;
pub mod serde_util;

pub use fmt::num::{format_optional_price, format_price, format_price_change};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── ProductId ───────────────────────────────────────────────────────────────

/// Newtype for the product identifier used by the OHLC endpoint.
///
/// The list API sends it as a JSON number, detail navigation passes it around
/// as a string; both deserialize into the same value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl FromStr for ProductId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ProductId(s.to_string()))
    }
}

impl Serialize for ProductId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Str(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => ProductId(n.to_string()),
            Raw::Float(n) => ProductId(n.to_string()),
            Raw::Str(s) => ProductId(s),
        })
    }
}

// ─── Timeframe ───────────────────────────────────────────────────────────────

/// Lookback window for the OHLC endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[default]
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "ALL")]
    All,
}

impl Timeframe {
    /// Selector order.
    pub const ALL: [Timeframe; 5] = [
        Timeframe::OneDay,
        Timeframe::OneWeek,
        Timeframe::OneMonth,
        Timeframe::OneYear,
        Timeframe::All,
    ];

    /// Value of the `days` query parameter.
    pub fn as_days(&self) -> &'static str {
        match self {
            Self::OneDay => "1",
            Self::OneWeek => "7",
            Self::OneMonth => "30",
            Self::OneYear => "365",
            Self::All => "max",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::OneWeek => "1W",
            Self::OneMonth => "1M",
            Self::OneYear => "1Y",
            Self::All => "ALL",
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    /// Accepts either the selector label (`"1W"`) or the `days` value (`"7"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timeframe::ALL
            .into_iter()
            .find(|tf| tf.label().eq_ignore_ascii_case(s) || tf.as_days() == s)
            .ok_or_else(|| format!("Unknown timeframe: {s}"))
    }
}

// ─── Coin colors ─────────────────────────────────────────────────────────────

/// Fallback accent for symbols without a brand color.
pub const DEFAULT_COIN_COLOR: &str = "#ACACAC";

/// Brand accent color for a coin symbol (case-insensitive).
pub fn coin_color(symbol: &str) -> &'static str {
    match symbol.to_ascii_lowercase().as_str() {
        "btc" => "#F7931A",
        "eth" => "#627EEA",
        "bnb" => "#F3BA2F",
        "sol" => "#00FFA3",
        _ => DEFAULT_COIN_COLOR,
    }
}
