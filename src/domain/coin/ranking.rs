//! Market tab ranking — Featured / Top Gainers / Top Losers.

use super::CoinSummary;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Entries shown per tab.
pub const RANK_LIMIT: usize = 20;

/// Market screen tab selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketTab {
    #[default]
    Featured,
    #[serde(rename = "Top Gainers")]
    TopGainers,
    #[serde(rename = "Top Losers")]
    TopLosers,
}

impl MarketTab {
    pub const ALL: [MarketTab; 3] = [
        MarketTab::Featured,
        MarketTab::TopGainers,
        MarketTab::TopLosers,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MarketTab::Featured => "Featured",
            MarketTab::TopGainers => "Top Gainers",
            MarketTab::TopLosers => "Top Losers",
        }
    }

    fn compare(&self, a: &CoinSummary, b: &CoinSummary) -> Ordering {
        match self {
            MarketTab::Featured => b.market_cap.total_cmp(&a.market_cap),
            MarketTab::TopGainers => b
                .price_change_percentage_24h
                .total_cmp(&a.price_change_percentage_24h),
            MarketTab::TopLosers => a
                .price_change_percentage_24h
                .total_cmp(&b.price_change_percentage_24h),
        }
    }
}

impl std::fmt::Display for MarketTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Rank `coins` for `tab` and keep the first [`RANK_LIMIT`].
///
/// The sort is stable, so equal keys keep fetch order and ranking an already
/// ranked list returns it unchanged.
pub fn rank(coins: &[CoinSummary], tab: MarketTab) -> Vec<CoinSummary> {
    let mut ranked = coins.to_vec();
    ranked.sort_by(|a, b| tab.compare(a, b));
    ranked.truncate(RANK_LIMIT);
    ranked
}
