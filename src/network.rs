//! Network constants for the coin price API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://coingeko.burjx.com";

/// Page size requested for the Featured/Gainers/Losers tabs.
pub const TAB_PAGE_SIZE: u32 = 100;

/// Page size for the infinite-scroll "all coins" list.
pub const ALL_COINS_PAGE_SIZE: u32 = 20;
