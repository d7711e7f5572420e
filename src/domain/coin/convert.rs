//! Conversion: CoinPriceResponse → CoinSummary, CoinPricesResponse → PricedPage.

use super::wire;
use super::{CoinSummary, PricedPage, ValidationError};

impl TryFrom<wire::CoinPriceResponse> for CoinSummary {
    type Error = ValidationError;

    fn try_from(source: wire::CoinPriceResponse) -> Result<Self, Self::Error> {
        if source.id.trim().is_empty() {
            return Err(ValidationError::MissingId {
                symbol: source.symbol,
            });
        }

        Ok(CoinSummary {
            product_id: source.product_id,
            id: source.id,
            name: source.name,
            symbol: source.symbol,
            image: source.image,
            current_price: source.current_price,
            price_change_percentage_24h: source.price_change_percentage_24h,
            sparkline: source.sparkline,
            market_cap: source.market_cap,
            trading_volume: source.trading_volume,
        })
    }
}

/// Rows that fail validation are dropped with a warning.
impl From<wire::CoinPricesResponse> for PricedPage {
    fn from(source: wire::CoinPricesResponse) -> Self {
        let items = source
            .data
            .into_iter()
            .filter_map(|row| match CoinSummary::try_from(row) {
                Ok(coin) => Some(coin),
                Err(err) => {
                    tracing::warn!(page = source.page, "Dropping coin row: {}", err);
                    None
                }
            })
            .collect();

        PricedPage {
            items,
            page: source.page,
            page_size: source.page_size,
            total_items: source.total_items,
            total_pages: source.total_pages,
        }
    }
}
