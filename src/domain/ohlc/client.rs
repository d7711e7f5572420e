//! OHLC sub-client — candlestick history queries.

use crate::client::CoinClient;
use crate::domain::ohlc::state::PendingOhlc;
use crate::domain::ohlc::{OhlcBar, OhlcState};
use crate::error::SdkError;
use crate::shared::{ProductId, Timeframe};

/// Sub-client for OHLC history.
pub struct Ohlc<'a> {
    pub(crate) client: &'a CoinClient,
}

impl<'a> Ohlc<'a> {
    /// Fetch bars for `product_id` over `timeframe`, keeping errors.
    pub async fn get(
        &self,
        product_id: &ProductId,
        timeframe: Timeframe,
    ) -> Result<Vec<OhlcBar>, SdkError> {
        let resp = self.client.http.get_ohlc(product_id, timeframe).await?;
        Ok(resp.into_iter().map(OhlcBar::from).collect())
    }

    /// Fetch bars, yielding an empty list on any failure.
    pub async fn fetch(&self, product_id: &ProductId, timeframe: Timeframe) -> Vec<OhlcBar> {
        match self.get(product_id, timeframe).await {
            Ok(bars) => bars,
            Err(e) => {
                tracing::error!(
                    product_id = %product_id,
                    days = timeframe.as_days(),
                    error = %e,
                    "Error fetching OHLC data"
                );
                Vec::new()
            }
        }
    }

    /// Load `(product_id, timeframe)` into `state`.
    ///
    /// Returns whether the response was applied (`false` if a newer load
    /// started meanwhile).
    pub async fn load(
        &self,
        state: &mut OhlcState,
        product_id: ProductId,
        timeframe: Timeframe,
    ) -> bool {
        let request = state.begin(product_id, timeframe);
        let pending = PendingOhlc::new(state, request);
        let request = pending.request();
        let bars = self.fetch(&request.product_id, request.timeframe).await;
        pending.finish(bars)
    }
}
