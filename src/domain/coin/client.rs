//! Coins sub-client — price pages, tab rankings, paginated list loading.

use crate::client::CoinClient;
use crate::domain::coin::state::PendingPage;
use crate::domain::coin::wire::CoinPricesResponse;
use crate::domain::coin::{rank, CoinListState, CoinSummary, MarketTab, PageRequest, PricedPage};
use crate::error::SdkError;

/// Sub-client for coin price listings.
pub struct Coins<'a> {
    pub(crate) client: &'a CoinClient,
}

impl<'a> Coins<'a> {
    /// Fetch one page of prices. Errors are returned, not swallowed.
    pub async fn page(&self, page: u32, page_size: u32) -> Result<PricedPage, SdkError> {
        let resp = self.client.http.get_coin_prices(page, page_size).await?;
        Ok(resp.into())
    }

    /// Fetch the coin rows behind `url`.
    ///
    /// Never fails: any error after retries (or a malformed body) is logged
    /// and yields an empty list, indistinguishable from an empty page.
    pub async fn fetch_page(&self, url: &str) -> Vec<CoinSummary> {
        let retry = self.client.http.retry_config();
        match self
            .client
            .http
            .fetch_json::<CoinPricesResponse>(url, retry)
            .await
        {
            Ok(resp) => PricedPage::from(resp).items,
            Err(e) => {
                tracing::error!(url, error = %e, "Error fetching coin data");
                Vec::new()
            }
        }
    }

    /// Page 1 of the tab listing, ranked for `tab`.
    pub async fn tab(&self, tab: MarketTab) -> Vec<CoinSummary> {
        let url = self
            .client
            .http
            .coin_prices_url(1, self.client.tab_page_size);
        let coins = self.fetch_page(&url).await;
        rank(&coins, tab)
    }

    /// Fetch the page described by `request` from the "all coins" listing.
    pub async fn fetch_for(&self, request: &PageRequest) -> Vec<CoinSummary> {
        let url = self
            .client
            .http
            .coin_prices_url(request.page, self.client.all_coins_page_size);
        self.fetch_page(&url).await
    }

    /// Load `page` into `state` (page 1 replaces, later pages append).
    ///
    /// Returns whether the response was applied. Dropping the future
    /// before it resolves releases the in-flight guard.
    pub async fn load_page(&self, state: &mut CoinListState, page: u32) -> bool {
        let request = state.begin_load(page);
        let pending = PendingPage::new(state, request);
        let items = self.fetch_for(&request).await;
        pending.finish(items)
    }

    /// Load the next page unless a load is in flight, the list is exhausted,
    /// or a search is active. Returns whether a request was made.
    pub async fn load_more(&self, state: &mut CoinListState) -> bool {
        let Some(request) = state.begin_load_more() else {
            return false;
        };
        let pending = PendingPage::new(state, request);
        let items = self.fetch_for(&request).await;
        pending.finish(items);
        true
    }
}
