//! Coin list state containers — app-owned, SDK-provided update logic.

use super::CoinSummary;

/// Filter `base` by a search query.
///
/// Blank queries return `base` unchanged; otherwise keeps coins whose name or
/// symbol contains the trimmed query, ignoring case.
pub fn apply_filter(query: &str, base: &[CoinSummary]) -> Vec<CoinSummary> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return base.to_vec();
    }
    base.iter().filter(|c| c.matches(&needle)).cloned().collect()
}

/// Token for one outstanding page load.
///
/// A response is applied only if its token is still the current in-flight
/// request, so results from superseded loads are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub version: u64,
}

/// Accumulating "all coins" list with infinite-scroll pagination and search.
///
/// The app owns instances of this type. The SDK provides update methods.
#[derive(Debug, Clone)]
pub struct CoinListState {
    coins: Vec<CoinSummary>,
    filtered: Vec<CoinSummary>,
    query: String,
    /// Last page successfully applied; 0 before the first load.
    page: u32,
    has_more: bool,
    in_flight: Option<PageRequest>,
    /// Bumped on every load start and every change to `coins`.
    version: u64,
}

impl Default for CoinListState {
    fn default() -> Self {
        Self {
            coins: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            page: 0,
            has_more: true,
            in_flight: None,
            version: 0,
        }
    }
}

impl CoinListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading `page`, superseding any load already in flight.
    ///
    /// Page 1 is a refresh: it re-enables pagination.
    pub fn begin_load(&mut self, page: u32) -> PageRequest {
        let page = page.max(1);
        if page == 1 {
            self.has_more = true;
        }
        self.version += 1;
        let request = PageRequest {
            page,
            version: self.version,
        };
        self.in_flight = Some(request);
        request
    }

    /// Start loading the next page, or `None` if a load is already in
    /// flight, the list is exhausted, or a search is active.
    pub fn begin_load_more(&mut self) -> Option<PageRequest> {
        if self.in_flight.is_some() || !self.has_more || self.is_searching() {
            return None;
        }
        Some(self.begin_load(self.page + 1))
    }

    /// Apply a fetched page. Returns `false` if `request` was superseded.
    pub fn apply_page(&mut self, request: PageRequest, items: Vec<CoinSummary>) -> bool {
        if self.in_flight != Some(request) {
            tracing::debug!(
                page = request.page,
                version = request.version,
                "Ignoring stale coin page"
            );
            return false;
        }
        self.in_flight = None;

        if items.is_empty() {
            self.has_more = false;
            return true;
        }

        if request.page == 1 {
            self.coins = items;
        } else {
            self.coins.extend(items);
        }
        self.page = request.page;
        self.version += 1;
        self.refilter();
        true
    }

    /// Release the in-flight guard after a load that produced nothing to apply.
    pub fn fail(&mut self, request: PageRequest) {
        if self.in_flight == Some(request) {
            self.in_flight = None;
        }
    }

    /// Update the search query and recompute the filtered view.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = apply_filter(&self.query, &self.coins);
    }

    pub fn coins(&self) -> &[CoinSummary] {
        &self.coins
    }

    /// The list to render: all coins, or search matches when a query is set.
    pub fn filtered(&self) -> &[CoinSummary] {
        &self.filtered
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_searching(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Holds the in-flight slot of a [`CoinListState`] while a page is fetched.
///
/// Dropped without [`PendingPage::finish`] (a cancelled future), it releases
/// the slot via [`CoinListState::fail`] so later loads are not blocked.
#[cfg_attr(not(feature = "http"), allow(dead_code))]
pub(crate) struct PendingPage<'s> {
    state: &'s mut CoinListState,
    request: PageRequest,
    settled: bool,
}

#[cfg_attr(not(feature = "http"), allow(dead_code))]
impl<'s> PendingPage<'s> {
    pub(crate) fn new(state: &'s mut CoinListState, request: PageRequest) -> Self {
        Self {
            state,
            request,
            settled: false,
        }
    }

    pub(crate) fn finish(mut self, items: Vec<CoinSummary>) -> bool {
        self.settled = true;
        self.state.apply_page(self.request, items)
    }
}

impl Drop for PendingPage<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::debug!(page = self.request.page, "Coin page load cancelled");
            self.state.fail(self.request);
        }
    }
}
