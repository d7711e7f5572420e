//! OHLC state containers — app-owned, SDK-provided update logic.

use super::OhlcBar;
use crate::shared::{ProductId, Timeframe};

/// Token for one outstanding chart load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OhlcRequest {
    pub product_id: ProductId,
    pub timeframe: Timeframe,
    pub seq: u64,
}

/// Chart data for the coin detail screen.
///
/// Switching timeframe starts a new request; a slower response for the old
/// timeframe is dropped when it lands.
#[derive(Debug, Clone, Default)]
pub struct OhlcState {
    product_id: Option<ProductId>,
    timeframe: Timeframe,
    bars: Vec<OhlcBar>,
    in_flight: Option<OhlcRequest>,
    seq: u64,
}

impl OhlcState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading `(product_id, timeframe)`, superseding any pending load.
    pub fn begin(&mut self, product_id: ProductId, timeframe: Timeframe) -> OhlcRequest {
        self.seq += 1;
        if self.product_id.as_ref() != Some(&product_id) {
            self.bars.clear();
        }
        self.product_id = Some(product_id.clone());
        self.timeframe = timeframe;
        let request = OhlcRequest {
            product_id,
            timeframe,
            seq: self.seq,
        };
        self.in_flight = Some(request.clone());
        request
    }

    /// Apply fetched bars. Returns `false` if `request` was superseded.
    pub fn apply(&mut self, request: &OhlcRequest, bars: Vec<OhlcBar>) -> bool {
        if self.in_flight.as_ref() != Some(request) {
            tracing::debug!(
                product_id = %request.product_id,
                timeframe = %request.timeframe,
                "Ignoring stale OHLC response"
            );
            return false;
        }
        self.in_flight = None;
        self.bars = bars;
        true
    }

    /// Drop `request` without touching the bars, if it is still pending.
    pub fn cancel(&mut self, request: &OhlcRequest) {
        if self.in_flight.as_ref() == Some(request) {
            self.in_flight = None;
        }
    }

    pub fn bars(&self) -> &[OhlcBar] {
        &self.bars
    }

    pub fn product_id(&self) -> Option<&ProductId> {
        self.product_id.as_ref()
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn clear(&mut self) {
        self.bars.clear();
        self.in_flight = None;
    }
}

/// Holds a pending chart load; releases it via [`OhlcState::cancel`] when
/// dropped before [`PendingOhlc::finish`].
#[cfg_attr(not(feature = "http"), allow(dead_code))]
pub(crate) struct PendingOhlc<'s> {
    state: &'s mut OhlcState,
    request: OhlcRequest,
    settled: bool,
}

#[cfg_attr(not(feature = "http"), allow(dead_code))]
impl<'s> PendingOhlc<'s> {
    pub(crate) fn new(state: &'s mut OhlcState, request: OhlcRequest) -> Self {
        Self {
            state,
            request,
            settled: false,
        }
    }

    pub(crate) fn request(&self) -> &OhlcRequest {
        &self.request
    }

    pub(crate) fn finish(mut self, bars: Vec<OhlcBar>) -> bool {
        self.settled = true;
        self.state.apply(&self.request, bars)
    }
}

impl Drop for PendingOhlc<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.state.cancel(&self.request);
        }
    }
}
