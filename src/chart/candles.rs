//! Candlestick layout for the coin detail chart.
//!
//! The plot sits between a left padding and a right-hand label column. Three
//! dashed gridlines mark the padded max, mid and min; a highlighted line and
//! tag mark the latest close.

use super::{Line, Point, Rect, Trend};
use crate::domain::ohlc::OhlcBar;
use crate::shared::fmt::num::price_label;
use serde::{Deserialize, Serialize};

/// Geometry constants for [`layout_candles`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleStyle {
    /// Horizontal inset on both sides of the canvas.
    pub padding: f64,
    /// Width reserved right of the plot for price labels.
    pub label_width: f64,
    /// Margin kept above and below the plot so labels never clip.
    pub text_height: f64,
    /// Fraction of the price range added above the max and below the min.
    pub range_padding: f64,
    /// Absolute padding used instead when every bar has the same high/low.
    pub flat_range_padding: f64,
    /// Share of each slot taken by the candle body; the rest is gap.
    pub body_ratio: f64,
    pub min_body_height: f64,
    /// Horizontal offset of gridline labels from the plot's right edge.
    pub label_offset: f64,
    /// Baseline shift that vertically centers 10px label text on a line.
    pub label_baseline: f64,
    pub tag_height: f64,
    /// Rough per-character width of tag text.
    pub tag_char_width: f64,
}

impl Default for CandleStyle {
    fn default() -> Self {
        Self {
            padding: 20.0,
            label_width: 75.0,
            text_height: 12.0,
            range_padding: 0.05,
            flat_range_padding: 1.0,
            body_ratio: 0.8,
            min_body_height: 1.0,
            label_offset: 5.0,
            label_baseline: 4.0,
            tag_height: 20.0,
            tag_char_width: 5.5,
        }
    }
}

/// Linear price → pixel-row mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScale {
    /// Padded minimum price (maps to the plot bottom).
    pub min: f64,
    /// Padded maximum price (maps to the plot top).
    pub max: f64,
    top: f64,
    plot_height: f64,
}

impl PriceScale {
    /// Scale covering every bar's low..high, padded per `style`.
    ///
    /// Returns `None` for an empty series.
    pub fn for_bars(bars: &[OhlcBar], height: f64, style: &CandleStyle) -> Option<Self> {
        if bars.is_empty() {
            return None;
        }

        let mut low = bars.iter().map(|b| b.usd_low).fold(f64::INFINITY, f64::min);
        let mut high = bars
            .iter()
            .map(|b| b.usd_high)
            .fold(f64::NEG_INFINITY, f64::max);
        if !low.is_finite() || !high.is_finite() {
            low = 0.0;
            high = 0.0;
        }

        let range = high - low;
        let pad = if range > 0.0 && range.is_finite() {
            range * style.range_padding
        } else {
            style.flat_range_padding
        };

        Some(Self {
            min: low - pad,
            max: high + pad,
            top: style.text_height,
            plot_height: (height - 2.0 * style.text_height).max(0.0),
        })
    }

    /// Pixel row for `price`. Always finite; degenerate scales and
    /// non-finite prices land on the vertical midpoint.
    pub fn y(&self, price: f64) -> f64 {
        let span = self.max - self.min;
        if !(span > 0.0 && span.is_finite()) || !price.is_finite() {
            return self.top + self.plot_height / 2.0;
        }
        self.top + self.plot_height - (price - self.min) / span * self.plot_height
    }

    pub fn mid(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// One laid-out bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub wick: Line,
    pub body: Rect,
    pub trend: Trend,
}

/// Horizontal price reference with its right-hand label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gridline {
    pub price: f64,
    pub line: Line,
    pub label: String,
    pub label_at: Point,
}

/// Latest-close marker: full-width line plus a filled tag in the label column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTag {
    pub price: f64,
    pub line: Line,
    pub tag: Rect,
    pub label: String,
    pub label_at: Point,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandleLayout {
    pub candles: Vec<Candle>,
    /// Max, mid, min — top to bottom.
    pub gridlines: Vec<Gridline>,
    pub current_price: Option<PriceTag>,
    pub scale: Option<PriceScale>,
}

impl CandleLayout {
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }
}

/// Lay out `bars` (chronological) on a `width` × `height` canvas.
///
/// Only the USD quadruple is read. Bars that break `low <= open,close <= high`
/// still produce finite coordinates.
pub fn layout_candles(
    bars: &[OhlcBar],
    width: f64,
    height: f64,
    style: &CandleStyle,
) -> CandleLayout {
    let Some(scale) = PriceScale::for_bars(bars, height, style) else {
        return CandleLayout::default();
    };

    let left = style.padding;
    let plot_width = (width - 2.0 * style.padding - style.label_width).max(0.0);
    let right = left + plot_width;
    let slot = plot_width / bars.len() as f64;
    let body_width = slot * style.body_ratio;

    let candles = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let x = left + i as f64 * slot;
            let center = x + body_width / 2.0;
            let open_y = scale.y(bar.usd_open);
            let close_y = scale.y(bar.usd_close);
            Candle {
                wick: Line::vertical(center, scale.y(bar.usd_high), scale.y(bar.usd_low)),
                body: Rect {
                    x,
                    y: open_y.min(close_y),
                    width: body_width,
                    height: (open_y - close_y).abs().max(style.min_body_height),
                },
                trend: Trend::of(bar.usd_open, bar.usd_close),
            }
        })
        .collect();

    let gridlines = [scale.max, scale.mid(), scale.min]
        .into_iter()
        .map(|price| {
            let y = scale.y(price);
            Gridline {
                price,
                line: Line::horizontal(y, left, right),
                label: price_label(price),
                label_at: Point::new(right + style.label_offset, y + style.label_baseline),
            }
        })
        .collect();

    let current_price = bars.last().map(|last| {
        let price = last.usd_close;
        let y = scale.y(price);
        let label = price_label(price);
        let text_width = label.chars().count() as f64 * style.tag_char_width + style.label_offset;
        PriceTag {
            price,
            line: Line::horizontal(y, left, right),
            tag: Rect {
                x: right,
                y: y - style.tag_height / 2.0,
                width: text_width + 2.0 * style.label_offset,
                height: style.tag_height,
            },
            label,
            label_at: Point::new(right + style.label_offset + 1.0, y + style.label_baseline),
        }
    });

    CandleLayout {
        candles,
        gridlines,
        current_price,
        scale: Some(scale),
    }
}
