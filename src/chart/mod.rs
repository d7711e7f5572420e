//! Chart geometry — screen-space layout for candlesticks and sparklines.
//!
//! Pure functions: numeric series in, rectangles/lines/paths out. Coordinates
//! are in pixels with the origin at the top-left, y growing downwards.
//! Drawing them is the host UI's job.

pub mod candles;
pub mod sparkline;

pub use candles::{
    layout_candles, Candle, CandleLayout, CandleStyle, Gridline, PriceScale, PriceTag,
};
pub use sparkline::{layout_sparkline, sparkline_trend, SparklineLayout};

use serde::{Deserialize, Serialize};

/// Accent for rising prices and bullish candles.
pub const UP_COLOR: &str = "#C4FF00";
/// Accent for falling prices and bearish candles.
pub const DOWN_COLOR: &str = "#FF3440";

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

impl Line {
    pub fn horizontal(y: f64, x1: f64, x2: f64) -> Self {
        Self {
            from: Point::new(x1, y),
            to: Point::new(x2, y),
        }
    }

    pub fn vertical(x: f64, y1: f64, y2: f64) -> Self {
        Self {
            from: Point::new(x, y1),
            to: Point::new(x, y2),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Price direction; picks the up/down accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Up when `close >= open`; an unchanged bar counts as up.
    pub fn of(open: f64, close: f64) -> Self {
        if close >= open {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    /// Trend of a percentage change (zero counts as up).
    pub fn from_change(change: f64) -> Self {
        Self::of(0.0, change)
    }

    pub fn color(&self) -> &'static str {
        match self {
            Trend::Up => UP_COLOR,
            Trend::Down => DOWN_COLOR,
        }
    }
}
