//! Sparkline layout for list rows and featured cards.

use super::{Point, Trend};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Polyline plus the area under it, both as SVG path data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparklineLayout {
    pub points: Vec<Point>,
    /// `M x,y L x,y …`
    pub line_path: String,
    /// `line_path` dropped to the baseline and closed.
    pub area_path: String,
}

impl SparklineLayout {
    /// Blank: fewer than two samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Lay out `values` across a `width` × `height` box.
///
/// Samples are spaced evenly from x = 0 to x = `width`; the minimum maps to
/// the bottom and the maximum to the top. A flat series sits on the vertical
/// midpoint. Fewer than two samples give an empty layout.
pub fn layout_sparkline(values: &[f64], width: f64, height: f64) -> SparklineLayout {
    if values.len() < 2 {
        return SparklineLayout::default();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    let flat = !(range > 0.0 && range.is_finite());
    let last = (values.len() - 1) as f64;

    let points: Vec<Point> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = i as f64 / last * width;
            let y = if flat || !v.is_finite() {
                height / 2.0
            } else {
                height - (v - min) / range * height
            };
            Point::new(x, y)
        })
        .collect();

    let mut line_path = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { " L" };
        let _ = write!(line_path, "{cmd}{},{}", p.x, p.y);
    }
    let area_path = format!("{line_path} L{width},{height} L0,{height} Z");

    SparklineLayout {
        points,
        line_path,
        area_path,
    }
}

/// Stroke trend for a row's sparkline, from its 24h change.
pub fn sparkline_trend(change_24h: f64) -> Trend {
    Trend::from_change(change_24h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_series_on_midline() {
        let layout = layout_sparkline(&[5.0, 5.0, 5.0], 120.0, 40.0);
        assert_eq!(layout.points.len(), 3);
        assert!(layout.points.iter().all(|p| p.y == 20.0));
    }

    #[test]
    fn test_too_few_samples_is_blank() {
        assert!(layout_sparkline(&[], 120.0, 40.0).is_empty());
        let single = layout_sparkline(&[42.0], 120.0, 40.0);
        assert!(single.is_empty());
        assert!(single.line_path.is_empty());
        assert!(single.area_path.is_empty());
    }

    #[test]
    fn test_min_bottom_max_top_even_spacing() {
        let layout = layout_sparkline(&[1.0, 3.0, 2.0], 100.0, 50.0);
        let xs: Vec<_> = layout.points.iter().map(|p| p.x).collect();
        let ys: Vec<_> = layout.points.iter().map(|p| p.y).collect();
        assert_eq!(xs, [0.0, 50.0, 100.0]);
        assert_eq!(ys, [50.0, 0.0, 25.0]);
    }

    #[test]
    fn test_paths() {
        let layout = layout_sparkline(&[1.0, 3.0, 2.0], 100.0, 50.0);
        assert_eq!(layout.line_path, "M0,50 L50,0 L100,25");
        assert_eq!(layout.area_path, "M0,50 L50,0 L100,25 L100,50 L0,50 Z");
    }

    #[test]
    fn test_sparkline_trend() {
        assert_eq!(sparkline_trend(0.0), Trend::Up);
        assert_eq!(sparkline_trend(-3.2), Trend::Down);
    }

    #[test]
    fn test_non_finite_samples_stay_finite() {
        let layout = layout_sparkline(&[1.0, f64::NAN, 3.0], 10.0, 10.0);
        assert!(layout.points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }
}
