//! Price formatting for list rows, chart labels, and the stats row.
//!
//! Precision follows price magnitude: whole units for large prices, cents for
//! ordinary ones, and up to six decimals for sub-unit coins.

/// Minimum decimals kept for sub-unit prices after trimming.
const SMALL_PRICE_MIN_DECIMALS: usize = 4;
/// Decimals rendered for sub-unit prices before trimming.
const SMALL_PRICE_MAX_DECIMALS: usize = 6;

/// Adds thousands separators to the integer part of a formatted number.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let grouped = integer
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Trims trailing zeros from the fraction, never below `min_decimals`.
fn trim_fraction(formatted: String, min_decimals: usize) -> String {
    let Some(dot) = formatted.find('.') else {
        return formatted;
    };
    let keep_at_least = dot + 1 + min_decimals;
    let mut end = formatted.len();
    while end > keep_at_least && formatted.as_bytes()[end - 1] == b'0' {
        end -= 1;
    }
    formatted[..end].to_string()
}

/// Format a USD price for display (no currency symbol).
///
/// The precision bracket is picked from the magnitude, so negative values
/// (padded chart minimums) format like their positive counterparts. A
/// sub-unit value that rounds up to 1 moves to the two-decimal bracket.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return price.to_string();
    }
    let magnitude = price.abs();
    let small_rounded = (magnitude * 10f64.powi(SMALL_PRICE_MAX_DECIMALS as i32)).round()
        / 10f64.powi(SMALL_PRICE_MAX_DECIMALS as i32);
    if magnitude >= 1000.0 {
        group_thousands(&format!("{:.0}", price))
    } else if small_rounded >= 1.0 {
        group_thousands(&format!("{:.2}", price))
    } else {
        trim_fraction(
            format!("{:.1$}", price, SMALL_PRICE_MAX_DECIMALS),
            SMALL_PRICE_MIN_DECIMALS,
        )
    }
}

/// `format_price`, or `"N/A"` when the price is unknown.
pub fn format_optional_price(price: Option<f64>) -> String {
    price.map(format_price).unwrap_or_else(|| "N/A".to_string())
}

/// Signed 24h change with two decimals, e.g. `"+2.50%"`.
pub fn format_price_change(change: f64) -> String {
    let sign = if change >= 0.0 { "+" } else { "" };
    format!("{sign}{change:.2}%")
}

/// Chart label text: `"$ 1,234"`.
pub fn price_label(price: f64) -> String {
    format!("$ {}", format_price(price))
}
