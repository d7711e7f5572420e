//! Conversion: OhlcResponse → OhlcBar.

use super::wire;
use super::OhlcBar;

impl From<wire::OhlcResponse> for OhlcBar {
    fn from(source: wire::OhlcResponse) -> Self {
        OhlcBar {
            timestamp: source.date,
            usd_open: source.usd.open,
            usd_high: source.usd.high,
            usd_low: source.usd.low,
            usd_close: source.usd.close,
            aed_open: source.aed.open,
            aed_high: source.aed.high,
            aed_low: source.aed.low,
            aed_close: source.aed.close,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flattens_quotes() {
        let resp: wire::OhlcResponse = serde_json::from_str(
            r#"{"date": 1700000000000,
                "usd": {"open": 1, "high": 2, "low": 0.5, "close": 1.5},
                "aed": {"open": 3.67, "high": 7.34, "low": 1.83, "close": 5.5}}"#,
        )
        .unwrap();
        let bar = OhlcBar::from(resp);
        assert_eq!(bar.timestamp, 1_700_000_000_000);
        assert_eq!(bar.usd_high, 2.0);
        assert_eq!(bar.usd_low, 0.5);
        assert_eq!(bar.aed_close, 5.5);
    }

    #[test]
    fn test_missing_aed_is_zero() {
        let resp: wire::OhlcResponse = serde_json::from_str(
            r#"{"date": 1, "usd": {"open": 1, "high": 2, "low": 0.5, "close": 1.5}}"#,
        )
        .unwrap();
        let bar = OhlcBar::from(resp);
        assert_eq!(bar.aed_open, 0.0);
        assert_eq!(bar.usd_close, 1.5);
    }
}
