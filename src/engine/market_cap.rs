//! Numeric presentation helpers for quote records.

/// Format a market capitalization expressed in millions of currency units.
///
/// `>= 1_000_000` is shown in trillions, `>= 1_000` in billions (both one decimal),
/// anything smaller in whole millions.
pub fn format_market_cap(market_cap_millions: f64) -> String {
    if market_cap_millions >= 1_000_000.0 {
        format!("{:.1}T", market_cap_millions / 1_000_000.0)
    } else if market_cap_millions >= 1_000.0 {
        format!("{:.1}B", market_cap_millions / 1_000.0)
    } else {
        format!("{:.0}M", market_cap_millions)
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millions() {
        assert_eq!(format_market_cap(500.0), "500M");
        assert_eq!(format_market_cap(0.0), "0M");
        assert_eq!(format_market_cap(999.4), "999M");
    }

    #[test]
    fn test_billions() {
        assert_eq!(format_market_cap(1500.0), "1.5B");
        assert_eq!(format_market_cap(1000.0), "1.0B");
        assert_eq!(format_market_cap(999_000.0), "999.0B");
    }

    #[test]
    fn test_trillions() {
        assert_eq!(format_market_cap(2_500_000.0), "2.5T");
        assert_eq!(format_market_cap(1_000_000.0), "1.0T");
        assert_eq!(format_market_cap(4_321_000.0), "4.3T");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(131.456), 131.46);
        assert_eq!(round2(-1.234), -1.23);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(42.0), 42.0);
    }
}
