//! Result of a log load calculation

use serde::Serialize;

/// How many logs of one length fit within the truck's payload capacity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoadEstimate {
    pub log_length_m: f64,
    pub log_amount: f64,
}

impl LoadEstimate {
    /// Log amount rounded to the nearest integer, halves away from zero
    pub fn rounded(&self) -> f64 {
        self.log_amount.round()
    }

    /// Rounded log amount printed with no decimal places.
    ///
    /// An amount that overflowed prints as `Infinity`.
    pub fn display_amount(&self) -> String {
        let rounded = self.rounded();
        if rounded.is_infinite() {
            return "Infinity".to_string();
        }
        format!("{:.0}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(log_amount: f64) -> LoadEstimate {
        LoadEstimate {
            log_length_m: 1.0,
            log_amount,
        }
    }

    #[test]
    fn test_rounds_down_below_half() {
        assert_eq!(estimate(183.333).display_amount(), "183");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // `{:.0}` alone would give "182" for an exact tie
        assert_eq!(estimate(182.5).display_amount(), "183");
        assert_eq!(estimate(2.5).display_amount(), "3");
    }

    #[test]
    fn test_overflowed_amount() {
        assert_eq!(estimate(f64::INFINITY).display_amount(), "Infinity");
    }

    #[test]
    fn test_large_amount_has_no_exponent() {
        assert_eq!(estimate(55e9).display_amount(), "55000000000");
    }
}
