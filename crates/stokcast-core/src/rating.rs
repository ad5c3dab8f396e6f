//! Qualitative rating of forecast accuracy.

use std::fmt;

/// MAPE at or below this is a good model.
pub const GOOD_THRESHOLD: f64 = 20.0;
/// MAPE at or below this (and above [`GOOD_THRESHOLD`]) is acceptable.
pub const ACCEPTABLE_THRESHOLD: f64 = 50.0;

/// Three-tier qualitative rating of a MAPE value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccuracyRating {
    /// MAPE ≤ 20%
    Good,
    /// 20% < MAPE ≤ 50%
    Acceptable,
    /// MAPE > 50%
    Poor,
}

impl AccuracyRating {
    /// Classifies a MAPE percentage. Boundaries are inclusive on the
    /// better side: exactly 20.0 is `Good`, exactly 50.0 is `Acceptable`.
    pub fn from_mape(mape: f64) -> Self {
        if mape <= GOOD_THRESHOLD {
            AccuracyRating::Good
        } else if mape <= ACCEPTABLE_THRESHOLD {
            AccuracyRating::Acceptable
        } else {
            AccuracyRating::Poor
        }
    }
}

impl fmt::Display for AccuracyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AccuracyRating::Good => "good",
            AccuracyRating::Acceptable => "acceptable",
            AccuracyRating::Poor => "poor",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_boundaries() {
        assert_eq!(AccuracyRating::from_mape(0.0), AccuracyRating::Good);
        assert_eq!(AccuracyRating::from_mape(20.0), AccuracyRating::Good);
        assert_eq!(AccuracyRating::from_mape(20.0001), AccuracyRating::Acceptable);
        assert_eq!(AccuracyRating::from_mape(50.0), AccuracyRating::Acceptable);
        assert_eq!(AccuracyRating::from_mape(50.0001), AccuracyRating::Poor);
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(AccuracyRating::Good.to_string(), "good");
        assert_eq!(AccuracyRating::Acceptable.to_string(), "acceptable");
        assert_eq!(AccuracyRating::Poor.to_string(), "poor");
    }
}
