//! Stock series summary statistics.

use crate::ident::StockRecord;

/// Summary statistics for one item's value series.
#[derive(Debug, Clone, Default)]
pub struct SeriesStats {
    /// Number of observations
    pub length: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Range (max - min)
    pub range: f64,
    /// Sum of all values
    pub sum: f64,
}

/// Computes summary statistics for a value series.
///
/// Returns the default (all-zero) stats for an empty series.
pub fn compute_series_stats(values: &[f64]) -> SeriesStats {
    let length = values.len();
    if length == 0 {
        return SeriesStats::default();
    }

    let sum: f64 = values.iter().sum();
    let mean = sum / length as f64;
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    SeriesStats {
        length,
        mean,
        min,
        max,
        range: max - min,
        sum,
    }
}

/// Returns the records with the highest and lowest value, in that order.
///
/// Ties resolve to the earliest record. Returns `None` for an empty set.
pub fn series_extremes(records: &[StockRecord]) -> Option<(&StockRecord, &StockRecord)> {
    let first = records.first()?;

    let mut max = first;
    let mut min = first;
    for record in &records[1..] {
        if record.value > max.value {
            max = record;
        }
        if record.value < min.value {
            min = record;
        }
    }

    Some((max, min))
}
