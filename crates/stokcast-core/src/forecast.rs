//! Weighted moving average forecasting.
//!
//! The engine smooths an ordered stock-value series with a fixed,
//! caller-supplied weight vector. The output is aligned index-for-index
//! with the input: element `i` is a weighted combination of the values up
//! to and including `i`, not a one-step-ahead prediction. Callers read the
//! last element as the "next period" proxy.

use crate::error::{Result, StokError};

/// Computes the weighted moving average of a series.
///
/// Weights apply most-recent-first: `weights[0]` multiplies `series[i]`,
/// `weights[1]` multiplies `series[i-1]`, and so on. While fewer than
/// `weights.len()` observations are available (the partial-window prefix),
/// only the first `i + 1` weights are used. Weights are not normalized;
/// if they do not sum to 1 the output is a weighted sum rather than a
/// weighted average.
///
/// # Arguments
/// * `series` - Ordered values, oldest first
/// * `weights` - Weight vector, most recent position first
///
/// # Returns
/// A smoothed series of the same length as `series`, or an error if either
/// input is empty
///
/// # Formula
/// result[i] = Σ_{j=0}^{min(i, k-1)} weights[j] * series[i-j]
///
/// # Example
/// ```
/// use stokcast_core::forecast::weighted_moving_average;
/// let series = vec![10.0, 20.0, 30.0];
/// let weights = vec![0.5, 0.3, 0.2];
/// let wma = weighted_moving_average(&series, &weights).unwrap();
/// assert_eq!(wma[2], 30.0 * 0.5 + 20.0 * 0.3 + 10.0 * 0.2);
/// ```
pub fn weighted_moving_average(series: &[f64], weights: &[f64]) -> Result<Vec<f64>> {
    if series.is_empty() {
        return Err(StokError::InsufficientData { needed: 1, got: 0 });
    }
    if weights.is_empty() {
        return Err(StokError::InvalidInput(
            "weight vector must not be empty".to_string(),
        ));
    }

    let k = weights.len();
    let mut result = Vec::with_capacity(series.len());

    for i in 0..series.len() {
        let used = k.min(i + 1);
        let wma: f64 = (0..used).map(|j| weights[j] * series[i - j]).sum();
        result.push(wma);
    }

    Ok(result)
}

/// Returns the forecast value for the next period.
///
/// This is the last element of the smoothed series, which callers use as a
/// proxy for the upcoming period. It is an in-sample smoothed value, not a
/// true one-step-ahead prediction; the series is not extended.
///
/// Requires at least `weights.len()` observations so the value comes from
/// a full window.
pub fn next_period_forecast(series: &[f64], weights: &[f64]) -> Result<f64> {
    if series.len() < weights.len() {
        return Err(StokError::InsufficientData {
            needed: weights.len(),
            got: series.len(),
        });
    }

    let smoothed = weighted_moving_average(series, weights)?;
    // Non-empty by the check in weighted_moving_average.
    Ok(*smoothed.last().unwrap())
}
