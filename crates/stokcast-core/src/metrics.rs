//! Forecast accuracy metrics.
//!
//! Provides Mean Absolute Percentage Error (MAPE) in the three forms the
//! forecasting flow needs:
//!
//! - **Plain MAPE** over two equal-length series.
//! - **Headline MAPE**: plain MAPE with the partial-window prefix of the
//!   smoothed series excluded, the single number reported for an item.
//! - **Cumulative MAPE table**: for each position past the window, the MAPE
//!   of the entire prefix up to that position, indexed by date.
//!
//! All variants fail on a zero actual value rather than propagating `inf`
//! or `NaN`.

use chrono::NaiveDate;

use crate::error::{Result, StokError};
use crate::rating::AccuracyRating;

/// Calculates Mean Absolute Percentage Error between actual and forecast
/// values.
///
/// # Arguments
/// * `actual` - Slice of actual observed values, all non-zero
/// * `forecast` - Slice of forecasted values, same length as `actual`
///
/// # Returns
/// The MAPE as a percentage, or an error if the inputs are invalid or any
/// actual value is zero
///
/// # Formula
/// MAPE = (100/n) * Σ|actual_i - forecast_i| / |actual_i|
///
/// # Example
/// ```
/// use stokcast_core::metrics::mape;
/// let actual = vec![100.0, 100.0];
/// let forecast = vec![90.0, 110.0];
/// let error = mape(&actual, &forecast).unwrap();
/// assert!((error - 10.0).abs() < 1e-9);
/// ```
pub fn mape(actual: &[f64], forecast: &[f64]) -> Result<f64> {
    validate_inputs(actual, forecast)?;

    let mut sum = 0.0;
    for (i, (a, f)) in actual.iter().zip(forecast.iter()).enumerate() {
        if *a == 0.0 {
            return Err(StokError::DivisionByZero { index: i });
        }
        sum += ((a - f) / a).abs();
    }

    Ok(sum / actual.len() as f64 * 100.0)
}

/// Calculates the headline MAPE for a smoothed series.
///
/// The first `window - 1` positions of a weighted-moving-average output are
/// computed from a partial window; they are excluded before averaging so
/// the headline number only reflects full-history positions.
///
/// # Arguments
/// * `actual` - Ordered actual values
/// * `forecast` - Smoothed series aligned with `actual`
/// * `window` - Length of the weight vector used to produce `forecast`
///
/// # Returns
/// MAPE over `actual[window-1..]` vs `forecast[window-1..]`, or an error if
/// the series is shorter than the window
pub fn headline_mape(actual: &[f64], forecast: &[f64], window: usize) -> Result<f64> {
    validate_inputs(actual, forecast)?;
    if window == 0 {
        return Err(StokError::InvalidInput(
            "window must be at least 1".to_string(),
        ));
    }
    if actual.len() < window {
        return Err(StokError::InsufficientData {
            needed: window,
            got: actual.len(),
        });
    }

    mape(&actual[window - 1..], &forecast[window - 1..])
}

/// Calculates the cumulative MAPE table for a smoothed series.
///
/// For each index `i` from `window` to the end of the series, the entry is
/// the MAPE over the whole prefix `[0..=i]`, a running accuracy figure
/// rather than a rolling window. The result is shorter than the input by `window`
/// elements; it is empty when the series has no positions past the window.
pub fn cumulative_mape(actual: &[f64], forecast: &[f64], window: usize) -> Result<Vec<f64>> {
    validate_inputs(actual, forecast)?;
    if window == 0 {
        return Err(StokError::InvalidInput(
            "window must be at least 1".to_string(),
        ));
    }
    if actual.len() < window {
        return Err(StokError::InsufficientData {
            needed: window,
            got: actual.len(),
        });
    }

    let mut table = Vec::with_capacity(actual.len() - window);
    for i in window..actual.len() {
        table.push(mape(&actual[..=i], &forecast[..=i])?);
    }

    Ok(table)
}

/// Cumulative MAPE table with each entry tagged by its date.
///
/// `dates` must be aligned with `actual`; entry `i` of the table carries
/// `dates[window + i]`.
pub fn cumulative_mape_with_dates(
    dates: &[NaiveDate],
    actual: &[f64],
    forecast: &[f64],
    window: usize,
) -> Result<Vec<(NaiveDate, f64)>> {
    if dates.len() != actual.len() {
        return Err(StokError::InvalidInput(format!(
            "Dates and values must have the same length: {} vs {}",
            dates.len(),
            actual.len()
        )));
    }

    let table = cumulative_mape(actual, forecast, window)?;
    Ok(dates[window..].iter().copied().zip(table).collect())
}

/// Accuracy evaluation of a smoothed series against its actuals.
#[derive(Debug, Clone)]
pub struct ForecastAccuracy {
    /// Headline MAPE over the full-window positions
    pub headline_mape: f64,
    /// Rating of the headline MAPE
    pub headline_rating: AccuracyRating,
    /// Date-indexed cumulative MAPE table
    pub cumulative: Vec<(NaiveDate, f64)>,
    /// Highest entry of the cumulative table, if any
    pub max_mape: Option<f64>,
    /// Lowest entry of the cumulative table, if any
    pub min_mape: Option<f64>,
    /// Rating of the highest cumulative entry, if any
    pub worst_rating: Option<AccuracyRating>,
}

/// Evaluates a smoothed series: headline MAPE, cumulative table and
/// qualitative ratings in one pass.
pub fn evaluate_forecast(
    dates: &[NaiveDate],
    actual: &[f64],
    forecast: &[f64],
    window: usize,
) -> Result<ForecastAccuracy> {
    let headline = headline_mape(actual, forecast, window)?;
    let cumulative = cumulative_mape_with_dates(dates, actual, forecast, window)?;

    let max_mape = cumulative
        .iter()
        .map(|(_, m)| *m)
        .fold(None, |acc: Option<f64>, m| Some(acc.map_or(m, |a| a.max(m))));
    let min_mape = cumulative
        .iter()
        .map(|(_, m)| *m)
        .fold(None, |acc: Option<f64>, m| Some(acc.map_or(m, |a| a.min(m))));

    Ok(ForecastAccuracy {
        headline_mape: headline,
        headline_rating: AccuracyRating::from_mape(headline),
        cumulative,
        max_mape,
        min_mape,
        worst_rating: max_mape.map(AccuracyRating::from_mape),
    })
}

fn validate_inputs(actual: &[f64], forecast: &[f64]) -> Result<()> {
    if actual.len() != forecast.len() {
        return Err(StokError::InvalidInput(format!(
            "Actual and forecast arrays must have the same length: {} vs {}",
            actual.len(),
            forecast.len()
        )));
    }
    if actual.is_empty() {
        return Err(StokError::InsufficientData { needed: 1, got: 0 });
    }
    Ok(())
}
