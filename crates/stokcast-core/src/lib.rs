//! Core library for stock-series forecasting and record identifier
//! management.
//!
//! Two independent engines, both pure functions over caller-supplied data:
//!
//! - **Forecasting**: fixed-weight moving-average smoothing of an ordered
//!   stock-value series ([`forecast`]) with MAPE-based accuracy evaluation
//!   and a three-tier qualitative rating ([`metrics`], [`rating`]).
//! - **Identifiers**: deterministic, human-readable record identifiers
//!   derived from item names, with dense renumbering after deletions
//!   ([`ident`]).
//!
//! The [`store`] module defines the boundary to the external record store
//! and wires the engines to it.

pub mod error;
pub mod forecast;
pub mod ident;
pub mod metrics;
pub mod rating;
pub mod stats;
pub mod store;

// Re-exports for convenience
pub use error::{Result, StokError};
pub use forecast::{next_period_forecast, weighted_moving_average};
pub use ident::{allocate_id, renumber, IdReassignment, RenumberScheme, StockRecord};
pub use metrics::{
    cumulative_mape, cumulative_mape_with_dates, evaluate_forecast, headline_mape, mape,
    ForecastAccuracy,
};
pub use rating::AccuracyRating;
pub use stats::{compute_series_stats, series_extremes, SeriesStats};
pub use store::{
    delete_and_renumber, forecast_item, insert_record, ItemForecast, MemoryStore, StockStore,
};
