//! Error types for stock forecasting and identifier operations.

use thiserror::Error;

/// Result type for stokcast operations.
pub type Result<T> = std::result::Result<T, StokError>;

/// Error types for forecasting, accuracy evaluation and identifier
/// allocation.
///
/// Precondition violations always fail the call; no operation returns a
/// sentinel value such as `inf` or `NaN` in place of an error.
#[derive(Error, Debug)]
pub enum StokError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid item name '{0}': must contain at least two words")]
    InvalidItemName(String),

    #[error("Division by zero: actual value at index {index} is 0")]
    DivisionByZero { index: usize },

    #[error("Insufficient data: need at least {needed} observations, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("Non-monotonic record count for item '{item}': got {count}")]
    NonMonotonicCount { item: String, count: usize },
}
