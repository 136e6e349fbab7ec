//! Error types for the carbon benefits calculator
//!
//! The calculation itself is total and never fails; these errors come from the
//! input side (range checks, field lookup, console commands) and from I/O.

use thiserror::Error;

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, CalculatorError>;

#[derive(Error, Debug)]
pub enum CalculatorError {
    /// Value outside the field's allowed range (strict mode only)
    #[error("{field} = {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// NaN or infinite input; never clamped
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("unknown input field: {0}")]
    UnknownField(String),

    /// Unparseable console command
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// Scenario and result slices not paired one-to-one
    #[error("{scenarios} scenarios but {results} results")]
    LengthMismatch { scenarios: usize, results: usize },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
