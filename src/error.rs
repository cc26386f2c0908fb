//! Configuration errors
//!
//! Bad stretch names and percentile ranges are the only failures; data values
//! are clamped, never rejected.

use thiserror::Error;

/// Errors raised for bad configuration. Data values never produce an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    /// Stretch name is not one of the recognized kinds
    #[error("Invalid stretch option {name}. Valid options are {valid}")]
    InvalidStretch { name: String, valid: String },

    /// Percentile cut-offs outside `0 <= lower < upper <= 100`
    #[error("Invalid percentile range {lower}..{upper} (expected 0 <= lower < upper <= 100)")]
    InvalidPercentile { lower: f64, upper: f64 },
}
