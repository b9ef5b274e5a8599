//! Error types for the benchsum library.
//!
//! This module defines all error types that can occur during sample
//! extraction, statistical reduction, aggregation, and chart rendering.

use thiserror::Error;

/// Main error type for the benchsum library.
///
/// All operations that can fail return `Result<T, BenchsumError>`.
#[derive(Debug, Error)]
pub enum BenchsumError {
    /// A reduction was requested over an empty sample sequence.
    ///
    /// Raised instead of producing a silent zero or NaN so that callers
    /// can distinguish "no data" from "zero-valued data".
    #[error("empty input: no samples to reduce")]
    EmptyInput,

    /// A scenario lacks data for a size key present in the baseline.
    ///
    /// Raised during baseline comparison when the compared scenario's
    /// size-key set does not cover the baseline's.
    #[error("scenario '{scenario}' has no data for size {size}")]
    MissingSizeKey {
        /// Scenario whose data was incomplete
        scenario: String,
        /// Size key present in the baseline but absent here
        size: u64,
    },

    /// The requested scenario does not exist in the aggregated data.
    ///
    /// Raised when the designated baseline key is absent.
    #[error("scenario '{scenario}' not found in aggregated data")]
    MissingScenario {
        /// The scenario key that was requested
        scenario: String,
    },

    /// A measurement record is missing a required field or carries a
    /// non-numeric value for it.
    ///
    /// Raised while loading a result bundle; names the scenario and the
    /// offending field so the bad input can be located.
    #[error("malformed record in scenario '{scenario}': bad field '{field}'")]
    MalformedRecord {
        /// Scenario whose record was malformed
        scenario: String,
        /// The missing or non-numeric field
        field: String,
    },

    /// A caller-supplied metric pattern could not be used.
    ///
    /// Covers both regex compile failures and patterns lacking the
    /// single float capture group the extractor requires.
    #[error("invalid metric pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The pattern source text as supplied
        pattern: String,
        /// Description of what was wrong with it
        message: String,
    },

    /// Error parsing JSON input.
    ///
    /// Wraps errors from the `serde_json` crate.
    #[error("JSON parsing error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    /// I/O error.
    ///
    /// Wraps errors from standard I/O operations.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for Results using `BenchsumError`.
pub type Result<T> = std::result::Result<T, BenchsumError>;
