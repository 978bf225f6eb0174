//! Error types raised when scoring input fails validation.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised before any score is computed.
///
/// The scorers are pure functions over well-formed snapshots; these variants
/// describe the ways a snapshot can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// An item arrived with an empty identifier.
    #[error("item identifiers must not be empty")]
    EmptyItemId,
    /// Two items in one call share an identifier.
    #[error("item identifier '{id}' appears more than once")]
    DuplicateItemId {
        /// The repeated identifier.
        id: String,
    },
    /// A trip lasted zero days.
    #[error("trip duration must be at least one day")]
    ZeroDuration,
    /// A forecast day carried a NaN or infinite temperature.
    #[error("forecast day {day} has a non-finite temperature")]
    InvalidForecast {
        /// Zero-based index of the offending day.
        day: usize,
    },
    /// Scoring weights were unusable.
    #[error("weights must be finite, non-negative and sum to 1.0")]
    InvalidWeights,
}
