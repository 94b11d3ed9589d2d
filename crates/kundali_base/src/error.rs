//! Error types for the pure calculation layer.

use thiserror::Error;

/// Errors from sidereal conversion, placement, and dasha math.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// A user-supplied field is malformed or out of range.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
    /// Unknown ayanamsa standard or out-of-range custom value.
    #[error("invalid ayanamsa: {0}")]
    InvalidAyanamsa(String),
    /// A value passed between components is outside its domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
