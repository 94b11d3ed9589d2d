//! Error types for calendar and Julian Day conversions.

use thiserror::Error;

/// Errors from calendar / Julian Day conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The Julian Day is NaN or infinite.
    #[error("non-finite Julian Day: {0}")]
    NonFiniteJd(f64),
    /// The Julian Day cannot be represented as a UTC timestamp.
    #[error("Julian Day {0} is outside the representable UTC range")]
    OutOfRange(f64),
    /// Year/month/day does not name a proleptic Gregorian date.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour, minute or offset is NaN or infinite.
    #[error("non-finite time component: {0}")]
    NonFiniteTime(&'static str),
}
