//! Ephemeris failures, always tagged with the offending instant.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The oracle itself reported a failure.
    #[error("ephemeris failed at JD {jd_ut}: {message}")]
    Oracle { jd_ut: f64, message: String },
    /// The oracle answered with a value that is not a usable position.
    #[error("ephemeris returned invalid {what} = {value} at JD {jd_ut}")]
    InvalidPosition {
        jd_ut: f64,
        what: &'static str,
        value: f64,
    },
    /// The oracle has no data for the instant.
    #[error("no ephemeris data for JD {jd_ut}")]
    Unavailable { jd_ut: f64 },
    /// Snapshot file could not be read or parsed.
    #[error("snapshot load failed: {0}")]
    Snapshot(String),
}

impl EphemerisError {
    /// Instant the failure refers to, if any.
    pub fn jd_ut(&self) -> Option<f64> {
        match self {
            Self::Oracle { jd_ut, .. }
            | Self::InvalidPosition { jd_ut, .. }
            | Self::Unavailable { jd_ut } => Some(*jd_ut),
            Self::Snapshot(_) => None,
        }
    }
}
