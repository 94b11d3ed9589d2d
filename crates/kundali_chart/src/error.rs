use thiserror::Error;

use kundali_base::VedicError;
use kundali_config::ConfigError;
use kundali_ephem::EphemerisError;
use kundali_time::TimeError;

/// Every failure a kundali request can report.
#[derive(Debug, Error)]
pub enum KundaliError {
    /// Malformed or out-of-range birth data.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
    #[error("invalid ayanamsa: {0}")]
    InvalidAyanamsa(String),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    /// A value handed between components is outside its domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl KundaliError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}

impl From<VedicError> for KundaliError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::Validation { field, reason } => Self::Validation { field, reason },
            VedicError::InvalidAyanamsa(msg) => Self::InvalidAyanamsa(msg),
            VedicError::InvalidInput(msg) => Self::InvalidInput(msg),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}
