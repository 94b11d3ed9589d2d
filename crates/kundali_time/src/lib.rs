//! Julian Day <-> calendar conversions for the kundali engine.
//!
//! Every instant inside the engine is a Julian Day in UT stored as `f64`.
//! This crate provides:
//! - civil (local wall-clock) time -> JD UT with a timezone offset
//! - `chrono::DateTime<Utc>` <-> JD UT
//! - the two year-length constants used by dasha arithmetic

pub mod error;
pub mod julian;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_YEAR, J2000_JD, SECONDS_PER_DAY, TROPICAL_YEAR_DAYS, UNIX_EPOCH_JD, civil_to_jd,
    datetime_to_jd, jd_to_centuries, jd_to_datetime,
};
