//! Julian Day conversions.
//!
//! JD 2440587.5 is 1970-01-01T00:00:00Z, so a Unix timestamp `ts` maps to
//! `ts / 86400 + 2440587.5`. Calendar validation is delegated to `chrono`
//! (proleptic Gregorian).

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::TimeError;

/// Julian Day of the J2000.0 epoch (2000-01-01T12:00:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Day of the Unix epoch (1970-01-01T00:00:00Z).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian year in days. Used for every forward period length.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Tropical year in days. Used only to back-date the elapsed part of the
/// first dasha before birth.
pub const TROPICAL_YEAR_DAYS: f64 = 365.2422;

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

/// Convert a UTC instant to a Julian Day.
pub fn datetime_to_jd(dt: &DateTime<Utc>) -> f64 {
    let whole = dt.timestamp() as f64 / SECONDS_PER_DAY;
    let frac = dt.timestamp_subsec_nanos() as f64 / (SECONDS_PER_DAY * 1e9);
    UNIX_EPOCH_JD + whole + frac
}

/// Convert a Julian Day to a UTC instant, rounded to the millisecond.
pub fn jd_to_datetime(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::NonFiniteJd(jd));
    }
    let millis = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
    if millis.abs() >= i64::MAX as f64 {
        return Err(TimeError::OutOfRange(jd));
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64).ok_or(TimeError::OutOfRange(jd))
}

/// Convert a local civil date and time to a Julian Day in UT.
///
/// `tz_offset_hours` is the zone's offset east of Greenwich (IST = +5.5);
/// it is subtracted to reach UT.
pub fn civil_to_jd(
    year: i32,
    month: u32,
    day: u32,
    hour: f64,
    minute: f64,
    tz_offset_hours: f64,
) -> Result<f64, TimeError> {
    if !hour.is_finite() {
        return Err(TimeError::NonFiniteTime("hour"));
    }
    if !minute.is_finite() {
        return Err(TimeError::NonFiniteTime("minute"));
    }
    if !tz_offset_hours.is_finite() {
        return Err(TimeError::NonFiniteTime("tz_offset_hours"));
    }
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(TimeError::InvalidDate { year, month, day })?;
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    let midnight_jd = UNIX_EPOCH_JD + midnight.timestamp() as f64 / SECONDS_PER_DAY;
    let ut_hours = hour + minute / 60.0 - tz_offset_hours;
    Ok(midnight_jd + ut_hours / 24.0)
}
