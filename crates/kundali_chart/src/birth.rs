//! Validated birth data.

use chrono::NaiveDate;
use serde::Serialize;

use kundali_time::civil_to_jd;

use crate::error::KundaliError;

/// Local civil birth time and place. Fields are private; a value only
/// exists once [`BirthMoment::new`] has validated it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthMoment {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    latitude: f64,
    longitude: f64,
}

impl BirthMoment {
    /// Validate and build. `latitude` is north-positive, `longitude`
    /// east-positive, both in degrees.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, KundaliError> {
        if !(1..=12).contains(&month) {
            return Err(KundaliError::validation(
                "month",
                format!("{month} not in 1..=12"),
            ));
        }
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(KundaliError::validation(
                "day",
                format!("{year:04}-{month:02}-{day:02} is not a calendar date"),
            ));
        }
        if hour >= 24 {
            return Err(KundaliError::validation("hour", format!("{hour} not in 0..24")));
        }
        if minute >= 60 {
            return Err(KundaliError::validation(
                "minute",
                format!("{minute} not in 0..60"),
            ));
        }
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(KundaliError::validation(
                "latitude",
                format!("{latitude} not in [-90, 90]"),
            ));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(KundaliError::validation(
                "longitude",
                format!("{longitude} not in [-180, 180]"),
            ));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            latitude,
            longitude,
        })
    }

    /// Gregorian year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1..=12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of month.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Local hour, 0..24.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute, 0..60.
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Latitude in degrees, north positive.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, east positive.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Birth instant as JD UT, given the zone offset east of Greenwich.
    pub fn jd_ut(&self, tz_offset_hours: f64) -> Result<f64, KundaliError> {
        Ok(civil_to_jd(
            self.year,
            self.month,
            self.day,
            f64::from(self.hour),
            f64::from(self.minute),
            tz_offset_hours,
        )?)
    }

    /// 0h UT of the civil birth date; the dasha epoch.
    pub fn date_jd(&self) -> Result<f64, KundaliError> {
        Ok(civil_to_jd(self.year, self.month, self.day, 0.0, 0.0, 0.0)?)
    }
}
