//! Core types for the dasha tree.

use chrono::{DateTime, Utc};
use kundali_time::{TimeError, jd_to_datetime};
use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::Nakshatra;

/// Deepest level generated (Pratyantardasha).
pub const MAX_DASHA_DEPTH: u8 = 3;

/// Levels generated when not configured.
pub const DEFAULT_DASHA_DEPTH: u8 = 3;

/// Levels of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
}

impl DashaLevel {
    /// Level from its zero-based depth.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Antardasha),
            2 => Some(Self::Pratyantardasha),
            _ => None,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }

    /// Next finer level, if modeled.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => None,
        }
    }
}

/// One period and its subdivisions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaPeriod {
    pub graha: Graha,
    pub level: DashaLevel,
    /// JD UT, inclusive.
    pub start_jd: f64,
    /// JD UT, exclusive.
    pub end_jd: f64,
    pub duration_years: f64,
    /// Empty at the finest generated level.
    pub children: Vec<DashaPeriod>,
}

impl DashaPeriod {
    /// Period without children.
    pub fn new(graha: Graha, level: DashaLevel, start_jd: f64, end_jd: f64, years: f64) -> Self {
        Self {
            graha,
            level,
            start_jd,
            end_jd,
            duration_years: years,
            children: Vec::new(),
        }
    }

    /// Calendar length in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Half-open containment `[start, end)`.
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }

    /// Start as a UTC instant.
    pub fn start_utc(&self) -> Result<DateTime<Utc>, TimeError> {
        jd_to_datetime(self.start_jd)
    }

    /// End as a UTC instant.
    pub fn end_utc(&self) -> Result<DateTime<Utc>, TimeError> {
        jd_to_datetime(self.end_jd)
    }

    /// Sum of the children's durations in years (0 for a leaf).
    pub fn children_years(&self) -> f64 {
        self.children.iter().map(|c| c.duration_years).sum()
    }
}

/// Balance of the first Mahadasha at birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaBalance {
    /// Ruler of the Moon's nakshatra.
    pub graha: Graha,
    pub nakshatra: Nakshatra,
    pub nakshatra_index: u8,
    /// Years of the first period still to run at birth.
    pub balance_years: f64,
    /// Years of the first period already elapsed at birth.
    pub elapsed_years: f64,
    /// Nominal start of the full first period, before birth.
    pub nominal_start_jd: f64,
    /// Nominal end of the full first period.
    pub nominal_end_jd: f64,
}

/// Full Vimshottari timeline for one birth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaTimeline {
    /// Epoch the balance is counted from (0h UT of the birth date for a
    /// kundali).
    pub birth_jd: f64,
    /// Levels generated, 1..=3.
    pub depth: u8,
    pub balance: DashaBalance,
    pub mahadashas: Vec<DashaPeriod>,
}

impl DashaTimeline {
    /// Sum of Mahadasha durations in years.
    pub fn total_years(&self) -> f64 {
        self.mahadashas.iter().map(|p| p.duration_years).sum()
    }

    /// End of the last Mahadasha.
    pub fn end_jd(&self) -> f64 {
        self.mahadashas.last().map_or(self.birth_jd, |p| p.end_jd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_chain() {
        assert_eq!(
            DashaLevel::Mahadasha.child_level(),
            Some(DashaLevel::Antardasha)
        );
        assert_eq!(DashaLevel::Pratyantardasha.child_level(), None);
        assert_eq!(DashaLevel::from_u8(1), Some(DashaLevel::Antardasha));
        assert_eq!(DashaLevel::from_u8(3), None);
    }

    #[test]
    fn contains_is_half_open() {
        let p = DashaPeriod::new(Graha::Ketu, DashaLevel::Mahadasha, 10.0, 20.0, 1.0);
        assert!(p.contains(10.0));
        assert!(p.contains(19.999));
        assert!(!p.contains(20.0));
        assert!(!p.contains(9.999));
    }

    #[test]
    fn utc_accessors() {
        let p = DashaPeriod::new(
            Graha::Shukra,
            DashaLevel::Mahadasha,
            2_451_545.0,
            2_451_545.5,
            0.0,
        );
        assert_eq!(p.start_utc().unwrap().to_rfc3339(), "2000-01-01T12:00:00+00:00");
        assert_eq!(p.end_utc().unwrap().to_rfc3339(), "2000-01-02T00:00:00+00:00");
    }
}
