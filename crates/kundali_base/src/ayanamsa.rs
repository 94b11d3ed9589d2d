//! Ayanamsa standards and the tropical -> sidereal conversion.
//!
//! The ayanamsa is the angular offset between the tropical zodiac (vernal
//! equinox) and a sidereal zodiac anchored to the fixed stars. Each named
//! standard is pinned by its value at J2000.0; the value at any other epoch
//! adds the IAU 2006 general precession in longitude. True-equinox standards
//! also add the nutation in longitude.
//!
//! The selection is always an explicit argument. Nothing here holds a
//! process-wide sidereal mode.

use std::fmt;
use std::str::FromStr;

use kundali_time::jd_to_centuries;
use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::util::normalize_360;

/// Named sidereal standards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AyanamsaStandard {
    /// Spica at 0 Libra against the true (nutated) equinox.
    TrueChitra,
    /// Chitrapaksha against the mean equinox (Indian Calendar Reform Committee).
    Lahiri,
    /// B.V. Raman.
    Raman,
    /// Krishnamurti Paddhati.
    Krishnamurti,
}

/// Every named standard, in declaration order.
pub const ALL_STANDARDS: [AyanamsaStandard; 4] = [
    AyanamsaStandard::TrueChitra,
    AyanamsaStandard::Lahiri,
    AyanamsaStandard::Raman,
    AyanamsaStandard::Krishnamurti,
];

impl AyanamsaStandard {
    /// Canonical lower-case identifier.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TrueChitra => "true_chitra",
            Self::Lahiri => "lahiri",
            Self::Raman => "raman",
            Self::Krishnamurti => "krishnamurti",
        }
    }

    /// Ayanamsa at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::TrueChitra | Self::Lahiri => 23.853,
            Self::Raman => 22.370,
            Self::Krishnamurti => 23.850,
        }
    }

    /// Whether the standard is measured from the true equinox (adds nutation).
    pub const fn uses_true_equinox(self) -> bool {
        matches!(self, Self::TrueChitra)
    }

    /// All standards.
    pub const fn all() -> &'static [AyanamsaStandard; 4] {
        &ALL_STANDARDS
    }
}

impl fmt::Display for AyanamsaStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AyanamsaStandard {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        match key.as_str() {
            "true_chitra" | "truechitra" => Ok(Self::TrueChitra),
            "lahiri" => Ok(Self::Lahiri),
            "raman" => Ok(Self::Raman),
            "krishnamurti" | "kp" => Ok(Self::Krishnamurti),
            _ => Err(VedicError::InvalidAyanamsa(format!(
                "unknown standard '{}'",
                s.trim()
            ))),
        }
    }
}

/// A fixed user-supplied offset, used unchanged at every instant.
///
/// Only constructible through [`AyanamsaSelection::custom`] or a checked
/// deserialize, so `value` always lies in [0, 360).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCustomAyanamsa")]
pub struct CustomAyanamsa {
    name: String,
    value: f64,
}

impl CustomAyanamsa {
    /// Label supplied with the value.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Offset in degrees, in [0, 360).
    pub fn value(&self) -> f64 {
        self.value
    }
}

#[derive(Deserialize)]
struct RawCustomAyanamsa {
    name: String,
    value: f64,
}

impl TryFrom<RawCustomAyanamsa> for CustomAyanamsa {
    type Error = VedicError;

    fn try_from(raw: RawCustomAyanamsa) -> Result<Self, Self::Error> {
        if raw.name.trim().is_empty() {
            return Err(VedicError::InvalidAyanamsa(
                "custom ayanamsa needs a name".into(),
            ));
        }
        if !raw.value.is_finite() || !(0.0..360.0).contains(&raw.value) {
            return Err(VedicError::InvalidAyanamsa(format!(
                "custom value {} outside [0, 360)",
                raw.value
            )));
        }
        Ok(Self {
            name: raw.name,
            value: raw.value,
        })
    }
}

/// Which ayanamsa a computation uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AyanamsaSelection {
    Standard(AyanamsaStandard),
    Custom(CustomAyanamsa),
}

impl Default for AyanamsaSelection {
    fn default() -> Self {
        Self::Standard(AyanamsaStandard::TrueChitra)
    }
}

impl AyanamsaSelection {
    /// Build a custom selection; `value` must lie in [0, 360).
    pub fn custom(name: impl Into<String>, value: f64) -> Result<Self, VedicError> {
        CustomAyanamsa::try_from(RawCustomAyanamsa {
            name: name.into(),
            value,
        })
        .map(Self::Custom)
    }

    /// Standard name or the custom label.
    pub fn name(&self) -> &str {
        match self {
            Self::Standard(s) => s.name(),
            Self::Custom(c) => c.name(),
        }
    }

    /// The named standard, `None` for a custom value.
    pub fn standard(&self) -> Option<AyanamsaStandard> {
        match self {
            Self::Standard(s) => Some(*s),
            Self::Custom(_) => None,
        }
    }

    /// Ayanamsa at `jd_ut` using the built-in formula for named standards.
    pub fn formula_value(&self, jd_ut: f64) -> f64 {
        match self {
            Self::Standard(s) => formula_ayanamsa_deg(*s, jd_ut),
            Self::Custom(c) => c.value(),
        }
    }
}

impl FromStr for AyanamsaSelection {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<AyanamsaStandard>().map(Self::Standard)
    }
}

/// IAU 2006 general precession in ecliptic longitude, in degrees.
///
/// `t` is Julian centuries since J2000.0.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    let arcsec = 5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3
        - 0.000023857 * t4
        - 0.0000000383 * t5;
    arcsec / 3600.0
}

/// Nutation in longitude (arcsec), four leading IAU 1980 terms.
///
/// Good to about 0.5 arcsec.
pub fn nutation_longitude_arcsec(t: f64) -> f64 {
    let omega = (125.04452 - 1934.136261 * t).to_radians();
    let sun_mean = (280.4665 + 36000.7698 * t).to_radians();
    let moon_mean = (218.3165 + 481_267.8813 * t).to_radians();
    -17.20 * omega.sin() - 1.32 * (2.0 * sun_mean).sin() - 0.23 * (2.0 * moon_mean).sin()
        + 0.21 * (2.0 * omega).sin()
}

/// Formula ayanamsa for a named standard at `jd_ut`, in [0, 360).
///
/// UT stands in for TT.
pub fn formula_ayanamsa_deg(standard: AyanamsaStandard, jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let mut aya = standard.reference_j2000_deg() + general_precession_longitude_deg(t);
    if standard.uses_true_equinox() {
        aya += nutation_longitude_arcsec(t) / 3600.0;
    }
    normalize_360(aya)
}

/// `(tropical - ayanamsa) mod 360`.
pub fn to_sidereal(tropical_lon_deg: f64, ayanamsa_deg: f64) -> f64 {
    normalize_360(tropical_lon_deg - ayanamsa_deg)
}
