//! Placement resolution: sidereal longitude -> sign, nakshatra, pada.

use serde::Serialize;

use crate::error::VedicError;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Dms, Rashi, deg_to_dms, rashi_from_longitude};
use crate::util::normalize_360;

/// Where a sidereal longitude falls in the zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    /// Sidereal longitude, [0, 360).
    pub longitude: f64,
    pub longitude_dms: Dms,
    pub sign: Rashi,
    pub sign_index: u8,
    /// [0, 30)
    pub degrees_in_sign: f64,
    pub degrees_in_sign_dms: Dms,
    pub nakshatra: Nakshatra,
    pub nakshatra_index: u8,
    /// 1..=4
    pub pada: u8,
}

/// Resolve a sidereal longitude into its placement.
///
/// Out-of-range finite input is normalized to [0, 360) first.
pub fn resolve(sidereal_lon_deg: f64) -> Placement {
    let longitude = normalize_360(sidereal_lon_deg);
    let rashi = rashi_from_longitude(longitude);
    let nak = nakshatra_from_longitude(longitude);
    Placement {
        longitude,
        longitude_dms: deg_to_dms(longitude),
        sign: rashi.rashi,
        sign_index: rashi.rashi_index,
        degrees_in_sign: rashi.degrees_in_rashi,
        degrees_in_sign_dms: rashi.dms,
        nakshatra: nak.nakshatra,
        nakshatra_index: nak.nakshatra_index,
        pada: nak.pada,
    }
}

/// Resolve, rejecting NaN and infinities.
pub fn try_resolve(sidereal_lon_deg: f64) -> Result<Placement, VedicError> {
    if !sidereal_lon_deg.is_finite() {
        return Err(VedicError::InvalidInput(format!(
            "longitude {sidereal_lon_deg} is not finite"
        )));
    }
    Ok(resolve(sidereal_lon_deg))
}

/// The point opposite `lon`: `(lon + 180) mod 360`.
pub fn opposite(lon: f64) -> f64 {
    normalize_360(lon + 180.0)
}

/// Whole-sign house of `sign_index` counted from `lagna_sign_index` (1..=12).
pub fn whole_sign_house(sign_index: u8, lagna_sign_index: u8) -> u8 {
    ((sign_index % 12 + 12 - lagna_sign_index % 12) % 12) + 1
}
