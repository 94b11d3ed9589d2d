//! Balance of the first Mahadasha at birth.

use kundali_time::{DAYS_PER_YEAR, TROPICAL_YEAR_DAYS};

use super::data::{VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_YEARS, nakshatra_lord_position};
use super::types::DashaBalance;
use crate::error::VedicError;
use crate::nakshatra::{ALL_NAKSHATRAS, NAKSHATRA_SPAN};

/// Nakshatra index of the Moon for dasha purposes.
///
/// Accepts [0, 360]; exactly 360 is treated as the end of Revati.
pub(crate) fn moon_nakshatra_index(moon_lon: f64) -> Result<u8, VedicError> {
    if !moon_lon.is_finite() || !(0.0..=360.0).contains(&moon_lon) {
        return Err(VedicError::InvalidInput(format!(
            "moon longitude {moon_lon} outside [0, 360)"
        )));
    }
    Ok(((moon_lon / NAKSHATRA_SPAN).floor() as u8).min(26))
}

/// Compute the first period's balance from the Moon's sidereal longitude.
///
/// The remaining fraction of the nakshatra is the remaining fraction of its
/// ruler's period. The elapsed part is back-dated with a tropical year; the
/// full nominal span runs forward with a Julian year.
pub fn birth_balance(moon_sidereal_lon: f64, birth_jd: f64) -> Result<DashaBalance, VedicError> {
    if !birth_jd.is_finite() {
        return Err(VedicError::InvalidInput(format!(
            "birth JD {birth_jd} is not finite"
        )));
    }
    let idx = moon_nakshatra_index(moon_sidereal_lon)?;
    let pos = nakshatra_lord_position(idx);
    let full = VIMSHOTTARI_YEARS[pos];

    let into = moon_sidereal_lon - idx as f64 * NAKSHATRA_SPAN;
    let remaining_fraction = ((NAKSHATRA_SPAN - into) / NAKSHATRA_SPAN).clamp(0.0, 1.0);
    let balance_years = remaining_fraction * full;
    let elapsed_years = full - balance_years;

    let nominal_start_jd = birth_jd - elapsed_years * TROPICAL_YEAR_DAYS;
    let nominal_end_jd = nominal_start_jd + full * DAYS_PER_YEAR;

    Ok(DashaBalance {
        graha: VIMSHOTTARI_SEQUENCE[pos],
        nakshatra: ALL_NAKSHATRAS[idx as usize],
        nakshatra_index: idx,
        balance_years,
        elapsed_years,
        nominal_start_jd,
        nominal_end_jd,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::Graha;
    use crate::nakshatra::Nakshatra;

    const BIRTH: f64 = 2_448_026.708_333;

    #[test]
    fn start_of_nakshatra_has_full_balance() {
        let b = birth_balance(0.0, BIRTH).unwrap();
        assert_eq!(b.graha, Graha::Ketu);
        assert!((b.balance_years - 7.0).abs() < 1e-12);
        assert!(b.elapsed_years.abs() < 1e-12);
        assert!((b.nominal_start_jd - BIRTH).abs() < 1e-9);
    }

    #[test]
    fn midpoint_has_half_balance() {
        // middle of Rohini (Moon, 10 years)
        let lon = 3.5 * NAKSHATRA_SPAN;
        let b = birth_balance(lon, BIRTH).unwrap();
        assert_eq!(b.nakshatra, Nakshatra::Rohini);
        assert_eq!(b.graha, Graha::Chandra);
        assert!((b.balance_years - 5.0).abs() < 1e-9);
        assert!((b.elapsed_years - 5.0).abs() < 1e-9);
    }

    #[test]
    fn two_year_lengths() {
        let lon = 3.5 * NAKSHATRA_SPAN;
        let b = birth_balance(lon, BIRTH).unwrap();
        let expected_start = BIRTH - 5.0 * 365.2422;
        assert!((b.nominal_start_jd - expected_start).abs() < 1e-6);
        assert!((b.nominal_end_jd - (expected_start + 10.0 * 365.25)).abs() < 1e-6);
    }

    #[test]
    fn boundary_goes_to_later_nakshatra() {
        let b = birth_balance(NAKSHATRA_SPAN, BIRTH).unwrap();
        assert_eq!(b.nakshatra, Nakshatra::Bharani);
        assert_eq!(b.graha, Graha::Shukra);
        assert!((b.balance_years - 20.0).abs() < 1e-9);
    }

    #[test]
    fn exactly_360_clamps_to_revati() {
        let b = birth_balance(360.0, BIRTH).unwrap();
        assert_eq!(b.nakshatra, Nakshatra::Revati);
        assert_eq!(b.graha, Graha::Buddh);
        assert!(b.balance_years.abs() < 1e-9);
    }

    #[test]
    fn out_of_domain_rejected() {
        for bad in [-0.5, 360.5, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(birth_balance(bad, BIRTH), Err(VedicError::InvalidInput(_))),
                "{bad}"
            );
        }
        assert!(birth_balance(10.0, f64::NAN).is_err());
    }
}
