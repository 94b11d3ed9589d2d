//! Validating wrapper around an oracle.

use tracing::{trace, warn};

use kundali_base::{AyanamsaSelection, normalize_360};

use crate::body::{Body, HouseSystem, NodeMode};
use crate::error::EphemerisError;
use crate::oracle::{EphemerisOracle, HouseAngles};

/// Borrowing adapter that checks and normalizes every oracle answer.
///
/// Non-finite values become [`EphemerisError::InvalidPosition`]; finite
/// values outside [0, 360) are wrapped and logged.
pub struct EphemerisAdapter<'a, O: EphemerisOracle + ?Sized> {
    oracle: &'a O,
}

impl<O: EphemerisOracle + ?Sized> Clone for EphemerisAdapter<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O: EphemerisOracle + ?Sized> Copy for EphemerisAdapter<'_, O> {}

impl<'a, O: EphemerisOracle + ?Sized> EphemerisAdapter<'a, O> {
    /// Wrap `oracle`.
    pub fn new(oracle: &'a O) -> Self {
        Self { oracle }
    }

    /// House cusps and angles in [0, 360).
    pub fn houses(
        &self,
        jd_ut: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseAngles, EphemerisError> {
        check_instant(jd_ut)?;
        trace!(jd_ut, latitude, longitude, system = system.name(), "houses_and_angles");
        let raw = self
            .oracle
            .houses_and_angles(jd_ut, latitude, longitude, system)?;
        let mut cusps = [0.0; 12];
        for (out, cusp) in cusps.iter_mut().zip(raw.cusps) {
            *out = checked_longitude(jd_ut, "house cusp", cusp)?;
        }
        Ok(HouseAngles {
            cusps,
            ascendant: checked_longitude(jd_ut, "ascendant", raw.ascendant)?,
            midheaven: checked_longitude(jd_ut, "midheaven", raw.midheaven)?,
        })
    }

    /// Tropical longitude of `body` in [0, 360).
    pub fn tropical_longitude(
        &self,
        jd_ut: f64,
        body: Body,
        node: NodeMode,
    ) -> Result<f64, EphemerisError> {
        check_instant(jd_ut)?;
        trace!(jd_ut, body = body.name(), ?node, "body_longitude");
        let lon = self.oracle.body_longitude(jd_ut, body, node)?;
        checked_longitude(jd_ut, body.name(), lon)
    }

    /// Ayanamsa for the selection at `jd_ut`, in [0, 360).
    ///
    /// A custom selection returns its fixed value without calling the oracle.
    pub fn ayanamsa(
        &self,
        jd_ut: f64,
        selection: &AyanamsaSelection,
    ) -> Result<f64, EphemerisError> {
        match selection {
            AyanamsaSelection::Custom(custom) => Ok(custom.value()),
            AyanamsaSelection::Standard(standard) => {
                check_instant(jd_ut)?;
                trace!(jd_ut, standard = standard.name(), "ayanamsa");
                let aya = self.oracle.ayanamsa_deg(jd_ut, *standard)?;
                checked_longitude(jd_ut, "ayanamsa", aya)
            }
        }
    }
}

fn check_instant(jd_ut: f64) -> Result<(), EphemerisError> {
    if jd_ut.is_finite() {
        Ok(())
    } else {
        Err(EphemerisError::Oracle {
            jd_ut,
            message: "instant is not finite".into(),
        })
    }
}

fn checked_longitude(jd_ut: f64, what: &'static str, value: f64) -> Result<f64, EphemerisError> {
    if !value.is_finite() {
        return Err(EphemerisError::InvalidPosition { jd_ut, what, value });
    }
    if !(0.0..360.0).contains(&value) {
        warn!(jd_ut, what, value, "oracle returned longitude outside [0, 360), wrapping");
    }
    Ok(normalize_360(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_base::AyanamsaStandard;

    struct Raw {
        sun: f64,
        asc: f64,
    }

    impl EphemerisOracle for Raw {
        fn houses_and_angles(
            &self,
            _jd_ut: f64,
            _latitude: f64,
            _longitude: f64,
            _system: HouseSystem,
        ) -> Result<HouseAngles, EphemerisError> {
            Ok(HouseAngles {
                cusps: [self.asc; 12],
                ascendant: self.asc,
                midheaven: 10.0,
            })
        }

        fn body_longitude(
            &self,
            jd_ut: f64,
            body: Body,
            _node: NodeMode,
        ) -> Result<f64, EphemerisError> {
            match body {
                Body::Sun => Ok(self.sun),
                _ => Err(EphemerisError::Unavailable { jd_ut }),
            }
        }
    }

    #[test]
    fn wraps_out_of_range_values() {
        let o = Raw {
            sun: -10.0,
            asc: 370.0,
        };
        let a = EphemerisAdapter::new(&o);
        let sun = a.tropical_longitude(1.0, Body::Sun, NodeMode::True).unwrap();
        assert!((sun - 350.0).abs() < 1e-12);
        let h = a.houses(1.0, 0.0, 0.0, HouseSystem::Placidus).unwrap();
        assert!((h.ascendant - 10.0).abs() < 1e-12);
        assert!(h.cusps.iter().all(|c| (c - 10.0).abs() < 1e-12));
    }

    #[test]
    fn nan_is_invalid_position() {
        let o = Raw {
            sun: f64::NAN,
            asc: 0.0,
        };
        let err = EphemerisAdapter::new(&o)
            .tropical_longitude(5.0, Body::Sun, NodeMode::True)
            .unwrap_err();
        assert!(matches!(
            err,
            EphemerisError::InvalidPosition { what: "Sun", .. }
        ));
        assert_eq!(err.jd_ut(), Some(5.0));
    }

    #[test]
    fn oracle_errors_propagate_with_instant() {
        let o = Raw { sun: 0.0, asc: 0.0 };
        let err = EphemerisAdapter::new(&o)
            .tropical_longitude(7.5, Body::Moon, NodeMode::True)
            .unwrap_err();
        assert_eq!(err, EphemerisError::Unavailable { jd_ut: 7.5 });
    }

    #[test]
    fn non_finite_instant_rejected() {
        let o = Raw { sun: 0.0, asc: 0.0 };
        assert!(
            EphemerisAdapter::new(&o)
                .tropical_longitude(f64::NAN, Body::Sun, NodeMode::True)
                .is_err()
        );
    }

    #[test]
    fn custom_ayanamsa_skips_oracle() {
        let o = Raw { sun: 0.0, asc: 0.0 };
        let a = EphemerisAdapter::new(&o);
        let sel = AyanamsaSelection::custom("fixed", 22.0).unwrap();
        assert_eq!(a.ayanamsa(f64::NAN, &sel).unwrap(), 22.0);
        let std = AyanamsaSelection::Standard(AyanamsaStandard::Raman);
        assert!(a.ayanamsa(2_451_545.0, &std).unwrap() > 22.0);
    }
}
