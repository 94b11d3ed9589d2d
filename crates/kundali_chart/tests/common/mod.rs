#![allow(dead_code)]

use kundali_base::normalize_360;
use kundali_ephem::{Body, EphemerisError, EphemerisOracle, HouseAngles, HouseSystem, NodeMode};

/// Linear mean-motion positions from J2000. Not astronomy, only a
/// deterministic oracle that answers for any instant.
pub struct MeanMotionOracle;

const J2000: f64 = 2_451_545.0;

fn mean(l0: f64, rate_per_day: f64, jd: f64) -> f64 {
    normalize_360(l0 + rate_per_day * (jd - J2000))
}

impl EphemerisOracle for MeanMotionOracle {
    fn houses_and_angles(
        &self,
        jd_ut: f64,
        _latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseAngles, EphemerisError> {
        if system != HouseSystem::Placidus {
            return Err(EphemerisError::Oracle {
                jd_ut,
                message: "placidus only".into(),
            });
        }
        let midheaven = normalize_360(280.460_618 + 360.985_647 * (jd_ut - J2000) + longitude);
        let ascendant = normalize_360(midheaven + 90.0);
        let mut cusps = [0.0; 12];
        for (i, c) in cusps.iter_mut().enumerate() {
            *c = normalize_360(ascendant + 30.0 * i as f64);
        }
        Ok(HouseAngles {
            cusps,
            ascendant,
            midheaven,
        })
    }

    fn body_longitude(
        &self,
        jd_ut: f64,
        body: Body,
        node: NodeMode,
    ) -> Result<f64, EphemerisError> {
        Ok(match body {
            Body::Sun => mean(280.460, 0.985_647, jd_ut),
            Body::Moon => mean(218.316, 13.176_396, jd_ut),
            Body::Mercury => mean(252.251, 4.092_339, jd_ut),
            Body::Venus => mean(181.980, 1.602_131, jd_ut),
            Body::Mars => mean(355.433, 0.524_033, jd_ut),
            Body::Jupiter => mean(34.352, 0.083_091, jd_ut),
            Body::Saturn => mean(50.078, 0.033_460, jd_ut),
            Body::LunarNode => match node {
                NodeMode::Mean => mean(125.045, -0.052_954, jd_ut),
                NodeMode::True => mean(125.045, -0.052_954, jd_ut) - 1.5 + 360.0,
            },
        })
    }
}

/// Oracle that fails every call.
pub struct Broken;

impl EphemerisOracle for Broken {
    fn houses_and_angles(
        &self,
        jd_ut: f64,
        _latitude: f64,
        _longitude: f64,
        _system: HouseSystem,
    ) -> Result<HouseAngles, EphemerisError> {
        Err(EphemerisError::Unavailable { jd_ut })
    }

    fn body_longitude(
        &self,
        jd_ut: f64,
        _body: Body,
        _node: NodeMode,
    ) -> Result<f64, EphemerisError> {
        Err(EphemerisError::Unavailable { jd_ut })
    }
}
