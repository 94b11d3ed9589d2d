//! The oracle trait: the only way the engine learns positions.

use serde::{Deserialize, Serialize};

use kundali_base::{AyanamsaStandard, formula_ayanamsa_deg};

use crate::body::{Body, HouseSystem, NodeMode};
use crate::error::EphemerisError;

/// Tropical house cusps and angles for one instant and place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseAngles {
    /// Cusps of houses 1..=12, tropical degrees.
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub midheaven: f64,
}

/// External source of tropical positions.
///
/// Implementations are shared across threads; every call carries all of
/// its parameters, including the ayanamsa standard.
pub trait EphemerisOracle: Send + Sync {
    fn houses_and_angles(
        &self,
        jd_ut: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseAngles, EphemerisError>;

    /// Tropical ecliptic longitude in degrees. `node` is only consulted for
    /// [`Body::LunarNode`].
    fn body_longitude(&self, jd_ut: f64, body: Body, node: NodeMode)
    -> Result<f64, EphemerisError>;

    /// Ayanamsa for `standard` at `jd_ut`. Defaults to the built-in formula.
    fn ayanamsa_deg(&self, jd_ut: f64, standard: AyanamsaStandard) -> Result<f64, EphemerisError> {
        Ok(formula_ayanamsa_deg(standard, jd_ut))
    }
}
