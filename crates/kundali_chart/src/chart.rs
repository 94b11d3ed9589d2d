//! Chart assembly: oracle -> sidereal -> placements.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use kundali_base::{
    AyanamsaSelection, Graha, Placement, SAPTA_GRAHAS, opposite, resolve, to_sidereal,
    whole_sign_house,
};
use kundali_ephem::{Body, EphemerisAdapter, EphemerisOracle, HouseSystem, NodeMode};

use crate::birth::BirthMoment;
use crate::error::KundaliError;

/// Houses are always Placidus.
pub const HOUSE_SYSTEM: HouseSystem = HouseSystem::Placidus;

/// A graha's placement and its whole-sign house from the Lagna.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrahaPosition {
    #[serde(flatten)]
    pub placement: Placement,
    /// 1..=12
    pub house: u8,
}

/// Sidereal chart for one instant at the birth location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    pub jd_ut: f64,
    /// Ayanamsa applied, in degrees.
    pub ayanamsa: f64,
    pub ayanamsa_selection: AyanamsaSelection,
    pub ascendant: Placement,
    /// Placidus cusps of houses 1..=12, sidereal.
    pub cusps: [Placement; 12],
    pub midheaven: Placement,
    pub grahas: BTreeMap<Graha, GrahaPosition>,
}

impl ChartResult {
    /// Position of `graha`, if the chart has it.
    pub fn graha(&self, graha: Graha) -> Option<&GrahaPosition> {
        self.grahas.get(&graha)
    }

    /// Sidereal longitude of the Moon, the input to the dasha timeline.
    pub fn moon_longitude(&self) -> Result<f64, KundaliError> {
        self.graha(Graha::Chandra)
            .map(|p| p.placement.longitude)
            .ok_or_else(|| KundaliError::InvalidInput("chart has no Moon".into()))
    }
}

/// Build the sidereal chart for `jd_ut` at the birth location.
///
/// Used for both the natal chart (birth instant) and a transit chart (any
/// other instant, same place). Rahu is the true node; Ketu is the point
/// opposite Rahu.
pub fn build_chart<O: EphemerisOracle + ?Sized>(
    oracle: &O,
    birth: &BirthMoment,
    selection: &AyanamsaSelection,
    jd_ut: f64,
) -> Result<ChartResult, KundaliError> {
    let eph = EphemerisAdapter::new(oracle);

    let houses = eph.houses(jd_ut, birth.latitude(), birth.longitude(), HOUSE_SYSTEM)?;
    let aya = eph.ayanamsa(jd_ut, selection)?;
    debug!(jd_ut, ayanamsa = aya, selection = selection.name(), "building chart");

    let sidereal = |tropical: f64| resolve(to_sidereal(tropical, aya));
    let ascendant = sidereal(houses.ascendant);
    let cusps = houses.cusps.map(sidereal);
    let midheaven = sidereal(houses.midheaven);

    let lagna = ascendant.sign_index;
    let position = |placement: Placement| GrahaPosition {
        placement,
        house: whole_sign_house(placement.sign_index, lagna),
    };

    let mut grahas = BTreeMap::new();
    for graha in SAPTA_GRAHAS.into_iter().chain([Graha::Rahu]) {
        let body = Body::for_graha(graha).ok_or_else(|| {
            KundaliError::InvalidInput(format!("{} has no ephemeris body", graha.english_name()))
        })?;
        let tropical = eph.tropical_longitude(jd_ut, body, NodeMode::True)?;
        grahas.insert(graha, position(sidereal(tropical)));
    }
    let rahu = grahas
        .get(&Graha::Rahu)
        .map(|p| p.placement.longitude)
        .ok_or_else(|| KundaliError::InvalidInput("chart has no Rahu".into()))?;
    grahas.insert(Graha::Ketu, position(resolve(opposite(rahu))));

    debug!(jd_ut, bodies = grahas.len(), lagna = ascendant.sign.name(), "chart built");
    Ok(ChartResult {
        jd_ut,
        ayanamsa: aya,
        ayanamsa_selection: selection.clone(),
        ascendant,
        cusps,
        midheaven,
        grahas,
    })
}
