//! Positional strength: Dig Bala and Sthana Bala for the seven classical grahas.
//!
//! Values are in shashtiamsas (1 rupa = 60 shashtiamsas). Rahu and Ketu carry
//! no bala and are skipped.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::graha::{Gender, Graha};
use crate::rashi::rashi_from_longitude;
use crate::relationship::{dignity_in_sign, exaltation_longitude};
use crate::util::arc_distance;
use crate::varga::{SAPTAVARGA, Varga, varga_sign_index};

/// House of maximum directional strength, in SAPTA_GRAHAS order.
pub const DIG_BALA_HOUSE: [u8; 7] = [10, 4, 10, 1, 1, 4, 7];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DigBala {
    pub house: u8,
    pub preferred_house: u8,
    pub shashtiamsas: f64,
    pub rupas: f64,
}

/// Dig Bala from a whole-sign house (1..=12).
///
/// Full strength in the preferred house, falling linearly to zero seven
/// houses away.
pub fn dig_bala(graha: Graha, house: u8) -> Option<DigBala> {
    if graha.is_node() || !(1..=12).contains(&house) {
        return None;
    }
    let preferred_house = DIG_BALA_HOUSE[graha.index() as usize];
    let diff = (house as i16 - preferred_house as i16).unsigned_abs();
    let dist = diff.min(12 - diff);
    let rupas = 1.0 - 30.0 * dist as f64 / 180.0;
    Some(DigBala {
        house,
        preferred_house,
        shashtiamsas: 60.0 * rupas,
        rupas,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SthanaBala {
    pub uchcha: f64,
    pub saptavargaja: f64,
    pub oja_yugma: f64,
    pub kendradi: f64,
    pub drekkana: f64,
    pub total: f64,
    pub rupas: f64,
}

/// 60 at the exaltation point, 0 at debilitation.
pub fn uchcha_bala(graha: Graha, sidereal_lon: f64) -> Option<f64> {
    let exalt = exaltation_longitude(graha)?;
    Some(60.0 * (1.0 - arc_distance(sidereal_lon, exalt) / 180.0))
}

/// Mean dignity points over the seven saptavarga charts.
pub fn saptavargaja_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    let info = rashi_from_longitude(sidereal_lon);
    let sum: f64 = SAPTAVARGA
        .iter()
        .map(|v| {
            let sign = varga_sign_index(*v, info.rashi_index, info.degrees_in_rashi);
            dignity_in_sign(graha, sign).saptavargaja_points()
        })
        .sum();
    sum / SAPTAVARGA.len() as f64
}

/// 15 each for rashi and navamsa parity matching the graha's gender.
pub fn oja_yugma_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    let info = rashi_from_longitude(sidereal_lon);
    let navamsa = varga_sign_index(Varga::D9, info.rashi_index, info.degrees_in_rashi);
    let wants_odd = graha.gender() != Gender::Female;
    let score = |sign: u8| if (sign % 2 == 0) == wants_odd { 15.0 } else { 0.0 };
    score(info.rashi_index) + score(navamsa)
}

/// Kendra 60, panaphara 30, apoklima 15.
pub fn kendradi_bala(house: u8) -> f64 {
    match house {
        1 | 4 | 7 | 10 => 60.0,
        2 | 5 | 8 | 11 => 30.0,
        _ => 15.0,
    }
}

/// 15 when male in the first decanate, female in the second, neuter in the third.
pub fn drekkana_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    let info = rashi_from_longitude(sidereal_lon);
    let decanate = ((info.degrees_in_rashi / 10.0).floor() as u8).min(2);
    let wanted = match graha.gender() {
        Gender::Male => 0,
        Gender::Female => 1,
        Gender::Neuter => 2,
    };
    if decanate == wanted { 15.0 } else { 0.0 }
}

/// Sthana Bala and its components.
pub fn sthana_bala(graha: Graha, sidereal_lon: f64, house: u8) -> Option<SthanaBala> {
    let uchcha = uchcha_bala(graha, sidereal_lon)?;
    let saptavargaja = saptavargaja_bala(graha, sidereal_lon);
    let oja_yugma = oja_yugma_bala(graha, sidereal_lon);
    let kendradi = kendradi_bala(house);
    let drekkana = drekkana_bala(graha, sidereal_lon);
    let total = uchcha + saptavargaja + oja_yugma + kendradi + drekkana;
    Some(SthanaBala {
        uchcha,
        saptavargaja,
        oja_yugma,
        kendradi,
        drekkana,
        total,
        rupas: total / 60.0,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrahaBala {
    pub dig: DigBala,
    pub sthana: SthanaBala,
}

/// Bala for every classical graha in a chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BalaReport {
    pub grahas: BTreeMap<Graha, GrahaBala>,
}

impl BalaReport {
    /// Build from `(graha, sidereal longitude, whole-sign house)` triples.
    pub fn from_positions(positions: impl IntoIterator<Item = (Graha, f64, u8)>) -> Self {
        let grahas = positions
            .into_iter()
            .filter_map(|(g, lon, house)| {
                let dig = dig_bala(g, house)?;
                let sthana = sthana_bala(g, lon, house)?;
                Some((g, GrahaBala { dig, sthana }))
            })
            .collect();
        Self { grahas }
    }
}
