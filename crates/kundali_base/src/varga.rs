//! Varga (divisional chart) sign mapping.
//!
//! Each varga cuts a 30-degree sign into parts and sends every part to a
//! target sign. All maps here are total functions of `(sign, degrees_in_sign)`;
//! part indexes use half-open intervals and clamp to the last part.
//!
//! | varga | parts | rule |
//! |---|---|---|
//! | D1 Rashi | 1 | identity |
//! | D2 Hora | 2 | odd sign: Leo, Cancer; even sign: Cancer, Leo |
//! | D3 Drekkana | 3 | sign, 5th, 9th |
//! | D7 Saptamsa | 7 | odd sign from itself, even sign from the 7th |
//! | D9 Navamsa | 9 | fire from Aries, earth from Capricorn, air from Libra, water from Cancer |
//! | D12 Dwadasamsa | 12 | from the sign itself |
//! | D30 Trimsamsa | 5 unequal | Parashari degree ranges |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::rashi::{Rashi, rashi_from_longitude};

/// Supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Varga {
    D1,
    D2,
    D3,
    D7,
    D9,
    D12,
    D30,
}

/// The divisional charts emitted alongside a natal chart.
pub const ALL_VARGAS: [Varga; 6] = [
    Varga::D2,
    Varga::D3,
    Varga::D7,
    Varga::D9,
    Varga::D12,
    Varga::D30,
];

/// The seven vargas averaged by Saptavargaja bala.
pub const SAPTAVARGA: [Varga; 7] = [
    Varga::D1,
    Varga::D2,
    Varga::D3,
    Varga::D7,
    Varga::D9,
    Varga::D12,
    Varga::D30,
];

impl Varga {
    /// Number of divisions per sign.
    pub const fn divisions(self) -> u8 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D12 => 12,
            Self::D30 => 30,
        }
    }

    /// Traditional name, e.g. "Navamsa".
    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D7 => "Saptamsa",
            Self::D9 => "Navamsa",
            Self::D12 => "Dwadasamsa",
            Self::D30 => "Trimsamsa",
        }
    }

    /// Short code such as `D9`.
    pub const fn code(self) -> &'static str {
        match self {
            Self::D1 => "D1",
            Self::D2 => "D2",
            Self::D3 => "D3",
            Self::D7 => "D7",
            Self::D9 => "D9",
            Self::D12 => "D12",
            Self::D30 => "D30",
        }
    }
}

impl fmt::Display for Varga {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Varga {
    type Err = VedicError;

    /// Accepts `D9`, `d9`, `9` or `navamsa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let digits = key.strip_prefix('d').unwrap_or(&key);
        SAPTAVARGA
            .iter()
            .copied()
            .find(|v| {
                digits == v.divisions().to_string() || key == v.name().to_ascii_lowercase()
            })
            .ok_or_else(|| VedicError::InvalidInput(format!("unknown varga '{}'", s.trim())))
    }
}

/// Element of a sign, repeating fire, earth, air, water from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Element of a sign, counted from Aries as fire.
pub const fn element(rashi_index: u8) -> Element {
    match rashi_index % 4 {
        0 => Element::Fire,
        1 => Element::Earth,
        2 => Element::Air,
        _ => Element::Water,
    }
}

/// Navamsa starting sign per element.
const fn navamsa_start(el: Element) -> u8 {
    match el {
        Element::Fire => 0,
        Element::Earth => 9,
        Element::Air => 6,
        Element::Water => 3,
    }
}

/// Trimsamsa ranges as (end degree exclusive, target sign).
const TRIMSAMSA_ODD: [(f64, u8); 5] = [(5.0, 0), (10.0, 10), (18.0, 8), (25.0, 2), (30.0, 6)];
const TRIMSAMSA_EVEN: [(f64, u8); 5] = [(5.0, 1), (12.0, 5), (20.0, 11), (25.0, 9), (30.0, 7)];

fn equal_part(degrees_in_sign: f64, parts: u8) -> u8 {
    let span = 30.0 / parts as f64;
    let idx = (degrees_in_sign.max(0.0) / span).floor();
    (idx as u8).min(parts - 1)
}

/// Target sign index (0..11) of `(sign_index, degrees_in_sign)` in `varga`.
pub fn varga_sign_index(varga: Varga, sign_index: u8, degrees_in_sign: f64) -> u8 {
    let sign = sign_index % 12;
    let odd = sign % 2 == 0;
    match varga {
        Varga::D1 => sign,
        Varga::D2 => {
            let first_half = equal_part(degrees_in_sign, 2) == 0;
            match (odd, first_half) {
                (true, true) | (false, false) => 4,
                (true, false) | (false, true) => 3,
            }
        }
        Varga::D3 => (sign + 4 * equal_part(degrees_in_sign, 3)) % 12,
        Varga::D7 => {
            let start = if odd { sign } else { (sign + 6) % 12 };
            (start + equal_part(degrees_in_sign, 7)) % 12
        }
        Varga::D9 => (navamsa_start(element(sign)) + equal_part(degrees_in_sign, 9)) % 12,
        Varga::D12 => (sign + equal_part(degrees_in_sign, 12)) % 12,
        Varga::D30 => {
            let table = if odd { &TRIMSAMSA_ODD } else { &TRIMSAMSA_EVEN };
            table
                .iter()
                .find(|(end, _)| degrees_in_sign < *end)
                .map_or(table[4].1, |(_, target)| *target)
        }
    }
}

/// Sign a body occupies in a divisional chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VargaPlacement {
    pub sign: Rashi,
    pub sign_index: u8,
}

/// Map a sidereal longitude into `varga`.
pub fn varga_placement(varga: Varga, sidereal_lon_deg: f64) -> VargaPlacement {
    let info = rashi_from_longitude(sidereal_lon_deg);
    let sign_index = varga_sign_index(varga, info.rashi_index, info.degrees_in_rashi);
    VargaPlacement {
        sign: Rashi::from_index(sign_index),
        sign_index,
    }
}
