//! Divisional (varga) charts derived from a natal chart.

use std::collections::BTreeMap;

use serde::Serialize;

use kundali_base::{Graha, Rashi, Varga, VargaPlacement, varga_placement, whole_sign_house};

use crate::chart::ChartResult;

/// Navamsa sign of the Lagna and of every graha.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivisionalPlacement {
    pub lagna: VargaPlacement,
    pub grahas: BTreeMap<Graha, VargaPlacement>,
}

/// A graha in a varga chart, with its house from the varga Lagna.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VargaGraha {
    pub sign: Rashi,
    pub sign_index: u8,
    pub house: u8,
}

/// One divisional chart: the varga Lagna and each graha's varga sign and
/// whole-sign house counted from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VargaChart {
    pub varga: Varga,
    pub lagna: VargaPlacement,
    pub grahas: BTreeMap<Graha, VargaGraha>,
}

/// Navamsa (D9) placements of the ascendant and all nine grahas.
pub fn to_navamsa(chart: &ChartResult) -> DivisionalPlacement {
    let lagna = varga_placement(Varga::D9, chart.ascendant.longitude);
    let grahas = chart
        .grahas
        .iter()
        .map(|(g, p)| (*g, varga_placement(Varga::D9, p.placement.longitude)))
        .collect();
    DivisionalPlacement { lagna, grahas }
}

/// Map `chart` into `varga`.
pub fn to_varga_chart(chart: &ChartResult, varga: Varga) -> VargaChart {
    let lagna = varga_placement(varga, chart.ascendant.longitude);
    let grahas = chart
        .grahas
        .iter()
        .map(|(g, p)| {
            let vp = varga_placement(varga, p.placement.longitude);
            let entry = VargaGraha {
                sign: vp.sign,
                sign_index: vp.sign_index,
                house: whole_sign_house(vp.sign_index, lagna.sign_index),
            };
            (*g, entry)
        })
        .collect();
    VargaChart {
        varga,
        lagna,
        grahas,
    }
}
