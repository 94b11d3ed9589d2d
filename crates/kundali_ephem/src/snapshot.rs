//! Oracle backed by precomputed positions.
//!
//! A snapshot is JSON of the form
//!
//! ```json
//! {
//!   "entries": [
//!     {
//!       "jd_ut": 2448026.708333,
//!       "houses": { "cusps": [..12 values..], "ascendant": 98.1, "midheaven": 3.4 },
//!       "bodies": { "Sun": 54.2, "Moon": 190.7, "LunarNode": 305.1 },
//!       "mean_node": 306.0,
//!       "ayanamsa": { "lahiri": 23.718 }
//!     }
//!   ]
//! }
//! ```
//!
//! Houses are stored for the location the snapshot was taken at. `bodies`
//! holds the true node under `LunarNode`; `mean_node` is optional. Missing
//! ayanamsa values fall back to the built-in formula.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use kundali_base::{AyanamsaStandard, formula_ayanamsa_deg};

use crate::body::{Body, HouseSystem, NodeMode};
use crate::error::EphemerisError;
use crate::oracle::{EphemerisOracle, HouseAngles};

/// Instants closer than this (days, about 86 ms) are the same instant.
pub const JD_MATCH_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub jd_ut: f64,
    pub houses: HouseAngles,
    pub bodies: BTreeMap<Body, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean_node: Option<f64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub ayanamsa: BTreeMap<AyanamsaStandard, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotOracle {
    entries: Vec<SnapshotEntry>,
}

impl SnapshotOracle {
    /// Oracle over `entries`.
    pub fn new(entries: Vec<SnapshotEntry>) -> Self {
        Self { entries }
    }

    /// Parse a JSON array of entries.
    pub fn from_json_str(json: &str) -> Result<Self, EphemerisError> {
        serde_json::from_str(json).map_err(|e| EphemerisError::Snapshot(e.to_string()))
    }

    /// Load a JSON snapshot file.
    pub fn load(path: &Path) -> Result<Self, EphemerisError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EphemerisError::Snapshot(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&content)
    }

    /// Add one instant.
    pub fn push(&mut self, entry: SnapshotEntry) {
        self.entries.push(entry);
    }

    /// Stored instants.
    pub fn entries(&self) -> &[SnapshotEntry] {
        &self.entries
    }

    fn entry(&self, jd_ut: f64) -> Result<&SnapshotEntry, EphemerisError> {
        self.entries
            .iter()
            .find(|e| (e.jd_ut - jd_ut).abs() <= JD_MATCH_TOLERANCE)
            .ok_or(EphemerisError::Unavailable { jd_ut })
    }
}

impl EphemerisOracle for SnapshotOracle {
    fn houses_and_angles(
        &self,
        jd_ut: f64,
        _latitude: f64,
        _longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseAngles, EphemerisError> {
        if system != HouseSystem::Placidus {
            return Err(EphemerisError::Oracle {
                jd_ut,
                message: format!("snapshot only holds placidus houses, not {}", system.name()),
            });
        }
        Ok(self.entry(jd_ut)?.houses)
    }

    fn body_longitude(
        &self,
        jd_ut: f64,
        body: Body,
        node: NodeMode,
    ) -> Result<f64, EphemerisError> {
        let entry = self.entry(jd_ut)?;
        let value = match (body, node) {
            (Body::LunarNode, NodeMode::Mean) => entry.mean_node,
            _ => entry.bodies.get(&body).copied(),
        };
        value.ok_or_else(|| EphemerisError::Oracle {
            jd_ut,
            message: format!("snapshot has no {} position", body.name()),
        })
    }

    fn ayanamsa_deg(&self, jd_ut: f64, standard: AyanamsaStandard) -> Result<f64, EphemerisError> {
        let stored = self
            .entry(jd_ut)
            .ok()
            .and_then(|e| e.ayanamsa.get(&standard).copied());
        Ok(stored.unwrap_or_else(|| formula_ayanamsa_deg(standard, jd_ut)))
    }
}
