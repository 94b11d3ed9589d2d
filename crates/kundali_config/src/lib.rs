//! Runtime configuration for kundali generation.
//!
//! Loaded from TOML; every field has a default so an empty file (or no
//! file) is a valid configuration:
//!
//! ```toml
//! ayanamsa = "true_chitra"
//! dasha_depth = 3
//! house_system = "placidus"
//! tz_offset_min_hours = -12.0
//! tz_offset_max_hours = 14.0
//! vargas = ["D2", "D3", "D7", "D9", "D12", "D30"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use kundali_base::{ALL_VARGAS, AyanamsaSelection, Varga};
use kundali_ephem::HouseSystem;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KundaliConfig {
    /// Default ayanamsa standard when a request names none.
    pub ayanamsa: String,
    /// 1 = Mahadasha, 2 = + Antardasha, 3 = + Pratyantardasha.
    pub dasha_depth: u8,
    pub house_system: HouseSystem,
    pub tz_offset_min_hours: f64,
    pub tz_offset_max_hours: f64,
    /// Divisional charts emitted with each kundali.
    pub vargas: Vec<Varga>,
}

impl Default for KundaliConfig {
    fn default() -> Self {
        Self {
            ayanamsa: "true_chitra".into(),
            dasha_depth: 3,
            house_system: HouseSystem::Placidus,
            tz_offset_min_hours: -12.0,
            tz_offset_max_hours: 14.0,
            vargas: ALL_VARGAS.to_vec(),
        }
    }
}

impl KundaliConfig {
    /// Read and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges and supported values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=3).contains(&self.dasha_depth) {
            return Err(ConfigError::Invalid(format!(
                "dasha_depth must be 1..=3, got {}",
                self.dasha_depth
            )));
        }
        if self.house_system != HouseSystem::Placidus {
            return Err(ConfigError::Invalid(format!(
                "house_system '{}' is not supported; use placidus",
                self.house_system.name()
            )));
        }
        if !self.tz_offset_min_hours.is_finite()
            || !self.tz_offset_max_hours.is_finite()
            || self.tz_offset_min_hours >= self.tz_offset_max_hours
        {
            return Err(ConfigError::Invalid(
                "tz_offset_min_hours must be less than tz_offset_max_hours".into(),
            ));
        }
        if self.vargas.is_empty() {
            return Err(ConfigError::Invalid("vargas must not be empty".into()));
        }
        self.ayanamsa_selection()?;
        Ok(())
    }

    /// The configured default ayanamsa.
    pub fn ayanamsa_selection(&self) -> Result<AyanamsaSelection, ConfigError> {
        self.ayanamsa
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("ayanamsa: {e}")))
    }

    /// Whether `hours` is finite and inside the configured range (inclusive).
    pub fn tz_offset_in_range(&self, hours: f64) -> bool {
        hours.is_finite() && (self.tz_offset_min_hours..=self.tz_offset_max_hours).contains(&hours)
    }
}
