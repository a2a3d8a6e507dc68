// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Year the observation clock is recentred on.
pub const EPOCH_YEAR: f64 = 1973.0;
/// Sidereal days in one solar year.
pub const SIDEREAL_DAYS_PER_YEAR: f64 = 366.242;
/// Seconds in one sidereal day.
pub const SECONDS_PER_SIDEREAL_DAY: f64 = 86164.1;

/// Constants used by the rescaler. Missing keys in a YAML file keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RescaleConfig {
    pub epoch_year: f64,
    pub sidereal_days_per_year: f64,
    pub seconds_per_sidereal_day: f64,
}

impl Default for RescaleConfig {
    fn default() -> Self {
        Self {
            epoch_year: EPOCH_YEAR,
            sidereal_days_per_year: SIDEREAL_DAYS_PER_YEAR,
            seconds_per_sidereal_day: SECONDS_PER_SIDEREAL_DAY,
        }
    }
}

impl RescaleConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).context("invalid rescale config")
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))
    }
}
