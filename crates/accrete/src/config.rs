//! Generation settings, loadable from RON.

use protodisk::OrderingPolicy;
use protodisk::disk::constants::DEFAULT_MAX_ACCRETION_ITERATIONS;
use planetary::DEFAULT_MAX_SURFACE_TEMP_ITERATIONS;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Range the stellar mass ratio is drawn from when none is fixed
pub const DEFAULT_STELLAR_MASS_RANGE: (f64, f64) = (0.6, 1.3);

/// Protoplanet injections allowed before the disk is declared stuck
pub const DEFAULT_MAX_CANDIDATES: usize = 1_000_000;

/// Knobs for a single generation run.
///
/// Every field has a default, so a RON document only needs the fields it
/// overrides:
///
/// ```ron
/// (
///     stellar_mass: Some(1.0),
///     ordering: keepInPlace,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Fixed stellar mass ratio (M☉). `None` draws from `stellar_mass_range`.
    pub stellar_mass: Option<f64>,
    pub stellar_mass_range: (f64, f64),
    pub max_candidates: usize,
    pub max_accretion_iterations: usize,
    pub max_surface_temp_iterations: usize,
    pub ordering: OrderingPolicy,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            stellar_mass: None,
            stellar_mass_range: DEFAULT_STELLAR_MASS_RANGE,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            max_accretion_iterations: DEFAULT_MAX_ACCRETION_ITERATIONS,
            max_surface_temp_iterations: DEFAULT_MAX_SURFACE_TEMP_ITERATIONS,
            ordering: OrderingPolicy::default(),
        }
    }
}

impl GenerationConfig {
    /// Default settings around a star of the given mass ratio.
    pub fn with_stellar_mass(mass: f64) -> Self {
        Self {
            stellar_mass: Some(mass),
            ..Self::default()
        }
    }

    pub fn from_ron(contents: &str) -> Result<Self, ConfigError> {
        let config = ron::from_str(contents).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()).map_err(ConfigError::Serialize)
    }
}
