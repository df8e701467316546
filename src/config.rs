// src/config.rs

//! Analysis configuration.
//!
//! Every field has a default from `constants.rs`; a TOML file passed with `--config`
//! only needs to name the values it overrides.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::{
    DEFAULT_ARRIVAL_CLAMP_DISTANCE, DEFAULT_DENSITY_BINS, DEFAULT_GOAL_MATCH_RADIUS,
    DEFAULT_HESITATION_SPEED, DEFAULT_HIT_ZONE_DISTANCE, DEFAULT_SMOOTHING_WINDOW,
};
use crate::error::ConfigError;

/// Thresholds and binning parameters used by the analysis stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// `dist_goal` at or below this is forced to exactly 0.
    pub arrival_clamp_distance: f64,
    /// `dist_goal` at or below this counts as inside the goal zone.
    pub hit_zone_distance: f64,
    /// Trailing window length for the smoothed speed series.
    pub smoothing_window: usize,
    /// Smoothed speed below this counts as hesitation.
    pub hesitation_speed: f64,
    /// Maximum x-z distance for attributing a hit to a declared goal.
    pub goal_match_radius: f64,
    /// Grid resolution (per axis) of the density heatmap.
    pub density_bins: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            arrival_clamp_distance: DEFAULT_ARRIVAL_CLAMP_DISTANCE,
            hit_zone_distance: DEFAULT_HIT_ZONE_DISTANCE,
            smoothing_window: DEFAULT_SMOOTHING_WINDOW,
            hesitation_speed: DEFAULT_HESITATION_SPEED,
            goal_match_radius: DEFAULT_GOAL_MATCH_RADIUS,
            density_bins: DEFAULT_DENSITY_BINS,
        }
    }
}

impl AnalysisConfig {
    /// Loads and validates a TOML config file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AnalysisConfig =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        log::debug!("Loaded analysis config from '{}': {:?}", path.display(), config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let distances = [
            ("arrival_clamp_distance", self.arrival_clamp_distance),
            ("hit_zone_distance", self.hit_zone_distance),
            ("hesitation_speed", self.hesitation_speed),
            ("goal_match_radius", self.goal_match_radius),
        ];
        for (name, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }
        if self.smoothing_window == 0 {
            return Err(ConfigError::Invalid(
                "smoothing_window must be at least 1".to_string(),
            ));
        }
        if self.density_bins == 0 {
            return Err(ConfigError::Invalid(
                "density_bins must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}


// src/config.rs
