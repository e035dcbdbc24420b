//! Simulation configuration
//!
//! Optional JSON, read from the canvas `data-config` attribute in the
//! browser or from a file passed on the command line natively. Every field
//! has a default, so `{}` is a valid config.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed. `None` lets the driver pick one (clock based)
    pub seed: Option<u64>,
    /// Particles per spawn batch; also the removals needed per level
    pub batch_size: u32,
    /// Opacity lost per frame while fading
    pub fade_step: f32,
    /// Smallest spawned radius
    pub min_radius: f32,
    /// Random radius range added on top of `min_radius`
    pub radius_spread: f32,
    /// Spawn band depth below the bottom edge
    pub spawn_depth: f32,
    /// Canvas height as a fraction of the window height
    pub height_fraction: f32,
    /// Show an FPS line under the HUD
    pub show_fps: bool,
    /// Frames the native headless demo runs
    pub headless_frames: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            batch_size: BATCH_SIZE,
            fade_step: FADE_STEP,
            min_radius: MIN_RADIUS,
            radius_spread: RADIUS_SPREAD,
            spawn_depth: SPAWN_DEPTH,
            height_fraction: HEIGHT_FRACTION,
            show_fps: false,
            headless_frames: HEADLESS_FRAMES,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse a config, falling back to defaults (with a warning) on any error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => {
                log::info!("Loaded config");
                config
            }
            Err(e) => {
                log::warn!("Ignoring config: {}", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::Invalid {
                field: "batch_size",
                reason: "must be at least 1",
            });
        }
        if self.fade_step.is_nan() || self.fade_step <= 0.0 || self.fade_step > 1.0 {
            return Err(ConfigError::Invalid {
                field: "fade_step",
                reason: "must be in (0, 1]",
            });
        }
        if self.min_radius.is_nan() || self.min_radius <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "min_radius",
                reason: "must be positive",
            });
        }
        if self.radius_spread.is_nan() || self.radius_spread < 0.0 {
            return Err(ConfigError::Invalid {
                field: "radius_spread",
                reason: "must not be negative",
            });
        }
        if self.spawn_depth.is_nan() || self.spawn_depth < 0.0 {
            return Err(ConfigError::Invalid {
                field: "spawn_depth",
                reason: "must not be negative",
            });
        }
        if self.height_fraction.is_nan()
            || self.height_fraction <= 0.0
            || self.height_fraction > 1.0
        {
            return Err(ConfigError::Invalid {
                field: "height_fraction",
                reason: "must be in (0, 1]",
            });
        }
        Ok(())
    }
}
