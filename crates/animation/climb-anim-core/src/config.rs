//! Driver configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Thresholds and switches for [`CharacterAnimDriver`](crate::driver::CharacterAnimDriver).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Speed at which locomotion switches from idle to walking.
    pub walk_speed: f32,
    /// Speed at which locomotion switches to jogging.
    pub jog_speed: f32,
    /// Graph layer whose current state is inspected each frame.
    pub layer: usize,
    /// Emit a debug log line for every trigger the driver fires.
    pub log_triggers: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            walk_speed: 1.5,
            jog_speed: 4.0,
            layer: 0,
            log_triggers: true,
        }
    }
}

impl DriverConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: DriverConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, v) in [("walk_speed", self.walk_speed), ("jog_speed", self.jog_speed)] {
            if !v.is_finite() || v < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{field} must be a finite, non-negative number (got {v})"
                )));
            }
        }
        if self.jog_speed < self.walk_speed {
            log::warn!(
                "jog_speed ({}) is below walk_speed ({}); the walk tier is unreachable",
                self.jog_speed,
                self.walk_speed
            );
        }
        Ok(())
    }
}
