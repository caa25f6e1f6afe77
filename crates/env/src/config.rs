//! Construction-time constants for [`crate::ControlBotEnv`].
//!
//! Configurations are plain JSON objects. Missing fields fall back to the
//! defaults, so `{}` is a valid file:
//!
//! ```json
//! { "max_speed": 10.0, "field_size": 600.0, "track_width": 5.0 }
//! ```

use crate::error::EnvError;
use kinematics::{KinematicsError, Pose};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MAX_SPEED: f32 = 10.0;
pub const DEFAULT_FIELD_SIZE: f32 = 600.0;
pub const DEFAULT_TRACK_WIDTH: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvConfig {
    /// Largest absolute wheel speed an action may carry.
    pub max_speed: f32,
    /// Side length of the square field `[0, field_size] x [0, field_size]`.
    pub field_size: f32,
    /// Distance between the two drive wheels.
    pub track_width: f32,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            max_speed: DEFAULT_MAX_SPEED,
            field_size: DEFAULT_FIELD_SIZE,
            track_width: DEFAULT_TRACK_WIDTH,
        }
    }
}

impl EnvConfig {
    /// Check that every constant is usable.
    ///
    /// # Errors
    ///
    /// [`EnvError::InvalidConfig`] for a bad `max_speed` or `field_size`,
    /// [`EnvError::Domain`] for a track width the kinematic model would
    /// divide by zero on.
    pub fn validate(&self) -> Result<(), EnvError> {
        positive("max_speed", self.max_speed)?;
        positive("field_size", self.field_size)?;
        if !(self.track_width.is_finite() && self.track_width > 0.0) {
            return Err(KinematicsError::Domain {
                track_width: self.track_width,
            }
            .into());
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// [`EnvError::Config`] on malformed JSON or unknown keys, otherwise
    /// whatever [`EnvConfig::validate`] reports.
    pub fn from_json_str(json: &str) -> Result<Self, EnvError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration from disk.
    ///
    /// # Errors
    ///
    /// [`EnvError::Io`] if the file cannot be read, then as
    /// [`EnvConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EnvError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Pose every episode starts from: field center, heading along +x.
    #[must_use]
    pub fn start_pose(&self) -> Pose {
        let center = self.field_size / 2.0;
        Pose::new(center, center, 0.0)
    }

    /// True when the pose's position lies inside the closed field square.
    #[must_use]
    pub fn in_bounds(&self, pose: Pose) -> bool {
        let field = 0.0..=self.field_size;
        field.contains(&pose.x) && field.contains(&pose.y)
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), EnvError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EnvError::InvalidConfig { field, value })
    }
}
