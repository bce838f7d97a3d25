//! Controller Configuration
//!
//! Groups the fixed constants supplied to the controller at construction.
//! `Default` returns the reference tuning; any subset can be overridden from
//! JSON because every section is `#[serde(default)]`.
//!
//! ```rust,ignore
//! use walkcam_engine::config::ControllerConfig;
//!
//! let config = ControllerConfig::load(Path::new("walkcam.json"))?;
//! let camera = FirstPersonCamera::new(config);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera::{DEFAULT_SENSITIVITY, PITCH_LIMIT};
use crate::player::{
    CROUCH_HEIGHT, GRAVITY, HEIGHT_SMOOTHING_RATE, JUMP_IMPULSE, SNEAK_SPEED, SPRINT_SPEED,
    STANDING_HEIGHT, WALK_SPEED,
};

/// Errors produced while loading, saving or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A value is outside the range the controller can work with.
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Mouse-look tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookConfig {
    /// Degrees of rotation per pixel of pointer travel.
    pub sensitivity: f32,
    /// Symmetric pitch clamp in degrees.
    pub pitch_limit: f32,
    /// Initial yaw in degrees (-90 looks down -Z).
    pub spawn_yaw: f32,
    /// Initial pitch in degrees.
    pub spawn_pitch: f32,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            pitch_limit: PITCH_LIMIT,
            spawn_yaw: -90.0,
            spawn_pitch: 0.0,
        }
    }
}

/// Horizontal movement tuning (meters, seconds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Grounded walking speed cap.
    pub walk_speed: f32,
    /// Grounded speed cap while sprint is held.
    pub sprint_speed: f32,
    /// Grounded speed cap while sneaking. Overrides sprint.
    pub sneak_speed: f32,
    /// Free-cam flying speed.
    pub free_cam_speed: f32,
    /// Free-cam flying speed while sprint is held.
    pub free_cam_sprint_speed: f32,
    /// Ground acceleration while standing (m/s^2).
    pub acceleration: f32,
    /// Ground acceleration while sneaking (m/s^2).
    pub sneak_acceleration: f32,
    /// Linear speed loss per second with no input held (m/s^2).
    pub friction: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            sprint_speed: SPRINT_SPEED,
            sneak_speed: SNEAK_SPEED,
            free_cam_speed: WALK_SPEED,
            free_cam_sprint_speed: 12.0,
            acceleration: 40.0,
            sneak_acceleration: 20.0,
            friction: 20.0,
        }
    }
}

/// Vertical physics and the floor plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravity acceleration on the y axis. Negative pulls down.
    pub gravity: f32,
    /// Upward velocity set by a jump (m/s).
    pub jump_impulse: f32,
    /// Height of the infinite floor plane.
    pub floor_y: f32,
    /// Optional upper bound on a single frame's delta time. `None` leaves
    /// spike handling to the caller.
    pub max_delta_time: Option<f32>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            floor_y: -1.0,
            max_delta_time: None,
        }
    }
}

/// Eye heights for each stance and the smoothing between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StanceConfig {
    /// Eye height above the floor while standing.
    pub standing_height: f32,
    /// Eye height above the floor while crouching.
    pub crouching_height: f32,
    /// Exponential approach rate toward the target height (1/s).
    pub smoothing_rate: f32,
}

impl Default for StanceConfig {
    fn default() -> Self {
        Self {
            standing_height: STANDING_HEIGHT,
            crouching_height: CROUCH_HEIGHT,
            smoothing_rate: HEIGHT_SMOOTHING_RATE,
        }
    }
}

/// View head-bob tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BobConfig {
    /// Peak vertical offset in meters.
    pub amplitude: f32,
    /// Phase advance per meter travelled (radians).
    pub speed: f32,
    /// Horizontal speed below which the player counts as standing still.
    pub speed_threshold: f32,
    /// Exponential decay rate of the offset once motion stops (1/s).
    pub decay_rate: f32,
}

impl Default for BobConfig {
    fn default() -> Self {
        Self {
            amplitude: 0.05,
            speed: 2.5,
            speed_threshold: 0.1,
            decay_rate: 15.0,
        }
    }
}

/// Complete controller configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub look: LookConfig,
    pub movement: MovementConfig,
    pub physics: PhysicsConfig,
    pub stance: StanceConfig,
    pub bob: BobConfig,
}

impl ControllerConfig {
    /// Parse and validate a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Check every value for the ranges the controller relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("look.sensitivity", self.look.sensitivity),
            ("look.pitch_limit", self.look.pitch_limit),
            ("look.spawn_yaw", self.look.spawn_yaw),
            ("look.spawn_pitch", self.look.spawn_pitch),
            ("physics.gravity", self.physics.gravity),
            ("physics.jump_impulse", self.physics.jump_impulse),
            ("physics.floor_y", self.physics.floor_y),
            ("bob.amplitude", self.bob.amplitude),
            ("bob.speed_threshold", self.bob.speed_threshold),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be finite",
                });
            }
        }

        let positive = [
            ("movement.walk_speed", self.movement.walk_speed),
            ("movement.sprint_speed", self.movement.sprint_speed),
            ("movement.sneak_speed", self.movement.sneak_speed),
            ("movement.free_cam_speed", self.movement.free_cam_speed),
            (
                "movement.free_cam_sprint_speed",
                self.movement.free_cam_sprint_speed,
            ),
            ("movement.acceleration", self.movement.acceleration),
            ("movement.sneak_acceleration", self.movement.sneak_acceleration),
            ("movement.friction", self.movement.friction),
            ("stance.standing_height", self.stance.standing_height),
            ("stance.crouching_height", self.stance.crouching_height),
            ("stance.smoothing_rate", self.stance.smoothing_rate),
            ("bob.speed", self.bob.speed),
            ("bob.decay_rate", self.bob.decay_rate),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                });
            }
        }

        if self.look.pitch_limit <= 0.0 || self.look.pitch_limit >= 90.0 {
            return Err(ConfigError::Invalid {
                field: "look.pitch_limit",
                reason: "must be strictly between 0 and 90 degrees",
            });
        }
        if self.physics.gravity >= 0.0 {
            return Err(ConfigError::Invalid {
                field: "physics.gravity",
                reason: "must be negative (pulls toward the floor)",
            });
        }
        if self.stance.crouching_height > self.stance.standing_height {
            return Err(ConfigError::Invalid {
                field: "stance.crouching_height",
                reason: "must not exceed stance.standing_height",
            });
        }
        if let Some(max_dt) = self.physics.max_delta_time {
            if !(max_dt.is_finite() && max_dt > 0.0) {
                return Err(ConfigError::Invalid {
                    field: "physics.max_delta_time",
                    reason: "must be a positive finite number when set",
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ControllerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_defaults_use_module_constants() {
        let config = ControllerConfig::default();
        assert_eq!(config.look.sensitivity, DEFAULT_SENSITIVITY);
        assert_eq!(config.look.pitch_limit, PITCH_LIMIT);
        assert_eq!(config.movement.walk_speed, WALK_SPEED);
        assert_eq!(config.movement.sprint_speed, SPRINT_SPEED);
        assert_eq!(config.movement.sneak_speed, SNEAK_SPEED);
        assert_eq!(config.physics.gravity, GRAVITY);
        assert_eq!(config.physics.jump_impulse, JUMP_IMPULSE);
        assert_eq!(config.stance.standing_height, STANDING_HEIGHT);
        assert_eq!(config.stance.crouching_height, CROUCH_HEIGHT);
        assert_eq!(config.stance.smoothing_rate, HEIGHT_SMOOTHING_RATE);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config =
            ControllerConfig::from_json_str(r#"{ "physics": { "jump_impulse": 7.5 } }"#).unwrap();
        assert_eq!(config.physics.jump_impulse, 7.5);
        assert_eq!(config.physics.gravity, -9.81);
        assert_eq!(config.movement, MovementConfig::default());
    }

    #[test]
    fn test_positive_gravity_rejected() {
        let mut config = ControllerConfig::default();
        config.physics.gravity = 9.81;
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "physics.gravity"),
            other => panic!("expected invalid gravity, got {other:?}"),
        }
    }

    #[test]
    fn test_crouch_above_standing_rejected() {
        let mut config = ControllerConfig::default();
        config.stance.crouching_height = 2.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_pitch_limit_range() {
        let mut config = ControllerConfig::default();
        config.look.pitch_limit = 90.0;
        assert!(config.validate().is_err());
        config.look.pitch_limit = 45.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nan_speed_rejected() {
        let mut config = ControllerConfig::default();
        config.movement.walk_speed = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = ControllerConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
