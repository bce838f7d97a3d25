//! Config Module
//!
//! Centralized configuration for the first-person controller.
//! Every world constant the controller needs (speeds, gravity, eye heights,
//! head-bob tuning) lives here so a session can be re-tuned from a JSON file
//! without touching controller code.

pub mod controller_config;

pub use controller_config::{
    BobConfig, ConfigError, ControllerConfig, LookConfig, MovementConfig, PhysicsConfig,
    StanceConfig,
};
