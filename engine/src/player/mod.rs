//! Player Module
//!
//! Body simulation for the first-person controller.
//!
//! # Components
//!
//! - [`resolve_wish_direction`] - Held keys + look basis → raw wish direction
//! - [`VelocityIntegrator`] - Acceleration, friction, gravity, jump and floor collision
//! - [`CrouchStateMachine`] - Stance toggle with smoothed eye height
//! - [`HeadBobGenerator`] - Visual-only vertical offset while walking
//!
//! The constants here are the reference tuning; `ControllerConfig::default()`
//! is built from them.

pub mod crouch;
pub mod head_bob;
pub mod intent;
pub mod movement_controller;

pub use crouch::{
    CROUCH_HEIGHT, CrouchStateMachine, HEIGHT_SMOOTHING_RATE, STANDING_HEIGHT, Stance,
    smooth_toward,
};
pub use head_bob::HeadBobGenerator;
pub use intent::resolve_wish_direction;
pub use movement_controller::{
    GRAVITY, JUMP_IMPULSE, MotionState, SNEAK_SPEED, SPRINT_SPEED, StepInput, VelocityIntegrator,
    WALK_SPEED,
};
