//! Player Movement Controller
//!
//! Velocity integration for the first-person body: Quake-style ground
//! acceleration with a hard speed cap, linear friction, gravity, jumping and
//! collision against an infinite flat floor.
//!
//! # Physics Model
//!
//! - Walk speed: 4.0 m/s, sprint: 6.0 m/s, sneak: 2.0 m/s
//! - Acceleration: 40.0 m/s^2 (20.0 while sneaking)
//! - Friction: 20.0 m/s^2 of horizontal speed lost with no input
//! - Gravity: -9.81 m/s^2, jump impulse 5.0 m/s
//!
//! # Modes
//!
//! - **Ground**: horizontal velocity is only steered while grounded; in the
//!   air it is frozen. Gravity and floor collision run every frame.
//! - **Free-cam**: the body flies along the wish direction at a fixed speed.
//!   Velocity is zeroed every frame and gravity/collision are suspended.
//!
//! # Usage
//!
//! ```rust,ignore
//! use walkcam_engine::player::{StepInput, VelocityIntegrator};
//!
//! let mut body = VelocityIntegrator::new(&config, spawn_position);
//!
//! // Each frame:
//! body.step(wish_direction, delta_time, &StepInput {
//!     sprint: keys.sprint,
//!     sneaking: crouch.is_sneaking(),
//!     jump: keys.jump,
//!     free_cam,
//!     eye_height: crouch.current_height(),
//! });
//! ```

use glam::{Vec2, Vec3};

use crate::config::{ControllerConfig, MovementConfig, PhysicsConfig};

/// Walk speed in meters per second
pub const WALK_SPEED: f32 = 4.0;

/// Sprint speed in meters per second
pub const SPRINT_SPEED: f32 = 6.0;

/// Sneak speed in meters per second
pub const SNEAK_SPEED: f32 = 2.0;

/// Gravity acceleration on the y axis in meters per second squared
pub const GRAVITY: f32 = -9.81;

/// Jump velocity in meters per second
pub const JUMP_IMPULSE: f32 = 5.0;

/// Remaining horizontal speed below which friction stops the body outright.
const STOP_EPSILON: f32 = 1e-4;

/// Position, velocity and ground contact of the body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    /// World-space eye point
    pub position: Vec3,
    /// World-space velocity (m/s)
    pub velocity: Vec3,
    pub is_grounded: bool,
}

impl MotionState {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            is_grounded: false,
        }
    }

    /// Speed on the XZ plane.
    pub fn horizontal_speed(&self) -> f32 {
        Vec2::new(self.velocity.x, self.velocity.z).length()
    }
}

/// Per-frame modifiers for a movement step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepInput {
    /// Sprint key held
    pub sprint: bool,
    /// Crouched stance (overrides sprint on the ground)
    pub sneaking: bool,
    /// Jump key held
    pub jump: bool,
    pub free_cam: bool,
    /// Current eye height above the floor
    pub eye_height: f32,
}

/// Advances position and velocity one frame at a time.
#[derive(Debug, Clone)]
pub struct VelocityIntegrator {
    state: MotionState,
    movement: MovementConfig,
    physics: PhysicsConfig,
}

impl Default for VelocityIntegrator {
    fn default() -> Self {
        Self::new(&ControllerConfig::default(), Vec3::ZERO)
    }
}

impl VelocityIntegrator {
    /// Create an integrator at rest at `position`, not yet grounded.
    pub fn new(config: &ControllerConfig, position: Vec3) -> Self {
        Self {
            state: MotionState::new(position),
            movement: config.movement,
            physics: config.physics,
        }
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Mutable access for teleports and tests.
    pub fn state_mut(&mut self) -> &mut MotionState {
        &mut self.state
    }

    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.state.velocity
    }

    pub fn is_grounded(&self) -> bool {
        self.state.is_grounded
    }

    pub fn horizontal_speed(&self) -> f32 {
        self.state.horizontal_speed()
    }

    /// Eye height at which the body rests on the floor.
    pub fn floor_level(&self, eye_height: f32) -> f32 {
        self.physics.floor_y + eye_height
    }

    /// Speed cap for this frame.
    ///
    /// Sprint replaces the base speed first, then sneaking replaces whatever
    /// was chosen. On the ground, sneaking therefore cancels sprint.
    pub fn current_speed(&self, sprint: bool, sneaking: bool, free_cam: bool) -> f32 {
        let mut speed = if free_cam {
            self.movement.free_cam_speed
        } else {
            self.movement.walk_speed
        };
        if sprint {
            speed = if free_cam {
                self.movement.free_cam_sprint_speed
            } else {
                self.movement.sprint_speed
            };
        }
        if sneaking && !free_cam {
            speed = self.movement.sneak_speed;
        }
        speed
    }

    /// Advance one frame.
    ///
    /// `wish` is the raw wish direction; it is normalized here and a
    /// zero-length wish means no input.
    pub fn step(&mut self, wish: Vec3, dt: f32, input: &StepInput) {
        let speed = self.current_speed(input.sprint, input.sneaking, input.free_cam);
        if input.free_cam {
            self.fly(wish, speed, dt);
        } else {
            self.walk(wish, speed, dt, input);
        }
    }

    fn fly(&mut self, wish: Vec3, speed: f32, dt: f32) {
        // No momentum survives into free-cam
        self.state.velocity = Vec3::ZERO;
        self.state.is_grounded = false;

        let direction = wish.normalize_or_zero();
        self.state.position += direction * speed * dt;
    }

    fn walk(&mut self, wish: Vec3, speed: f32, dt: f32, input: &StepInput) {
        let was_grounded = self.state.is_grounded;
        let direction = Vec3::new(wish.x, 0.0, wish.z).normalize_or_zero();

        // Horizontal velocity is only steered on the ground
        if was_grounded {
            if direction != Vec3::ZERO {
                let acceleration = if input.sneaking {
                    self.movement.sneak_acceleration
                } else {
                    self.movement.acceleration
                };
                self.accelerate(direction, acceleration, speed, dt);
            } else {
                self.apply_friction(dt);
            }
        }

        if !was_grounded {
            self.state.velocity.y += self.physics.gravity * dt;
        }

        let jumped = input.jump && self.try_jump();

        self.state.position += self.state.velocity * dt;

        self.resolve_floor(input.eye_height, was_grounded && !jumped);
    }

    /// Launch upward if standing on the floor.
    ///
    /// Returns `false` (and changes nothing) while airborne.
    pub fn try_jump(&mut self) -> bool {
        if !self.state.is_grounded {
            return false;
        }
        self.state.velocity.y = self.physics.jump_impulse;
        self.state.is_grounded = false;
        true
    }

    fn accelerate(&mut self, direction: Vec3, acceleration: f32, max_speed: f32, dt: f32) {
        let velocity = &mut self.state.velocity;
        velocity.x += direction.x * acceleration * dt;
        velocity.z += direction.z * acceleration * dt;

        // Hard cap: rescale, keep direction
        let horizontal = Vec2::new(velocity.x, velocity.z);
        let magnitude = horizontal.length();
        if magnitude > max_speed {
            let scale = max_speed / magnitude;
            velocity.x *= scale;
            velocity.z *= scale;
        }
    }

    fn apply_friction(&mut self, dt: f32) {
        let speed = self.state.horizontal_speed();
        if speed <= 0.0 {
            return;
        }

        let new_speed = speed - self.movement.friction * dt;
        let velocity = &mut self.state.velocity;
        if new_speed <= STOP_EPSILON {
            velocity.x = 0.0;
            velocity.z = 0.0;
        } else {
            let factor = new_speed / speed;
            velocity.x *= factor;
            velocity.z *= factor;
        }
    }

    /// Snap to the floor plane when at or below it.
    ///
    /// A body that was already grounded and did not jump stays glued to the
    /// floor, so a shrinking eye height lowers it instead of detaching it.
    fn resolve_floor(&mut self, eye_height: f32, stick_to_ground: bool) {
        let floor_level = self.floor_level(eye_height);
        if self.state.position.y <= floor_level || stick_to_ground {
            if !self.state.is_grounded && !stick_to_ground {
                log::debug!(
                    "landed at y={floor_level:.3} with vy={:.3}",
                    self.state.velocity.y
                );
            }
            self.state.position.y = floor_level;
            self.state.velocity.y = 0.0;
            self.state.is_grounded = true;
        } else {
            self.state.is_grounded = false;
        }
    }
}
