//! Walkcam Engine Library
//!
//! First-person camera and movement controller for a walk-around 3D scene:
//! mouse-look, keyboard movement intent, Quake-style ground acceleration and
//! friction, gravity with flat-floor collision, crouch-height smoothing, view
//! head-bob and a debounced cursor-lock toggle.
//!
//! Window creation, GPU work and UI are left to the caller; this library only
//! consumes per-frame input and produces an eye position and view matrix.
//!
//! # Modules
//!
//! - [`camera`] - Orientation, projection and the [`FirstPersonCamera`] facade
//! - [`player`] - Movement intent, velocity integration, crouch and head-bob
//! - [`input`] - Control keys, edge memory, cursor lock, winit bindings
//! - [`config`] - Controller constants with JSON load/save
//!
//! # Example
//!
//! ```rust,ignore
//! use walkcam_engine::{ControllerConfig, FirstPersonCamera, FrameInput, ControlKeys};
//! use winit::keyboard::KeyCode;
//!
//! let mut camera = FirstPersonCamera::new(ControllerConfig::default());
//!
//! let mut keys = ControlKeys::new();
//! keys.handle_key(KeyCode::KeyW, true);
//!
//! camera.update(&FrameInput::new(delta_time, keys));
//! let view = camera.view_matrix();
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod player;

pub use camera::{FirstPersonCamera, OrientationController, ViewBasis};
pub use config::{ConfigError, ControllerConfig};
pub use input::{ControlKey, ControlKeys, CursorAction, FrameInput};
pub use player::{CrouchStateMachine, HeadBobGenerator, Stance, VelocityIntegrator};
