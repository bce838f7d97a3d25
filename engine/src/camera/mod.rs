//! Camera Module
//!
//! First-person look and the per-frame controller facade.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod controller;
pub mod orientation;
pub mod projection;

pub use controller::{FirstPersonCamera, sanitize_delta_time};
pub use orientation::{DEFAULT_SENSITIVITY, OrientationController, PITCH_LIMIT, ViewBasis};
pub use projection::{aspect_ratio, default_perspective, perspective};
