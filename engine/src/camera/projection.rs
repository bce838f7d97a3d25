//! Perspective projection for the walk-around view.

use glam::Mat4;

/// Vertical field of view in degrees
pub const DEFAULT_FOV_Y: f32 = 60.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 100.0;

/// Aspect ratio of a framebuffer. A minimized window reports a zero height;
/// fall back to 1.0 instead of dividing by zero.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    if height > 0 {
        width as f32 / height as f32
    } else {
        1.0
    }
}

/// OpenGL-convention perspective matrix for a framebuffer size.
pub fn perspective(fov_y_degrees: f32, width: u32, height: u32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh_gl(
        fov_y_degrees.to_radians(),
        aspect_ratio(width, height),
        near,
        far,
    )
}

/// Perspective with the default 60° / 0.1 / 100 setup.
pub fn default_perspective(width: u32, height: u32) -> Mat4 {
    perspective(DEFAULT_FOV_Y, width, height, DEFAULT_NEAR, DEFAULT_FAR)
}
