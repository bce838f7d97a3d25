//! Orientation Controller Module
//!
//! Mouse-look for the first-person camera. Raw pointer positions are turned
//! into deltas, scaled by a fixed sensitivity and accumulated into yaw/pitch
//! (degrees). The look vectors are rebuilt after every update.
//!
//! Key features:
//! - First sample after construction or lock re-acquire is reference-only
//! - Device-space y grows downward, so the vertical delta is inverted
//! - Pitch clamped to ±89 degrees on every update (no view flip at the poles)
//! - `flat_front` keeps ground movement independent of look pitch

use glam::{Vec2, Vec3};

use crate::config::LookConfig;

/// Degrees of yaw/pitch per pixel of pointer travel.
pub const DEFAULT_SENSITIVITY: f32 = 0.1;

/// Symmetric pitch limit in degrees.
pub const PITCH_LIMIT: f32 = 89.0;

/// Below this squared length the projected front is treated as degenerate.
const FLAT_EPSILON: f32 = 1e-8;

/// A pitch limit must lie strictly inside (0, 90) degrees; anything else
/// falls back to [`PITCH_LIMIT`].
fn usable_pitch_limit(limit: f32) -> f32 {
    if limit.is_finite() && limit > 0.0 && limit < 90.0 {
        limit
    } else {
        log::warn!("pitch limit {limit} out of range, using {PITCH_LIMIT}");
        PITCH_LIMIT
    }
}

/// The three vectors movement and view are built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBasis {
    /// Full look direction (free-cam movement, view matrix)
    pub front: Vec3,
    /// Look direction projected onto the horizontal plane (ground movement)
    pub flat_front: Vec3,
    /// Fixed world up
    pub up: Vec3,
}

/// Converts pointer motion into yaw/pitch and derived look vectors.
///
/// ## Usage
/// ```rust,ignore
/// let mut orientation = OrientationController::new(&LookConfig::default());
/// orientation.attach(width / 2.0, height / 2.0);
///
/// // On every pointer event
/// orientation.handle_pointer_position(x, y);
///
/// let basis = orientation.view_basis();
/// ```
#[derive(Clone, Debug)]
pub struct OrientationController {
    /// Horizontal angle (degrees), accumulates without wrapping
    yaw: f32,
    /// Vertical angle (degrees), clamped to ±pitch_limit
    pitch: f32,
    sensitivity: f32,
    pitch_limit: f32,
    front: Vec3,
    flat_front: Vec3,
    up: Vec3,
    /// Next pointer sample only sets the reference position
    first_sample: bool,
    last_position: Vec2,
}

impl Default for OrientationController {
    fn default() -> Self {
        Self::new(&LookConfig::default())
    }
}

impl OrientationController {
    /// Create a controller facing the configured spawn yaw/pitch.
    ///
    /// An unusable pitch limit (non-finite, or outside (0, 90)) is replaced
    /// by [`PITCH_LIMIT`], as is a non-finite spawn pitch by level.
    pub fn new(look: &LookConfig) -> Self {
        let pitch_limit = usable_pitch_limit(look.pitch_limit);
        let spawn_pitch = if look.spawn_pitch.is_finite() {
            look.spawn_pitch
        } else {
            0.0
        };
        let mut controller = Self {
            yaw: look.spawn_yaw,
            pitch: 0.0,
            sensitivity: look.sensitivity,
            pitch_limit,
            front: Vec3::NEG_Z,
            flat_front: Vec3::NEG_Z,
            up: Vec3::Y,
            first_sample: true,
            last_position: Vec2::ZERO,
        };
        controller.pitch = spawn_pitch.clamp(-pitch_limit, pitch_limit);
        controller.update_vectors();
        controller
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    #[inline]
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    #[inline]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    #[inline]
    pub fn flat_front(&self) -> Vec3 {
        self.flat_front
    }

    #[inline]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// `(front, flat_front, up)` for movement and view.
    #[inline]
    pub fn view_basis(&self) -> ViewBasis {
        ViewBasis {
            front: self.front,
            flat_front: self.flat_front,
            up: self.up,
        }
    }

    /// Seed the reference pointer position (typically the window centre).
    ///
    /// The next sample is still discarded; this only matters if the window
    /// layer reports deltas against the seeded position.
    pub fn attach(&mut self, x: f32, y: f32) {
        self.last_position = Vec2::new(x, y);
    }

    /// Treat the next pointer sample as a reference instead of a movement.
    pub fn discard_next_sample(&mut self) {
        self.first_sample = true;
    }

    /// Feed a raw pointer position from the window layer.
    ///
    /// Returns `false` when the sample was only used as the new reference.
    pub fn handle_pointer_position(&mut self, x: f32, y: f32) -> bool {
        let position = Vec2::new(x, y);
        if self.first_sample {
            self.last_position = position;
            self.first_sample = false;
            return false;
        }
        let delta = position - self.last_position;
        self.last_position = position;
        self.apply_pointer_delta(delta.x, delta.y);
        true
    }

    /// Apply a device-space pointer delta in pixels.
    ///
    /// * `dx` - Positive = pointer moved right = look right (yaw increases)
    /// * `dy` - Positive = pointer moved down = look down (pitch decreases)
    pub fn apply_pointer_delta(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        // Device y grows downward, pitch grows upward
        self.pitch -= dy * self.sensitivity;
        self.pitch = self.pitch.clamp(-self.pitch_limit, self.pitch_limit);
        self.update_vectors();
    }

    /// Set yaw/pitch directly (degrees). Pitch is clamped.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-self.pitch_limit, self.pitch_limit);
        self.update_vectors();
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let direction = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = direction.normalize_or(self.front);

        // Straight up/down has no horizontal component: keep the last heading
        let flat = Vec3::new(self.front.x, 0.0, self.front.z);
        if flat.length_squared() > FLAT_EPSILON {
            self.flat_front = flat.normalize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_default_looks_down_negative_z() {
        let orientation = OrientationController::default();
        assert_eq!(orientation.yaw(), -90.0);
        assert_eq!(orientation.pitch(), 0.0);
        let front = orientation.front();
        assert!(front.x.abs() < EPSILON);
        assert!(front.y.abs() < EPSILON);
        assert!(approx_eq(front.z, -1.0));
        assert_eq!(orientation.up(), Vec3::Y);
    }

    #[test]
    fn test_first_sample_is_reference_only() {
        let mut orientation = OrientationController::default();
        assert!(!orientation.handle_pointer_position(900.0, 700.0));
        assert_eq!(orientation.yaw(), -90.0);
        assert_eq!(orientation.pitch(), 0.0);

        assert!(orientation.handle_pointer_position(910.0, 700.0));
        assert!(approx_eq(orientation.yaw(), -89.0));
    }

    #[test]
    fn test_vertical_delta_inverted() {
        let mut orientation = OrientationController::default();
        orientation.handle_pointer_position(0.0, 100.0);
        // Pointer moves up the screen (y decreases) -> look up
        orientation.handle_pointer_position(0.0, 50.0);
        assert!(approx_eq(orientation.pitch(), 5.0));
        assert!(orientation.front().y > 0.0);
    }

    #[test]
    fn test_sensitivity_scales_delta() {
        let mut orientation = OrientationController::default();
        orientation.apply_pointer_delta(100.0, 0.0);
        assert!(approx_eq(orientation.yaw(), -90.0 + 100.0 * DEFAULT_SENSITIVITY));
    }

    #[test]
    fn test_pitch_clamped_both_ways() {
        let mut orientation = OrientationController::default();
        orientation.apply_pointer_delta(0.0, -100_000.0);
        assert_eq!(orientation.pitch(), PITCH_LIMIT);
        orientation.apply_pointer_delta(0.0, 100_000.0);
        assert_eq!(orientation.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn test_flat_front_ignores_pitch() {
        let mut orientation = OrientationController::default();
        orientation.set_orientation(30.0, 80.0);
        let flat = orientation.flat_front();
        assert_eq!(flat.y, 0.0);
        assert!(approx_eq(flat.length(), 1.0));
        assert!(approx_eq(flat.x, 30f32.to_radians().cos()));
        assert!(approx_eq(flat.z, 30f32.to_radians().sin()));
    }

    #[test]
    fn test_discard_next_sample_after_reacquire() {
        let mut orientation = OrientationController::default();
        orientation.handle_pointer_position(0.0, 0.0);
        orientation.handle_pointer_position(10.0, 0.0);
        let yaw = orientation.yaw();

        orientation.discard_next_sample();
        assert!(orientation.first_sample);
        assert!(!orientation.handle_pointer_position(5000.0, -3000.0));
        assert_eq!(orientation.yaw(), yaw);
    }

    #[test]
    fn test_yaw_accumulates_unbounded() {
        let mut orientation = OrientationController::default();
        for _ in 0..10 {
            orientation.apply_pointer_delta(3600.0, 0.0);
        }
        assert!(approx_eq(orientation.yaw(), -90.0 + 3600.0));
        assert!(approx_eq(orientation.front().length(), 1.0));
    }

    #[test]
    fn test_unusable_pitch_limit_falls_back() {
        for limit in [-10.0, 0.0, 90.0, 120.0, f32::NAN, f32::INFINITY] {
            let look = LookConfig {
                pitch_limit: limit,
                spawn_pitch: 30.0,
                ..LookConfig::default()
            };
            let mut orientation = OrientationController::new(&look);
            assert_eq!(orientation.pitch(), 30.0);
            orientation.apply_pointer_delta(0.0, -100_000.0);
            assert_eq!(orientation.pitch(), PITCH_LIMIT);
            orientation.set_orientation(0.0, -500.0);
            assert_eq!(orientation.pitch(), -PITCH_LIMIT);
        }
    }

    #[test]
    fn test_non_finite_spawn_pitch_is_level() {
        let look = LookConfig {
            spawn_pitch: f32::NAN,
            ..LookConfig::default()
        };
        let orientation = OrientationController::new(&look);
        assert_eq!(orientation.pitch(), 0.0);
        assert!(approx_eq(orientation.front().length(), 1.0));
    }
}
