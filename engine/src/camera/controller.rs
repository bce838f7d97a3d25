//! First-Person Camera Controller
//!
//! Facade that owns every piece of first-person state and advances it once
//! per frame in a fixed order:
//!
//! 1. pointer samples (delivered as events before the frame)
//! 2. edge-triggered toggles: cursor lock, then crouch
//! 3. movement intent
//! 4. velocity/position integration and floor collision
//! 5. head-bob
//!
//! The renderer then reads [`FirstPersonCamera::eye_position`] and
//! [`FirstPersonCamera::view_matrix`].
//!
//! There is no global instance: the frame loop constructs one and passes it
//! to whatever needs it.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut camera = FirstPersonCamera::new(ControllerConfig::default());
//! camera.attach_pointer(width / 2.0, height / 2.0);
//!
//! // Pointer events
//! camera.handle_pointer_position(x, y);
//!
//! // Once per frame
//! let action = camera.update(&FrameInput::new(delta_time, keys).with_free_cam(free_cam));
//! let view = camera.view_matrix();
//! ```

use glam::{Mat4, Vec3};

use crate::config::ControllerConfig;
use crate::input::{CursorAction, CursorLockToggle, FrameInput, InputEdgeMemory};
use crate::player::{
    CrouchStateMachine, HeadBobGenerator, MotionState, Stance, StepInput, VelocityIntegrator,
    resolve_wish_direction,
};

use super::orientation::{OrientationController, ViewBasis};

/// Distance in front of the origin the controller spawns at (+Z).
const SPAWN_DISTANCE: f32 = 3.0;

/// Repair a caller-supplied frame time.
///
/// Non-finite or negative values become 0. When `max` is set, spikes are
/// clamped to it.
pub fn sanitize_delta_time(delta_time: f32, max: Option<f32>) -> f32 {
    if !delta_time.is_finite() || delta_time < 0.0 {
        log::warn!("invalid delta time {delta_time}, treating frame as zero-length");
        return 0.0;
    }
    match max {
        Some(max) => delta_time.min(max),
        None => delta_time,
    }
}

/// First-person walk-around camera.
#[derive(Debug, Clone)]
pub struct FirstPersonCamera {
    config: ControllerConfig,
    orientation: OrientationController,
    cursor: CursorLockToggle,
    edges: InputEdgeMemory,
    crouch: CrouchStateMachine,
    body: VelocityIntegrator,
    bob: HeadBobGenerator,
    free_cam: bool,
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl FirstPersonCamera {
    /// Create a controller at the default spawn point, standing, pointer locked.
    pub fn new(config: ControllerConfig) -> Self {
        let spawn = Self::spawn_position(&config);
        Self {
            orientation: OrientationController::new(&config.look),
            cursor: CursorLockToggle::new(),
            edges: InputEdgeMemory::new(),
            crouch: CrouchStateMachine::new(&config.stance),
            body: VelocityIntegrator::new(&config, spawn),
            bob: HeadBobGenerator::new(&config.bob),
            free_cam: false,
            config,
        }
    }

    /// Standing eye height above the floor, a few meters back from the origin.
    pub fn spawn_position(config: &ControllerConfig) -> Vec3 {
        Vec3::new(
            0.0,
            config.physics.floor_y + config.stance.standing_height,
            SPAWN_DISTANCE,
        )
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Pointer
    // ------------------------------------------------------------------

    /// Seed the pointer reference position (typically the window centre).
    pub fn attach_pointer(&mut self, x: f32, y: f32) {
        self.orientation.attach(x, y);
    }

    /// Feed a raw pointer position.
    ///
    /// Ignored while the cursor is unlocked. Returns `true` if the sample
    /// rotated the view.
    pub fn handle_pointer_position(&mut self, x: f32, y: f32) -> bool {
        if !self.cursor.is_locked() {
            return false;
        }
        self.orientation.handle_pointer_position(x, y)
    }

    /// Window focus returned. Re-captures a locked pointer.
    pub fn handle_focus_gained(&mut self) -> CursorAction {
        let action = self.cursor.handle_focus_gained();
        if action == CursorAction::Acquire {
            self.orientation.discard_next_sample();
        }
        action
    }

    /// Window focus lost. The lock preference is kept.
    ///
    /// Key releases are not delivered while unfocused, so the window layer
    /// releases every key and the edge memory forgets the last held state.
    pub fn handle_focus_lost(&mut self) {
        self.cursor.handle_focus_lost();
        self.edges.reset();
    }

    // ------------------------------------------------------------------
    // Frame
    // ------------------------------------------------------------------

    /// Advance one frame.
    ///
    /// Returns what the window layer must do with the pointer.
    pub fn update(&mut self, input: &FrameInput) -> CursorAction {
        let dt = sanitize_delta_time(input.delta_time, self.config.physics.max_delta_time);
        let keys = input.keys;
        let edges = self.edges.edges(&keys);

        let action = self.cursor.update(edges.cursor_lock_pressed);
        if action == CursorAction::Acquire {
            self.orientation.discard_next_sample();
        }

        if input.free_cam != self.free_cam {
            log::debug!("free-cam {}", if input.free_cam { "on" } else { "off" });
            self.free_cam = input.free_cam;
        }

        let eye_height = self.crouch.update(dt, edges.crouch_pressed, self.free_cam);

        let wish = resolve_wish_direction(&keys, self.free_cam, &self.orientation.view_basis());
        self.body.step(
            wish,
            dt,
            &StepInput {
                sprint: keys.sprint,
                sneaking: self.crouch.is_sneaking(),
                jump: keys.jump,
                free_cam: self.free_cam,
                eye_height,
            },
        );

        self.bob.update(self.body.horizontal_speed(), self.body.is_grounded(), dt);

        self.edges.end_frame(&keys);
        action
    }

    // ------------------------------------------------------------------
    // Outputs
    // ------------------------------------------------------------------

    /// Physical position plus head-bob: where the view is rendered from.
    pub fn eye_position(&self) -> Vec3 {
        self.body.position() + Vec3::Y * self.bob.offset()
    }

    /// Look-at transform from the eye along `front`.
    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.eye_position();
        Mat4::look_at_rh(eye, eye + self.orientation.front(), self.orientation.up())
    }

    pub fn view_basis(&self) -> ViewBasis {
        self.orientation.view_basis()
    }

    /// Physical position used for collision (no head-bob).
    pub fn position(&self) -> Vec3 {
        self.body.position()
    }

    pub fn velocity(&self) -> Vec3 {
        self.body.velocity()
    }

    pub fn motion(&self) -> &MotionState {
        self.body.state()
    }

    pub fn is_grounded(&self) -> bool {
        self.body.is_grounded()
    }

    pub fn is_cursor_locked(&self) -> bool {
        self.cursor.is_locked()
    }

    pub fn is_free_cam(&self) -> bool {
        self.free_cam
    }

    pub fn stance(&self) -> Stance {
        self.crouch.stance()
    }

    pub fn eye_height(&self) -> f32 {
        self.crouch.current_height()
    }

    pub fn head_bob_offset(&self) -> f32 {
        self.bob.offset()
    }

    pub fn orientation(&self) -> &OrientationController {
        &self.orientation
    }

    pub fn orientation_mut(&mut self) -> &mut OrientationController {
        &mut self.orientation
    }

    /// Cursor toggle, for applying the dirty lock state to the window.
    pub fn cursor_mut(&mut self) -> &mut CursorLockToggle {
        &mut self.cursor
    }

    /// Direct access to the body for teleports and tests.
    pub fn motion_mut(&mut self) -> &mut MotionState {
        self.body.state_mut()
    }

    /// Move the body without changing orientation; motion stops.
    pub fn teleport(&mut self, position: Vec3) {
        let state = self.body.state_mut();
        state.position = position;
        state.velocity = Vec3::ZERO;
        state.is_grounded = false;
        self.bob.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ControlKey, ControlKeys};

    const DT: f32 = 1.0 / 60.0;

    fn settle(camera: &mut FirstPersonCamera) {
        for _ in 0..5 {
            camera.update(&FrameInput::new(DT, ControlKeys::new()));
        }
    }

    #[test]
    fn test_spawn_defaults() {
        let camera = FirstPersonCamera::default();
        assert_eq!(camera.position(), Vec3::new(0.0, 0.5, 3.0));
        assert!(!camera.is_grounded());
        assert!(camera.is_cursor_locked());
        assert!(!camera.is_free_cam());
        assert_eq!(camera.stance(), Stance::Standing);
    }

    #[test]
    fn test_first_frame_lands_on_floor() {
        let mut camera = FirstPersonCamera::default();
        camera.update(&FrameInput::new(DT, ControlKeys::new()));
        assert!(camera.is_grounded());
        assert_eq!(camera.position().y, 0.5);
        assert_eq!(camera.velocity().y, 0.0);
    }

    #[test]
    fn test_forward_walks_down_negative_z() {
        let mut camera = FirstPersonCamera::default();
        settle(&mut camera);
        let keys = ControlKeys::new().with(ControlKey::Forward);
        for _ in 0..30 {
            camera.update(&FrameInput::new(DT, keys));
        }
        assert!(camera.position().z < 3.0);
        assert!(camera.position().x.abs() < 1e-4);
    }

    #[test]
    fn test_view_matrix_uses_eye_position() {
        let camera = FirstPersonCamera::default();
        let eye = camera.eye_position();
        let expected = Mat4::look_at_rh(eye, eye + Vec3::NEG_Z, Vec3::Y);
        let actual = camera.view_matrix();
        assert!(actual.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn test_unlocked_pointer_ignored() {
        let mut camera = FirstPersonCamera::default();
        let keys = ControlKeys::new().with(ControlKey::CursorLock);
        assert_eq!(
            camera.update(&FrameInput::new(DT, keys)),
            CursorAction::Release
        );
        camera.handle_pointer_position(0.0, 0.0);
        assert!(!camera.handle_pointer_position(500.0, 0.0));
        assert_eq!(camera.orientation().yaw(), -90.0);
    }

    #[test]
    fn test_sanitize_delta_time() {
        assert_eq!(sanitize_delta_time(f32::NAN, None), 0.0);
        assert_eq!(sanitize_delta_time(f32::INFINITY, None), 0.0);
        assert_eq!(sanitize_delta_time(-0.5, None), 0.0);
        assert_eq!(sanitize_delta_time(0.5, None), 0.5);
        assert_eq!(sanitize_delta_time(0.5, Some(0.1)), 0.1);
    }

    #[test]
    fn test_nan_delta_time_keeps_state_finite() {
        let mut camera = FirstPersonCamera::default();
        settle(&mut camera);
        let keys = ControlKeys::new().with(ControlKey::Forward);
        camera.update(&FrameInput::new(f32::NAN, keys));
        assert!(camera.position().is_finite());
        assert!(camera.velocity().is_finite());
    }

    #[test]
    fn test_focus_loss_rearms_toggles() {
        let mut camera = FirstPersonCamera::default();
        let crouch = FrameInput::new(DT, ControlKeys::new().with(ControlKey::Crouch));
        camera.update(&crouch);
        assert_eq!(camera.stance(), Stance::Crouching);
        camera.update(&crouch);
        assert_eq!(camera.stance(), Stance::Crouching);

        // Key state is unknown after focus returns; a held key is a new press
        camera.handle_focus_lost();
        camera.update(&crouch);
        assert_eq!(camera.stance(), Stance::Standing);
    }

    #[test]
    fn test_negative_pitch_limit_does_not_panic() {
        let mut config = ControllerConfig::default();
        config.look.pitch_limit = -10.0;
        let mut camera = FirstPersonCamera::new(config);
        camera.orientation_mut().apply_pointer_delta(0.0, -100_000.0);
        camera.update(&FrameInput::new(DT, ControlKeys::new()));
        assert_eq!(camera.orientation().pitch(), crate::camera::PITCH_LIMIT);
    }

    #[test]
    fn test_teleport_stops_motion() {
        let mut camera = FirstPersonCamera::default();
        settle(&mut camera);
        camera.teleport(Vec3::new(5.0, 10.0, 5.0));
        assert_eq!(camera.velocity(), Vec3::ZERO);
        assert!(!camera.is_grounded());
        camera.update(&FrameInput::new(DT, ControlKeys::new()));
        assert!(camera.position().y < 10.0);
    }
}
