//! Walkcam - First-Person Controller Demo
//!
//! Opens a window and drives a `FirstPersonCamera` from real keyboard and
//! mouse input. Nothing is rendered; the eye position, view-projection matrix
//! and controller status are logged instead.
//!
//! Run with: `RUST_LOG=info cargo run --bin walkcam [config.json]`
//!
//! Controls:
//! - WASD: Move
//! - Shift: Sprint
//! - C: Toggle crouch (free-cam: descend)
//! - Space: Jump (free-cam: ascend)
//! - Q: Toggle mouse capture
//! - F1: Toggle free-cam
//! - ESC: Exit

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use glam::{Mat4, Vec2};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowAttributes, WindowId};

use walkcam_engine::camera::default_perspective;
use walkcam_engine::input::CursorLockToggle;
use walkcam_engine::{ControlKeys, ControllerConfig, CursorAction, FirstPersonCamera, FrameInput};

// ============================================================================
// APPLICATION
// ============================================================================

struct WalkcamApp {
    window: Option<Arc<Window>>,
    camera: FirstPersonCamera,

    // Input state
    keys: ControlKeys,
    free_cam: bool,
    /// Virtual pointer position built from raw device motion
    pointer: Vec2,

    /// What a renderer would upload this frame
    view_projection: Mat4,

    // Timing
    last_frame: Instant,
    last_status: Instant,
    frame_count: u64,
}

impl WalkcamApp {
    fn new(config: ControllerConfig) -> Self {
        Self {
            window: None,
            camera: FirstPersonCamera::new(config),
            keys: ControlKeys::new(),
            free_cam: false,
            pointer: Vec2::ZERO,
            view_projection: Mat4::IDENTITY,
            last_frame: Instant::now(),
            last_status: Instant::now(),
            frame_count: 0,
        }
    }

    fn initialize(&mut self, window: Arc<Window>) {
        let size = window.inner_size();
        self.pointer = Vec2::new(size.width as f32 / 2.0, size.height as f32 / 2.0);
        self.camera.attach_pointer(self.pointer.x, self.pointer.y);
        let cursor = self.camera.cursor_mut();
        apply_cursor_state(&window, cursor);
        cursor.clear_dirty();
        self.window = Some(window);
        self.last_frame = Instant::now();
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if self.keys.handle_key(key, pressed) {
            return;
        }
        if key == KeyCode::F1 && pressed {
            self.free_cam = !self.free_cam;
            log::info!("free-cam {}", if self.free_cam { "on" } else { "off" });
        }
    }

    fn frame(&mut self) {
        let now = Instant::now();
        let delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        let input = FrameInput::new(delta_time, self.keys).with_free_cam(self.free_cam);
        let action = self.camera.update(&input);

        let Some(window) = &self.window else {
            return;
        };

        let cursor = self.camera.cursor_mut();
        if action != CursorAction::None || cursor.is_dirty() {
            apply_cursor_state(window, cursor);
            cursor.clear_dirty();
        }

        let size = window.inner_size();
        self.view_projection =
            default_perspective(size.width, size.height) * self.camera.view_matrix();

        self.frame_count += 1;
        if now.duration_since(self.last_status).as_secs_f32() >= 1.0 {
            let eye = self.camera.eye_position();
            log::info!(
                "{} fps | eye ({:.2}, {:.2}, {:.2}) | speed {:.2} | {:?}{}{}",
                self.frame_count,
                eye.x,
                eye.y,
                eye.z,
                self.camera.motion().horizontal_speed(),
                self.camera.stance(),
                if self.camera.is_grounded() { "" } else { " | airborne" },
                if self.camera.is_free_cam() { " | free-cam" } else { "" },
            );
            log::trace!("view-projection {:?}", self.view_projection);
            self.frame_count = 0;
            self.last_status = now;
        }
    }
}

/// Capture or release the OS pointer to match the lock toggle.
///
/// Falls back to confining the pointer when the platform cannot lock it.
fn apply_cursor_state(window: &Window, cursor: &CursorLockToggle) {
    if cursor.should_cursor_be_grabbed() {
        if window.set_cursor_grab(CursorGrabMode::Locked).is_err() {
            if let Err(err) = window.set_cursor_grab(CursorGrabMode::Confined) {
                log::warn!("could not grab cursor: {err}");
            }
        }
    } else if let Err(err) = window.set_cursor_grab(CursorGrabMode::None) {
        log::warn!("could not release cursor: {err}");
    }
    window.set_cursor_visible(cursor.should_cursor_be_visible());
}

impl ApplicationHandler for WalkcamApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = WindowAttributes::default()
            .with_title("Walkcam - First-Person Controller")
            .with_inner_size(PhysicalSize::new(1280, 720));
        match event_loop.create_window(attrs) {
            Ok(window) => self.initialize(Arc::new(window)),
            Err(err) => {
                log::error!("failed to create window: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if key == KeyCode::Escape && event.state == ElementState::Pressed {
                        event_loop.exit();
                        return;
                    }
                    self.handle_key(key, event.state == ElementState::Pressed);
                }
            }
            WindowEvent::Focused(true) => {
                if self.camera.handle_focus_gained() == CursorAction::Acquire {
                    log::debug!("focus regained, re-capturing pointer");
                }
            }
            WindowEvent::Focused(false) => {
                // Held keys would otherwise stick while another window has focus
                self.keys.reset();
                self.camera.handle_focus_lost();
            }
            WindowEvent::RedrawRequested => self.frame(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn device_event(&mut self, _: &ActiveEventLoop, _: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.pointer += Vec2::new(delta.0 as f32, delta.1 as f32);
            self.camera.handle_pointer_position(self.pointer.x, self.pointer.y);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let config = ControllerConfig::load(Path::new(&path))?;
            log::info!("loaded controller config from {path}");
            config
        }
        None => ControllerConfig::default(),
    };

    println!("===========================================");
    println!("   Walkcam - First-Person Controller");
    println!("===========================================");
    println!();
    println!("Controls: WASD Move, Shift Sprint, Space Jump, C Crouch");
    println!("Q: Toggle Mouse Capture, F1: Toggle Free-Cam, ESC: Exit");
    println!();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = WalkcamApp::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
