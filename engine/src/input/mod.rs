//! Input Module
//!
//! Per-frame input for the first-person controller: held control keys, the
//! previous-frame memory needed to turn them into edges, the cursor lock
//! toggle, and the fixed winit key bindings.
//!
//! # Example
//!
//! ```rust,ignore
//! use walkcam_engine::input::{ControlKeys, FrameInput};
//!
//! let mut keys = ControlKeys::new();
//! keys.handle_key(KeyCode::KeyW, true);
//!
//! let input = FrameInput { delta_time: 0.016, keys, free_cam: false };
//! camera.update(&input);
//! ```

pub mod bindings;
pub mod cursor_manager;
pub mod edge;
pub mod keyboard;

pub use bindings::{DEFAULT_BINDINGS, control_key_for};
pub use cursor_manager::{CursorAction, CursorLock, CursorLockToggle};
pub use edge::{InputEdgeMemory, KeyEdges};
pub use keyboard::{ControlKey, ControlKeys};

/// Everything the controller consumes once per frame, besides pointer samples
/// (which arrive as separate events).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since the previous frame.
    pub delta_time: f32,
    /// Held state of the control keys this frame.
    pub keys: ControlKeys,
    /// Free-cam mode switch, owned by the debug UI.
    pub free_cam: bool,
}

impl FrameInput {
    pub fn new(delta_time: f32, keys: ControlKeys) -> Self {
        Self {
            delta_time,
            keys,
            free_cam: false,
        }
    }

    pub fn with_free_cam(mut self, free_cam: bool) -> Self {
        self.free_cam = free_cam;
        self
    }
}
