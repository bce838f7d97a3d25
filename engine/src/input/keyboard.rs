//! Keyboard Input Module
//!
//! Tracks the held state of the fixed control-key set. The window layer only
//! reports press/release levels; edge detection lives in [`super::edge`].

/// The logical keys the controller reads each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKey {
    Forward,
    Back,
    Left,
    Right,
    /// Jump on the ground, ascend in free-cam
    Jump,
    /// Crouch toggle on the ground, descend in free-cam
    Crouch,
    Sprint,
    /// Toggles pointer capture
    CursorLock,
}

/// Held state of every control key for one frame.
///
/// This is a level snapshot: a key held across several frames reads `true`
/// in each of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub crouch: bool,
    pub sprint: bool,
    pub cursor_lock: bool,
}

impl ControlKeys {
    /// Create a key set with everything released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release of a control key.
    pub fn set(&mut self, key: ControlKey, held: bool) {
        match key {
            ControlKey::Forward => self.forward = held,
            ControlKey::Back => self.back = held,
            ControlKey::Left => self.left = held,
            ControlKey::Right => self.right = held,
            ControlKey::Jump => self.jump = held,
            ControlKey::Crouch => self.crouch = held,
            ControlKey::Sprint => self.sprint = held,
            ControlKey::CursorLock => self.cursor_lock = held,
        }
    }

    /// Builder-style variant of [`set`](Self::set), handy for tests.
    pub fn with(mut self, key: ControlKey) -> Self {
        self.set(key, true);
        self
    }

    /// Forward/backward axis (-1, 0, or 1).
    pub fn forward_axis(&self) -> f32 {
        (self.forward as i32 - self.back as i32) as f32
    }

    /// Left/right axis (-1, 0, or 1).
    pub fn right_axis(&self) -> f32 {
        (self.right as i32 - self.left as i32) as f32
    }

    /// Free-cam ascend/descend axis: jump up, crouch down (-1, 0, or 1).
    pub fn vertical_axis(&self) -> f32 {
        (self.jump as i32 - self.crouch as i32) as f32
    }

    /// Release every key, e.g. when the window loses focus.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
