//! Edge detection for level-only key input.
//!
//! The window layer reports whether a key is held, never when it went down.
//! Toggles need the rising edge, so the controller keeps the previous frame's
//! held state of every edge-triggered key in an [`InputEdgeMemory`].
//!
//! Per frame: read [`InputEdgeMemory::edges`] first, run the frame, then
//! commit the current state with [`InputEdgeMemory::end_frame`].

use super::keyboard::ControlKeys;

/// Rising edges detected for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyEdges {
    /// Crouch key went from released to held this frame
    pub crouch_pressed: bool,
    /// Cursor-lock key went from released to held this frame
    pub cursor_lock_pressed: bool,
}

/// Previous-frame held state of the edge-triggered keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputEdgeMemory {
    crouch_was_held: bool,
    cursor_lock_was_held: bool,
}

impl InputEdgeMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare this frame's keys against the previous frame.
    pub fn edges(&self, keys: &ControlKeys) -> KeyEdges {
        KeyEdges {
            crouch_pressed: keys.crouch && !self.crouch_was_held,
            cursor_lock_pressed: keys.cursor_lock && !self.cursor_lock_was_held,
        }
    }

    /// Remember this frame's keys for the next comparison.
    pub fn end_frame(&mut self, keys: &ControlKeys) {
        self.crouch_was_held = keys.crouch;
        self.cursor_lock_was_held = keys.cursor_lock;
    }

    /// Forget the previous state (next held frame counts as a press).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
