//! Cursor Lock Module
//!
//! Edge-triggered lock/unlock of pointer capture. The controller starts with
//! the pointer locked (captured and hidden). Every press of the toggle key
//! flips the state; holding the key does nothing further.
//!
//! Re-acquiring the pointer returns [`CursorAction::Acquire`]. The caller must
//! then tell the orientation controller to treat its next pointer sample as a
//! reference only, otherwise the distance the pointer travelled while free
//! would be applied as one huge look delta.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut cursor = CursorLockToggle::new();
//!
//! // Each frame, with edges from `InputEdgeMemory`:
//! match cursor.update(edges.cursor_lock_pressed) {
//!     CursorAction::Acquire => orientation.discard_next_sample(),
//!     CursorAction::Release | CursorAction::None => {}
//! }
//! if cursor.is_dirty() {
//!     window.set_cursor_visible(cursor.should_cursor_be_visible());
//!     cursor.clear_dirty();
//! }
//! ```

/// Pointer capture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorLock {
    /// Pointer captured and hidden; motion drives the camera.
    #[default]
    Locked,
    /// Pointer free and visible.
    Unlocked,
}

/// What the window layer has to do after a toggle update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAction {
    /// No change
    None,
    /// Capture and hide the pointer. Next pointer sample is reference-only.
    Acquire,
    /// Release and show the pointer
    Release,
}

/// Debounced cursor lock toggle.
#[derive(Debug, Clone)]
pub struct CursorLockToggle {
    state: CursorLock,
    /// Whether the window currently has focus
    has_focus: bool,
    /// Tracks if state changed and needs to be applied to the window
    state_dirty: bool,
}

impl Default for CursorLockToggle {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorLockToggle {
    /// Create a toggle with the pointer locked.
    pub fn new() -> Self {
        Self {
            state: CursorLock::Locked,
            has_focus: true,
            state_dirty: true, // Need to apply initial state
        }
    }

    pub fn state(&self) -> CursorLock {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state == CursorLock::Locked
    }

    /// Check if cursor state needs to be applied to the window.
    pub fn is_dirty(&self) -> bool {
        self.state_dirty
    }

    /// Clear the dirty flag after applying state.
    pub fn clear_dirty(&mut self) {
        self.state_dirty = false;
    }

    /// Feed this frame's rising edge of the toggle key.
    pub fn update(&mut self, toggle_pressed: bool) -> CursorAction {
        if !toggle_pressed {
            return CursorAction::None;
        }
        self.toggle()
    }

    /// Flip the lock state.
    pub fn toggle(&mut self) -> CursorAction {
        match self.state {
            CursorLock::Locked => self.unlock(),
            CursorLock::Unlocked => self.lock(),
        }
    }

    /// Capture the pointer. Returns `Acquire` only on an actual transition.
    pub fn lock(&mut self) -> CursorAction {
        if self.state == CursorLock::Locked {
            return CursorAction::None;
        }
        self.state = CursorLock::Locked;
        self.state_dirty = true;
        log::debug!("cursor locked");
        CursorAction::Acquire
    }

    /// Release the pointer. Returns `Release` only on an actual transition.
    pub fn unlock(&mut self) -> CursorAction {
        if self.state == CursorLock::Unlocked {
            return CursorAction::None;
        }
        self.state = CursorLock::Unlocked;
        self.state_dirty = true;
        log::debug!("cursor unlocked");
        CursorAction::Release
    }

    /// Handle window focus gained.
    ///
    /// A locked pointer is re-captured, which counts as an acquire.
    pub fn handle_focus_gained(&mut self) -> CursorAction {
        self.has_focus = true;
        self.state_dirty = true;
        if self.is_locked() {
            CursorAction::Acquire
        } else {
            CursorAction::None
        }
    }

    /// Handle window focus lost. The lock preference is kept.
    pub fn handle_focus_lost(&mut self) {
        self.has_focus = false;
        self.state_dirty = true;
    }

    /// Pointer should be grabbed only while locked and focused.
    pub fn should_cursor_be_grabbed(&self) -> bool {
        self.is_locked() && self.has_focus
    }

    pub fn should_cursor_be_visible(&self) -> bool {
        !self.should_cursor_be_grabbed()
    }
}
