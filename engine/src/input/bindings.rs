//! Input Bindings Module
//!
//! Fixed mapping from physical winit keys to the controller's logical keys.
//!
//! Default bindings:
//! - W / S / A / D = Forward / Back / Left / Right
//! - Space = Jump (free-cam: ascend)
//! - C = Crouch toggle (free-cam: descend)
//! - Shift (either) = Sprint
//! - Q = Cursor lock toggle

use winit::keyboard::KeyCode;

use super::keyboard::{ControlKey, ControlKeys};

/// Physical key → logical key table.
pub const DEFAULT_BINDINGS: [(KeyCode, ControlKey); 9] = [
    (KeyCode::KeyW, ControlKey::Forward),
    (KeyCode::KeyS, ControlKey::Back),
    (KeyCode::KeyA, ControlKey::Left),
    (KeyCode::KeyD, ControlKey::Right),
    (KeyCode::Space, ControlKey::Jump),
    (KeyCode::KeyC, ControlKey::Crouch),
    (KeyCode::ShiftLeft, ControlKey::Sprint),
    (KeyCode::ShiftRight, ControlKey::Sprint),
    (KeyCode::KeyQ, ControlKey::CursorLock),
];

/// Look up the logical key bound to a physical key.
pub fn control_key_for(key: KeyCode) -> Option<ControlKey> {
    DEFAULT_BINDINGS
        .iter()
        .find(|(code, _)| *code == key)
        .map(|(_, control)| *control)
}

impl ControlKeys {
    /// Update held state from a winit key event.
    ///
    /// Returns `true` if the key is bound to a control key.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match control_key_for(key) {
            Some(control) => {
                self.set(control, pressed);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_bound() {
        assert_eq!(control_key_for(KeyCode::KeyW), Some(ControlKey::Forward));
        assert_eq!(control_key_for(KeyCode::KeyS), Some(ControlKey::Back));
        assert_eq!(control_key_for(KeyCode::KeyA), Some(ControlKey::Left));
        assert_eq!(control_key_for(KeyCode::KeyD), Some(ControlKey::Right));
    }

    #[test]
    fn test_both_shifts_sprint() {
        let mut keys = ControlKeys::new();
        assert!(keys.handle_key(KeyCode::ShiftRight, true));
        assert!(keys.sprint);
        keys.handle_key(KeyCode::ShiftRight, false);
        assert!(keys.handle_key(KeyCode::ShiftLeft, true));
        assert!(keys.sprint);
    }

    #[test]
    fn test_unbound_key_ignored() {
        let mut keys = ControlKeys::new();
        assert!(!keys.handle_key(KeyCode::Escape, true));
        assert_eq!(keys, ControlKeys::default());
    }

    #[test]
    fn test_cursor_toggle_on_q() {
        let mut keys = ControlKeys::new();
        keys.handle_key(KeyCode::KeyQ, true);
        assert!(keys.cursor_lock);
    }
}
