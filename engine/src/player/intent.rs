//! Movement intent.
//!
//! Turns the held movement keys and the look basis into a raw wish direction.
//! The result is deliberately left unnormalized: a zero vector means "no
//! intent", and normalizing it here would turn it into NaN.

use glam::Vec3;

use crate::camera::ViewBasis;
use crate::input::ControlKeys;

/// Sum the basis vectors selected by the held keys.
///
/// - Ground mode moves along `flat_front` and its right vector, so the look
///   pitch never tilts or slows ground movement.
/// - Free-cam moves along the full `front`, and jump/crouch add `±up`.
///
/// Diagonal presses are summed here and normalized by the consumer, so a
/// diagonal is not faster than a straight line.
pub fn resolve_wish_direction(keys: &ControlKeys, free_cam: bool, basis: &ViewBasis) -> Vec3 {
    let forward = if free_cam {
        basis.front
    } else {
        basis.flat_front
    };
    let right = forward.cross(basis.up).normalize_or_zero();

    let mut wish = forward * keys.forward_axis() + right * keys.right_axis();
    if free_cam {
        wish += basis.up * keys.vertical_axis();
    }
    wish
}
