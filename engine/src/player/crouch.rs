//! Player Crouch System
//!
//! Two-stance toggle with smoothed eye height.
//!
//! # Stances
//!
//! - Standing: 1.5m eye height (normal movement speed)
//! - Crouching: 0.9m eye height (sneak speed and acceleration)
//!
//! # Height Transitions
//!
//! The discrete stance flips instantly on a key press. The eye height never
//! jumps: every frame it approaches the stance height exponentially, whether
//! or not a toggle happened that frame.
//!
//! # Usage
//!
//! ```rust,ignore
//! use walkcam_engine::player::CrouchStateMachine;
//!
//! let mut crouch = CrouchStateMachine::new(&StanceConfig::default());
//!
//! // Each frame, with the crouch key's rising edge:
//! let eye_height = crouch.update(delta_time, edges.crouch_pressed, free_cam);
//! ```

use crate::config::StanceConfig;

/// Standing eye height in meters
pub const STANDING_HEIGHT: f32 = 1.5;

/// Crouching eye height in meters
pub const CROUCH_HEIGHT: f32 = 0.9;

/// Exponential approach rate toward the stance height (1/s)
pub const HEIGHT_SMOOTHING_RATE: f32 = 10.0;

/// Player stance states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stance {
    #[default]
    Standing,
    Crouching,
}

impl Stance {
    /// The other stance.
    pub fn toggled(self) -> Self {
        match self {
            Stance::Standing => Stance::Crouching,
            Stance::Crouching => Stance::Standing,
        }
    }
}

/// Move `current` toward `target` by the fraction `rate * dt` of the gap.
///
/// The fraction is capped at 1, so the result lands on `target` at worst and
/// never overshoots it.
pub fn smooth_toward(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let t = (rate * dt).clamp(0.0, 1.0);
    if t >= 1.0 {
        return target;
    }
    current + (target - current) * t
}

/// Edge-triggered stance toggle with smoothed eye height.
#[derive(Debug, Clone)]
pub struct CrouchStateMachine {
    stance: Stance,
    /// Eye height this frame (may differ from target during transitions)
    current_height: f32,
    standing_height: f32,
    crouching_height: f32,
    smoothing_rate: f32,
}

impl Default for CrouchStateMachine {
    fn default() -> Self {
        Self::new(&StanceConfig::default())
    }
}

impl CrouchStateMachine {
    /// Create a state machine standing at full height.
    pub fn new(config: &StanceConfig) -> Self {
        Self {
            stance: Stance::Standing,
            current_height: config.standing_height,
            standing_height: config.standing_height,
            crouching_height: config.crouching_height,
            smoothing_rate: config.smoothing_rate,
        }
    }

    pub fn stance(&self) -> Stance {
        self.stance
    }

    /// Sneaking is simply being in the crouched stance.
    pub fn is_sneaking(&self) -> bool {
        self.stance == Stance::Crouching
    }

    /// Current (smoothed) eye height in meters.
    pub fn current_height(&self) -> f32 {
        self.current_height
    }

    /// Eye height of the current stance.
    pub fn target_height(&self) -> f32 {
        match self.stance {
            Stance::Standing => self.standing_height,
            Stance::Crouching => self.crouching_height,
        }
    }

    /// Advance one frame.
    ///
    /// # Arguments
    /// * `dt` - Delta time in seconds
    /// * `toggle_pressed` - Crouch key went down this frame (rising edge)
    /// * `free_cam` - In free-cam the crouch key descends instead of toggling
    ///
    /// # Returns
    /// The current eye height in meters
    pub fn update(&mut self, dt: f32, toggle_pressed: bool, free_cam: bool) -> f32 {
        if toggle_pressed && !free_cam {
            self.stance = self.stance.toggled();
            log::debug!("stance toggled to {:?}", self.stance);
        }

        self.current_height = smooth_toward(
            self.current_height,
            self.target_height(),
            self.smoothing_rate,
            dt,
        );
        self.current_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_default_standing() {
        let crouch = CrouchStateMachine::default();
        assert_eq!(crouch.stance(), Stance::Standing);
        assert_eq!(crouch.current_height(), STANDING_HEIGHT);
        assert!(!crouch.is_sneaking());
        assert_eq!(crouch.target_height(), crouch.current_height());
    }

    #[test]
    fn test_press_toggles_to_crouch() {
        let mut crouch = CrouchStateMachine::default();
        crouch.update(DT, true, false);
        assert_eq!(crouch.stance(), Stance::Crouching);
        assert!(crouch.is_sneaking());
        assert_eq!(crouch.target_height(), CROUCH_HEIGHT);
    }

    #[test]
    fn test_height_never_jumps() {
        let mut crouch = CrouchStateMachine::default();
        let height = crouch.update(DT, true, false);
        assert!(height < STANDING_HEIGHT);
        assert!(height > CROUCH_HEIGHT);
    }

    #[test]
    fn test_height_monotonic_without_overshoot() {
        let mut crouch = CrouchStateMachine::default();
        crouch.update(DT, true, false);
        let mut previous = crouch.current_height();
        for _ in 0..300 {
            let height = crouch.update(DT, false, false);
            assert!(height <= previous);
            assert!(height >= CROUCH_HEIGHT);
            previous = height;
        }
        assert!((previous - CROUCH_HEIGHT).abs() < 1e-3);
    }

    #[test]
    fn test_huge_step_lands_exactly_on_target() {
        let mut crouch = CrouchStateMachine::default();
        let height = crouch.update(10.0, true, false);
        assert_eq!(height, CROUCH_HEIGHT);
    }

    #[test]
    fn test_no_toggle_in_free_cam() {
        let mut crouch = CrouchStateMachine::default();
        crouch.update(DT, true, true);
        assert_eq!(crouch.stance(), Stance::Standing);
    }

    #[test]
    fn test_smoothing_continues_in_free_cam() {
        let mut crouch = CrouchStateMachine::default();
        crouch.update(DT, true, false);
        let before = crouch.current_height();
        let after = crouch.update(DT, false, true);
        assert!(after < before);
    }

    #[test]
    fn test_toggle_back_to_standing() {
        let mut crouch = CrouchStateMachine::default();
        crouch.update(DT, true, false);
        for _ in 0..120 {
            crouch.update(DT, false, false);
        }
        crouch.update(DT, true, false);
        assert_eq!(crouch.stance(), Stance::Standing);
        assert!(crouch.current_height() < crouch.target_height());
    }

    #[test]
    fn test_smooth_toward_zero_dt_is_noop() {
        assert_eq!(smooth_toward(1.5, 0.9, 10.0, 0.0), 1.5);
    }
}
