//! View head-bob.
//!
//! A vertical offset derived from horizontal speed while grounded. It is
//! added to the rendered eye only; the physical position used for collision
//! never sees it.

use crate::config::BobConfig;

use super::crouch::smooth_toward;

#[derive(Debug, Clone)]
pub struct HeadBobGenerator {
    /// Phase accumulator (radians)
    timer: f32,
    /// Vertical offset applied to the eye this frame
    offset: f32,
    amplitude: f32,
    speed: f32,
    speed_threshold: f32,
    decay_rate: f32,
}

impl Default for HeadBobGenerator {
    fn default() -> Self {
        Self::new(&BobConfig::default())
    }
}

impl HeadBobGenerator {
    pub fn new(config: &BobConfig) -> Self {
        Self {
            timer: 0.0,
            offset: 0.0,
            amplitude: config.amplitude,
            speed: config.speed,
            speed_threshold: config.speed_threshold,
            decay_rate: config.decay_rate,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Advance the bob and return the new vertical offset.
    ///
    /// Walking on the ground advances the phase in proportion to distance
    /// covered. Standing still or being airborne resets the phase and lets the
    /// offset decay toward zero instead of cutting it.
    pub fn update(&mut self, horizontal_speed: f32, is_grounded: bool, dt: f32) -> f32 {
        if is_grounded && horizontal_speed > self.speed_threshold {
            self.timer += horizontal_speed * dt * self.speed;
            self.offset = self.timer.sin() * self.amplitude;
        } else {
            self.timer = 0.0;
            self.offset = smooth_toward(self.offset, 0.0, self.decay_rate, dt);
        }
        self.offset
    }

    pub fn reset(&mut self) {
        self.timer = 0.0;
        self.offset = 0.0;
    }
}
