//! Tap impulse: hit-testing and the randomized upward kick

use glam::Vec2;

use super::random::RandomSource;
use super::state::Body;
use crate::settings::Settings;

/// A sampled kick (angle in radians, 0 = +x, negative = up)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impulse {
    pub angle: f32,
    pub speed: f32,
}

impl Impulse {
    /// Draw angle and speed uniformly from the configured cone and range
    pub fn sample(rng: &mut impl RandomSource, settings: &Settings) -> Self {
        let (angle_min, angle_max) = settings.jump_angle_range();
        let angle = rng.range(angle_min, angle_max);
        let speed = rng.range(settings.jump_speed_min, settings.jump_speed_max);
        Self { angle, speed }
    }

    /// Add this kick to the body.
    ///
    /// Horizontal velocity accumulates (attenuated); any downward velocity is
    /// cancelled before the vertical part is added, so repeated taps mid-fall
    /// always push upward.
    pub fn apply(&self, body: &mut Body, horizontal_factor: f32) {
        body.vel.x += self.angle.cos() * self.speed * horizontal_factor;
        body.vel.y = body.vel.y.min(0.0);
        body.vel.y += self.angle.sin() * self.speed;
        body.on_ground = false;
    }
}

/// Does a screen-space point hit the body's padded screen rectangle?
///
/// Degenerate bodies and non-finite points never hit.
pub fn hit_test(body: &Body, camera_y: f32, point: Vec2, padding: f32) -> bool {
    if body.is_degenerate() || !point.is_finite() {
        return false;
    }
    body.screen_rect(camera_y).expand(padding).contains(point)
}
