//! Vertical follow camera
//!
//! `camera.y` is the world Y shown at the top edge of the screen, so
//! `screen_y = world_y - camera.y`. The camera only ever eases toward its
//! target; direct assignment happens on reset alone.

use serde::{Deserialize, Serialize};

use crate::lerp;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Camera {
    pub y: f32,
}

impl Camera {
    pub fn reset(&mut self) {
        self.y = 0.0;
    }

    /// Camera Y that puts `body_y` on the follow line
    pub fn target_for(body_y: f32, screen_height: f32, settings: &Settings) -> f32 {
        body_y - screen_height * settings.camera_follow_ratio
    }

    /// Ease toward the follow target.
    ///
    /// A smaller camera Y means looking further up, which uses the faster
    /// `camera_ease_up`; drifting back down uses `camera_ease_down` so small
    /// bounces don't shake the view.
    pub fn update(&mut self, body_y: f32, screen_height: f32, settings: &Settings) {
        let target = Self::target_for(body_y, screen_height, settings);
        let ease = if target < self.y {
            settings.camera_ease_up
        } else {
            settings.camera_ease_down
        };
        self.y = lerp(self.y, target, ease);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_uses_fast_ease_going_up() {
        let settings = Settings::default();
        let mut cam = Camera::default();
        // Body well above the follow line (600 * 0.35 = 210)
        cam.update(-1000.0, 600.0, &settings);
        let target = -1210.0;
        assert!((cam.y - target * settings.camera_ease_up).abs() < 1e-3);
    }

    #[test]
    fn test_uses_slow_ease_going_down() {
        let settings = Settings::default();
        let mut cam = Camera { y: -1000.0 };
        cam.update(-80.0, 600.0, &settings);
        let target = -290.0;
        let expected = -1000.0 + (target + 1000.0) * settings.camera_ease_down;
        assert!((cam.y - expected).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_converges_without_overshoot(
            start in -5000.0f32..5000.0,
            body_y in -5000.0f32..0.0,
            height in 200.0f32..2000.0,
        ) {
            let settings = Settings::default();
            let mut cam = Camera { y: start };
            let target = Camera::target_for(body_y, height, &settings);
            let mut dist = (target - cam.y).abs();
            for _ in 0..2000 {
                let before = cam.y;
                cam.update(body_y, height, &settings);
                let new_dist = (target - cam.y).abs();
                prop_assert!(new_dist <= dist + 1e-3);
                // Never crosses the target
                prop_assert!((target - before) * (target - cam.y) >= -1e-3);
                dist = new_dist;
            }
            prop_assert!(dist < 1.0);
        }
    }
}
