//! Star field and rainbow cloud bands
//!
//! Both sets are rebuilt wholesale on resize. Between resizes the only
//! mutation is cloud drift.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use super::state::Viewport;
use crate::band_gate;
use crate::settings::Settings;

/// A twinkling star (screen space)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub phase: f32,
    /// Per-star twinkle speed multiplier
    pub speed: f32,
}

impl Star {
    /// Twinkle factor in [0.1, 1.0] at time `t`
    pub fn twinkle(&self, t: f64, base_speed: f32) -> f32 {
        let arg = t * base_speed as f64 * self.speed as f64 + self.phase as f64;
        0.55 + 0.45 * arg.sin() as f32
    }
}

/// A drifting gradient band (screen space)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub alpha: f32,
    /// Signed horizontal speed (units/s)
    pub drift: f32,
}

impl Cloud {
    /// Move by `drift * dt`, wrapping to the far side once fully off-screen
    pub fn advance(&mut self, dt: f32, width: f32) {
        self.x += self.drift * dt;
        if self.x < -self.w {
            self.x = width;
        }
        if self.x > width {
            self.x = -self.w;
        }
    }
}

/// Both particle layers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Environment {
    pub stars: Vec<Star>,
    pub clouds: Vec<Cloud>,
}

/// Fold a draw into [0, extent)
fn within(v: f32, extent: f32) -> f32 {
    if extent > 0.0 { v.rem_euclid(extent) } else { 0.0 }
}

impl Environment {
    /// Lay out fresh particles for the given viewport
    pub fn generate(
        viewport: Viewport,
        settings: &Settings,
        rng: &mut impl RandomSource,
    ) -> Self {
        let (w, h) = (viewport.width, viewport.height);

        let stars = (0..settings.star_count)
            .map(|_| Star {
                x: within(rng.unit() * w, w),
                y: within(rng.unit() * h, h),
                radius: rng.range(0.8, 2.6),
                phase: rng.range(0.0, TAU),
                speed: rng.range(0.6, 2.2),
            })
            .collect();

        let clouds = (0..settings.cloud_count)
            .map(|_| Cloud {
                x: within(rng.unit() * w, w),
                y: h * rng.range(0.18, 0.63),
                w: w * rng.range(0.35, 0.80),
                h: rng.range(40.0, 95.0),
                alpha: rng.range(0.25, 0.60),
                drift: rng.sign() * rng.range(12.0, 40.0),
            })
            .collect();

        Self { stars, clouds }
    }

    /// Star layer opacity for the given progress
    pub fn star_gate(height_t: f32, settings: &Settings) -> f32 {
        band_gate(height_t, settings.star_start_t, settings.star_full_t)
    }

    /// Cloud layer opacity for the given progress
    pub fn cloud_gate(height_t: f32, settings: &Settings) -> f32 {
        band_gate(height_t, settings.cloud_start_t, settings.cloud_full_t)
    }

    pub fn drift_clouds(&mut self, dt: f32, width: f32) {
        for cloud in &mut self.clouds {
            cloud.advance(dt, width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::seeded;
    use proptest::prelude::*;

    fn cloud(x: f32, drift: f32) -> Cloud {
        Cloud {
            x,
            y: 100.0,
            w: 200.0,
            h: 50.0,
            alpha: 0.5,
            drift,
        }
    }

    #[test]
    fn test_generate_counts() {
        let settings = Settings::default();
        let env = Environment::generate(Viewport::new(800.0, 600.0), &settings, &mut seeded(1));
        assert_eq!(env.stars.len(), settings.star_count);
        assert_eq!(env.clouds.len(), settings.cloud_count);
    }

    #[test]
    fn test_cloud_wraps_left_to_right() {
        let mut c = cloud(-195.0, -20.0);
        c.advance(0.5, 800.0);
        assert_eq!(c.x, 800.0);
    }

    #[test]
    fn test_cloud_wraps_right_to_left() {
        let mut c = cloud(795.0, 20.0);
        c.advance(0.5, 800.0);
        assert_eq!(c.x, -200.0);
    }

    #[test]
    fn test_cloud_partially_visible_does_not_wrap() {
        let mut c = cloud(-150.0, -20.0);
        c.advance(0.5, 800.0);
        assert_eq!(c.x, -160.0);
    }

    #[test]
    fn test_clouds_before_stars() {
        let settings = Settings::default();
        let t = 0.6;
        assert!(Environment::cloud_gate(t, &settings) > 0.0);
        assert_eq!(Environment::star_gate(t, &settings), 0.0);
        assert_eq!(Environment::star_gate(settings.star_full_t, &settings), 1.0);
        assert_eq!(Environment::cloud_gate(settings.cloud_full_t, &settings), 1.0);
    }

    #[test]
    fn test_twinkle_range() {
        let star = Star {
            x: 0.0,
            y: 0.0,
            radius: 1.0,
            phase: 0.3,
            speed: 1.2,
        };
        for i in 0..200 {
            let tw = star.twinkle(i as f64 * 0.1, 1.6);
            assert!((0.1 - 1e-5..=1.0 + 1e-5).contains(&tw));
        }
    }

    proptest! {
        #[test]
        fn prop_generated_within_bounds(w in 1.0f32..4000.0, h in 1.0f32..4000.0, seed in any::<u64>()) {
            let settings = Settings::default();
            let env = Environment::generate(Viewport::new(w, h), &settings, &mut seeded(seed));
            prop_assert_eq!(env.stars.len(), settings.star_count);
            prop_assert_eq!(env.clouds.len(), settings.cloud_count);
            for s in &env.stars {
                prop_assert!(s.x >= 0.0 && s.x < w);
                prop_assert!(s.y >= 0.0 && s.y < h);
            }
            for c in &env.clouds {
                prop_assert!(c.x >= 0.0 && c.x < w);
                prop_assert!(c.y >= 0.0 && c.y < h);
            }
        }
    }
}
