//! Explicit Euler integrator for the body
//!
//! Velocity picks up gravity first, then position advances with the new
//! velocity. Horizontal drag is expressed per 60 Hz frame so the decay rate
//! does not depend on the display refresh.

use super::state::Body;
use crate::consts::DRAG_REFERENCE_FPS;
use crate::settings::Settings;

/// Turn a raw frame delta into something safe to integrate.
///
/// Non-finite and negative values become 0; large hitches are capped.
pub fn sanitize_dt(dt: f32, max_dt: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        return 0.0;
    }
    dt.min(max_dt)
}

/// Advance the body by `dt` seconds under gravity and air drag.
///
/// `dt` must already be sanitized.
pub fn integrate(body: &mut Body, dt: f32, settings: &Settings) {
    body.vel.y += settings.gravity * dt;
    body.pos += body.vel * dt;
    body.vel.x *= settings.air_drag.powf(dt * DRAG_REFERENCE_FPS);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn airborne_body() -> Body {
        let mut body = Body::new(Vec2::splat(100.0));
        body.pos = Vec2::new(0.0, -10_000.0);
        body.on_ground = false;
        body
    }

    #[test]
    fn test_sanitize_dt() {
        assert_eq!(sanitize_dt(f32::NAN, 1.0 / 30.0), 0.0);
        assert_eq!(sanitize_dt(f32::INFINITY, 1.0 / 30.0), 0.0);
        assert_eq!(sanitize_dt(-0.01, 1.0 / 30.0), 0.0);
        assert_eq!(sanitize_dt(0.5, 1.0 / 30.0), 1.0 / 30.0);
        assert_eq!(sanitize_dt(0.01, 1.0 / 30.0), 0.01);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let settings = Settings::default();
        let mut body = airborne_body();
        body.vel = Vec2::new(120.0, -300.0);
        let before = body.clone();
        integrate(&mut body, 0.0, &settings);
        assert_eq!(body.pos, before.pos);
        assert_eq!(body.vel, before.vel);
    }

    #[test]
    fn test_drag_is_frame_rate_independent() {
        let settings = Settings::default();
        let mut fast = airborne_body();
        let mut slow = airborne_body();
        fast.vel.x = 500.0;
        slow.vel.x = 500.0;

        for _ in 0..4 {
            integrate(&mut fast, 1.0 / 120.0, &settings);
        }
        for _ in 0..2 {
            integrate(&mut slow, 1.0 / 60.0, &settings);
        }
        assert!((fast.vel.x - slow.vel.x).abs() < 1e-3);
        assert!((slow.vel.x - 500.0 * 0.995f32.powi(2)).abs() < 1e-3);
    }

    #[test]
    fn test_gravity_pulls_down() {
        let settings = Settings::default();
        let mut body = airborne_body();
        integrate(&mut body, 0.01, &settings);
        assert!((body.vel.y - 18.0).abs() < 1e-4);
        assert!(body.pos.y > -10_000.0);
    }

    proptest! {
        #[test]
        fn prop_gravity_accumulates_monotonically(dt in 0.0001f32..=(1.0 / 30.0), steps in 1usize..200) {
            let settings = Settings::default();
            let mut body = airborne_body();
            let mut last_vy = body.vel.y;
            for _ in 0..steps {
                integrate(&mut body, dt, &settings);
                prop_assert!(body.vel.y > last_vy);
                last_vy = body.vel.y;
            }
        }
    }
}
