//! Per-frame simulation step
//!
//! Order is fixed: clamp dt → integrate → walls → floor/friction → camera →
//! altitude/progress → cloud drift. Rendering happens afterwards from the
//! returned sample.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::collision::{FloorContact, resolve_floor, resolve_walls};
use super::environment::Environment;
use super::height::{Rgb, altitude, background_color, height_t};
use super::impulse::{Impulse, hit_test};
use super::integrate::{integrate, sanitize_dt};
use super::random::RandomSource;
use super::state::{Body, Rect, SimState};
use crate::settings::Settings;

/// Read-only results of one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSample {
    /// Sanitized dt actually integrated
    pub dt: f32,
    pub altitude: f32,
    pub height_t: f32,
    pub background: Rgb,
    /// Body rectangle in screen space (camera applied)
    pub body_rect: Rect,
    #[serde(skip)]
    pub floor: Option<FloorContact>,
}

/// Advance the simulation by one display frame
pub fn tick(state: &mut SimState, dt: f32) -> FrameSample {
    let settings = &state.settings;
    let dt = sanitize_dt(dt, settings.max_dt);

    integrate(&mut state.body, dt, settings);
    resolve_walls(&mut state.body, state.viewport.width, settings);
    let floor = resolve_floor(&mut state.body, settings);

    state
        .camera
        .update(state.body.pos.y, state.viewport.height, settings);

    let altitude = altitude(state.body.pos.y);
    let height_t = height_t(altitude, state.viewport.height, settings.height_scale);

    // Clouds only drift while their layer is visible
    if Environment::cloud_gate(height_t, settings) > 0.0 {
        state.environment.drift_clouds(dt, state.viewport.width);
    }

    FrameSample {
        dt,
        altitude,
        height_t,
        background: background_color(height_t),
        body_rect: state.body.screen_rect(state.camera.y),
        floor: Some(floor),
    }
}

/// Handle a tap at a screen position.
///
/// Returns the applied impulse, or `None` when the tap missed the body.
pub fn trigger(state: &mut SimState, point: Vec2) -> Option<Impulse> {
    let impulse = tap(
        &mut state.body,
        state.camera.y,
        &state.settings,
        &mut state.rng,
        point,
    )?;
    state.impulse_count += 1;
    log_impulse(state.impulse_count, &impulse);
    Some(impulse)
}

/// [`trigger`] drawing from a caller-supplied random source
pub fn trigger_with(
    state: &mut SimState,
    point: Vec2,
    rng: &mut impl RandomSource,
) -> Option<Impulse> {
    let impulse = tap(&mut state.body, state.camera.y, &state.settings, rng, point)?;
    state.impulse_count += 1;
    log_impulse(state.impulse_count, &impulse);
    Some(impulse)
}

fn tap(
    body: &mut Body,
    camera_y: f32,
    settings: &Settings,
    rng: &mut impl RandomSource,
    point: Vec2,
) -> Option<Impulse> {
    if !hit_test(body, camera_y, point, settings.hit_padding) {
        return None;
    }
    let impulse = Impulse::sample(rng, settings);
    impulse.apply(body, settings.jump_horizontal_factor);
    Some(impulse)
}

fn log_impulse(count: u32, impulse: &Impulse) {
    log::debug!(
        "Impulse #{}: angle {:.1}°, speed {:.0}",
        count,
        impulse.angle.to_degrees(),
        impulse.speed
    );
}

/// Snapshot of where the camera would like to be (debug overlays, tests)
pub fn camera_target(state: &SimState) -> f32 {
    Camera::target_for(state.body.pos.y, state.viewport.height, &state.settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FLOOR_Y;
    use crate::sim::random::ScriptedRandom;
    use crate::sim::state::Viewport;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_2;

    const DT: f32 = 1.0 / 60.0;

    fn new_state() -> SimState {
        SimState::new(Settings::default(), Viewport::new(800.0, 600.0), 12345)
    }

    #[test]
    fn test_resting_body_stays_put() {
        let mut state = new_state();
        for _ in 0..120 {
            let sample = tick(&mut state, DT);
            assert_eq!(sample.floor, Some(FloorContact::Settled));
        }
        assert!(state.body.on_ground);
        assert_eq!(state.body.bottom(), FLOOR_Y);
        assert_eq!(state.body.vel.y, 0.0);
        // Camera settles with the body on the follow line
        assert!((state.camera.y - camera_target(&state)).abs() < 1e-2);
        assert!((state.body.pos.y - state.camera.y - 600.0 * 0.35).abs() < 1e-2);
    }

    #[test]
    fn test_nan_dt_does_not_poison_state() {
        let mut state = new_state();
        let sample = tick(&mut state, f32::NAN);
        assert_eq!(sample.dt, 0.0);
        assert!(state.body.pos.is_finite());
        assert!(state.body.vel.is_finite());
        assert!(state.camera.y.is_finite());
    }

    #[test]
    fn test_large_dt_is_capped() {
        let mut state = new_state();
        let sample = tick(&mut state, 2.0);
        assert_eq!(sample.dt, state.settings.max_dt);
    }

    #[test]
    fn test_trigger_miss_is_ignored() {
        let mut state = new_state();
        assert!(trigger(&mut state, Vec2::new(10.0, 10.0)).is_none());
        assert_eq!(state.body.vel, Vec2::ZERO);
        assert_eq!(state.impulse_count, 0);
    }

    #[test]
    fn test_trigger_hit_launches() {
        let mut state = new_state();
        let center = state.body.screen_rect(state.camera.y).center();
        let impulse = trigger(&mut state, center).expect("tap on the body should hit");
        assert!(state.body.vel.y < 0.0);
        assert!(!state.body.on_ground);
        assert!((state.body.vel.y - impulse.angle.sin() * impulse.speed).abs() < 1e-3);
        assert_eq!(state.impulse_count, 1);
    }

    #[test]
    fn test_launch_and_land() {
        let mut state = new_state();
        // Midpoint of the cone is straight up; 0.375 of [850, 1250] is 1000
        let mut rng = ScriptedRandom::new([0.5, 0.375]);
        let center = state.body.screen_rect(state.camera.y).center();
        let impulse = trigger_with(&mut state, center, &mut rng).unwrap();
        assert!((impulse.angle + FRAC_PI_2).abs() < 1e-5);
        assert!((state.body.vel.y + 1000.0).abs() < 1e-2);
        assert!(!state.body.on_ground);

        let mut peak_altitude = 0.0f32;
        let mut first_contact = None;
        let mut pre_contact_vy = 0.0;
        for _ in 0..600 {
            pre_contact_vy = state.body.vel.y;
            let sample = tick(&mut state, DT);
            peak_altitude = peak_altitude.max(sample.altitude);
            assert!(state.body.bottom() <= FLOOR_Y + 1e-3);
            if let Some(contact @ (FloorContact::Bounced | FloorContact::Settled)) = sample.floor {
                first_contact = Some(contact);
                break;
            }
        }

        // v²/2g ≈ 278 units above the resting height
        assert!(peak_altitude > 300.0);
        let contact = first_contact.expect("body should come back down");
        let impact_vy = pre_contact_vy + state.settings.gravity * DT;
        if impact_vy.abs() > state.settings.bounce_threshold {
            assert_eq!(contact, FloorContact::Bounced);
            assert!(state.body.vel.y < 0.0);
            assert!((state.body.vel.y + impact_vy * state.settings.bounce).abs() < 1e-2);
        } else {
            assert_eq!(contact, FloorContact::Settled);
            assert!(state.body.on_ground);
        }
    }

    #[test]
    fn test_camera_follows_climb() {
        let mut state = new_state();
        state.body.pos.y = -3000.0;
        state.body.on_ground = false;
        for _ in 0..5 {
            // Hold altitude: cancel gravity each frame
            state.body.vel = Vec2::ZERO;
            state.settings.gravity = 0.0;
            tick(&mut state, DT);
        }
        assert!(state.camera.y < 0.0);
        assert!(state.camera.y > camera_target(&state));
    }

    #[test]
    fn test_height_t_reaches_space() {
        let mut state = new_state();
        state.settings.gravity = 0.0;
        state.body.pos.y = -450.0;
        state.body.on_ground = false;
        let sample = tick(&mut state, DT);
        assert_eq!(sample.height_t, 1.0);
        assert_eq!(sample.background, crate::sim::height::BG_SPACE);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = new_state();
        let mut b = new_state();
        for i in 0..240 {
            if i % 30 == 0 {
                let pa = a.body.screen_rect(a.camera.y).center();
                let pb = b.body.screen_rect(b.camera.y).center();
                trigger(&mut a, pa);
                trigger(&mut b, pb);
            }
            tick(&mut a, DT);
            tick(&mut b, DT);
        }
        assert_eq!(a.body.pos, b.body.pos);
        assert_eq!(a.body.vel, b.body.vel);
        assert_eq!(a.camera.y, b.camera.y);
    }

    #[test]
    fn test_clouds_drift_only_when_visible() {
        let mut state = new_state();
        state.settings.gravity = 0.0;
        let before = state.environment.clouds.clone();
        tick(&mut state, DT);
        assert_eq!(state.environment.clouds, before);

        // heightT 0.6 is inside the cloud band
        state.body.pos.y = -270.0;
        state.body.on_ground = false;
        tick(&mut state, DT);
        for (after, before) in state.environment.clouds.iter().zip(&before) {
            assert_ne!(after.x, before.x);
        }
    }

    proptest! {
        #[test]
        fn prop_floor_invariant_over_random_play(
            seed in any::<u64>(),
            taps in proptest::collection::vec(any::<bool>(), 1..300),
            dt in 0.001f32..0.05,
        ) {
            let mut state = SimState::new(Settings::default(), Viewport::new(640.0, 960.0), seed);
            for tap in taps {
                if tap {
                    let p = state.body.screen_rect(state.camera.y).center();
                    trigger(&mut state, p);
                }
                tick(&mut state, dt);
                prop_assert!(state.body.bottom() <= FLOOR_Y + 1e-3);
                let half_w = state.body.half_extents().x;
                prop_assert!(state.body.pos.x >= half_w - 1e-3);
                prop_assert!(state.body.pos.x <= state.viewport.width - half_w + 1e-3);
            }
        }
    }
}
