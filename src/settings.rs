//! Simulation tuning
//!
//! Every physics, camera and environment constant lives here so hosts can
//! override them from JSON without recompiling.

use serde::{Deserialize, Serialize};

use crate::consts::{BODY_DEFAULT_SIZE, MAX_DT};
use crate::error::SimError;

/// Tuning values for a simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Integrator ===
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Horizontal velocity retained per 60 Hz frame
    pub air_drag: f32,
    /// Largest dt integrated in a single tick (seconds)
    pub max_dt: f32,

    // === Collision ===
    /// Fraction of vertical speed kept (sign-flipped) on a hard floor hit
    pub bounce: f32,
    /// Vertical speed above which a floor contact bounces instead of settling
    pub bounce_threshold: f32,
    /// Horizontal velocity multiplier applied while settled on the floor
    pub floor_friction: f32,
    /// Horizontal velocity multiplier on wall contact (negative reflects)
    pub wall_restitution: f32,

    // === Impulse ===
    pub jump_speed_min: f32,
    pub jump_speed_max: f32,
    /// Launch cone in degrees (0° is +x, negative is up)
    pub jump_angle_min_deg: f32,
    pub jump_angle_max_deg: f32,
    /// Attenuation of the horizontal part of an impulse
    pub jump_horizontal_factor: f32,
    /// Extra hit-test margin around the body (screen units)
    pub hit_padding: f32,

    // === Body ===
    pub body_width: f32,
    pub body_height: f32,

    // === Camera ===
    /// Screen line (fraction of height from the top) the camera keeps the body on
    pub camera_follow_ratio: f32,
    /// Blend per tick when the camera moves up
    pub camera_ease_up: f32,
    /// Blend per tick when the camera moves back down
    pub camera_ease_down: f32,

    // === Height ===
    /// Altitude for full progress, as a multiple of viewport height
    pub height_scale: f32,

    // === Environment ===
    pub star_count: usize,
    pub star_twinkle_speed: f32,
    pub star_start_t: f32,
    pub star_full_t: f32,
    pub cloud_count: usize,
    pub cloud_start_t: f32,
    pub cloud_full_t: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: 1800.0,
            air_drag: 0.995,
            max_dt: MAX_DT,

            bounce: 0.35,
            bounce_threshold: 250.0,
            floor_friction: 0.85,
            wall_restitution: -0.5,

            jump_speed_min: 850.0,
            jump_speed_max: 1250.0,
            jump_angle_min_deg: -110.0,
            jump_angle_max_deg: -70.0,
            jump_horizontal_factor: 0.45,
            hit_padding: 10.0,

            body_width: BODY_DEFAULT_SIZE,
            body_height: BODY_DEFAULT_SIZE,

            camera_follow_ratio: 0.35,
            camera_ease_up: 0.14,
            camera_ease_down: 0.02,

            height_scale: 0.75,

            star_count: 90,
            star_twinkle_speed: 1.6,
            star_start_t: 0.72,
            star_full_t: 0.95,
            cloud_count: 8,
            cloud_start_t: 0.45,
            cloud_full_t: 0.70,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Launch cone in radians
    pub fn jump_angle_range(&self) -> (f32, f32) {
        (
            self.jump_angle_min_deg.to_radians(),
            self.jump_angle_max_deg.to_radians(),
        )
    }

    /// Check every value is usable by the integrator and camera
    pub fn validate(&self) -> Result<(), SimError> {
        fn check(ok: bool, name: &'static str, reason: &'static str) -> Result<(), SimError> {
            if ok {
                Ok(())
            } else {
                log::warn!("Rejected setting {}: {}", name, reason);
                Err(SimError::InvalidSetting { name, reason })
            }
        }

        let finite = |v: f32| v.is_finite();

        check(finite(self.gravity), "gravity", "must be finite")?;
        check(
            self.max_dt > 0.0 && self.max_dt <= MAX_DT,
            "max_dt",
            "must be in (0, 1/30]",
        )?;
        check(
            self.air_drag > 0.0 && self.air_drag <= 1.0,
            "air_drag",
            "must be in (0, 1]",
        )?;
        check(
            (0.0..1.0).contains(&self.bounce),
            "bounce",
            "must be in [0, 1)",
        )?;
        check(
            finite(self.bounce_threshold) && self.bounce_threshold >= 0.0,
            "bounce_threshold",
            "must be finite and non-negative",
        )?;
        check(
            (0.0..=1.0).contains(&self.floor_friction),
            "floor_friction",
            "must be in [0, 1]",
        )?;
        check(
            (-1.0..=0.0).contains(&self.wall_restitution),
            "wall_restitution",
            "must be in [-1, 0]",
        )?;
        check(
            finite(self.jump_speed_max)
                && self.jump_speed_min >= 0.0
                && self.jump_speed_min <= self.jump_speed_max,
            "jump_speed_min",
            "must be finite, non-negative and not above jump_speed_max",
        )?;
        check(
            finite(self.jump_angle_min_deg)
                && finite(self.jump_angle_max_deg)
                && self.jump_angle_min_deg <= self.jump_angle_max_deg,
            "jump_angle_min_deg",
            "must be finite and not exceed jump_angle_max_deg",
        )?;
        check(
            (0.0..1.0).contains(&self.jump_horizontal_factor),
            "jump_horizontal_factor",
            "must be in [0, 1)",
        )?;
        check(
            finite(self.hit_padding) && self.hit_padding >= 0.0,
            "hit_padding",
            "must be finite and non-negative",
        )?;
        check(
            finite(self.body_width)
                && finite(self.body_height)
                && self.body_width > 0.0
                && self.body_height > 0.0,
            "body_width",
            "body extents must be finite and positive",
        )?;
        check(
            (0.0..=1.0).contains(&self.camera_follow_ratio),
            "camera_follow_ratio",
            "must be in [0, 1]",
        )?;
        check(
            self.camera_ease_up > 0.0 && self.camera_ease_up <= 1.0,
            "camera_ease_up",
            "must be in (0, 1]",
        )?;
        check(
            self.camera_ease_down > 0.0 && self.camera_ease_down <= 1.0,
            "camera_ease_down",
            "must be in (0, 1]",
        )?;
        check(
            finite(self.height_scale) && self.height_scale > 0.0,
            "height_scale",
            "must be finite and positive",
        )?;
        Ok(())
    }
}
