//! Simulation state and core types
//!
//! Everything a frame mutates lives in [`SimState`]; there are no statics.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::environment::Environment;
use super::random::seeded;
use crate::assets::SpriteStatus;
use crate::consts::*;
use crate::settings::Settings;

/// Logical (DPI-independent) canvas size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Non-finite or negative dimensions collapse to 0
    pub fn new(width: f32, height: f32) -> Self {
        let sane = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            width: sane(width),
            height: sane(height),
        }
    }

    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }
}

/// Axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center.x - size.x / 2.0, center.y - size.y / 2.0, size.x, size.y)
    }

    /// Grow by `pad` on every side
    pub fn expand(&self, pad: f32) -> Self {
        Self::new(self.x - pad, self.y - pad, self.w + pad * 2.0, self.h + pad * 2.0)
    }

    /// Inclusive containment test
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// The bunny: a single rigid body in world coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Center position (y grows downward, floor at y = 0)
    pub pos: Vec2,
    pub vel: Vec2,
    /// Full width and height
    pub size: Vec2,
    /// True only right after a low-energy floor contact
    pub on_ground: bool,
}

impl Body {
    pub fn new(size: Vec2) -> Self {
        Self {
            pos: Vec2::new(0.0, FLOOR_Y - size.y / 2.0),
            vel: Vec2::ZERO,
            size,
            on_ground: true,
        }
    }

    pub fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }

    /// World Y of the bottom edge
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Place at rest on the floor at horizontal position `x`
    pub fn rest_at(&mut self, x: f32) {
        self.pos = Vec2::new(x, FLOOR_Y - self.size.y / 2.0);
        self.vel = Vec2::ZERO;
        self.on_ground = true;
    }

    /// Screen rectangle for the given camera offset
    pub fn screen_rect(&self, camera_y: f32) -> Rect {
        Rect::from_center(Vec2::new(self.pos.x, self.pos.y - camera_y), self.size)
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
    }
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct SimState {
    pub settings: Settings,
    pub viewport: Viewport,
    pub body: Body,
    pub camera: Camera,
    pub environment: Environment,
    pub sprite: SpriteStatus,
    /// Successful impulses since the last reset
    pub impulse_count: u32,
    pub rng: Pcg32,
}

impl SimState {
    /// Create a simulation with the body resting mid-floor
    pub fn new(settings: Settings, viewport: Viewport, seed: u64) -> Self {
        let body = Body::new(Vec2::new(settings.body_width, settings.body_height));
        let mut state = Self {
            settings,
            viewport,
            body,
            camera: Camera::default(),
            environment: Environment::default(),
            sprite: SpriteStatus::Loading,
            impulse_count: 0,
            rng: seeded(seed),
        };
        state.regenerate_environment();
        state.reset();
        log::info!(
            "Simulation created ({}x{}, seed {})",
            viewport.width,
            viewport.height,
            seed
        );
        state
    }

    /// Put the body back on the floor and snap the camera home
    pub fn reset(&mut self) {
        self.body.rest_at(self.viewport.width * 0.5);
        self.camera.reset();
        self.impulse_count = 0;
    }

    /// Apply a new canvas size and rebuild the particle sets
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.regenerate_environment();
        log::info!("Resized to {}x{}", viewport.width, viewport.height);
    }

    /// Recreate stars and clouds for the current viewport
    pub fn regenerate_environment(&mut self) {
        self.environment = Environment::generate(self.viewport, &self.settings, &mut self.rng);
    }

    /// Resize the body to the viewport once the sprite's aspect is known
    pub fn fit_body_to_sprite(&mut self, aspect: f32) {
        let height = self.viewport.min_side() * BODY_VIEWPORT_FRACTION;
        if height > 0.0 && aspect.is_finite() && aspect > 0.0 {
            self.body.size = Vec2::new(height * aspect, height);
        }
        self.regenerate_environment();
        self.reset();
    }
}
