//! Star and cloud layers (screen space)
//!
//! Each layer returns how many primitives it emitted; a closed gate emits
//! nothing and touches no surface state.

use glam::Vec2;

use super::shapes::RAINBOW;
use super::{RenderSurface, Rgba};
use crate::settings::Settings;
use crate::sim::{Environment, Rect, Viewport};

/// Draw twinkling stars; returns the number drawn
pub fn draw_stars(
    surface: &mut impl RenderSurface,
    env: &Environment,
    viewport: Viewport,
    height_t: f32,
    time: f64,
    settings: &Settings,
) -> usize {
    let gate = Environment::star_gate(height_t, settings);
    if gate <= 0.0 || viewport.width <= 0.0 || viewport.height <= 0.0 {
        return 0;
    }

    surface.save();
    for star in &env.stars {
        let twinkle = star.twinkle(time, settings.star_twinkle_speed);
        surface.set_alpha(twinkle * gate);
        let center = Vec2::new(
            star.x.rem_euclid(viewport.width),
            star.y.rem_euclid(viewport.height),
        );
        surface.fill_circle(center, star.radius, Rgba::WHITE);
    }
    surface.restore();
    env.stars.len()
}

/// Draw rainbow cloud bands; returns the number drawn
pub fn draw_clouds(
    surface: &mut impl RenderSurface,
    env: &Environment,
    height_t: f32,
    settings: &Settings,
) -> usize {
    let gate = Environment::cloud_gate(height_t, settings);
    if gate <= 0.0 {
        return 0;
    }

    surface.save();
    for cloud in &env.clouds {
        surface.set_alpha(cloud.alpha * gate);
        let rect = Rect::new(cloud.x, cloud.y, cloud.w, cloud.h);
        surface.fill_rounded_rect(rect, cloud.h / 2.0, &RAINBOW);
    }
    surface.restore();
    env.clouds.len()
}
