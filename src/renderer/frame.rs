//! Frame composition
//!
//! Draw order: background → stars → clouds (screen space) → world content
//! under the camera translation → screen-fixed overlays. The world pass is
//! wrapped in save/restore so overlays never drift with the camera.

use glam::Vec2;

use super::environment::{draw_clouds, draw_stars};
use super::shapes::{FALLBACK_BODY, FLOOR_LINE, PANEL_BACKGROUND, PANEL_TEXT, READOUT_TEXT};
use super::{RenderSurface, Rgba};
use crate::consts::{FALLBACK_RADIUS_FRACTION, FLOOR_Y};
use crate::sim::{FrameSample, Rect, SimState};

/// What a frame put on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawStats {
    pub stars: usize,
    pub clouds: usize,
    pub sprite: bool,
    pub error_panel: bool,
}

/// Render one frame from the state and the tick's sample
pub fn draw_frame(
    surface: &mut impl RenderSurface,
    state: &SimState,
    sample: &FrameSample,
    time: f64,
) -> DrawStats {
    let viewport = state.viewport;
    let settings = &state.settings;
    let mut stats = DrawStats::default();

    surface.fill_rect(
        Rect::new(0.0, 0.0, viewport.width, viewport.height),
        Rgba::opaque(sample.background),
    );

    stats.stars = draw_stars(
        surface,
        &state.environment,
        viewport,
        sample.height_t,
        time,
        settings,
    );
    stats.clouds = draw_clouds(surface, &state.environment, sample.height_t, settings);

    // World space
    surface.save();
    surface.translate(0.0, -state.camera.y);

    surface.stroke_line(
        Vec2::new(0.0, FLOOR_Y),
        Vec2::new(viewport.width, FLOOR_Y),
        FLOOR_LINE,
    );

    let body = &state.body;
    if state.sprite.image_ready() {
        surface.draw_sprite(Rect::from_center(body.pos, body.size));
        stats.sprite = true;
    } else {
        let radius = body.size.x.min(body.size.y) * FALLBACK_RADIUS_FRACTION;
        surface.fill_circle(body.pos, radius, FALLBACK_BODY);
    }

    surface.restore();

    // Screen-fixed overlays
    draw_altitude_readout(surface, sample.altitude);
    let error = state.sprite.image_error();
    if !error.is_empty() {
        draw_error_panel(surface, error, viewport.width);
        stats.error_panel = true;
    }

    stats
}

fn draw_altitude_readout(surface: &mut impl RenderSurface, altitude: f32) {
    surface.fill_text(
        &format!("Altitude {:.0}", altitude),
        Vec2::new(12.0, 28.0),
        READOUT_TEXT,
    );
}

fn draw_error_panel(surface: &mut impl RenderSurface, message: &str, width: f32) {
    surface.save();
    surface.fill_rect(
        Rect::new(12.0, 52.0, (width - 24.0).clamp(0.0, 560.0), 120.0),
        PANEL_BACKGROUND,
    );
    for (i, line) in message.lines().enumerate() {
        surface.fill_text(line, Vec2::new(20.0, 78.0 + i as f32 * 18.0), PANEL_TEXT);
    }
    surface.restore();
}
