//! Rendering module
//!
//! The core draws through [`RenderSurface`], a small 2D raster interface
//! sized in logical units. Backends (canvas, software raster, recorder)
//! pick whichever native primitive fits each call.

pub mod environment;
pub mod frame;
pub mod raster;
pub mod recording;
pub mod sdf;
pub mod shapes;

pub use frame::{DrawStats, draw_frame};
pub use raster::PixelSurface;
pub use recording::{DrawCommand, RecordingSurface};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Rect, Rgb};

/// Color with straight (non-premultiplied) alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 1.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(c: Rgb) -> Self {
        Self::new(c.r, c.g, c.b, 1.0)
    }
}

/// One stop of a horizontal linear gradient (`offset` in [0, 1])
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

/// 2D raster target the frame is drawn onto.
///
/// State calls (`save`, `restore`, `translate`, `set_alpha`) follow canvas
/// semantics: `restore` pops everything since the matching `save`.
pub trait RenderSurface {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    /// Global alpha multiplier for subsequent fills
    fn set_alpha(&mut self, alpha: f32);

    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Rounded rectangle filled with a horizontal gradient spanning `rect`
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, gradient: &[GradientStop]);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba);
    /// Draw the bunny sprite stretched to `rect`
    fn draw_sprite(&mut self, rect: Rect);
    fn fill_text(&mut self, text: &str, pos: Vec2, color: Rgba);
}
