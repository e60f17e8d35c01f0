//! Software rasterizer
//!
//! CPU backend for headless runs: every primitive is shaded per pixel from
//! its signed distance, so rounded rects need no path fallback. Text is not
//! rasterized (no font), and the sprite is stood in for by a tinted box.

use glam::Vec2;

use super::sdf::{coverage, sd_circle, sd_rounded_rect, sd_segment};
use super::shapes::{FALLBACK_BODY, clamp_corner_radius, gradient_at};
use super::{GradientStop, RenderSurface, Rgba};
use crate::sim::{Rect, Rgb};

#[derive(Debug, Clone, Copy)]
struct DrawState {
    offset: Vec2,
    alpha: f32,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            alpha: 1.0,
        }
    }
}

/// RGB framebuffer with one pixel per logical unit
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 3]>,
    state: DrawState,
    stack: Vec<DrawState>,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0.0; 3]; (width as usize) * (height as usize)],
            state: DrawState::default(),
            stack: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let [r, g, b] = self.pixels[(y * self.width + x) as usize];
        Some(Rgb::new(
            r.round().clamp(0.0, 255.0) as u8,
            g.round().clamp(0.0, 255.0) as u8,
            b.round().clamp(0.0, 255.0) as u8,
        ))
    }

    /// Binary PPM (P6) encoding of the framebuffer
    pub fn to_ppm(&self) -> Vec<u8> {
        let mut out = format!("P6\n{} {}\n255\n", self.width, self.height).into_bytes();
        out.reserve(self.pixels.len() * 3);
        for y in 0..self.height {
            for x in 0..self.width {
                if let Some(c) = self.pixel(x, y) {
                    out.extend_from_slice(&[c.r, c.g, c.b]);
                }
            }
        }
        out
    }

    fn blend(&mut self, x: u32, y: u32, color: Rgba, cover: f32) {
        let a = (color.a * self.state.alpha * cover).clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let px = &mut self.pixels[(y * self.width + x) as usize];
        for (dst, src) in px.iter_mut().zip([color.r, color.g, color.b]) {
            *dst = *dst * (1.0 - a) + src as f32 * a;
        }
    }

    /// Visit pixel centers inside `bounds` (surface space) with their position
    fn shade(&mut self, bounds: Rect, mut f: impl FnMut(Vec2) -> Option<(Rgba, f32)>) {
        if !(bounds.w > 0.0 && bounds.h > 0.0) || self.width == 0 || self.height == 0 {
            return;
        }
        let x0 = bounds.x.floor().max(0.0) as u32;
        let y0 = bounds.y.floor().max(0.0) as u32;
        let x1 = ((bounds.x + bounds.w).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((bounds.y + bounds.h).ceil().max(0.0) as u32).min(self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if let Some((color, cover)) = f(p) {
                    self.blend(x, y, color, cover);
                }
            }
        }
    }

    fn to_surface(&self, rect: Rect) -> Rect {
        Rect::new(rect.x + self.state.offset.x, rect.y + self.state.offset.y, rect.w, rect.h)
    }
}

impl RenderSurface for PixelSurface {
    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.state.offset += Vec2::new(dx, dy);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.state.alpha = alpha.clamp(0.0, 1.0);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let rect = self.to_surface(rect);
        self.shade(rect, |p| rect.contains(p).then_some((color, 1.0)));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let center = center + self.state.offset;
        let bounds = Rect::from_center(center, Vec2::splat(radius * 2.0 + 2.0));
        self.shade(bounds, |p| {
            let cover = coverage(sd_circle(p, center, radius));
            (cover > 0.0).then_some((color, cover))
        });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, gradient: &[GradientStop]) {
        let rect = self.to_surface(rect);
        let radius = clamp_corner_radius(radius, rect.w, rect.h);
        self.shade(rect.expand(1.0), |p| {
            let cover = coverage(sd_rounded_rect(p, rect, radius));
            if cover <= 0.0 {
                return None;
            }
            let t = ((p.x - rect.x) / rect.w).clamp(0.0, 1.0);
            gradient_at(gradient, t).map(|c| (c, cover))
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        let (a, b) = (from + self.state.offset, to + self.state.offset);
        let min = a.min(b) - Vec2::splat(2.0);
        let max = a.max(b) + Vec2::splat(2.0);
        let bounds = Rect::new(min.x, min.y, max.x - min.x, max.y - min.y);
        self.shade(bounds, |p| {
            let cover = coverage(sd_segment(p, a, b) - 0.5);
            (cover > 0.0).then_some((color, cover))
        });
    }

    fn draw_sprite(&mut self, rect: Rect) {
        let rect = self.to_surface(rect);
        let radius = rect.w.min(rect.h) * 0.2;
        self.shade(rect, |p| {
            let cover = coverage(sd_rounded_rect(p, rect, radius));
            (cover > 0.0).then_some((FALLBACK_BODY, cover))
        });
    }

    fn fill_text(&mut self, text: &str, _pos: Vec2, _color: Rgba) {
        log::trace!("PixelSurface skips text: {}", text);
    }
}
