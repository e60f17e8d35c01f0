//! Altitude → progress → background color
//!
//! `height_t` is normalized against a multiple of the viewport height so the
//! sky-to-space transition takes the same number of "screens" on any device.

use serde::{Deserialize, Serialize};

use crate::consts::FLOOR_Y;
use crate::{clamp01, lerp};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel lerp, rounded to the nearest integer
    pub fn lerp(a: Rgb, b: Rgb, t: f32) -> Rgb {
        let ch = |x: u8, y: u8| lerp(x as f32, y as f32, clamp01(t)).round() as u8;
        Rgb::new(ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b))
    }
}

pub const BG_GROUND: Rgb = Rgb::new(255, 245, 250);
pub const BG_SKY: Rgb = Rgb::new(180, 220, 255);
pub const BG_SPACE: Rgb = Rgb::new(30, 40, 80);

/// Height above the floor (never negative)
pub fn altitude(body_y: f32) -> f32 {
    (FLOOR_Y - body_y).max(0.0)
}

/// Normalized climb progress in [0, 1]
pub fn height_t(altitude: f32, screen_height: f32, scale: f32) -> f32 {
    let full = screen_height * scale;
    if !(full > 0.0) {
        return 0.0;
    }
    clamp01(altitude / full)
}

/// Ground → sky over [0, 0.5), sky → space over [0.5, 1]
pub fn background_color(height_t: f32) -> Rgb {
    if height_t < 0.5 {
        Rgb::lerp(BG_GROUND, BG_SKY, height_t * 2.0)
    } else {
        Rgb::lerp(BG_SKY, BG_SPACE, (height_t - 0.5) * 2.0)
    }
}
