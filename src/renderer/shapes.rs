//! Fixed shapes and palettes

use super::{GradientStop, Rgba};

/// Rainbow band, transparent at both ends
pub const RAINBOW: [GradientStop; 6] = [
    GradientStop {
        offset: 0.0,
        color: Rgba::new(255, 100, 200, 0.0),
    },
    GradientStop {
        offset: 0.2,
        color: Rgba::new(255, 150, 80, 0.7),
    },
    GradientStop {
        offset: 0.4,
        color: Rgba::new(255, 255, 120, 0.7),
    },
    GradientStop {
        offset: 0.6,
        color: Rgba::new(120, 255, 170, 0.7),
    },
    GradientStop {
        offset: 0.8,
        color: Rgba::new(120, 190, 255, 0.7),
    },
    GradientStop {
        offset: 1.0,
        color: Rgba::new(180, 140, 255, 0.0),
    },
];

pub const FLOOR_LINE: Rgba = Rgba::new(0, 0, 0, 0.10);
pub const FALLBACK_BODY: Rgba = Rgba::new(255, 120, 170, 0.9);
pub const PANEL_BACKGROUND: Rgba = Rgba::new(255, 255, 255, 0.92);
pub const PANEL_TEXT: Rgba = Rgba::new(0xb0, 0x00, 0x20, 1.0);
pub const READOUT_TEXT: Rgba = Rgba::new(40, 40, 60, 0.8);

/// Largest usable corner radius for a `w × h` box
pub fn clamp_corner_radius(radius: f32, w: f32, h: f32) -> f32 {
    radius.min(w.min(h) / 2.0).max(0.0)
}

/// Sample the gradient at `t` in [0, 1]
pub fn gradient_at(stops: &[GradientStop], t: f32) -> Option<Rgba> {
    let first = stops.first()?;
    if t <= first.offset {
        return Some(first.color);
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            let u = if span > 0.0 { (t - a.offset) / span } else { 1.0 };
            let ch = |x: u8, y: u8| crate::lerp(x as f32, y as f32, u).round() as u8;
            return Some(Rgba::new(
                ch(a.color.r, b.color.r),
                ch(a.color.g, b.color.g),
                ch(a.color.b, b.color.b),
                crate::lerp(a.color.a, b.color.a, u),
            ));
        }
    }
    stops.last().map(|s| s.color)
}
