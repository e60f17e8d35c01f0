//! Signed distance functions for the software rasterizer
//!
//! Negative inside, positive outside, in logical units.

use glam::Vec2;

use crate::sim::Rect;

/// Signed distance to a circle
#[inline]
pub fn sd_circle(p: Vec2, center: Vec2, radius: f32) -> f32 {
    (p - center).length() - radius
}

/// Signed distance to a rounded rectangle (corner radius already clamped)
pub fn sd_rounded_rect(p: Vec2, rect: Rect, radius: f32) -> f32 {
    let half = Vec2::new(rect.w, rect.h) * 0.5;
    let q = (p - rect.center()).abs() - half + Vec2::splat(radius);
    q.max(Vec2::ZERO).length() + q.x.max(q.y).min(0.0) - radius
}

/// Distance to a line segment
pub fn sd_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let pa = p - a;
    let ba = b - a;
    let len_sq = ba.length_squared();
    let h = if len_sq > 0.0 {
        (pa.dot(ba) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (pa - ba * h).length()
}

/// Anti-aliased coverage for a signed distance (one-pixel ramp)
#[inline]
pub fn coverage(distance: f32) -> f32 {
    (0.5 - distance).clamp(0.0, 1.0)
}
