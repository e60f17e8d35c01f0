//! Sky Bunny - tap the bunny, watch it climb into space
//!
//! Core modules:
//! - `sim`: Simulation (integrator, collision, impulse, camera, height, particles)
//! - `renderer`: Render surface abstraction and draw order
//! - `driver`: Host-facing frame loop (clock, input, resize)
//! - `settings`: Data-driven tuning
//! - `assets` / `audio`: Thin collaborator seams

pub mod assets;
pub mod audio;
pub mod driver;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::FrameDriver;
pub use error::SimError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// World Y of the floor plane (y grows downward)
    pub const FLOOR_Y: f32 = 0.0;

    /// Largest dt a single tick may integrate (avoids blow-ups on frame hitches)
    pub const MAX_DT: f32 = 1.0 / 30.0;

    /// Reference frame rate that drag coefficients are expressed against
    pub const DRAG_REFERENCE_FPS: f32 = 60.0;

    /// Default body size before the sprite reports its aspect ratio
    pub const BODY_DEFAULT_SIZE: f32 = 160.0;

    /// Body height as a fraction of min(width, height) once the sprite is known
    pub const BODY_VIEWPORT_FRACTION: f32 = 0.35;

    /// Fallback circle radius as a fraction of min(w, h)
    pub const FALLBACK_RADIUS_FRACTION: f32 = 0.35;
}

/// Clamp to [0, 1]
#[inline]
pub fn clamp01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Cubic Hermite ease `t²(3 − 2t)` on the clamped input
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    let t = clamp01(t);
    t * t * (3.0 - 2.0 * t)
}

/// Smoothstep across a `[start, full]` band.
///
/// Collapses to a hard step at `full` when the band is empty, so callers
/// never divide by zero.
#[inline]
pub fn band_gate(value: f32, start: f32, full: f32) -> f32 {
    let span = full - start;
    if span <= f32::EPSILON {
        return if value >= full { 1.0 } else { 0.0 };
    }
    smoothstep((value - start) / span)
}
