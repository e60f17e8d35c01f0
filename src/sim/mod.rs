//! Simulation module
//!
//! All physics, camera and environment state lives here. This module must
//! stay free of rendering and platform dependencies:
//! - dt is injected and sanitized, never read from a clock
//! - randomness comes from an injected, seedable source
//! - world coordinates only; the camera is applied at render time

pub mod camera;
pub mod collision;
pub mod environment;
pub mod height;
pub mod impulse;
pub mod integrate;
pub mod random;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use collision::{FloorContact, resolve_floor, resolve_walls};
pub use environment::{Cloud, Environment, Star};
pub use height::{Rgb, altitude, background_color, height_t};
pub use impulse::{Impulse, hit_test};
pub use integrate::{integrate, sanitize_dt};
pub use random::{RandomSource, ScriptedRandom};
pub use state::{Body, Rect, SimState, Viewport};
pub use tick::{FrameSample, camera_target, tick, trigger, trigger_with};
