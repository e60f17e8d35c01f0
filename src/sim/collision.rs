//! Wall and floor collision response
//!
//! The body is an axis-aligned box. Walls are the viewport's left and right
//! edges; the floor is the world plane y = FLOOR_Y.

use super::state::Body;
use crate::consts::FLOOR_Y;
use crate::settings::Settings;

/// What happened at the floor this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorContact {
    /// Body entirely above the floor
    Airborne,
    /// Hard hit: vertical velocity reflected
    Bounced,
    /// Soft hit: vertical velocity zeroed, friction applied
    Settled,
}

/// Keep the body between the side walls, reflecting horizontal velocity
pub fn resolve_walls(body: &mut Body, width: f32, settings: &Settings) {
    let half_w = body.half_extents().x;

    // Viewport narrower than the body: no valid range, keep it centered
    if width < half_w * 2.0 {
        body.pos.x = width / 2.0;
        return;
    }

    if body.pos.x < half_w {
        body.pos.x = half_w;
        body.vel.x *= settings.wall_restitution;
    }
    if body.pos.x > width - half_w {
        body.pos.x = width - half_w;
        body.vel.x *= settings.wall_restitution;
    }
}

/// Resolve floor penetration.
///
/// Bounce vs. settle is a single comparison of |vy| against the threshold,
/// with no hysteresis.
pub fn resolve_floor(body: &mut Body, settings: &Settings) -> FloorContact {
    let half_h = body.half_extents().y;

    if body.bottom() <= FLOOR_Y {
        body.on_ground = false;
        return FloorContact::Airborne;
    }

    body.pos.y = FLOOR_Y - half_h;

    if body.vel.y.abs() > settings.bounce_threshold {
        body.vel.y *= -settings.bounce;
        body.on_ground = false;
        FloorContact::Bounced
    } else {
        body.vel.y = 0.0;
        body.on_ground = true;
        body.vel.x *= settings.floor_friction;
        FloorContact::Settled
    }
}
