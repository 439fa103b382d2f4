//! Container walls
//!
//! Entities live in the rectangle `[0, bound_w - size] x [0, bound_h - size]`
//! (positions are top-left corners). A container smaller than an entity
//! collapses the range to zero instead of inverting it.

use super::state::Entity;

/// Largest allowed position on one axis
#[inline]
pub fn max_offset(bound: f32, size: f32) -> f32 {
    (bound - size).max(0.0)
}

/// Confine an entity to the container and bounce it off the walls.
///
/// Velocity is forced away from whichever wall the entity touches, so an
/// entity that overshoots by several pixels does not stick to the wall.
/// The near wall (position <= 0) is checked first.
pub fn clamp(entity: &mut Entity, bound_w: f32, bound_h: f32) {
    let max_x = max_offset(bound_w, entity.size);
    let max_y = max_offset(bound_h, entity.size);

    if entity.pos.x <= 0.0 {
        entity.pos.x = 0.0;
        entity.vel.x = entity.vel.x.abs();
    } else if entity.pos.x >= max_x {
        entity.pos.x = max_x;
        entity.vel.x = -entity.vel.x.abs();
    }

    if entity.pos.y <= 0.0 {
        entity.pos.y = 0.0;
        entity.vel.y = entity.vel.y.abs();
    } else if entity.pos.y >= max_y {
        entity.pos.y = max_y;
        entity.vel.y = -entity.vel.y.abs();
    }
}

/// Position-only clamp; velocity is left alone.
#[inline]
pub fn confine(entity: &mut Entity, bound_w: f32, bound_h: f32) {
    entity.pos.x = entity.pos.x.clamp(0.0, max_offset(bound_w, entity.size));
    entity.pos.y = entity.pos.y.clamp(0.0, max_offset(bound_h, entity.size));
}
