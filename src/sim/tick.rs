//! Fixed-step field update
//!
//! One call moves every entity by exactly its velocity. Nothing here is scaled
//! by elapsed time, so perceived speed follows the caller's frame rate.

use super::bounds;
use super::collision;
use super::state::ParticleField;

/// Advance the field by one step
///
/// Order matters: integrate, bounce off walls, resolve entity pairs, then
/// confine positions again since separation may push past a wall.
pub fn tick(field: &mut ParticleField, bound_w: f32, bound_h: f32) {
    for entity in &mut field.entities {
        entity.pos += entity.vel;
        bounds::clamp(entity, bound_w, bound_h);
    }

    let resolved = collision::resolve(&mut field.entities, field.policy);
    if resolved > 0 {
        log::trace!("Resolved {} contacts ({})", resolved, field.policy.as_str());
    }

    for entity in &mut field.entities {
        bounds::confine(entity, bound_w, bound_h);
    }
}
