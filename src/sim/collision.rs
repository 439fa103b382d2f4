//! Entity-entity collision detection and response
//!
//! Two policies exist and produce visibly different trajectories, so they are
//! kept apart rather than blended:
//! - `Momentum`: circles of diameter `size`, equal-mass exchange of the
//!   normal velocity component
//! - `Mirror`: axis-aligned boxes, each side bounces as if off a fixed wall
//!
//! Pairs are visited once per pass in ascending `(i, j)` order. A pair fixed
//! early can be pushed back into contact by a later pair; that residue is left
//! for the next tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Entity;

/// Below this center distance the contact normal is undefined
const MIN_DISTANCE: f32 = 1e-4;

/// Collision response policy, fixed for the lifetime of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionPolicy {
    /// Proximity test + momentum exchange along the contact normal
    #[default]
    Momentum,
    /// AABB test + specular reflection per entity
    Mirror,
}

impl CollisionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionPolicy::Momentum => "momentum",
            CollisionPolicy::Mirror => "mirror",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "momentum" | "a" => Some(CollisionPolicy::Momentum),
            "mirror" | "b" => Some(CollisionPolicy::Mirror),
            _ => None,
        }
    }
}

/// Result of a pairwise contact check
#[derive(Debug, Clone)]
pub struct Contact {
    /// Unit normal pointing from the first entity toward the second
    pub normal: Vec2,
    /// Overlap along the normal (for position correction)
    pub penetration: f32,
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Circle-circle proximity test on entity centers
///
/// The contact distance is the mean of the two sizes, which is just `size`
/// for a uniform field.
pub fn circle_contact(a: &Entity, b: &Entity) -> Option<Contact> {
    let delta = b.center() - a.center();
    let dist = delta.length();
    let reach = (a.size + b.size) * 0.5;

    if dist >= reach || dist < MIN_DISTANCE {
        return None;
    }

    Some(Contact {
        normal: delta / dist,
        penetration: reach - dist,
    })
}

/// Per-axis overlap of two boxes (negative when apart)
#[inline]
pub fn box_overlap(a: &Entity, b: &Entity) -> Vec2 {
    let min = a.pos.max(b.pos);
    let max = (a.pos + Vec2::splat(a.size)).min(b.pos + Vec2::splat(b.size));
    max - min
}

/// Box-box test; separates along the axis of least overlap (X on ties)
pub fn box_contact(a: &Entity, b: &Entity) -> Option<Contact> {
    let overlap = box_overlap(a, b);
    if overlap.x <= 0.0 || overlap.y <= 0.0 {
        return None;
    }

    let (ca, cb) = (a.center(), b.center());
    let contact = if overlap.x <= overlap.y {
        let sign = if ca.x <= cb.x { 1.0 } else { -1.0 };
        Contact {
            normal: Vec2::new(sign, 0.0),
            penetration: overlap.x,
        }
    } else {
        let sign = if ca.y <= cb.y { 1.0 } else { -1.0 };
        Contact {
            normal: Vec2::new(0.0, sign),
            penetration: overlap.y,
        }
    };

    Some(contact)
}

/// Equal-mass exchange of the normal velocity component.
///
/// Returns false (and leaves both untouched) if the pair is not in contact
/// or already separating.
pub fn resolve_momentum(a: &mut Entity, b: &mut Entity) -> bool {
    let Some(contact) = circle_contact(a, b) else {
        return false;
    };
    let n = contact.normal;

    let approach = (b.vel - a.vel).dot(n);
    if approach >= 0.0 {
        return false;
    }

    let exchange = n * approach;
    a.vel += exchange;
    b.vel -= exchange;

    let push = n * (contact.penetration * 0.5);
    a.pos -= push;
    b.pos += push;
    true
}

/// Mirror both velocities across the contact normal and split the overlap.
///
/// Not momentum-conserving: each side bounces as if off a fixed wall.
pub fn resolve_mirror(a: &mut Entity, b: &mut Entity) -> bool {
    let Some(contact) = box_contact(a, b) else {
        return false;
    };
    let n = contact.normal;

    a.vel = reflect_velocity(a.vel, n);
    b.vel = reflect_velocity(b.vel, -n);

    let push = n * (contact.penetration * 0.5);
    a.pos -= push;
    b.pos += push;
    true
}

/// One pass over every unordered pair; returns how many pairs were resolved
pub fn resolve(entities: &mut [Entity], policy: CollisionPolicy) -> usize {
    let resolve_pair: fn(&mut Entity, &mut Entity) -> bool = match policy {
        CollisionPolicy::Momentum => resolve_momentum,
        CollisionPolicy::Mirror => resolve_mirror,
    };

    let mut resolved = 0;
    for i in 0..entities.len() {
        let (head, tail) = entities.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_pair(a, b) {
                resolved += 1;
            }
        }
    }
    resolved
}
