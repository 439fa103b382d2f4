//! Field state and core simulation types
//!
//! Everything needed to reproduce a run lives here: the entity list, the
//! collision policy and the seed the field was populated from.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::{self, max_offset};
use super::collision::CollisionPolicy;
use crate::settings::Settings;

/// A bouncing sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Top-left corner
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    /// Square extent, also the diameter for proximity tests
    pub size: f32,
    /// Sprite identity, opaque to the simulation
    pub payload: usize,
}

impl Entity {
    pub fn new(pos: Vec2, vel: Vec2, size: f32, payload: usize) -> Self {
        Self {
            pos,
            vel,
            size,
            payload,
        }
    }

    /// Spawn at a uniform position inside the container, heading in a
    /// uniform direction at `speed`
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        size: f32,
        speed: f32,
        bound_w: f32,
        bound_h: f32,
        payload: usize,
    ) -> Self {
        let pos = Vec2::new(
            rng.random::<f32>() * max_offset(bound_w, size),
            rng.random::<f32>() * max_offset(bound_h, size),
        );
        let angle = rng.random::<f32>() * std::f32::consts::TAU;
        let vel = Vec2::from_angle(angle) * speed;
        Self::new(pos, vel, size, payload)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size * 0.5)
    }

    /// Whether a point lies inside the entity's box
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x <= self.pos.x + self.size
            && point.y >= self.pos.y
            && point.y <= self.pos.y + self.size
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// The set of bouncing entities owned by one animation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleField {
    /// Entities in stable index order; collision pairs follow this order
    pub entities: Vec<Entity>,
    pub policy: CollisionPolicy,
}

impl ParticleField {
    /// Empty field
    pub fn new(policy: CollisionPolicy) -> Self {
        Self {
            entities: Vec::new(),
            policy,
        }
    }

    /// Populate `entity_count` entities from the given random source.
    ///
    /// Payloads are assigned `0..entity_count` in spawn order.
    pub fn init<R: Rng + ?Sized>(
        settings: &Settings,
        entity_count: usize,
        bound_w: f32,
        bound_h: f32,
        rng: &mut R,
    ) -> Self {
        let entities = (0..entity_count)
            .map(|payload| {
                Entity::random(
                    rng,
                    settings.entity_size,
                    settings.step_speed,
                    bound_w,
                    bound_h,
                    payload,
                )
            })
            .collect();

        log::debug!(
            "Field initialized: {} entities in {}x{} ({:?})",
            entity_count,
            bound_w,
            bound_h,
            settings.collision_policy
        );

        Self {
            entities,
            policy: settings.collision_policy,
        }
    }

    /// Populate from a PCG stream seeded with `seed`
    pub fn seeded(
        seed: u64,
        settings: &Settings,
        entity_count: usize,
        bound_w: f32,
        bound_h: f32,
    ) -> Self {
        let mut rng = RngState::new(seed).to_rng();
        Self::init(settings, entity_count, bound_w, bound_h, &mut rng)
    }

    /// Advance one fixed step
    pub fn tick(&mut self, bound_w: f32, bound_h: f32) {
        super::tick::tick(self, bound_w, bound_h);
    }

    /// Pull every entity back inside a resized container.
    ///
    /// Velocities are kept; the next tick bounces anything resting on a wall.
    pub fn resize(&mut self, bound_w: f32, bound_h: f32) {
        for entity in &mut self.entities {
            bounds::confine(entity, bound_w, bound_h);
        }
    }

    /// Index of the top-most entity under a point (later entities draw on top)
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        let point = Vec2::new(x, y);
        self.entities.iter().rposition(|e| e.contains(point))
    }

    /// Current top-left positions, in entity order
    pub fn positions(&self) -> Vec<(f32, f32)> {
        self.entities.iter().map(|e| (e.pos.x, e.pos.y)).collect()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
