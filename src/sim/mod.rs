//! Deterministic bouncing-sprite simulation
//!
//! This module must stay pure and deterministic:
//! - Fixed per-call step only
//! - Seeded RNG only
//! - Stable iteration order (by entity index)
//! - No rendering or platform dependencies

pub mod bounds;
pub mod collision;
pub mod state;
pub mod tick;

pub use bounds::{clamp, confine};
pub use collision::{CollisionPolicy, Contact, reflect_velocity, resolve};
pub use state::{Entity, ParticleField, RngState};
pub use tick::tick;
