//! Bounce Wave - animation core for an animated landing page
//!
//! Core modules:
//! - `sim`: Deterministic bouncing-sprite simulation (walls, collisions)
//! - `wave`: Waveform distortion of path text
//! - `engine`: Per-page animation instance driven by the frame scheduler
//! - `nav`: Click navigation targets
//! - `settings`: Caller-supplied tunables

pub mod engine;
pub mod nav;
pub mod settings;
pub mod sim;
pub mod wave;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use engine::{Animation, FrameOutput};
pub use nav::{NavTargets, Navigation};
pub use settings::{Settings, WaveSettings};
pub use sim::{CollisionPolicy, Entity, ParticleField};
pub use wave::{BaselineCache, PathToken, PathWaveDistorter};
