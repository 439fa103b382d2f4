//! Animation instance
//!
//! Owns one field, one baseline cache and the RNG behind both spawning and
//! click navigation. The page scheduler calls [`Animation::frame`] once per
//! animation frame and forwards the output to its renderer; stopping the
//! animation is simply not calling it again.

use rand_pcg::Pcg32;
use serde::Serialize;

use crate::nav::{NavTargets, Navigation};
use crate::settings::Settings;
use crate::sim::{ParticleField, RngState};
use crate::wave::{BaselineCache, PathWaveDistorter};

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameOutput {
    /// Frame counter (ticks since creation)
    pub frame: u64,
    /// Top-left corner of every sprite, in payload order at spawn
    pub positions: Vec<(f32, f32)>,
    /// Distorted path text, if a path has been supplied
    pub path: Option<String>,
}

/// One animated landing-page context
#[derive(Debug, Clone)]
pub struct Animation {
    settings: Settings,
    rng_state: RngState,
    rng: Pcg32,
    field: ParticleField,
    bound_w: f32,
    bound_h: f32,
    distorter: PathWaveDistorter,
    baseline: BaselineCache,
    path_index: usize,
    targets: NavTargets,
    frames: u64,
}

impl Animation {
    /// Create an animation with `settings.entity_count` sprites
    pub fn new(seed: u64, settings: Settings, bound_w: f32, bound_h: f32) -> Self {
        let rng_state = RngState::new(seed);
        let mut rng = rng_state.to_rng();
        let field = ParticleField::init(
            &settings,
            settings.entity_count,
            bound_w,
            bound_h,
            &mut rng,
        );
        let distorter = PathWaveDistorter::new(settings.wave.clone());

        log::info!(
            "Animation created: seed={}, {} sprites, {}x{}",
            seed,
            field.len(),
            bound_w,
            bound_h
        );

        Self {
            settings,
            rng_state,
            rng,
            field,
            bound_w,
            bound_h,
            distorter,
            baseline: BaselineCache::new(),
            path_index: 0,
            targets: NavTargets::default(),
            frames: 0,
        }
    }

    /// Replace the click destinations
    pub fn with_targets(mut self, targets: NavTargets) -> Self {
        self.targets = targets;
        self
    }

    /// Desynchronize this instance's path from sibling instances
    pub fn with_path_index(mut self, path_index: usize) -> Self {
        self.path_index = path_index;
        self
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn targets(&self) -> &NavTargets {
        &self.targets
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.bound_w, self.bound_h)
    }

    /// Container resized
    pub fn resize(&mut self, bound_w: f32, bound_h: f32) {
        self.bound_w = bound_w;
        self.bound_h = bound_h;
        self.field.resize(bound_w, bound_h);
    }

    /// Supply the path text for content `identity`.
    ///
    /// The text is only captured when the identity differs from the current
    /// baseline, so re-sending already distorted text is harmless.
    pub fn set_path(&mut self, identity: u64, source: &str) {
        self.baseline.baseline(identity, source);
    }

    /// Forget the current path
    pub fn clear_path(&mut self) {
        self.baseline.invalidate();
    }

    /// Distort the captured baseline at `time`
    pub fn path_at(&self, time: f64) -> Option<String> {
        let (_, baseline) = self.baseline.current()?;
        Some(self.distorter.apply_indexed(
            baseline,
            time,
            self.settings.intensity,
            self.settings.phase_offset,
            self.path_index,
        ))
    }

    /// Advance the sprites by one step
    pub fn tick(&mut self) {
        self.field.tick(self.bound_w, self.bound_h);
        self.frames += 1;
    }

    /// One animation frame: tick, then distort the path at `time`
    pub fn frame(&mut self, time: f64) -> FrameOutput {
        self.tick();
        FrameOutput {
            frame: self.frames,
            positions: self.field.positions(),
            path: self.path_at(time),
        }
    }

    /// Pointer activation at `(x, y)`; returns where to go if a sprite was hit
    pub fn activate(&mut self, x: f32, y: f32) -> Option<Navigation> {
        let index = self.field.hit_test(x, y)?;
        log::debug!("Sprite {} activated", index);
        Some(self.targets.choose(&mut self.rng))
    }
}
