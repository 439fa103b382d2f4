//! Animation settings
//!
//! All tunables are caller-supplied; on the web they persist in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::sim::CollisionPolicy;

/// Waveform distortion tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveSettings {
    /// Base offset amplitude (path units)
    pub amplitude_base: f64,
    /// How far the amplitude breathes around the base
    pub amplitude_variation: f64,
    /// Angular frequencies of the three sine terms (radians per time unit)
    pub frequencies: [f64; 3],
    /// Decimal places written back into the path (raised to at least 1)
    pub precision_digits: usize,
}

impl Default for WaveSettings {
    fn default() -> Self {
        Self {
            amplitude_base: 1.5,
            amplitude_variation: 0.5,
            frequencies: [1.3, 2.1, 3.7],
            precision_digits: 2,
        }
    }
}

/// Animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sprite edge length (px)
    pub entity_size: f32,
    /// Sprite speed (px per tick)
    pub step_speed: f32,
    /// Number of sprites spawned
    pub entity_count: usize,
    pub collision_policy: CollisionPolicy,

    // === Path wave ===
    pub wave: WaveSettings,
    /// Overall distortion strength (0 disables it)
    pub intensity: f64,
    /// Extra phase shift added to time
    pub phase_offset: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            entity_size: 48.0,
            step_speed: 1.5,
            entity_count: 12,
            collision_policy: CollisionPolicy::Momentum,

            wave: WaveSettings::default(),
            intensity: 1.0,
            phase_offset: 0.0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse settings, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Invalid settings ({}), using defaults", err);
                Self::default()
            }
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bounce_wave_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json_or_default(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
