//! Browser binding
//!
//! The page owns the `requestAnimationFrame` loop and the DOM; this wrapper
//! only hands positions and path text back and performs click navigation.

use wasm_bindgen::prelude::*;

use crate::engine::Animation;
use crate::nav::{NavTargets, Navigation};
use crate::settings::Settings;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Bounce wave (web) ready");
}

/// Perform a navigation in the current window
fn dispatch(navigation: &Navigation) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    match navigation {
        Navigation::NewContext(url) => {
            window.open_with_url_and_target(url, "_blank")?;
        }
        Navigation::InPlace(url) => window.location().set_href(url)?,
    }
    Ok(())
}

/// Persist settings JSON for the next page load; false if it does not parse
#[wasm_bindgen]
pub fn save_settings(json: &str) -> bool {
    match Settings::from_json(json) {
        Ok(settings) => {
            settings.save();
            true
        }
        Err(err) => {
            log::warn!("Settings not saved ({})", err);
            false
        }
    }
}

#[wasm_bindgen]
pub struct WebAnimation {
    inner: Animation,
}

#[wasm_bindgen]
impl WebAnimation {
    /// `targets_json` is a JSON array of navigation targets
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, targets_json: &str) -> WebAnimation {
        let targets: Vec<String> = serde_json::from_str(targets_json).unwrap_or_else(|err| {
            log::warn!("Invalid navigation targets ({}), using defaults", err);
            Vec::new()
        });
        let seed = js_sys::Date::now() as u64;
        let inner = Animation::new(seed, Settings::load(), width, height)
            .with_targets(NavTargets::new(targets));
        WebAnimation { inner }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.inner.resize(width, height);
    }

    /// Hand over the path text for content `identity`
    pub fn set_path(&mut self, identity: u32, source: &str) {
        self.inner.set_path(u64::from(identity), source);
    }

    /// Advance one step; returns `[x0, y0, x1, y1, ...]`
    pub fn tick(&mut self) -> Vec<f32> {
        self.inner.tick();
        self.inner
            .field()
            .positions()
            .into_iter()
            .flat_map(|(x, y)| [x, y])
            .collect()
    }

    /// Distorted path at `time` (seconds), or undefined without a path
    pub fn path(&self, time: f64) -> Option<String> {
        self.inner.path_at(time)
    }

    /// Pointer activation; navigates and returns true on a sprite hit
    pub fn activate(&mut self, x: f32, y: f32) -> bool {
        let Some(navigation) = self.inner.activate(x, y) else {
            return false;
        };
        if let Err(err) = dispatch(&navigation) {
            log::warn!("Navigation to {} failed: {:?}", navigation.url(), err);
        }
        true
    }
}
