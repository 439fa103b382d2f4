//! Bounce wave headless driver
//!
//! Runs a seeded animation for a number of frames and prints every frame as a
//! JSON line. Usage: `bounce-wave [seed] [frames] [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
use bounce_wave::{Animation, Settings};

/// Path shown when none is given: a simple wavy logo outline
#[cfg(not(target_arch = "wasm32"))]
const DEMO_PATH: &str = "M10,30 L40,10 L70,30 L100,10 L130,30 L130,70 L10,70 Z";

/// Frames per second assumed when converting frame index to time
#[cfg(not(target_arch = "wasm32"))]
const FRAME_RATE: f64 = 60.0;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed: u64 = args.first().and_then(|s| s.parse().ok()).unwrap_or(42);
    let frames: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(120);
    let settings = match args.get(2) {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(json) => Settings::from_json_or_default(&json),
            Err(err) => {
                log::warn!("Cannot read {} ({}), using defaults", path, err);
                Settings::default()
            }
        },
        None => Settings::default(),
    };

    log::info!("Bounce wave (native) starting: seed={}, frames={}", seed, frames);

    let mut anim = Animation::new(seed, settings, 800.0, 600.0);
    anim.set_path(0, DEMO_PATH);

    for i in 0..frames {
        let out = anim.frame(i as f64 / FRAME_RATE);
        match serde_json::to_string(&out) {
            Ok(line) => println!("{}", line),
            Err(err) => {
                log::error!("Frame {} not serializable: {}", out.frame, err);
                break;
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_start, this is just to satisfy the compiler
}
