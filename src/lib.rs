//! Stardust Engine - Particle cursor effects in WASM
//!
//! The JS host owns the canvas, the event listeners and the
//! requestAnimationFrame loop. This crate owns everything between raw
//! pointer events and finished pixels:
//!
//! - emitter/    - particle spawning (ambient trail + click bursts)
//! - simulation/ - per-frame integration, decay, population cap
//! - render/     - software rasterizer into an RGBA surface
//! - overlay/    - lifecycle + input translation, WASM facade
//!
//! Rendering is zero-copy: the host reads the surface pixel buffer
//! directly out of WASM memory via pointer + length.

pub mod color;
pub mod emitter;
pub mod error;
pub mod overlay;
pub mod particle;
pub mod render;
pub mod rng;
pub mod simulation;
pub mod trail;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&"✨ Stardust WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use color::Rgb;
pub use error::ConfigError;
pub use overlay::{CursorOverlay, OverlayCore, TrailCursor};
pub use particle::{Particle, ParticleKind};
pub use simulation::Simulation;
