//! WASM facade over the overlay cores.
//!
//! Thin wrappers only: every method forwards to the core. The host reads
//! rendered frames straight out of WASM memory via `pixels_ptr()` +
//! `pixels_len()` and blits them with `putImageData`.

use wasm_bindgen::prelude::*;

use super::{OverlayCore, TrailCore};

#[cfg(target_arch = "wasm32")]
fn warn_config(err: &crate::error::ConfigError) {
    web_sys::console::warn_1(&format!("stardust: {err}, keeping previous value").into());
}

#[cfg(not(target_arch = "wasm32"))]
fn warn_config(_err: &crate::error::ConfigError) {}

/// Convert a config error into the `JsValue` returned to the host.
#[cfg(target_arch = "wasm32")]
fn config_err_to_js(err: &crate::error::ConfigError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// `JsValue::from_str` aborts off-wasm; native callers inspect only
/// `Err`-ness, so a reserved constant stands in for the message.
#[cfg(not(target_arch = "wasm32"))]
fn config_err_to_js(_err: &crate::error::ConfigError) -> JsValue {
    JsValue::NULL
}

/// Wall-clock milliseconds for move throttling
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
}

/// Particle-emitting cursor overlay
#[wasm_bindgen]
pub struct CursorOverlay {
    core: OverlayCore,
}

#[wasm_bindgen]
impl CursorOverlay {
    /// Create an overlay sized to the viewport, initially inactive
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: OverlayCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.core.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.core.height()
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.core.is_active()
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 {
        self.core.particle_count() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    /// Allocate the surface and start accepting input (idempotent)
    pub fn activate(&mut self) {
        self.core.activate();
    }

    /// Release the surface and drop all particles (idempotent)
    pub fn deactivate(&mut self) {
        self.core.deactivate();
    }

    /// Call once per requestAnimationFrame while active
    pub fn tick(&mut self) {
        self.core.tick();
    }

    /// Forward every raw mousemove; wall-clock throttling happens
    /// internally
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let now = now_ms();
        self.core.pointer_move(x, y, now);
    }

    /// Forward clicks; each one produces exactly one burst
    pub fn pointer_click(&mut self, x: f64, y: f64) {
        self.core.pointer_click(x, y);
    }

    /// Reallocate the surface after a window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.core.resize(width, height);
    }

    /// Replace the palette from a JSON array of `#RRGGBB` strings.
    /// Rejects bad input, keeping the previous palette.
    pub fn set_palette(&mut self, json: &str) -> Result<(), JsValue> {
        self.core.set_palette_json(json).map_err(|e| {
            warn_config(&e);
            config_err_to_js(&e)
        })
    }

    /// Ambient particles per accepted pointer move
    pub fn set_intensity(&mut self, intensity: u32) {
        self.core.set_intensity(intensity);
    }

    /// Base particle size in pixels (must be positive)
    pub fn set_point_size(&mut self, size: f64) -> Result<(), JsValue> {
        self.core.set_point_size(size).map_err(|e| {
            warn_config(&e);
            config_err_to_js(&e)
        })
    }

    /// Pointer to the RGBA frame buffer (0 when inactive)
    pub fn pixels_ptr(&self) -> *const u32 {
        match self.core.surface() {
            Some(surface) => surface.pixels_ptr(),
            None => std::ptr::null(),
        }
    }

    /// Frame buffer length in pixels
    pub fn pixels_len(&self) -> usize {
        self.core.surface().map_or(0, |s| s.pixels_len())
    }
}

impl CursorOverlay {
    /// Native-side access for tests and embedding
    pub fn core(&self) -> &OverlayCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut OverlayCore {
        &mut self.core
    }
}

/// Dot-trail cursor overlay
#[wasm_bindgen]
pub struct TrailCursor {
    core: TrailCore,
}

#[wasm_bindgen]
impl TrailCursor {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: TrailCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.core.is_active()
    }

    pub fn activate(&mut self) {
        self.core.activate();
    }

    pub fn deactivate(&mut self) {
        self.core.deactivate();
    }

    pub fn tick(&mut self) {
        self.core.tick();
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.core.pointer_move(x, y);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.core.resize(width, height);
    }

    /// Trail color as a `#RRGGBB` string
    pub fn set_color(&mut self, hex: &str) -> Result<(), JsValue> {
        self.core.set_color_hex(hex).map_err(|e| {
            warn_config(&e);
            config_err_to_js(&e)
        })
    }

    /// Cursor dot diameter in pixels (must be positive)
    pub fn set_size(&mut self, size: f64) -> Result<(), JsValue> {
        self.core.set_size(size).map_err(|e| {
            warn_config(&e);
            config_err_to_js(&e)
        })
    }

    pub fn pixels_ptr(&self) -> *const u32 {
        match self.core.surface() {
            Some(surface) => surface.pixels_ptr(),
            None => std::ptr::null(),
        }
    }

    pub fn pixels_len(&self) -> usize {
        self.core.surface().map_or(0, |s| s.pixels_len())
    }
}

impl TrailCursor {
    pub fn core(&self) -> &TrailCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut TrailCore {
        &mut self.core
    }
}
