//! Overlay - cursor overlay lifecycle and input translation
//!
//! Owns the simulator + renderer pair behind an explicit Active/Inactive
//! state machine. The host forwards raw pointer events and drives `tick()`
//! from its refresh callback; everything else (rate limiting, spawning,
//! drawing) happens here.
//!
//! Split like the rest of the engine: `OverlayCore` is plain Rust and
//! fully testable natively, `facade` wraps it for wasm-bindgen.

mod facade;

pub use facade::{CursorOverlay, TrailCursor};

use crate::color::{self, Rgb, DEFAULT_PALETTE, TRAIL_COLOR};
use crate::error::{ConfigError, ConfigResult};
use crate::render::{draw_particles, Surface};
use crate::rng::Xorshift32;
use crate::simulation::Simulation;
use crate::trail::DotTrail;
use crate::emitter::EmitterState;

/// Ambient particles per accepted pointer move
pub const DEFAULT_INTENSITY: u32 = 2;

/// Base particle size in pixels
pub const DEFAULT_POINT_SIZE: f64 = 4.0;

/// Dot-trail cursor diameter in pixels
pub const DEFAULT_TRAIL_SIZE: f64 = 20.0;

/// Minimum wall-clock gap between accepted pointer-move emissions (~60/s)
pub const MIN_MOVE_INTERVAL_MS: f64 = 16.0;

const RNG_SEED: u32 = 12345;

/// Overlay configuration with host-facing defaults
pub struct OverlayConfig {
    pub intensity: u32,
    pub point_size: f64,
    pub palette: Vec<Rgb>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            intensity: DEFAULT_INTENSITY,
            point_size: DEFAULT_POINT_SIZE,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

/// The particle cursor overlay
pub struct OverlayCore {
    sim: Simulation,
    surface: Option<Surface>,
    rng: Xorshift32,
    emitter: EmitterState,
    config: OverlayConfig,
    active: bool,
    // Viewport dimensions, remembered across deactivation
    width: u32,
    height: u32,
}

impl OverlayCore {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            sim: Simulation::new(),
            surface: None,
            rng: Xorshift32::new(RNG_SEED),
            emitter: EmitterState::new(),
            config: OverlayConfig::default(),
            active: false,
            width,
            height,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn particle_count(&self) -> usize {
        self.sim.len()
    }

    pub fn frame(&self) -> u64 {
        self.sim.frame()
    }

    pub fn palette(&self) -> &[Rgb] {
        &self.config.palette
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    /// Inactive -> Active: allocate the surface and start accepting
    /// input. No-op when already active.
    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        self.surface = Some(Surface::new(self.width, self.height));
        self.active = true;
    }

    /// Active -> Inactive: release the surface and drop all particles.
    /// No-op when already inactive.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.surface = None;
        self.sim.clear();
        self.emitter = EmitterState::new();
    }

    /// One display-refresh tick: advance the simulation, then draw.
    /// Skipped entirely while inactive; drawing is a no-op without a
    /// surface.
    pub fn tick(&mut self) {
        if !self.active {
            return;
        }
        self.sim.advance();
        if let Some(surface) = self.surface.as_mut() {
            draw_particles(surface, self.sim.particles());
        }
    }

    /// Pointer move: remember the position, emit ambient particles at
    /// most once per [`MIN_MOVE_INTERVAL_MS`]. `now_ms` is the host's
    /// wall clock, so bursts of events coalesce regardless of how fast
    /// the display refreshes.
    pub fn pointer_move(&mut self, x: f64, y: f64, now_ms: f64) {
        if !self.active {
            return;
        }
        self.emitter.x = x;
        self.emitter.y = y;

        let allowed = match self.emitter.last_emit_ms {
            None => true,
            Some(last) => now_ms - last > MIN_MOVE_INTERVAL_MS,
        };
        if allowed {
            self.emitter.last_emit_ms = Some(now_ms);
            self.sim.spawn_ambient(
                &mut self.rng,
                (x, y),
                self.config.intensity,
                self.config.point_size,
                &self.config.palette,
            );
        }
    }

    /// Pointer click: always exactly one burst, never throttled.
    pub fn pointer_click(&mut self, x: f64, y: f64) {
        if !self.active {
            return;
        }
        self.emitter.x = x;
        self.emitter.y = y;
        self.sim
            .spawn_burst(&mut self.rng, (x, y), self.config.point_size, &self.config.palette);
    }

    /// Viewport resize: reallocate the surface at the new dimensions.
    /// Live particles and the clock are untouched.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        if self.active {
            self.surface = Some(Surface::new(width, height));
        }
    }

    /// Replace the palette from a JSON array of hex colors. On error the
    /// previous palette stays active.
    pub fn set_palette_json(&mut self, json: &str) -> ConfigResult<()> {
        self.config.palette = color::parse_palette_json(json)?;
        Ok(())
    }

    pub fn set_intensity(&mut self, intensity: u32) {
        self.config.intensity = intensity;
    }

    pub fn set_point_size(&mut self, size: f64) -> ConfigResult<()> {
        if size <= 0.0 || !size.is_finite() {
            return Err(ConfigError::NonPositive {
                name: "point_size",
                value: size,
            });
        }
        self.config.point_size = size;
        Ok(())
    }
}

/// The dot-trail cursor overlay. Same lifecycle as [`OverlayCore`], but
/// the state is just a position history.
pub struct TrailCore {
    trail: DotTrail,
    surface: Option<Surface>,
    color: Rgb,
    size: f64,
    active: bool,
    width: u32,
    height: u32,
}

impl TrailCore {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            trail: DotTrail::new(),
            surface: None,
            color: TRAIL_COLOR,
            size: DEFAULT_TRAIL_SIZE,
            active: false,
            width,
            height,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        self.surface = Some(Surface::new(self.width, self.height));
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.surface = None;
        self.trail.clear();
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if !self.active {
            return;
        }
        self.trail.push(x, y);
    }

    pub fn tick(&mut self) {
        if !self.active {
            return;
        }
        if let Some(surface) = self.surface.as_mut() {
            self.trail.draw(surface, self.color, self.size);
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        if self.active {
            self.surface = Some(Surface::new(width, height));
        }
    }

    pub fn set_color_hex(&mut self, hex: &str) -> ConfigResult<()> {
        self.color = Rgb::from_hex(hex)?;
        Ok(())
    }

    pub fn set_size(&mut self, size: f64) -> ConfigResult<()> {
        if size <= 0.0 || !size.is_finite() {
            return Err(ConfigError::NonPositive {
                name: "size",
                value: size,
            });
        }
        self.size = size;
        Ok(())
    }
}
