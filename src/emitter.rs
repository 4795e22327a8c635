//! Emitter - particle spawning
//!
//! Two spawn modes:
//! - Ambient: low-rate emission tied to pointer movement, jittered around
//!   the pointer with random drift velocity.
//! - Burst: one-shot radial ring of 12 particles on click, launched
//!   outward at equal angular spacing with gravity attached.

use std::f64::consts::TAU;

use crate::color::Rgb;
use crate::particle::{Particle, ParticleKind};
use crate::rng::Xorshift32;

/// Particles per click burst
pub const BURST_COUNT: usize = 12;

/// Downward acceleration applied to burst particles each step
pub const BURST_GRAVITY: f64 = 0.03;

/// The moving input point driving ambient emission
#[derive(Clone, Copy, Debug)]
pub struct EmitterState {
    pub x: f64,
    pub y: f64,
    /// Wall-clock time of the last accepted ambient emission in ms
    /// (None = never)
    pub last_emit_ms: Option<f64>,
}

impl EmitterState {
    /// Starts off-screen so nothing renders before the first move
    pub fn new() -> Self {
        Self {
            x: -100.0,
            y: -100.0,
            last_emit_ms: None,
        }
    }
}

impl Default for EmitterState {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn `count` ambient particles jittered around `origin`.
pub fn emit_ambient(
    out: &mut Vec<Particle>,
    rng: &mut Xorshift32,
    origin: (f64, f64),
    count: u32,
    base_size: f64,
    palette: &[Rgb],
) {
    for _ in 0..count {
        out.push(Particle {
            x: origin.0 + rng.range(-10.0, 10.0),
            y: origin.1 + rng.range(-10.0, 10.0),
            vx: rng.range(-1.5, 1.5),
            vy: rng.range(-1.5, 1.5),
            life: 1.0,
            decay: rng.range(0.008, 0.02),
            size: rng.range(base_size, base_size * 2.0),
            color: palette[rng.index(palette.len())],
            trail: Vec::with_capacity(crate::particle::MAX_TRAIL),
            angle: rng.range(0.0, TAU),
            spin: rng.range(-0.075, 0.075),
            kind: ParticleKind::Ambient,
        });
    }
}

/// Spawn a full burst ring at `origin`: [`BURST_COUNT`] particles at equal
/// angular spacing, each launched outward along its own angle.
pub fn emit_burst(
    out: &mut Vec<Particle>,
    rng: &mut Xorshift32,
    origin: (f64, f64),
    base_size: f64,
    palette: &[Rgb],
) {
    for i in 0..BURST_COUNT {
        let angle = TAU * i as f64 / BURST_COUNT as f64;
        let speed = rng.range(2.0, 7.0);

        out.push(Particle {
            x: origin.0,
            y: origin.1,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            life: 1.0,
            decay: rng.range(0.004, 0.012),
            size: rng.range(base_size * 1.5, base_size * 2.5),
            color: palette[rng.index(palette.len())],
            trail: Vec::with_capacity(crate::particle::MAX_TRAIL),
            angle,
            spin: rng.range(-0.1, 0.1),
            kind: ParticleKind::Burst {
                gravity: BURST_GRAVITY,
            },
        });
    }
}
