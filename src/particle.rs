//! Particle - a single simulated visual point
//!
//! Each particle carries position, velocity, a normalized remaining life
//! in [0, 1], a bounded recent-position trail and a rotation used by the
//! star renderer. Ambient and burst particles share the record; the kind
//! is a tagged variant so burst gravity is a required field rather than
//! an optional one.

use crate::color::Rgb;

/// Hard cap on trail history per particle (oldest dropped first)
pub const MAX_TRAIL: usize = 6;

/// One captured trail sample: position plus the life at capture time
#[derive(Clone, Copy, Debug)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub life: f64,
}

/// Particle variant. Burst particles fall, ambient particles drift on a
/// wave driven by the simulation clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParticleKind {
    Ambient,
    Burst { gravity: f64 },
}

/// A live particle owned by the simulation
#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// 1 = just born, dead at <= 0
    pub life: f64,
    /// Per-step life loss
    pub decay: f64,
    pub size: f64,
    pub color: Rgb,
    /// Most-recent-last history, capped at [`MAX_TRAIL`]
    pub trail: Vec<TrailPoint>,
    /// Rotation of the star shape (radians)
    pub angle: f64,
    /// Per-step rotation increment
    pub spin: f64,
    pub kind: ParticleKind,
}

impl Particle {
    /// Record the current position in the trail, dropping the oldest
    /// sample once the cap is reached.
    pub fn capture_trail(&mut self) {
        if self.trail.len() >= MAX_TRAIL {
            self.trail.remove(0);
        }
        self.trail.push(TrailPoint {
            x: self.x,
            y: self.y,
            life: self.life,
        });
    }
}
