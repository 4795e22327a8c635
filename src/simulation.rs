//! Simulation - per-frame particle integration
//!
//! One `advance()` per display-refresh tick:
//! - position integration, gravity (burst) or wave forcing (ambient)
//! - isotropic drag
//! - trail capture, life decay, rotation
//! - removal of dead particles in the same pass
//!
//! The live set is hard-capped: spawning past 150 particles truncates to
//! the most recent 120. Single-threaded by design; the host's refresh
//! callback is the only driver, so ticks never overlap.

use crate::color::Rgb;
use crate::emitter;
use crate::particle::{Particle, ParticleKind};
use crate::rng::Xorshift32;

/// Simulated seconds added to the wave clock per tick (~60 fps frame)
pub const TIME_STEP: f64 = 0.016;

/// Velocity retained per step on both axes
pub const DRAG: f64 = 0.99;

/// Amplitude of the ambient wave forcing
pub const WAVE_FORCE: f64 = 0.01;

/// Spawning past this count triggers truncation
pub const MAX_PARTICLES: usize = 150;

/// Particles kept (most recent first-class) after truncation
pub const TRUNCATE_TO: usize = 120;

/// The live particle set plus the clock that phases ambient drift
pub struct Simulation {
    particles: Vec<Particle>,
    clock: f64,
    frame: u64,
}

impl Simulation {
    pub fn new() -> Self {
        Self {
            particles: Vec::with_capacity(MAX_PARTICLES),
            clock: 0.0,
            frame: 0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Spawn ambient particles at `origin` and apply the population cap.
    pub fn spawn_ambient(
        &mut self,
        rng: &mut Xorshift32,
        origin: (f64, f64),
        count: u32,
        base_size: f64,
        palette: &[Rgb],
    ) {
        emitter::emit_ambient(&mut self.particles, rng, origin, count, base_size, palette);
        self.apply_population_cap();
    }

    /// Spawn a click burst at `origin` and apply the population cap.
    pub fn spawn_burst(
        &mut self,
        rng: &mut Xorshift32,
        origin: (f64, f64),
        base_size: f64,
        palette: &[Rgb],
    ) {
        emitter::emit_burst(&mut self.particles, rng, origin, base_size, palette);
        self.apply_population_cap();
    }

    /// Advance every live particle one time-step, then the clock.
    ///
    /// Removal happens in the same pass a particle crosses life <= 0,
    /// without disturbing the update of still-live particles.
    pub fn advance(&mut self) {
        let clock = self.clock;

        self.particles.retain_mut(|p| {
            p.x += p.vx;
            p.y += p.vy;

            match p.kind {
                ParticleKind::Burst { gravity } => {
                    p.vy += gravity;
                }
                ParticleKind::Ambient => {
                    // Subtle wave drift, phased by the shared clock
                    p.vx += (clock + p.angle).sin() * WAVE_FORCE;
                    p.vy += (clock + p.angle).cos() * WAVE_FORCE;
                }
            }

            p.vx *= DRAG;
            p.vy *= DRAG;

            p.capture_trail();

            p.life -= p.decay;
            p.angle += p.spin;

            p.life > 0.0
        });

        self.clock += TIME_STEP;
        self.frame += 1;
    }

    /// Drop everything and restart the clock.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.clock = 0.0;
        self.frame = 0;
    }

    /// Oldest-first truncation once the hard cap is exceeded. Keeps the
    /// most recently added [`TRUNCATE_TO`] particles.
    fn apply_population_cap(&mut self) {
        if self.particles.len() > MAX_PARTICLES {
            let excess = self.particles.len() - TRUNCATE_TO;
            self.particles.drain(..excess);
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::DEFAULT_PALETTE;
    use crate::particle::MAX_TRAIL;

    fn test_particle(decay: f64, kind: ParticleKind) -> Particle {
        Particle {
            x: 100.0,
            y: 100.0,
            vx: 0.5,
            vy: -0.5,
            life: 1.0,
            decay,
            size: 4.0,
            color: DEFAULT_PALETTE[0],
            trail: Vec::new(),
            angle: 0.0,
            spin: 0.01,
            kind,
        }
    }

    #[test]
    fn life_is_monotonically_non_increasing() {
        let mut sim = Simulation::new();
        sim.particles.push(test_particle(0.01, ParticleKind::Ambient));

        let mut last = 1.0;
        for _ in 0..50 {
            sim.advance();
            if let Some(p) = sim.particles().first() {
                assert!(p.life <= last);
                last = p.life;
            }
        }
    }

    #[test]
    fn dead_particles_are_removed_in_the_crossing_step() {
        let mut sim = Simulation::new();
        sim.particles.push(test_particle(0.012, ParticleKind::Ambient));

        // 1 / 0.012 rounds up to 84 steps
        for _ in 0..84 {
            sim.advance();
        }
        assert!(sim.is_empty());
    }

    #[test]
    fn removal_does_not_disturb_live_particles() {
        let mut sim = Simulation::new();
        sim.particles.push(test_particle(2.0, ParticleKind::Ambient)); // dies immediately
        let mut survivor = test_particle(0.001, ParticleKind::Ambient);
        survivor.x = 42.0;
        sim.particles.push(survivor);

        sim.advance();

        assert_eq!(sim.len(), 1);
        let p = &sim.particles()[0];
        // Survivor still got its position integration this step
        assert!((p.x - 42.5).abs() < 1e-9);
        assert_eq!(p.trail.len(), 1);
    }

    #[test]
    fn trail_never_exceeds_cap() {
        let mut sim = Simulation::new();
        sim.particles.push(test_particle(0.001, ParticleKind::Ambient));

        for _ in 0..200 {
            sim.advance();
            for p in sim.particles() {
                assert!(p.trail.len() <= MAX_TRAIL);
            }
        }
        // Long-lived particle actually reached the cap
        assert_eq!(sim.particles()[0].trail.len(), MAX_TRAIL);
    }

    #[test]
    fn trail_drops_oldest_first() {
        let mut sim = Simulation::new();
        let mut p = test_particle(0.0001, ParticleKind::Ambient);
        p.vx = 1.0;
        p.vy = 0.0;
        p.spin = 0.0;
        sim.particles.push(p);

        for _ in 0..MAX_TRAIL + 3 {
            sim.advance();
        }

        let trail = &sim.particles()[0].trail;
        // Insertion order is most-recent-last
        for w in trail.windows(2) {
            assert!(w[0].x < w[1].x);
            assert!(w[0].life >= w[1].life);
        }
    }

    #[test]
    fn population_cap_truncates_oldest() {
        let mut sim = Simulation::new();
        let mut rng = Xorshift32::new(99);

        // 75 spawns of 2 particles sit exactly at the cap
        for i in 0..75 {
            sim.spawn_ambient(&mut rng, (f64::from(i), 0.0), 2, 4.0, &DEFAULT_PALETTE);
            assert!(sim.len() <= MAX_PARTICLES);
        }
        assert_eq!(sim.len(), MAX_PARTICLES);

        // One more spawn crosses the cap and truncates to the newest 120
        sim.spawn_ambient(&mut rng, (999.0, 0.0), 2, 4.0, &DEFAULT_PALETTE);
        assert_eq!(sim.len(), TRUNCATE_TO);

        // Survivors all come from spawn 16 onward (jitter is at most 10)
        assert!(sim.particles().iter().all(|p| p.x > 5.0));
        // The newest spawn survived
        assert!(sim.particles().iter().any(|p| p.x > 900.0));
    }

    #[test]
    fn burst_gravity_accumulates_against_drag_only_baseline() {
        let mut sim = Simulation::new();
        let mut rng = Xorshift32::new(1);
        sim.spawn_burst(&mut rng, (100.0, 100.0), 4.0, &DEFAULT_PALETTE);

        let initial_vy: Vec<f64> = sim.particles().iter().map(|p| p.vy).collect();

        for _ in 0..50 {
            sim.advance();
        }

        // Every survivor's vy exceeds what drag alone would have left
        let drag_only = DRAG.powi(50);
        for (p, vy0) in sim.particles().iter().zip(&initial_vy) {
            assert!(p.vy > vy0 * drag_only);
        }
    }

    #[test]
    fn ambient_wave_forcing_moves_a_resting_particle() {
        let mut sim = Simulation::new();
        let mut p = test_particle(0.0001, ParticleKind::Ambient);
        p.vx = 0.0;
        p.vy = 0.0;
        p.angle = 1.0;
        p.spin = 0.0;
        sim.particles.push(p);

        for _ in 0..10 {
            sim.advance();
        }
        let p = &sim.particles()[0];
        assert!(p.vx.abs() > 0.0 || p.vy.abs() > 0.0);
    }

    #[test]
    fn clock_advances_by_fixed_step() {
        let mut sim = Simulation::new();
        sim.advance();
        sim.advance();
        assert!((sim.clock() - 2.0 * TIME_STEP).abs() < 1e-12);
        assert_eq!(sim.frame(), 2);
    }
}
