//! Renderer - immediate-mode software rasterizer
//!
//! Draws the particle set into a straight-alpha RGBA surface
//! (0xAABBGGRR packed u32 per pixel). The host blits the buffer to a
//! canvas via pointer + length, so nothing is copied on the Rust side.
//!
//! Per particle, in collection order (stable layering):
//! trail discs -> outer glow -> inner glow -> rotated 5-pointed star.

use std::f64::consts::TAU;

use crate::color::Rgb;
use crate::particle::Particle;

/// Alpha below this is skipped entirely (invisible, wasted blending)
const ALPHA_FLOOR: f64 = 0.01;

/// Star geometry: 5 points, inner vertices midway between outer ones
const STAR_POINTS: usize = 5;
const STAR_INNER_SCALE: f64 = 0.4;

/// Trail rendering scale factors
const TRAIL_ALPHA_SCALE: f64 = 0.4;
const TRAIL_SIZE_SCALE: f64 = 0.6;

/// Glow discs: (radius scale, alpha scale), outer first
const GLOW_LAYERS: [(f64, f64); 2] = [(2.5, 0.2), (1.8, 0.5)];

/// Core star fill opacity
const CORE_ALPHA: f64 = 0.9;

/// A drawable RGBA pixel surface
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; Self::buffer_len(width, height)],
        }
    }

    /// Pixel count, widened before multiplying so extreme dimensions
    /// cannot overflow u32
    fn buffer_len(width: u32, height: u32) -> usize {
        width as usize * height as usize
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Raw pointer for zero-copy host access
    pub fn pixels_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.pixels.len()
    }

    /// Clear to fully transparent
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Source-over blend of a straight-alpha color onto one pixel
    fn blend_pixel(&mut self, x: i32, y: i32, color: Rgb, alpha: f64) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;

        let dst = self.pixels[idx];
        let da = f64::from(dst >> 24) / 255.0;
        let sa = alpha.clamp(0.0, 1.0);

        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return;
        }

        let blend = |sc: u8, dc: u8| -> u32 {
            let s = f64::from(sc);
            let d = f64::from(dc);
            let c = (s * sa + d * da * (1.0 - sa)) / out_a;
            c.round().clamp(0.0, 255.0) as u32
        };

        let dr = (dst & 0xFF) as u8;
        let dg = ((dst >> 8) & 0xFF) as u8;
        let db = ((dst >> 16) & 0xFF) as u8;

        let a = (out_a * 255.0).round() as u32;
        self.pixels[idx] =
            (a << 24) | (blend(color.b, db) << 16) | (blend(color.g, dg) << 8) | blend(color.r, dr);
    }

    /// Fill a disc centered at (cx, cy)
    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb, alpha: f64) {
        if alpha < ALPHA_FLOOR || radius <= 0.0 {
            return;
        }
        let r2 = radius * radius;
        let x0 = (cx - radius).floor() as i32;
        let x1 = (cx + radius).ceil() as i32;
        let y0 = (cy - radius).floor() as i32;
        let y1 = (cy + radius).ceil() as i32;

        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = f64::from(px) + 0.5 - cx;
                let dy = f64::from(py) + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.blend_pixel(px, py, color, alpha);
                }
            }
        }
    }

    /// Fill an arbitrary polygon (even-odd rule). Vertices in order.
    pub fn fill_polygon(&mut self, vertices: &[(f64, f64)], color: Rgb, alpha: f64) {
        if alpha < ALPHA_FLOOR || vertices.len() < 3 {
            return;
        }

        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for &(x, y) in vertices {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        for py in min_y.floor() as i32..=max_y.ceil() as i32 {
            for px in min_x.floor() as i32..=max_x.ceil() as i32 {
                let sx = f64::from(px) + 0.5;
                let sy = f64::from(py) + 0.5;
                if point_in_polygon(sx, sy, vertices) {
                    self.blend_pixel(px, py, color, alpha);
                }
            }
        }
    }
}

/// Even-odd crossing test
fn point_in_polygon(x: f64, y: f64, vertices: &[(f64, f64)]) -> bool {
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (xi, yi) = vertices[i];
        let (xj, yj) = vertices[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Build the 10 vertices of a 5-pointed star around (cx, cy), rotated.
/// Outer vertices sit 72 degrees apart, inner vertices offset by 36.
fn star_vertices(cx: f64, cy: f64, size: f64, rotation: f64) -> [(f64, f64); STAR_POINTS * 2] {
    let mut vertices = [(0.0, 0.0); STAR_POINTS * 2];
    let inner_offset = TAU / (STAR_POINTS as f64 * 2.0);

    for i in 0..STAR_POINTS {
        let outer_angle = TAU * i as f64 / STAR_POINTS as f64 + rotation;
        let inner_angle = outer_angle + inner_offset;
        vertices[i * 2] = (cx + outer_angle.cos() * size, cy + outer_angle.sin() * size);
        vertices[i * 2 + 1] = (
            cx + inner_angle.cos() * size * STAR_INNER_SCALE,
            cy + inner_angle.sin() * size * STAR_INNER_SCALE,
        );
    }
    vertices
}

/// Draw the full particle set. Clears the frame first.
pub fn draw_particles(surface: &mut Surface, particles: &[Particle]) {
    surface.clear();

    for p in particles {
        // Life can transiently sit at <= 0 before removal
        let alpha = p.life.max(0.0);

        // Trail, oldest to newest, fading in
        let trail_len = p.trail.len();
        for (i, point) in p.trail.iter().enumerate() {
            let t = i as f64 / trail_len as f64;
            let trail_alpha = alpha * t * TRAIL_ALPHA_SCALE;
            if trail_alpha > ALPHA_FLOOR {
                surface.fill_circle(point.x, point.y, p.size * t * TRAIL_SIZE_SCALE, p.color, trail_alpha);
            }
        }

        // Concentric glow discs
        for (radius_scale, alpha_scale) in GLOW_LAYERS {
            surface.fill_circle(p.x, p.y, p.size * radius_scale, p.color, alpha * alpha_scale);
        }

        // Rotated star core
        let vertices = star_vertices(p.x, p.y, p.size, p.angle);
        surface.fill_polygon(&vertices, p.color, alpha * CORE_ALPHA);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::DEFAULT_PALETTE;
    use crate::particle::{Particle, ParticleKind, TrailPoint};

    fn particle_at(x: f64, y: f64, life: f64) -> Particle {
        Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            life,
            decay: 0.01,
            size: 4.0,
            color: DEFAULT_PALETTE[0],
            trail: Vec::new(),
            angle: 0.0,
            spin: 0.0,
            kind: ParticleKind::Ambient,
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn buffer_len_survives_extreme_dimensions() {
        // Would overflow if multiplied in u32 (needs a 64-bit usize to
        // represent, which is fine: such a surface can only be asked
        // for on a 64-bit host)
        assert_eq!(Surface::buffer_len(100_000, 100_000), 10_000_000_000);
        assert_eq!(Surface::buffer_len(0, 100_000), 0);
    }

    #[test]
    fn clear_makes_surface_transparent() {
        let mut surface = Surface::new(8, 8);
        surface.fill_circle(4.0, 4.0, 3.0, DEFAULT_PALETTE[0], 1.0);
        assert!(surface.pixels().iter().any(|&p| p != 0));
        surface.clear();
        assert!(surface.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn circle_stays_within_radius() {
        let mut surface = Surface::new(32, 32);
        surface.fill_circle(16.0, 16.0, 4.0, DEFAULT_PALETTE[0], 1.0);

        for y in 0..32u32 {
            for x in 0..32u32 {
                let px = surface.pixels()[(y * 32 + x) as usize];
                if px != 0 {
                    let dx = f64::from(x) + 0.5 - 16.0;
                    let dy = f64::from(y) + 0.5 - 16.0;
                    assert!(dx * dx + dy * dy <= 16.0 + 1e-9);
                }
            }
        }
    }

    #[test]
    fn out_of_bounds_drawing_is_clipped() {
        let mut surface = Surface::new(16, 16);
        surface.fill_circle(-5.0, -5.0, 4.0, DEFAULT_PALETTE[0], 1.0);
        surface.fill_circle(100.0, 8.0, 10.0, DEFAULT_PALETTE[1], 1.0);
        // No panic, nothing visible
        assert!(surface.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn star_covers_center_and_respects_size() {
        let vertices = star_vertices(0.0, 0.0, 10.0, 0.3);
        assert!(point_in_polygon(0.0, 0.0, &vertices));
        for &(x, y) in &vertices {
            assert!((x * x + y * y).sqrt() <= 10.0 + 1e-9);
        }
    }

    #[test]
    fn draw_clamps_negative_life() {
        let mut surface = Surface::new(32, 32);
        let mut p = particle_at(16.0, 16.0, -0.5);
        p.trail.push(TrailPoint { x: 16.0, y: 16.0, life: -0.5 });
        draw_particles(&mut surface, &[p]);
        assert!(surface.pixels().iter().all(|&px| px == 0));
    }

    #[test]
    fn draw_renders_live_particle_near_its_position() {
        let mut surface = Surface::new(64, 64);
        let p = particle_at(32.0, 32.0, 1.0);
        draw_particles(&mut surface, &[p]);

        let center = surface.pixels()[32 * 64 + 32];
        assert_ne!(center, 0);
        // Far corner untouched by a size-4 particle
        assert_eq!(surface.pixels()[0], 0);
    }

    #[test]
    fn blending_accumulates_alpha() {
        let mut surface = Surface::new(4, 4);
        surface.fill_circle(2.0, 2.0, 1.0, DEFAULT_PALETTE[0], 0.4);
        let first = surface.pixels()[2 * 4 + 2] >> 24;
        surface.fill_circle(2.0, 2.0, 1.0, DEFAULT_PALETTE[0], 0.4);
        let second = surface.pixels()[2 * 4 + 2] >> 24;
        assert!(second > first);
        assert!(second <= 255);
    }
}
