//! Dot trail - the simple cursor variant
//!
//! Keeps a short most-recent-first history of pointer positions and
//! renders it as a line of shrinking, fading discs. No simulation: the
//! trail is pure position history.

use crate::color::Rgb;
use crate::render::Surface;

/// History length including the live cursor position
pub const MAX_POSITIONS: usize = 10;

/// Bounded pointer position history, most recent first
pub struct DotTrail {
    positions: Vec<(f64, f64)>,
}

impl DotTrail {
    pub fn new() -> Self {
        Self {
            positions: Vec::with_capacity(MAX_POSITIONS),
        }
    }

    pub fn positions(&self) -> &[(f64, f64)] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Record a new pointer position, dropping the oldest past the cap.
    pub fn push(&mut self, x: f64, y: f64) {
        if self.positions.len() >= MAX_POSITIONS {
            self.positions.pop();
        }
        self.positions.insert(0, (x, y));
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    /// Draw the trail. Index 0 is the live cursor dot at full size; each
    /// older entry shrinks and fades linearly to nothing.
    pub fn draw(&self, surface: &mut Surface, color: Rgb, base_size: f64) {
        surface.clear();

        for (i, &(x, y)) in self.positions.iter().enumerate() {
            let fade = 1.0 - i as f64 / MAX_POSITIONS as f64;
            surface.fill_circle(x, y, base_size * fade * 0.5, color, fade);
        }
    }
}

impl Default for DotTrail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::TRAIL_COLOR;

    #[test]
    fn history_is_bounded_and_most_recent_first() {
        let mut trail = DotTrail::new();
        for i in 0..25 {
            trail.push(f64::from(i), 0.0);
        }
        assert_eq!(trail.len(), MAX_POSITIONS);
        assert_eq!(trail.positions()[0], (24.0, 0.0));
        assert_eq!(trail.positions()[MAX_POSITIONS - 1], (15.0, 0.0));
    }

    #[test]
    fn draw_puts_largest_dot_at_newest_position() {
        let mut trail = DotTrail::new();
        for i in 0..10 {
            trail.push(10.0 + f64::from(i) * 5.0, 32.0);
        }

        let mut surface = Surface::new(64, 64);
        trail.draw(&mut surface, TRAIL_COLOR, 8.0);

        // Newest position (55, 32) rendered
        let newest = surface.pixels()[32 * 64 + 55];
        assert_ne!(newest, 0);
        // Newest dot is more opaque than an older one
        let older = surface.pixels()[32 * 64 + 25];
        assert!(newest >> 24 >= older >> 24);
    }
}
