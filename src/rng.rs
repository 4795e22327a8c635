//! Random number generator (xorshift32)
//!
//! Small, fast and deterministic. Quality is more than enough for visual
//! jitter, and deterministic seeding keeps tests reproducible.

/// Xorshift32 generator. State must never be zero.
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9 } else { seed },
        }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform f64 in [0, 1)
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX) * (1.0 - f64::EPSILON)
    }

    /// Uniform f64 in [lo, hi)
    #[inline]
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Uniform index in [0, len)
    #[inline]
    pub fn index(&mut self, len: usize) -> usize {
        // Fast-range reduction instead of `% len`
        ((u64::from(self.next_u32()) * len as u64) >> 32) as usize
    }
}
