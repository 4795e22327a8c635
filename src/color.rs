//! Color handling - hex parsing, palettes, pixel packing
//!
//! Pixels are packed as 0xAABBGGRR (little-endian RGBA bytes), the layout
//! `putImageData` expects when the host views WASM memory as a
//! Uint8ClampedArray.

use crate::error::{ConfigError, ConfigResult};

/// An opaque RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Default 10-entry palette for the particle cursor
pub const DEFAULT_PALETTE: [Rgb; 10] = [
    Rgb { r: 0xFF, g: 0x6B, b: 0x6B },
    Rgb { r: 0x4E, g: 0xCD, b: 0xC4 },
    Rgb { r: 0x45, g: 0xB7, b: 0xD1 },
    Rgb { r: 0x96, g: 0xCE, b: 0xB4 },
    Rgb { r: 0xFF, g: 0xEA, b: 0xA7 },
    Rgb { r: 0xDD, g: 0xA0, b: 0xDD },
    Rgb { r: 0x98, g: 0xD8, b: 0xC8 },
    Rgb { r: 0xF7, g: 0xDC, b: 0x6F },
    Rgb { r: 0xBB, g: 0x8F, b: 0xCE },
    Rgb { r: 0x85, g: 0xC1, b: 0xE9 },
];

/// Default dot-trail cursor color (#2196F3)
pub const TRAIL_COLOR: Rgb = Rgb { r: 0x21, g: 0x96, b: 0xF3 };

impl Rgb {
    /// Parse a `#RRGGBB` hex string
    pub fn from_hex(s: &str) -> ConfigResult<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(s.to_string()));
        }
        let parse =
            |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ConfigError::InvalidColor(s.to_string()));
        Ok(Self {
            r: parse(0)?,
            g: parse(2)?,
            b: parse(4)?,
        })
    }

    /// Pack with an alpha byte into 0xAABBGGRR
    #[inline]
    pub fn pack(self, a: u8) -> u32 {
        (u32::from(a) << 24) | (u32::from(self.b) << 16) | (u32::from(self.g) << 8) | u32::from(self.r)
    }
}

/// Parse a palette from a JSON array of hex strings, e.g. `["#FF6B6B", "#4ECDC4"]`
pub fn parse_palette_json(json: &str) -> ConfigResult<Vec<Rgb>> {
    let entries: Vec<String> =
        serde_json::from_str(json).map_err(|e| ConfigError::PaletteJson(e.to_string()))?;
    if entries.is_empty() {
        return Err(ConfigError::EmptyPalette);
    }
    entries.iter().map(|s| Rgb::from_hex(s)).collect()
}
