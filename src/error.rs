//! Error types for overlay configuration.
//!
//! Everything here is recoverable: a rejected config leaves the previous
//! valid configuration in place and the overlay keeps running. Nothing in
//! the simulation or render path can fail.

use thiserror::Error;

/// Result type for configuration updates
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors raised while parsing or validating overlay configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Palette string was not a JSON array of color strings
    #[error("invalid palette JSON: {0}")]
    PaletteJson(String),

    /// A palette entry was not a `#RRGGBB` hex color
    #[error("invalid color `{0}`: expected #RRGGBB")]
    InvalidColor(String),

    /// A palette must keep at least one color
    #[error("palette must contain at least one color")]
    EmptyPalette,

    /// Numeric option outside its valid range
    #[error("{name} must be positive (got {value})")]
    NonPositive {
        /// Option name as exposed to the host
        name: &'static str,
        /// Rejected value
        value: f64,
    },
}
