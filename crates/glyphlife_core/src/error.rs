//! Error types for the glyphlife engine.
//!
//! Only construction and configuration can fail. Stepping, rendering and the
//! glyph/letter mutations clamp or wrap their inputs instead of erroring.

use thiserror::Error;

/// Main error type for engine operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Width or height is negative, non-finite, too large, or overflows the cell count
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// The grid buffers could not be reserved
    #[error("Allocation failure: could not reserve {cells} cells")]
    AllocationFailure { cells: usize },

    /// Malformed birth/survival rule
    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    /// A configuration value is out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// No built-in pattern with this name
    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),

    /// File system errors while loading configuration
    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Creates a new dimension error for the given raw inputs.
    #[must_use]
    pub fn invalid_dimensions(
        width: impl std::fmt::Display,
        height: impl std::fmt::Display,
        reason: &str,
    ) -> Self {
        Self::InvalidDimensions(format!("{width}x{height} ({reason})"))
    }

    /// Creates a new rule error.
    #[must_use]
    pub fn invalid_rule<S: Into<String>>(msg: S) -> Self {
        Self::InvalidRule(msg.into())
    }

    /// Creates a new config error.
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Returns true for the errors that reject a grid size.
    #[must_use]
    pub fn is_invalid_dimensions(&self) -> bool {
        matches!(self, Self::InvalidDimensions(_))
    }
}
