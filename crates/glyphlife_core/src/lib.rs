//! # Glyphlife Core
//!
//! A toroidal Game-of-Life engine built to be driven one frame at a time by
//! an external host: render the board as text, advance one generation, and
//! paint glyphs onto it when the user types.
//!
//! This crate contains:
//! - Validated dimensions and a double-buffered byte-per-cell grid
//! - Life-like rules in `B/S` notation (Conway by default)
//! - A display-only glyph overlay
//! - Letter stamping with a 6x8 bitmap font
//! - Seeded, reproducible randomness (`ChaCha8Rng`)
//! - TOML configuration, metrics and structured logging
//!
//! ## Example
//!
//! ```
//! use glyphlife_core::{EngineConfig, Seeding, Universe};
//!
//! let mut config = EngineConfig::default();
//! config.world.width = 8;
//! config.world.height = 8;
//! config.world.seed = Some(42);
//! config.world.seeding = Seeding::Empty;
//!
//! let mut universe = Universe::from_config(&config).unwrap();
//! universe.set_cells(&[(1, 2), (2, 2), (3, 2)]);
//! let before = universe.render();
//! universe.tick();
//! universe.tick();
//! assert_eq!(universe.render(), before);
//! ```

/// Alive/Dead cell state
pub mod cell;
/// Configuration management for engine and host parameters
pub mod config;
/// Validated grid sizes
pub mod dimensions;
/// Error types
pub mod error;
/// Letter stamping with the 6x8 font
pub mod font;
/// Double-buffered toroidal cell storage
pub mod grid;
/// Tick metrics and logging setup
pub mod metrics;
/// Display-only glyph overlay
pub mod overlay;
/// Built-in seed patterns
pub mod patterns;
/// Birth/survival rules
pub mod rules;
/// The engine
pub mod universe;

pub use cell::Cell;
pub use config::{EngineConfig, Seeding};
pub use dimensions::Dimensions;
pub use error::{EngineError, Result};
pub use metrics::{init_logging, Metrics};
pub use patterns::Pattern;
pub use rules::LifeRule;
pub use universe::{Universe, UniverseStats};
