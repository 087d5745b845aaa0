//! Configuration management for the engine and its hosts.
//!
//! All sections map onto a TOML file; every field has a default so a partial
//! file (or none at all) is valid.
//!
//! ## Example `glyphlife.toml`
//!
//! ```toml
//! target_fps = 30
//!
//! [world]
//! width = 120
//! height = 40
//! seed = 7
//! seeding = { kind = "random", density = 0.25 }
//!
//! [rules]
//! rule = "B36/S23"
//!
//! [render]
//! alive_glyph = "#"
//!
//! [glyphs]
//! lifetime = 20
//! ```

use crate::error::{EngineError, Result};
use crate::patterns::Pattern;
use crate::rules::LifeRule;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Initial population policy applied once at construction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Seeding {
    /// Every cell Dead.
    Empty,
    /// Each cell Alive with probability `density`, drawn from the engine RNG.
    Random { density: f64 },
    /// `text` stamped with the letter font, one character per slot.
    Banner { text: String },
    /// A single built-in pattern with its top-left corner at `(x, y)`.
    Pattern { name: String, x: i64, y: i64 },
}

impl Default for Seeding {
    fn default() -> Self {
        Seeding::Banner {
            text: "It works!".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub width: u32,
    pub height: u32,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub seeding: Seeding,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 50,
            seed: None,
            seeding: Seeding::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RulesConfig {
    pub rule: LifeRule,
    /// Per-cell, per-tick chance of a spontaneous glider.
    pub spawn_chance: f64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            rule: LifeRule::CONWAY,
            spawn_chance: 0.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RenderConfig {
    pub alive_glyph: char,
    pub dead_glyph: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            alive_glyph: '◼',
            dead_glyph: ' ',
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct GlyphConfig {
    /// Ticks a written glyph stays visible; `None` keeps it until cleared.
    pub lifetime: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct MetricsConfig {
    /// Log a summary every this many ticks; 0 disables the summary.
    pub log_interval: u64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { log_interval: 1000 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub world: WorldConfig,
    pub rules: RulesConfig,
    pub render: RenderConfig,
    pub glyphs: GlyphConfig,
    pub metrics: MetricsConfig,
    pub target_fps: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            rules: RulesConfig::default(),
            render: RenderConfig::default(),
            glyphs: GlyphConfig::default(),
            metrics: MetricsConfig::default(),
            target_fps: 60,
        }
    }
}

fn ensure(cond: bool, msg: &str) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(EngineError::invalid_config(msg))
    }
}

impl EngineConfig {
    /// Reads `path` if it exists, otherwise returns the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file missing, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration parameters, reporting the first failure.
    ///
    /// Grid size is not checked here: zero is a legal dimension and the
    /// engine reports allocation problems itself.
    pub fn validate(&self) -> Result<()> {
        match &self.world.seeding {
            Seeding::Random { density } => {
                ensure(
                    (0.0..=1.0).contains(density),
                    "Seeding density must be within [0.0, 1.0]",
                )?;
            }
            Seeding::Pattern { name, .. } => {
                Pattern::by_name(name)?;
            }
            Seeding::Empty | Seeding::Banner { .. } => {}
        }

        ensure(
            (0.0..=1.0).contains(&self.rules.spawn_chance),
            "Spawn chance must be within [0.0, 1.0]",
        )?;
        ensure(
            !self.render.alive_glyph.is_control() && !self.render.dead_glyph.is_control(),
            "Render glyphs must be printable",
        )?;
        ensure(
            self.render.alive_glyph != self.render.dead_glyph,
            "Alive and dead glyphs must differ",
        )?;
        ensure(
            self.glyphs.lifetime != Some(0),
            "Glyph lifetime must be at least one tick",
        )?;
        ensure(self.target_fps > 0, "Target FPS must be positive")?;
        ensure(self.target_fps <= 1000, "Target FPS too large (max 1000)")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        EngineConfig::default().validate().unwrap();
    }

    #[test]
    fn test_partial_toml() {
        let config = EngineConfig::from_toml(
            r##"
            target_fps = 30

            [world]
            width = 12
            seed = 9
            seeding = { kind = "random", density = 0.5 }

            [rules]
            rule = "B36/S23"

            [render]
            alive_glyph = "#"

            [glyphs]
            lifetime = 5
            "##,
        )
        .unwrap();
        assert_eq!(config.world.width, 12);
        assert_eq!(config.world.height, 50);
        assert_eq!(config.world.seed, Some(9));
        assert_eq!(config.world.seeding, Seeding::Random { density: 0.5 });
        assert_eq!(config.rules.rule, LifeRule::HIGH_LIFE);
        assert_eq!(config.render.alive_glyph, '#');
        assert_eq!(config.render.dead_glyph, ' ');
        assert_eq!(config.glyphs.lifetime, Some(5));
        assert_eq!(config.target_fps, 30);
    }

    #[test]
    fn test_pattern_seeding() {
        let config = EngineConfig::from_toml(
            r#"
            [world]
            seeding = { kind = "pattern", name = "glider", x = 4, y = 4 }
            "#,
        )
        .unwrap();
        assert!(matches!(config.world.seeding, Seeding::Pattern { .. }));
    }

    #[test]
    fn test_bad_rule_rejected() {
        let err = EngineConfig::from_toml("[rules]\nrule = \"B9/S\"\n").unwrap_err();
        assert!(matches!(err, EngineError::ConfigParse(_)));
    }

    #[test]
    fn test_validation_failures() {
        let mut config = EngineConfig::default();
        config.world.seeding = Seeding::Random { density: 1.5 };
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.rules.spawn_chance = -0.1;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.render.alive_glyph = '\n';
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.glyphs.lifetime = Some(0);
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.world.seeding = Seeding::Pattern {
            name: "nope".into(),
            x: 0,
            y: 0,
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::UnknownPattern(_))
        ));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = EngineConfig::load_from("/nonexistent/glyphlife.toml").unwrap();
        assert_eq!(config.world.width, 100);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let text = toml::to_string(&EngineConfig::default()).unwrap();
        let back = EngineConfig::from_toml(&text).unwrap();
        assert_eq!(back.rules.rule, LifeRule::CONWAY);
        assert_eq!(back.world.seeding, Seeding::default());
    }
}
