use glyphlife_lib::engine::patterns::Pattern;
use glyphlife_lib::engine::{EngineConfig, LifeRule, Seeding, Universe};

type UniverseMod = Box<dyn FnOnce(&mut Universe)>;

/// Builds small, empty, seeded universes with `#`/`.` glyphs so rendered
/// boards are easy to read in assertions.
#[allow(dead_code)]
pub struct UniverseBuilder {
    config: EngineConfig,
    mods: Vec<UniverseMod>,
}

#[allow(dead_code)]
impl UniverseBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        let mut config = EngineConfig::default();
        config.world.width = width;
        config.world.height = height;
        config.world.seed = Some(42);
        config.world.seeding = Seeding::Empty;
        config.render.alive_glyph = '#';
        config.render.dead_glyph = '.';
        config.metrics.log_interval = 0;
        Self {
            config,
            mods: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_rule(mut self, rule: LifeRule) -> Self {
        self.config.rules.rule = rule;
        self
    }

    pub fn with_seeding(mut self, seeding: Seeding) -> Self {
        self.config.world.seeding = seeding;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut EngineConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_cells(mut self, cells: &[(i64, i64)]) -> Self {
        let cells = cells.to_vec();
        self.mods.push(Box::new(move |u| u.set_cells(&cells)));
        self
    }

    pub fn with_pattern(mut self, pattern: &'static Pattern, x: i64, y: i64) -> Self {
        self.mods
            .push(Box::new(move |u| u.insert_pattern(pattern, x, y)));
        self
    }

    pub fn build(self) -> Universe {
        let mut universe =
            Universe::from_config(&self.config).expect("Failed to create universe in test builder");
        for modifier in self.mods {
            modifier(&mut universe);
        }
        universe
    }
}

/// Alive coordinates in scan order.
#[allow(dead_code)]
pub fn alive_cells(universe: &Universe) -> Vec<(i64, i64)> {
    let width = universe.width() as usize;
    universe
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_alive())
        .map(|(i, _)| ((i % width) as i64, (i / width) as i64))
        .collect()
}
