//! The grid engine a host drives frame by frame: `render`, then `tick`, and
//! `write_glyphs` whenever a key arrives.

use crate::cell::Cell;
use crate::config::{EngineConfig, Seeding};
use crate::dimensions::Dimensions;
use crate::error::Result;
use crate::font;
use crate::grid::CellGrid;
use crate::metrics::Metrics;
use crate::overlay::GlyphOverlay;
use crate::patterns::{Pattern, GLIDER};
use crate::rules::LifeRule;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Point-in-time summary for hosts and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniverseStats {
    pub generation: u64,
    pub population: usize,
    pub glyphs: usize,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone)]
pub struct Universe {
    grid: CellGrid,
    overlay: GlyphOverlay,
    rule: LifeRule,
    spawn_chance: f64,
    glyph_lifetime: Option<u32>,
    alive_glyph: char,
    dead_glyph: char,
    generation: u64,
    rng: ChaCha8Rng,
    metrics: Metrics,
}

#[cfg(not(target_arch = "wasm32"))]
fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = std::time::Instant::now();
    let out = f();
    (out, start.elapsed())
}

// No monotonic clock on wasm32-unknown-unknown.
#[cfg(target_arch = "wasm32")]
fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    (f(), Duration::ZERO)
}

impl Universe {
    /// Default configuration at the given size.
    pub fn new(width: i64, height: i64) -> Result<Self> {
        let dims = Dimensions::new(width, height)?;
        Self::build(dims, &EngineConfig::default())
    }

    /// Size, rule, seeding and rendering all taken from `config`.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let dims = Dimensions::from_u32(config.world.width, config.world.height)?;
        Self::build(dims, config)
    }

    /// `config` with its world size replaced by `dims`.
    pub fn with_dimensions(dims: Dimensions, config: &EngineConfig) -> Result<Self> {
        Self::build(dims, config)
    }

    fn build(dims: Dimensions, config: &EngineConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut universe = Self {
            grid: CellGrid::new(dims)?,
            overlay: GlyphOverlay::new(dims.cell_count())?,
            rule: config.rules.rule,
            spawn_chance: config.rules.spawn_chance,
            glyph_lifetime: config.glyphs.lifetime,
            alive_glyph: config.render.alive_glyph,
            dead_glyph: config.render.dead_glyph,
            generation: 0,
            rng,
            metrics: Metrics::new(config.metrics.log_interval),
        };
        universe.seed(&config.world.seeding)?;

        tracing::debug!(
            width = dims.width(),
            height = dims.height(),
            rule = %universe.rule,
            population = universe.population(),
            "Universe created"
        );
        Ok(universe)
    }

    fn seed(&mut self, seeding: &Seeding) -> Result<()> {
        match seeding {
            Seeding::Empty => {}
            Seeding::Random { density } => {
                let density = density.clamp(0.0, 1.0);
                for idx in 0..self.grid.dims().cell_count() {
                    let alive = self.rng.gen_bool(density);
                    self.grid.set_index(idx, Cell::from(alive));
                }
            }
            Seeding::Banner { text } => {
                for (slot, ch) in text.chars().enumerate() {
                    self.print_letter(slot as u32, ch);
                }
            }
            Seeding::Pattern { name, x, y } => {
                let pattern = Pattern::by_name(name)?;
                self.insert_pattern(pattern, *x, *y);
            }
        }
        Ok(())
    }

    /// Advances one generation. Every cell reads the previous generation
    /// only; the new one becomes visible all at once.
    pub fn tick(&mut self) {
        let (_, duration) = timed(|| {
            let rule = self.rule;
            if self.spawn_chance > 0.0 {
                let dims = self.grid.dims();
                let chance = self.spawn_chance;
                let rng = &mut self.rng;
                self.grid.step(&rule, |_, next| {
                    for idx in 0..next.len() {
                        if rng.gen_bool(chance) {
                            spawn_glider(dims, next, idx);
                        }
                    }
                });
            } else {
                self.grid.step(&rule, |_, _| {});
            }
            self.overlay.age();
        });

        self.generation += 1;
        self.metrics.record_tick(duration, self.grid.population());
    }

    /// Runs `n` ticks.
    pub fn tick_n(&mut self, n: u64) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Paints `character` onto `count` distinct cells chosen uniformly at
    /// random, regardless of their state. `count` is clamped to the cell
    /// count. Only the rendered symbol changes; the life state does not.
    ///
    /// Control characters (`'\n'`, `'\r'`, `'\t'`, ...) are ignored, so the
    /// rendered text keeps one line per row and one symbol per cell.
    pub fn write_glyphs(&mut self, count: usize, character: char) {
        let cells = self.grid.dims().cell_count();
        let count = count.min(cells);
        if count == 0 || character.is_control() {
            return;
        }
        let picks = index::sample(&mut self.rng, cells, count);
        self.overlay.write(picks.into_iter(), character, self.glyph_lifetime);
        self.metrics.record_glyphs(count);
        tracing::debug!(count, character = %character, "Glyphs written");
    }

    /// Stamps `character` in the bitmap font at letter slot `slot`, as Alive cells.
    pub fn print_letter(&mut self, slot: u32, character: char) {
        font::stamp_letter(&mut self.grid, slot, character);
    }

    /// Text snapshot: one line per row, each terminated by `\n`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn width(&self) -> u32 {
        self.grid.dims().width()
    }

    pub fn height(&self) -> u32 {
        self.grid.dims().height()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.grid.dims()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn rule(&self) -> LifeRule {
        self.rule
    }

    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// State at a wrapped coordinate.
    pub fn cell(&self, x: i64, y: i64) -> Cell {
        self.grid.get(x, y)
    }

    /// Overlay glyph at a wrapped coordinate, if any.
    pub fn glyph(&self, x: i64, y: i64) -> Option<char> {
        let dims = self.grid.dims();
        if dims.is_empty() {
            return None;
        }
        self.overlay.get(dims.index(x, y))
    }

    pub fn live_neighbor_count(&self, x: i64, y: i64) -> u8 {
        self.grid.live_neighbor_count(x, y)
    }

    pub fn set_cell(&mut self, x: i64, y: i64, cell: Cell) {
        self.grid.set(x, y, cell);
    }

    pub fn toggle_cell(&mut self, x: i64, y: i64) {
        let cell = self.grid.get(x, y);
        self.grid.set(x, y, cell.toggled());
    }

    /// Sets every listed coordinate Alive.
    pub fn set_cells(&mut self, cells: &[(i64, i64)]) {
        for &(x, y) in cells {
            self.grid.set(x, y, Cell::Alive);
        }
    }

    /// Sets the pattern's cells Alive with its origin at the wrapped `(x, y)`.
    pub fn insert_pattern(&mut self, pattern: &Pattern, x: i64, y: i64) {
        let dims = self.grid.dims();
        if dims.is_empty() {
            return;
        }
        let (x, y) = dims.wrap(x, y);
        for &(dx, dy) in pattern.cells {
            self.grid.set(x + dx, y + dy, Cell::Alive);
        }
    }

    /// Kills every cell and removes all glyphs.
    pub fn clear(&mut self) {
        self.grid.fill(Cell::Dead);
        self.overlay.clear();
    }

    pub fn clear_glyphs(&mut self) {
        self.overlay.clear();
    }

    pub fn stats(&self) -> UniverseStats {
        UniverseStats {
            generation: self.generation,
            population: self.population(),
            glyphs: self.overlay.len(),
            width: self.width(),
            height: self.height(),
        }
    }
}

/// Glider anchored at `idx`, drawn into the next generation.
fn spawn_glider(dims: Dimensions, next: &mut [Cell], idx: usize) {
    let width = dims.width() as usize;
    let (x, y) = ((idx % width) as i64, (idx / width) as i64);
    for &(dx, dy) in GLIDER.cells {
        next[dims.index(x - 1 + dx, y - 1 + dy)] = Cell::Alive;
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let dims = self.grid.dims();
        let width = dims.width() as usize;
        if width == 0 {
            for _ in 0..dims.height() {
                writeln!(f)?;
            }
            return Ok(());
        }
        for (row, line) in self.grid.cells().chunks(width).enumerate() {
            for (col, &cell) in line.iter().enumerate() {
                let symbol = self
                    .overlay
                    .get(row * width + col)
                    .unwrap_or(match cell {
                        Cell::Alive => self.alive_glyph,
                        Cell::Dead => self.dead_glyph,
                    });
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
