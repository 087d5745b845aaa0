use anyhow::Result;
use glyphlife_core::{EngineConfig, Universe};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Terminal host state around one engine instance.
pub struct App {
    pub running: bool,
    pub paused: bool,
    pub universe: Universe,
    pub config: EngineConfig,
    /// Rolls the glyph count for each key press.
    pub key_rng: ChaCha8Rng,
    // FPS & Timing
    pub fps: f64,
    pub frame_count: u64,
    pub last_fps_update: Instant,
    // Layout tracking
    pub last_board_rect: Rect,
    /// Text of the frame currently on screen.
    pub last_frame: String,
}

impl App {
    pub fn new(config: EngineConfig) -> Result<Self> {
        let universe = Universe::from_config(&config)?;
        let key_rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self {
            running: true,
            paused: false,
            universe,
            config,
            key_rng,
            fps: 0.0,
            frame_count: 0,
            last_fps_update: Instant::now(),
            last_board_rect: Rect::default(),
            last_frame: String::new(),
        })
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.config.target_fps as f64)
    }
}
