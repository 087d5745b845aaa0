//! Tick metrics and structured logging setup.

use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Running statistics for one engine instance.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    tick_count: u64,
    population: usize,
    glyphs_written: u64,
    last_tick: Duration,
    total_tick_time: Duration,
    log_interval: u64,
}

impl Metrics {
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            log_interval,
            ..Self::default()
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&mut self, duration: Duration, population: usize) {
        self.tick_count += 1;
        self.population = population;
        self.last_tick = duration;
        self.total_tick_time += duration;

        if self.log_interval > 0 && self.tick_count % self.log_interval == 0 {
            tracing::info!(
                tick = self.tick_count,
                population = population,
                duration_us = duration.as_micros() as u64,
                mean_us = self.mean_tick().as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    pub fn record_glyphs(&mut self, count: usize) {
        self.glyphs_written += count as u64;
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.population
    }

    #[must_use]
    pub fn glyphs_written(&self) -> u64 {
        self.glyphs_written
    }

    #[must_use]
    pub fn last_tick(&self) -> Duration {
        self.last_tick
    }

    #[must_use]
    pub fn mean_tick(&self) -> Duration {
        match u32::try_from(self.tick_count) {
            Ok(0) => Duration::ZERO,
            Ok(n) => self.total_tick_time / n,
            Err(_) => Duration::from_secs_f64(
                self.total_tick_time.as_secs_f64() / self.tick_count as f64,
            ),
        }
    }
}

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` wins over `default_level`. Output goes to stderr so stdout
/// stays free for rendered boards.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
