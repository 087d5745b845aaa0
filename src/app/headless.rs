//! Runs the engine without a terminal: a fixed number of ticks, then one report.

use anyhow::Result;
use glyphlife_core::{Universe, UniverseStats};

/// What a headless run prints when it finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Board,
    Json,
}

pub fn run(universe: &mut Universe, ticks: u64, report: Report) -> Result<String> {
    tracing::info!(
        width = universe.width(),
        height = universe.height(),
        rule = %universe.rule(),
        ticks,
        "Headless run started"
    );

    let progress_every = (ticks / 10).max(1);
    for done in 1..=ticks {
        universe.tick();
        if done % progress_every == 0 {
            tracing::debug!(tick = done, population = universe.population(), "Progress");
        }
    }

    let stats: UniverseStats = universe.stats();
    tracing::info!(
        generation = stats.generation,
        population = stats.population,
        "Headless run finished"
    );

    Ok(match report {
        Report::Board => universe.render(),
        Report::Json => serde_json::to_string_pretty(&stats)?,
    })
}
