pub mod headless;
pub mod input;
pub mod state;

pub use state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::ui::renderer::BoardWidget;
use crate::ui::tui::Tui;

impl App {
    /// Frame loop: render the current generation, then tick, pacing to
    /// `target_fps`. Key and mouse events are drained between frames.
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Ctrl+C received, shutting down");
            shutdown_clone.store(true, Ordering::SeqCst);
        });

        let frame_interval = self.frame_interval();
        while self.running && !shutdown.load(Ordering::SeqCst) {
            let frame_start = Instant::now();

            self.last_frame = self.universe.render();
            tui.terminal.draw(|f| self.draw(f))?;

            self.frame_count += 1;
            if self.last_fps_update.elapsed() >= Duration::from_secs(1) {
                self.fps = self.frame_count as f64 / self.last_fps_update.elapsed().as_secs_f64();
                self.frame_count = 0;
                self.last_fps_update = Instant::now();
            }

            if !self.paused {
                self.universe.tick();
            }

            // Spend the rest of the frame budget waiting for input.
            loop {
                let left = frame_interval.saturating_sub(frame_start.elapsed());
                if left.is_zero() || !event::poll(left)? {
                    break;
                }
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
                if !self.running {
                    break;
                }
            }
        }

        tracing::info!(
            generation = self.universe.generation(),
            population = self.universe.population(),
            "Terminal session ended"
        );
        Ok(())
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());

        self.last_board_rect = layout[0];
        f.render_widget(
            BoardWidget::new(&self.last_frame, &self.universe),
            layout[0],
        );

        let stats = self.universe.stats();
        let status = format!(
            " {}x{} | rule {} | pop {} | glyphs {} | {:.0} fps{} | type to paint, Tab pause, Esc quit",
            stats.width,
            stats.height,
            self.universe.rule(),
            stats.population,
            stats.glyphs,
            self.fps,
            if self.paused { " | PAUSED" } else { "" },
        );
        f.render_widget(
            Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
            layout[1],
        );
    }
}
