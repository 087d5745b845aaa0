use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, terminal,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};

/// Raw-mode alternate screen with mouse capture, restored on exit or drop.
pub struct Tui {
    pub terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self {
            terminal,
            active: false,
        })
    }

    pub fn init(&mut self) -> Result<()> {
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        terminal::enable_raw_mode()?;
        self.active = true;
        self.terminal.clear()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if self.active {
            restore()?;
            self.active = false;
        }
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Board size that fills the terminal inside the border, above the status line.
    pub fn board_size() -> Result<(u32, u32)> {
        let (cols, rows) = terminal::size()?;
        Ok((
            u32::from(cols.saturating_sub(2)),
            u32::from(rows.saturating_sub(3)),
        ))
    }
}

fn restore() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(
        io::stdout(),
        terminal::LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )
}

impl Drop for Tui {
    fn drop(&mut self) {
        if self.active {
            let _ = restore();
        }
    }
}
