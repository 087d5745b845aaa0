use crate::app::state::App;
use crate::ui::renderer::BoardWidget;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use rand::Rng;

/// Upper bound (exclusive) of the glyph count rolled per key press.
pub const MAX_GLYPHS_PER_KEY: usize = 10;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false
            }
            KeyCode::Tab => self.paused = !self.paused,
            KeyCode::Backspace => self.universe.clear_glyphs(),
            KeyCode::Enter if self.paused => self.universe.tick(),
            KeyCode::Char(c) => {
                let count = self.key_rng.gen_range(0..MAX_GLYPHS_PER_KEY);
                self.universe.write_glyphs(count, c);
            }
            _ => {}
        }
    }

    /// Left click toggles the cell under the pointer, dragging paints Alive cells.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some((x, y)) =
            BoardWidget::screen_to_board(mouse.column, mouse.row, self.last_board_rect)
        else {
            return;
        };
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.universe.toggle_cell(x, y),
            MouseEventKind::Drag(MouseButton::Left) => self.universe.set_cells(&[(x, y)]),
            _ => {}
        }
    }
}
