use glyphlife_core::{Cell, Universe};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Widget};

/// Draws the text produced by `Universe::render` inside a bordered block.
/// Colours come from the universe itself: painted glyphs are yellow and
/// Alive cells green, whatever symbols they happen to use. Anything that
/// does not fit the area is cut off.
pub struct BoardWidget<'a> {
    board: &'a str,
    universe: &'a Universe,
}

impl<'a> BoardWidget<'a> {
    pub fn new(board: &'a str, universe: &'a Universe) -> Self {
        Self { board, universe }
    }

    pub fn get_inner_area(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    /// Board coordinate under a terminal cell, if it lies inside the board area.
    pub fn screen_to_board(screen_x: u16, screen_y: u16, area: Rect) -> Option<(i64, i64)> {
        let inner = Self::get_inner_area(area);
        if screen_x >= inner.left()
            && screen_x < inner.right()
            && screen_y >= inner.top()
            && screen_y < inner.bottom()
        {
            Some((
                i64::from(screen_x - inner.x),
                i64::from(screen_y - inner.y),
            ))
        } else {
            None
        }
    }

    fn style_at(&self, x: i64, y: i64) -> Style {
        if self.universe.glyph(x, y).is_some() {
            Style::default().fg(Color::Yellow)
        } else if self.universe.cell(x, y) == Cell::Alive {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        }
    }
}

impl<'a> Widget for BoardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(format!(
                "Glyphlife (Generation: {})",
                self.universe.generation()
            ))
            .borders(Borders::ALL)
            .render(area, buf);

        let inner = Self::get_inner_area(area);
        for (dy, line) in self.board.lines().take(inner.height as usize).enumerate() {
            for (dx, symbol) in line.chars().take(inner.width as usize).enumerate() {
                let x = inner.x + dx as u16;
                let y = inner.y + dy as u16;
                if let Some(cell) = buf.cell_mut((x, y)) {
                    let mut encoded = [0u8; 4];
                    cell.set_symbol(symbol.encode_utf8(&mut encoded))
                        .set_style(self.style_at(dx as i64, dy as i64));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphlife_core::{EngineConfig, Seeding};

    fn universe(width: u32, height: u32) -> Universe {
        let mut config = EngineConfig::default();
        config.world.width = width;
        config.world.height = height;
        config.world.seed = Some(5);
        config.world.seeding = Seeding::Empty;
        config.render.alive_glyph = '#';
        config.render.dead_glyph = '.';
        Universe::from_config(&config).unwrap()
    }

    fn draw(universe: &Universe, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        let board = universe.render();
        BoardWidget::new(&board, universe).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_widget_draws_board() {
        let mut u = universe(3, 2);
        u.set_cell(0, 0, Cell::Alive);
        let buf = draw(&u, Rect::new(0, 0, 6, 4));
        assert_eq!(buf[(1, 1)].symbol(), "#");
        assert_eq!(buf[(1, 1)].fg, Color::Green);
        assert_eq!(buf[(2, 2)].symbol(), ".");
        assert_eq!(buf[(2, 2)].fg, Color::Reset);
    }

    #[test]
    fn test_glyph_colour_ignores_symbol() {
        // Glyphs that look exactly like the alive or dead symbol are still glyphs.
        let mut u = universe(2, 1);
        u.write_glyphs(2, '#');
        let buf = draw(&u, Rect::new(0, 0, 4, 3));
        assert_eq!(buf[(1, 1)].symbol(), "#");
        assert_eq!(buf[(1, 1)].fg, Color::Yellow);
        assert_eq!(buf[(2, 1)].fg, Color::Yellow);

        let mut u = universe(2, 1);
        u.set_cell(0, 0, Cell::Alive);
        u.write_glyphs(2, '.');
        let buf = draw(&u, Rect::new(0, 0, 4, 3));
        assert_eq!(buf[(1, 1)].symbol(), ".");
        assert_eq!(buf[(1, 1)].fg, Color::Yellow);
        assert_eq!(buf[(2, 1)].fg, Color::Yellow);
    }

    #[test]
    fn test_screen_to_board() {
        let area = Rect::new(0, 0, 10, 10);
        assert_eq!(BoardWidget::screen_to_board(1, 1, area), Some((0, 0)));
        assert_eq!(BoardWidget::screen_to_board(0, 0, area), None);
        assert_eq!(BoardWidget::screen_to_board(9, 5, area), None);
    }
}
