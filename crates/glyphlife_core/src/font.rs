//! Letter stamping with the 6x8 bitmap font.
//!
//! Every lit font pixel becomes a small glider, so a stamped word is legible
//! for a frame and then dissolves into traffic. Letters are laid out on a
//! 5-cell pitch starting 3 cells in from the top-left corner.

use crate::cell::Cell;
use crate::grid::CellGrid;
use embedded_graphics::fonts::{Font, Font6x8};

pub const GLYPH_WIDTH: u32 = 6;
pub const GLYPH_HEIGHT: u32 = 8;

const MARGIN: i64 = 3;
const PITCH: i64 = 5;

/// Lit pixels of `ch`, as `(x, y)` within its 6x8 box.
pub fn letter_pixels(ch: char) -> impl Iterator<Item = (u32, u32)> {
    (0..GLYPH_HEIGHT)
        .flat_map(|y| (0..GLYPH_WIDTH).map(move |x| (x, y)))
        .filter(move |&(x, y)| Font6x8::character_pixel(ch, x, y))
}

/// Cells of the glider drawn for one font pixel anchored at `(col, row)`.
/// Odd slots mirror the tail so neighbouring letters drift apart.
fn pixel_glider(col: i64, row: i64, slot: u32) -> [(i64, i64); 5] {
    let tail = 2 * i64::from(slot % 2);
    [
        (col, row),
        (col - 1, row),
        (col - 2, row),
        (col - tail, row - 1),
        (col - 1, row - 2),
    ]
}

/// Draws `ch` as Alive cells in letter slot `slot`. Coordinates wrap, so
/// slots past the right edge reappear on the left.
pub fn stamp_letter(grid: &mut CellGrid, slot: u32, ch: char) {
    if grid.dims().is_empty() {
        return;
    }
    let base = 6 * i64::from(slot);
    for (fx, fy) in letter_pixels(ch) {
        let col = MARGIN + PITCH * (base + i64::from(fx));
        let row = MARGIN + PITCH * i64::from(fy);
        for (x, y) in pixel_glider(col, row, slot) {
            grid.set(x, y, Cell::Alive);
        }
    }
}
