//! Per-cell display glyphs layered over the life grid.
//!
//! The overlay is display-only: the life rule never reads it, and writing a
//! glyph never changes a cell's Alive/Dead state.

use crate::error::Result;
use crate::grid::try_alloc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphMark {
    pub symbol: char,
    /// Ticks left before the mark disappears; `None` keeps it until cleared.
    pub remaining: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct GlyphOverlay {
    marks: Vec<Option<GlyphMark>>,
    active: usize,
}

impl GlyphOverlay {
    pub fn new(cell_count: usize) -> Result<Self> {
        Ok(Self {
            marks: try_alloc(cell_count, None)?,
            active: 0,
        })
    }

    #[inline(always)]
    pub fn get(&self, idx: usize) -> Option<char> {
        self.marks.get(idx).copied().flatten().map(|m| m.symbol)
    }

    pub fn mark(&self, idx: usize) -> Option<GlyphMark> {
        self.marks.get(idx).copied().flatten()
    }

    /// Places `symbol` on every index in `positions`, replacing older marks.
    /// Control characters are not drawable and leave the overlay unchanged.
    pub fn write<I>(&mut self, positions: I, symbol: char, lifetime: Option<u32>)
    where
        I: IntoIterator<Item = usize>,
    {
        if symbol.is_control() {
            return;
        }
        for idx in positions {
            if let Some(slot) = self.marks.get_mut(idx) {
                if slot.is_none() {
                    self.active += 1;
                }
                *slot = Some(GlyphMark {
                    symbol,
                    remaining: lifetime,
                });
            }
        }
    }

    /// Advances every timed mark by one tick and drops the expired ones.
    pub fn age(&mut self) {
        if self.active == 0 {
            return;
        }
        for slot in self.marks.iter_mut() {
            if let Some(GlyphMark {
                remaining: Some(left),
                ..
            }) = slot
            {
                *left = left.saturating_sub(1);
                if *left == 0 {
                    *slot = None;
                    self.active -= 1;
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.marks.fill(None);
        self.active = 0;
    }

    /// Number of cells currently carrying a glyph.
    pub fn len(&self) -> usize {
        self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active == 0
    }
}
