//! Double-buffered toroidal cell storage.

use crate::cell::Cell;
use crate::dimensions::Dimensions;
use crate::error::{EngineError, Result};
use crate::rules::LifeRule;

#[derive(Debug, Clone)]
pub struct CellGrid {
    dims: Dimensions,
    cells: Vec<Cell>,
    back_buffer: Vec<Cell>,
}

/// Allocates a Dead-filled buffer, reporting failure instead of aborting.
pub(crate) fn try_alloc<T: Clone>(len: usize, fill: T) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| EngineError::AllocationFailure { cells: len })?;
    buf.resize(len, fill);
    Ok(buf)
}

impl CellGrid {
    pub fn new(dims: Dimensions) -> Result<Self> {
        let cells = try_alloc(dims.cell_count(), Cell::Dead)?;
        let back_buffer = try_alloc(dims.cell_count(), Cell::Dead)?;
        Ok(Self {
            dims,
            cells,
            back_buffer,
        })
    }

    #[inline(always)]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    #[inline(always)]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, x: i64, y: i64) -> Cell {
        if self.dims.is_empty() {
            return Cell::Dead;
        }
        self.cells[self.dims.index(x, y)]
    }

    pub fn set(&mut self, x: i64, y: i64, cell: Cell) {
        if self.dims.is_empty() {
            return;
        }
        let idx = self.dims.index(x, y);
        self.cells[idx] = cell;
    }

    pub fn set_index(&mut self, idx: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(idx) {
            *slot = cell;
        }
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Live cells among the 8 wrapped neighbours of `(x, y)`.
    ///
    /// On grids narrower or shorter than 3 the same cell can be reached
    /// through several offsets and is counted once per offset.
    pub fn live_neighbor_count(&self, x: i64, y: i64) -> u8 {
        if self.dims.is_empty() {
            return 0;
        }
        let (x, y) = self.dims.wrap(x, y);
        let mut count = 0;
        for dy in [-1, 0, 1] {
            for dx in [-1, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }
                count += self.cells[self.dims.index(x + dx, y + dy)] as u8;
            }
        }
        count
    }

    /// Computes the next generation into the back buffer, then swaps it in.
    /// `extra` may write further cells into the new generation before the swap.
    pub fn step<F>(&mut self, rule: &LifeRule, extra: F)
    where
        F: FnOnce(&[Cell], &mut [Cell]),
    {
        if self.dims.is_empty() {
            return;
        }
        let width = self.dims.width() as usize;

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            let current = &self.cells;
            let height = self.dims.height() as usize;
            self.back_buffer
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(row, out)| step_row(current, width, height, row, rule, out));
        }
        #[cfg(not(feature = "parallel"))]
        {
            let current = &self.cells;
            let height = self.dims.height() as usize;
            for (row, out) in self.back_buffer.chunks_mut(width).enumerate() {
                step_row(current, width, height, row, rule, out);
            }
        }

        extra(&self.cells, &mut self.back_buffer);
        std::mem::swap(&mut self.cells, &mut self.back_buffer);
    }
}

/// One output row. Wrapped column and row indices are precomputed so the
/// inner loop does no modulo arithmetic.
fn step_row(
    current: &[Cell],
    width: usize,
    height: usize,
    row: usize,
    rule: &LifeRule,
    out: &mut [Cell],
) {
    let north = ((row + height - 1) % height) * width;
    let here = row * width;
    let south = ((row + 1) % height) * width;

    for (col, slot) in out.iter_mut().enumerate() {
        let west = (col + width - 1) % width;
        let east = (col + 1) % width;
        let neighbours = current[north + west] as u8
            + current[north + col] as u8
            + current[north + east] as u8
            + current[here + west] as u8
            + current[here + east] as u8
            + current[south + west] as u8
            + current[south + col] as u8
            + current[south + east] as u8;
        *slot = rule.next_state(current[here + col], neighbours);
    }
}
