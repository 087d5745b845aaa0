//! Validated grid sizes.
//!
//! Hosts hand over sizes in whatever unit they have: the browser passes
//! `innerWidth / 6.1` as a float, the CLI passes integers. Everything is
//! normalized to `u32` here, once, before any buffer is allocated.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Validates a signed size. Zero is allowed, negative values are not.
    pub fn new(width: i64, height: i64) -> Result<Self> {
        if width < 0 || height < 0 {
            return Err(EngineError::invalid_dimensions(width, height, "negative"));
        }
        let w = u32::try_from(width)
            .map_err(|_| EngineError::invalid_dimensions(width, height, "width exceeds u32"))?;
        let h = u32::try_from(height)
            .map_err(|_| EngineError::invalid_dimensions(width, height, "height exceeds u32"))?;
        Self::from_u32(w, h)
    }

    /// Validates a floating size, truncating toward zero.
    pub fn from_f64(width: f64, height: f64) -> Result<Self> {
        if !width.is_finite() || !height.is_finite() {
            return Err(EngineError::invalid_dimensions(width, height, "not finite"));
        }
        let (w, h) = (width.trunc(), height.trunc());
        if w < 0.0 || h < 0.0 {
            return Err(EngineError::invalid_dimensions(width, height, "negative"));
        }
        if w > u32::MAX as f64 || h > u32::MAX as f64 {
            return Err(EngineError::invalid_dimensions(width, height, "exceeds u32"));
        }
        Self::from_u32(w as u32, h as u32)
    }

    pub fn from_u32(width: u32, height: u32) -> Result<Self> {
        (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| EngineError::invalid_dimensions(width, height, "cell count overflows"))?;
        Ok(Self { width, height })
    }

    #[inline(always)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline(always)]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// `(x, y)` reduced into `0..width` and `0..height`. Must not be called
    /// on an empty grid.
    #[inline(always)]
    pub fn wrap(&self, x: i64, y: i64) -> (i64, i64) {
        (x.rem_euclid(self.width as i64), y.rem_euclid(self.height as i64))
    }

    /// Row-major index of a wrapped coordinate. Must not be called on an empty grid.
    #[inline(always)]
    pub fn index(&self, x: i64, y: i64) -> usize {
        let (col, row) = self.wrap(x, y);
        row as usize * self.width as usize + col as usize
    }
}
