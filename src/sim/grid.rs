//! Grid geometry
//!
//! Maps (row, col) cell indices to world positions. The grid is centered on
//! an anchor point: the cell at `(rows / 2, row_len / 2)` (integer halves)
//! lands exactly on the anchor, so odd and even sized levels line up the same
//! way from level to level.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Cell dimensions plus the world anchor a grid is centered on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub cell_size: Vec2,
    pub center: Vec2,
}

impl GridLayout {
    pub fn new(cell_size: Vec2, center: Vec2) -> Self {
        Self { cell_size, center }
    }

    /// World position of a cell
    ///
    /// `row_len` is the length of the row the cell sits in and `row_count`
    /// the number of rows in the grid.
    pub fn cell_to_world(&self, row: usize, col: usize, row_len: usize, row_count: usize) -> Vec2 {
        cell_to_world(row, col, row_len, row_count, self.cell_size, self.center)
    }
}

/// `center + (index - floor(count / 2)) * cell` per axis
#[inline]
pub fn cell_to_world(
    row: usize,
    col: usize,
    row_len: usize,
    row_count: usize,
    cell_size: Vec2,
    center: Vec2,
) -> Vec2 {
    let dx = col as i64 - (row_len / 2) as i64;
    let dy = row as i64 - (row_count / 2) as i64;
    Vec2::new(
        center.x + dx as f32 * cell_size.x,
        center.y + dy as f32 * cell_size.y,
    )
}
