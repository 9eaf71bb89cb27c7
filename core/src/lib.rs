#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;

/// Level parameters a [`Board`] is built from.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Clamps the parameters so the grid is non-empty and at least one cell
    /// stays free of mines.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let mines = mines.min(mult(rows, cols) - 1);
        Self::new_unchecked(rows, cols, mines)
    }

    pub const fn size(&self) -> (Coord, Coord) {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

/// Mask of mine positions a board is seeded from, produced by a
/// [`LayoutGenerator`] or built directly from explicit positions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap();
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_positions(
        (rows, cols): (Coord, Coord),
        mine_positions: &[Position],
    ) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default([rows as usize, cols as usize]);

        for &position in mine_positions {
            if position.is_row_beyond(rows) || position.is_col_beyond(cols) {
                return Err(GameError::InvalidPosition);
            }
            mine_mask[position.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn size(&self) -> (Coord, Coord) {
        let dim = self.mine_mask.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len().try_into().unwrap()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, position: Position) -> bool {
        self[position]
    }

    /// Number of mines among the in-bounds neighbors of `position`.
    pub fn adjacent_mine_count(&self, position: Position) -> u8 {
        position
            .neighbors(self.size())
            .filter(|&neighbor| self[neighbor])
            .count()
            .try_into()
            .unwrap()
    }
}

impl Index<Position> for MineLayout {
    type Output = bool;

    fn index(&self, position: Position) -> &Self::Output {
        &self.mine_mask[position.to_nd_index()]
    }
}
