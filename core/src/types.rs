use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board row and column sizes.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Immutable `(row, col)` coordinate; equality and ordering are by row, then column.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    row: Coord,
    col: Coord,
}

impl Position {
    pub const fn new(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }

    pub const fn row(self) -> Coord {
        self.row
    }

    pub const fn col(self) -> Coord {
        self.col
    }

    /// Conversion into an `ndarray` index, the one place `(row, col)` meets the grid.
    pub const fn to_nd_index(self) -> [usize; 2] {
        [self.row as usize, self.col as usize]
    }

    pub const fn is_row_beyond(self, row_size: Coord) -> bool {
        self.row >= row_size
    }

    pub const fn is_col_beyond(self, col_size: Coord) -> bool {
        self.col >= col_size
    }

    /// Applies `delta`, returning a value only when both coordinates stay non-negative.
    pub fn offset_by(self, (delta_row, delta_col): (i8, i8)) -> Option<Self> {
        let row = self.row.checked_add_signed(delta_row)?;
        let col = self.col.checked_add_signed(delta_col)?;
        Some(Self { row, col })
    }

    /// Iterates the in-bounds positions among the eight surrounding this one.
    pub const fn neighbors(self, bounds: (Coord, Coord)) -> NeighborIter {
        NeighborIter::new(self, bounds)
    }
}

const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `offset` to `center`, returning a value only when it remains in bounds.
fn apply_offset(center: Position, offset: (i8, i8), bounds: (Coord, Coord)) -> Option<Position> {
    let next = center.offset_by(offset)?;
    if next.is_row_beyond(bounds.0) || next.is_col_beyond(bounds.1) {
        return None;
    }
    Some(next)
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Position,
    bounds: (Coord, Coord),
    index: u8,
}

impl NeighborIter {
    const fn new(center: Position, bounds: (Coord, Coord)) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= NEIGHBOR_OFFSETS.len() {
                return None;
            }

            let next_item = apply_offset(
                self.center,
                NEIGHBOR_OFFSETS[self.index as usize],
                self.bounds,
            );
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_by_rejects_negative_coordinates() {
        let origin = Position::new(0, 0);

        assert_eq!(origin.offset_by((-1, 0)), None);
        assert_eq!(origin.offset_by((0, -1)), None);
        assert_eq!(origin.offset_by((1, 1)), Some(Position::new(1, 1)));
    }

    #[test]
    fn neighbor_count_depends_on_placement() {
        let bounds = (3, 3);

        assert_eq!(Position::new(0, 0).neighbors(bounds).count(), 3);
        assert_eq!(Position::new(0, 1).neighbors(bounds).count(), 5);
        assert_eq!(Position::new(1, 1).neighbors(bounds).count(), 8);
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        for neighbor in Position::new(2, 2).neighbors((3, 3)) {
            assert!(!neighbor.is_row_beyond(3));
            assert!(!neighbor.is_col_beyond(3));
        }
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(Position::new(0, 2) < Position::new(1, 0));
        assert!(Position::new(1, 0) < Position::new(1, 1));
    }
}
