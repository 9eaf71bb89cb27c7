use serde::{Deserialize, Serialize};

/// Immutable classification of a grid slot, fixed when the board is seeded.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    Number(u8),
    Mine,
}

/// Mutable reveal state of a grid slot.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Visibility {
    Unchecked,
    Opened,
    Flagged,
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Unchecked
    }
}

/// One grid slot: a fixed kind plus its current visibility.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    kind: CellKind,
    visibility: Visibility,
}

impl Cell {
    pub const fn new(kind: CellKind) -> Self {
        Self {
            kind,
            visibility: Visibility::Unchecked,
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self.kind, CellKind::Mine)
    }

    pub const fn is_opened(self) -> bool {
        matches!(self.visibility, Visibility::Opened)
    }

    /// Whether the slot counts toward the all-cells-checked win predicate.
    pub const fn is_checked(self) -> bool {
        !matches!(self.visibility, Visibility::Unchecked)
    }

    pub const fn has_adjacent_mine_count(self) -> bool {
        matches!(self.kind, CellKind::Number(_))
    }

    pub fn open(&mut self) {
        self.visibility = Visibility::Opened;
    }

    pub fn flag(&mut self) {
        self.visibility = Visibility::Flagged;
    }

    /// Projects the player-visible state. The kind of a cell that has not been
    /// opened never crosses this boundary.
    pub const fn snapshot(self) -> CellSnapshot {
        match self.visibility {
            Visibility::Unchecked => CellSnapshot::Unchecked,
            Visibility::Flagged => CellSnapshot::Flag,
            Visibility::Opened => match self.kind {
                CellKind::Empty => CellSnapshot::Empty,
                CellKind::Number(count) => CellSnapshot::Number(count),
                CellKind::Mine => CellSnapshot::Mine,
            },
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(CellKind::Empty)
    }
}

/// Render-agnostic description of one cell as the player may see it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellSnapshot {
    Unchecked,
    Flag,
    Empty,
    Number(u8),
    Mine,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_hides_kind_until_opened() {
        for kind in [CellKind::Empty, CellKind::Number(3), CellKind::Mine] {
            let mut cell = Cell::new(kind);
            assert_eq!(cell.snapshot(), CellSnapshot::Unchecked);

            cell.flag();
            assert_eq!(cell.snapshot(), CellSnapshot::Flag);
        }
    }

    #[test]
    fn snapshot_exposes_kind_once_opened() {
        let mut empty = Cell::new(CellKind::Empty);
        let mut number = Cell::new(CellKind::Number(5));
        let mut mine = Cell::new(CellKind::Mine);

        empty.open();
        number.open();
        mine.open();

        assert_eq!(empty.snapshot(), CellSnapshot::Empty);
        assert_eq!(number.snapshot(), CellSnapshot::Number(5));
        assert_eq!(mine.snapshot(), CellSnapshot::Mine);
    }

    #[test]
    fn checked_means_not_unchecked() {
        let mut cell = Cell::new(CellKind::Empty);
        assert!(!cell.is_checked());

        cell.flag();
        assert!(cell.is_checked());
        assert!(!cell.is_opened());

        cell.open();
        assert!(cell.is_checked());
        assert!(cell.is_opened());
    }
}
