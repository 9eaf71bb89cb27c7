use alloc::collections::{BTreeSet, VecDeque};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Progress of one game. `Won` and `Lost` are terminal.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// The board engine: owns the grid of cells and the game status, and is the
/// only place status transitions happen.
///
/// Positions handed to the player-action and query methods must already be in
/// bounds (`is_invalid_position` is the caller's check); an out-of-bounds
/// position is a programming error and panics on the grid index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    grid: Array2<Cell>,
    mine_count: CellCount,
    status: GameStatus,
}

impl Board {
    /// Allocates a board of empty, unchecked cells. Call [`Board::initialize`]
    /// to seed mines into it.
    pub fn new(config: BoardConfig) -> Self {
        Self {
            grid: Array2::default([config.rows as usize, config.cols as usize]),
            mine_count: config.mines,
            status: Default::default(),
        }
    }

    /// Builds a board from a fixed mine layout, skipping random generation.
    pub fn from_layout(layout: &MineLayout) -> Self {
        let (rows, cols) = layout.size();
        let mut board = Self::new(BoardConfig::new_unchecked(rows, cols, layout.mine_count()));
        board.reset_from_layout(layout);
        board
    }

    /// Discards the current layout and visibility state and reseeds the grid.
    /// The status returns to `InProgress`.
    pub fn initialize<G: LayoutGenerator>(&mut self, generator: G) {
        let layout = generator.generate(self.config());
        self.reset_from_layout(&layout);
    }

    fn reset_from_layout(&mut self, layout: &MineLayout) {
        let (rows, cols) = layout.size();

        self.status = GameStatus::InProgress;
        self.mine_count = layout.mine_count();
        self.grid = Array2::from_shape_fn([rows as usize, cols as usize], |(row, col)| {
            Cell::new(Self::kind_at(layout, Position::new(row as Coord, col as Coord)))
        });
    }

    fn kind_at(layout: &MineLayout, position: Position) -> CellKind {
        if layout.contains_mine(position) {
            return CellKind::Mine;
        }
        match layout.adjacent_mine_count(position) {
            0 => CellKind::Empty,
            count => CellKind::Number(count),
        }
    }

    /// Flags the cell if it is still unchecked. Flagging the last unchecked
    /// cell wins the game, whether or not it hides a mine.
    pub fn flag_at(&mut self, position: Position) {
        if self.status.is_finished() {
            return;
        }

        if !self.cell_at(position).is_checked() {
            self.grid[position.to_nd_index()].flag();
        }
        self.check_game_over();
    }

    /// Opens the cell. A mine ends the game on the spot; anything else starts
    /// a flood-fill reveal rooted at `position`.
    pub fn open_at(&mut self, position: Position) {
        if self.status.is_finished() {
            return;
        }

        if self.cell_at(position).is_mine() {
            self.grid[position.to_nd_index()].open();
            self.status = GameStatus::Lost;
            return;
        }

        self.open_surrounding(position);
        self.check_game_over();
    }

    /// Iterative flood fill: reveals the contiguous empty region around
    /// `position` plus the numbered cells bordering it. Numbered cells are
    /// opened but never expanded; mines are never crossed.
    fn open_surrounding(&mut self, position: Position) {
        let bounds = self.size();
        let mut visited = BTreeSet::new();
        let mut to_visit = VecDeque::from([position]);

        while let Some(visit_position) = to_visit.pop_front() {
            if !visited.insert(visit_position) {
                continue;
            }

            let cell = self.cell_at(visit_position);
            if cell.is_opened() || cell.is_mine() {
                continue;
            }

            self.grid[visit_position.to_nd_index()].open();
            log::trace!("opened cell at {:?}", visit_position);

            if cell.has_adjacent_mine_count() {
                continue;
            }

            to_visit.extend(
                visit_position
                    .neighbors(bounds)
                    .filter(|neighbor| !visited.contains(neighbor)),
            );
        }
    }

    fn check_game_over(&mut self) {
        if self.is_all_cells_checked() {
            self.status = GameStatus::Won;
        }
    }

    /// Win predicate: every cell has been opened or flagged.
    fn is_all_cells_checked(&self) -> bool {
        self.grid.iter().all(|cell| cell.is_checked())
    }

    pub fn row_size(&self) -> Coord {
        self.grid.dim().0.try_into().unwrap()
    }

    pub fn col_size(&self) -> Coord {
        self.grid.dim().1.try_into().unwrap()
    }

    pub fn size(&self) -> (Coord, Coord) {
        (self.row_size(), self.col_size())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn is_invalid_position(&self, position: Position) -> bool {
        position.is_row_beyond(self.row_size()) || position.is_col_beyond(self.col_size())
    }

    pub fn snapshot_at(&self, position: Position) -> CellSnapshot {
        self.cell_at(position).snapshot()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_in_progress(&self) -> bool {
        self.status.is_in_progress()
    }

    pub fn is_won(&self) -> bool {
        matches!(self.status, GameStatus::Won)
    }

    pub fn is_lost(&self) -> bool {
        matches!(self.status, GameStatus::Lost)
    }

    fn config(&self) -> BoardConfig {
        BoardConfig::new_unchecked(self.row_size(), self.col_size(), self.mine_count)
    }

    fn cell_at(&self, position: Position) -> Cell {
        self.grid[position.to_nd_index()]
    }
}
