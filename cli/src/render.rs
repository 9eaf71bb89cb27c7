use std::fmt::Write;

use demine_core::{Board, CellSnapshot, Position};

/// Draws the whole board from cell snapshots, with a column-letter header
/// and 1-based row numbers.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("    ");
    for col in 0..board.col_size() {
        write!(out, "{} ", (b'a' + col) as char).unwrap();
    }
    out.push('\n');

    for row in 0..board.row_size() {
        write!(out, "{:>3} ", row + 1).unwrap();
        for col in 0..board.col_size() {
            out.push(sign(board.snapshot_at(Position::new(row, col))));
            out.push(' ');
        }
        out.push('\n');
    }

    out
}

fn sign(snapshot: CellSnapshot) -> char {
    match snapshot {
        CellSnapshot::Unchecked => '□',
        CellSnapshot::Flag => '⚑',
        CellSnapshot::Empty => '■',
        CellSnapshot::Number(count) => (b'0' + count) as char,
        CellSnapshot::Mine => '☼',
    }
}
