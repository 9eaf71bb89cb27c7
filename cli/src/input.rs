use demine_core::{Coord, Position};
use thiserror::Error;

/// Recoverable per-turn input faults; the loop reports them and continues.
#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("unknown action `{0}`, expected `open`, `flag` or `quit`")]
    InvalidAction(String),
    #[error("cannot read `{0}` as a cell, expected a column letter and a row number like `c3`")]
    InvalidCell(String),
    #[error("that cell is outside the board")]
    InvalidPosition,
}

/// One parsed player command.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Open(Position),
    Flag(Position),
    Quit,
}

/// Parses a line like `open c3`, `f a1` or `quit`.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let mut words = line.split_whitespace();
    let action = words.next().unwrap_or_default();

    match action {
        "open" | "o" => Ok(Command::Open(parse_cell(words.next().unwrap_or_default())?)),
        "flag" | "f" => Ok(Command::Flag(parse_cell(words.next().unwrap_or_default())?)),
        "quit" | "q" => Ok(Command::Quit),
        other => Err(InputError::InvalidAction(other.into())),
    }
}

/// A cell is a column letter followed by a 1-based row number, e.g. `c3`.
fn parse_cell(token: &str) -> Result<Position, InputError> {
    let invalid = || InputError::InvalidCell(token.into());

    let mut chars = token.chars();
    let col_letter = chars.next().ok_or_else(invalid)?;
    if !col_letter.is_ascii_alphabetic() {
        return Err(invalid());
    }
    let col = col_letter.to_ascii_lowercase() as Coord - b'a';

    let row: Coord = chars.as_str().parse().map_err(|_| invalid())?;
    if row == 0 {
        return Err(invalid());
    }

    Ok(Position::new(row - 1, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_and_short_actions() {
        assert_eq!(
            parse_command("open c3"),
            Ok(Command::Open(Position::new(2, 2)))
        );
        assert_eq!(
            parse_command("f a1"),
            Ok(Command::Flag(Position::new(0, 0)))
        );
        assert_eq!(parse_command("  quit  "), Ok(Command::Quit));
    }

    #[test]
    fn uppercase_cells_are_accepted() {
        assert_eq!(
            parse_command("o B12"),
            Ok(Command::Open(Position::new(11, 1)))
        );
    }

    #[test]
    fn unknown_actions_are_rejected() {
        assert_eq!(
            parse_command("poke a1"),
            Err(InputError::InvalidAction("poke".into()))
        );
        assert_eq!(parse_command(""), Err(InputError::InvalidAction("".into())));
    }

    #[test]
    fn malformed_cells_are_rejected() {
        for token in ["", "3c", "c", "c0", "cc", "c-1"] {
            assert_eq!(
                parse_command(&format!("open {token}")),
                Err(InputError::InvalidCell(token.into())),
                "token `{token}` should not parse",
            );
        }
    }
}
