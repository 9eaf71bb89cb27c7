use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("position outside the board")]
    InvalidPosition,
}

pub type Result<T> = core::result::Result<T, GameError>;
