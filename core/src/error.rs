use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Position ({0}, {1}) is outside the board")]
    OutOfBounds(i64, i64),
    #[error("Invalid mine placement at ({0}, {1}), out of range or duplicated")]
    InvalidMinePlacement(Coord, Coord),
    #[error("Too many mines")]
    TooManyMines,
    #[error("Board must have at least one row and one column")]
    InvalidSize,
    #[error("Cell is already revealed")]
    AlreadyRevealed,
    #[error("Game already finished, no new moves are accepted")]
    GameAlreadyFinished,
}

pub type Result<T> = core::result::Result<T, GameError>;
