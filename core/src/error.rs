use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimensions must be non-zero")]
    EmptyBoard,
    #[error("{mines} mines do not fit a board with {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Mine coordinate outside the board")]
    MineOutOfBounds,
}

pub type Result<T> = std::result::Result<T, GameError>;
