//! Error types for the tic-tac-toe core.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TicTacToeError {
    #[error("invalid move: cell ({row}, {col}) is occupied or out of range")]
    InvalidMove { row: usize, col: usize },

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("game is already over")]
    GameOver,

    #[error("not your turn")]
    NotYourTurn,
}

pub type Result<T> = std::result::Result<T, TicTacToeError>;
