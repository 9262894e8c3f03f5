use serde::{Deserialize, Serialize};

use super::types::{GameMode, SearchAlgorithm};

/// Mode and computer strategy, latched for the duration of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub algorithm: SearchAlgorithm,
}

impl TicTacToeSessionSettings {
    pub fn new(mode: GameMode, algorithm: SearchAlgorithm) -> Self {
        Self { mode, algorithm }
    }
}
