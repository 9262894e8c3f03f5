use common::config::Validate;
use common::games::tictactoe::{GameMode, SearchAlgorithm, TicTacToeSessionSettings};
use serde::{Deserialize, Serialize};

const MAX_COMPUTER_MOVE_DELAY_MS: u64 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    pub algorithm: SearchAlgorithm,
    pub computer_move_delay_ms: u64,
}

impl GameConfig {
    pub fn session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings::new(self.mode, self.algorithm)
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_move_delay_ms > MAX_COMPUTER_MOVE_DELAY_MS {
            return Err(format!(
                "computer_move_delay_ms must not exceed {}",
                MAX_COMPUTER_MOVE_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::OnePlayer,
            algorithm: SearchAlgorithm::BreadthFirst,
            computer_move_delay_ms: 500,
        }
    }
}
