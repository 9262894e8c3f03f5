mod board;
mod bot_controller;
mod game_state;
mod search;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, ParseBoardError};
pub use bot_controller::{BotInput, calculate_move, search, select_move};
pub use game_state::{COMPUTER_PLAYER, HUMAN_PLAYER, TicTacToeGameState};
pub use search::{MoveSource, SearchOutcome, breadth_first, depth_first, uniform_cost};
pub use settings::TicTacToeSessionSettings;
pub use types::{
    BOARD_SIZE, GameMode, GameStatus, Mark, Player, Position, SearchAlgorithm, WinningLine,
};
pub use win_detector::{check_win, check_win_with_line};
