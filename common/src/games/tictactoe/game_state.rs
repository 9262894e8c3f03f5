use super::board::Board;
use super::bot_controller::{self, BotInput};
use super::search::{MoveSource, SearchOutcome};
use super::settings::TicTacToeSessionSettings;
use super::types::{GameMode, GameStatus, Player, Position, WinningLine};
use crate::error::{Result, TicTacToeError};
use crate::games::SessionRng;

pub const HUMAN_PLAYER: Player = Player::X;
pub const COMPUTER_PLAYER: Player = Player::O;

/// Live state of one game: the authoritative board, whose turn it is, and the
/// settings latched when the game started. The UI owns exactly one of these
/// and routes every move through it.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    settings: TicTacToeSessionSettings,
    pending_settings: Option<TicTacToeSessionSettings>,
    current_player: Player,
    status: GameStatus,
    last_move: Option<Position>,
    winning_line: Option<WinningLine>,
}

impl TicTacToeGameState {
    pub fn new(settings: TicTacToeSessionSettings) -> Self {
        crate::log!(
            "New game: mode {:?}, algorithm {}",
            settings.mode,
            settings.algorithm.short_name()
        );
        Self {
            board: Board::new(),
            settings,
            pending_settings: None,
            current_player: HUMAN_PLAYER,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settings(&self) -> TicTacToeSessionSettings {
        self.settings
    }

    /// Settings requested for the next game, if they differ from the current.
    pub fn pending_settings(&self) -> Option<TicTacToeSessionSettings> {
        self.pending_settings
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn is_cell_enabled(&self, position: Position) -> bool {
        !self.status.is_over() && self.board.is_valid_move(position)
    }

    pub fn is_computer_turn(&self) -> bool {
        self.settings.mode == GameMode::OnePlayer
            && self.status == GameStatus::InProgress
            && self.current_player == COMPUTER_PLAYER
    }

    /// Applies immediately while no move has been played, otherwise on the
    /// next [`reset`](Self::reset).
    pub fn set_settings(&mut self, settings: TicTacToeSessionSettings) {
        if self.last_move.is_none() {
            self.settings = settings;
            self.pending_settings = None;
        } else if settings == self.settings {
            self.pending_settings = None;
        } else {
            self.pending_settings = Some(settings);
        }
    }

    /// A human click. Rejected without touching the board when the game is
    /// over, when the computer is to move, or when the cell is taken.
    pub fn place_mark(&mut self, position: Position) -> Result<GameStatus> {
        if self.status.is_over() {
            return Err(TicTacToeError::GameOver);
        }
        if self.is_computer_turn() {
            return Err(TicTacToeError::NotYourTurn);
        }

        self.apply(position)
    }

    pub fn play_computer_turn(&mut self, rng: &mut SessionRng) -> Result<SearchOutcome> {
        if !self.is_computer_turn() {
            return Err(TicTacToeError::NotYourTurn);
        }

        let algorithm = self.settings.algorithm;
        let outcome = bot_controller::search(algorithm, &BotInput::from_game_state(self), rng)?;
        match outcome.source {
            MoveSource::Win { depth } => crate::log!(
                "{} picked {} from a line completed at ply {} after {} expansions",
                algorithm.short_name(),
                outcome.position,
                depth,
                outcome.expanded_nodes
            ),
            MoveSource::Fallback => crate::log!(
                "{} found no win after {} expansions, playing random {}",
                algorithm.short_name(),
                outcome.expanded_nodes,
                outcome.position
            ),
        }

        self.apply(outcome.position)?;
        Ok(outcome)
    }

    pub fn reset(&mut self) {
        if let Some(settings) = self.pending_settings.take() {
            self.settings = settings;
        }
        *self = Self::new(self.settings);
    }

    pub fn result_message(&self) -> Option<String> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Draw => Some("It's a draw!".to_string()),
            GameStatus::XWon | GameStatus::OWon => self
                .status
                .winner()
                .map(|player| format!("Player {} wins!", player)),
        }
    }

    fn apply(&mut self, position: Position) -> Result<GameStatus> {
        let player = self.current_player;
        self.board.apply_move(position, player)?;
        self.last_move = Some(position);
        crate::log!("Player {} marked {}", player, position);

        self.check_game_over(player);
        if self.status == GameStatus::InProgress {
            self.current_player = player.opponent();
        } else if let Some(message) = self.result_message() {
            crate::log!("{}", message);
        }

        Ok(self.status)
    }

    fn check_game_over(&mut self, player: Player) {
        if let Some(line) = self.board.winning_line(player) {
            self.winning_line = Some(line);
            self.status = GameStatus::won_by(player);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new(TicTacToeSessionSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::SearchAlgorithm;

    fn two_player() -> TicTacToeGameState {
        TicTacToeGameState::new(TicTacToeSessionSettings::new(
            GameMode::TwoPlayer,
            SearchAlgorithm::BreadthFirst,
        ))
    }

    fn play(state: &mut TicTacToeGameState, moves: &[(usize, usize)]) {
        for &(row, col) in moves {
            state.place_mark(Position::new(row, col)).unwrap();
        }
    }

    #[test]
    fn test_new_game_starts_with_x() {
        let state = TicTacToeGameState::default();

        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(*state.board(), Board::new());
        assert!(state.result_message().is_none());
    }

    #[test]
    fn test_two_player_turns_alternate() {
        let mut state = two_player();

        play(&mut state, &[(0, 0)]);
        assert_eq!(state.current_player(), Player::O);
        play(&mut state, &[(1, 1)]);
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.last_move(), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_taken_cell_is_rejected_without_changing_turn() {
        let mut state = two_player();
        play(&mut state, &[(0, 0)]);

        let result = state.place_mark(Position::new(0, 0));

        assert_eq!(result, Err(TicTacToeError::InvalidMove { row: 0, col: 0 }));
        assert_eq!(state.current_player(), Player::O);
    }

    #[test]
    fn test_win_ends_game_and_disables_cells() {
        let mut state = two_player();
        play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        assert_eq!(state.status(), GameStatus::XWon);
        assert_eq!(state.result_message().as_deref(), Some("Player X wins!"));
        assert_eq!(state.winning_line().map(|line| line.player), Some(Player::X));
        assert!(!state.is_cell_enabled(Position::new(2, 2)));
        assert_eq!(state.place_mark(Position::new(2, 2)), Err(TicTacToeError::GameOver));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut state = two_player();
        play(
            &mut state,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );

        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.result_message().as_deref(), Some("It's a draw!"));
        assert!(state.winning_line().is_none());
    }

    #[test]
    fn test_human_cannot_move_during_computer_turn() {
        let mut state = TicTacToeGameState::default();
        play(&mut state, &[(0, 0)]);

        assert!(state.is_computer_turn());
        assert_eq!(
            state.place_mark(Position::new(1, 1)),
            Err(TicTacToeError::NotYourTurn)
        );
    }

    #[test]
    fn test_computer_turn_requires_one_player_mode() {
        let mut state = two_player();
        play(&mut state, &[(0, 0)]);

        assert!(!state.is_computer_turn());
        assert!(matches!(
            state.play_computer_turn(&mut SessionRng::new(0)),
            Err(TicTacToeError::NotYourTurn)
        ));
    }

    #[test]
    fn test_computer_plays_o_and_hands_turn_back() {
        let mut state = TicTacToeGameState::default();
        play(&mut state, &[(1, 1)]);

        let outcome = state.play_computer_turn(&mut SessionRng::new(8)).unwrap();

        assert_eq!(state.board().get(outcome.position), Some(Player::O.to_mark()));
        assert_eq!(state.current_player(), Player::X);
        assert!(!state.is_computer_turn());
    }

    #[test]
    fn test_settings_change_waits_for_reset_once_game_started() {
        let mut state = TicTacToeGameState::default();
        play(&mut state, &[(0, 0)]);
        let requested = TicTacToeSessionSettings::new(GameMode::TwoPlayer, SearchAlgorithm::DepthFirst);

        state.set_settings(requested);
        assert_eq!(state.settings(), TicTacToeSessionSettings::default());
        assert_eq!(state.pending_settings(), Some(requested));

        state.reset();
        assert_eq!(state.settings(), requested);
        assert!(state.pending_settings().is_none());
    }

    #[test]
    fn test_settings_apply_immediately_before_first_move() {
        let mut state = TicTacToeGameState::default();
        let requested = TicTacToeSessionSettings::new(GameMode::TwoPlayer, SearchAlgorithm::UniformCost);

        state.set_settings(requested);

        assert_eq!(state.settings(), requested);
    }

    #[test]
    fn test_reset_after_finished_game() {
        let mut state = two_player();
        play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        state.reset();

        assert_eq!(*state.board(), Board::new());
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.current_player(), Player::X);
        assert!(state.last_move().is_none());
        for row in 0..3 {
            for col in 0..3 {
                assert!(state.is_cell_enabled(Position::new(row, col)));
            }
        }
    }
}
