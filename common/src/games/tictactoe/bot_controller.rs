use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::search::{self, SearchOutcome};
use super::types::{Player, Position, SearchAlgorithm};
use crate::error::Result;
use crate::games::SessionRng;

pub struct BotInput {
    pub board: Board,
    pub current_player: Player,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            current_player: state.current_player(),
        }
    }
}

pub fn search(algorithm: SearchAlgorithm, input: &BotInput, rng: &mut SessionRng) -> Result<SearchOutcome> {
    match algorithm {
        SearchAlgorithm::BreadthFirst => search::breadth_first(&input.board, input.current_player, rng),
        SearchAlgorithm::DepthFirst => search::depth_first(&input.board, input.current_player, rng),
        SearchAlgorithm::UniformCost => search::uniform_cost(&input.board, input.current_player, rng),
    }
}

pub fn calculate_move(algorithm: SearchAlgorithm, input: BotInput, rng: &mut SessionRng) -> Result<Position> {
    search(algorithm, &input, rng).map(|outcome| outcome.position)
}

pub fn select_move(
    algorithm: SearchAlgorithm,
    board: &Board,
    player: Player,
    rng: &mut SessionRng,
) -> Result<Position> {
    calculate_move(
        algorithm,
        BotInput {
            board: *board,
            current_player: player,
        },
        rng,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TicTacToeError;

    #[test]
    fn test_every_algorithm_completes_top_row() {
        let board: Board = "XX.|...|...".parse().unwrap();
        for algorithm in SearchAlgorithm::ALL {
            let position = select_move(algorithm, &board, Player::X, &mut SessionRng::new(0)).unwrap();
            assert_eq!(position, Position::new(0, 2), "{:?}", algorithm);
        }
    }

    #[test]
    fn test_every_algorithm_rejects_full_board() {
        let board: Board = "XOX|OXO|OXO".parse().unwrap();
        for algorithm in SearchAlgorithm::ALL {
            let result = select_move(algorithm, &board, Player::O, &mut SessionRng::new(0));
            assert_eq!(result, Err(TicTacToeError::NoLegalMoves), "{:?}", algorithm);
        }
    }

    #[test]
    fn test_bot_input_from_game_state_copies_board() {
        let mut state = TicTacToeGameState::new(Default::default());
        state.place_mark(Position::new(1, 1)).unwrap();

        let input = BotInput::from_game_state(&state);

        assert_eq!(input.board, *state.board());
        assert_eq!(input.current_player, Player::O);
    }
}
