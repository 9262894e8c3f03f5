use std::fmt;
use std::str::FromStr;

use super::types::{BOARD_SIZE, Mark, Player, Position, WinningLine};
use super::win_detector::{check_win, check_win_with_line};
use crate::error::{Result, TicTacToeError};

/// A 3x3 grid. Copies are cheap, so search explores hypothetical
/// continuations on copies and never touches the caller's board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, position: Position) -> Option<Mark> {
        if !position.is_on_board() {
            return None;
        }
        Some(self.cells[position.row][position.col])
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Empty cells in row-major order.
    pub fn legal_moves(&self) -> Vec<Position> {
        let mut moves = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn is_valid_move(&self, position: Position) -> bool {
        self.get(position) == Some(Mark::Empty)
    }

    pub fn apply_move(&mut self, position: Position, player: Player) -> Result<()> {
        if !self.is_valid_move(position) {
            return Err(TicTacToeError::InvalidMove {
                row: position.row,
                col: position.col,
            });
        }
        self.cells[position.row][position.col] = player.to_mark();
        Ok(())
    }

    pub fn check_winner(&self, player: Player) -> bool {
        check_win(&self.cells, player)
    }

    pub fn winning_line(&self, player: Player) -> Option<WinningLine> {
        check_win_with_line(&self.cells, player)
    }

    /// X is checked first; a legal game never has both.
    pub fn winner(&self) -> Option<Player> {
        [Player::X, Player::O]
            .into_iter()
            .find(|&player| self.check_winner(player))
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBoardError(String);

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid board: {}", self.0)
    }
}

impl std::error::Error for ParseBoardError {}

/// Parses nine row-major cells, e.g. `"XX.|...|..."` or `"XX.\n...\n..."`.
/// Line breaks, `|` and `,` between rows are ignored.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let marks = s
            .chars()
            .filter(|c| !matches!(c, '\n' | '\r' | '|' | ','))
            .map(|c| Mark::from_char(c).ok_or_else(|| ParseBoardError(format!("unexpected character '{}'", c))))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        if marks.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(ParseBoardError(format!(
                "expected {} cells, got {}",
                BOARD_SIZE * BOARD_SIZE,
                marks.len()
            )));
        }

        let mut board = Board::new();
        for (index, mark) in marks.into_iter().enumerate() {
            board.cells[index / BOARD_SIZE][index % BOARD_SIZE] = mark;
        }
        Ok(board)
    }
}
