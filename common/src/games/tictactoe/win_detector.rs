use super::types::{BOARD_SIZE, Mark, Player, Position, WinningLine};

type Cells = [[Mark; BOARD_SIZE]; BOARD_SIZE];

pub fn check_win(cells: &Cells, player: Player) -> bool {
    check_win_with_line(cells, player).is_some()
}

/// Rows first, then columns, then the main and anti diagonals.
pub fn check_win_with_line(cells: &Cells, player: Player) -> Option<WinningLine> {
    let mark = player.to_mark();

    for i in 0..BOARD_SIZE {
        if let Some(line) = check_row(cells, i, mark) {
            return Some(WinningLine::new(player, line));
        }
        if let Some(line) = check_column(cells, i, mark) {
            return Some(WinningLine::new(player, line));
        }
    }
    if let Some(line) = check_diagonal(cells, mark) {
        return Some(WinningLine::new(player, line));
    }
    check_anti_diagonal(cells, mark).map(|line| WinningLine::new(player, line))
}

fn check_line(cells: &Cells, line: [Position; BOARD_SIZE], mark: Mark) -> Option<[Position; BOARD_SIZE]> {
    line.iter()
        .all(|p| cells[p.row][p.col] == mark)
        .then_some(line)
}

fn check_row(cells: &Cells, row: usize, mark: Mark) -> Option<[Position; BOARD_SIZE]> {
    check_line(cells, std::array::from_fn(|col| Position::new(row, col)), mark)
}

fn check_column(cells: &Cells, col: usize, mark: Mark) -> Option<[Position; BOARD_SIZE]> {
    check_line(cells, std::array::from_fn(|row| Position::new(row, col)), mark)
}

fn check_diagonal(cells: &Cells, mark: Mark) -> Option<[Position; BOARD_SIZE]> {
    check_line(cells, std::array::from_fn(|i| Position::new(i, i)), mark)
}

fn check_anti_diagonal(cells: &Cells, mark: Mark) -> Option<[Position; BOARD_SIZE]> {
    check_line(
        cells,
        std::array::from_fn(|i| Position::new(i, BOARD_SIZE - 1 - i)),
        mark,
    )
}
