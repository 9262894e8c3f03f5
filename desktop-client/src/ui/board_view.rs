use common::games::tictactoe::{BOARD_SIZE, Mark, Position, TicTacToeGameState};
use eframe::egui;

const LINE_WIDTH: f32 = 2.0;
const MARK_WIDTH: f32 = 6.0;

/// Draws the 3x3 grid and returns the cell clicked this frame, if it is one
/// the human may play.
pub fn render_board(ui: &mut egui::Ui, state: &TicTacToeGameState, accepts_input: bool) -> Option<Position> {
    let side = ui.available_width().min(ui.available_height() - 140.0).clamp(180.0, 480.0);
    let cell_size = side / BOARD_SIZE as f32;

    let (rect, response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());
    let painter = ui.painter();

    painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

    if let Some(line) = state.winning_line() {
        for position in line.cells {
            painter.rect_filled(
                cell_rect(rect, cell_size, position),
                0.0,
                egui::Color32::from_rgb(190, 235, 190),
            );
        }
    }

    let hovered = response
        .hover_pos()
        .and_then(|pos| cell_at(rect, cell_size, pos))
        .filter(|&position| accepts_input && state.is_cell_enabled(position));

    if let Some(position) = hovered {
        painter.rect_filled(
            cell_rect(rect, cell_size, position),
            0.0,
            egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
        );
    }

    let stroke = egui::Stroke::new(LINE_WIDTH, egui::Color32::BLACK);
    for i in 1..BOARD_SIZE {
        let offset = i as f32 * cell_size;
        painter.line_segment(
            [egui::pos2(rect.left() + offset, rect.top()), egui::pos2(rect.left() + offset, rect.bottom())],
            stroke,
        );
        painter.line_segment(
            [egui::pos2(rect.left(), rect.top() + offset), egui::pos2(rect.right(), rect.top() + offset)],
            stroke,
        );
    }

    for (row, cells) in state.board().rows().iter().enumerate() {
        for (col, &mark) in cells.iter().enumerate() {
            let cell = cell_rect(rect, cell_size, Position::new(row, col));
            match mark {
                Mark::X => draw_x(painter, cell),
                Mark::O => draw_o(painter, cell),
                Mark::Empty => {}
            }
        }
    }

    if response.clicked() { hovered } else { None }
}

fn cell_rect(board: egui::Rect, cell_size: f32, position: Position) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            board.left() + position.col as f32 * cell_size,
            board.top() + position.row as f32 * cell_size,
        ),
        egui::vec2(cell_size, cell_size),
    )
}

fn cell_at(board: egui::Rect, cell_size: f32, pos: egui::Pos2) -> Option<Position> {
    if !board.contains(pos) {
        return None;
    }
    let col = ((pos.x - board.left()) / cell_size) as usize;
    let row = ((pos.y - board.top()) / cell_size) as usize;
    let position = Position::new(row.min(BOARD_SIZE - 1), col.min(BOARD_SIZE - 1));
    Some(position)
}

fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
    let padding = rect.width() * 0.2;
    let stroke = egui::Stroke::new(MARK_WIDTH, egui::Color32::from_rgb(220, 50, 50));

    painter.line_segment(
        [
            egui::pos2(rect.left() + padding, rect.top() + padding),
            egui::pos2(rect.right() - padding, rect.bottom() - padding),
        ],
        stroke,
    );
    painter.line_segment(
        [
            egui::pos2(rect.right() - padding, rect.top() + padding),
            egui::pos2(rect.left() + padding, rect.bottom() - padding),
        ],
        stroke,
    );
}

fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
    let padding = rect.width() * 0.2;
    let radius = rect.width() / 2.0 - padding;
    let stroke = egui::Stroke::new(MARK_WIDTH, egui::Color32::from_rgb(50, 50, 220));

    painter.circle_stroke(rect.center(), radius, stroke);
}
