use eframe::egui;
use tictactoe_common::games::tictactoe::{BOARD_SIZE, Board, Mark, row_col};

use super::palette::Palette;

pub struct BoardUi {
    last_hover: Option<usize>,
}

impl BoardUi {
    const MIN_CELL_SIZE: f32 = 60.0;
    const MAX_CELL_SIZE: f32 = 140.0;
    const LINE_WIDTH: f32 = 2.0;
    const MARK_WIDTH: f32 = 6.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    fn cell_rect(board_rect: egui::Rect, cell_size: f32, index: usize) -> egui::Rect {
        let (row, col) = row_col(index);
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + col as f32 * cell_size,
                board_rect.top() + row as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn index_at(board_rect: egui::Rect, cell_size: f32, pos: egui::Pos2) -> Option<usize> {
        if !board_rect.contains(pos) {
            return None;
        }
        let col = ((pos.x - board_rect.left()) / cell_size) as usize;
        let row = ((pos.y - board_rect.top()) / cell_size) as usize;
        if col < BOARD_SIZE && row < BOARD_SIZE {
            Some(row * BOARD_SIZE + col)
        } else {
            None
        }
    }

    /// Paints the board and returns the empty cell the human clicked, if any.
    /// Clicks are only reported while `interactive` is set.
    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        winning_cells: &[usize],
        interactive: bool,
        palette: &Palette,
    ) -> Option<usize> {
        let side = ui.available_width().min(ui.available_height());
        let cell_size = (side / BOARD_SIZE as f32).clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE);
        let board_side = cell_size * BOARD_SIZE as f32;

        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(board_side, board_side),
            egui::Sense::click(),
        );

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, palette.board_background);

        for &index in winning_cells {
            painter.rect_filled(Self::cell_rect(rect, cell_size, index), 0.0, palette.winner);
        }

        self.last_hover = None;
        if interactive
            && let Some(hover_pos) = response.hover_pos()
            && let Some(index) = Self::index_at(rect, cell_size, hover_pos)
            && board.get(index) == Some(Mark::Empty)
        {
            painter.rect_filled(Self::cell_rect(rect, cell_size, index), 0.0, palette.hover);
            self.last_hover = Some(index);
        }

        let grid_stroke = egui::Stroke::new(Self::LINE_WIDTH, palette.grid_line);
        for i in 1..BOARD_SIZE {
            let x = rect.left() + i as f32 * cell_size;
            painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], grid_stroke);
            let y = rect.top() + i as f32 * cell_size;
            painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], grid_stroke);
        }

        for (index, mark) in board.cells().iter().enumerate() {
            let cell_rect = Self::cell_rect(rect, cell_size, index);
            match mark {
                Mark::X => Self::draw_x(painter, cell_rect, palette.x_mark),
                Mark::O => Self::draw_o(painter, cell_rect, palette.o_mark),
                Mark::Empty => {}
            }
        }

        if response.clicked() { self.last_hover } else { None }
    }

    fn draw_x(painter: &egui::Painter, rect: egui::Rect, color: egui::Color32) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(Self::MARK_WIDTH, color);

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

    fn draw_o(painter: &egui::Painter, rect: egui::Rect, color: egui::Color32) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        painter.circle_stroke(rect.center(), radius, egui::Stroke::new(Self::MARK_WIDTH, color));
    }
}
