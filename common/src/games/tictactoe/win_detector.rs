use super::board::Board;
use super::types::{GameOutcome, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    cells: [usize; 3],
}

impl WinningLine {
    const fn new(a: usize, b: usize, c: usize) -> Self {
        Self { cells: [a, b, c] }
    }

    pub fn cells(&self) -> [usize; 3] {
        self.cells
    }

    /// The mark filling all three cells, if any.
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.cells.map(|index| board.cells()[index]);
        if a != Mark::Empty && a == b && a == c {
            Some(a)
        } else {
            None
        }
    }
}

/// Rows, then columns, then diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    WinningLine::new(0, 1, 2),
    WinningLine::new(3, 4, 5),
    WinningLine::new(6, 7, 8),
    WinningLine::new(0, 3, 6),
    WinningLine::new(1, 4, 7),
    WinningLine::new(2, 5, 8),
    WinningLine::new(0, 4, 8),
    WinningLine::new(2, 4, 6),
];

pub fn check_win(board: &Board) -> Option<Mark> {
    WINNING_LINES.iter().find_map(|line| line.owner(board))
}

pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(mark) = check_win(board) {
        return GameOutcome::Win(mark);
    }
    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::Undecided
    }
}

/// Every completed line, in enumeration order.
pub fn winning_lines(board: &Board) -> Vec<WinningLine> {
    WINNING_LINES
        .iter()
        .filter(|line| line.owner(board).is_some())
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::parse_board;

    #[test]
    fn test_empty_board_is_undecided() {
        assert_eq!(evaluate(&Board::empty()), GameOutcome::Undecided);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = parse_board("X O X / X O O / O X X");
        assert_eq!(evaluate(&board), GameOutcome::Draw);
        assert!(winning_lines(&board).is_empty());
    }

    #[test]
    fn test_row_column_and_diagonal_wins() {
        assert_eq!(evaluate(&parse_board("_ _ _ / O O O / X X _")), GameOutcome::Win(Mark::O));
        assert_eq!(evaluate(&parse_board("_ X O / _ X O / _ X _")), GameOutcome::Win(Mark::X));
        assert_eq!(evaluate(&parse_board("O X X / _ O X / _ _ O")), GameOutcome::Win(Mark::O));
        assert_eq!(evaluate(&parse_board("O O X / _ X _ / X _ _")), GameOutcome::Win(Mark::X));
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let board = parse_board("X O X / O X O / O X X");
        assert_eq!(evaluate(&board), GameOutcome::Win(Mark::X));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board = parse_board("X O _ / _ X _ / O _ _");
        assert_eq!(evaluate(&board), evaluate(&board));
    }

    #[test]
    fn test_winning_lines_reports_every_line() {
        let board = parse_board("X X X / X O O / X O O");
        let lines: Vec<[usize; 3]> = winning_lines(&board).iter().map(|l| l.cells()).collect();
        assert_eq!(lines, vec![[0, 1, 2], [0, 3, 6]]);
    }

    #[test]
    fn test_lines_cover_rows_columns_diagonals_in_order() {
        let cells: Vec<[usize; 3]> = WINNING_LINES.iter().map(|l| l.cells()).collect();
        assert_eq!(&cells[..3], &[[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
        assert_eq!(&cells[3..6], &[[0, 3, 6], [1, 4, 7], [2, 5, 8]]);
        assert_eq!(&cells[6..], &[[0, 4, 8], [2, 4, 6]]);
    }
}
