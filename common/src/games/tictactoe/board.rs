use std::fmt;

use super::error::{InvalidMoveReason, TicTacToeError};
use super::types::Mark;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Row-major 3x3 grid. `Copy`, so every operation works on its own snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Indices holding `Mark::Empty`, ascending.
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn place(&self, index: usize, mark: Mark) -> Result<Board, TicTacToeError> {
        let invalid = |reason| TicTacToeError::InvalidMove { index, reason };

        if mark == Mark::Empty {
            return Err(invalid(InvalidMoveReason::EmptyMark));
        }
        match self.get(index) {
            None => Err(invalid(InvalidMoveReason::OutOfRange)),
            Some(Mark::Empty) => Ok(self.with_mark(index, mark)),
            Some(_) => Err(invalid(InvalidMoveReason::Occupied)),
        }
    }

    /// Unchecked placement for callers that already know `index` is empty.
    pub(crate) fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[index] = mark;
        next
    }
}

pub fn row_col(index: usize) -> (usize, usize) {
    (index / BOARD_SIZE, index % BOARD_SIZE)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {} {}", chunk[0], chunk[1], chunk[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn parse_board(layout: &str) -> Board {
    let mut cells = [Mark::Empty; CELL_COUNT];
    let symbols: Vec<char> = layout.chars().filter(|c| !c.is_whitespace() && *c != '/').collect();
    assert_eq!(symbols.len(), CELL_COUNT, "layout must describe 9 cells: {}", layout);
    for (cell, symbol) in cells.iter_mut().zip(symbols) {
        *cell = match symbol {
            'X' => Mark::X,
            'O' => Mark::O,
            '_' => Mark::Empty,
            other => panic!("unexpected cell symbol {}", other),
        };
    }
    Board::from_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_all_positions() {
        assert_eq!(Board::empty().empty_positions(), (0..9usize).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_positions_is_complement_in_order() {
        let board = parse_board("X O _ / _ X _ / O _ _");
        assert_eq!(board.empty_positions(), vec![2, 3, 5, 7, 8]);

        let occupied: Vec<usize> = (0..9).filter(|i| board.get(*i) != Some(Mark::Empty)).collect();
        assert_eq!(occupied, vec![0, 1, 4, 6]);
    }

    #[test]
    fn test_empty_positions_on_every_board() {
        const MARKS: [Mark; 3] = [Mark::Empty, Mark::X, Mark::O];
        for code in 0..3usize.pow(CELL_COUNT as u32) {
            let mut cells = [Mark::Empty; CELL_COUNT];
            let mut rest = code;
            for cell in cells.iter_mut() {
                *cell = MARKS[rest % 3];
                rest /= 3;
            }
            let board = Board::from_cells(cells);
            let positions = board.empty_positions();

            assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
            for (index, cell) in cells.iter().enumerate() {
                assert_eq!(positions.contains(&index), *cell == Mark::Empty, "board\n{}", board);
            }
            assert_eq!(positions.is_empty(), board.is_full());
        }
    }

    #[test]
    fn test_place_returns_new_board() {
        let board = Board::empty();
        let next = board.place(4, Mark::X).unwrap();
        assert_eq!(next.get(4), Some(Mark::X));
        assert_eq!(board.get(4), Some(Mark::Empty));
    }

    #[test]
    fn test_place_on_occupied_cell_fails() {
        let board = parse_board("X _ _ / _ _ _ / _ _ _");
        let result = board.place(0, Mark::O);
        assert_eq!(
            result,
            Err(TicTacToeError::InvalidMove { index: 0, reason: InvalidMoveReason::Occupied })
        );
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.count(Mark::O), 0);
    }

    #[test]
    fn test_place_out_of_range_fails() {
        let result = Board::empty().place(9, Mark::X);
        assert!(matches!(
            result,
            Err(TicTacToeError::InvalidMove { index: 9, reason: InvalidMoveReason::OutOfRange })
        ));
    }

    #[test]
    fn test_place_empty_mark_fails() {
        let result = Board::empty().place(0, Mark::Empty);
        assert!(matches!(
            result,
            Err(TicTacToeError::InvalidMove { reason: InvalidMoveReason::EmptyMark, .. })
        ));
    }

    #[test]
    fn test_row_col_mapping() {
        assert_eq!(row_col(0), (0, 0));
        assert_eq!(row_col(5), (1, 2));
        assert_eq!(row_col(7), (2, 1));
    }

    #[test]
    fn test_display() {
        let board = parse_board("X O _ / _ _ _ / _ _ X");
        assert_eq!(board.to_string(), "X O _\n_ _ _\n_ _ X");
    }
}
