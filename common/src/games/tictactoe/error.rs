use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfRange,
    Occupied,
    EmptyMark,
    GameOver,
    OutOfTurn,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMoveReason::OutOfRange => write!(f, "position out of bounds"),
            InvalidMoveReason::Occupied => write!(f, "cell is already marked"),
            InvalidMoveReason::EmptyMark => write!(f, "cannot place an empty mark"),
            InvalidMoveReason::GameOver => write!(f, "game is already over"),
            InvalidMoveReason::OutOfTurn => write!(f, "not your turn"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeError {
    InvalidMove { index: usize, reason: InvalidMoveReason },
    NoLegalMove,
}

impl fmt::Display for TicTacToeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicTacToeError::InvalidMove { index, reason } => {
                write!(f, "Invalid move at {}: {}", index, reason)
            }
            TicTacToeError::NoLegalMove => write!(f, "No legal move: board is full or decided"),
        }
    }
}

impl std::error::Error for TicTacToeError {}
