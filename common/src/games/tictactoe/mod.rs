mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, row_col};
pub use bot_controller::{BotInput, calculate_minimax_move, calculate_move, calculate_random_move, score};
pub use error::{InvalidMoveReason, TicTacToeError};
pub use game_state::{BOT_MARK, HUMAN_MARK, Scoreboard, TicTacToeGameState};
pub use types::{GameOutcome, Mark, Strategy};
pub use win_detector::{WINNING_LINES, WinningLine, check_win, evaluate, winning_lines};
