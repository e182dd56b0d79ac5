use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::error::{InvalidMoveReason, TicTacToeError};
use super::types::{GameOutcome, Mark, Strategy};
use super::win_detector::{evaluate, winning_lines};

pub const HUMAN_MARK: Mark = Mark::X;
pub const BOT_MARK: Mark = Mark::O;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
}

impl Scoreboard {
    fn record(&mut self, outcome: GameOutcome) {
        match outcome.winner() {
            Some(Mark::X) => self.x_wins += 1,
            Some(Mark::O) => self.o_wins += 1,
            _ => {}
        }
    }

    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
            Mark::Empty => 0,
        }
    }
}

/// One human-vs-computer match: the current round plus the running score.
/// The human plays `X` and opens every round.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    outcome: GameOutcome,
    strategy: Strategy,
    scores: Scoreboard,
    round: u64,
}

impl TicTacToeGameState {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            board: Board::empty(),
            current_mark: HUMAN_MARK,
            outcome: GameOutcome::Undecided,
            strategy,
            scores: Scoreboard::default(),
            round: 1,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn is_active(&self) -> bool {
        !self.outcome.is_decided()
    }

    pub fn is_bot_turn(&self) -> bool {
        self.is_active() && self.current_mark == BOT_MARK
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    pub fn place_human_mark(&mut self, index: usize) -> Result<GameOutcome, TicTacToeError> {
        self.place_mark(HUMAN_MARK, index)
    }

    /// Picks the computer's move with the active strategy and plays it.
    pub fn play_bot_move(&mut self, rng: &mut SessionRng) -> Result<usize, TicTacToeError> {
        if !self.is_bot_turn() {
            return Err(TicTacToeError::NoLegalMove);
        }
        let index = calculate_move(self.strategy, &BotInput::from_game_state(self), rng)?;
        self.place_mark(BOT_MARK, index)?;
        Ok(index)
    }

    fn place_mark(&mut self, mark: Mark, index: usize) -> Result<GameOutcome, TicTacToeError> {
        let invalid = |reason| TicTacToeError::InvalidMove { index, reason };

        if !self.is_active() {
            return Err(invalid(InvalidMoveReason::GameOver));
        }
        if mark != self.current_mark {
            return Err(invalid(InvalidMoveReason::OutOfTurn));
        }

        self.board = self.board.place(index, mark)?;
        self.outcome = evaluate(&self.board);

        match self.outcome {
            GameOutcome::Undecided => self.switch_turn(),
            outcome => self.scores.record(outcome),
        }

        Ok(self.outcome)
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == HUMAN_MARK { BOT_MARK } else { HUMAN_MARK };
    }

    /// Clears the board for a new round. Scores carry over.
    pub fn restart(&mut self) {
        self.board = Board::empty();
        self.current_mark = HUMAN_MARK;
        self.outcome = GameOutcome::Undecided;
        self.round += 1;
    }

    /// Cells of every completed line, for highlighting.
    pub fn winning_cells(&self) -> Vec<usize> {
        let mut cells: Vec<usize> = winning_lines(&self.board)
            .iter()
            .flat_map(|line| line.cells())
            .collect();
        cells.sort_unstable();
        cells.dedup();
        cells
    }

    pub fn status_message(&self) -> String {
        match self.outcome {
            GameOutcome::Win(Mark::X) => "Player X wins!".to_string(),
            GameOutcome::Win(_) => "AI (O) wins!".to_string(),
            GameOutcome::Draw => "Draw!".to_string(),
            GameOutcome::Undecided if self.current_mark == BOT_MARK => {
                "AI (O) is thinking...".to_string()
            }
            GameOutcome::Undecided => "Player X's turn".to_string(),
        }
    }
}
