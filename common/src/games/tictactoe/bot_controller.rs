use crate::games::SessionRng;
use super::board::Board;
use super::error::TicTacToeError;
use super::game_state::TicTacToeGameState;
use super::types::{GameOutcome, Mark, Strategy};
use super::win_detector::evaluate;

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            current_mark: state.current_mark(),
        }
    }
}

pub fn calculate_move(
    strategy: Strategy,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<usize, TicTacToeError> {
    match strategy {
        Strategy::Random => calculate_random_move(input, rng),
        Strategy::Minimax => calculate_minimax_move(input),
    }
}

fn check_playable(input: &BotInput) -> Result<Mark, TicTacToeError> {
    if evaluate(&input.board).is_decided() {
        return Err(TicTacToeError::NoLegalMove);
    }
    input.current_mark.opponent().ok_or(TicTacToeError::NoLegalMove)
}

pub fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Result<usize, TicTacToeError> {
    check_playable(input)?;
    let available_moves = input.board.empty_positions();
    let idx = rng.random_range(0..available_moves.len());
    Ok(available_moves[idx])
}

/// Exhaustive minimax without pruning. Scores ignore depth, so among equally
/// good moves the lowest index is returned, even if a later one wins sooner.
pub fn calculate_minimax_move(input: &BotInput) -> Result<usize, TicTacToeError> {
    let bot_mark = input.current_mark;
    let opponent_mark = check_playable(input)?;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in input.board.empty_positions() {
        let board = input.board.with_mark(index, bot_mark);
        let score = minimax(board, opponent_mark, bot_mark, bot_mark);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move.ok_or(TicTacToeError::NoLegalMove)
}

/// Terminal score from `maximizing_mark`'s point of view, `None` while undecided.
pub fn score(board: &Board, maximizing_mark: Mark) -> Option<i32> {
    match evaluate(board) {
        GameOutcome::Win(winner) if winner == maximizing_mark => Some(1),
        GameOutcome::Win(_) => Some(-1),
        GameOutcome::Draw => Some(0),
        GameOutcome::Undecided => None,
    }
}

fn minimax(board: Board, to_move: Mark, waiting: Mark, maximizing_mark: Mark) -> i32 {
    if let Some(score) = score(&board, maximizing_mark) {
        return score;
    }

    let scores = board
        .empty_positions()
        .into_iter()
        .map(|index| minimax(board.with_mark(index, to_move), waiting, to_move, maximizing_mark));

    // An undecided board always has an empty cell, so the fold never stays at its seed.
    if to_move == maximizing_mark {
        scores.fold(i32::MIN, i32::max)
    } else {
        scores.fold(i32::MAX, i32::min)
    }
}
