use super::board::Board;
use super::types::{Outcome, Symbol};

/// Rows top to bottom, columns left to right, then both diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(outcome) = winning_line(board)
        .and_then(|[first, _, _]| board.occupant(first))
        .and_then(Outcome::win_for)
    {
        return outcome;
    }

    if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}

pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    LINES.into_iter().find(|&line| line_owner(board, line).is_some())
}

fn line_owner(board: &Board, [a, b, c]: [usize; 3]) -> Option<Symbol> {
    let mark = board.occupant(a)?;
    if mark == Symbol::Open {
        return None;
    }
    if board.occupant(b) == Some(mark) && board.occupant(c) == Some(mark) {
        Some(mark)
    } else {
        None
    }
}
