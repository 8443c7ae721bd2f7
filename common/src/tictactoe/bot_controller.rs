use crate::log;
use crate::session_rng::SessionRng;
use super::board::Board;
use super::error::EngineError;
use super::minimax::calculate_minimax_move;
use super::types::{Difficulty, Outcome, Symbol};
use super::win_detector::{LINES, evaluate};

/// Chooses the opponent's next cell. The caller's board is never modified.
pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<usize, EngineError> {
    if evaluate(board).is_terminal() {
        return Err(EngineError::NoLegalMove);
    }

    let index = match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Harder => calculate_heuristic_move(board, rng),
        Difficulty::Expert => calculate_minimax_move(board),
    }
    .ok_or(EngineError::NoLegalMove)?;

    log!("Opponent ({}) selected cell {}", difficulty, index);
    Ok(index)
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    rng.choose(&board.open_cells())
}

fn calculate_heuristic_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    find_winning_cell(board, Symbol::Opponent)
        .or_else(|| find_completing_move(board, Symbol::Human))
        .or_else(|| calculate_random_move(board, rng))
}

/// Lowest open cell that wins the game for `mark` outright.
fn find_winning_cell(board: &Board, mark: Symbol) -> Option<usize> {
    let target = Outcome::win_for(mark)?;
    board.open_cells().into_iter().find(|&index| {
        let mut trial = *board;
        trial.set_unchecked(index, mark);
        evaluate(&trial) == target
    })
}

/// First open cell, in line order, that would give `mark` three in a line.
fn find_completing_move(board: &Board, mark: Symbol) -> Option<usize> {
    LINES.into_iter().find_map(|line| {
        let mut own = 0;
        let mut open = None;
        for index in line {
            match board.occupant(index) {
                Some(cell) if cell == mark => own += 1,
                Some(Symbol::Open) => open = Some(index),
                _ => return None,
            }
        }
        if own == 2 { open } else { None }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use Symbol::{Human as H, Open as E, Opponent as O};

    fn board(cells: [Symbol; 9]) -> Board {
        Board::from_snapshot(&cells).unwrap()
    }

    /// Every non-terminal position reachable by alternating legal moves.
    fn reachable_positions() -> Vec<Board> {
        fn walk(board: &mut Board, mover: Symbol, seen: &mut HashSet<Board>) {
            if evaluate(board).is_terminal() || !seen.insert(*board) {
                return;
            }
            for index in board.open_cells() {
                board.set_unchecked(index, mover);
                walk(board, mover.other().unwrap(), seen);
                board.set_unchecked(index, Symbol::Open);
            }
        }

        let mut seen = HashSet::new();
        walk(&mut Board::new(), Symbol::Human, &mut seen);
        for first in 0..9 {
            let mut board = Board::new();
            board.place(Symbol::Opponent, first).unwrap();
            walk(&mut board, Symbol::Human, &mut seen);
        }
        seen.into_iter().collect()
    }

    #[test]
    fn test_harder_blocks_human_row() {
        let b = board([H, H, E, E, O, E, E, E, E]);
        let mut rng = SessionRng::new(1);
        for _ in 0..20 {
            assert_eq!(select_move(&b, Difficulty::Harder, &mut rng), Ok(2));
        }
    }

    #[test]
    fn test_harder_and_expert_complete_diagonal() {
        let b = board([O, H, E, H, O, E, E, E, E]);
        let mut rng = SessionRng::new(7);
        assert_eq!(select_move(&b, Difficulty::Harder, &mut rng), Ok(8));
        assert_eq!(select_move(&b, Difficulty::Expert, &mut rng), Ok(8));
    }

    #[test]
    fn test_harder_prefers_win_over_block() {
        let b = board([H, H, E, O, O, E, E, E, E]);
        let mut rng = SessionRng::new(3);
        assert_eq!(select_move(&b, Difficulty::Harder, &mut rng), Ok(5));
    }

    #[test]
    fn test_harder_takes_lowest_winning_cell() {
        // Opponent can finish row 1 at 5, column 0 at 0 or the anti-diagonal at 2.
        let b = board([E, H, E, O, O, E, O, H, H]);
        let mut rng = SessionRng::new(9);
        assert_eq!(find_winning_cell(&b, Symbol::Opponent), Some(0));
        assert_eq!(find_completing_move(&b, Symbol::Opponent), Some(5));
        assert_eq!(select_move(&b, Difficulty::Harder, &mut rng), Ok(0));
    }

    #[test]
    fn test_harder_blocks_first_threat_in_line_order() {
        // Human threatens column 0 at cell 6 and the diagonal at cell 4.
        let b = board([H, E, E, H, E, O, E, E, H]);
        let mut rng = SessionRng::new(5);
        assert_eq!(find_completing_move(&b, Symbol::Human), Some(6));
        assert_eq!(select_move(&b, Difficulty::Harder, &mut rng), Ok(6));
    }

    #[test]
    fn test_easy_picks_open_cells_uniformly_enough() {
        let b = board([H, O, H, E, E, E, O, H, O]);
        let mut rng = SessionRng::new(11);
        let mut seen = [false; 9];
        for _ in 0..200 {
            let index = select_move(&b, Difficulty::Easy, &mut rng).unwrap();
            assert_eq!(b.occupant(index), Some(Symbol::Open));
            seen[index] = true;
        }
        assert!(seen[3] && seen[4] && seen[5]);
    }

    #[test]
    fn test_full_board_has_no_legal_move() {
        let b = board([H, O, H, H, O, O, O, H, H]);
        let mut rng = SessionRng::new(0);
        for difficulty in Difficulty::ALL {
            assert_eq!(select_move(&b, difficulty, &mut rng), Err(EngineError::NoLegalMove));
        }
    }

    #[test]
    fn test_finished_game_has_no_legal_move() {
        let b = board([H, H, H, O, O, E, E, E, E]);
        let mut rng = SessionRng::new(0);
        assert_eq!(select_move(&b, Difficulty::Expert, &mut rng), Err(EngineError::NoLegalMove));
    }

    #[test]
    fn test_every_tier_returns_open_cell_and_leaves_board_untouched() {
        let mut rng = SessionRng::new(99);
        for position in reachable_positions() {
            for difficulty in Difficulty::ALL {
                let before = position;
                let index = select_move(&position, difficulty, &mut rng).unwrap();
                assert_eq!(position.occupant(index), Some(Symbol::Open));
                assert_eq!(position, before);
            }
        }
    }
}
