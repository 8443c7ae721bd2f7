use super::board::Board;
use super::types::{Outcome, Symbol};
use super::win_detector::evaluate;

const WIN_SCORE: i32 = 10;

/// Optimal move for the opponent. Searches a private copy of the board, so the
/// caller's board is never touched. Ties go to the lowest cell index.
pub fn calculate_minimax_move(board: &Board) -> Option<usize> {
    let mut board = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;
    let mut alpha = i32::MIN;

    for index in board.open_cells() {
        board.set_unchecked(index, Symbol::Opponent);
        let score = minimax(&mut board, 1, false, alpha, i32::MAX);
        board.set_unchecked(index, Symbol::Open);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
        alpha = alpha.max(best_score);
    }

    best_move
}

fn minimax(board: &mut Board, depth: i32, is_maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
    match evaluate(board) {
        Outcome::OpponentWin => return WIN_SCORE - depth,
        Outcome::HumanWin => return depth - WIN_SCORE,
        Outcome::Tie => return 0,
        Outcome::InProgress => {}
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in board.open_cells() {
            board.set_unchecked(index, Symbol::Opponent);
            let eval = minimax(board, depth + 1, false, alpha, beta);
            board.set_unchecked(index, Symbol::Open);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in board.open_cells() {
            board.set_unchecked(index, Symbol::Human);
            let eval = minimax(board, depth + 1, true, alpha, beta);
            board.set_unchecked(index, Symbol::Open);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Symbol::{Human as H, Open as E, Opponent as O};

    fn board(cells: [Symbol; 9]) -> Board {
        Board::from_snapshot(&cells).unwrap()
    }

    /// Plays every possible human line against the minimax opponent and
    /// returns (games, opponent wins, ties).
    fn play_all_lines(board: &mut Board, human_to_move: bool, totals: &mut (u32, u32, u32)) {
        match evaluate(board) {
            Outcome::HumanWin => panic!("minimax lost on board {:?}", board.snapshot()),
            Outcome::OpponentWin => {
                totals.0 += 1;
                totals.1 += 1;
                return;
            }
            Outcome::Tie => {
                totals.0 += 1;
                totals.2 += 1;
                return;
            }
            Outcome::InProgress => {}
        }

        if human_to_move {
            for index in board.open_cells() {
                let mut next = *board;
                next.place(Symbol::Human, index).unwrap();
                play_all_lines(&mut next, false, totals);
            }
        } else {
            let index = calculate_minimax_move(board).unwrap();
            let mut next = *board;
            next.place(Symbol::Opponent, index).unwrap();
            play_all_lines(&mut next, true, totals);
        }
    }

    #[test]
    fn test_empty_board_opens_in_corner() {
        assert_eq!(calculate_minimax_move(&Board::new()), Some(0));
    }

    #[test]
    fn test_never_loses_when_human_starts() {
        let mut totals = (0, 0, 0);
        play_all_lines(&mut Board::new(), true, &mut totals);
        assert!(totals.0 > 0);
        assert!(totals.1 > 0, "minimax should punish some human mistakes");
    }

    #[test]
    fn test_never_loses_when_opponent_starts() {
        let mut totals = (0, 0, 0);
        play_all_lines(&mut Board::new(), false, &mut totals);
        assert!(totals.0 > 0);
        assert!(totals.2 > 0, "perfect human play ends in a tie");
    }

    #[test]
    fn test_avoids_fork_and_blocks_threat() {
        // Opposite corners against the centre: a corner reply loses to a fork.
        let b = board([H, E, E, E, O, E, E, E, H]);
        let index = calculate_minimax_move(&b).unwrap();
        assert!([1, 3, 5, 7].contains(&index));

        let b = board([H, H, E, E, O, E, E, E, E]);
        assert_eq!(calculate_minimax_move(&b), Some(2));
    }

    #[test]
    fn test_prefers_fastest_win() {
        // Winning now at 2 beats setting up a later win.
        let b = board([O, O, E, H, H, E, E, E, E]);
        assert_eq!(calculate_minimax_move(&b), Some(2));
    }

    #[test]
    fn test_search_does_not_modify_input() {
        let b = board([H, E, E, E, E, E, E, E, E]);
        let before = b;
        let index = calculate_minimax_move(&b).unwrap();
        assert_eq!(b, before);
        assert_eq!(index, 4);
    }

    #[test]
    fn test_last_open_cell_is_chosen() {
        let b = board([H, O, H, H, O, O, O, H, E]);
        assert_eq!(calculate_minimax_move(&b), Some(8));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let b = board([H, O, H, H, O, O, O, H, H]);
        assert_eq!(calculate_minimax_move(&b), None);
    }
}
