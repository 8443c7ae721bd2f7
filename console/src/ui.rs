use tictactoe_common::tictactoe::{Outcome, winning_line};

use crate::game_session::{GameSession, Scoreboard};

pub fn render_board(session: &GameSession) -> String {
    let mut out = format!("\n{}", session.board());
    if let Some([a, b, c]) = winning_line(session.board()) {
        out.push_str(&format!("Winning line: {} {} {}\n", a + 1, b + 1, c + 1));
    }
    out
}

pub fn render_scores(scores: &Scoreboard) -> String {
    format!(
        "Human: {}  Ties: {}  Computer: {}",
        scores.human_wins, scores.ties, scores.opponent_wins
    )
}

pub fn render_status(session: &GameSession) -> String {
    if session.is_game_over() {
        outcome_message(session.outcome()).to_string()
    } else if session.is_human_turn() {
        "Your turn (X). Pick a cell 1-9.".to_string()
    } else {
        "Computer's turn (O)...".to_string()
    }
}

pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Tie => "It's a tie! Type 'n' for a new game.",
        Outcome::HumanWin => "You won! Type 'n' for a new game.",
        Outcome::OpponentWin => "The computer won! Type 'n' for a new game.",
        Outcome::InProgress => "Game in progress.",
    }
}

pub fn help_text() -> &'static str {
    "Commands:\n  1-9                        play a cell\n  n                          new game\n  d <easy|harder|expert>     change difficulty\n  s                          show scores\n  r                          reset scores\n  h                          this help\n  q                          save and quit"
}
