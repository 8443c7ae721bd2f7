use serde::{Deserialize, Serialize};
use tictactoe_common::SessionRng;
use tictactoe_common::tictactoe::{
    Board, Difficulty, EngineError, Outcome, Symbol, evaluate, select_move,
};

use crate::saved_session::SavedSession;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub human_wins: u32,
    pub ties: u32,
    pub opponent_wins: u32,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::HumanWin => self.human_wins += 1,
            Outcome::OpponentWin => self.opponent_wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::InProgress => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SessionError {
    Engine(EngineError),
    NotYourTurn,
    GameOver,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Engine(e) => write!(f, "{}", e),
            SessionError::NotYourTurn => write!(f, "It is not your turn"),
            SessionError::GameOver => write!(f, "The game is over, start a new one with 'n'"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<EngineError> for SessionError {
    fn from(e: EngineError) -> Self {
        SessionError::Engine(e)
    }
}

/// Turn-taking state machine around one [`Board`]. The board's outcome is the
/// only signal used to end a game.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    difficulty: Difficulty,
    scores: Scoreboard,
    human_turn: bool,
    game_over: bool,
    human_starts_next: bool,
}

impl GameSession {
    pub fn new(difficulty: Difficulty, scores: Scoreboard, human_starts_next: bool) -> Self {
        let mut session = Self {
            board: Board::new(),
            difficulty,
            scores,
            human_turn: human_starts_next,
            game_over: false,
            human_starts_next,
        };
        session.start_new_game();
        session
    }

    /// Clears the board and alternates who moves first.
    pub fn start_new_game(&mut self) {
        self.board.clear();
        self.game_over = false;
        self.human_turn = self.human_starts_next;
        self.human_starts_next = !self.human_starts_next;
    }

    pub fn play_human(&mut self, index: usize) -> Result<Outcome, SessionError> {
        if self.game_over {
            return Err(SessionError::GameOver);
        }
        if !self.human_turn {
            return Err(SessionError::NotYourTurn);
        }

        self.board.place(Symbol::Human, index)?;
        self.human_turn = false;
        Ok(self.finish_move())
    }

    pub fn play_opponent(&mut self, rng: &mut SessionRng) -> Result<(usize, Outcome), SessionError> {
        if self.game_over {
            return Err(SessionError::GameOver);
        }
        if self.human_turn {
            return Err(SessionError::NotYourTurn);
        }

        let index = select_move(&self.board, self.difficulty, rng)?;
        self.board.place(Symbol::Opponent, index)?;
        self.human_turn = true;
        Ok((index, self.finish_move()))
    }

    fn finish_move(&mut self) -> Outcome {
        let outcome = evaluate(&self.board);
        if outcome.is_terminal() {
            self.game_over = true;
            self.scores.record(outcome);
        }
        outcome
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    pub fn reset_scores(&mut self) {
        self.scores.reset();
    }

    pub fn is_human_turn(&self) -> bool {
        self.human_turn
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn human_starts_next(&self) -> bool {
        self.human_starts_next
    }

    pub fn awaiting_opponent(&self) -> bool {
        !self.game_over && !self.human_turn
    }

    pub fn to_saved(&self) -> SavedSession {
        SavedSession::capture(
            &self.board,
            self.human_turn,
            self.game_over,
            self.human_starts_next,
        )
    }

    /// Replaces the board and turn flags with a saved game. Nothing changes on error.
    pub fn restore(&mut self, saved: &SavedSession) -> Result<(), SessionError> {
        let board = saved.to_board()?;
        self.game_over = saved.game_over || evaluate(&board).is_terminal();
        self.board = board;
        self.human_turn = saved.human_turn;
        self.human_starts_next = saved.human_starts_next;
        Ok(())
    }
}
