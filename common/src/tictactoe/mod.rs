mod board;
mod bot_controller;
mod error;
mod minimax;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::select_move;
pub use error::EngineError;
pub use types::{BOARD_SIZE, BOARD_WIDTH, Difficulty, Outcome, Symbol};
pub use win_detector::{LINES, evaluate, winning_line};
