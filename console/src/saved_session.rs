use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_common::tictactoe::{Board, EngineError, Symbol};

use crate::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

pub const DEFAULT_SAVE_FILE: &str = "tictactoe_session.yaml";

pub type SessionStore = ConfigManager<FileContentConfigProvider, SavedSession, YamlConfigSerializer>;

pub fn get_session_store(path: &Path) -> SessionStore {
    ConfigManager::from_yaml_file(path)
}

/// An unfinished game as written to disk. Cells are stored as symbol codes.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SavedSession {
    pub board: Vec<u8>,
    pub human_turn: bool,
    pub game_over: bool,
    pub human_starts_next: bool,
    #[serde(default)]
    pub saved_at: Option<String>,
}

impl SavedSession {
    pub fn capture(board: &Board, human_turn: bool, game_over: bool, human_starts_next: bool) -> Self {
        Self {
            board: board.snapshot().iter().map(|symbol| symbol.to_code()).collect(),
            human_turn,
            game_over,
            human_starts_next,
            saved_at: Some(Local::now().to_rfc3339()),
        }
    }

    pub fn to_board(&self) -> Result<Board, EngineError> {
        let cells = self
            .board
            .iter()
            .map(|&code| Symbol::from_code(code))
            .collect::<Result<Vec<_>, _>>()?;
        Board::from_snapshot(&cells)
    }
}

impl Validate for SavedSession {
    fn validate(&self) -> Result<(), String> {
        self.to_board()
            .map(|_| ())
            .map_err(|e| format!("Saved board is corrupt: {}", e))
    }
}
