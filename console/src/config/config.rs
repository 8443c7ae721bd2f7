use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_common::tictactoe::Difficulty;

use crate::game_session::Scoreboard;
use super::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "tictactoe_console_config.yaml";
const MAX_OPPONENT_DELAY_MS: u64 = 10_000;

pub type SettingsManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(path: Option<&Path>) -> SettingsManager {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(default_config_path()),
    }
}

/// Settings that survive between runs.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub scores: Scoreboard,
    #[serde(default = "default_human_starts_next")]
    pub human_starts_next: bool,
    #[serde(default = "default_opponent_delay_ms")]
    pub opponent_delay_ms: u64,
}

fn default_human_starts_next() -> bool {
    true
}

fn default_opponent_delay_ms() -> u64 {
    1000
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.opponent_delay_ms > MAX_OPPONENT_DELAY_MS {
            return Err(format!(
                "opponent_delay_ms must not exceed {} (got {})",
                MAX_OPPONENT_DELAY_MS, self.opponent_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            scores: Scoreboard::default(),
            human_starts_next: default_human_starts_next(),
            opponent_delay_ms: default_opponent_delay_ms(),
        }
    }
}
