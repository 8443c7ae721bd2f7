use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use super::error::EngineError;

pub const BOARD_SIZE: usize = 9;
pub const BOARD_WIDTH: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Open,
    Human,
    Opponent,
}

impl Symbol {
    pub fn to_code(self) -> u8 {
        match self {
            Symbol::Open => 0,
            Symbol::Human => 1,
            Symbol::Opponent => 2,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, EngineError> {
        match code {
            0 => Ok(Symbol::Open),
            1 => Ok(Symbol::Human),
            2 => Ok(Symbol::Opponent),
            _ => Err(EngineError::UnknownCode { code }),
        }
    }

    pub fn other(self) -> Option<Symbol> {
        match self {
            Symbol::Human => Some(Symbol::Opponent),
            Symbol::Opponent => Some(Symbol::Human),
            Symbol::Open => None,
        }
    }

    pub fn mark(self) -> Option<char> {
        match self {
            Symbol::Human => Some('X'),
            Symbol::Opponent => Some('O'),
            Symbol::Open => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Harder,
    #[default]
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Harder, Difficulty::Expert];

    pub fn to_code(self) -> u8 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Harder => 1,
            Difficulty::Expert => 2,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, EngineError> {
        match code {
            0 => Ok(Difficulty::Easy),
            1 => Ok(Difficulty::Harder),
            2 => Ok(Difficulty::Expert),
            _ => Err(EngineError::UnknownCode { code }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Harder => "harder",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.name() == lowered)
            .ok_or_else(|| format!("Unknown difficulty '{}', expected easy, harder or expert", s))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Tie,
    HumanWin,
    OpponentWin,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    pub(crate) fn win_for(symbol: Symbol) -> Option<Outcome> {
        match symbol {
            Symbol::Human => Some(Outcome::HumanWin),
            Symbol::Opponent => Some(Outcome::OpponentWin),
            Symbol::Open => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_codes_round_trip() {
        for symbol in [Symbol::Open, Symbol::Human, Symbol::Opponent] {
            assert_eq!(Symbol::from_code(symbol.to_code()).unwrap(), symbol);
        }
        assert_eq!(Symbol::from_code(3), Err(EngineError::UnknownCode { code: 3 }));
    }

    #[test]
    fn test_difficulty_codes_round_trip() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_code(difficulty.to_code()).unwrap(), difficulty);
        }
        assert!(Difficulty::from_code(7).is_err());
    }

    #[test]
    fn test_difficulty_defaults_to_expert() {
        assert_eq!(Difficulty::default(), Difficulty::Expert);
    }

    #[test]
    fn test_difficulty_parses_case_insensitive() {
        assert_eq!("Harder".parse::<Difficulty>().unwrap(), Difficulty::Harder);
        assert_eq!(" EASY ".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_symbol_other() {
        assert_eq!(Symbol::Human.other(), Some(Symbol::Opponent));
        assert_eq!(Symbol::Opponent.other(), Some(Symbol::Human));
        assert_eq!(Symbol::Open.other(), None);
    }
}
