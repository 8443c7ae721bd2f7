#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    InvalidMove { index: usize },
    OutOfBounds { index: usize },
    InvalidLength { found: usize },
    NoLegalMove,
    UnknownCode { code: u8 },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidMove { index } => write!(f, "Cell {} is not open", index),
            EngineError::OutOfBounds { index } => {
                write!(f, "Cell index {} is out of bounds (expected 0-8)", index)
            }
            EngineError::InvalidLength { found } => {
                write!(f, "Board snapshot has {} cells, expected 9", found)
            }
            EngineError::NoLegalMove => write!(f, "No legal move: the game is already over"),
            EngineError::UnknownCode { code } => write!(f, "Unknown code: {}", code),
        }
    }
}

impl std::error::Error for EngineError {}
