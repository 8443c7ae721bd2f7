use std::fmt;
use super::error::EngineError;
use super::types::{BOARD_SIZE, BOARD_WIDTH, Symbol};

/// The 3x3 grid, indexed 0-8 row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Symbol; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Symbol::Open; BOARD_SIZE],
        }
    }

    pub fn from_snapshot(cells: &[Symbol]) -> Result<Self, EngineError> {
        let mut board = Self::new();
        board.restore(cells)?;
        Ok(board)
    }

    pub fn clear(&mut self) {
        self.cells = [Symbol::Open; BOARD_SIZE];
    }

    /// Places a player's symbol on an open cell. The board is left untouched on error.
    pub fn place(&mut self, symbol: Symbol, index: usize) -> Result<(), EngineError> {
        if index >= BOARD_SIZE {
            return Err(EngineError::OutOfBounds { index });
        }

        if symbol == Symbol::Open || self.cells[index] != Symbol::Open {
            return Err(EngineError::InvalidMove { index });
        }

        self.cells[index] = symbol;
        Ok(())
    }

    pub fn occupant(&self, index: usize) -> Option<Symbol> {
        self.cells.get(index).copied()
    }

    pub fn open_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Symbol::Open)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Symbol::Open)
    }

    pub fn snapshot(&self) -> [Symbol; BOARD_SIZE] {
        self.cells
    }

    pub fn restore(&mut self, cells: &[Symbol]) -> Result<(), EngineError> {
        let cells: [Symbol; BOARD_SIZE] = cells
            .try_into()
            .map_err(|_| EngineError::InvalidLength { found: cells.len() })?;
        self.cells = cells;
        Ok(())
    }

    pub(crate) fn set_unchecked(&mut self, index: usize, symbol: Symbol) {
        self.cells[index] = symbol;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_WIDTH).enumerate() {
            if row_index > 0 {
                writeln!(f, "---+---+---")?;
            }
            let rendered: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell.mark() {
                    Some(mark) => format!(" {} ", mark),
                    None => format!(" {} ", row_index * BOARD_WIDTH + col + 1),
                })
                .collect();
            writeln!(f, "{}", rendered.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_open() {
        let board = Board::new();
        assert_eq!(board.open_cells(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_sets_exactly_one_cell() {
        let mut board = Board::new();
        board.place(Symbol::Human, 4).unwrap();

        assert_eq!(board.occupant(4), Some(Symbol::Human));
        assert_eq!(board.open_cells().len(), 8);
    }

    #[test]
    fn test_place_on_occupied_cell_is_rejected_and_board_unchanged() {
        let mut board = Board::new();
        board.place(Symbol::Human, 0).unwrap();
        let before = board.snapshot();

        let result = board.place(Symbol::Opponent, 0);

        assert_eq!(result, Err(EngineError::InvalidMove { index: 0 }));
        assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(board.place(Symbol::Human, 9), Err(EngineError::OutOfBounds { index: 9 }));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_open_symbol_is_rejected() {
        let mut board = Board::new();
        assert_eq!(board.place(Symbol::Open, 3), Err(EngineError::InvalidMove { index: 3 }));
    }

    #[test]
    fn test_occupant_out_of_range_is_none() {
        assert_eq!(Board::new().occupant(12), None);
    }

    #[test]
    fn test_clear_resets_all_cells() {
        let mut board = Board::new();
        board.place(Symbol::Human, 0).unwrap();
        board.place(Symbol::Opponent, 8).unwrap();

        board.clear();

        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_restore_rejects_wrong_length_and_keeps_board() {
        let mut board = Board::new();
        board.place(Symbol::Human, 2).unwrap();
        let before = board;

        let result = board.restore(&[Symbol::Opponent; 8]);

        assert_eq!(result, Err(EngineError::InvalidLength { found: 8 }));
        assert_eq!(board, before);
        assert_eq!(
            board.restore(&[Symbol::Open; 10]),
            Err(EngineError::InvalidLength { found: 10 })
        );
    }

    #[test]
    fn test_snapshot_restore_round_trip() {
        let mut board = Board::new();
        board.place(Symbol::Human, 1).unwrap();
        board.place(Symbol::Opponent, 5).unwrap();

        let restored = Board::from_snapshot(&board.snapshot()).unwrap();

        assert_eq!(restored, board);
    }

    #[test]
    fn test_display_shows_marks_and_cell_numbers() {
        let mut board = Board::new();
        board.place(Symbol::Human, 0).unwrap();
        board.place(Symbol::Opponent, 4).unwrap();

        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], " X | 2 | 3 ");
        assert_eq!(lines[1], "---+---+---");
        assert_eq!(lines[2], " 4 | O | 6 ");
        assert_eq!(lines[4], " 7 | 8 | 9 ");
    }
}
