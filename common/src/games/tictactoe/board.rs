use super::error::BoardError;
use super::types::{Mark, Player, Position};

pub const SUPPORTED_SIZES: &[usize] = &[3, 5, 7];

/// Run length needed to win on a board of the given size.
pub fn win_length_for(size: usize) -> usize {
    match size {
        3 => 3,
        _ => 4,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    win_length: usize,
    cells: Vec<Vec<Mark>>,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !SUPPORTED_SIZES.contains(&size) {
            return Err(BoardError::InvalidSize {
                size,
                supported: SUPPORTED_SIZES,
            });
        }

        Ok(Self {
            size,
            win_length: win_length_for(size),
            cells: vec![vec![Mark::Empty; size]; size],
        })
    }

    /// Builds a board from rows of `X`, `O` and `.` characters.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new(rows.len()).unwrap();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                board.cells[row][col] = match ch {
                    'X' => Mark::X,
                    'O' => Mark::O,
                    _ => Mark::Empty,
                };
            }
        }
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Mark, BoardError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    pub(crate) fn mark_at(&self, position: Position) -> Mark {
        self.cells[position.row][position.col]
    }

    pub fn place_mark(&mut self, row: usize, col: usize, player: Player) -> Result<(), BoardError> {
        self.check_bounds(row, col)?;

        let occupant = self.cells[row][col];
        if !occupant.is_empty() {
            return Err(BoardError::CellOccupied {
                position: Position::new(row, col),
                occupant,
            });
        }

        self.cells[row][col] = player.mark();
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    pub fn rows(&self) -> &[Vec<Mark>] {
        &self.cells
    }

    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn marks_placed(&self) -> usize {
        self.size * self.size - self.available_moves().len()
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BoardError> {
        if row >= self.size || col >= self.size {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty_for_supported_sizes() {
        for &size in SUPPORTED_SIZES {
            let board = Board::new(size).unwrap();
            assert_eq!(board.size(), size);
            assert_eq!(board.available_moves().len(), size * size);
            assert!(!board.is_full());
            assert_eq!(board.marks_placed(), 0);
        }
    }

    #[test]
    fn test_unsupported_sizes_are_rejected() {
        for size in [0, 1, 2, 4, 6, 8, 9] {
            let result = Board::new(size);
            assert!(matches!(result, Err(BoardError::InvalidSize { size: s, .. }) if s == size));
        }
    }

    #[test]
    fn test_win_length_depends_on_size() {
        assert_eq!(Board::new(3).unwrap().win_length(), 3);
        assert_eq!(Board::new(5).unwrap().win_length(), 4);
        assert_eq!(Board::new(7).unwrap().win_length(), 4);
    }

    #[test]
    fn test_place_mark_sets_cell() {
        let mut board = Board::new(3).unwrap();
        board.place_mark(1, 2, Player::O).unwrap();
        assert_eq!(board.get(1, 2).unwrap(), Mark::O);
        assert_eq!(board.get(2, 1).unwrap(), Mark::Empty);
        assert_eq!(board.marks_placed(), 1);
    }

    #[test]
    fn test_place_mark_on_occupied_cell_fails_and_keeps_board() {
        let mut board = Board::new(3).unwrap();
        board.place_mark(0, 0, Player::X).unwrap();
        let before = board.clone();

        for _ in 0..3 {
            let result = board.place_mark(0, 0, Player::O);
            assert_eq!(
                result,
                Err(BoardError::CellOccupied {
                    position: Position::new(0, 0),
                    occupant: Mark::X,
                })
            );
        }

        assert_eq!(board, before);
        assert_eq!(board.get(0, 0).unwrap(), Mark::X);
    }

    #[test]
    fn test_place_mark_out_of_bounds_fails() {
        let mut board = Board::new(5).unwrap();
        let before = board.clone();

        assert!(matches!(
            board.place_mark(5, 0, Player::X),
            Err(BoardError::OutOfBounds { row: 5, col: 0, size: 5 })
        ));
        assert!(matches!(
            board.place_mark(0, 7, Player::X),
            Err(BoardError::OutOfBounds { .. })
        ));
        assert!(matches!(board.get(9, 9), Err(BoardError::OutOfBounds { .. })));
        assert_eq!(board, before);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(3).unwrap();
        let mut player = Player::X;
        for position in board.available_moves() {
            assert!(!board.is_full());
            board.place_mark(position.row, position.col, player).unwrap();
            player = player.opponent();
        }
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_from_rows() {
        let board = Board::from_rows(&["X.O", "...", "..X"]);
        assert_eq!(board.get(0, 0).unwrap(), Mark::X);
        assert_eq!(board.get(0, 2).unwrap(), Mark::O);
        assert_eq!(board.get(2, 2).unwrap(), Mark::X);
        assert_eq!(board.marks_placed(), 3);
    }
}
