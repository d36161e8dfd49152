use super::types::{Mark, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    InvalidSize { size: usize, supported: &'static [usize] },
    OutOfBounds { row: usize, col: usize, size: usize },
    CellOccupied { position: Position, occupant: Mark },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::InvalidSize { size, supported } => {
                write!(f, "Unsupported board size {}, expected one of {:?}", size, supported)
            }
            BoardError::OutOfBounds { row, col, size } => {
                write!(f, "Position ({}, {}) is outside the {}x{} board", row, col, size, size)
            }
            BoardError::CellOccupied { position, occupant } => {
                write!(f, "Cell {} is already marked by {}", position, occupant.symbol())
            }
        }
    }
}

impl std::error::Error for BoardError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    GameOver,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "{}", e),
            GameError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(e) => Some(e),
            GameError::GameOver => None,
        }
    }
}

impl From<BoardError> for GameError {
    fn from(e: BoardError) -> Self {
        GameError::Board(e)
    }
}
