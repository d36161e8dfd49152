mod board;
mod error;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, SUPPORTED_SIZES, win_length_for};
pub use error::{BoardError, GameError};
pub use game_state::{GameStatus, TicTacToeGameState};
pub use settings::{FirstPlayerMode, TicTacToeSettings};
pub use types::{LineKind, Mark, Outcome, Player, Position, WinResult, WinningLine};
pub use win_detector::{Line, candidate_lines, diagonal_lines, evaluate};
