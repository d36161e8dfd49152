pub mod tictactoe_session;

pub use tictactoe_session::{SessionCommand, SessionHandle, TicTacToeSession};

use std::future::Future;

use crate::games::tictactoe::{Board, GameError, Player, Position, WinResult};

/// Receives every state change a session produces.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, update: GameStateUpdate) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, notification: GameOverNotification) -> impl Future<Output = ()> + Send;
}

#[derive(Debug, Clone)]
pub struct GameStateUpdate {
    pub board: Board,
    pub current_player: Player,
    pub last_move: Option<Position>,
    pub is_over: bool,
}

#[derive(Debug, Clone)]
pub struct GameOverNotification {
    pub board: Board,
    pub result: WinResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Game(GameError),
    Closed,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Game(e) => write!(f, "{}", e),
            SessionError::Closed => write!(f, "Game session is closed"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Game(e) => Some(e),
            SessionError::Closed => None,
        }
    }
}

impl From<GameError> for SessionError {
    fn from(e: GameError) -> Self {
        SessionError::Game(e)
    }
}
