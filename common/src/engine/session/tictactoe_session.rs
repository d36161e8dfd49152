use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::games::tictactoe::{
    BoardError, GameError, TicTacToeGameState, TicTacToeSettings, WinResult,
};
use crate::{log, log_debug};
use super::{GameBroadcaster, GameOverNotification, GameStateUpdate, SessionError};

#[derive(Debug)]
pub enum SessionCommand {
    PlaceMark {
        row: usize,
        col: usize,
        reply: oneshot::Sender<Result<WinResult, GameError>>,
    },
    Rematch {
        board_size: Option<usize>,
        reply: oneshot::Sender<Result<(), BoardError>>,
    },
    Snapshot {
        reply: oneshot::Sender<TicTacToeGameState>,
    },
    Shutdown,
}

/// Cloneable entry point into a running session. Every producer of moves
/// holds one of these; the session task applies commands in arrival order.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    command_tx: mpsc::UnboundedSender<SessionCommand>,
}

impl SessionHandle {
    pub async fn place_mark(&self, row: usize, col: usize) -> Result<WinResult, SessionError> {
        let (reply, response) = oneshot::channel();
        self.send(SessionCommand::PlaceMark { row, col, reply })?;
        let result = response.await.map_err(|_| SessionError::Closed)?;
        Ok(result?)
    }

    pub async fn rematch(&self, board_size: Option<usize>) -> Result<(), SessionError> {
        let (reply, response) = oneshot::channel();
        self.send(SessionCommand::Rematch { board_size, reply })?;
        response
            .await
            .map_err(|_| SessionError::Closed)?
            .map_err(|e| SessionError::Game(GameError::Board(e)))
    }

    pub async fn snapshot(&self) -> Result<TicTacToeGameState, SessionError> {
        let (reply, response) = oneshot::channel();
        self.send(SessionCommand::Snapshot { reply })?;
        response.await.map_err(|_| SessionError::Closed)
    }

    pub fn shutdown(&self) {
        let _ = self.command_tx.send(SessionCommand::Shutdown);
    }

    fn send(&self, command: SessionCommand) -> Result<(), SessionError> {
        self.command_tx.send(command).map_err(|_| SessionError::Closed)
    }
}

pub struct TicTacToeSession;

impl TicTacToeSession {
    /// Creates the game and spawns the task that owns it. Fails without
    /// spawning anything when the configured board size is unsupported.
    pub fn spawn<B: GameBroadcaster>(
        settings: TicTacToeSettings,
        seed: u64,
        broadcaster: B,
    ) -> Result<(SessionHandle, JoinHandle<()>), BoardError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let first_player = settings.first_player.resolve(&mut rng);
        let game_state = TicTacToeGameState::new(settings.board_size, first_player)?;

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_session(game_state, settings, rng, command_rx, broadcaster));

        Ok((SessionHandle { command_tx }, task))
    }
}

async fn run_session<B: GameBroadcaster>(
    mut game_state: TicTacToeGameState,
    settings: TicTacToeSettings,
    mut rng: StdRng,
    mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
    broadcaster: B,
) {
    log!(
        "Session started: {}x{} board, {} moves first",
        game_state.board.size(),
        game_state.board.size(),
        game_state.current_player
    );
    broadcast_state(&game_state, &broadcaster).await;

    while let Some(command) = command_rx.recv().await {
        match command {
            SessionCommand::PlaceMark { row, col, reply } => {
                let player = game_state.current_player;
                let result = game_state.place_mark(row, col);

                match &result {
                    Ok(win_result) => {
                        log_debug!("{} placed at ({}, {})", player, row, col);
                        broadcast_state(&game_state, &broadcaster).await;
                        if win_result.is_over() {
                            log!("Game over: {:?}", win_result.outcome());
                            broadcaster
                                .broadcast_game_over(GameOverNotification {
                                    board: game_state.board.clone(),
                                    result: win_result.clone(),
                                })
                                .await;
                        }
                    }
                    Err(e) => log_debug!("Rejected move ({}, {}) by {}: {}", row, col, player, e),
                }

                let _ = reply.send(result);
            }
            SessionCommand::Rematch { board_size, reply } => {
                let first_player = settings.first_player.resolve(&mut rng);
                let result = game_state.rematch(board_size, first_player);
                if result.is_ok() {
                    log!("Rematch on a {}x{} board", game_state.board.size(), game_state.board.size());
                    broadcast_state(&game_state, &broadcaster).await;
                }
                let _ = reply.send(result);
            }
            SessionCommand::Snapshot { reply } => {
                let _ = reply.send(game_state.clone());
            }
            SessionCommand::Shutdown => break,
        }
    }

    log!("Session finished");
}

async fn broadcast_state<B: GameBroadcaster>(game_state: &TicTacToeGameState, broadcaster: &B) {
    broadcaster
        .broadcast_state(GameStateUpdate {
            board: game_state.board.clone(),
            current_player: game_state.current_player,
            last_move: game_state.last_move,
            is_over: game_state.is_over(),
        })
        .await;
}
