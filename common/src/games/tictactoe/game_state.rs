use super::board::Board;
use super::error::{BoardError, GameError};
use super::types::{Player, Position, WinResult, WinningLine};
use super::win_detector::evaluate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(WinningLine),
    Draw,
}

/// One game on one board: whose turn it is and whether the game has ended.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_player: Player,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new(board_size: usize, first_player: Player) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(board_size)?,
            current_player: first_player,
            status: GameStatus::InProgress,
            last_move: None,
        })
    }

    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<WinResult, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        self.board.place_mark(row, col, self.current_player)?;
        self.last_move = Some(Position::new(row, col));

        let result = evaluate(&self.board);
        match &result {
            WinResult::Ongoing => self.current_player = self.current_player.opponent(),
            WinResult::Win(line) => self.status = GameStatus::Won(line.clone()),
            WinResult::Draw => self.status = GameStatus::Draw,
        }

        Ok(result)
    }

    /// Starts over on a fresh board, keeping the size unless a new one is given.
    pub fn rematch(&mut self, board_size: Option<usize>, first_player: Player) -> Result<(), BoardError> {
        let size = board_size.unwrap_or(self.board.size());
        self.board = Board::new(size)?;
        self.current_player = first_player;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        Ok(())
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Player> {
        match &self.status {
            GameStatus::Won(line) => Some(line.player),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<&WinningLine> {
        match &self.status {
            GameStatus::Won(line) => Some(line),
            _ => None,
        }
    }
}
