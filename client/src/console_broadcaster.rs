use std::fmt::Write;

use tictactoe_common::engine::session::{GameBroadcaster, GameOverNotification, GameStateUpdate};
use tictactoe_common::games::tictactoe::{Board, Position, WinResult, WinningLine};

use crate::messages;

/// Renders session updates to stdout.
#[derive(Clone, Default)]
pub struct ConsoleBroadcaster;

impl ConsoleBroadcaster {
    pub fn new() -> Self {
        Self
    }
}

impl GameBroadcaster for ConsoleBroadcaster {
    async fn broadcast_state(&self, update: GameStateUpdate) {
        println!("{}", render_board(&update.board, update.last_move, None));
        if !update.is_over {
            println!("{}", messages::player_turn(update.current_player));
        }
    }

    async fn broadcast_game_over(&self, notification: GameOverNotification) {
        if let WinResult::Win(line) = &notification.result {
            println!("{}", render_board(&notification.board, None, Some(line)));
        }
        if let Some(message) = messages::game_over(&notification.result) {
            println!("{}", message);
        }
        println!("{}", messages::REMATCH);
    }
}

/// Draws the grid with 1-based headers. The last move is shown in
/// parentheses, winning cells in brackets.
pub fn render_board(board: &Board, last_move: Option<Position>, winning: Option<&WinningLine>) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for col in 0..board.size() {
        let _ = write!(out, " {} ", col + 1);
    }
    out.push('\n');

    for (row, cells) in board.rows().iter().enumerate() {
        let _ = write!(out, "{:>2} ", row + 1);
        for (col, mark) in cells.iter().enumerate() {
            let position = Position::new(row, col);
            let symbol = mark.symbol();
            if winning.is_some_and(|line| line.contains(position)) {
                let _ = write!(out, "[{}]", symbol);
            } else if last_move == Some(position) {
                let _ = write!(out, "({})", symbol);
            } else {
                let _ = write!(out, " {} ", symbol);
            }
        }
        out.push('\n');
    }
    out
}
