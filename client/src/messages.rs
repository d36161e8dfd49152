use tictactoe_common::games::tictactoe::{Player, WinResult};

pub const INVALID_MOVE: &str = "Please specify the row and column with two numbers between one and the size of the board. \
For instance, type 'first row and second column', '1 row and 2 column' or simply '1 2' separated with a space.";
pub const REMATCH: &str = "Rematch? (y/n, optionally followed by a new board size, e.g. 'y 5')";
pub const QUIT_HINT: &str = "Type 'quit' to leave the game.";

pub fn player_turn(player: Player) -> String {
    format!("Player {}'s turn. Please make your move.", player)
}

pub fn game_over(result: &WinResult) -> Option<String> {
    match result {
        WinResult::Win(line) => Some(format!("Player {} wins :)", line.player)),
        WinResult::Draw => Some("It's a draw :|".to_string()),
        WinResult::Ongoing => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::tictactoe::{LineKind, Position, WinningLine};

    #[test]
    fn test_game_over_messages() {
        let line = WinningLine::new(Player::O, LineKind::Row(0), vec![Position::new(0, 0)]);
        assert_eq!(game_over(&WinResult::Win(line)).as_deref(), Some("Player O wins :)"));
        assert_eq!(game_over(&WinResult::Draw).as_deref(), Some("It's a draw :|"));
        assert_eq!(game_over(&WinResult::Ongoing), None);
    }

    #[test]
    fn test_player_turn_message() {
        assert_eq!(player_turn(Player::X), "Player X's turn. Please make your move.");
    }
}
