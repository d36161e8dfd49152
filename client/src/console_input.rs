use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use tictactoe_common::engine::session::{SessionError, SessionHandle};
use tictactoe_common::log_warn;

use crate::messages;
use crate::move_parser::parse_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RematchAnswer {
    Yes(Option<usize>),
    No,
}

pub fn parse_rematch(input: &str) -> Option<RematchAnswer> {
    let mut tokens = input.split_whitespace();
    let answer = tokens.next()?.to_lowercase();
    match answer.as_str() {
        "y" | "yes" => {
            let size = match tokens.next() {
                Some(token) => Some(token.parse::<usize>().ok()?),
                None => None,
            };
            Some(RematchAnswer::Yes(size))
        }
        "n" | "no" => Some(RematchAnswer::No),
        _ => None,
    }
}

fn is_quit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "q" | "quit" | "exit")
}

/// Feeds lines from `reader` into the session until input ends, the player
/// quits, or a rematch is declined.
pub async fn run_input_loop<R>(reader: R, handle: &SessionHandle) -> Result<(), SessionError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                log_warn!("Failed to read input: {}", e);
                break;
            }
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if is_quit(input) {
            break;
        }

        let snapshot = handle.snapshot().await?;
        if snapshot.is_over() {
            match parse_rematch(input) {
                Some(RematchAnswer::Yes(board_size)) => {
                    if let Err(e) = handle.rematch(board_size).await {
                        println!("{}", e);
                        println!("{}", messages::REMATCH);
                    }
                }
                Some(RematchAnswer::No) => break,
                None => println!("{}", messages::REMATCH),
            }
            continue;
        }

        match parse_move(input, snapshot.board.size()) {
            Ok(position) => match handle.place_mark(position.row, position.col).await {
                Ok(_) => {}
                Err(SessionError::Game(e)) => println!("Invalid move! {}", e),
                Err(e) => return Err(e),
            },
            Err(e) => println!("Invalid move! {}. {}", e, messages::INVALID_MOVE),
        }
    }

    Ok(())
}
