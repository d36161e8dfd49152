mod config;
mod console_broadcaster;
mod console_input;
mod messages;
mod move_parser;

use clap::{Parser, ValueEnum};
use tictactoe_common::engine::session::TicTacToeSession;
use tictactoe_common::games::tictactoe::FirstPlayerMode;
use tictactoe_common::{log, logger};
use tokio::io::BufReader;

use config::Validate;
use console_broadcaster::ConsoleBroadcaster;
use console_input::run_input_loop;

#[derive(Clone, Copy, ValueEnum)]
enum FirstPlayerArg {
    X,
    O,
    Random,
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::X => FirstPlayerMode::X,
            FirstPlayerArg::O => FirstPlayerMode::O,
            FirstPlayerArg::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-Tac-Toe on 3x3, 5x5 and 7x7 boards")]
struct Args {
    /// Board size: 3, 5 or 7.
    #[arg(long)]
    size: Option<usize>,

    #[arg(long, value_enum)]
    first_player: Option<FirstPlayerArg>,

    #[arg(long, default_value = config::CONFIG_FILE)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = config::get_config_manager(&args.config).get_config()?;
    if let Some(size) = args.size {
        config.game.board_size = size;
    }
    if let Some(first_player) = args.first_player {
        config.game.first_player = first_player.into();
    }
    config.validate()?;

    let prefix = if args.use_log_prefix || config.logging.use_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, config.logging.level);

    let seed: u64 = rand::random();
    let (handle, session_task) = TicTacToeSession::spawn(config.game.clone(), seed, ConsoleBroadcaster::new())?;
    println!("{}", messages::QUIT_HINT);

    let stdin = BufReader::new(tokio::io::stdin());
    run_input_loop(stdin, &handle).await?;

    handle.shutdown();
    session_task.await?;
    log!("Quitting...");

    Ok(())
}
