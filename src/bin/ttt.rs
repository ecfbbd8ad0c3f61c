//! Play Tic Tac Toe against the engine, or ask it for a single move.
//!
//! In `judge` mode the board is read from stdin in the format the game prints,
//! and the chosen move is written as `row col` (1-indexed), or `-1` if the game is already over.
use std::io::{stdin, stdout};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use board_search::ai::minimax::MiniMax;
use board_search::board::Player;
use board_search::config::{Mode, SearchConfig};
use board_search::games::ttt::TTTBoard;
use board_search::interface::console::{judge, read_board, ConsoleGame};
use board_search::rules::OutcomeRules;

/// The number of lines a printed board takes up.
const BOARD_LINES: usize = 7;

#[derive(Parser, Debug)]
#[command(name = "ttt")]
#[command(about = "Tic Tac Toe against a minimax engine")]
struct Args {
    /// GAME to play a full game, JUDGE to print a single move for the board on stdin
    #[arg(long, default_value = "GAME")]
    mode: Mode,

    /// The player that makes the first move (X or O), or the player to move in JUDGE mode
    #[arg(long, default_value = "X")]
    first: Player,

    /// The player controlled by the human (X or O)
    #[arg(long, default_value = "O")]
    human: Player,

    /// Search depth in plies
    #[arg(long, default_value_t = 9)]
    depth: u32,

    /// Read the starting board from stdin before the first move
    #[arg(long)]
    read_board: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);
    info!(?args, "starting");

    let stdin = stdin();
    let mut input = stdin.lock();
    let stdout = stdout();

    match args.mode {
        Mode::Judge => {
            let board: TTTBoard = read_board(&mut input, BOARD_LINES)?;
            let mut engine = MiniMax::new(OutcomeRules, SearchConfig::new(args.depth, args.first));
            judge(&mut engine, &board, args.first, TTTBoard::move_to, &mut stdout.lock())?;
        }
        Mode::Game => {
            let board = if args.read_board {
                read_board(&mut input, BOARD_LINES)?
            } else {
                TTTBoard::default()
            };
            let engine = MiniMax::new(OutcomeRules, SearchConfig::new(args.depth, args.human.other()));
            let mut game = ConsoleGame::new(board, engine, args.human, args.first, input, stdout.lock());
            let outcome = game.run()?;
            info!(%outcome, "game finished");
        }
    }

    Ok(())
}
