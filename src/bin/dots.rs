//! Play Dots and Boxes against the engine.
//!
//! Lines are entered as `h row col` or `v row col` (1-indexed). Completing a box earns another move.
use std::io::{stdin, stdout};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use board_search::ai::minimax::MiniMax;
use board_search::board::Player;
use board_search::config::SearchConfig;
use board_search::games::dots::{DotsBoard, DotsRules};
use board_search::interface::console::ConsoleGame;

#[derive(Parser, Debug)]
#[command(name = "dots")]
#[command(about = "Dots and Boxes against a minimax engine")]
struct Args {
    /// Number of box rows
    #[arg(long, default_value_t = 2)]
    rows: u8,

    /// Number of box columns
    #[arg(long, default_value_t = 2)]
    cols: u8,

    /// The player that makes the first move (X or O)
    #[arg(long, default_value = "X")]
    first: Player,

    /// The player controlled by the human (X or O)
    #[arg(long, default_value = "O")]
    human: Player,

    /// Search depth in turns
    #[arg(long, default_value_t = 4)]
    depth: u32,

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

    let board = DotsBoard::new(args.rows, args.cols)?;
    let engine = MiniMax::new(DotsRules, SearchConfig::new(args.depth, args.human.other()));

    let stdin = stdin();
    let stdout = stdout();
    let mut game = ConsoleGame::new(board, engine, args.human, args.first, stdin.lock(), stdout.lock());

    let outcome = game.run()?;
    info!(%outcome, "game finished");
    Ok(())
}
