//! Utilities to run bots against each other and report the results.
use std::fmt::{Debug, Formatter};
use std::time::Instant;

use itertools::Itertools;
use tracing::debug;

use crate::ai::minimax::SearchError;
use crate::ai::Bot;
use crate::board::{Board, Outcome, Player};
use crate::wdl::WDL;

/// Run `bot_l` against `bot_r` on the board given by `start`, where `first` makes the first turn.
///
/// `games_per_side` games are run, except if `both_sides` is true, in
/// which case a match consists of two games per start position where players switch sides.
pub fn run<B: Board, L: Bot<B>, R: Bot<B>>(
    start: impl Fn() -> B,
    first: Player,
    bot_l: impl Fn() -> L,
    bot_r: impl Fn() -> R,
    games_per_side: u32,
    both_sides: bool,
) -> Result<BotGameResult<B>, SearchError> {
    let debug_l = format!("{:?}", bot_l());
    let debug_r = format!("{:?}", bot_r());

    let game_count = if both_sides { 2 * games_per_side } else { games_per_side };
    let starts = (0..games_per_side).map(|_| start()).collect_vec();

    let replays: Vec<Replay<B>> = (0..game_count)
        .map(|game_i| {
            let flip = both_sides && game_i % 2 == 1;
            let pair_i = if both_sides { game_i / 2 } else { game_i };
            let player_l = if flip { first.other() } else { first };

            let replay = play_single_game(&starts[pair_i as usize], first, player_l, &mut bot_l(), &mut bot_r())?;
            debug!(game = game_i, outcome = %replay.outcome, player_l = %player_l, "bot game finished");
            Ok::<_, SearchError>(replay)
        })
        .collect::<Result<_, SearchError>>()?;

    let total_time_l = replays.iter().map(|r| r.total_time_l).sum::<f32>();
    let total_time_r = replays.iter().map(|r| r.total_time_r).sum::<f32>();
    let turn_count_l = replays.iter().map(|r| r.turn_count_l).sum::<u32>();
    let turn_count_r = replays.iter().map(|r| r.turn_count_r).sum::<u32>();

    Ok(BotGameResult {
        game_count,
        average_game_length: replays.iter().map(|r| r.boards.len() as f32).sum::<f32>() / game_count as f32,
        wdl_l: replays.iter().map(|r| r.outcome.pov(r.player_l).to_wdl()).sum(),
        time_l: total_time_l / turn_count_l.max(1) as f32,
        time_r: total_time_r / turn_count_r.max(1) as f32,
        debug_l,
        debug_r,
        replays,
    })
}

/// Play a single game between `bot_l` playing as `player_l` and `bot_r` playing the other side.
pub fn play_single_game<B: Board>(
    start: &B,
    first: Player,
    player_l: Player,
    bot_l: &mut impl Bot<B>,
    bot_r: &mut impl Bot<B>,
) -> Result<Replay<B>, SearchError> {
    let mut board = start.clone();
    let mut next = first;

    let mut total_time_l = 0.0;
    let mut total_time_r = 0.0;
    let mut turn_count_l: u32 = 0;
    let mut turn_count_r: u32 = 0;
    let mut boards = vec![];

    loop {
        match board.outcome() {
            None => {
                let start_time = Instant::now();
                board = if next == player_l {
                    let board = bot_l.select_board(&board, next)?;
                    total_time_l += start_time.elapsed().as_secs_f32();
                    turn_count_l += 1;
                    board
                } else {
                    let board = bot_r.select_board(&board, next)?;
                    total_time_r += start_time.elapsed().as_secs_f32();
                    turn_count_r += 1;
                    board
                };

                boards.push(board.clone());
                next = next.other();
            }
            Some(outcome) => {
                return Ok(Replay {
                    start: start.clone(),
                    first,
                    player_l,
                    boards,
                    outcome,
                    total_time_l,
                    total_time_r,
                    turn_count_l,
                    turn_count_r,
                });
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Replay<B: Board> {
    pub start: B,
    pub first: Player,
    pub player_l: Player,

    /// The board after each turn.
    pub boards: Vec<B>,
    pub outcome: Outcome,

    pub total_time_l: f32,
    pub total_time_r: f32,
    pub turn_count_l: u32,
    pub turn_count_r: u32,
}

/// Structure returned by the function [`run`].
pub struct BotGameResult<B: Board> {
    pub game_count: u32,
    pub replays: Vec<Replay<B>>,

    pub average_game_length: f32,
    pub wdl_l: WDL<u32>,

    //time per turn in seconds
    pub time_l: f32,
    pub time_r: f32,

    pub debug_l: String,
    pub debug_r: String,
}

impl<B: Board> Debug for BotGameResult<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "BotGameResult {{")?;
        writeln!(
            f,
            "  {} games, average length {}",
            self.game_count, self.average_game_length
        )?;
        writeln!(f, "  left      {}", self.wdl_l)?;
        writeln!(f, "  time_l:   {:.4}, time_r: {:.4}", self.time_l, self.time_r)?;
        writeln!(f, "  left:     {}", self.debug_l)?;
        writeln!(f, "  right:    {}", self.debug_r)?;
        writeln!(f, "}}")?;

        Ok(())
    }
}
