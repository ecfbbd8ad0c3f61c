//! A line based console session between a human and a [Bot].
//!
//! The session reads moves from any [BufRead] and writes the transcript to any [Write],
//! so it can be driven from stdin/stdout as well as from in-memory buffers.
use std::fmt::{Debug, Display, Formatter};
use std::io::{BufRead, Write};
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};

use crate::ai::minimax::SearchError;
use crate::ai::Bot;
use crate::board::{Board, Outcome, Player, TurnEnd};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("input closed before the game finished")]
    InputClosed,
    #[error("failed to parse board: {0}")]
    InvalidBoard(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// A game between a human and an engine, played in turns on a single live board.
pub struct ConsoleGame<B: Board, E: Bot<B>, I: BufRead, O: Write> {
    board: B,
    engine: E,
    human: Player,
    next: Player,
    input: I,
    output: O,
}

impl<B: Board, E: Bot<B>, I: BufRead, O: Write> Debug for ConsoleGame<B, E, I, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleGame")
            .field("board", &self.board)
            .field("engine", &self.engine)
            .field("human", &self.human)
            .field("next", &self.next)
            .finish()
    }
}

impl<B: Board, E: Bot<B>, I: BufRead, O: Write> ConsoleGame<B, E, I, O>
where
    B::Move: FromStr,
    <B::Move as FromStr>::Err: Display,
{
    /// Start a session on `board` where `first` makes the first turn.
    /// The engine plays the side that is not `human`.
    pub fn new(board: B, engine: E, human: Player, first: Player, input: I, output: O) -> Self {
        ConsoleGame {
            board,
            engine,
            human,
            next: first,
            input,
            output,
        }
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn next_player(&self) -> Player {
        self.next
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Play turns until the game is done, then print and return the outcome.
    pub fn run(&mut self) -> Result<Outcome, SessionError> {
        write!(self.output, "{}", self.board)?;

        loop {
            if let Some(outcome) = self.board.outcome() {
                writeln!(self.output, "{}", outcome)?;
                self.output.flush()?;
                debug!(%outcome, "session finished");
                return Ok(outcome);
            }

            self.step()?;
        }
    }

    /// Play a single turn of the side to move and print the resulting board.
    /// Fails if the game is already done.
    pub fn step(&mut self) -> Result<(), SessionError> {
        if self.board.is_done() {
            let e = SearchError::PreconditionViolated("cannot play a turn on a board that is already done");
            return Err(e.into());
        }

        if self.next == self.human {
            self.human_turn()?;
        } else {
            let next = self.engine.select_board(&self.board, self.next)?;
            writeln!(self.output, "Engine ({}) played:", self.next)?;
            self.board = next;
        }

        write!(self.output, "{}", self.board)?;
        self.next = self.next.other();
        Ok(())
    }

    fn human_turn(&mut self) -> Result<(), SessionError> {
        let mut buffer = String::new();

        loop {
            write!(self.output, "Your move ({}): ", self.human)?;
            self.output.flush()?;

            buffer.clear();
            if self.input.read_line(&mut buffer)? == 0 {
                return Err(SessionError::InputClosed);
            }

            let line = buffer.trim();
            if line.is_empty() {
                continue;
            }

            let mv = match line.parse::<B::Move>() {
                Ok(mv) => mv,
                Err(e) => {
                    warn!(input = line, "rejected move: {}", e);
                    writeln!(self.output, "Invalid move: {}", e)?;
                    continue;
                }
            };

            match self.board.play(self.human, mv) {
                Ok(TurnEnd::Passed) => return Ok(()),
                Ok(TurnEnd::Again) => {
                    if self.board.is_done() {
                        return Ok(());
                    }
                    write!(self.output, "{}", self.board)?;
                    writeln!(self.output, "You earned another move.")?;
                }
                Err(e) => {
                    warn!(input = line, "rejected move: {}", e);
                    writeln!(self.output, "Invalid move {}: {}", mv, e)?;
                }
            }
        }
    }
}

/// Print the move `engine` picks for `player` on `board` as a single line, or `-1` if the board is already done.
///
/// `move_to` recovers the move between the board and the picked board.
pub fn judge<B: Board, M: Display>(
    engine: &mut impl Bot<B>,
    board: &B,
    player: Player,
    move_to: impl Fn(&B, &B) -> Option<M>,
    output: &mut impl Write,
) -> Result<Option<M>, SessionError> {
    if board.is_done() {
        writeln!(output, "-1")?;
        return Ok(None);
    }

    let next = engine.select_board(board, player)?;
    let mv = move_to(board, &next).ok_or(SearchError::PreconditionViolated("the engine did not play a move"))?;
    writeln!(output, "{}", mv)?;
    Ok(Some(mv))
}

/// Read exactly `lines` lines from `input` and parse them as a board.
pub fn read_board<B: FromStr, R: BufRead>(input: &mut R, lines: usize) -> Result<B, SessionError>
where
    B::Err: Debug,
{
    let mut text = String::new();
    for _ in 0..lines {
        if input.read_line(&mut text)? == 0 {
            return Err(SessionError::InputClosed);
        }
    }

    text.parse::<B>()
        .map_err(|e| SessionError::InvalidBoard(format!("{:?}", e)))
}
