use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;
use std::str::FromStr;

use internal_iterator::InternalIterator;
use thiserror::Error;

use crate::config::ConfigError;
use crate::wdl::OutcomeWDL;

/// One of the two players.
///
/// `A` is printed as `X` and `B` as `O`, the usual symbols for pen-and-paper games.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Player {
    A,
    B,
}

/// The absolute outcome for a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    WonBy(Player),
    Draw,
}

/// What happens after an elementary move has been played.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TurnEnd {
    /// Control passes to the other player.
    Passed,
    /// The same player has earned another move, eg. by completing a box.
    Again,
}

/// Error returned when the board is already done.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
#[error("the board is done")]
pub struct BoardDone;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum PlayError {
    #[error("the board is done")]
    BoardDone,
    #[error("the move is not available")]
    UnavailableMove,
}

impl From<BoardDone> for PlayError {
    fn from(_: BoardDone) -> Self {
        PlayError::BoardDone
    }
}

/// Error returned when a textual move cannot be parsed or is out of range for the board.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("invalid move {input:?}: {reason}")]
pub struct InvalidMove {
    pub input: String,
    pub reason: &'static str,
}

impl InvalidMove {
    pub fn new(input: &str, reason: &'static str) -> Self {
        InvalidMove {
            input: input.to_owned(),
            reason,
        }
    }
}

/// The main trait of this crate. Represents the state of a game.
///
/// Unlike many board abstractions the board does not track whose turn it is,
/// the player is passed explicitly to [Board::play]. This allows a single move to
/// hand out another move to the same player (see [TurnEnd::Again]).
pub trait Board: 'static + Debug + Display + Clone + Eq + Hash + Send + Sync
where
    for<'a> Self: BoardMoves<'a, Self>,
{
    /// The type used to represent moves on this board.
    type Move: Debug + Display + Eq + Ord + Hash + Copy + Send + Sync;

    /// The player that has won the game, if any.
    fn winner(&self) -> Option<Player>;

    /// Whether no legal moves remain.
    fn is_full(&self) -> bool;

    /// The outcome of this board, is `None` when this games is not done yet.
    fn outcome(&self) -> Option<Outcome> {
        match self.winner() {
            Some(player) => Some(Outcome::WonBy(player)),
            None if self.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }

    /// Whether this games is done.
    fn is_done(&self) -> bool {
        self.outcome().is_some()
    }

    /// Return `Err(BoardDone)` if this board is done.
    fn check_done(&self) -> Result<(), BoardDone> {
        if self.is_done() {
            Err(BoardDone)
        } else {
            Ok(())
        }
    }

    /// Return whether the given move is available.
    fn is_available_move(&self, mv: Self::Move) -> Result<bool, BoardDone>;

    /// Play the move `mv` for `player`, modifying this board.
    fn play(&mut self, player: Player, mv: Self::Move) -> Result<TurnEnd, PlayError>;

    /// Clone this board, play `mv` on it and return the new board.
    fn clone_and_play(&self, player: Player, mv: Self::Move) -> Result<(Self, TurnEnd), PlayError> {
        let mut next = self.clone();
        let end = next.play(player, mv)?;
        Ok((next, end))
    }
}

/// A helper trait to get the correct lifetimes for [BoardMoves::available_moves].
/// This is a workaround to get generic associated types, See <https://github.com/rust-lang/rust/issues/44265>.
pub trait BoardMoves<'a, B: Board> {
    type AvailableMovesIterator: InternalIterator<Item = B::Move>;

    /// Return an iterator over available moves, is always nonempty for a board that is not done.
    /// No guarantees are made about the ordering except that it stays consistent when the board is not modified.
    fn available_moves(&'a self) -> Result<Self::AvailableMovesIterator, BoardDone>;
}

/// A convenient type to use for the iterator returned by [BoardMoves::available_moves].
#[derive(Debug)]
pub struct AvailableMovesIterator<'a, B: Board>(pub &'a B);

impl Player {
    pub const BOTH: [Player; 2] = [Player::A, Player::B];

    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::A => 'X',
            Player::B => 'O',
        }
    }

    pub fn from_symbol(c: char) -> Option<Player> {
        match c.to_ascii_uppercase() {
            'X' | 'A' => Some(Player::A),
            'O' | 'B' => Some(Player::B),
            _ => None,
        }
    }

    pub fn sign<V: num_traits::One + std::ops::Neg<Output = V>>(self, pov: Player) -> V {
        if self == pov {
            V::one()
        } else {
            -V::one()
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Player {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Player::from_symbol(c),
            _ => None,
        }
        .ok_or_else(|| ConfigError::InvalidConfiguration(format!("unknown player tag {:?}", s)))
    }
}

impl Outcome {
    /// View this outcome from the POV of `pov`.
    pub fn pov(self, pov: Player) -> OutcomeWDL {
        match self {
            Outcome::WonBy(player) if player == pov => OutcomeWDL::Win,
            Outcome::WonBy(_) => OutcomeWDL::Loss,
            Outcome::Draw => OutcomeWDL::Draw,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::WonBy(player) => write!(f, "WINNER: {}", player),
            Outcome::Draw => write!(f, "DRAW"),
        }
    }
}
