//! Dummy game useful for debugging purposes.
//!
//! It is simply a tree that leads to different outcomes.
//!
//! # Example
//!
//! ```
//! use board_search::games::dummy::DummyGame;
//! use board_search::board::{Board, Outcome, Player};
//!
//! let game: DummyGame = "A".parse().unwrap();
//! assert_eq!(game.outcome(), Some(Outcome::WonBy(Player::A)));
//! let game: DummyGame = "B".parse().unwrap();
//! assert_eq!(game.outcome(), Some(Outcome::WonBy(Player::B)));
//! let game: DummyGame = "=".parse().unwrap();
//! assert_eq!(game.outcome(), Some(Outcome::Draw));
//!
//! let game: DummyGame = "(AA(BB)=B)".parse().unwrap();
//! // This board has 5 moves:
//! // * the first two lead to a victory by A
//! // * the third one leads to a board with two moves: both victories by B
//! // * the fourth move leads to a draw
//! // * the fifth move leads to a victory by B
//! assert_eq!(game.to_string(), "(AA(BB)=B)");
//! ```
use std::fmt;
use std::str::FromStr;

use internal_iterator::{Internal, IteratorExt};
use nom::error::Error;
use nom::Finish;

use crate::board::{Board, BoardDone, BoardMoves, Outcome, PlayError, Player, TurnEnd};

mod parse {
    use nom::branch::alt;
    use nom::character::complete::{char, one_of};
    use nom::combinator::{eof, map};
    use nom::multi::many1;
    use nom::sequence::{delimited, terminated};
    use nom::IResult;

    use super::*;

    fn outcome(input: &str) -> IResult<&str, Outcome> {
        map(one_of("AB="), |c| match c {
            'A' => Outcome::WonBy(Player::A),
            'B' => Outcome::WonBy(Player::B),
            '=' => Outcome::Draw,
            _ => unreachable!(),
        })(input)
    }

    fn node(input: &str) -> IResult<&str, Tree> {
        alt((
            map(outcome, Tree::Outcome),
            map(delimited(char('('), many1(node), char(')')), Tree::Node),
        ))(input)
    }

    pub(super) fn tree(input: &str) -> IResult<&str, Tree> {
        terminated(node, eof)(input)
    }
}

impl FromStr for Tree {
    type Err = Error<String>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse::tree(s).finish() {
            Ok((_, tree)) => Ok(tree),
            Err(Error { input, code }) => Err(Error {
                input: input.to_string(),
                code,
            }),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
enum Tree {
    Outcome(Outcome),
    Node(Vec<Tree>),
}

impl Tree {
    fn choose(&mut self, i: usize) -> Result<(), PlayError> {
        match self {
            Tree::Node(boards) if i < boards.len() => {
                *self = boards.swap_remove(i);
                Ok(())
            }
            Tree::Node(_) => Err(PlayError::UnavailableMove),
            Tree::Outcome(_) => Err(PlayError::BoardDone),
        }
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Tree::Outcome(Outcome::WonBy(player)) => write!(f, "{:?}", player),
            Tree::Outcome(Outcome::Draw) => write!(f, "="),
            Tree::Node(children) => {
                write!(f, "(")?;
                for child in children {
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// A game given by an explicit tree. The moves are the indices of the children of the current node.
/// The players don't influence the tree, the outcome is encoded in the leaves.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DummyGame {
    state: Tree,
}

impl FromStr for DummyGame {
    type Err = Error<String>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DummyGame { state: s.parse()? })
    }
}

impl fmt::Display for DummyGame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.state)
    }
}

impl Board for DummyGame {
    type Move = usize;

    fn winner(&self) -> Option<Player> {
        match self.state {
            Tree::Outcome(Outcome::WonBy(player)) => Some(player),
            Tree::Outcome(Outcome::Draw) | Tree::Node(_) => None,
        }
    }

    fn is_full(&self) -> bool {
        matches!(self.state, Tree::Outcome(_))
    }

    fn is_available_move(&self, mv: Self::Move) -> Result<bool, BoardDone> {
        match &self.state {
            Tree::Node(boards) => Ok(mv < boards.len()),
            Tree::Outcome(_) => Err(BoardDone),
        }
    }

    fn play(&mut self, _: Player, mv: Self::Move) -> Result<TurnEnd, PlayError> {
        self.state.choose(mv)?;
        Ok(TurnEnd::Passed)
    }
}

impl<'a> BoardMoves<'a, DummyGame> for DummyGame {
    type AvailableMovesIterator = Internal<std::ops::Range<usize>>;

    fn available_moves(&'a self) -> Result<Self::AvailableMovesIterator, BoardDone> {
        match &self.state {
            Tree::Node(boards) => Ok((0..boards.len()).into_internal()),
            Tree::Outcome(_) => Err(BoardDone),
        }
    }
}
