//! Tic-Tac-Toe on a 3x3 board.
//!
//! The board is printed and parsed in the following format, with `_` for empty tiles:
//!
//! ```text
//! +---+---+---+
//! | X | _ | O |
//! +---+---+---+
//! | _ | X | _ |
//! +---+---+---+
//! | _ | _ | O |
//! +---+---+---+
//! ```
use std::fmt::{Debug, Display, Formatter};
use std::ops::ControlFlow;
use std::str::FromStr;

use internal_iterator::InternalIterator;
use nom::error::Error;
use nom::Finish;

use crate::board::{AvailableMovesIterator, Board, BoardDone, BoardMoves, InvalidMove, PlayError, Player, TurnEnd};

/// A tile on the board, stored as `row * 3 + col`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coord(u8);

#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct TTTBoard {
    tiles: [Option<Player>; 9],
}

const LINES: &[[(u8, u8); 3]] = &[
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

impl Coord {
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < 3 && col < 3, "coord ({}, {}) out of range", row, col);
        Coord(row * 3 + col)
    }

    pub fn all() -> impl Iterator<Item = Coord> {
        (0..9).map(Coord)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> u8 {
        self.0 / 3
    }

    pub fn col(self) -> u8 {
        self.0 % 3
    }

    pub fn is_corner(self) -> bool {
        self.row() != 1 && self.col() != 1
    }

    pub fn is_center(self) -> bool {
        self.0 == 4
    }
}

impl TTTBoard {
    pub fn from_tiles(tiles: [[Option<Player>; 3]; 3]) -> Self {
        let mut board = TTTBoard::default();
        for coord in Coord::all() {
            board.tiles[coord.index()] = tiles[coord.row() as usize][coord.col() as usize];
        }
        board
    }

    pub fn tile(&self, coord: Coord) -> Option<Player> {
        self.tiles[coord.index()]
    }

    pub fn count(&self, player: Player) -> usize {
        self.tiles.iter().filter(|&&tile| tile == Some(player)).count()
    }

    /// The coordinate of the first tile that differs between `self` and `next`,
    /// used to report which move the engine played.
    pub fn move_to(&self, next: &TTTBoard) -> Option<Coord> {
        Coord::all().find(|&coord| self.tile(coord) != next.tile(coord))
    }
}

impl Board for TTTBoard {
    type Move = Coord;

    fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|line| {
            let [a, b, c] = line.map(|(row, col)| self.tile(Coord::new(row, col)));
            if a.is_some() && a == b && b == c {
                a
            } else {
                None
            }
        })
    }

    fn is_full(&self) -> bool {
        self.tiles.iter().all(|tile| tile.is_some())
    }

    fn is_available_move(&self, mv: Self::Move) -> Result<bool, BoardDone> {
        self.check_done()?;
        Ok(self.tile(mv).is_none())
    }

    fn play(&mut self, player: Player, mv: Self::Move) -> Result<TurnEnd, PlayError> {
        if !self.is_available_move(mv)? {
            return Err(PlayError::UnavailableMove);
        }

        self.tiles[mv.index()] = Some(player);
        Ok(TurnEnd::Passed)
    }
}

impl<'a> BoardMoves<'a, TTTBoard> for TTTBoard {
    type AvailableMovesIterator = AvailableMovesIterator<'a, TTTBoard>;

    fn available_moves(&'a self) -> Result<Self::AvailableMovesIterator, BoardDone> {
        self.check_done()?;
        Ok(AvailableMovesIterator(self))
    }
}

impl InternalIterator for AvailableMovesIterator<'_, TTTBoard> {
    type Item = Coord;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        for coord in Coord::all() {
            if self.0.tile(coord).is_none() {
                if let ControlFlow::Break(r) = f(coord) {
                    return ControlFlow::Break(r);
                }
            }
        }
        ControlFlow::Continue(())
    }
}

fn tile_to_char(tile: Option<Player>) -> char {
    tile.map_or('_', Player::symbol)
}

impl Debug for Coord {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Coord({}, {})", self.row(), self.col())
    }
}

/// Coordinates are displayed 1-indexed as `row col`, the same format [Coord::from_str] accepts.
impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.row() + 1, self.col() + 1)
    }
}

impl FromStr for Coord {
    type Err = InvalidMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let (row, col) = match parts.as_slice() {
            [row, col] => (row, col),
            _ => return Err(InvalidMove::new(s, "expected `row col`")),
        };

        let index = |x: &str| match x.parse::<u8>() {
            Ok(x @ 1..=3) => Ok(x - 1),
            Ok(_) => Err(InvalidMove::new(s, "row and column must be between 1 and 3")),
            Err(_) => Err(InvalidMove::new(s, "row and column must be numbers")),
        };

        Ok(Coord::new(index(*row)?, index(*col)?))
    }
}

impl Display for TTTBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "+---+---+---+")?;
        for row in 0..3 {
            write!(f, "|")?;
            for col in 0..3 {
                write!(f, " {} |", tile_to_char(self.tile(Coord::new(row, col))))?;
            }
            writeln!(f)?;
            writeln!(f, "+---+---+---+")?;
        }
        Ok(())
    }
}

mod parse {
    use nom::bytes::complete::tag;
    use nom::character::complete::{char, multispace0, one_of, space0};
    use nom::combinator::{eof, map};
    use nom::multi::count;
    use nom::sequence::{delimited, preceded, terminated, tuple};
    use nom::IResult;

    use super::*;

    fn tile(input: &str) -> IResult<&str, Option<Player>> {
        map(one_of("XOxo_"), |c| Player::from_symbol(c))(input)
    }

    fn separator(input: &str) -> IResult<&str, &str> {
        preceded(multispace0, tag("+---+---+---+"))(input)
    }

    fn cell(input: &str) -> IResult<&str, Option<Player>> {
        terminated(delimited(space0, tile, space0), char('|'))(input)
    }

    fn row(input: &str) -> IResult<&str, [Option<Player>; 3]> {
        map(
            preceded(tuple((multispace0, char('|'))), tuple((cell, cell, cell))),
            |(a, b, c)| [a, b, c],
        )(input)
    }

    pub(super) fn board(input: &str) -> IResult<&str, Vec<[Option<Player>; 3]>> {
        terminated(
            preceded(separator, count(terminated(row, separator), 3)),
            tuple((multispace0, eof)),
        )(input)
    }
}

impl FromStr for TTTBoard {
    type Err = Error<String>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse::board(s).finish() {
            Ok((_, rows)) => Ok(TTTBoard::from_tiles([rows[0], rows[1], rows[2]])),
            Err(Error { input, code }) => Err(Error {
                input: input.to_string(),
                code,
            }),
        }
    }
}
