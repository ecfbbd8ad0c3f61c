//! Dots and Boxes on a grid of `rows x cols` boxes.
//!
//! Players take turns drawing a line between two adjacent dots. A player who completes one or two boxes
//! with a line claims them and has to draw another line. Once all lines are drawn, the player with the most
//! boxes wins.
//!
//! ```text
//! o---o---o
//! | X |
//! o---o   o
//!         |
//! o   o---o
//! ```
use std::fmt::{Debug, Display, Formatter};
use std::ops::ControlFlow;
use std::str::FromStr;

use internal_iterator::InternalIterator;

use crate::board::{AvailableMovesIterator, Board, BoardDone, BoardMoves, InvalidMove, PlayError, Player, TurnEnd};
use crate::config::ConfigError;
use crate::rules::GameRules;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A line between two dots.
///
/// Horizontal line `(row, col)` is the top side of box `(row, col)`, with `row <= rows` and `col < cols`.
/// Vertical line `(row, col)` is the left side of box `(row, col)`, with `row < rows` and `col <= cols`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Line {
    pub orientation: Orientation,
    pub row: u8,
    pub col: u8,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct DotsBoard {
    rows: u8,
    cols: u8,
    horizontal: Vec<bool>,
    vertical: Vec<bool>,
    owners: Vec<Option<Player>>,
}

impl Line {
    pub fn horizontal(row: u8, col: u8) -> Self {
        Line {
            orientation: Orientation::Horizontal,
            row,
            col,
        }
    }

    pub fn vertical(row: u8, col: u8) -> Self {
        Line {
            orientation: Orientation::Vertical,
            row,
            col,
        }
    }
}

impl DotsBoard {
    pub const MAX_SIZE: u8 = 16;

    pub fn new(rows: u8, cols: u8) -> Result<Self, ConfigError> {
        if !(1..=Self::MAX_SIZE).contains(&rows) || !(1..=Self::MAX_SIZE).contains(&cols) {
            return Err(ConfigError::InvalidConfiguration(format!(
                "board size {}x{} must be between 1x1 and {}x{}",
                rows,
                cols,
                Self::MAX_SIZE,
                Self::MAX_SIZE
            )));
        }

        let (r, c) = (rows as usize, cols as usize);
        Ok(DotsBoard {
            rows,
            cols,
            horizontal: vec![false; (r + 1) * c],
            vertical: vec![false; r * (c + 1)],
            owners: vec![None; r * c],
        })
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// All lines of this board, horizontal lines first.
    pub fn all_lines(&self) -> impl Iterator<Item = Line> {
        let (rows, cols) = (self.rows, self.cols);
        let horizontal = (0..=rows).flat_map(move |row| (0..cols).map(move |col| Line::horizontal(row, col)));
        let vertical = (0..rows).flat_map(move |row| (0..=cols).map(move |col| Line::vertical(row, col)));
        horizontal.chain(vertical)
    }

    pub fn contains_line(&self, line: Line) -> bool {
        match line.orientation {
            Orientation::Horizontal => line.row <= self.rows && line.col < self.cols,
            Orientation::Vertical => line.row < self.rows && line.col <= self.cols,
        }
    }

    /// Whether `line` has been drawn. Panics if the line is not on this board.
    pub fn is_drawn(&self, line: Line) -> bool {
        assert!(self.contains_line(line), "line {:?} is not on this board", line);
        match line.orientation {
            Orientation::Horizontal => self.horizontal[self.horizontal_index(line.row, line.col)],
            Orientation::Vertical => self.vertical[self.vertical_index(line.row, line.col)],
        }
    }

    pub fn owner(&self, row: u8, col: u8) -> Option<Player> {
        self.owners[self.box_index(row, col)]
    }

    /// The number of boxes claimed by `player`.
    pub fn boxes(&self, player: Player) -> u32 {
        self.owners.iter().filter(|&&owner| owner == Some(player)).count() as u32
    }

    fn horizontal_index(&self, row: u8, col: u8) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    fn vertical_index(&self, row: u8, col: u8) -> usize {
        row as usize * (self.cols as usize + 1) + col as usize
    }

    fn box_index(&self, row: u8, col: u8) -> usize {
        assert!(row < self.rows && col < self.cols);
        row as usize * self.cols as usize + col as usize
    }

    fn box_complete(&self, row: u8, col: u8) -> bool {
        self.horizontal[self.horizontal_index(row, col)]
            && self.horizontal[self.horizontal_index(row + 1, col)]
            && self.vertical[self.vertical_index(row, col)]
            && self.vertical[self.vertical_index(row, col + 1)]
    }

    /// The boxes on either side of `line`.
    fn adjacent_boxes(&self, line: Line) -> impl Iterator<Item = (u8, u8)> {
        let Line { orientation, row, col } = line;
        let (before, after) = match orientation {
            Orientation::Horizontal => (row.checked_sub(1).map(|r| (r, col)), Some((row, col))),
            Orientation::Vertical => (col.checked_sub(1).map(|c| (row, c)), Some((row, col))),
        };
        let (rows, cols) = (self.rows, self.cols);
        before
            .into_iter()
            .chain(after)
            .filter(move |&(r, c)| r < rows && c < cols)
    }
}

impl Board for DotsBoard {
    type Move = Line;

    fn winner(&self) -> Option<Player> {
        if !self.is_full() {
            return None;
        }

        let a = self.boxes(Player::A);
        let b = self.boxes(Player::B);
        if a > b {
            Some(Player::A)
        } else if b > a {
            Some(Player::B)
        } else {
            None
        }
    }

    fn is_full(&self) -> bool {
        self.horizontal.iter().chain(&self.vertical).all(|&drawn| drawn)
    }

    fn is_available_move(&self, mv: Self::Move) -> Result<bool, BoardDone> {
        self.check_done()?;
        Ok(self.contains_line(mv) && !self.is_drawn(mv))
    }

    fn play(&mut self, player: Player, mv: Self::Move) -> Result<TurnEnd, PlayError> {
        if !self.is_available_move(mv)? {
            return Err(PlayError::UnavailableMove);
        }

        match mv.orientation {
            Orientation::Horizontal => {
                let i = self.horizontal_index(mv.row, mv.col);
                self.horizontal[i] = true;
            }
            Orientation::Vertical => {
                let i = self.vertical_index(mv.row, mv.col);
                self.vertical[i] = true;
            }
        }

        let mut completed = false;
        let adjacent: Vec<(u8, u8)> = self.adjacent_boxes(mv).collect();
        for (row, col) in adjacent {
            if self.box_complete(row, col) {
                let i = self.box_index(row, col);
                debug_assert!(self.owners[i].is_none(), "box completed twice");
                self.owners[i] = Some(player);
                completed = true;
            }
        }

        Ok(if completed { TurnEnd::Again } else { TurnEnd::Passed })
    }
}

impl<'a> BoardMoves<'a, DotsBoard> for DotsBoard {
    type AvailableMovesIterator = AvailableMovesIterator<'a, DotsBoard>;

    fn available_moves(&'a self) -> Result<Self::AvailableMovesIterator, BoardDone> {
        self.check_done()?;
        Ok(AvailableMovesIterator(self))
    }
}

impl InternalIterator for AvailableMovesIterator<'_, DotsBoard> {
    type Item = Line;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        for line in self.0.all_lines() {
            if !self.0.is_drawn(line) {
                if let ControlFlow::Break(r) = f(line) {
                    return ControlFlow::Break(r);
                }
            }
        }
        ControlFlow::Continue(())
    }
}

/// Dots and Boxes rules: the value of a board is the difference in claimed boxes.
#[derive(Debug, Default, Copy, Clone)]
pub struct DotsRules;

impl GameRules<DotsBoard> for DotsRules {
    fn evaluate(&self, board: &DotsBoard, pov: Player) -> i32 {
        board.boxes(pov) as i32 - board.boxes(pov.other()) as i32
    }
}

impl Debug for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line({:?}, {}, {})", self.orientation, self.row, self.col)
    }
}

/// Lines are displayed 1-indexed as `h row col` or `v row col`, the same format [Line::from_str] accepts.
impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let c = match self.orientation {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        };
        write!(f, "{} {} {}", c, self.row + 1, self.col + 1)
    }
}

/// Parse `h row col` or `v row col`, with 1-indexed row and column.
/// `1` and `2` are accepted as aliases for `h` and `v`.
impl FromStr for Line {
    type Err = InvalidMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let (orientation, row, col) = match parts.as_slice() {
            [orientation, row, col] => (*orientation, *row, *col),
            _ => return Err(InvalidMove::new(s, "expected `h|v row col`")),
        };

        let orientation = match orientation.to_ascii_lowercase().as_str() {
            "h" | "1" => Orientation::Horizontal,
            "v" | "2" => Orientation::Vertical,
            _ => return Err(InvalidMove::new(s, "orientation must be `h` or `v`")),
        };

        let index = |x: &str| match x.parse::<u8>() {
            Ok(x) if x >= 1 => Ok(x - 1),
            _ => Err(InvalidMove::new(s, "row and column must be positive numbers")),
        };

        Ok(Line {
            orientation,
            row: index(row)?,
            col: index(col)?,
        })
    }
}

fn owner_to_char(owner: Option<Player>) -> char {
    owner.map_or(' ', Player::symbol)
}

impl Display for DotsBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..=self.rows {
            write!(f, "o")?;
            for col in 0..self.cols {
                let line = if self.is_drawn(Line::horizontal(row, col)) { "---" } else { "   " };
                write!(f, "{}o", line)?;
            }
            writeln!(f)?;

            if row < self.rows {
                for col in 0..=self.cols {
                    let wall = if self.is_drawn(Line::vertical(row, col)) { '|' } else { ' ' };
                    write!(f, "{}", wall)?;
                    if col < self.cols {
                        write!(f, " {} ", owner_to_char(self.owner(row, col)))?;
                    }
                }
                writeln!(f)?;
            }
        }

        writeln!(
            f,
            "{}: {}  {}: {}",
            Player::A,
            self.boxes(Player::A),
            Player::B,
            self.boxes(Player::B)
        )
    }
}
