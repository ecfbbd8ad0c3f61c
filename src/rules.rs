//! The per-game capabilities the search engine is generic over: move generation and static evaluation.
use std::fmt::Debug;

use internal_iterator::InternalIterator;
use itertools::Itertools;

use crate::board::{Board, BoardMoves, Player, TurnEnd};

pub trait GameRules<B: Board>: Debug {
    /// All boards reachable by one full turn of `player`, starting from `board`.
    ///
    /// A turn may consist of multiple elementary moves if a move earns the player another move,
    /// the resulting boards are those where control has passed to the opponent or the game ended.
    /// Must be a pure function of `(board, player)`. Returns nothing if the board is done.
    fn expand(&self, board: &B, player: Player) -> Vec<B> {
        expand_turns(board, player)
    }

    /// The value of `board` from the POV of `pov`, positive values are good for `pov`.
    /// The value for the other player must be the negation of this value.
    fn evaluate(&self, board: &B, pov: Player) -> i32;
}

/// Generate all boards after one full turn of `player`, following chains of [TurnEnd::Again] moves.
///
/// The boards are returned in move order, chains are expanded in place.
/// Duplicates (eg. the same two boxes completed in a different order) are only kept the first time they are reached.
pub fn expand_turns<B: Board>(board: &B, player: Player) -> Vec<B> {
    let mut result = vec![];
    expand_turns_impl(board, player, &mut result);
    result.into_iter().unique().collect()
}

fn expand_turns_impl<B: Board>(board: &B, player: Player, result: &mut Vec<B>) {
    let moves = match board.available_moves() {
        Ok(moves) => moves,
        Err(_) => return,
    };

    moves.for_each(|mv: B::Move| {
        let (child, end) = board
            .clone_and_play(player, mv)
            .unwrap_or_else(|e| panic!("available move {} could not be played: {}", mv, e));

        match end {
            TurnEnd::Again if !child.is_done() => expand_turns_impl(&child, player, result),
            TurnEnd::Again | TurnEnd::Passed => result.push(child),
        }
    });
}

/// Rules that only look at the outcome of the board: `1` for a win, `-1` for a loss and `0` otherwise.
#[derive(Debug, Default, Copy, Clone)]
pub struct OutcomeRules;

impl<B: Board> GameRules<B> for OutcomeRules {
    fn evaluate(&self, board: &B, pov: Player) -> i32 {
        board.outcome().map_or(0, |outcome| outcome.pov(pov).sign())
    }
}
