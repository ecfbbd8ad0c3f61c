use std::fmt::Debug;

use crate::ai::minimax::SearchError;
use crate::board::{Board, Player};

pub mod minimax;
pub mod simple;

pub trait Bot<B: Board>: Debug {
    /// Pick the board to continue with after a full turn of `player`.
    ///
    /// `self` is mutable to allow for random state, this method is not supposed to
    /// modify `self` in any other significant way.
    fn select_board(&mut self, board: &B, player: Player) -> Result<B, SearchError>;
}

impl<B: Board, F: FnMut(&B, Player) -> Result<B, SearchError> + Debug> Bot<B> for F {
    fn select_board(&mut self, board: &B, player: Player) -> Result<B, SearchError> {
        self(board, player)
    }
}
