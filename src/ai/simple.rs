//! A simple baseline bot: `RandomBot`.
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::ai::minimax::SearchError;
use crate::ai::Bot;
use crate::board::{Board, Player};
use crate::rules::GameRules;

/// Bot that chooses uniformly between all boards one turn can lead to.
pub struct RandomBot<B: Board, R: GameRules<B>, G: Rng> {
    rules: R,
    rng: G,
    ph: PhantomData<B>,
}

impl<B: Board, R: GameRules<B>, G: Rng> Debug for RandomBot<B, R, G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomBot")
    }
}

impl<B: Board, R: GameRules<B>, G: Rng> RandomBot<B, R, G> {
    pub fn new(rules: R, rng: G) -> Self {
        RandomBot {
            rules,
            rng,
            ph: PhantomData,
        }
    }
}

impl<B: Board, R: GameRules<B>, G: Rng> Bot<B> for RandomBot<B, R, G> {
    fn select_board(&mut self, board: &B, player: Player) -> Result<B, SearchError> {
        if board.is_done() {
            return Err(SearchError::PreconditionViolated("cannot pick a board after a done board"));
        }

        self.rules
            .expand(board, player)
            .choose(&mut self.rng)
            .cloned()
            .ok_or(SearchError::PreconditionViolated("the rules generated no candidate boards"))
    }
}
