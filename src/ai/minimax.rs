use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ops::Neg;

use rand::Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::ai::Bot;
use crate::board::{Board, Player};
use crate::config::SearchConfig;
use crate::rules::GameRules;

/// The value of a board together with the remaining search depth at which it was found.
///
/// `value` is always from the POV of the player to move at the node the score belongs to,
/// negating a score switches to the other player. `depth` counts down towards the leaves,
/// so a larger depth means the value was reached sooner.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Score {
    pub value: i32,
    pub depth: u32,
}

/// The role of a player in classic (non-negamax) minimax bookkeeping.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Role {
    Max,
    Min,
}

impl Score {
    pub fn new(value: i32, depth: u32) -> Self {
        Score { value, depth }
    }

    /// Whether `self` is strictly better than `other` for the player to move.
    ///
    /// Higher values are better. Between equal positive values the one reached sooner is better (win fast),
    /// between equal negative values the one reached later is better (lose slow).
    /// Equal neutral values are never strictly better than each other.
    pub fn better(self, other: Score) -> bool {
        match self.value.cmp(&other.value) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => match self.value.cmp(&0) {
                Ordering::Greater => self.depth > other.depth,
                Ordering::Less => self.depth < other.depth,
                Ordering::Equal => false,
            },
        }
    }

    /// Merge old and new into the best of both, and return whether the new value replaced the old one.
    pub fn merge(old: Score, new: Score) -> (Score, bool) {
        if new.better(old) {
            (new, true)
        } else {
            (old, false)
        }
    }

    /// Pick the better of `a` and `b` when both are measured from the POV of the `Max` player,
    /// for a player with the given role. Returns `b` if neither is strictly better.
    pub fn better_for(a: Score, b: Score, role: Role) -> Score {
        let a_better = match role {
            Role::Max => a.better(b),
            Role::Min => (-a).better(-b),
        };
        if a_better {
            a
        } else {
            b
        }
    }
}

impl Neg for Score {
    type Output = Score;

    fn neg(self) -> Self::Output {
        Score {
            value: -self.value,
            depth: self.depth,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum SearchError {
    #[error("search precondition violated: {0}")]
    PreconditionViolated(&'static str),
}

#[derive(Debug, Clone)]
pub struct SearchResult<B> {
    /// The best board after one turn of the searching player.
    pub board: B,
    /// The score of `board`, from the POV of the searching player.
    pub score: Score,
    /// The number of boards the root turn could lead to.
    pub candidates: usize,
    /// The number of nodes visited, including leaves.
    pub nodes: u64,
}

/// Fixed depth negamax search with alpha-beta pruning, generic over the board and its rules.
pub struct MiniMax<B: Board, R: GameRules<B>> {
    rules: R,
    config: SearchConfig,
    ph: PhantomData<B>,
}

impl<B: Board, R: GameRules<B>> Debug for MiniMax<B, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "MiniMax {{ config: {:?}, rules: {:?} }}", self.config, self.rules)
    }
}

impl<B: Board, R: GameRules<B>> MiniMax<B, R> {
    pub fn new(rules: R, config: SearchConfig) -> Self {
        MiniMax {
            rules,
            config,
            ph: PhantomData,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// The best board after a turn of the configured player.
    pub fn answer(&self, board: &B) -> Result<B, SearchError> {
        self.best_next_board(board, self.config.player)
    }

    /// The best board after a turn of `player`.
    ///
    /// The board must not be done and the rules must generate at least one candidate,
    /// otherwise [SearchError::PreconditionViolated] is returned.
    pub fn best_next_board(&self, board: &B, player: Player) -> Result<B, SearchError> {
        self.search(board, player).map(|result| result.board)
    }

    /// Like [MiniMax::best_next_board], but also returns the score and some statistics.
    /// Between equally scored candidates the first one generated is picked.
    pub fn search(&self, board: &B, player: Player) -> Result<SearchResult<B>, SearchError> {
        self.search_with(board, player, FirstBestSelector)
    }

    /// Evaluate `board` with `player` to move and `depth` plies left.
    /// The returned score is from the POV of `player`.
    pub fn score_of(&self, board: &B, player: Player, depth: u32) -> Score {
        let mut nodes = 0;
        self.negamax(board, player, depth, None, None, &mut nodes)
    }

    fn search_with(
        &self,
        board: &B,
        player: Player,
        mut selector: impl MoveSelector,
    ) -> Result<SearchResult<B>, SearchError> {
        if board.is_done() {
            return Err(SearchError::PreconditionViolated("cannot search a board that is already done"));
        }

        let candidates = self.rules.expand(board, player);
        if candidates.is_empty() {
            return Err(SearchError::PreconditionViolated("the rules generated no candidate boards"));
        }

        let depth = self.config.effective_depth();
        let mut nodes = 1;
        let mut alpha: Option<i32> = None;
        let mut best: Option<(usize, Score)> = None;

        for (i, child) in candidates.iter().enumerate() {
            let child_beta = if self.config.alpha_beta { alpha.map(Neg::neg) } else { None };
            let score = -self.negamax(child, player.other(), depth - 1, None, child_beta, &mut nodes);
            trace!(candidate = i, value = score.value, depth = score.depth, "root candidate");

            let replace = match best {
                None => {
                    selector.reset();
                    true
                }
                Some((_, best_score)) => {
                    if score.better(best_score) {
                        selector.reset();
                        true
                    } else if score == best_score {
                        selector.accept_tie()
                    } else {
                        false
                    }
                }
            };
            if replace {
                best = Some((i, score));
            }

            alpha = Some(alpha.map_or(score.value, |alpha| alpha.max(score.value)));
        }

        let (index, score) = match best {
            Some(best) => best,
            None => unreachable!("there is at least one candidate"),
        };

        debug!(
            player = %player,
            candidates = candidates.len(),
            nodes,
            chosen = index,
            value = score.value,
            depth = score.depth,
            "search finished"
        );

        let count = candidates.len();
        let mut candidates = candidates;

        Ok(SearchResult {
            board: candidates.swap_remove(index),
            score,
            candidates: count,
            nodes,
        })
    }

    /// The core minimax implementation.
    /// Alpha-Beta Negamax, implementation based on
    /// <https://en.wikipedia.org/wiki/Negamax#Negamax_with_alpha_beta_pruning>
    ///
    /// The search is only cut off when a bound is strictly exceeded, scores equal to a bound stay exact.
    /// This keeps the depth tie-break between equal values identical to a search without pruning.
    fn negamax(
        &self,
        board: &B,
        player: Player,
        depth_left: u32,
        alpha: Option<i32>,
        beta: Option<i32>,
        nodes: &mut u64,
    ) -> Score {
        *nodes += 1;

        if depth_left == 0 || board.is_done() {
            return Score::new(self.rules.evaluate(board, player), depth_left);
        }

        let children = self.rules.expand(board, player);
        let mut best: Option<Score> = None;
        let mut alpha = alpha;

        for child in &children {
            let (child_alpha, child_beta) = if self.config.alpha_beta {
                (beta.map(Neg::neg), alpha.map(Neg::neg))
            } else {
                (None, None)
            };

            let score = -self.negamax(child, player.other(), depth_left - 1, child_alpha, child_beta, nodes);
            let new_best = best.map_or(score, |best| Score::merge(best, score).0);
            best = Some(new_best);

            if self.config.alpha_beta {
                alpha = Some(alpha.map_or(score.value, |alpha| alpha.max(score.value)));
                if beta.map_or(false, |beta| new_best.value > beta) {
                    break;
                }
            }
        }

        // no children means no moves left, evaluate the board as a leaf
        best.unwrap_or_else(|| Score::new(self.rules.evaluate(board, player), depth_left))
    }
}

impl<B: Board, R: GameRules<B>> Bot<B> for MiniMax<B, R> {
    fn select_board(&mut self, board: &B, player: Player) -> Result<B, SearchError> {
        self.best_next_board(board, player)
    }
}

/// This is a trait so the root search can either pick the first best candidate or a random one between ties.
trait MoveSelector {
    /// A strictly better candidate was found.
    fn reset(&mut self);

    /// Whether to replace the current best candidate by an equally scored one.
    fn accept_tie(&mut self) -> bool;
}

/// Always keep the first best candidate.
struct FirstBestSelector;

impl MoveSelector for FirstBestSelector {
    fn reset(&mut self) {}

    fn accept_tie(&mut self) -> bool {
        false
    }
}

/// Pick each of the equally scored candidates with equal probability,
/// implemented using [reservoir sampling](https://en.wikipedia.org/wiki/Reservoir_sampling).
struct RandomBestSelector<'a, G: Rng> {
    rng: &'a mut G,
    count: u32,
}

impl<'a, G: Rng> RandomBestSelector<'a, G> {
    pub fn new(rng: &'a mut G) -> Self {
        RandomBestSelector { rng, count: 0 }
    }
}

impl<G: Rng> MoveSelector for RandomBestSelector<'_, G> {
    fn reset(&mut self) {
        self.count = 1;
    }

    fn accept_tie(&mut self) -> bool {
        self.count += 1;
        self.rng.gen_range(0..self.count) == 0
    }
}

/// A [Bot] that searches with [MiniMax] and picks randomly between equally scored boards.
pub struct MiniMaxBot<B: Board, R: GameRules<B>, G: Rng> {
    engine: MiniMax<B, R>,
    rng: G,
}

impl<B: Board, R: GameRules<B>, G: Rng> Debug for MiniMaxBot<B, R, G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "MiniMaxBot {{ engine: {:?} }}", self.engine)
    }
}

impl<B: Board, R: GameRules<B>, G: Rng> MiniMaxBot<B, R, G> {
    pub fn new(rules: R, config: SearchConfig, rng: G) -> Self {
        MiniMaxBot {
            engine: MiniMax::new(rules, config),
            rng,
        }
    }

    pub fn search(&mut self, board: &B, player: Player) -> Result<SearchResult<B>, SearchError> {
        self.engine
            .search_with(board, player, RandomBestSelector::new(&mut self.rng))
    }
}

impl<B: Board, R: GameRules<B>, G: Rng> Bot<B> for MiniMaxBot<B, R, G> {
    fn select_board(&mut self, board: &B, player: Player) -> Result<B, SearchError> {
        self.search(board, player).map(|result| result.board)
    }
}
