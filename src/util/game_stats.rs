//! Utilities for collecting game statistics and testing game and rules implementations.
use std::collections::HashSet;

use crate::board::{Board, Player};
use crate::rules::GameRules;

/// The number of boards reachable after `depth` full turns, including duplicates.
/// Turns alternate starting with `player`. See <https://www.chessprogramming.org/Perft>.
pub fn perft<B: Board>(rules: &impl GameRules<B>, board: &B, player: Player, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    if board.is_done() {
        return 0;
    }

    rules
        .expand(board, player)
        .iter()
        .map(|child| perft(rules, child, player.other(), depth - 1))
        .sum()
}

/// Generate the set of all possible positions reachable from the given board,
/// each paired with the player to move.
/// This function can easily take a long time to terminate depending on the game.
pub fn all_possible_boards<B: Board>(
    rules: &impl GameRules<B>,
    start: &B,
    player: Player,
    include_done: bool,
) -> Vec<(B, Player)> {
    let mut set = HashSet::new();
    let mut result = vec![];
    all_possible_boards_impl(rules, start, player, include_done, &mut result, &mut set);
    result
}

fn all_possible_boards_impl<B: Board>(
    rules: &impl GameRules<B>,
    start: &B,
    player: Player,
    include_done: bool,
    result: &mut Vec<(B, Player)>,
    set: &mut HashSet<(B, Player)>,
) {
    if !include_done && start.is_done() {
        return;
    }
    if !set.insert((start.clone(), player)) {
        return;
    }
    result.push((start.clone(), player));
    if start.is_done() {
        return;
    }

    for child in rules.expand(start, player) {
        all_possible_boards_impl(rules, &child, player.other(), include_done, result, set);
    }
}
