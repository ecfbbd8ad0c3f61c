use rand::Rng;

use board_search::ai::minimax::{MiniMax, Score, SearchError};
use board_search::board::{Board, Player};
use board_search::config::SearchConfig;
use board_search::games::dummy::DummyGame;
use board_search::rules::OutcomeRules;
use board_search::util::tiny::seeded_rng;

fn best(tree: &str, player: Player, depth: u32) -> String {
    let board: DummyGame = tree.parse().unwrap();
    let engine = MiniMax::new(OutcomeRules, SearchConfig::new(depth, player));
    engine.answer(&board).unwrap().to_string()
}

#[test]
fn win_fast() {
    assert_eq!(best("(A(AA))", Player::A, 4), "A");
    assert_eq!(best("((AA)A)", Player::A, 4), "A");
    assert_eq!(best("(((AA)A)(AA))", Player::A, 6), "(AA)");
}

#[test]
fn lose_slow() {
    assert_eq!(best("(B(BB))", Player::A, 4), "(BB)");
    assert_eq!(best("((BB)B)", Player::A, 4), "(BB)");

    // the same from the other side
    assert_eq!(best("(A(AA))", Player::B, 4), "(AA)");
    assert_eq!(best("((AA)A)", Player::B, 4), "(AA)");
}

#[test]
fn value_before_depth() {
    // a slow win beats a fast draw, a slow draw beats a fast loss
    assert_eq!(best("(=(AA))", Player::A, 4), "(AA)");
    assert_eq!(best("(B(==))", Player::A, 4), "(==)");
}

#[test]
fn draw_ties_keep_first() {
    assert_eq!(best("((==)=)", Player::A, 4), "(==)");
    assert_eq!(best("(=(==))", Player::A, 4), "=");
}

#[test]
fn score_depth_is_remaining_depth() {
    let board: DummyGame = "(A(AA))".parse().unwrap();
    let engine = MiniMax::new(OutcomeRules, SearchConfig::new(5, Player::A));

    let result = engine.search(&board, Player::A).unwrap();
    assert_eq!(result.score, Score::new(1, 4));
    assert_eq!(result.candidates, 2);

    let result = engine.search(&board, Player::B).unwrap();
    assert_eq!(result.score, Score::new(-1, 3));
}

#[test]
fn score_of_counts_down_from_given_depth() {
    let board: DummyGame = "(A(AA))".parse().unwrap();
    let engine = MiniMax::new(OutcomeRules, SearchConfig::new(1, Player::A));

    // the depth passed in overrides the configured depth
    assert_eq!(engine.score_of(&board, Player::A, 5), Score::new(1, 4));
    assert_eq!(engine.score_of(&board, Player::B, 5), Score::new(-1, 3));

    // nothing is searched at depth zero, a node that is not done is neutral
    assert_eq!(engine.score_of(&board, Player::A, 0), Score::new(0, 0));

    let leaf: DummyGame = "B".parse().unwrap();
    assert_eq!(engine.score_of(&leaf, Player::A, 3), Score::new(-1, 3));
}

#[test]
fn horizon_is_neutral() {
    // the win is two turns away, a depth 1 search cannot tell the moves apart
    assert_eq!(best("((BA)(AA))", Player::A, 1), "(BA)");
    assert_eq!(best("((BA)(AA))", Player::A, 2), "(AA)");
}

#[test]
fn depth_zero_is_one_ply() {
    for tree in ["(=A)", "(B=A)", "((AA)A)", "(=(BB)B)"] {
        for &player in &Player::BOTH {
            assert_eq!(best(tree, player, 0), best(tree, player, 1), "tree {} player {:?}", tree, player);
        }
    }

    assert_eq!(best("(=A)", Player::A, 0), "A");
    assert_eq!(best("(=A)", Player::B, 0), "=");
}

#[test]
fn done_board_is_rejected() {
    let board: DummyGame = "A".parse().unwrap();
    let engine = MiniMax::new(OutcomeRules, SearchConfig::new(3, Player::A));

    assert!(matches!(
        engine.answer(&board),
        Err(SearchError::PreconditionViolated(_))
    ));
}

#[test]
fn pruning_never_changes_result() {
    let mut rng = seeded_rng(0);

    for i in 0..500 {
        let tree = random_tree(&mut rng, 5);
        let board: DummyGame = tree.parse().unwrap();
        if board.outcome().is_some() {
            continue;
        }

        for &player in &Player::BOTH {
            for depth in 0..6 {
                let pruned = MiniMax::new(OutcomeRules, SearchConfig::new(depth, player));
                let full = MiniMax::new(OutcomeRules, SearchConfig::new(depth, player).without_pruning());

                let pruned = pruned.search(&board, player).unwrap();
                let full = full.search(&board, player).unwrap();

                assert_eq!(pruned.board, full.board, "tree {} #{} depth {}", tree, i, depth);
                assert_eq!(pruned.score, full.score, "tree {} #{} depth {}", tree, i, depth);
                assert!(pruned.nodes <= full.nodes);
            }
        }
    }
}

#[test]
fn deterministic() {
    let mut rng = seeded_rng(1);

    for _ in 0..50 {
        let tree = random_tree(&mut rng, 4);
        let board: DummyGame = tree.parse().unwrap();
        if board.outcome().is_some() {
            continue;
        }

        let engine = MiniMax::new(OutcomeRules, SearchConfig::new(4, Player::A));
        let first = engine.search(&board, Player::A).unwrap();
        let second = engine.search(&board, Player::A).unwrap();

        assert_eq!(first.board, second.board);
        assert_eq!(first.score, second.score);
        assert_eq!(first.nodes, second.nodes);
    }
}

fn random_tree(rng: &mut impl Rng, depth: u32) -> String {
    if depth == 0 || rng.gen_bool(0.25) {
        return ["A", "B", "="][rng.gen_range(0..3)].to_string();
    }

    let children: String = (0..rng.gen_range(1..=4)).map(|_| random_tree(&mut *rng, depth - 1)).collect();
    format!("({})", children)
}
