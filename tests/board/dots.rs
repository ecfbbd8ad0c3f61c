use internal_iterator::InternalIterator;

use board_search::ai::minimax::MiniMax;
use board_search::board::{Board, BoardMoves, Outcome, PlayError, Player, TurnEnd};
use board_search::config::SearchConfig;
use board_search::games::dots::{DotsBoard, DotsRules, Line};
use board_search::rules::GameRules;

use crate::board::{assert_play_error, board_test_main, test_moves_consumed};

/// A 2x2 board where `player` drew every line except `skip`.
fn board_without(player: Player, skip: &[Line]) -> DotsBoard {
    let mut board = DotsBoard::new(2, 2).unwrap();
    let lines: Vec<Line> = board.all_lines().filter(|line| !skip.contains(line)).collect();
    for line in lines {
        board.play(player, line).unwrap();
    }
    board
}

#[test]
fn empty() {
    let board = DotsBoard::new(2, 3).unwrap();
    board_test_main(&board);
    test_moves_consumed(&board);

    // 3 rows of 3 horizontal lines, 2 rows of 4 vertical lines
    assert_eq!(board.available_moves().unwrap().count(), 17);
    assert_eq!(board.all_lines().count(), 17);
}

#[test]
fn line_outside_board() {
    let board = DotsBoard::new(2, 2).unwrap();
    assert_eq!(board.is_available_move(Line::horizontal(3, 0)), Ok(false));
    assert_eq!(board.is_available_move(Line::vertical(0, 3)), Ok(false));
    assert_play_error(&board, Player::A, Line::horizontal(0, 2), PlayError::UnavailableMove);
}

#[test]
fn box_completion_earns_move() {
    let mut board = DotsBoard::new(1, 2).unwrap();
    assert_eq!(board.play(Player::A, Line::horizontal(0, 0)), Ok(TurnEnd::Passed));
    assert_eq!(board.play(Player::B, Line::horizontal(1, 0)), Ok(TurnEnd::Passed));
    assert_eq!(board.play(Player::A, Line::vertical(0, 0)), Ok(TurnEnd::Passed));
    assert_eq!(board.play(Player::B, Line::vertical(0, 1)), Ok(TurnEnd::Again));

    assert_eq!(board.owner(0, 0), Some(Player::B));
    assert_eq!(board.owner(0, 1), None);
    assert_eq!(board.boxes(Player::B), 1);
    assert!(!board.is_done());
    board_test_main(&board);
    test_moves_consumed(&board);
}

#[test]
fn double_box_completion() {
    // B owns the bottom boxes, the middle vertical line closes both top boxes at once
    let board = board_without(Player::B, &[Line::vertical(0, 1)]);
    assert_eq!(board.boxes(Player::B), 2);
    assert!(!board.is_done());

    let (child, end) = board.clone_and_play(Player::A, Line::vertical(0, 1)).unwrap();
    assert_eq!(end, TurnEnd::Again);
    assert_eq!(child.owner(0, 0), Some(Player::A));
    assert_eq!(child.owner(0, 1), Some(Player::A));
    assert_eq!(child.boxes(Player::A), 2);
    assert_eq!(child.outcome(), Some(Outcome::Draw));
    board_test_main(&child);

    // the chain that ends the game is still a turn
    let next = DotsRules.expand(&board, Player::A);
    assert_eq!(next, vec![child]);
}

#[test]
fn chained_turn_expansion() {
    let board = board_without(Player::B, &[Line::vertical(0, 1), Line::horizontal(0, 0)]);
    assert_eq!(board.boxes(Player::B), 2);

    let next = DotsRules.expand(&board, Player::A);
    assert_eq!(next.len(), 2);

    // drawing the top line first completes nothing
    assert!(next[0].is_drawn(Line::horizontal(0, 0)));
    assert!(!next[0].is_drawn(Line::vertical(0, 1)));
    assert_eq!(next[0].boxes(Player::A), 0);

    // drawing the middle line completes the top right box and earns the top line as well
    assert_eq!(next[1].boxes(Player::A), 2);
    assert_eq!(next[1].outcome(), Some(Outcome::Draw));

    assert_eq!(DotsRules.evaluate(&next[0], Player::A), -2);
    assert_eq!(DotsRules.evaluate(&next[1], Player::A), 0);
}

#[test]
fn engine_takes_chain() {
    let board = board_without(Player::B, &[Line::vertical(0, 1), Line::horizontal(0, 0)]);
    let chain = DotsRules.expand(&board, Player::A)[1].clone();

    for depth in 0..4 {
        for &alpha_beta in &[true, false] {
            let mut config = SearchConfig::new(depth, Player::A);
            config.alpha_beta = alpha_beta;
            let engine = MiniMax::new(DotsRules, config);

            let result = engine.search(&board, Player::A).unwrap();
            assert_eq!(result.board, chain, "depth {}", depth);
            assert_eq!(result.score.value, 0);
            assert_eq!(result.candidates, 2);
        }
    }
}

#[test]
fn winner_by_box_count() {
    let mut board = DotsBoard::new(1, 1).unwrap();
    for (player, line) in [
        (Player::A, Line::horizontal(0, 0)),
        (Player::B, Line::horizontal(1, 0)),
        (Player::A, Line::vertical(0, 0)),
    ] {
        assert_eq!(board.play(player, line), Ok(TurnEnd::Passed));
        assert_eq!(board.winner(), None);
    }

    assert_eq!(board.play(Player::B, Line::vertical(0, 1)), Ok(TurnEnd::Again));
    assert_eq!(board.outcome(), Some(Outcome::WonBy(Player::B)));
    board_test_main(&board);
    assert_play_error(&board, Player::A, Line::vertical(0, 1), PlayError::BoardDone);
}
