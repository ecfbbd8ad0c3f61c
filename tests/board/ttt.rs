use internal_iterator::InternalIterator;

use board_search::board::{Board, BoardMoves, Outcome, PlayError, Player, TurnEnd};
use board_search::games::ttt::{Coord, TTTBoard};

use crate::board::{assert_play_error, board_test_main, test_moves_consumed};

fn board_with_moves(moves: &[(u8, u8)]) -> TTTBoard {
    let mut board = TTTBoard::default();
    let mut player = Player::A;
    for &(row, col) in moves {
        assert_eq!(Ok(TurnEnd::Passed), board.play(player, Coord::new(row, col)));
        player = player.other();
    }
    board
}

#[test]
fn empty() {
    let board = TTTBoard::default();
    board_test_main(&board);
    test_moves_consumed(&board);
    assert_eq!(board.available_moves().unwrap().count(), 9);
    assert_eq!(board.outcome(), None);
}

#[test]
fn one_move() {
    let board = board_with_moves(&[(1, 0)]);

    board_test_main(&board);
    test_moves_consumed(&board);
    assert_eq!(board.tile(Coord::new(1, 0)), Some(Player::A));
    assert_eq!(board.available_moves().unwrap().count(), 8);
    assert_play_error(&board, Player::B, Coord::new(1, 0), PlayError::UnavailableMove);
}

#[test]
fn done() {
    let board = board_with_moves(&[(0, 0), (1, 2), (0, 1), (1, 1), (0, 2)]);

    board_test_main(&board);
    assert!(board.is_done(), "Board should be done");
    assert_eq!(board.outcome(), Some(Outcome::WonBy(Player::A)));
    assert_play_error(&board, Player::B, Coord::new(2, 2), PlayError::BoardDone);
}

#[test]
fn every_line_wins() {
    let lines = [
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        [(0, 0), (1, 1), (2, 2)],
        [(0, 2), (1, 1), (2, 0)],
    ];

    for line in lines.iter() {
        for &player in &Player::BOTH {
            let mut board = TTTBoard::default();
            for (i, &(row, col)) in line.iter().enumerate() {
                assert_eq!(board.winner(), None);
                board.play(player, Coord::new(row, col)).unwrap();
                if i < 2 {
                    assert!(!board.is_done());
                }
            }
            assert_eq!(board.winner(), Some(player), "line {:?}", line);
            board_test_main(&board);
        }
    }
}

#[test]
fn full_board_draw() {
    // X O X
    // X O O
    // O X X
    let board = board_with_moves(&[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)]);

    assert!(board.is_full());
    assert_eq!(board.winner(), None);
    assert_eq!(board.outcome(), Some(Outcome::Draw));
    board_test_main(&board);
}

#[test]
fn move_to_recovers_move() {
    let board = board_with_moves(&[(0, 0), (1, 1)]);
    let (next, _) = board.clone_and_play(Player::A, Coord::new(2, 1)).unwrap();

    assert_eq!(board.move_to(&next), Some(Coord::new(2, 1)));
    assert_eq!(board.move_to(&board), None);
}

#[test]
fn parse_lenient_whitespace() {
    let text = "\n  +---+---+---+\n  | x |   _ | O |\n  +---+---+---+\n  | _ | _ | _ |\n  +---+---+---+\n  | _ | _ | _ |\n  +---+---+---+\n\n";
    let board: TTTBoard = text.parse().unwrap();

    assert_eq!(board.tile(Coord::new(0, 0)), Some(Player::A));
    assert_eq!(board.tile(Coord::new(0, 2)), Some(Player::B));
    assert_eq!(board.count(Player::A), 1);
    assert_eq!(board.count(Player::B), 1);
}
