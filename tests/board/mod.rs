use internal_iterator::InternalIterator;
use itertools::Itertools;

use board_search::board::{Board, BoardDone, PlayError, Player};

#[cfg(feature = "game_dots")]
mod dots;
#[cfg(feature = "game_ttt")]
mod ttt;

/// Check the consistency of the generic [Board] functions on `board`, for both players.
pub fn board_test_main<B: Board>(board: &B) {
    println!("Currently testing board\n{:?}\n{}", board, board);

    if board.is_done() {
        test_done_board_errors(board);
    } else {
        test_available_match(board);
    }
}

fn test_done_board_errors<B: Board>(board: &B) {
    assert!(board.is_done(), "bug in test implementation, expected done board");
    assert!(board.outcome().is_some());

    assert!(matches!(board.available_moves(), Err(BoardDone)));
    assert!(matches!(board.check_done(), Err(BoardDone)));
}

fn test_available_match<B: Board>(board: &B) {
    println!("available_moves and is_available match:");

    let available: Vec<B::Move> = board.available_moves().unwrap().collect();
    assert!(
        !available.is_empty(),
        "must have at least one available move for non-done board"
    );
    assert!(available.iter().all_unique(), "duplicate moves in {:?}", available);

    for &mv in &available {
        assert!(
            board.is_available_move(mv).unwrap(),
            "generated move {:?} is not available",
            mv
        );

        for player in Player::BOTH {
            let before = board.clone();
            let (child, _) = board.clone_and_play(player, mv).unwrap();
            assert_eq!(&before, board, "clone_and_play modified the original board");
            assert_ne!(&child, board, "playing {:?} did not change the board", mv);
        }
    }
}

/// For games where each move claims part of the board: a played move is never available again.
pub fn test_moves_consumed<B: Board>(board: &B) {
    board.available_moves().unwrap().for_each(|mv: B::Move| {
        let (child, _) = board.clone_and_play(Player::A, mv).unwrap();
        if !child.is_done() {
            assert_eq!(Ok(false), child.is_available_move(mv));
            assert_play_error(&child, Player::B, mv, PlayError::UnavailableMove);
        }
    });
}

pub fn assert_play_error<B: Board>(board: &B, player: Player, mv: B::Move, expected: PlayError) {
    let mut copy = board.clone();
    assert_eq!(Err(expected), copy.play(player, mv).map(|_| ()));
    assert_eq!(&copy, board, "a rejected move modified the board");
}
