use board_search::board::Player;
use board_search::games::dots::{DotsBoard, DotsRules};

use crate::perft::perft_main;

#[test]
fn dots_perft() {
    perft_main(
        &DotsRules,
        |&(rows, cols): &(u8, u8)| DotsBoard::new(rows, cols).unwrap(),
        vec![
            // the last line completes the box and ends the game, it is still counted as a turn
            (&(1, 1), Player::A, vec![1, 4, 12, 24, 24]),
            (&(1, 2), Player::A, vec![1, 7, 42]),
        ],
    );
}
