#![warn(missing_debug_implementations)]
#![allow(clippy::new_without_default)]

//! A [Board](crate::board::Board) abstraction for deterministic two player games, together with
//! a fixed depth minimax search that only needs to be written once for every game.
//!
//! # Features
//!
//! The implemented games are:
//! * [Tic Tac Toe](https://en.wikipedia.org/wiki/Tic-tac-toe) as [TTTBoard](crate::games::ttt::TTTBoard).
//! * [Dots and Boxes](https://en.wikipedia.org/wiki/Dots_and_boxes) as [DotsBoard](crate::games::dots::DotsBoard),
//!     where completing a box earns the player another move.
//! * [DummyGame](crate::games::dummy::DummyGame),
//!     a board that is constructed from an explicit game tree, useful for debugging.
//!
//! A game is searched through its [GameRules](crate::rules::GameRules), which generate the boards one
//! full turn can lead to and statically evaluate boards from the POV of a player.
//!
//! Utilities in this crate that work for any [Board](crate::board::Board):
//! * Game-playing algorithms:
//!     * [RandomBot](crate::ai::simple::RandomBot),
//!         which simply picks a random next board.
//!     * [MiniMax](crate::ai::minimax::MiniMax) and [MiniMaxBot](crate::ai::minimax::MiniMaxBot),
//!         which pick the best board as evaluated by the rules at a fixed depth (implemented as alpha-beta negamax).
//!         Between equal values a win is taken as soon as possible and a loss delayed as long as possible.
//! * A console turn loop between a human and the engine, see [console](crate::interface::console).
//! * A bot vs bot game runner, see [bot_game](crate::util::bot_game).
//! * Simple game statistics (perft, all reachable boards) which can be used to test board implementations.
//!
//! # Examples
//!
//! ## Let the engine pick the opening move in Tic Tac Toe
//!
//! ```
//! # #[cfg(feature = "game_ttt")]
//! # {
//! use board_search::ai::minimax::MiniMax;
//! use board_search::board::Player;
//! use board_search::config::SearchConfig;
//! use board_search::games::ttt::TTTBoard;
//! use board_search::rules::OutcomeRules;
//!
//! let board = TTTBoard::default();
//! let engine = MiniMax::new(OutcomeRules, SearchConfig::new(2, Player::A));
//!
//! let next = engine.answer(&board).unwrap();
//! println!("{}", next);
//! println!("Picked move {}", board.move_to(&next).unwrap());
//! # }
//! ```

pub mod board;
pub mod config;
pub mod rules;
pub mod wdl;

pub mod ai;
pub mod games;
pub mod interface;
pub mod util;
