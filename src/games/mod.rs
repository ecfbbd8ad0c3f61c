//! The game implementations.
pub mod dummy;

#[cfg(feature = "game_dots")]
pub mod dots;
#[cfg(feature = "game_ttt")]
pub mod ttt;
