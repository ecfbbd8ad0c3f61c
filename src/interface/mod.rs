//! Ways to interact with a game from outside the library.
pub mod console;
