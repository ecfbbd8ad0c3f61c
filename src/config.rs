//! Construction parameters for the search engine and the console programs.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

use crate::board::Player;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Immutable parameters of a single search engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SearchConfig {
    /// The number of plies to look ahead, including the move being chosen.
    /// Zero is treated as one: the engine always looks at the immediate children.
    pub max_depth: u32,

    /// The player the engine plays for when asked for an answer without an explicit side.
    pub player: Player,

    /// Whether to use alpha-beta pruning. Disabling it never changes the chosen board, only the cost.
    pub alpha_beta: bool,
}

impl SearchConfig {
    pub fn new(max_depth: u32, player: Player) -> Self {
        SearchConfig {
            max_depth,
            player,
            alpha_beta: true,
        }
    }

    pub fn without_pruning(self) -> Self {
        SearchConfig {
            alpha_beta: false,
            ..self
        }
    }

    /// The depth actually searched from the root.
    pub fn effective_depth(&self) -> u32 {
        self.max_depth.max(1)
    }
}

/// Which console program to run.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Mode {
    /// Play a full game against a human.
    Game,
    /// Print the engine's move for a single position and exit.
    Judge,
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GAME" => Ok(Mode::Game),
            "JUDGE" => Ok(Mode::Judge),
            _ => Err(ConfigError::InvalidConfiguration(format!("unknown mode {:?}", s))),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Game => write!(f, "GAME"),
            Mode::Judge => write!(f, "JUDGE"),
        }
    }
}
