//! Game results and rule configuration.

mod config;

pub use config::{ConfigError, RuleConfig};

use serde::{Deserialize, Serialize};
use shogi_core::Player;
use std::fmt;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// The side to move was in check with no legal move.
    Checkmate { winner: Player },
    /// A player resigned.
    Resignation { winner: Player },
    /// Draw with a specific reason.
    Draw(DrawReason),
}

impl GameResult {
    /// Returns the winning player, or `None` for a draw.
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameResult::Checkmate { winner } | GameResult::Resignation { winner } => Some(winner),
            GameResult::Draw(_) => None,
        }
    }

    /// Returns true if the game was drawn.
    pub const fn is_draw(self) -> bool {
        matches!(self, GameResult::Draw(_))
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Checkmate { winner } => write!(f, "{} wins by checkmate", winner),
            GameResult::Resignation { winner } => write!(f, "{} wins by resignation", winner),
            GameResult::Draw(reason) => write!(f, "draw ({})", reason),
        }
    }
}

/// Reason for a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawReason {
    /// No legal moves but not in check.
    Stalemate,
    /// The configured number of full rounds was exceeded.
    MoveLimit,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawReason::Stalemate => write!(f, "stalemate"),
            DrawReason::MoveLimit => write!(f, "move limit"),
        }
    }
}
