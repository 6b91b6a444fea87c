//! Player representation.

use serde::{Deserialize, Serialize};

/// The two players. `First` (sente) moves first and starts on the low ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Player {
    First = 0,
    Second = 1,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::First, Player::Second];

    /// Number of players.
    pub const COUNT: usize = 2;

    /// Returns the other player.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Returns the index (0 for First, 1 for Second).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Creates a player from its index.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Player::First),
            1 => Some(Player::Second),
            _ => None,
        }
    }

    /// Returns the rank step toward this player's front (+1 for First, -1 for Second).
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Player::First => 1,
            Player::Second => -1,
        }
    }

    /// Returns the SFEN side character ('b' for First, 'w' for Second).
    #[inline]
    pub const fn to_sfen_char(self) -> char {
        match self {
            Player::First => 'b',
            Player::Second => 'w',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::First => write!(f, "Player 1"),
            Player::Second => write!(f, "Player 2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent() {
        assert_eq!(Player::First.opponent(), Player::Second);
        assert_eq!(Player::Second.opponent(), Player::First);
    }

    #[test]
    fn index_roundtrip() {
        for player in Player::ALL {
            assert_eq!(Player::from_index(player.index()), Some(player));
        }
        assert_eq!(Player::from_index(2), None);
    }

    #[test]
    fn forward_direction() {
        assert_eq!(Player::First.forward(), 1);
        assert_eq!(Player::Second.forward(), -1);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Player::First), "Player 1");
        assert_eq!(format!("{}", Player::Second), "Player 2");
    }
}
