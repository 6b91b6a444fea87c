//! Move representation.

use crate::{PieceKind, Player, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A shogi move: either a board piece relocating or a hand piece being dropped.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// A piece on the board moves from `from` to `to`, optionally promoting.
    Board { from: Square, to: Square, promote: bool },
    /// A piece of `kind` is placed from the mover's hand onto `to`.
    Drop { kind: PieceKind, to: Square },
}

impl Move {
    /// Creates a board move without promotion.
    #[inline]
    pub const fn normal(from: Square, to: Square) -> Self {
        Move::Board {
            from,
            to,
            promote: false,
        }
    }

    /// Creates a promoting board move.
    #[inline]
    pub const fn promoting(from: Square, to: Square) -> Self {
        Move::Board {
            from,
            to,
            promote: true,
        }
    }

    /// Creates a drop.
    #[inline]
    pub const fn drop(kind: PieceKind, to: Square) -> Self {
        Move::Drop { kind, to }
    }

    /// Returns the origin square, `None` for drops.
    #[inline]
    pub const fn from(self) -> Option<Square> {
        match self {
            Move::Board { from, .. } => Some(from),
            Move::Drop { .. } => None,
        }
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        match self {
            Move::Board { to, .. } | Move::Drop { to, .. } => to,
        }
    }

    /// Returns true if this move promotes the moving piece.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        matches!(self, Move::Board { promote: true, .. })
    }

    /// Returns true if this move is a drop.
    #[inline]
    pub const fn is_drop(self) -> bool {
        matches!(self, Move::Drop { .. })
    }

    /// Returns the USI notation (e.g., "7g7f", "8h2b+", "P*5e").
    pub fn to_usi(self) -> String {
        match self {
            Move::Board { from, to, promote } => {
                format!("{}{}{}", from, to, if promote { "+" } else { "" })
            }
            Move::Drop { kind, to } => {
                format!("{}*{}", kind.to_sfen_char(Player::First), to)
            }
        }
    }

    /// Parses a move from USI notation.
    ///
    /// Only the shape is validated here; legality is the engine's concern.
    pub fn from_usi(s: &str) -> Option<Self> {
        if !s.is_ascii() {
            return None;
        }
        if let Some((piece, to)) = s.split_once('*') {
            let mut chars = piece.chars();
            let c = chars.next()?;
            if chars.next().is_some() || !c.is_ascii_uppercase() {
                return None;
            }
            let (kind, _) = PieceKind::from_sfen_char(c)?;
            if !kind.is_hand_kind() {
                return None;
            }
            return Some(Move::drop(kind, Square::from_usi(to)?));
        }
        let (body, promote) = match s.strip_suffix('+') {
            Some(body) => (body, true),
            None => (s, false),
        };
        if body.len() != 4 {
            return None;
        }
        let from = Square::from_usi(&body[0..2])?;
        let to = Square::from_usi(&body[2..4])?;
        Some(Move::Board { from, to, promote })
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_usi())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_usi())
    }
}
