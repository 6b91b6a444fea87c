//! Piece kind representation.

use crate::Player;
use serde::{Deserialize, Serialize};

/// The fourteen shogi piece kinds: eight base kinds and six promoted forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Lance = 1,
    Knight = 2,
    Silver = 3,
    Gold = 4,
    Bishop = 5,
    Rook = 6,
    King = 7,
    Tokin = 8,
    PromotedLance = 9,
    PromotedKnight = 10,
    PromotedSilver = 11,
    Horse = 12,
    Dragon = 13,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 14] = [
        PieceKind::Pawn,
        PieceKind::Lance,
        PieceKind::Knight,
        PieceKind::Silver,
        PieceKind::Gold,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::King,
        PieceKind::Tokin,
        PieceKind::PromotedLance,
        PieceKind::PromotedKnight,
        PieceKind::PromotedSilver,
        PieceKind::Horse,
        PieceKind::Dragon,
    ];

    /// Kinds that can sit in a hand, in SFEN hand order.
    pub const HAND_KINDS: [PieceKind; 7] = [
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Gold,
        PieceKind::Silver,
        PieceKind::Knight,
        PieceKind::Lance,
        PieceKind::Pawn,
    ];

    /// Returns the index of this kind (0-13).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the promoted form, or `None` for Gold, King and promoted kinds.
    #[inline]
    pub const fn promoted(self) -> Option<PieceKind> {
        match self {
            PieceKind::Pawn => Some(PieceKind::Tokin),
            PieceKind::Lance => Some(PieceKind::PromotedLance),
            PieceKind::Knight => Some(PieceKind::PromotedKnight),
            PieceKind::Silver => Some(PieceKind::PromotedSilver),
            PieceKind::Bishop => Some(PieceKind::Horse),
            PieceKind::Rook => Some(PieceKind::Dragon),
            _ => None,
        }
    }

    /// Returns the base (un-promoted) kind. Base kinds map to themselves.
    #[inline]
    pub const fn unpromoted(self) -> PieceKind {
        match self {
            PieceKind::Tokin => PieceKind::Pawn,
            PieceKind::PromotedLance => PieceKind::Lance,
            PieceKind::PromotedKnight => PieceKind::Knight,
            PieceKind::PromotedSilver => PieceKind::Silver,
            PieceKind::Horse => PieceKind::Bishop,
            PieceKind::Dragon => PieceKind::Rook,
            other => other,
        }
    }

    /// Returns true if this kind is a promoted form.
    #[inline]
    pub const fn is_promoted(self) -> bool {
        (self as u8) >= PieceKind::Tokin as u8
    }

    /// Returns true if this kind has a promoted form.
    #[inline]
    pub const fn can_promote(self) -> bool {
        self.promoted().is_some()
    }

    /// Returns true if a captured piece of this kind may be held in hand.
    #[inline]
    pub const fn is_hand_kind(self) -> bool {
        !self.is_promoted() && !matches!(self, PieceKind::King)
    }

    /// Returns how many pieces of this kind's base form a full set contains.
    pub const fn set_count(self) -> u32 {
        match self.unpromoted() {
            PieceKind::Pawn => 18,
            PieceKind::Bishop | PieceKind::Rook => 2,
            PieceKind::King => 2,
            _ => 4,
        }
    }

    /// Returns the layout code (1-8) of a base kind, `None` for promoted kinds.
    ///
    /// 1 Pawn, 2 Bishop, 3 Rook, 4 Lance, 5 Knight, 6 Silver, 7 Gold, 8 King.
    pub const fn layout_code(self) -> Option<u8> {
        match self {
            PieceKind::Pawn => Some(1),
            PieceKind::Bishop => Some(2),
            PieceKind::Rook => Some(3),
            PieceKind::Lance => Some(4),
            PieceKind::Knight => Some(5),
            PieceKind::Silver => Some(6),
            PieceKind::Gold => Some(7),
            PieceKind::King => Some(8),
            _ => None,
        }
    }

    /// Parses a layout code (1-8) into a base kind.
    pub const fn from_layout_code(code: u8) -> Option<PieceKind> {
        match code {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Bishop),
            3 => Some(PieceKind::Rook),
            4 => Some(PieceKind::Lance),
            5 => Some(PieceKind::Knight),
            6 => Some(PieceKind::Silver),
            7 => Some(PieceKind::Gold),
            8 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Returns the SFEN letter of the base kind for the given owner.
    ///
    /// Promoted kinds are written as `+` followed by this letter.
    pub const fn to_sfen_char(self, owner: Player) -> char {
        let c = match self.unpromoted() {
            PieceKind::Pawn => 'p',
            PieceKind::Lance => 'l',
            PieceKind::Knight => 'n',
            PieceKind::Silver => 's',
            PieceKind::Gold => 'g',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            _ => 'k',
        };
        match owner {
            Player::First => c.to_ascii_uppercase(),
            Player::Second => c,
        }
    }

    /// Parses a SFEN letter into a base kind and owner.
    pub const fn from_sfen_char(c: char) -> Option<(PieceKind, Player)> {
        let owner = if c.is_ascii_uppercase() {
            Player::First
        } else {
            Player::Second
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'l' => PieceKind::Lance,
            'n' => PieceKind::Knight,
            's' => PieceKind::Silver,
            'g' => PieceKind::Gold,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((kind, owner))
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Lance => "Lance",
            PieceKind::Knight => "Knight",
            PieceKind::Silver => "Silver",
            PieceKind::Gold => "Gold",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::King => "King",
            PieceKind::Tokin => "Tokin",
            PieceKind::PromotedLance => "Promoted Lance",
            PieceKind::PromotedKnight => "Promoted Knight",
            PieceKind::PromotedSilver => "Promoted Silver",
            PieceKind::Horse => "Horse",
            PieceKind::Dragon => "Dragon",
        };
        write!(f, "{}", name)
    }
}
