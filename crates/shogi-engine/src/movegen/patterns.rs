//! Relative movement tables for each piece kind.
//!
//! Offsets are `(file_delta, forward_delta)` where forward is toward the
//! opponent. They are mirrored vertically for [`Player::Second`](shogi_core::Player::Second).

use shogi_core::PieceKind;

const NONE: &[(i32, i32)] = &[];

const PAWN_STEPS: &[(i32, i32)] = &[(0, 1)];

const KNIGHT_STEPS: &[(i32, i32)] = &[(1, 2), (-1, 2)];

const SILVER_STEPS: &[(i32, i32)] = &[(-1, -1), (1, -1), (1, 1), (-1, 1), (0, 1)];

const GOLD_STEPS: &[(i32, i32)] = &[(0, -1), (1, 0), (-1, 0), (1, 1), (-1, 1), (0, 1)];

const KING_STEPS: &[(i32, i32)] = &[
    (0, -1),
    (1, -1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, 1),
    (0, 1),
];

const LANCE_SLIDES: &[(i32, i32)] = &[(0, 1)];

const BISHOP_SLIDES: &[(i32, i32)] = &[(1, 1), (1, -1), (-1, 1), (-1, -1)];

const ROOK_SLIDES: &[(i32, i32)] = &[(1, 0), (0, -1), (0, 1), (-1, 0)];

/// The geometry of one piece kind: single steps plus sliding rays.
///
/// Promoted kinds are compositions: the four minor promotions reuse the Gold
/// steps, Horse is Bishop rays plus King steps and Dragon is Rook rays plus
/// King steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePattern {
    pub steps: &'static [(i32, i32)],
    pub slides: &'static [(i32, i32)],
}

impl MovePattern {
    /// Returns the movement pattern of the given kind.
    pub const fn of(kind: PieceKind) -> Self {
        let (steps, slides) = match kind {
            PieceKind::Pawn => (PAWN_STEPS, NONE),
            PieceKind::Lance => (NONE, LANCE_SLIDES),
            PieceKind::Knight => (KNIGHT_STEPS, NONE),
            PieceKind::Silver => (SILVER_STEPS, NONE),
            PieceKind::Gold
            | PieceKind::Tokin
            | PieceKind::PromotedLance
            | PieceKind::PromotedKnight
            | PieceKind::PromotedSilver => (GOLD_STEPS, NONE),
            PieceKind::King => (KING_STEPS, NONE),
            PieceKind::Bishop => (NONE, BISHOP_SLIDES),
            PieceKind::Rook => (NONE, ROOK_SLIDES),
            PieceKind::Horse => (KING_STEPS, BISHOP_SLIDES),
            PieceKind::Dragon => (KING_STEPS, ROOK_SLIDES),
        };
        MovePattern { steps, slides }
    }

    /// Iterates over every first-step offset, steps and ray starts alike.
    pub fn first_steps(self) -> impl Iterator<Item = (i32, i32)> {
        self.steps.iter().chain(self.slides.iter()).copied()
    }
}
