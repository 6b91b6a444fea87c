//! Promotion resolution.

use crate::movegen::can_ever_move;
use shogi_core::{PieceKind, Player, Square};

/// Whether a completed board move offers promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionStatus {
    /// The piece cannot promote on this move.
    Unavailable,
    /// The mover chooses whether to promote.
    Optional,
    /// The piece would be immobile un-promoted, so it promotes unconditionally.
    Mandatory,
}

impl PromotionStatus {
    /// Returns true unless promotion is unavailable.
    #[inline]
    pub const fn is_available(self) -> bool {
        !matches!(self, PromotionStatus::Unavailable)
    }
}

/// Returns true if `sq` lies in `player`'s promotion zone: the last `depth`
/// ranks on the opponent's side.
#[inline]
pub const fn in_promotion_zone(player: Player, sq: Square, depth: u8) -> bool {
    match player {
        Player::First => sq.rank() as u16 + depth as u16 >= Square::RANKS as u16,
        Player::Second => sq.rank() < depth,
    }
}

/// Classifies the promotion offered by moving a `kind` piece owned by
/// `owner` from `from` to `to`.
///
/// Promotion is available when the kind has a promoted form and either end
/// of the move lies in the owner's zone.
pub fn promotion_status(
    kind: PieceKind,
    owner: Player,
    from: Square,
    to: Square,
    depth: u8,
) -> PromotionStatus {
    if !kind.can_promote() {
        return PromotionStatus::Unavailable;
    }
    if !in_promotion_zone(owner, from, depth) && !in_promotion_zone(owner, to, depth) {
        return PromotionStatus::Unavailable;
    }
    if can_ever_move(kind, owner, to) {
        PromotionStatus::Optional
    } else {
        PromotionStatus::Mandatory
    }
}

/// Returns the kind a piece ends up with after the promotion choice.
///
/// Accepting on a kind without a promoted form leaves it unchanged.
#[inline]
pub fn resolve(kind: PieceKind, accept: bool) -> PieceKind {
    match kind.promoted() {
        Some(promoted) if accept => promoted,
        _ => kind,
    }
}
