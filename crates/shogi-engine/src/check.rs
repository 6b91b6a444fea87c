//! Check detection on board snapshots.
//!
//! Everything here is a pure function of a [`Board`]: callers build a
//! hypothetical board (usually a clone of the live one with a candidate move
//! applied) and ask whether a King is attacked on it.

use crate::board::PieceId;
use crate::legality::legal_board_destinations;
use crate::movegen::destinations;
use crate::Board;
use shogi_core::{PieceKind, Player};
use std::collections::BTreeSet;

/// Returns true if `defender`'s King is attacked on `board`.
///
/// Attacks are raw destinations: an enemy piece pinned to its own King
/// still gives check. A board with no King for `defender` is never in check.
pub fn is_in_check(board: &Board, defender: Player) -> bool {
    let Some(king) = board.king_square(defender) else {
        return false;
    };
    board
        .pieces_of(defender.opponent())
        .any(|(sq, p)| destinations(board, sq, p.owner, p.kind).contains(king))
}

/// Returns the ids of the enemy pieces attacking `defender`'s King.
///
/// With `filter_attacker_moves` set, an attacker only counts if its move onto
/// the King would itself be legal for it. That filter evaluates the
/// attacker's own King safety with [`is_in_check`], which never recurses, so
/// the search is at most one level deep.
pub fn attackers_of_king(
    board: &Board,
    defender: Player,
    filter_attacker_moves: bool,
) -> BTreeSet<PieceId> {
    let Some(king) = board.king_square(defender) else {
        return BTreeSet::new();
    };

    board
        .pieces_of(defender.opponent())
        .filter(|&(sq, p)| {
            let targets = if filter_attacker_moves {
                legal_board_destinations(board, sq)
            } else {
                destinations(board, sq, p.owner, p.kind)
            };
            targets.contains(king)
        })
        .map(|(_, p)| p.id)
        .collect()
}

/// Returns true if `player` has a King on the board.
#[inline]
pub fn has_king(board: &Board, player: Player) -> bool {
    board
        .pieces_of(player)
        .any(|(_, p)| p.kind == PieceKind::King)
}
