//! Legality filtering: self-check avoidance and drop restrictions.
//!
//! Each candidate is tested by building a hypothetical board (a clone of the
//! snapshot with the candidate applied) and asking [`is_in_check`] about the
//! mover's King. A player already in check is thereby restricted to moves
//! that leave no attacker behind.

use crate::board::{Piece, PieceId};
use crate::check::is_in_check;
use crate::movegen::{can_ever_move, destinations, MoveList};
use crate::promotion::{promotion_status, PromotionStatus};
use crate::rules::RuleConfig;
use crate::{Board, Position, SquareSet};
use shogi_core::{Move, PieceKind, Player, Square};

/// Id given to the piece placed on a hypothetical board when probing a drop.
const PROBE_ID: PieceId = PieceId(u16::MAX);

/// Returns the destinations of the piece on `from` that do not leave its
/// owner's King in check.
pub fn legal_board_destinations(board: &Board, from: Square) -> SquareSet {
    let Some(&piece) = board.piece_at(from) else {
        return SquareSet::EMPTY;
    };
    let mut dests = destinations(board, from, piece.owner, piece.kind);
    dests.retain(|to| {
        let mut hypothetical = board.clone();
        hypothetical.remove(from);
        hypothetical.place(to, piece);
        !is_in_check(&hypothetical, piece.owner)
    });
    dests
}

/// Returns the empty squares onto which `player` may drop a `kind` piece.
///
/// Pawn drops additionally exclude files holding one of the player's own
/// un-promoted pawns and drops that checkmate the opponent outright.
pub fn legal_drop_destinations(
    board: &Board,
    player: Player,
    kind: PieceKind,
    rules: &RuleConfig,
) -> SquareSet {
    if !kind.is_hand_kind() {
        return SquareSet::EMPTY;
    }

    let mut result = SquareSet::EMPTY;
    for to in board.empty_squares() {
        if kind == PieceKind::Pawn && board.has_pawn_on_file(player, to.file()) {
            continue;
        }
        if rules.forbid_immobile_drops && !can_ever_move(kind, player, to) {
            continue;
        }

        let mut hypothetical = board.clone();
        hypothetical.place(to, Piece::new(PROBE_ID, player, kind));
        if is_in_check(&hypothetical, player) {
            continue;
        }
        if kind == PieceKind::Pawn && is_drop_pawn_mate(&hypothetical, player) {
            continue;
        }
        result.insert(to);
    }
    result
}

/// Returns true if, on a board where `dropper` has just dropped a pawn, the
/// opponent is in check and has no legal board move.
///
/// Only one ply of replies is searched. Drops are not considered: a pawn
/// check is delivered from an adjacent square and cannot be interposed.
pub fn is_drop_pawn_mate(board: &Board, dropper: Player) -> bool {
    let defender = dropper.opponent();
    if !is_in_check(board, defender) {
        return false;
    }
    board
        .pieces_of(defender)
        .all(|(sq, _)| legal_board_destinations(board, sq).is_empty())
}

/// Generates every legal move of `player` in `position`.
///
/// Board moves with an optional promotion appear twice, once per choice; a
/// mandatory promotion appears only as promoting.
pub fn legal_moves(position: &Position, player: Player, rules: &RuleConfig) -> MoveList {
    let mut moves = MoveList::new();
    let board = &position.board;
    let depth = rules.promotion_zone_depth;

    for (from, piece) in board.pieces_of(player) {
        for to in legal_board_destinations(board, from) {
            push_board_move(&mut moves, piece.kind, player, from, to, depth);
        }
    }

    for kind in position.hand(player).kinds() {
        for to in legal_drop_destinations(board, player, kind, rules) {
            moves.push(Move::drop(kind, to));
        }
    }

    moves
}

/// Returns true if `player` has at least one legal move.
///
/// Equivalent to `!legal_moves(..).is_empty()` but stops at the first move.
pub fn has_legal_move(position: &Position, player: Player, rules: &RuleConfig) -> bool {
    let board = &position.board;
    board
        .pieces_of(player)
        .any(|(from, _)| !legal_board_destinations(board, from).is_empty())
        || position
            .hand(player)
            .kinds()
            .any(|kind| !legal_drop_destinations(board, player, kind, rules).is_empty())
}

/// Returns true if `m` is a legal move for `player`.
pub fn is_legal(position: &Position, player: Player, m: Move, rules: &RuleConfig) -> bool {
    match m {
        Move::Board { from, .. } => {
            matches!(position.board.piece_at(from), Some(p) if p.owner == player)
                && legal_moves_from(position, player, from, rules).contains(&m)
        }
        Move::Drop { kind, to } => {
            position.hand(player).contains(kind)
                && legal_drop_destinations(&position.board, player, kind, rules).contains(to)
        }
    }
}

/// Generates the legal board moves of the piece on `from`.
fn legal_moves_from(position: &Position, player: Player, from: Square, rules: &RuleConfig) -> MoveList {
    let mut moves = MoveList::new();
    let Some(piece) = position.board.piece_at(from) else {
        return moves;
    };
    for to in legal_board_destinations(&position.board, from) {
        push_board_move(&mut moves, piece.kind, player, from, to, rules.promotion_zone_depth);
    }
    moves
}

fn push_board_move(
    moves: &mut MoveList,
    kind: PieceKind,
    player: Player,
    from: Square,
    to: Square,
    depth: u8,
) {
    match promotion_status(kind, player, from, to, depth) {
        PromotionStatus::Unavailable => moves.push(Move::normal(from, to)),
        PromotionStatus::Optional => {
            moves.push(Move::promoting(from, to));
            moves.push(Move::normal(from, to));
        }
        PromotionStatus::Mandatory => moves.push(Move::promoting(from, to)),
    }
}
