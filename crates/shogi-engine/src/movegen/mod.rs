//! Move generation.
//!
//! This module produces the squares a piece can geometrically reach on a
//! board snapshot. Nothing here looks at check: the raw sets are pruned by
//! [`crate::legality`].

mod patterns;
pub mod perft;

use crate::{Board, SquareSet};
use shogi_core::{Move, PieceKind, Player, Square};

pub use patterns::MovePattern;

/// A list of moves.
///
/// Shogi positions can have several hundred legal moves once drops are
/// counted, so the list grows on the heap.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Returns true if the list contains the given move.
    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.moves.contains(m)
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        self.moves.retain(f);
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Returns the squares a piece of `kind` owned by `owner` standing on `from`
/// can reach, ignoring check.
///
/// Steps land on any square not held by a friendly piece. Rays continue
/// until the board edge or the first occupied square, which is included
/// only when it holds an enemy piece.
pub fn destinations(board: &Board, from: Square, owner: Player, kind: PieceKind) -> SquareSet {
    let pattern = MovePattern::of(kind);
    let forward = owner.forward();
    let (file, rank) = (from.file() as i32, from.rank() as i32);
    let mut result = SquareSet::EMPTY;

    for &(df, dr) in pattern.steps {
        let (f, r) = (file + df, rank + dr * forward);
        if !Board::is_in_bounds(f, r) {
            continue;
        }
        if matches!(board.get(f, r), Some(p) if p.owner == owner) {
            continue;
        }
        if let Some(sq) = Square::from_coords(f, r) {
            result.insert(sq);
        }
    }

    for &(df, dr) in pattern.slides {
        let (mut f, mut r) = (file + df, rank + dr * forward);
        while let Some(sq) = Square::from_coords(f, r) {
            if let Some(p) = board.piece_at(sq) {
                if p.owner != owner {
                    result.insert(sq);
                }
                break;
            }
            result.insert(sq);
            f += df;
            r += dr * forward;
        }
    }

    result
}

/// Returns the raw destinations of whatever piece stands on `from`.
///
/// An empty square yields an empty set.
pub fn piece_destinations(board: &Board, from: Square) -> SquareSet {
    match board.piece_at(from) {
        Some(p) => destinations(board, from, p.owner, p.kind),
        None => SquareSet::EMPTY,
    }
}

/// Returns true if a piece of `kind` owned by `owner` on `sq` could ever
/// move again, i.e. at least one of its directions stays on the board.
///
/// A pawn or lance on the far rank and a knight on either of the last two
/// ranks are the pieces that fail this test.
pub fn can_ever_move(kind: PieceKind, owner: Player, sq: Square) -> bool {
    let forward = owner.forward();
    MovePattern::of(kind)
        .first_steps()
        .any(|(df, dr)| sq.offset(df, dr * forward).is_some())
}
