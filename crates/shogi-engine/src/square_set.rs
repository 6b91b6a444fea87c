//! Square set representation.
//!
//! A square set is a 128-bit integer where each of the low 81 bits
//! represents a square on the shogi board, so unions and membership tests are
//! single bitwise operations.

use shogi_core::Square;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// A set of board squares.
///
/// Bit `n` is the square with [`Square::index`] `n`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(u128);

impl SquareSet {
    /// Empty set (no squares).
    pub const EMPTY: SquareSet = SquareSet(0);

    /// Every square on the board.
    pub const FULL: SquareSet = SquareSet((1u128 << Square::COUNT) - 1);

    /// Creates a set with a single square.
    #[inline]
    pub const fn from_square(sq: Square) -> Self {
        SquareSet(1u128 << sq.index())
    }

    /// Returns true if the set is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given square is in the set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u128 << sq.index())) != 0
    }

    /// Adds the given square.
    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u128 << sq.index();
    }

    /// Removes the given square.
    #[inline]
    pub fn remove(&mut self, sq: Square) {
        self.0 &= !(1u128 << sq.index());
    }

    /// Pops and returns the lowest-indexed square.
    #[inline]
    pub fn pop_first(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Square::from_index(idx)
    }

    /// Keeps only the squares for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(Square) -> bool,
    {
        for sq in *self {
            if !f(sq) {
                self.remove(sq);
            }
        }
    }
}

impl BitAnd for SquareSet {
    type Output = SquareSet;

    #[inline]
    fn bitand(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 & rhs.0)
    }
}

impl BitAndAssign for SquareSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: SquareSet) {
        self.0 &= rhs.0;
    }
}

impl BitOr for SquareSet {
    type Output = SquareSet;

    #[inline]
    fn bitor(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: SquareSet) {
        self.0 |= rhs.0;
    }
}

impl Not for SquareSet {
    type Output = SquareSet;

    #[inline]
    fn not(self) -> SquareSet {
        SquareSet(!self.0 & Self::FULL.0)
    }
}

/// Iterator over the squares of a set, in index order.
pub struct SquareSetIter(SquareSet);

impl Iterator for SquareSetIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        self.0.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count() as usize;
        (n, Some(n))
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> Self::IntoIter {
        SquareSetIter(self)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_contains_remove() {
        let mut set = SquareSet::EMPTY;
        let sq = Square::new(4, 4);
        assert!(!set.contains(sq));
        set.insert(sq);
        assert!(set.contains(sq));
        assert_eq!(set.count(), 1);
        set.insert(sq);
        assert_eq!(set.count(), 1);
        set.remove(sq);
        assert!(set.is_empty());
    }

    #[test]
    fn full_covers_board() {
        assert_eq!(SquareSet::FULL.count(), 81);
        assert!(SquareSet::FULL.contains(Square::new(8, 8)));
        assert!((!SquareSet::FULL).is_empty());
    }

    #[test]
    fn union_counts_once() {
        let a: SquareSet = [Square::new(0, 0), Square::new(1, 1)].into_iter().collect();
        let b: SquareSet = [Square::new(1, 1), Square::new(2, 2)].into_iter().collect();
        assert_eq!((a | b).count(), 3);
        assert_eq!((a & b).count(), 1);
    }

    #[test]
    fn iterates_in_index_order() {
        let set: SquareSet = [Square::new(8, 8), Square::new(0, 0), Square::new(3, 1)]
            .into_iter()
            .collect();
        let squares: Vec<Square> = set.into_iter().collect();
        assert_eq!(
            squares,
            vec![Square::new(0, 0), Square::new(3, 1), Square::new(8, 8)]
        );
    }

    #[test]
    fn retain_filters() {
        let mut set = SquareSet::FULL;
        set.retain(|sq| sq.rank() == 0);
        assert_eq!(set.count(), 9);
    }
}
