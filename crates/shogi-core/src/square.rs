//! Board square representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A square on the 9×9 shogi board, indexed 0-80.
///
/// Coordinates are zero-based `(file, rank)` and squares are indexed
/// `rank * 9 + file`. [`Player::First`](crate::Player::First) starts on
/// ranks 0-2 and moves toward rank 8.
///
/// USI notation counts files from the other side and letters ranks from the
/// far edge: `(0, 0)` is `9i` and `(8, 8)` is `1a`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square(u8);

impl Square {
    /// Number of files on the board.
    pub const FILES: u8 = 9;
    /// Number of ranks on the board.
    pub const RANKS: u8 = 9;
    /// Number of squares on the board.
    pub const COUNT: usize = (Self::FILES as usize) * (Self::RANKS as usize);

    /// Creates a square from file and rank.
    ///
    /// # Panics
    /// Panics in debug builds if either coordinate is out of range.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Self {
        debug_assert!(file < Self::FILES && rank < Self::RANKS);
        Square(rank * Self::FILES + file)
    }

    /// Creates a square from signed coordinates, returning `None` off board.
    #[inline]
    pub const fn from_coords(file: i32, rank: i32) -> Option<Self> {
        if file < 0 || rank < 0 || file >= Self::FILES as i32 || rank >= Self::RANKS as i32 {
            None
        } else {
            Some(Square::new(file as u8, rank as u8))
        }
    }

    /// Creates a square from index (0-80).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::COUNT {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Returns the index (0-80).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the file (0-8).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % Self::FILES
    }

    /// Returns the rank (0-8).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / Self::FILES
    }

    /// Returns the square displaced by `(file_delta, rank_delta)`, if on board.
    #[inline]
    pub const fn offset(self, file_delta: i32, rank_delta: i32) -> Option<Self> {
        Self::from_coords(self.file() as i32 + file_delta, self.rank() as i32 + rank_delta)
    }

    /// Iterates over every square in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT as u8).map(Square)
    }

    /// Parses a square from USI notation (e.g., "7g").
    pub fn from_usi(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file_digit = (bytes[0] as char).to_digit(10)? as u8;
        if file_digit == 0 || file_digit > Self::FILES {
            return None;
        }
        let letter = bytes[1];
        if !(b'a'..b'a' + Self::RANKS).contains(&letter) {
            return None;
        }
        let file = Self::FILES - file_digit;
        let rank = Self::RANKS - 1 - (letter - b'a');
        Some(Square::new(file, rank))
    }

    /// Returns the USI notation for this square.
    pub fn to_usi(self) -> String {
        let digit = Self::FILES - self.file();
        let letter = (b'a' + (Self::RANKS - 1 - self.rank())) as char;
        format!("{}{}", digit, letter)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.file(), self.rank())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_usi())
    }
}
