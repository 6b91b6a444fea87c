//! Integer-coded board layouts.
//!
//! A layout cell code packs the owner and base kind into one small integer:
//! `code % 10` is the [`PieceKind::layout_code`] (0 = empty) and `code / 10`
//! is the owner index.

use crate::{PieceKind, Player, Square};
use thiserror::Error;

/// Errors that can occur when decoding a layout table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid piece code {code} at file {file}, rank {rank}")]
    InvalidKind { file: u8, rank: u8, code: u8 },

    #[error("invalid owner in code {code} at file {file}, rank {rank}")]
    InvalidOwner { file: u8, rank: u8, code: u8 },
}

/// The standard starting layout, indexed `[file][rank]`.
pub const INITIAL_CODES: [[u8; 9]; 9] = [
    [4, 0, 1, 0, 0, 0, 11, 0, 14],
    [5, 2, 1, 0, 0, 0, 11, 13, 15],
    [6, 0, 1, 0, 0, 0, 11, 0, 16],
    [7, 0, 1, 0, 0, 0, 11, 0, 17],
    [8, 0, 1, 0, 0, 0, 11, 0, 18],
    [7, 0, 1, 0, 0, 0, 11, 0, 17],
    [6, 0, 1, 0, 0, 0, 11, 0, 16],
    [5, 3, 1, 0, 0, 0, 11, 12, 15],
    [4, 0, 1, 0, 0, 0, 11, 0, 14],
];

/// A placement of owned pieces on the board, one optional entry per square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    cells: [Option<(Player, PieceKind)>; Square::COUNT],
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoardLayout {
    /// Creates a layout with no pieces.
    pub const fn empty() -> Self {
        BoardLayout {
            cells: [None; Square::COUNT],
        }
    }

    /// Returns the standard starting layout.
    pub fn initial() -> Self {
        match Self::from_codes(&INITIAL_CODES) {
            Ok(layout) => layout,
            Err(e) => unreachable!("INITIAL_CODES is valid: {}", e),
        }
    }

    /// Decodes a `[file][rank]` table of layout codes.
    pub fn from_codes(codes: &[[u8; 9]; 9]) -> Result<Self, LayoutError> {
        let mut layout = Self::empty();
        for (file, column) in codes.iter().enumerate() {
            for (rank, &code) in column.iter().enumerate() {
                let (file, rank) = (file as u8, rank as u8);
                let kind_code = code % 10;
                if kind_code == 0 {
                    continue;
                }
                let kind = PieceKind::from_layout_code(kind_code)
                    .ok_or(LayoutError::InvalidKind { file, rank, code })?;
                let owner = Player::from_index((code / 10) as usize)
                    .ok_or(LayoutError::InvalidOwner { file, rank, code })?;
                layout.set(Square::new(file, rank), Some((owner, kind)));
            }
        }
        Ok(layout)
    }

    /// Encodes this layout back into a `[file][rank]` code table.
    ///
    /// Promoted pieces are written as their base kind.
    pub fn to_codes(&self) -> [[u8; 9]; 9] {
        let mut codes = [[0u8; 9]; 9];
        for sq in Square::all() {
            if let Some((owner, kind)) = self.get(sq) {
                let kind_code = kind.unpromoted().layout_code().unwrap_or(0);
                codes[sq.file() as usize][sq.rank() as usize] =
                    owner.index() as u8 * 10 + kind_code;
            }
        }
        codes
    }

    /// Returns the owner and kind at the given square.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<(Player, PieceKind)> {
        self.cells[sq.index() as usize]
    }

    /// Sets or clears the given square.
    #[inline]
    pub fn set(&mut self, sq: Square, cell: Option<(Player, PieceKind)>) {
        self.cells[sq.index() as usize] = cell;
    }

    /// Iterates over occupied squares in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Player, PieceKind)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|(owner, kind)| (sq, owner, kind)))
    }
}
