//! Board grid, piece identities and hands.

use shogi_core::{PieceKind, Player, Square};
use std::collections::BTreeMap;
use std::fmt;

/// Stable identity of a physical piece for the lifetime of a game.
///
/// Pieces are never destroyed: a capture moves the same piece into the
/// captor's hand, keeping its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u16);

/// A piece with its current owner and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub id: PieceId,
    pub owner: Player,
    pub kind: PieceKind,
}

impl Piece {
    /// Creates a piece.
    #[inline]
    pub const fn new(id: PieceId, owner: Player, kind: PieceKind) -> Self {
        Piece { id, owner, kind }
    }

    /// Returns this piece as it enters `captor`'s hand: new owner, base kind.
    #[inline]
    pub const fn captured_by(self, captor: Player) -> Self {
        Piece {
            id: self.id,
            owner: captor,
            kind: self.kind.unpromoted(),
        }
    }
}

/// Where a piece currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    OnBoard(Square),
    InHand(Player),
}

/// The 9×9 grid. At most one piece per cell.
///
/// Cloning produces a fully independent copy; hypothetical boards for check
/// testing are built this way.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; Square::COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board {
            cells: [None; Square::COUNT],
        }
    }

    /// Returns true if the signed coordinates lie on the board.
    #[inline]
    pub const fn is_in_bounds(file: i32, rank: i32) -> bool {
        Square::from_coords(file, rank).is_some()
    }

    /// Returns the piece at signed coordinates. Off-board coordinates are empty.
    #[inline]
    pub fn get(&self, file: i32, rank: i32) -> Option<&Piece> {
        Square::from_coords(file, rank).and_then(|sq| self.piece_at(sq))
    }

    /// Returns the piece on the given square.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.cells[sq.index() as usize].as_ref()
    }

    /// Places a piece, returning whatever previously occupied the square.
    #[inline]
    pub fn place(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.cells[sq.index() as usize].replace(piece)
    }

    /// Removes and returns the piece on the given square.
    #[inline]
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.index() as usize].take()
    }

    /// Returns a mutable reference to the piece on the given square.
    #[inline]
    pub fn piece_at_mut(&mut self, sq: Square) -> Option<&mut Piece> {
        self.cells[sq.index() as usize].as_mut()
    }

    /// Returns true if the square holds no piece.
    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.cells[sq.index() as usize].is_none()
    }

    /// Iterates over occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Iterates over the squares and pieces owned by `player`.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.owner == player)
    }

    /// Iterates over empty squares in index order.
    pub fn empty_squares(&self) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.is_empty_at(sq))
    }

    /// Returns the square of `player`'s King, if it is on the board.
    pub fn king_square(&self, player: Player) -> Option<Square> {
        self.pieces_of(player)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Returns true if `player` has an un-promoted pawn on `file`.
    pub fn has_pawn_on_file(&self, player: Player, file: u8) -> bool {
        (0..Square::RANKS).any(|rank| {
            matches!(
                self.piece_at(Square::new(file, rank)),
                Some(p) if p.owner == player && p.kind == PieceKind::Pawn
            )
        })
    }

    /// Returns the location of the piece with the given id, if it is on the board.
    pub fn find(&self, id: PieceId) -> Option<Square> {
        self.pieces().find(|(_, p)| p.id == id).map(|(sq, _)| sq)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for rank in (0..Square::RANKS).rev() {
            write!(f, "  ")?;
            for file in 0..Square::FILES {
                match self.piece_at(Square::new(file, rank)) {
                    Some(p) => {
                        let prefix = if p.kind.is_promoted() { '+' } else { ' ' };
                        write!(f, "{}{}", prefix, p.kind.to_sfen_char(p.owner))?;
                    }
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

/// A player's pool of captured pieces available to drop.
///
/// Every piece in a hand has a base (un-promoted) kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    pieces: Vec<Piece>,
}

impl Hand {
    /// Creates an empty hand.
    pub const fn new() -> Self {
        Hand { pieces: Vec::new() }
    }

    /// Adds a piece to the hand.
    pub fn add(&mut self, piece: Piece) {
        debug_assert!(piece.kind.is_hand_kind(), "{} cannot be held in hand", piece.kind);
        self.pieces.push(piece);
    }

    /// Removes and returns one piece of the given kind.
    pub fn take(&mut self, kind: PieceKind) -> Option<Piece> {
        let idx = self.pieces.iter().rposition(|p| p.kind == kind)?;
        Some(self.pieces.remove(idx))
    }

    /// Returns the number of pieces of the given kind.
    pub fn count(&self, kind: PieceKind) -> usize {
        self.pieces.iter().filter(|p| p.kind == kind).count()
    }

    /// Returns true if at least one piece of the given kind is held.
    pub fn contains(&self, kind: PieceKind) -> bool {
        self.pieces.iter().any(|p| p.kind == kind)
    }

    /// Returns the distinct kinds held, in hand order.
    pub fn kinds(&self) -> impl Iterator<Item = PieceKind> + '_ {
        PieceKind::HAND_KINDS
            .into_iter()
            .filter(move |&kind| self.contains(kind))
    }

    /// Returns a kind → count mapping of the hand.
    pub fn contents(&self) -> BTreeMap<PieceKind, usize> {
        let mut map = BTreeMap::new();
        for p in &self.pieces {
            *map.entry(p.kind).or_insert(0) += 1;
        }
        map
    }

    /// Returns the total number of pieces held.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Returns true if the hand is empty.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Iterates over the held pieces.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter()
    }
}
