//! Shogi position representation.

use crate::board::{Location, Piece, PieceId};
use crate::check::is_in_check;
use crate::legality;
use crate::rules::RuleConfig;
use crate::{Board, Hand, SquareSet};
use shogi_core::{BoardLayout, HandCounts, LayoutError, Move, PieceKind, Player, Sfen, SfenError, Square};
use thiserror::Error;

/// Errors that can occur when building or updating a position.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error(transparent)]
    Sfen(#[from] SfenError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("{0} has no King on the board")]
    MissingKing(Player),

    #[error("{0} has more than one King on the board")]
    DuplicateKing(Player),

    #[error("{0} is in check but it is not their turn")]
    OpponentInCheck(Player),

    #[error("too many pieces in one position")]
    TooManyPieces,

    #[error("{0} cannot be held in hand")]
    InvalidHandPiece(PieceKind),

    #[error("no piece at {0}")]
    NoPieceAt(Square),

    #[error("{0} is occupied by the mover's own piece")]
    OwnPieceAt(Square),

    #[error("{0} does not hold a {1}")]
    NotInHand(Player, PieceKind),

    #[error("cannot drop onto occupied square {0}")]
    DropOnOccupied(Square),

    #[error("the King on {0} cannot be captured")]
    KingCapture(Square),
}

/// Identifies a piece the way a player points at it: by its square, or by
/// its kind in a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceRef {
    Board(Square),
    Hand(Player, PieceKind),
}

/// A board plus both hands and the player to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// The grid.
    pub board: Board,
    /// Hands, indexed by [`Player::index`].
    pub hands: [Hand; 2],
    /// The player to move.
    pub side_to_move: Player,
    /// Next unused piece id.
    next_id: u16,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    /// Creates a position with an empty board and empty hands.
    ///
    /// Such a position has no Kings; it is only useful as a base for tests
    /// and hypothetical boards.
    pub fn empty() -> Self {
        Position {
            board: Board::empty(),
            hands: [Hand::new(), Hand::new()],
            side_to_move: Player::First,
            next_id: 0,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        match Self::from_layout(&BoardLayout::initial(), Player::First) {
            Ok(position) => position,
            Err(e) => unreachable!("initial layout is valid: {}", e),
        }
    }

    /// Creates a position from a layout, with empty hands.
    ///
    /// The result must pass [`Position::validate`].
    pub fn from_layout(layout: &BoardLayout, side_to_move: Player) -> Result<Self, PositionError> {
        let mut position = Position::empty();
        position.side_to_move = side_to_move;
        for (sq, owner, kind) in layout.occupied() {
            let piece = position.new_piece(owner, kind)?;
            position.board.place(sq, piece);
        }
        position.validate()?;
        Ok(position)
    }

    /// Creates a position from a `[file][rank]` layout code table.
    pub fn from_codes(codes: &[[u8; 9]; 9], side_to_move: Player) -> Result<Self, PositionError> {
        let layout = BoardLayout::from_codes(codes)?;
        Self::from_layout(&layout, side_to_move)
    }

    /// Creates a position from a SFEN string. The move number is ignored.
    pub fn from_sfen(sfen: &str) -> Result<Self, PositionError> {
        let parsed = Sfen::parse(sfen)?;
        let mut position = Self::from_layout(&parsed.layout, parsed.side_to_move)?;
        for player in Player::ALL {
            for (&kind, &count) in &parsed.hands[player.index()] {
                if !kind.is_hand_kind() {
                    return Err(PositionError::InvalidHandPiece(kind));
                }
                for _ in 0..count {
                    let piece = position.new_piece(player, kind)?;
                    position.hands[player.index()].add(piece);
                }
            }
        }
        Ok(position)
    }

    /// Serializes this position as SFEN with the given move number.
    pub fn to_sfen(&self, move_number: u32) -> String {
        let mut layout = BoardLayout::empty();
        for (sq, p) in self.board.pieces() {
            layout.set(sq, Some((p.owner, p.kind)));
        }
        let hands = Player::ALL.map(|player| {
            self.hand(player)
                .contents()
                .into_iter()
                .map(|(kind, count)| (kind, count as u32))
                .collect::<HandCounts>()
        });
        Sfen {
            layout,
            side_to_move: self.side_to_move,
            hands,
            move_number,
        }
        .to_string()
    }

    /// Returns the hand of the given player.
    #[inline]
    pub fn hand(&self, player: Player) -> &Hand {
        &self.hands[player.index()]
    }

    /// Returns the current location of the piece with the given id.
    pub fn locate(&self, id: PieceId) -> Option<Location> {
        if let Some(sq) = self.board.find(id) {
            return Some(Location::OnBoard(sq));
        }
        Player::ALL
            .into_iter()
            .find(|&player| self.hand(player).iter().any(|p| p.id == id))
            .map(Location::InHand)
    }

    /// Returns the legal destinations of the referenced piece.
    ///
    /// A reference to an empty square or a kind not in hand has none.
    pub fn legal_destinations(&self, piece: PieceRef, rules: &RuleConfig) -> SquareSet {
        match piece {
            PieceRef::Board(sq) => legality::legal_board_destinations(&self.board, sq),
            PieceRef::Hand(player, kind) if self.hand(player).contains(kind) => {
                legality::legal_drop_destinations(&self.board, player, kind, rules)
            }
            PieceRef::Hand(..) => SquareSet::EMPTY,
        }
    }

    /// Applies a move without checking legality or switching sides.
    ///
    /// A board move's captor is the moving piece's owner; a drop is taken
    /// from the side to move's hand. Returns the kind the captured piece had
    /// on the board. On `Err` the position is unchanged.
    pub fn apply_move(&mut self, m: Move) -> Result<Option<PieceKind>, PositionError> {
        match m {
            Move::Board { from, to, promote } => {
                let mover = *self
                    .board
                    .piece_at(from)
                    .ok_or(PositionError::NoPieceAt(from))?;
                let captured = match self.board.piece_at(to) {
                    Some(p) if p.owner == mover.owner => return Err(PositionError::OwnPieceAt(to)),
                    Some(p) if p.kind == PieceKind::King => return Err(PositionError::KingCapture(to)),
                    Some(&p) => Some(p),
                    None => None,
                };

                self.board.remove(from);
                let kind = match mover.kind.promoted() {
                    Some(promoted) if promote => promoted,
                    _ => mover.kind,
                };
                self.board.place(to, Piece { kind, ..mover });

                if let Some(p) = captured {
                    self.hands[mover.owner.index()].add(p.captured_by(mover.owner));
                }
                Ok(captured.map(|p| p.kind))
            }
            Move::Drop { kind, to } => {
                let player = self.side_to_move;
                if !self.board.is_empty_at(to) {
                    return Err(PositionError::DropOnOccupied(to));
                }
                let piece = self.hands[player.index()]
                    .take(kind)
                    .ok_or(PositionError::NotInHand(player, kind))?;
                self.board.place(to, piece);
                Ok(None)
            }
        }
    }

    /// Returns the position after the side to move plays `m`.
    pub fn make_move(&self, m: Move) -> Result<Position, PositionError> {
        let mut next = self.clone();
        next.apply_move(m)?;
        next.side_to_move = next.side_to_move.opponent();
        Ok(next)
    }

    /// Places a new piece on the board, for building test positions.
    ///
    /// The result is not validated; see [`Position::validate`].
    pub fn put(&mut self, sq: Square, owner: Player, kind: PieceKind) -> Result<PieceId, PositionError> {
        let piece = self.new_piece(owner, kind)?;
        self.board.place(sq, piece);
        Ok(piece.id)
    }

    /// Adds a new piece of a base kind to a player's hand.
    pub fn put_in_hand(&mut self, player: Player, kind: PieceKind) -> Result<PieceId, PositionError> {
        if !kind.is_hand_kind() {
            return Err(PositionError::InvalidHandPiece(kind));
        }
        let piece = self.new_piece(player, kind)?;
        self.hands[player.index()].add(piece);
        Ok(piece.id)
    }

    /// Checks that the position can be played from: one King each, and the
    /// player who just moved is not left in check.
    ///
    /// A position failing this would let the side to move capture a King.
    pub fn validate(&self) -> Result<(), PositionError> {
        self.validate_kings()?;
        let waiting = self.side_to_move.opponent();
        if is_in_check(&self.board, waiting) {
            return Err(PositionError::OpponentInCheck(waiting));
        }
        Ok(())
    }

    // u16::MAX is never handed out; it stays free for legality probes.
    fn new_piece(&mut self, owner: Player, kind: PieceKind) -> Result<Piece, PositionError> {
        let id = PieceId(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or(PositionError::TooManyPieces)?;
        Ok(Piece::new(id, owner, kind))
    }

    fn validate_kings(&self) -> Result<(), PositionError> {
        for player in Player::ALL {
            let kings = self
                .board
                .pieces_of(player)
                .filter(|(_, p)| p.kind == PieceKind::King)
                .count();
            match kings {
                0 => return Err(PositionError::MissingKing(player)),
                1 => {}
                _ => return Err(PositionError::DuplicateKing(player)),
            }
        }
        Ok(())
    }
}
