//! Shogi rules engine.
//!
//! This crate provides:
//! - [`Board`], [`Hand`] and [`Position`] - pieces on the grid and in hand
//! - [`SquareSet`] - 81-bit square sets for destination queries
//! - Move generation, check detection and legality filtering
//!   (no self-check, nifu, uchifuzume)
//! - [`promotion`] - optional and mandatory promotion resolution
//! - [`Game`] - the turn state machine with move-limit draws
//! - [`RuleConfig`] - tunable rules loadable from TOML
//!
//! # Architecture
//!
//! Every rules query is a pure function of a board snapshot. Checking a
//! candidate move clones the board, applies the move and asks whether the
//! mover's King is attacked; attack sets are raw geometry, so the search
//! never recurses more than one level.
//!
//! # Example
//!
//! ```
//! use shogi_engine::{Game, PieceRef};
//! use shogi_core::{Move, Square};
//!
//! let mut game = Game::new();
//! println!("Legal moves from the start: {}", game.legal_moves().len());
//!
//! // Select the pawn in front of the bishop and advance it.
//! let pawn = PieceRef::Board(Square::new(2, 2));
//! let destinations = game.select(pawn).unwrap();
//! assert!(destinations.contains(Square::new(2, 3)));
//! game.move_selected(Square::new(2, 3)).unwrap();
//!
//! // Or play a whole move at once.
//! game.play(Move::from_usi("3c3d").unwrap()).unwrap();
//! println!("{}", game.to_sfen());
//! ```

mod board;
pub mod check;
mod game;
pub mod legality;
pub mod movegen;
pub mod policy;
mod position;
pub mod promotion;
pub mod rules;
mod square_set;

pub use board::{Board, Hand, Location, Piece, PieceId};
pub use game::{CommandError, Game, MoveOutcome, Phase};
pub use movegen::{can_ever_move, destinations, piece_destinations, MoveList};
pub use policy::MovePolicy;
pub use position::{PieceRef, Position, PositionError};
pub use rules::{ConfigError, DrawReason, GameResult, RuleConfig};
pub use square_set::SquareSet;
