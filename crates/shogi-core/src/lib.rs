//! Core types for shogi.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`PieceKind`] and [`Player`] for piece representation
//! - [`Square`] for board coordinates
//! - [`Move`] for board moves and drops, with USI notation
//! - [`BoardLayout`] for integer-coded setup tables
//! - SFEN parsing and serialization

mod layout;
mod mov;
mod piece;
mod player;
mod sfen;
mod square;

pub use layout::{BoardLayout, LayoutError, INITIAL_CODES};
pub use mov::Move;
pub use piece::PieceKind;
pub use player::Player;
pub use sfen::{HandCounts, Sfen, SfenError};
pub use square::Square;
