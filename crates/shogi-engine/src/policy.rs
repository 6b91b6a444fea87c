//! The seam between the turn state machine and automated players.

use crate::Position;
use shogi_core::Move;

/// Chooses a move for the side to move.
///
/// `legal` is never empty when the game asks; returning `None` means the
/// policy declines to move.
pub trait MovePolicy {
    fn choose_move(&mut self, position: &Position, legal: &[Move]) -> Option<Move>;
}

impl<F> MovePolicy for F
where
    F: FnMut(&Position, &[Move]) -> Option<Move>,
{
    fn choose_move(&mut self, position: &Position, legal: &[Move]) -> Option<Move> {
        self(position, legal)
    }
}

/// Plays the first legal move. Deterministic, useful in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMove;

impl MovePolicy for FirstMove {
    fn choose_move(&mut self, _position: &Position, legal: &[Move]) -> Option<Move> {
        legal.first().copied()
    }
}
