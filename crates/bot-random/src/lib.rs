//! Random move bot - plays a uniformly random legal move.
//!
//! This is the simplest possible automated player, useful as a sparring
//! partner and as a template for smarter policies.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use shogi_core::Move;
use shogi_engine::{MovePolicy, Position};

/// Picks uniformly among the legal moves.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    /// Creates a policy seeded from the operating system.
    pub fn new() -> Self {
        RandomPolicy {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible policy.
    pub fn seeded(seed: u64) -> Self {
        RandomPolicy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePolicy for RandomPolicy {
    fn choose_move(&mut self, _position: &Position, legal: &[Move]) -> Option<Move> {
        legal.choose(&mut self.rng).copied()
    }
}
