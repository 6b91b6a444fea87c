//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.

use crate::legality::legal_moves;
use crate::rules::RuleConfig;
use crate::Position;

/// Counts the number of leaf nodes at the given depth.
pub fn perft(position: &Position, depth: u32, rules: &RuleConfig) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(position, position.side_to_move, rules);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .as_slice()
        .iter()
        .filter_map(|m| position.make_move(*m).ok())
        .map(|next| perft(&next, depth - 1, rules))
        .sum()
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(position: &Position, depth: u32, rules: &RuleConfig) -> Vec<(String, u64)> {
    let moves = legal_moves(position, position.side_to_move, rules);
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        let Ok(next) = position.make_move(*m) else {
            continue;
        };
        let nodes = if depth > 1 {
            perft(&next, depth - 1, rules)
        } else {
            1
        };
        results.push((m.to_usi(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
