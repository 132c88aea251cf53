//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move generation
//! - `pins.rs` - Pinned pieces and their allowed moves
//! - `checks.rs` - Single check, double check, mate and stalemate
//! - `make_unmake.rs` - Make/undo move correctness
//! - `edge_cases.rs` - Board edges and unusual positions
//! - `perft.rs` - Move tree counts
//! - `proptest.rs` - Property-based tests

mod checks;
mod proptest;

use crate::board::{MoveList, Position, Square};

/// Sorted rank-file strings of `moves`.
pub(super) fn notations(moves: &MoveList) -> Vec<String> {
    let mut list: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
    list.sort();
    list
}

/// Sorted rank-file strings of the legal moves starting on `from`.
pub(super) fn moves_from(position: &mut Position, from: Square) -> Vec<String> {
    let mut list: Vec<String> = position
        .legal_moves()
        .iter()
        .filter(|m| m.start() == from)
        .map(|m| m.to_string())
        .collect();
    list.sort();
    list
}
