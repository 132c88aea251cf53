use once_cell::sync::Lazy;

use super::Square;

/// A (row, col) step.
pub(crate) type Offset = (isize, isize);

pub(crate) const ROOK_DIRECTIONS: [Offset; 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

pub(crate) const BISHOP_DIRECTIONS: [Offset; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonal rays first, then diagonal rays.
pub(crate) const QUEEN_DIRECTIONS: [Offset; 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub(crate) const KNIGHT_OFFSETS: [Offset; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [Offset; 8] = QUEEN_DIRECTIONS;

fn build_table(deltas: &[Offset; 8]) -> Vec<Vec<(Square, Offset)>> {
    (0..64)
        .map(|idx| {
            let from = Square::from_index(idx);
            deltas
                .iter()
                .filter_map(|&(dr, dc)| from.offset(dr, dc).map(|to| (to, (dr, dc))))
                .collect()
        })
        .collect()
}

/// On-board knight destinations per square index, with the offset that reaches them.
pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<(Square, Offset)>>> =
    Lazy::new(|| build_table(&KNIGHT_OFFSETS));

/// On-board king destinations per square index, with the offset that reaches them.
pub(crate) static KING_TARGETS: Lazy<Vec<Vec<(Square, Offset)>>> =
    Lazy::new(|| build_table(&KING_OFFSETS));
