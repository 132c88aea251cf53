//! Move types and move list.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::grid::Board;
use super::piece::{Color, Piece};
use super::square::Square;

/// A move from one square to another.
///
/// Records the piece found on the start square and the piece found on the
/// end square when the move was created. Equality and hashing only look at
/// the coordinates (see [`Move::id`]), so a move built from two bare
/// squares compares equal to the generated move between the same squares.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    start: Square,
    end: Square,
    piece_moved: Option<(Color, Piece)>,
    piece_captured: Option<(Color, Piece)>,
}

impl Move {
    /// Create a move between two squares, reading the moved and captured
    /// pieces from `board`.
    ///
    /// # Panics
    /// Panics if either square is off the board. Build squares with
    /// [`Square::new`] or `Square::try_from` when the coordinates are untrusted.
    #[inline]
    #[must_use]
    pub fn new(start: Square, end: Square, board: &Board) -> Self {
        Move {
            start,
            end,
            piece_moved: board.piece_at(start),
            piece_captured: board.piece_at(end),
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn start(self) -> Square {
        self.start
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn end(self) -> Square {
        self.end
    }

    #[inline]
    #[must_use]
    pub const fn piece_moved(self) -> Option<(Color, Piece)> {
        self.piece_moved
    }

    #[inline]
    #[must_use]
    pub const fn piece_captured(self) -> Option<(Color, Piece)> {
        self.piece_captured
    }

    /// Returns true if this move captures a piece
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.piece_captured.is_some()
    }

    /// Returns true if the moved piece is a king
    #[inline]
    #[must_use]
    pub fn is_king_move(self) -> bool {
        matches!(self.piece_moved, Some((_, Piece::King)))
    }

    /// Identity key: `start_row*1000 + start_col*100 + end_row*10 + end_col`.
    ///
    /// Unique for on-board squares, where it never exceeds 7777.
    /// [`Move::new`] panics on an off-board square before a key can be
    /// formed from it.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u16 {
        (self.start.0 * 1000 + self.start.1 * 100 + self.end.0 * 10 + self.end.1) as u16
    }

    /// Rank-file notation of the move, e.g. "e2e4".
    #[must_use]
    pub fn notation(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.start, self.end)?;
        if let Some((color, piece)) = self.piece_moved {
            write!(f, " {}", piece.to_fen_char(color))?;
        }
        if let Some((color, piece)) = self.piece_captured {
            write!(f, " x{}", piece.to_fen_char(color))?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}

/// Initial capacity of a `MoveList`. Ordinary positions stay below it;
/// composed positions with many queens grow past it.
pub(crate) const MAX_MOVES: usize = 256;

/// List of generated moves.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(MAX_MOVES),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Keep only the moves matching `keep`, preserving order.
    pub(crate) fn retain(&mut self, keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(keep);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Membership by move identity (coordinates only).
    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// The stored move equal to `mv`, carrying the generator's piece data.
    #[must_use]
    pub fn find(&self, mv: &Move) -> Option<Move> {
        self.iter().find(|m| *m == mv).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter(std::vec::IntoIter<Move>);

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter(self.moves.into_iter())
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}
