//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - chess piece kinds and colors
//! - `Square` - (row, col) board coordinate with rank/file conversion
//! - `Board` - the 8x8 grid of square contents
//! - `Move` and `MoveList` - move representation

mod grid;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use grid::Board;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::{Square, COLS_TO_FILES, ROWS_TO_RANKS};

// Re-export internal utilities
pub(crate) use square::{file_to_col, rank_to_row};
