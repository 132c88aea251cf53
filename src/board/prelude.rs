//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_core::board::prelude::*;
//!
//! let mut position = Position::new();
//! assert_eq!(position.status(), GameStatus::Ongoing);
//! ```

pub use super::{
    Board, Color, FenError, GameStatus, Move, MoveError, MoveList, Piece, Position,
    PositionBuilder, Square, SquareError,
};
