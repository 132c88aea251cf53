//! Chess position representation and legal move generation.
//!
//! Uses a plain 8x8 grid with pin/check detection walked outward from the
//! king. Castling, en passant and promotion are not part of the rules.
//!
//! # Example
//! ```
//! use chess_core::board::Position;
//!
//! let mut position = Position::new();
//! let moves = position.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod builder;
mod checks;
mod error;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use checks::{detect_checks_and_pins, Check, CheckInfo, Pin};
pub use error::{FenError, MoveError, PositionError, SquareError};
pub use movegen::GameStatus;
pub use state::Position;
pub use types::{
    Board, Color, Move, MoveList, MoveListIntoIter, Piece, Square, COLS_TO_FILES, ROWS_TO_RANKS,
};

pub(crate) use types::{file_to_col, rank_to_row};
