//! Legal move generation for a chess position.
//!
//! The functions at the crate root are the interface a display shell needs:
//! start a game, ask for the legal moves, apply or undo a move, and print a
//! move in rank-file notation.
//!
//! ```
//! use chess_core::{apply, legal_moves, new_game, notation, undo, Move, Square};
//!
//! let mut game = new_game();
//! let moves = legal_moves(&mut game);
//! assert_eq!(moves.len(), 20);
//!
//! // two clicks: e2 then e4
//! let clicked = Move::new(Square(6, 4), Square(4, 4), game.board());
//! assert!(moves.contains(&clicked));
//! assert_eq!(notation(&clicked), "e2e4");
//! apply(&mut game, clicked).unwrap();
//!
//! undo(&mut game);
//! assert!(game.move_log().is_empty());
//! ```

pub mod board;
pub mod sync;

pub use board::{
    Board, Color, GameStatus, Move, MoveError, MoveList, Piece, Position, PositionBuilder, Square,
};
pub use sync::SharedPosition;

/// Standard starting position, White to move, empty move log.
#[must_use]
pub fn new_game() -> Position {
    Position::new()
}

/// Legal moves for the side to move.
pub fn legal_moves(position: &mut Position) -> MoveList {
    position.legal_moves()
}

/// Apply `mv` if it is legal in `position`.
pub fn apply(position: &mut Position, mv: Move) -> Result<(), MoveError> {
    position.apply(mv)
}

/// Reverse the most recent move. Does nothing if no move was made.
pub fn undo(position: &mut Position) {
    position.undo_move();
}

/// Rank-file notation of a move, e.g. "e2e4".
#[must_use]
pub fn notation(mv: &Move) -> String {
    mv.notation()
}
