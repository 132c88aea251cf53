//! Shared access to one position from several threads.
//!
//! `Position` has no internal locking. `SharedPosition` serializes every
//! call behind a single mutex so one query or mutation completes fully
//! before the next begins.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{GameStatus, Move, MoveError, MoveList, Position};

/// A thread-safe handle to a `Position`.
#[derive(Clone, Debug, Default)]
pub struct SharedPosition(Arc<Mutex<Position>>);

impl SharedPosition {
    /// Share the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Position::new())
    }

    #[must_use]
    pub fn from_position(position: Position) -> Self {
        SharedPosition(Arc::new(Mutex::new(position)))
    }

    pub fn legal_moves(&self) -> MoveList {
        self.0.lock().legal_moves()
    }

    /// Apply a move if it is legal; see [`Position::apply`].
    pub fn apply(&self, mv: Move) -> Result<(), MoveError> {
        self.0.lock().apply(mv)
    }

    pub fn undo(&self) {
        self.0.lock().undo_move();
    }

    pub fn status(&self) -> GameStatus {
        self.0.lock().status()
    }

    /// Run `f` with exclusive access to the position.
    pub fn with<R>(&self, f: impl FnOnce(&mut Position) -> R) -> R {
        f(&mut *self.0.lock())
    }

    /// A copy of the current position.
    #[must_use]
    pub fn snapshot(&self) -> Position {
        self.0.lock().clone()
    }
}

impl From<Position> for SharedPosition {
    fn from(position: Position) -> Self {
        SharedPosition::from_position(position)
    }
}
