use super::error::MoveError;
use super::{Move, Piece, Position};

impl Position {
    /// Apply `m` without checking legality.
    ///
    /// Callers must only pass moves drawn from the latest [`Position::legal_moves`]
    /// result; see [`Position::apply`] for the checked form.
    pub fn make_move(&mut self, m: Move) {
        self.board.clear(m.start());
        self.board.set(m.end(), m.piece_moved());
        self.move_log.push(m);
        self.white_to_move = !self.white_to_move;

        if let Some((color, Piece::King)) = m.piece_moved() {
            self.king_squares[color.index()] = m.end();
        }

        #[cfg(feature = "logging")]
        log::debug!("make {} (log depth {})", m, self.move_log.len());
    }

    /// Take back the most recent move. Does nothing when no move was made.
    pub fn undo_move(&mut self) {
        let Some(m) = self.move_log.pop() else {
            return;
        };

        self.board.set(m.start(), m.piece_moved());
        self.board.set(m.end(), m.piece_captured());
        self.white_to_move = !self.white_to_move;

        if let Some((color, Piece::King)) = m.piece_moved() {
            self.king_squares[color.index()] = m.start();
        }

        #[cfg(feature = "logging")]
        log::debug!("undo {} (log depth {})", m, self.move_log.len());
    }

    /// Apply `m` if it is in the current legal set.
    ///
    /// The move is matched by coordinates, so a move built from two clicked
    /// squares works; the generated move (with its piece data) is what gets
    /// applied.
    pub fn apply(&mut self, m: Move) -> Result<(), MoveError> {
        let legal = self.legal_moves();
        match legal.find(&m) {
            Some(found) => {
                self.make_move(found);
                Ok(())
            }
            None => {
                #[cfg(feature = "logging")]
                log::warn!("rejected illegal move {m}");
                Err(MoveError::IllegalMove {
                    notation: m.notation(),
                })
            }
        }
    }
}
