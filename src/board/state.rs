use std::fmt;

use super::checks::{Check, Pin};
use super::error::PositionError;
use super::{Board, Color, Move, Piece, Square, COLS_TO_FILES, ROWS_TO_RANKS};

/// A game in progress: board, side to move, cached king squares, the
/// check/pin state of the last legal-move query, and the move log.
///
/// Not synchronized. Every mutating call takes `&mut self`; share one across
/// threads through [`crate::sync::SharedPosition`].
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) white_to_move: bool,
    pub(crate) king_squares: [Square; 2],
    pub(crate) in_check: bool,
    pub(crate) pins: Vec<Pin>,
    pub(crate) checks: Vec<Check>,
    pub(crate) move_log: Vec<Move>,
}

impl Position {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Position {
            board: Board::starting(),
            white_to_move: true,
            king_squares: [Square(7, 4), Square(0, 4)],
            in_check: false,
            pins: Vec::new(),
            checks: Vec::new(),
            move_log: Vec::new(),
        }
    }

    /// Wrap an arbitrary board, checking that each side has exactly one king.
    pub fn from_board(board: Board, side_to_move: Color) -> Result<Self, PositionError> {
        let mut king_squares = [Square(0, 0); 2];
        for color in Color::BOTH {
            let kings = board.kings(color);
            match kings.as_slice() {
                [king] => king_squares[color.index()] = *king,
                _ => {
                    return Err(PositionError::KingCount {
                        color,
                        found: kings.len(),
                    })
                }
            }
        }

        Ok(Position {
            board,
            white_to_move: side_to_move == Color::White,
            king_squares,
            in_check: false,
            pins: Vec::new(),
            checks: Vec::new(),
            move_log: Vec::new(),
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board.piece_at(sq)
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.current_color()
    }

    pub(crate) fn current_color(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Cached square of the `color` king.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// In-check flag from the most recent legal-move query.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    /// Pins found by the most recent legal-move query.
    #[must_use]
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// Checks found by the most recent legal-move query.
    #[must_use]
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Moves applied so far, oldest first.
    #[must_use]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.move_log.last().copied()
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", ROWS_TO_RANKS[row])?;
            for col in 0..8 {
                let c = match self.board.piece_at(Square(row, col)) {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in COLS_TO_FILES {
            write!(f, " {file}")?;
        }
        writeln!(f)?;
        write!(f, "{} to move", self.current_color())
    }
}
