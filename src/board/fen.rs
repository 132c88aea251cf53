use super::error::{FenError, MoveError};
use super::{file_to_col, rank_to_row, Board, Color, Move, Piece, Position, Square};

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// Only piece placement and side to move are read. Castling, en passant
    /// and the clocks are accepted but ignored since the engine has no such
    /// rules. Returns an error if the FEN string is invalid.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // FEN lists rank 8 first, which is row 0
        let mut ranks = 0;
        for (row, rank_str) in parts[0].split('/').enumerate() {
            ranks += 1;
            if row >= 8 {
                return Err(FenError::InvalidRank { rank: row });
            }
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let color = if c.is_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank: row,
                        files: col + 1,
                    });
                }
                board.put(Square(row, col), color, piece);
                col += 1;
            }
            if col > 8 {
                return Err(FenError::TooManyFiles {
                    rank: row,
                    files: col,
                });
            }
            if col < 8 {
                return Err(FenError::TooFewFiles {
                    rank: row,
                    files: col,
                });
            }
        }
        if ranks < 8 {
            return Err(FenError::TooFewRanks { found: ranks });
        }

        let side = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        Ok(Position::from_board(board, side)?)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for row in 0..8 {
            let mut text = String::new();
            let mut empty = 0;
            for col in 0..8 {
                if let Some((color, piece)) = self.board.piece_at(Square(row, col)) {
                    if empty > 0 {
                        text.push_str(&empty.to_string());
                        empty = 0;
                    }
                    text.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        format!("{} {} - - 0 1", rows.join("/"), active)
    }

    /// Parse a move in rank-file notation (e.g., "e2e4").
    ///
    /// Returns the matching legal move if found, or an error describing why parsing failed.
    ///
    /// # Example
    /// ```
    /// use chess_core::board::Position;
    ///
    /// let mut position = Position::new();
    /// let mv = position.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, text: &str) -> Result<Move, MoveError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != 4 {
            return Err(MoveError::InvalidLength { len: chars.len() });
        }

        let invalid = || MoveError::InvalidSquare {
            notation: text.to_string(),
        };
        let start = Square(
            rank_to_row(chars[1]).ok_or_else(invalid)?,
            file_to_col(chars[0]).ok_or_else(invalid)?,
        );
        let end = Square(
            rank_to_row(chars[3]).ok_or_else(invalid)?,
            file_to_col(chars[2]).ok_or_else(invalid)?,
        );

        let candidate = Move::new(start, end, &self.board);
        self.legal_moves()
            .find(&candidate)
            .ok_or_else(|| MoveError::IllegalMove {
                notation: text.to_string(),
            })
    }
}
