//! The 8x8 grid of square contents.

use std::ops::Index;

use super::piece::{Color, Piece};
use super::square::Square;

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Fixed 8x8 array of square contents. `None` marks an empty square.
///
/// Row 0 holds Black's back rank, row 7 holds White's.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting arrangement.
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for color in Color::BOTH {
            for (col, &piece) in BACK_RANK.iter().enumerate() {
                board.put(Square(color.back_row(), col), color, piece);
                board.put(Square(color.pawn_start_row(), col), color, Piece::Pawn);
            }
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    /// Color of the piece on a square, if any
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, content: Option<(Color, Piece)>) {
        self.squares[sq.0][sq.1] = content;
    }

    #[inline]
    pub(crate) fn put(&mut self, sq: Square, color: Color, piece: Piece) {
        self.set(sq, Some((color, piece)));
    }

    #[inline]
    pub(crate) fn clear(&mut self, sq: Square) {
        self.set(sq, None);
    }

    /// Every occupied square with its content, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        (0..64).filter_map(move |idx| {
            let sq = Square::from_index(idx);
            self.piece_at(sq).map(|(color, piece)| (sq, color, piece))
        })
    }

    /// All squares holding a king of `color`.
    pub(crate) fn kings(&self, color: Color) -> Vec<Square> {
        self.occupied()
            .filter(|&(_, c, p)| c == color && p == Piece::King)
            .map(|(sq, _, _)| sq)
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting()
    }
}

impl Index<Square> for Board {
    type Output = Option<(Color, Piece)>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.0][sq.1]
    }
}
