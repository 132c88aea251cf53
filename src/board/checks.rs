//! Check and pin detection, walked outward from a king square.
//!
//! Detection is a pure function of a board snapshot and a king square. The
//! king square may be hypothetical: the king-safety probe passes a candidate
//! destination while the real king still stands on its old square, so the
//! walk treats the mover's own king as transparent.

use super::attack_tables::{Offset, KNIGHT_TARGETS, QUEEN_DIRECTIONS};
use super::{Board, Color, Piece, Position, Square};

/// A friendly piece that may only move along `direction` (or its reverse).
///
/// `direction` is the unit step from the king outward toward the pinner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    pub direction: (isize, isize),
}

/// An enemy piece giving check.
///
/// For sliders, pawns and kings `direction` is the unit step from the king
/// toward the checker. For a knight it is the knight offset itself and must
/// not be walked as a ray.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Check {
    pub square: Square,
    pub direction: (isize, isize),
}

impl Check {
    /// True when `direction` is a unit ray step (not a knight jump).
    #[inline]
    #[must_use]
    pub fn is_ray(&self) -> bool {
        let (dr, dc) = self.direction;
        dr.abs() <= 1 && dc.abs() <= 1
    }

    /// Squares a non-king piece may move to in order to resolve this check:
    /// everything from the king toward the checker, the checker included.
    #[must_use]
    pub fn block_squares(&self, king: Square) -> Vec<Square> {
        if !self.is_ray() {
            return vec![self.square];
        }
        let (dr, dc) = self.direction;
        let mut squares = Vec::with_capacity(7);
        let mut sq = king;
        while let Some(next) = sq.offset(dr, dc) {
            squares.push(next);
            if next == self.square {
                break;
            }
            sq = next;
        }
        squares
    }
}

/// Result of one detection pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckInfo {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

/// Pin directions indexed by square, built once per legal-move query.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PinTable([[Option<Offset>; 8]; 8]);

impl PinTable {
    pub(crate) fn new(pins: &[Pin]) -> Self {
        let mut table = [[None; 8]; 8];
        for pin in pins {
            table[pin.square.0][pin.square.1] = Some(pin.direction);
        }
        PinTable(table)
    }

    #[inline]
    pub(crate) fn direction(&self, sq: Square) -> Option<Offset> {
        self.0[sq.0][sq.1]
    }

    #[inline]
    pub(crate) fn is_pinned(&self, sq: Square) -> bool {
        self.direction(sq).is_some()
    }

    /// Whether the piece on `sq` may step in `dir` without leaving its pin axis.
    #[inline]
    pub(crate) fn allows(&self, sq: Square, dir: Offset) -> bool {
        match self.direction(sq) {
            None => true,
            Some((pr, pc)) => dir == (pr, pc) || dir == (-pr, -pc),
        }
    }
}

/// Whether an enemy `piece` found `distance` steps along `dir` from the king
/// attacks back along that ray.
fn attacks_along_ray(piece: Piece, enemy: Color, (dr, dc): Offset, distance: usize) -> bool {
    let diagonal = dr != 0 && dc != 0;
    match piece {
        Piece::Bishop | Piece::Rook | Piece::Queen => {
            if diagonal {
                piece.attacks_diagonally()
            } else {
                piece.attacks_straight()
            }
        }
        // an enemy pawn sits one row behind its own capture direction
        Piece::Pawn => distance == 1 && diagonal && dr == -enemy.pawn_direction(),
        Piece::King => distance == 1,
        Piece::Knight => false,
    }
}

/// Find every check against, and every pin toward, a `color` king on `king`.
#[must_use]
pub fn detect_checks_and_pins(board: &Board, king: Square, color: Color) -> CheckInfo {
    let enemy = color.opponent();
    let mut info = CheckInfo::default();

    for &dir in &QUEEN_DIRECTIONS {
        let mut possible_pin: Option<Square> = None;
        let mut sq = king;
        for distance in 1..8 {
            let Some(next) = sq.offset(dir.0, dir.1) else {
                break;
            };
            sq = next;
            match board.piece_at(sq) {
                None => {}
                Some((c, Piece::King)) if c == color => {}
                Some((c, _)) if c == color => {
                    if possible_pin.is_some() {
                        break;
                    }
                    possible_pin = Some(sq);
                }
                Some((_, piece)) => {
                    if attacks_along_ray(piece, enemy, dir, distance) {
                        match possible_pin {
                            None => info.checks.push(Check {
                                square: sq,
                                direction: dir,
                            }),
                            Some(pinned) => info.pins.push(Pin {
                                square: pinned,
                                direction: dir,
                            }),
                        }
                    }
                    break;
                }
            }
        }
    }

    for &(sq, offset) in &KNIGHT_TARGETS[king.as_index()] {
        if board.piece_at(sq) == Some((enemy, Piece::Knight)) {
            info.checks.push(Check {
                square: sq,
                direction: offset,
            });
        }
    }

    info.in_check = !info.checks.is_empty();
    info
}

impl Position {
    /// Run check/pin detection for the side to move from its cached king square.
    #[must_use]
    pub fn detect_checks_and_pins(&self) -> CheckInfo {
        let color = self.current_color();
        detect_checks_and_pins(&self.board, self.king_square(color), color)
    }

    /// Whether the side to move is in check right now.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.is_king_attacked(self.current_color())
    }

    pub(crate) fn is_king_attacked(&self, color: Color) -> bool {
        detect_checks_and_pins(&self.board, self.king_square(color), color).in_check
    }

    /// Whether the `color` king could stand on `to` without being in check.
    ///
    /// The board is not touched; only the king square handed to detection
    /// changes.
    pub(crate) fn king_safe_on(&self, to: Square, color: Color) -> bool {
        !detect_checks_and_pins(&self.board, to, color).in_check
    }
}
