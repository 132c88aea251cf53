mod kings;
mod knights;
mod pawns;
mod sliders;

use super::checks::{detect_checks_and_pins, PinTable};
use super::{Color, Move, MoveList, Piece, Position, Square};

use sliders::SliderType;

/// Outcome of the position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

impl Position {
    fn generate_pseudo_moves(&self, pins: &PinTable, verify_king: bool) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.current_color();

        for (from, owner, piece) in self.board.occupied() {
            if owner == color {
                self.generate_piece_moves(from, piece, pins, verify_king, &mut moves);
            }
        }
        moves
    }

    fn generate_piece_moves(
        &self,
        from: Square,
        piece: Piece,
        pins: &PinTable,
        verify_king: bool,
        moves: &mut MoveList,
    ) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, pins, moves),
            Piece::Knight => self.generate_knight_moves(from, pins, moves),
            Piece::Bishop => self.generate_slider_moves(from, SliderType::Bishop, pins, moves),
            Piece::Rook => self.generate_slider_moves(from, SliderType::Rook, pins, moves),
            Piece::Queen => self.generate_slider_moves(from, SliderType::Queen, pins, moves),
            Piece::King => self.generate_king_moves(from, verify_king, moves),
        }
    }

    #[inline]
    pub(crate) fn create_move(&self, from: Square, to: Square) -> Move {
        Move::new(from, to, &self.board)
    }

    /// Moves obeying each piece's movement rules, ignoring pins and king safety.
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> MoveList {
        self.generate_pseudo_moves(&PinTable::new(&[]), false)
    }

    /// The moves that do not leave the mover's king in check.
    ///
    /// Recomputes checks and pins from scratch and stores them as the
    /// position's last-computed state ([`Position::in_check`],
    /// [`Position::pins`], [`Position::checks`]).
    pub fn legal_moves(&mut self) -> MoveList {
        let color = self.current_color();
        let king = self.king_square(color);
        let info = detect_checks_and_pins(&self.board, king, color);
        let pins = PinTable::new(&info.pins);

        #[cfg(feature = "logging")]
        {
            for check in &info.checks {
                log::trace!("{color} king on {king} checked from {}", check.square);
            }
            for pin in &info.pins {
                log::trace!("{color} piece on {} pinned {:?}", pin.square, pin.direction);
            }
        }

        let moves = match info.checks.as_slice() {
            [] => self.generate_pseudo_moves(&pins, true),
            [check] => {
                let block = check.block_squares(king);
                let mut moves = self.generate_pseudo_moves(&pins, true);
                moves.retain(|m| m.is_king_move() || block.contains(&m.end()));
                moves
            }
            _ => {
                let mut moves = MoveList::new();
                self.generate_king_moves(king, true, &mut moves);
                moves
            }
        };

        #[cfg(feature = "logging")]
        log::debug!(
            "{} legal moves for {color} ({} checks, {} pins)",
            moves.len(),
            info.checks.len(),
            info.pins.len()
        );

        self.in_check = info.in_check;
        self.pins = info.pins;
        self.checks = info.checks;
        moves
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.legal_moves().is_empty() && self.in_check
    }

    pub fn is_stalemate(&mut self) -> bool {
        self.legal_moves().is_empty() && !self.in_check
    }

    pub fn status(&mut self) -> GameStatus {
        if !self.legal_moves().is_empty() {
            GameStatus::Ongoing
        } else if self.in_check {
            GameStatus::Checkmate {
                winner: self.current_color().opponent(),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    /// Count the leaves of the legal-move tree `depth` plies deep.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves.iter() {
            self.make_move(*m);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }

        nodes
    }
}
