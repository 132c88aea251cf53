use super::super::checks::PinTable;
use super::super::{MoveList, Position, Square};

impl Position {
    /// Pushes and diagonal captures. No en passant and no promotion; a pawn
    /// on the far rank has nowhere to go.
    pub(crate) fn generate_pawn_moves(&self, from: Square, pins: &PinTable, moves: &mut MoveList) {
        let color = self.current_color();
        let dir = color.pawn_direction();

        if pins.allows(from, (dir, 0)) {
            if let Some(one) = from.offset(dir, 0) {
                if self.board.is_empty(one) {
                    moves.push(self.create_move(from, one));
                    if from.row() == color.pawn_start_row() {
                        if let Some(two) = one.offset(dir, 0) {
                            if self.board.is_empty(two) {
                                moves.push(self.create_move(from, two));
                            }
                        }
                    }
                }
            }
        }

        for side in [-1, 1] {
            if !pins.allows(from, (dir, side)) {
                continue;
            }
            if let Some(to) = from.offset(dir, side) {
                if self.board.color_on(to) == Some(color.opponent()) {
                    moves.push(self.create_move(from, to));
                }
            }
        }
    }
}
