use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::checks::PinTable;
use super::super::{MoveList, Position, Square};

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, pins: &PinTable, moves: &mut MoveList) {
        // no knight jump stays on a pin axis
        if pins.is_pinned(from) {
            return;
        }
        let color = self.current_color();
        for &(to, _) in &KNIGHT_TARGETS[from.as_index()] {
            if self.board.color_on(to) != Some(color) {
                moves.push(self.create_move(from, to));
            }
        }
    }
}
