use super::super::attack_tables::KING_TARGETS;
use super::super::{MoveList, Position, Square};

impl Position {
    /// One-square king steps. With `verify` set, each destination is probed
    /// for safety before it is accepted.
    pub(crate) fn generate_king_moves(&self, from: Square, verify: bool, moves: &mut MoveList) {
        let color = self.current_color();
        for &(to, _) in &KING_TARGETS[from.as_index()] {
            if self.board.color_on(to) == Some(color) {
                continue;
            }
            if verify && !self.king_safe_on(to, color) {
                continue;
            }
            moves.push(self.create_move(from, to));
        }
    }
}
