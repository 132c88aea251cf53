use super::super::attack_tables::{Offset, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::checks::PinTable;
use super::super::{MoveList, Position, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> &'static [Offset] {
        match self {
            SliderType::Bishop => &BISHOP_DIRECTIONS,
            SliderType::Rook => &ROOK_DIRECTIONS,
            SliderType::Queen => &QUEEN_DIRECTIONS,
        }
    }
}

impl Position {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        slider: SliderType,
        pins: &PinTable,
        moves: &mut MoveList,
    ) {
        let color = self.current_color();

        for &(dr, dc) in slider.directions() {
            if !pins.allows(from, (dr, dc)) {
                continue;
            }
            let mut sq = from;
            while let Some(to) = sq.offset(dr, dc) {
                match self.board.color_on(to) {
                    None => moves.push(self.create_move(from, to)),
                    Some(owner) if owner != color => {
                        moves.push(self.create_move(from, to));
                        break;
                    }
                    Some(_) => break,
                }
                sq = to;
            }
        }
    }
}
