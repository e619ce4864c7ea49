//! Knight pseudo-legal move generation: a single leap along each of the eight L-shapes.

use super::super::geometry::KNIGHT_DIRS;
use super::super::state::Position;
use super::super::types::moves::{Move, MoveList};
use super::super::types::piece::{Color, Piece};
use super::super::types::square::Square;

impl Position {
    pub(super) fn generate_knight_moves(&self, from: Square, color: Color, list: &mut MoveList) {
        for &delta in &KNIGHT_DIRS {
            let to = from.offset(delta);
            if !to.is_on_board() {
                continue;
            }
            match self.pieces[to.index()] {
                Some(Piece::Empty) => list.push(Move::quiet(from, to)),
                Some(occupant) if occupant.color() == Some(color.opponent()) => {
                    list.push(Move::capture(from, to, occupant))
                }
                _ => {}
            }
        }
    }
}
