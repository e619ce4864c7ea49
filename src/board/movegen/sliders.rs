//! Sliding-piece pseudo-legal move generation: bishops, rooks, queens walk their direction
//! rays until a blocker or the board edge.

use super::super::state::Position;
use super::super::types::moves::{Move, MoveList};
use super::super::types::piece::{Color, Piece};
use super::super::types::square::Square;

impl Position {
    pub(super) fn generate_slider_moves(&self, from: Square, piece: Piece, color: Color, list: &mut MoveList) {
        for &delta in piece.directions() {
            let mut to = from.offset(delta);
            while to.is_on_board() {
                match self.pieces[to.index()] {
                    Some(Piece::Empty) => {
                        list.push(Move::quiet(from, to));
                        to = to.offset(delta);
                    }
                    Some(occupant) => {
                        if occupant.color() == Some(color.opponent()) {
                            list.push(Move::capture(from, to, occupant));
                        }
                        break;
                    }
                    None => break,
                }
            }
        }
    }
}
