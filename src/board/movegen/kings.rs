//! King pseudo-legal move generation: single-step leaps plus castling.

use super::super::geometry::QUEEN_DIRS;
use super::super::state::Position;
use super::super::types::moves::{Move, MoveList};
use super::super::types::piece::{Color, Piece};
use super::super::types::square::Square;

const E1: u8 = 25;
const F1: u8 = 26;
const G1: u8 = 27;
const D1: u8 = 24;
const C1: u8 = 23;
const B1: u8 = 22;
const A1: u8 = 21;
const E8: u8 = 95;
const F8: u8 = 96;
const G8: u8 = 97;
const D8: u8 = 94;
const C8: u8 = 93;
const B8: u8 = 92;
const A8: u8 = 91;

impl Position {
    pub(super) fn generate_king_moves(&self, from: Square, color: Color, list: &mut MoveList) {
        for &delta in &QUEEN_DIRS {
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

    /// Emitted before the per-square scan, matching the reference generator's order. The
    /// destination square's own safety is left to the legality filter; only the squares the
    /// king passes through or starts on are checked here.
    pub(super) fn generate_castling_moves(&self, color: Color, list: &mut MoveList) {
        let empty = |sq: u8| self.pieces[sq as usize] == Some(Piece::Empty);
        let safe = |sq: u8| !self.is_square_attacked(Square::from_raw(sq), color.opponent());

        match color {
            Color::White => {
                if self.castle_rights.has(Color::White, true)
                    && empty(F1)
                    && empty(G1)
                    && safe(E1)
                    && safe(F1)
                {
                    list.push(Move::castle(Square::from_raw(E1), Square::from_raw(G1)));
                }
                if self.castle_rights.has(Color::White, false)
                    && empty(D1)
                    && empty(C1)
                    && empty(B1)
                    && safe(E1)
                    && safe(D1)
                {
                    list.push(Move::castle(Square::from_raw(E1), Square::from_raw(C1)));
                }
            }
            Color::Black => {
                if self.castle_rights.has(Color::Black, true)
                    && empty(F8)
                    && empty(G8)
                    && safe(E8)
                    && safe(F8)
                {
                    list.push(Move::castle(Square::from_raw(E8), Square::from_raw(G8)));
                }
                if self.castle_rights.has(Color::Black, false)
                    && empty(D8)
                    && empty(C8)
                    && empty(B8)
                    && safe(E8)
                    && safe(D8)
                {
                    list.push(Move::castle(Square::from_raw(E8), Square::from_raw(C8)));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn castle_squares_match_geometry() {
        assert_eq!(Square::from_file_rank(4, 0).raw(), E1);
        assert_eq!(Square::from_file_rank(6, 0).raw(), G1);
        assert_eq!(Square::from_file_rank(4, 7).raw(), E8);
        assert_eq!(Square::from_file_rank(0, 7).raw(), A8);
    }
}
