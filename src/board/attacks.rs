//! Attack detection: is a given square attacked by a given side?

use super::geometry::{BISHOP_DIRS, KNIGHT_DIRS, QUEEN_DIRS, ROOK_DIRS};
use super::state::Position;
use super::types::piece::{Color, Piece};
use super::types::square::Square;

impl Position {
    /// True if `square` is attacked by any piece of `by_color`. Checked in the order pawns,
    /// knights, rook/queen rays, bishop/queen rays, king — returning on the first hit, matching
    /// the reference move generator's own check order.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        if self.attacked_by_pawn(square, by_color) {
            return true;
        }
        if self.attacked_by_leaper(square, by_color, &KNIGHT_DIRS, Piece::WhiteKnight, Piece::BlackKnight) {
            return true;
        }
        if self.attacked_along_rays(square, by_color, &ROOK_DIRS, true) {
            return true;
        }
        if self.attacked_along_rays(square, by_color, &BISHOP_DIRS, false) {
            return true;
        }
        if self.attacked_by_leaper(square, by_color, &QUEEN_DIRS, Piece::WhiteKing, Piece::BlackKing) {
            return true;
        }
        false
    }

    fn attacked_by_pawn(&self, square: Square, by_color: Color) -> bool {
        // A pawn of `by_color` attacks `square` if stepping from `square` backwards along the
        // attacker's capture direction lands on one of that attacker's pawns.
        let (back_left, back_right, pawn) = match by_color {
            Color::White => (-9, -11, Piece::WhitePawn),
            Color::Black => (9, 11, Piece::BlackPawn),
        };
        for delta in [back_left, back_right] {
            let from = square.offset(delta);
            if from.is_on_board() && self.pieces[from.index()] == Some(pawn) {
                return true;
            }
        }
        false
    }

    fn attacked_by_leaper(
        &self,
        square: Square,
        by_color: Color,
        dirs: &[i8],
        white_piece: Piece,
        black_piece: Piece,
    ) -> bool {
        let piece = match by_color {
            Color::White => white_piece,
            Color::Black => black_piece,
        };
        for &delta in dirs {
            let to = square.offset(delta);
            if to.is_on_board() && self.pieces[to.index()] == Some(piece) {
                return true;
            }
        }
        false
    }

    fn attacked_along_rays(&self, square: Square, by_color: Color, dirs: &[i8], rook_like: bool) -> bool {
        for &delta in dirs {
            let mut current = square.offset(delta);
            while current.is_on_board() {
                match self.pieces[current.index()] {
                    Some(Piece::Empty) => {
                        current = current.offset(delta);
                        continue;
                    }
                    Some(piece) if piece.color() == Some(by_color) => {
                        let matches = if rook_like {
                            piece.is_rook_or_queen()
                        } else {
                            piece.is_bishop_or_queen()
                        };
                        if matches {
                            return true;
                        }
                        break;
                    }
                    _ => break,
                }
            }
        }
        false
    }
}
