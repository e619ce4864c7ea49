//! Pawn pseudo-legal move generation: pushes, double-pushes, diagonal captures, promotions,
//! and en-passant.

use super::super::geometry::{
    BLACK_PAWN_CAPTURE_DIRS, BLACK_PAWN_PUSH, BLACK_PAWN_START_RANK, WHITE_PAWN_CAPTURE_DIRS,
    WHITE_PAWN_PUSH, WHITE_PAWN_START_RANK,
};
use super::super::state::Position;
use super::super::types::moves::{Move, MoveList};
use super::super::types::piece::{Color, Piece, PieceKind};
use super::super::types::square::{Square, NO_SQUARE};

impl Position {
    pub(super) fn generate_pawn_moves(&self, from: Square, color: Color, list: &mut MoveList) {
        let (push, start_rank, capture_dirs) = match color {
            Color::White => (WHITE_PAWN_PUSH, WHITE_PAWN_START_RANK, WHITE_PAWN_CAPTURE_DIRS),
            Color::Black => (BLACK_PAWN_PUSH, BLACK_PAWN_START_RANK, BLACK_PAWN_CAPTURE_DIRS),
        };
        let from_rank = from.rank().expect("pawn must sit on the inner board");
        let about_to_promote = Self::lands_on_promotion_rank(from_rank, color);

        let one_step = from.offset(push);
        if self.pieces[one_step.index()] == Some(Piece::Empty) {
            if about_to_promote {
                Self::push_promotions(from, one_step, Piece::Empty, color, list);
            } else {
                list.push(Move::quiet(from, one_step));
            }

            if from_rank == start_rank {
                let two_step = from.offset(push * 2);
                if self.pieces[two_step.index()] == Some(Piece::Empty) {
                    list.push(Move::double_pawn_push(from, two_step));
                }
            }
        }

        for delta in capture_dirs {
            let target = from.offset(delta);
            if !target.is_on_board() {
                continue;
            }
            if self.ep_square != NO_SQUARE && target == self.ep_square {
                let captured = Piece::make(color.opponent(), PieceKind::Pawn);
                list.push(Move::en_passant_capture(from, target, captured));
                continue;
            }
            if let Some(occupant) = self.pieces[target.index()] {
                if occupant != Piece::Empty && occupant.color() == Some(color.opponent()) {
                    if about_to_promote {
                        Self::push_promotions(from, target, occupant, color, list);
                    } else {
                        list.push(Move::capture(from, target, occupant));
                    }
                }
            }
        }
    }

    /// True if a pawn on `from_rank` is one push away from the last rank (rank 7 for white,
    /// rank 2 for black, both 0-based) and must therefore promote rather than move quietly.
    fn lands_on_promotion_rank(from_rank: u8, color: Color) -> bool {
        match color {
            Color::White => from_rank == 6,
            Color::Black => from_rank == 1,
        }
    }

    fn push_promotions(from: Square, to: Square, captured: Piece, color: Color, list: &mut MoveList) {
        for &promoted_kind in &PieceKind::PROMOTION_ORDER {
            let promoted = Piece::make(color, promoted_kind);
            if captured != Piece::Empty {
                list.push(Move::promotion_capture(from, to, captured, promoted));
            } else {
                list.push(Move::promotion(from, to, promoted));
            }
        }
    }
}
