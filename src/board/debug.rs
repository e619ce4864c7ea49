//! Debug-only invariant revalidation.
//!
//! Recomputes the fields `make`/`unmake` maintain incrementally and compares them against the
//! stored values. Compiled out entirely in release builds; the public contract (`make`
//! returning `false` on an illegal move) never depends on this module running.

use super::state::Position;
use super::types::piece::{Color, Piece, PieceKind, PIECE_COUNT};
use super::types::square::{Square, NO_SQUARE};

impl Position {
    /// Panics (via `debug_assert!`) if any of the seven invariants listed for [`Position`] does
    /// not hold. A no-op outside debug assertions.
    ///
    /// Invariants 1-6 (sentinel consistency, king/piece-count/hash sync, `ep_square` placement,
    /// `castle_rights` matching the board) are revalidated here from scratch on every call.
    /// Invariant 7 (every undo record reconstructs the prior state exactly) is only checked
    /// structurally here — the history stack's length must track `ply` one-for-one, since that
    /// is a precondition for `unmake` ever popping the right record; the full round-trip
    /// property (replaying every record actually restores the prior position bit-for-bit) is
    /// comparatively expensive to re-verify on every `make`/`unmake` call and is instead covered
    /// by the property-based sweep in `tests/property_make_unmake.rs`.
    #[cfg(debug_assertions)]
    pub(crate) fn debug_check_invariants(&self) {
        for square_index in 0..120 {
            let square = Square::from_raw(square_index as u8);
            debug_assert_eq!(
                self.pieces[square_index].is_none(),
                !square.is_on_board(),
                "off-board sentinel mismatch at {square:?}"
            );
        }

        let mut counts = [0u32; PIECE_COUNT];
        let mut kings = [None, None];
        for square_index in 0..120 {
            if let Some(piece) = self.pieces[square_index] {
                counts[piece.index()] += 1;
                if piece == Piece::WhiteKing {
                    kings[Color::White.index()] = Some(square_index);
                } else if piece == Piece::BlackKing {
                    kings[Color::Black.index()] = Some(square_index);
                }
            }
        }

        for color in [Color::White, Color::Black] {
            debug_assert_eq!(
                kings[color.index()],
                Some(self.king_square(color).index()),
                "king_square out of sync for {color:?}"
            );
        }

        for piece_index in 0..PIECE_COUNT {
            debug_assert_eq!(
                counts[piece_index],
                self.piece_count[piece_index],
                "piece_count out of sync for piece index {piece_index}"
            );
        }

        debug_assert_eq!(
            self.hash,
            self.recompute_hash(),
            "incremental hash diverged from a from-scratch recomputation"
        );

        if self.ep_square != NO_SQUARE {
            let rank = self
                .ep_square
                .rank()
                .expect("ep_square must be an inner-board square");
            let expected_rank = match self.side {
                Color::White => 5, // rank 6: black just double-pushed, white to move
                Color::Black => 2, // rank 3: white just double-pushed, black to move
            };
            debug_assert_eq!(rank, expected_rank, "ep_square on the wrong rank for {:?} to move", self.side);

            let pusher = self.side.opponent();
            let pawn_square = match pusher {
                Color::White => self.ep_square.offset(10),
                Color::Black => self.ep_square.offset(-10),
            };
            let expected_pawn = Piece::make(pusher, PieceKind::Pawn);
            debug_assert_eq!(
                self.pieces[pawn_square.index()],
                Some(expected_pawn),
                "no just-double-pushed pawn in front of ep_square"
            );
        }

        for (color, kingside, king_home, rook_home) in [
            (Color::White, true, Square::from_file_rank(4, 0), Square::from_file_rank(7, 0)),
            (Color::White, false, Square::from_file_rank(4, 0), Square::from_file_rank(0, 0)),
            (Color::Black, true, Square::from_file_rank(4, 7), Square::from_file_rank(7, 7)),
            (Color::Black, false, Square::from_file_rank(4, 7), Square::from_file_rank(0, 7)),
        ] {
            if self.castle_rights.has(color, kingside) {
                let king = Piece::make(color, PieceKind::King);
                let rook = Piece::make(color, PieceKind::Rook);
                debug_assert_eq!(
                    self.pieces[king_home.index()],
                    Some(king),
                    "castle right held for {color:?} {kingside} but king has left its home square"
                );
                debug_assert_eq!(
                    self.pieces[rook_home.index()],
                    Some(rook),
                    "castle right held for {color:?} {kingside} but rook has left its home square"
                );
            }
        }

        debug_assert_eq!(
            self.ply as usize,
            self.history.len(),
            "history stack length diverged from ply count"
        );
    }

    #[cfg(not(debug_assertions))]
    #[inline]
    pub(crate) fn debug_check_invariants(&self) {}
}
