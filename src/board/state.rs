//! The [`Position`] struct: board array, side to move, and all state needed to make/unmake a
//! move and restore it exactly.

#[cfg(feature = "logging")]
use log::trace;

use super::make_unmake::UndoHistory;
use super::types::castling::CastlingRights;
use super::types::piece::{Color, Piece, PIECE_COUNT};
use super::types::square::{Square, NO_SQUARE};

/// A chess position: the mailbox board plus everything needed to make, unmake, and classify
/// moves without recomputing derived state from scratch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) pieces: [Option<Piece>; 120],
    pub(crate) side: Color,
    pub(crate) just_moved: Color,
    pub(crate) castle_rights: CastlingRights,
    pub(crate) ep_square: Square,
    pub(crate) halfmove_clock: u32,
    pub(crate) ply: u32,
    pub(crate) king_square: [Square; 2],
    pub(crate) piece_count: [u32; PIECE_COUNT],
    pub(crate) hash: u64,
    pub(crate) history: UndoHistory,
}

impl Position {
    /// Every cell outside the inner 8×8 is off-board (`None`); every cell inside it is empty.
    /// This is not a playable position — it exists so [`Position::reset`] has a known starting
    /// state to mutate during FEN parsing.
    #[must_use]
    pub fn empty() -> Self {
        let mut pieces = [None; 120];
        for file in 0..8u8 {
            for rank in 0..8u8 {
                pieces[Square::from_file_rank(file, rank).index()] = Some(Piece::Empty);
            }
        }
        Position {
            pieces,
            side: Color::White,
            just_moved: Color::Black,
            castle_rights: CastlingRights::none(),
            ep_square: NO_SQUARE,
            halfmove_clock: 0,
            ply: 0,
            king_square: [NO_SQUARE, NO_SQUARE],
            piece_count: [0; PIECE_COUNT],
            hash: 0,
            history: UndoHistory::new(),
        }
    }

    /// Clear every cell to empty, reset flags, and drop history. Used by FEN parsing before it
    /// populates a fresh layout, so a partially-applied parse never leaks into a prior position.
    pub(crate) fn reset(&mut self) {
        *self = Position::empty();
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side
    }

    #[must_use]
    pub fn just_moved(&self) -> Color {
        self.just_moved
    }

    #[must_use]
    pub fn castle_rights(&self) -> CastlingRights {
        self.castle_rights
    }

    #[must_use]
    pub fn ep_square(&self) -> Square {
        self.ep_square
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_square[color.index()]
    }

    #[must_use]
    pub fn piece_count(&self, piece: Piece) -> u32 {
        self.piece_count[piece.index()]
    }

    /// Piece identifier at a square, or `None` if `square` lies off the inner 8×8.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.pieces[square.index()]
    }

    /// Recompute `piece_count` and `king_square` from `pieces`. Called after FEN parsing and by
    /// the debug-invariant layer; never needed mid-game since make/unmake maintain both fields
    /// incrementally.
    pub(crate) fn rebuild_derived_state(&mut self) {
        self.piece_count = [0; PIECE_COUNT];
        for square_index in 0..120 {
            if let Some(piece) = self.pieces[square_index] {
                self.piece_count[piece.index()] += 1;
                if piece == Piece::WhiteKing {
                    self.king_square[Color::White.index()] = Square::from_raw(square_index as u8);
                } else if piece == Piece::BlackKing {
                    self.king_square[Color::Black.index()] = Square::from_raw(square_index as u8);
                }
            }
        }
    }

    /// Full from-scratch Zobrist recomputation; used to populate `hash` after FEN parsing and
    /// by the debug-invariant layer to cross-check the incrementally maintained hash.
    pub(crate) fn recompute_hash(&self) -> u64 {
        use super::zobrist::ZOBRIST;

        let mut hash = 0u64;
        for square_index in 0..120 {
            if let Some(piece) = self.pieces[square_index] {
                if piece != Piece::Empty {
                    hash ^= ZOBRIST.piece_key(piece, square_index);
                }
            }
        }
        if self.side == Color::Black {
            hash ^= ZOBRIST.side_key;
        }
        hash ^= ZOBRIST.castling_key(self.castle_rights.as_u8());
        if self.ep_square != NO_SQUARE {
            hash ^= ZOBRIST.piece_key(Piece::Empty, self.ep_square.index());
        }
        hash
    }

    /// No pawns, no queens, no rooks anywhere; each side has at most one bishop and at most one
    /// knight, and never both a knight and a bishop on the same side.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        if self.piece_count(Piece::WhitePawn) != 0
            || self.piece_count(Piece::BlackPawn) != 0
            || self.piece_count(Piece::WhiteQueen) != 0
            || self.piece_count(Piece::BlackQueen) != 0
            || self.piece_count(Piece::WhiteRook) != 0
            || self.piece_count(Piece::BlackRook) != 0
        {
            return false;
        }
        if self.piece_count(Piece::WhiteBishop) > 1 || self.piece_count(Piece::BlackBishop) > 1 {
            return false;
        }
        if self.piece_count(Piece::WhiteKnight) > 1 || self.piece_count(Piece::BlackKnight) > 1 {
            return false;
        }
        if self.piece_count(Piece::WhiteKnight) != 0 && self.piece_count(Piece::WhiteBishop) != 0 {
            return false;
        }
        if self.piece_count(Piece::BlackKnight) != 0 && self.piece_count(Piece::BlackBishop) != 0 {
            return false;
        }
        true
    }

    /// Number of times `hash` appears among completed history entries (i.e. earlier positions
    /// reached in this game, not counting the current one).
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.history.count_hash(self.hash)
    }

    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock > 100
    }

    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_count() >= 2
    }

    /// Low-level piece placement: sets `pieces[square]`, maintaining `piece_count` and
    /// `king_square` but not the hash. Used by FEN parsing; `make`/`unmake` instead go through
    /// [`super::make_unmake`]'s hashed primitives.
    pub(crate) fn place_piece(&mut self, square: Square, piece: Piece) {
        self.pieces[square.index()] = Some(piece);
        if piece != Piece::Empty {
            self.piece_count[piece.index()] += 1;
            if piece == Piece::WhiteKing {
                self.king_square[Color::White.index()] = square;
            } else if piece == Piece::BlackKing {
                self.king_square[Color::Black.index()] = square;
            }
        }
        #[cfg(feature = "logging")]
        trace!("placed {piece:?} at {square}");
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::empty()
    }
}
