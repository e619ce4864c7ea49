//! Zobrist hashing for chess positions.
//!
//! Provides an incrementally-updatable 64-bit position hash: one key per (piece, square) pair,
//! a side-to-move key, and one key per possible 4-bit castling-rights mask. En-passant is
//! deliberately not hashed (see [`crate::board::state::Position::hash`]).

use rand::prelude::*;
use std::sync::LazyLock;

use super::types::piece::{Piece, PIECE_COUNT};

/// Number of mailbox squares a piece key is indexed by. Off-board indices are never looked up
/// but the table is sized to the full 120-cell grid so a raw [`crate::board::types::Square`]
/// index can be used directly with no translation.
const BOARD_CELLS: usize = 120;

/// Number of distinct 4-bit castling-rights masks.
const CASTLING_MASKS: usize = 16;

pub(crate) struct ZobristKeys {
    /// `piece_keys[piece.index()][square.index()]`.
    pub(crate) piece_keys: [[u64; BOARD_CELLS]; PIECE_COUNT],
    pub(crate) side_key: u64,
    /// `castling_keys[rights.as_u8() as usize]`, indexed by the raw 4-bit mask.
    pub(crate) castling_keys: [u64; CASTLING_MASKS],
}

impl ZobristKeys {
    fn new() -> Self {
        // Fixed seed: makes hashes reproducible across runs and processes, which matters for
        // anything that serializes a hash (e.g. a persisted transposition table) or compares
        // hashes computed in different processes.
        let mut rng = StdRng::seed_from_u64(1_234_567_890_u64);

        let mut piece_keys = [[0u64; BOARD_CELLS]; PIECE_COUNT];
        for piece_row in &mut piece_keys {
            for key in piece_row.iter_mut() {
                *key = rng.gen();
            }
        }

        let side_key = rng.gen();

        let mut castling_keys = [0u64; CASTLING_MASKS];
        for key in &mut castling_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            side_key,
            castling_keys,
        }
    }

    #[inline]
    pub(crate) fn piece_key(&self, piece: Piece, square_index: usize) -> u64 {
        self.piece_keys[piece.index()][square_index]
    }

    #[inline]
    pub(crate) fn castling_key(&self, rights_mask: u8) -> u64 {
        self.castling_keys[rights_mask as usize]
    }
}

pub(crate) static ZOBRIST: LazyLock<ZobristKeys> = LazyLock::new(ZobristKeys::new);
