//! Direction tables and other constants tied to the 120-square mailbox layout.
//!
//! Every offset here is a delta in 120-index space: stepping off the inner 8×8 always lands on
//! a sentinel cell rather than wrapping to the opposite file, which is the entire point of
//! padding the board out to 10×12.

/// Knight leaps, in no particular order (move generation doesn't care about ordering within a
/// piece's own direction list, only about the order piece kinds are dispatched in).
pub const KNIGHT_DIRS: [i8; 8] = [-21, -19, -12, -8, 8, 12, 19, 21];

/// Bishop ray directions: the four diagonals.
pub const BISHOP_DIRS: [i8; 4] = [-11, -9, 9, 11];

/// Rook ray directions: the four files/ranks.
pub const ROOK_DIRS: [i8; 4] = [-10, -1, 1, 10];

/// Queen and king directions: the union of rook and bishop directions. Kings use this as a
/// single-step leap rather than a ray.
pub const QUEEN_DIRS: [i8; 8] = [-11, -10, -9, -1, 1, 9, 10, 11];

/// Pawn capture directions by color (diagonal forward-left, forward-right).
pub const WHITE_PAWN_CAPTURE_DIRS: [i8; 2] = [9, 11];
pub const BLACK_PAWN_CAPTURE_DIRS: [i8; 2] = [-9, -11];

/// Single-step forward push direction by color.
pub const WHITE_PAWN_PUSH: i8 = 10;
pub const BLACK_PAWN_PUSH: i8 = -10;

/// 0-based ranks (rank 1 = 0) pawns of each color start a double push from.
pub const WHITE_PAWN_START_RANK: u8 = 1;
pub const BLACK_PAWN_START_RANK: u8 = 6;

use super::types::castling::{CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q};

/// Per-square castling-rights mask: `castle_rights &= CASTLE_MASK[from] & CASTLE_MASK[to]`
/// after every move clears the rights tied to a king or corner rook that has moved or been
/// captured. Every square not named below maps to `0xF`, making the AND a no-op.
pub const CASTLE_MASK: [u8; 120] = build_castle_mask();

const fn build_castle_mask() -> [u8; 120] {
    let mut mask = [0x0F; 120];
    // e1 = 25, a1 = 21, h1 = 28, e8 = 95, a8 = 91, h8 = 98
    mask[25] = !(CASTLE_WHITE_K | CASTLE_WHITE_Q) & 0x0F;
    mask[21] = !CASTLE_WHITE_Q & 0x0F;
    mask[28] = !CASTLE_WHITE_K & 0x0F;
    mask[95] = !(CASTLE_BLACK_K | CASTLE_BLACK_Q) & 0x0F;
    mask[91] = !CASTLE_BLACK_Q & 0x0F;
    mask[98] = !CASTLE_BLACK_K & 0x0F;
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queen_dirs_is_rook_and_bishop_union() {
        for d in ROOK_DIRS {
            assert!(QUEEN_DIRS.contains(&d));
        }
        for d in BISHOP_DIRS {
            assert!(QUEEN_DIRS.contains(&d));
        }
    }

    #[test]
    fn knight_dirs_has_eight_distinct_leaps() {
        let mut sorted = KNIGHT_DIRS;
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 8);
    }

    #[test]
    fn castle_mask_only_touches_named_squares() {
        for (sq, &mask) in CASTLE_MASK.iter().enumerate() {
            if [21, 25, 28, 91, 95, 98].contains(&sq) {
                assert_ne!(mask, 0x0F, "square {sq} should clear a right");
            } else {
                assert_eq!(mask, 0x0F, "square {sq} should be a no-op");
            }
        }
    }

    #[test]
    fn e1_clears_both_white_rights() {
        assert_eq!(CASTLE_MASK[25] & (CASTLE_WHITE_K | CASTLE_WHITE_Q), 0);
    }
}
