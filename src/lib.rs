//! A chess position engine: mailbox board representation, packed move encoding, Zobrist
//! hashing, move generation, make/unmake, and FEN/move-string I/O.
//!
//! Search, evaluation, UCI transport, and PGN/SAN are out of scope; this crate only models the
//! position and its rules.

pub mod board;
