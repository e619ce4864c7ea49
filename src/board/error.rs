//! Error types for position, FEN, and move-string parsing.

use std::fmt;

/// Error type for FEN parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few whitespace-separated fields (needs at least the board layout and
    /// side to move; the rest default).
    TooFewParts { found: usize },
    /// Invalid piece character in the board-layout field.
    InvalidPiece { char: char },
    /// Invalid castling character (must be one of `KQkq` or `-`).
    InvalidCastling { char: char },
    /// Invalid side-to-move field (must be `w` or `b`).
    InvalidSideToMove { found: String },
    /// Invalid en-passant target square.
    InvalidEnPassant { found: String },
    /// A board-layout rank did not sum to exactly 8 files.
    TooManyFiles { rank: usize, files: usize },
    /// Board layout did not contain exactly 8 ranks.
    InvalidRank { rank: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 2 fields, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "invalid en passant square '{found}'")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "too many files ({files}) in rank {rank}")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "invalid rank index {rank} in FEN")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for long-algebraic move-string parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 or 5 characters).
    InvalidLength { len: usize },
    /// Invalid square notation in the move string.
    InvalidSquare { notation: String },
    /// Invalid promotion suffix (must be one of `q`, `r`, `b`, `n`).
    InvalidPromotion { char: char },
    /// The string parsed syntactically but matches no legal move in the position it was
    /// checked against.
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "invalid promotion piece '{char}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "'{notation}' is not a legal move in this position")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for algebraic square-notation parsing failures, shared between FEN and
/// move-string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7).
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7).
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation (wrong length or non-alphanumeric characters).
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "file {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
