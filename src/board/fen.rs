//! FEN parsing/emission and long-algebraic move-string parsing/emission.

use std::str::FromStr;

#[cfg(feature = "logging")]
use log::{debug, trace};

use super::error::{FenError, MoveParseError};
use super::state::Position;
use super::types::castling::CastlingRights;
use super::types::moves::Move;
use super::types::piece::{Color, Piece};
use super::types::square::{Square, NO_SQUARE};

impl Position {
    /// Parse the six whitespace-separated FEN fields. Tolerates a truncated suffix: anything
    /// from the en-passant field onward may be missing and defaults to `-` / 0 / 1. No partial
    /// position is ever observable by the caller — a scratch position is built and only
    /// returned on full success.
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            #[cfg(feature = "logging")]
            trace!("FEN parse failed: too few fields in '{fen}'");
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut pos = Position::empty();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (rank_from_top, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_from_top as u8;
            let mut file: u8 = 0;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    file += digit as u8;
                } else {
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_from_top,
                            files: file as usize + 1,
                        });
                    }
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    pos.place_piece(Square::from_file_rank(file, rank), piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_from_top,
                    files: file as usize,
                });
            }
        }

        pos.side = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };
        pos.just_moved = pos.side.opponent();

        let mut castle_mask = 0u8;
        if let Some(&castling_field) = parts.get(2) {
            if castling_field != "-" {
                for c in castling_field.chars() {
                    castle_mask |= match c {
                        'K' => 1,
                        'Q' => 2,
                        'k' => 4,
                        'q' => 8,
                        other => return Err(FenError::InvalidCastling { char: other }),
                    };
                }
            }
        }
        pos.castle_rights = CastlingRights::from_u8(castle_mask);

        pos.ep_square = match parts.get(3) {
            None | Some(&"-") => NO_SQUARE,
            Some(notation) => Square::parse_algebraic(notation).map_err(|_| FenError::InvalidEnPassant {
                found: notation.to_string(),
            })?,
        };

        pos.halfmove_clock = parts
            .get(4)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);

        pos.rebuild_derived_state();
        pos.hash = pos.recompute_hash();

        #[cfg(feature = "logging")]
        debug!("parsed FEN '{fen}', hash={:#x}", pos.hash);
        Ok(pos)
    }

    /// Canonical FEN emission: no extra whitespace, castling in `KQkq` order, `-` when absent.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut ranks = Vec::with_capacity(8);
        for rank in (0..8u8).rev() {
            let mut row = String::new();
            let mut empty_run = 0u8;
            for file in 0..8u8 {
                match self.pieces[Square::from_file_rank(file, rank).index()] {
                    Some(Piece::Empty) | None => empty_run += 1,
                    Some(piece) => {
                        if empty_run > 0 {
                            row.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        row.push(piece.to_char());
                    }
                }
            }
            if empty_run > 0 {
                row.push_str(&empty_run.to_string());
            }
            ranks.push(row);
        }

        let side = match self.side {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        if self.castle_rights.has(Color::White, true) {
            castling.push('K');
        }
        if self.castle_rights.has(Color::White, false) {
            castling.push('Q');
        }
        if self.castle_rights.has(Color::Black, true) {
            castling.push('k');
        }
        if self.castle_rights.has(Color::Black, false) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = if self.ep_square == NO_SQUARE {
            "-".to_string()
        } else {
            self.ep_square.to_string()
        };

        format!(
            "{} {} {} {} {} 1",
            ranks.join("/"),
            side,
            castling,
            ep,
            self.halfmove_clock
        )
    }

    /// Parse a long-algebraic move string against this position's legal moves, disambiguating
    /// only via the optional promotion suffix.
    pub fn parse_move_string(&mut self, text: &str) -> Result<Move, MoveParseError> {
        if text.len() < 4 || text.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: text.len() });
        }
        let from = Square::parse_algebraic(&text[0..2]).map_err(|_| MoveParseError::InvalidSquare {
            notation: text.to_string(),
        })?;
        let to = Square::parse_algebraic(&text[2..4]).map_err(|_| MoveParseError::InvalidSquare {
            notation: text.to_string(),
        })?;

        let promotion_char = if text.len() == 5 {
            let c = text.as_bytes()[4] as char;
            if !matches!(c, 'q' | 'r' | 'b' | 'n') {
                return Err(MoveParseError::InvalidPromotion { char: c });
            }
            Some(c)
        } else {
            None
        };

        let legal_moves = self.generate_legal_moves();
        for &m in legal_moves.iter() {
            if m.from() != from || m.to() != to {
                continue;
            }
            let matches_promotion = match promotion_char {
                None => !m.is_promotion(),
                Some(c) => {
                    m.is_promotion() && Piece::from_u8_index(m.promoted_index()).to_char() == c
                }
            };
            if matches_promotion {
                return Ok(m);
            }
        }

        Err(MoveParseError::IllegalMove {
            notation: text.to_string(),
        })
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn start_position_round_trips() {
        let pos = Position::from_fen(STARTPOS).unwrap();
        assert_eq!(pos.to_fen(), STARTPOS);
    }

    #[test]
    fn kiwipete_round_trips() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let pos = Position::from_fen(fen).unwrap();
        assert_eq!(pos.to_fen(), fen);
    }

    #[test]
    fn missing_trailing_fields_default() {
        let pos = Position::from_fen("8/8/8/8/8/8/8/K6k w").unwrap();
        assert_eq!(pos.ep_square, NO_SQUARE);
        assert_eq!(pos.halfmove_clock, 0);
    }

    #[test]
    fn too_few_fields_is_an_error() {
        assert_eq!(Position::from_fen("8/8"), Err(FenError::TooFewParts { found: 1 }));
    }

    #[test]
    fn invalid_piece_character_is_an_error() {
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/Kx5k w"),
            Err(FenError::InvalidPiece { char: 'x' })
        ));
    }

    #[test]
    fn parse_move_string_resolves_promotion_suffix() {
        let mut pos = Position::from_fen("8/P6k/8/8/8/8/7K/8 w - - 0 1").unwrap();
        let m = pos.parse_move_string("a7a8q").unwrap();
        assert!(m.is_promotion());
        assert_eq!(m.to_string(), "a7a8q");
    }
}
