//! Terminal-result classification.

#[cfg(feature = "logging")]
use log::debug;

use super::state::Position;
use super::types::piece::Color;

/// The outcome of a position from the perspective of whoever is asking, resolved against a
/// supplied "just moved" side so the two loss cases collapse cleanly for a caller that only
/// knows who made the last move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GameResult {
    Ongoing,
    Draw(DrawReason),
    Win(Color),
}

/// Why a position was scored a draw.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DrawReason {
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
    Stalemate,
}

impl GameResult {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameResult::Ongoing)
    }
}

impl Position {
    /// Classifies this position for the side to move, given which side made the last move.
    /// Checks the drawing rules before generating legal moves, since those are cheap and
    /// generating moves is not; only falls through to move generation (on a scratch clone, since
    /// filtering pseudo-legal moves needs `&mut self` transiently) to distinguish stalemate from
    /// checkmate.
    #[must_use]
    pub fn game_result(&self, just_moved: Color) -> GameResult {
        if self.is_fifty_move_draw() {
            #[cfg(feature = "logging")]
            debug!("terminal: fifty-move rule at ply {}", self.ply);
            return GameResult::Draw(DrawReason::FiftyMoveRule);
        }
        if self.is_threefold_repetition() {
            #[cfg(feature = "logging")]
            debug!("terminal: threefold repetition at ply {}", self.ply);
            return GameResult::Draw(DrawReason::ThreefoldRepetition);
        }
        if self.is_insufficient_material() {
            #[cfg(feature = "logging")]
            debug!("terminal: insufficient material at ply {}", self.ply);
            return GameResult::Draw(DrawReason::InsufficientMaterial);
        }

        let side_to_move = just_moved.opponent();
        let mut scratch = self.clone();
        if scratch.generate_legal_moves().is_empty() {
            if scratch.is_square_attacked(scratch.king_square(side_to_move), side_to_move.opponent()) {
                #[cfg(feature = "logging")]
                debug!("terminal: checkmate at ply {}", self.ply);
                GameResult::Win(just_moved)
            } else {
                #[cfg(feature = "logging")]
                debug!("terminal: stalemate at ply {}", self.ply);
                GameResult::Draw(DrawReason::Stalemate)
            }
        } else {
            GameResult::Ongoing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::state::Position;

    #[test]
    fn mate_in_one_is_a_win_for_the_side_that_just_moved() {
        let mut pos = Position::from_fen("6k1/5ppp/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        let mv = pos.parse_move_string("a1a8").unwrap();
        assert!(pos.make(mv));
        assert_eq!(pos.game_result(Color::White), GameResult::Win(Color::White));
    }

    #[test]
    fn stalemate_is_a_draw() {
        let pos = Position::from_fen("k7/8/1Q6/8/8/8/8/7K b - - 0 1").unwrap();
        assert_eq!(pos.game_result(Color::White), GameResult::Draw(DrawReason::Stalemate));
    }

    #[test]
    fn halfmove_clock_over_hundred_is_a_fifty_move_draw() {
        let pos = Position::from_fen("7k/8/8/8/8/8/8/K6R w - - 101 80").unwrap();
        assert_eq!(pos.game_result(Color::Black), GameResult::Draw(DrawReason::FiftyMoveRule));
    }

    #[test]
    fn ongoing_when_moves_remain_and_no_draw_condition_applies() {
        let pos = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        assert_eq!(pos.game_result(Color::Black), GameResult::Ongoing);
    }
}
