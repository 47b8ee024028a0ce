//! Error type for session operations.

use std::fmt;

use crate::board::Square;

/// Why a session operation was rejected. The game state is left unchanged
/// in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Destination is not among the legal destinations of the source.
    InvalidMove { from: Square, to: Square },
    /// Selected square is empty or holds a piece the caller may not move.
    IllegalSelection { square: Square },
    /// The game ended in checkmate or stalemate.
    GameOver,
    /// A hint was requested before the cooldown ran out.
    HintUnavailable { remaining: u32 },
    /// Saved game could not be parsed, is malformed, or is too old.
    CorruptedSavedState { reason: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidMove { from, to } => {
                write!(f, "Invalid move {from}{to}")
            }
            GameError::IllegalSelection { square } => {
                write!(f, "No movable piece on {square}")
            }
            GameError::GameOver => write!(f, "The game is over"),
            GameError::HintUnavailable { remaining } => {
                write!(f, "Hint available in {remaining} moves")
            }
            GameError::CorruptedSavedState { reason } => {
                write!(f, "Saved game discarded: {reason}")
            }
        }
    }
}

impl std::error::Error for GameError {}
