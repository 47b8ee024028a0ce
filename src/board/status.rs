//! Game-status classification for the side to move.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Board, Color};

/// Outcome of classifying a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Normal,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Derive the status from the two facts it depends on.
    #[must_use]
    pub const fn classify(in_check: bool, has_moves: bool) -> Self {
        match (has_moves, in_check) {
            (false, true) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Normal,
        }
    }

    /// Checkmate and stalemate end the game.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }

    /// True while the side to move's king is attacked.
    #[must_use]
    pub const fn is_check(self) -> bool {
        matches!(self, GameStatus::Check | GameStatus::Checkmate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Normal => "normal",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(name)
    }
}

impl Board {
    /// Classify the position for the side to move.
    pub fn status(&mut self) -> GameStatus {
        self.status_for(self.side_to_move)
    }

    pub fn status_for(&mut self, color: Color) -> GameStatus {
        let in_check = self.is_in_check(color);
        let has_moves = self.has_legal_move(color);
        GameStatus::classify(in_check, has_moves)
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.status() == GameStatus::Checkmate
    }

    pub fn is_stalemate(&mut self) -> bool {
        self.status() == GameStatus::Stalemate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_table() {
        assert_eq!(GameStatus::classify(true, false), GameStatus::Checkmate);
        assert_eq!(GameStatus::classify(false, false), GameStatus::Stalemate);
        assert_eq!(GameStatus::classify(true, true), GameStatus::Check);
        assert_eq!(GameStatus::classify(false, true), GameStatus::Normal);
    }

    #[test]
    fn test_terminal_states() {
        assert!(GameStatus::Checkmate.is_terminal());
        assert!(GameStatus::Stalemate.is_terminal());
        assert!(!GameStatus::Check.is_terminal());
        assert!(!GameStatus::Normal.is_terminal());
    }

    #[test]
    fn test_initial_position_is_normal() {
        let mut board = Board::new();
        assert_eq!(board.status(), GameStatus::Normal);
    }
}
