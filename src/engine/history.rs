//! Undo frames, the displayed move list and captured-piece tallies.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Piece, Square};

/// Pieces taken so far, grouped by the color that captured them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    /// Black pieces taken by White.
    pub white: Vec<Piece>,
    /// White pieces taken by Black.
    pub black: Vec<Piece>,
}

impl CapturedPieces {
    /// Pieces captured by `capturer`, in capture order.
    #[must_use]
    pub fn by(&self, capturer: Color) -> &[Piece] {
        match capturer {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn push(&mut self, capturer: Color, piece: Piece) {
        match capturer {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }

    /// Total value of the material `capturer` has taken.
    #[must_use]
    pub fn material(&self, capturer: Color) -> i32 {
        self.by(capturer).iter().map(|p| p.value()).sum()
    }

    /// Material balance from White's point of view.
    #[must_use]
    pub fn advantage(&self) -> i32 {
        self.material(Color::White) - self.material(Color::Black)
    }
}

/// One entry of the displayed move list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub color: Color,
    pub piece: Piece,
    pub captured: Option<Piece>,
    #[serde(default)]
    pub promotion: Option<Piece>,
    pub notation: String,
}

/// State captured before a move is applied; restoring it undoes the move.
#[derive(Clone, Debug)]
pub struct HistoryFrame {
    pub(crate) board: Board,
    pub(crate) captured: CapturedPieces,
    pub(crate) move_count: u32,
}

impl HistoryFrame {
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_tally() {
        let mut captured = CapturedPieces::default();
        captured.push(Color::White, Piece::Rook);
        captured.push(Color::White, Piece::Pawn);
        captured.push(Color::Black, Piece::Knight);

        assert_eq!(captured.by(Color::White), &[Piece::Rook, Piece::Pawn]);
        assert_eq!(captured.material(Color::White), 6);
        assert_eq!(captured.material(Color::Black), 3);
        assert_eq!(captured.advantage(), 3);
    }
}
