//! Piece-code grids.
//!
//! The saved-game format stores the board as 8 rows of 8 codes, row 0
//! first: `"K"`..`"P"` for White, `"k"`..`"p"` for Black and `""` for an
//! empty square.

use super::error::BoardCodeError;
use super::{Board, CastlingRights, Color, Piece, Square};

impl Board {
    /// Build a board from a code grid.
    ///
    /// Castling rights are inferred: a right is granted when the king and
    /// the matching rook stand on their home squares. No en-passant target
    /// is set. Each color must have exactly one king.
    pub fn from_codes<S: AsRef<str>>(
        grid: &[Vec<S>],
        side_to_move: Color,
    ) -> Result<Board, BoardCodeError> {
        if grid.len() != 8 {
            return Err(BoardCodeError::WrongRowCount { found: grid.len() });
        }

        let mut board = Board::empty();
        let mut king_counts = [0usize; 2];

        for (row, codes) in grid.iter().enumerate() {
            if codes.len() != 8 {
                return Err(BoardCodeError::WrongRowLength {
                    row,
                    found: codes.len(),
                });
            }
            for (col, code) in codes.iter().enumerate() {
                let code = code.as_ref();
                if code.is_empty() {
                    continue;
                }
                let mut chars = code.chars();
                let parsed = match (chars.next(), chars.next()) {
                    (Some(c), None) => Piece::from_code(c),
                    _ => None,
                };
                let Some((color, piece)) = parsed else {
                    return Err(BoardCodeError::InvalidCode {
                        row,
                        col,
                        code: code.to_string(),
                    });
                };
                if piece == Piece::King {
                    king_counts[color.index()] += 1;
                }
                board.set_piece(Square(row, col), color, piece);
            }
        }

        for color in Color::BOTH {
            let found = king_counts[color.index()];
            if found != 1 {
                return Err(BoardCodeError::KingCount { color, found });
            }
        }

        board.side_to_move = side_to_move;
        board.castling_rights = board.inferred_castling_rights();
        Ok(board)
    }

    /// Export the board as a code grid, row 0 first.
    #[must_use]
    pub fn to_codes(&self) -> Vec<Vec<String>> {
        self.squares
            .iter()
            .map(|row| {
                row.iter()
                    .map(|occupant| match occupant {
                        Some((color, piece)) => piece.to_code(*color).to_string(),
                        None => String::new(),
                    })
                    .collect()
            })
            .collect()
    }

    pub(crate) fn inferred_castling_rights(&self) -> CastlingRights {
        let mut rights = CastlingRights::none();
        for color in Color::BOTH {
            let back_rank = color.back_rank();
            if self.piece_at(Square(back_rank, 4)) != Some((color, Piece::King)) {
                continue;
            }
            if self.piece_at(Square(back_rank, 7)) == Some((color, Piece::Rook)) {
                rights.set(color, true);
            }
            if self.piece_at(Square(back_rank, 0)) == Some((color, Piece::Rook)) {
                rights.set(color, false);
            }
        }
        rights
    }
}
