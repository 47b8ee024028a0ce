use super::super::attack_tables::{bit_for_square, KING_ATTACKS};
use super::super::{Board, Color, Piece, Square};

impl Board {
    pub(crate) fn king_steps(from: Square, to: Square) -> bool {
        KING_ATTACKS[from.as_index()] & bit_for_square(to) != 0
    }

    pub(crate) fn king_pattern(&self, from: Square, to: Square, color: Color) -> bool {
        if Board::king_steps(from, to) {
            return true;
        }
        let (dr, dc) = from.delta_to(to);
        dr == 0 && dc.abs() == 2 && self.can_castle(from, to, color)
    }

    /// Castling needs the right, the rook on its home square, empty squares
    /// between them, and the king's square and the square it crosses free of
    /// attack. Landing in check is left to the legality filter.
    fn can_castle(&self, from: Square, to: Square, color: Color) -> bool {
        let back_rank = color.back_rank();
        if from != Square(back_rank, 4) || to.0 != back_rank {
            return false;
        }

        let kingside = match to.1 {
            6 => true,
            2 => false,
            _ => return false,
        };
        if !self.castling_rights.has(color, kingside) {
            return false;
        }

        let (rook_col, between, crossed): (usize, &[usize], usize) = if kingside {
            (7, &[5, 6], 5)
        } else {
            (0, &[1, 2, 3], 3)
        };
        if self.piece_at(Square(back_rank, rook_col)) != Some((color, Piece::Rook)) {
            return false;
        }
        if between.iter().any(|&col| !self.is_empty(Square(back_rank, col))) {
            return false;
        }

        let enemy = color.opponent();
        !self.is_square_attacked_by(from, enemy)
            && !self.is_square_attacked_by(Square(back_rank, crossed), enemy)
    }

    /// True iff any piece of `attacker_color` could move onto `square` by
    /// its raw movement pattern.
    #[must_use]
    pub fn is_square_attacked_by(&self, square: Square, attacker_color: Color) -> bool {
        self.pieces(attacker_color)
            .any(|(from, _)| self.can_attack(from, square))
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        if let Some(king_sq) = self.king_square(color) {
            self.is_square_attacked_by(king_sq, color.opponent())
        } else {
            false
        }
    }
}
