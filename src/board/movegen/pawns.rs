use super::super::{Board, Color, Piece, Square};

impl Board {
    /// Pawn movement: single push, double push from the start row,
    /// diagonal capture, and en passant onto the recorded target.
    pub(crate) fn pawn_pattern(&self, from: Square, to: Square, color: Color) -> bool {
        let dir = color.pawn_direction();
        let (dr, dc) = from.delta_to(to);

        if dc == 0 {
            if !self.is_empty(to) {
                return false;
            }
            if dr == dir {
                return true;
            }
            return dr == 2 * dir
                && from.0 == color.pawn_start_row()
                && from
                    .offset(dir, 0)
                    .is_some_and(|skipped| self.is_empty(skipped));
        }

        if dc.abs() == 1 && dr == dir {
            return match self.piece_at(to) {
                Some((target_color, _)) => target_color != color,
                None => self.is_en_passant_capture(from, to, color),
            };
        }

        false
    }

    /// Diagonal-forward adjacency; a push is never an attack.
    pub(crate) fn pawn_attacks(from: Square, to: Square, color: Color) -> bool {
        let (dr, dc) = from.delta_to(to);
        dr == color.pawn_direction() && dc.abs() == 1
    }

    /// The captured pawn sits beside the mover, behind the target square.
    pub(crate) fn is_en_passant_capture(&self, from: Square, to: Square, color: Color) -> bool {
        self.en_passant_target == Some(to)
            && self.piece_at(Square(from.0, to.1)) == Some((color.opponent(), Piece::Pawn))
    }
}
