use super::{Board, Color, Move, Piece, Square, UnmakeInfo};

/// Rook columns (from, to) for a castle landing the king on `king_col`.
#[inline]
fn castling_rook_cols(king_col: usize) -> (usize, usize) {
    if king_col == 6 {
        (7, 5)
    } else {
        (0, 3)
    }
}

impl Board {
    /// Apply a pseudo-legal move for the piece on `m.from()`.
    ///
    /// Handles captures, en passant, castling rook relocation, promotion
    /// (queen unless the move names another piece), castling-right
    /// revocation and the en-passant target, then flips the side to move.
    ///
    /// # Panics
    ///
    /// Panics if `m.from()` is empty.
    pub fn make_move(&mut self, m: Move) -> UnmakeInfo {
        let (color, moving_piece) = self
            .piece_at(m.from())
            .expect("make_move 'from' empty");

        let previous_en_passant_target = self.en_passant_target;
        let previous_castling_rights = self.castling_rights;
        let previous_king_squares = self.king_squares;

        let (dr, dc) = m.from().delta_to(m.to());
        let is_castling = moving_piece == Piece::King && dr == 0 && dc.abs() == 2;
        let is_en_passant =
            moving_piece == Piece::Pawn && dc != 0 && self.is_en_passant_capture(m.from(), m.to(), color);

        let captured_square = if is_en_passant {
            Square(m.from().0, m.to().1)
        } else {
            m.to()
        };
        let captured_piece_info = self.take_piece(captured_square);

        self.take_piece(m.from());
        let promoted = moving_piece == Piece::Pawn && m.to().0 == color.promotion_row();
        let placed = if promoted {
            m.promotion()
                .filter(|p| p.is_promotion_choice())
                .unwrap_or(Piece::Queen)
        } else {
            moving_piece
        };
        self.set_piece(m.to(), color, placed);

        if is_castling {
            let (rook_from, rook_to) = castling_rook_cols(m.to().1);
            if let Some(rook) = self.take_piece(Square(m.to().0, rook_from)) {
                self.set_piece(Square(m.to().0, rook_to), rook.0, rook.1);
            }
        }

        self.en_passant_target = None;
        if moving_piece == Piece::Pawn && dr.abs() == 2 {
            self.en_passant_target = m.from().offset(dr / 2, 0);
        }

        match moving_piece {
            Piece::King => self.castling_rights.remove_color(color),
            Piece::Rook => self.revoke_rook_right(color, m.from()),
            _ => {}
        }
        if let Some((captured_color, Piece::Rook)) = captured_piece_info {
            self.revoke_rook_right(captured_color, captured_square);
        }

        self.side_to_move = self.side_to_move.opponent();

        UnmakeInfo {
            captured_piece_info,
            captured_square,
            promoted,
            is_castling,
            previous_en_passant_target,
            previous_castling_rights,
            previous_king_squares,
        }
    }

    /// Clear the right tied to a rook leaving (or being taken on) `sq`.
    fn revoke_rook_right(&mut self, color: Color, sq: Square) {
        let back_rank = color.back_rank();
        if sq == Square(back_rank, 0) {
            self.castling_rights.remove(color, false);
        } else if sq == Square(back_rank, 7) {
            self.castling_rights.remove(color, true);
        }
    }

    pub fn unmake_move(&mut self, m: Move, info: UnmakeInfo) {
        self.side_to_move = self.side_to_move.opponent();
        let color = self.side_to_move;

        if let Some((_, placed)) = self.take_piece(m.to()) {
            let original = if info.promoted { Piece::Pawn } else { placed };
            self.set_piece(m.from(), color, original);
        }

        if info.is_castling {
            let (rook_from, rook_to) = castling_rook_cols(m.to().1);
            if let Some(rook) = self.take_piece(Square(m.to().0, rook_to)) {
                self.set_piece(Square(m.to().0, rook_from), rook.0, rook.1);
            }
        }

        if let Some((cap_col, cap_piece)) = info.captured_piece_info {
            self.set_piece(info.captured_square, cap_col, cap_piece);
        }

        self.en_passant_target = info.previous_en_passant_target;
        self.castling_rights = info.previous_castling_rights;
        self.king_squares = info.previous_king_squares;
    }
}
