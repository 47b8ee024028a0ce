mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Move, Piece, Square};

impl Board {
    /// Returns true iff the piece on `from` could move to `to` by its raw
    /// movement pattern, ignoring the safety of its own king.
    ///
    /// Pawns attack diagonally forward only, kings attack adjacent squares
    /// only (castling never attacks).
    #[must_use]
    pub fn can_attack(&self, from: Square, to: Square) -> bool {
        let Some((color, piece)) = self.piece_at(from) else {
            return false;
        };
        if from == to {
            return false;
        }
        match piece {
            Piece::Pawn => Board::pawn_attacks(from, to, color),
            Piece::Knight => self.knight_pattern(from, to),
            Piece::Bishop => self.bishop_pattern(from, to),
            Piece::Rook => self.rook_pattern(from, to),
            Piece::Queen => self.queen_pattern(from, to),
            Piece::King => Board::king_steps(from, to),
        }
    }

    fn follows_pattern(&self, from: Square, to: Square, color: Color, piece: Piece) -> bool {
        match piece {
            Piece::Pawn => self.pawn_pattern(from, to, color),
            Piece::Knight => self.knight_pattern(from, to),
            Piece::Bishop => self.bishop_pattern(from, to),
            Piece::Rook => self.rook_pattern(from, to),
            Piece::Queen => self.queen_pattern(from, to),
            Piece::King => self.king_pattern(from, to, color),
        }
    }

    /// Destinations matching the movement pattern of the piece on `from`,
    /// excluding captures of its own color. Empty when `from` is empty.
    #[must_use]
    pub fn pseudo_legal_destinations(&self, from: Square) -> Vec<Square> {
        let Some((color, piece)) = self.piece_at(from) else {
            return Vec::new();
        };
        Square::all()
            .filter(|&to| {
                to != from
                    && self.color_on(to) != Some(color)
                    && self.follows_pattern(from, to, color, piece)
            })
            .collect()
    }

    /// Make the move, test the mover's king, unmake it.
    pub fn would_leave_self_in_check(&mut self, from: Square, to: Square) -> bool {
        let Some((color, _)) = self.piece_at(from) else {
            return false;
        };
        let mv = Move::new(from, to);
        let info = self.make_move(mv);
        let exposed = self.is_in_check(color);
        self.unmake_move(mv, info);
        exposed
    }

    /// Legal destinations for the piece on `from`, in board-scan order.
    pub fn legal_destinations(&mut self, from: Square) -> Vec<Square> {
        let mut destinations = self.pseudo_legal_destinations(from);
        destinations.retain(|&to| !self.would_leave_self_in_check(from, to));
        destinations
    }

    /// Every legal move of `color`, sources in board-scan order.
    ///
    /// Promotions appear once per destination with no promotion piece set;
    /// `make_move` promotes those to a queen.
    pub fn all_legal_moves(&mut self, color: Color) -> Vec<Move> {
        let sources: Vec<Square> = self.pieces(color).map(|(sq, _)| sq).collect();
        let mut moves = Vec::new();
        for from in sources {
            for to in self.legal_destinations(from) {
                moves.push(Move::new(from, to));
            }
        }
        moves
    }

    /// Like `all_legal_moves(color).is_empty()`, stopping at the first hit.
    pub fn has_legal_move(&mut self, color: Color) -> bool {
        let sources: Vec<Square> = self.pieces(color).map(|(sq, _)| sq).collect();
        sources.into_iter().any(|from| {
            self.pseudo_legal_destinations(from)
                .into_iter()
                .any(|to| !self.would_leave_self_in_check(from, to))
        })
    }

    /// Count leaf nodes of the legal move tree for the side to move.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.all_legal_moves(self.side_to_move);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let info = self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.unmake_move(mv, info);
        }
        nodes
    }
}
