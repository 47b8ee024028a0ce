use super::{CastlingRights, Color, Piece, Square};

/// Occupant of a single square.
pub(crate) type Occupant = Option<(Color, Piece)>;

/// Everything `unmake_move` needs to reverse a `make_move` exactly.
#[derive(Clone, Debug)]
pub struct UnmakeInfo {
    pub(crate) captured_piece_info: Option<(Color, Piece)>,
    pub(crate) captured_square: Square,
    pub(crate) promoted: bool,
    pub(crate) is_castling: bool,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_king_squares: [Option<Square>; 2],
}

impl UnmakeInfo {
    /// The piece removed by the move, if any.
    #[must_use]
    pub fn captured(&self) -> Option<(Color, Piece)> {
        self.captured_piece_info
    }

    /// Whether a pawn was replaced by its promotion piece.
    #[must_use]
    pub fn promoted(&self) -> bool {
        self.promoted
    }

    #[must_use]
    pub fn is_castling(&self) -> bool {
        self.is_castling
    }
}

/// 8x8 mailbox board plus the auxiliary state the rules depend on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [[Occupant; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) king_squares: [Option<Square>; 2],
}

pub(crate) const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Board {
    /// Standard initial position, White to move.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, piece) in BACK_RANK.iter().enumerate() {
            board.set_piece(Square(7, col), Color::White, *piece);
            board.set_piece(Square(0, col), Color::Black, *piece);
            board.set_piece(Square(6, col), Color::White, Piece::Pawn);
            board.set_piece(Square(1, col), Color::Black, Piece::Pawn);
        }

        board.castling_rights = CastlingRights::all();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            en_passant_target: None,
            castling_rights: CastlingRights::none(),
            king_squares: [None, None],
        }
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square a pawn may capture onto en passant during the next move only.
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Where `color`'s king stands. `None` only on hand-built boards.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king_squares[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1]
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    /// Squares and piece types of one color, in board-scan order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((c, piece)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
        if piece == Piece::King {
            self.king_squares[color.index()] = Some(sq);
        }
    }

    pub(crate) fn take_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        let taken = self.squares[sq.0][sq.1].take();
        if let Some((color, Piece::King)) = taken {
            if self.king_squares[color.index()] == Some(sq) {
                self.king_squares[color.index()] = None;
            }
        }
        taken
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let board = Board::new();
        assert_eq!(
            board.piece_at(Square(7, 4)),
            Some((Color::White, Piece::King))
        );
        assert_eq!(
            board.piece_at(Square(0, 3)),
            Some((Color::Black, Piece::Queen))
        );
        assert_eq!(board.king_square(Color::White), Some(Square(7, 4)));
        assert_eq!(board.king_square(Color::Black), Some(Square(0, 4)));
        assert_eq!(board.pieces(Color::White).count(), 16);
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.castling_rights(), CastlingRights::all());
        assert_eq!(board.en_passant_target(), None);
    }

    #[test]
    fn test_take_piece_clears_king_square() {
        let mut board = Board::new();
        assert_eq!(
            board.take_piece(Square(0, 4)),
            Some((Color::Black, Piece::King))
        );
        assert_eq!(board.king_square(Color::Black), None);
        assert!(board.is_empty(Square(0, 4)));
    }
}
