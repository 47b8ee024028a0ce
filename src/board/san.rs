//! Short algebraic notation for the move list.
//!
//! Piece letter (none for pawns), origin file for pawn captures, `x` for
//! captures, destination, `=` and the piece for promotions, then `+` or `#`.
//! Examples: "e4", "Nf3", "exd5", "Kg1", "a8=Q+", "Qh4#".
//!
//! Castling is written as the king's move ("Kg1"); no disambiguation is
//! added when two like pieces can reach the same square.

use super::{GameStatus, Move, Piece};

/// Notation for a move that has already been applied.
///
/// `status` is the classification of the resulting position for the
/// opponent, which decides the `+`/`#` suffix.
#[must_use]
pub fn move_notation(
    piece: Piece,
    mv: Move,
    is_capture: bool,
    promoted_to: Option<Piece>,
    status: GameStatus,
) -> String {
    let mut san = String::new();

    if piece == Piece::Pawn {
        if is_capture {
            san.push(mv.from().file_char());
        }
    } else {
        san.push(piece.to_char().to_ascii_uppercase());
    }

    if is_capture {
        san.push('x');
    }

    san.push_str(&mv.to().to_string());

    if let Some(promo) = promoted_to {
        san.push('=');
        san.push(promo.to_char().to_ascii_uppercase());
    }

    match status {
        GameStatus::Checkmate => san.push('#'),
        GameStatus::Check => san.push('+'),
        GameStatus::Normal | GameStatus::Stalemate => {}
    }

    san
}
