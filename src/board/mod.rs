//! Chess board representation and rules.
//!
//! An 8x8 mailbox of optional (color, piece) pairs plus castling rights,
//! the en-passant target and king locations. Supports full chess rules
//! including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color};
//!
//! let mut board = Board::new();
//! let moves = board.all_legal_moves(Color::White);
//! assert_eq!(moves.len(), 20);
//! ```

mod attack_tables;
mod builder;
mod codes;
mod error;
mod make_unmake;
mod movegen;
pub mod prelude;
mod san;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardCodeError, MoveParseError, SquareError};
pub use san::move_notation;
pub use state::{Board, UnmakeInfo};
pub use status::GameStatus;
pub use types::{CastlingRights, Color, Move, Piece, Square, PROMOTION_PIECES};
