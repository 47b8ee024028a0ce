//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (row, col) board coordinate
//! - `Move` - source/destination pair with optional promotion
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;

pub use piece::PROMOTION_PIECES;
