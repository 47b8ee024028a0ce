//! Chess rules engine: legal move generation, check and mate detection,
//! special moves, a one-ply heuristic opponent and resumable game sessions.

pub mod board;
pub mod engine;

pub use board::{Board, Color, GameStatus, Move, Piece, Square};
pub use engine::{GameError, GameOptions, GameState};
