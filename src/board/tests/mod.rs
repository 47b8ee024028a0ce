//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts for move generation
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Castling, en passant, promotion, pins, mates
//! - `proptest.rs` - Property-based tests

mod edge_cases;
mod make_unmake;

use crate::board::{Board, Color, Square};

/// Build a board from 8 strings of piece codes, `.` for empty squares.
pub(super) fn board_from_rows(rows: [&str; 8], side_to_move: Color) -> Board {
    let grid: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| if c == '.' { String::new() } else { c.to_string() })
                .collect()
        })
        .collect();
    Board::from_codes(&grid, side_to_move).expect("invalid test position")
}

pub(super) fn sq(s: &str) -> Square {
    s.parse().expect("invalid square")
}
