//! Make/unmake move tests.

use super::{board_from_rows, sq};
use crate::board::{Board, Color, Move, Piece, UnmakeInfo};
use rand::prelude::*;

fn mv(s: &str) -> Move {
    s.parse().expect("invalid move")
}

#[test]
fn test_en_passant_make_unmake() {
    let mut board = board_from_rows(
        [
            "rnbqkbnr", "ppp.p.pp", "........", "...pPp..", "........", "........", "PPPP.PPP",
            "RNBQKBNR",
        ],
        Color::White,
    );
    board.en_passant_target = Some(sq("f6"));
    let original = board.clone();

    let m = mv("e5f6");
    let info = board.make_move(m);
    assert_eq!(info.captured(), Some((Color::Black, Piece::Pawn)));
    assert!(board.is_empty(sq("f5")));
    board.unmake_move(m, info);

    assert_eq!(board, original);
}

#[test]
fn test_promotion_make_unmake() {
    let mut board = board_from_rows(
        [
            "........", "P.......", "........", "........", "........", "........", "........",
            "K.k.....",
        ],
        Color::White,
    );
    let original = board.clone();

    let m = mv("a7a8");
    let info = board.make_move(m);
    assert!(info.promoted());
    assert_eq!(board.piece_at(sq("a8")), Some((Color::White, Piece::Queen)));
    board.unmake_move(m, info);

    assert_eq!(board, original);
    assert_eq!(board.piece_at(sq("a7")), Some((Color::White, Piece::Pawn)));
}

#[test]
fn test_castling_make_unmake() {
    let mut board = board_from_rows(
        [
            "r...k..r", "........", "........", "........", "........", "........", "........",
            "R...K..R",
        ],
        Color::White,
    );
    let original = board.clone();

    for m in [mv("e1g1"), mv("e1c1")] {
        let info = board.make_move(m);
        assert!(info.is_castling());
        board.unmake_move(m, info);
        assert_eq!(board, original);
    }
}

#[test]
fn test_capture_restores_castling_right() {
    let mut board = board_from_rows(
        [
            "r...k..r", "........", "........", "........", "........", "........", "........",
            "R...K..R",
        ],
        Color::White,
    );
    let original = board.clone();

    let m = mv("a1a8");
    let info = board.make_move(m);
    assert!(!board.castling_rights().has(Color::Black, false));
    assert!(!board.castling_rights().has(Color::White, false));
    board.unmake_move(m, info);

    assert_eq!(board, original);
}

#[test]
fn test_legal_moves_stable_after_make_unmake() {
    let mut board = Board::new();
    let initial_moves = board.all_legal_moves(Color::White);

    for m in &initial_moves {
        let info = board.make_move(*m);
        board.unmake_move(*m, info);
    }

    assert_eq!(board.all_legal_moves(Color::White), initial_moves);
    assert_eq!(board, Board::new());
}

#[test]
fn test_random_playout_round_trip_state() {
    let mut board = Board::new();
    let initial = board.clone();

    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut history: Vec<(Move, UnmakeInfo, Board)> = Vec::new();

    for _ in 0..200 {
        let moves = board.all_legal_moves(board.side_to_move());
        if moves.is_empty() {
            break;
        }
        let m = moves[rng.gen_range(0..moves.len())];
        let before = board.clone();
        let info = board.make_move(m);
        history.push((m, info, before));
    }

    while let Some((m, info, before)) = history.pop() {
        board.unmake_move(m, info);
        assert_eq!(board, before, "unmake of {m} did not restore the position");
    }

    assert_eq!(board, initial);
}
