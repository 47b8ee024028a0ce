//! Edge case tests for special chess positions and moves.

use super::{board_from_rows, sq};
use crate::board::{Board, BoardBuilder, Color, GameStatus, Move, Piece, Square};

fn mv(s: &str) -> Move {
    s.parse().expect("invalid move")
}

fn castling_board(rows_8_to_2: [&str; 7]) -> Board {
    let [r8, r7, r6, r5, r4, r3, r2] = rows_8_to_2;
    board_from_rows([r8, r7, r6, r5, r4, r3, r2, "R...K..R"], Color::White)
}

#[test]
fn test_kingside_castle_relocates_rook() {
    let mut board = castling_board([
        "....k...", "........", "........", "........", "........", "........", "........",
    ]);
    let destinations = board.legal_destinations(sq("e1"));
    assert!(destinations.contains(&sq("g1")));
    assert!(destinations.contains(&sq("c1")));

    board.make_move(mv("e1g1"));
    assert_eq!(board.piece_at(sq("g1")), Some((Color::White, Piece::King)));
    assert_eq!(board.piece_at(sq("f1")), Some((Color::White, Piece::Rook)));
    assert!(board.is_empty(sq("h1")));
    assert!(!board.castling_rights().has(Color::White, true));
    assert!(!board.castling_rights().has(Color::White, false));
}

#[test]
fn test_queenside_castle_relocates_rook() {
    let mut board = castling_board([
        "....k...", "........", "........", "........", "........", "........", "........",
    ]);
    board.make_move(mv("e1c1"));
    assert_eq!(board.piece_at(sq("c1")), Some((Color::White, Piece::King)));
    assert_eq!(board.piece_at(sq("d1")), Some((Color::White, Piece::Rook)));
    assert!(board.is_empty(sq("a1")));
}

#[test]
fn test_cannot_castle_through_attacked_square() {
    // Black rook on f8 covers f1.
    let mut board = castling_board([
        "....kr..", "........", "........", "........", "........", "........", "........",
    ]);
    let destinations = board.legal_destinations(sq("e1"));
    assert!(!destinations.contains(&sq("g1")));
    assert!(destinations.contains(&sq("c1")));
}

#[test]
fn test_cannot_castle_out_of_check() {
    let mut board = castling_board([
        "....r..k", "........", "........", "........", "........", "........", "........",
    ]);
    let destinations = board.legal_destinations(sq("e1"));
    assert!(!destinations.contains(&sq("g1")));
    assert!(!destinations.contains(&sq("c1")));
}

#[test]
fn test_cannot_castle_into_check() {
    // Black rook on g8 covers the destination only.
    let mut board = castling_board([
        "k.....r.", "........", "........", "........", "........", "........", "........",
    ]);
    assert!(board.pseudo_legal_destinations(sq("e1")).contains(&sq("g1")));
    assert!(!board.legal_destinations(sq("e1")).contains(&sq("g1")));
}

#[test]
fn test_cannot_castle_through_pieces_or_without_right() {
    let mut board = board_from_rows(
        [
            "....k...", "........", "........", "........", "........", "........", "........",
            "RN..K..R",
        ],
        Color::White,
    );
    board.castling_rights.remove(Color::White, true);
    let destinations = board.legal_destinations(sq("e1"));
    assert!(!destinations.contains(&sq("c1")));
    assert!(!destinations.contains(&sq("g1")));
}

#[test]
fn test_rook_move_revokes_one_side() {
    let mut board = castling_board([
        "....k...", "........", "........", "........", "........", "........", "........",
    ]);
    board.make_move(mv("h1h2"));
    board.make_move(mv("e8d8"));
    board.make_move(mv("h2h1"));
    board.make_move(mv("d8e8"));

    assert!(!board.castling_rights().has(Color::White, true));
    assert!(board.castling_rights().has(Color::White, false));
    assert!(!board.legal_destinations(sq("e1")).contains(&sq("g1")));
}

#[test]
fn test_rook_captured_on_home_square_revokes_right() {
    let mut board = board_from_rows(
        [
            "....k...", "........", "........", "........", "........", "......n.", "........",
            "R...K..R",
        ],
        Color::Black,
    );
    assert!(board.castling_rights().has(Color::White, true));
    board.make_move(mv("g3h1"));
    assert!(!board.castling_rights().has(Color::White, true));
    assert!(board.castling_rights().has(Color::White, false));
}

#[test]
fn test_en_passant_removes_pawn_behind_target() {
    let mut board = board_from_rows(
        [
            "....k...", "....p...", "........", "...P....", "........", "........", "........",
            "....K...",
        ],
        Color::Black,
    );
    board.make_move(mv("e7e5"));
    assert_eq!(board.en_passant_target(), Some(sq("e6")));

    let destinations = board.legal_destinations(sq("d5"));
    assert!(destinations.contains(&sq("e6")));

    let info = board.make_move(mv("d5e6"));
    assert_eq!(info.captured(), Some((Color::Black, Piece::Pawn)));
    assert!(board.is_empty(sq("e5")), "captured pawn should be removed from e5");
    assert_eq!(board.piece_at(sq("e6")), Some((Color::White, Piece::Pawn)));
    assert_eq!(board.en_passant_target(), None);
}

#[test]
fn test_en_passant_expires_after_one_move() {
    let mut board = board_from_rows(
        [
            "....k...", "....p...", "........", "...P....", "........", "........", "........",
            "....K...",
        ],
        Color::Black,
    );
    board.make_move(mv("e7e5"));
    board.make_move(mv("e1e2"));
    board.make_move(mv("e8e7"));
    assert_eq!(board.en_passant_target(), None);
    assert!(!board.legal_destinations(sq("d5")).contains(&sq("e6")));
}

#[test]
fn test_en_passant_illegal_when_it_exposes_king() {
    // Capturing en passant would empty the fifth rank between king and rook.
    let mut board = board_from_rows(
        [
            "....k...", "..p.....", "........", "KP.....r", "........", "........", "........",
            "........",
        ],
        Color::Black,
    );
    board.make_move(mv("c7c5"));
    let destinations = board.legal_destinations(sq("b5"));
    assert!(board.pseudo_legal_destinations(sq("b5")).contains(&sq("c6")));
    assert!(!destinations.contains(&sq("c6")));
    assert!(destinations.contains(&sq("b6")));
}

#[test]
fn test_promotion_defaults_to_queen() {
    let mut board = board_from_rows(
        [
            "........", "P.......", "........", "........", "........", "........", "........",
            "K.k.....",
        ],
        Color::White,
    );
    assert_eq!(board.legal_destinations(sq("a7")), vec![sq("a8")]);
    board.make_move(mv("a7a8"));
    assert_eq!(board.piece_at(sq("a8")), Some((Color::White, Piece::Queen)));
}

#[test]
fn test_underpromotion_to_knight() {
    let mut board = board_from_rows(
        [
            "........", "P.......", "........", "........", "........", "........", "........",
            "K.k.....",
        ],
        Color::White,
    );
    board.make_move(Move::with_promotion(sq("a7"), sq("a8"), Piece::Knight));
    assert_eq!(board.piece_at(sq("a8")), Some((Color::White, Piece::Knight)));
}

#[test]
fn test_black_promotes_on_row_seven() {
    let mut board = board_from_rows(
        [
            "k.......", "........", "........", "........", "........", "........", ".......p",
            "...K....",
        ],
        Color::Black,
    );
    board.make_move(mv("h2h1"));
    assert_eq!(board.piece_at(sq("h1")), Some((Color::Black, Piece::Queen)));
}

#[test]
fn test_pinned_piece_cannot_move() {
    let mut board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("e2"), Color::White, Piece::Bishop)
        .piece(sq("e8"), Color::Black, Piece::Rook)
        .piece(sq("a8"), Color::Black, Piece::King)
        .build();
    assert!(!board.pseudo_legal_destinations(sq("e2")).is_empty());
    assert!(board.legal_destinations(sq("e2")).is_empty());
}

#[test]
fn test_pawn_push_is_not_an_attack() {
    let board = BoardBuilder::new()
        .piece(sq("e4"), Color::White, Piece::Pawn)
        .build();
    assert!(!board.can_attack(sq("e4"), sq("e5")));
    assert!(board.can_attack(sq("e4"), sq("d5")));
    assert!(board.can_attack(sq("e4"), sq("f5")));
    assert!(!board.can_attack(sq("e4"), sq("d3")));
}

#[test]
fn test_path_clear() {
    let board = Board::new();
    assert!(!board.path_clear(sq("a1"), sq("a3")));
    assert!(board.path_clear(sq("a2"), sq("a7")));
    assert!(board.path_clear(sq("a3"), sq("h3")));
    assert!(board.path_clear(sq("c1"), sq("d2")));
    assert!(!board.path_clear(sq("c1"), sq("e3")));
}

#[test]
fn test_destinations_in_scan_order() {
    let mut board = Board::new();
    assert_eq!(
        board.legal_destinations(sq("g1")),
        vec![sq("f3"), sq("h3")]
    );
    assert_eq!(
        board.legal_destinations(sq("e2")),
        vec![sq("e4"), sq("e3")]
    );
    assert!(board.legal_destinations(Square(4, 4)).is_empty());
}

#[test]
fn test_stalemate_position() {
    let mut board = board_from_rows(
        [
            ".......k", ".....Q..", "......K.", "........", "........", "........", "........",
            "........",
        ],
        Color::Black,
    );
    assert_eq!(board.status(), GameStatus::Stalemate);
    assert!(board.all_legal_moves(Color::Black).is_empty());
}

#[test]
fn test_lone_king_stalemate() {
    let mut board = board_from_rows(
        [
            "k.......", "........", "........", "........", "........", "......q.", "........",
            ".......K",
        ],
        Color::White,
    );
    assert!(!board.is_in_check(Color::White));
    assert!(board.is_stalemate());
}

#[test]
fn test_back_rank_checkmate() {
    let mut board = board_from_rows(
        [
            "R.....k.", ".....ppp", "........", "........", "........", "........", "........",
            "......K.",
        ],
        Color::Black,
    );
    assert!(board.is_in_check(Color::Black));
    assert_eq!(board.status(), GameStatus::Checkmate);
}

#[test]
fn test_check_with_escape() {
    let mut board = board_from_rows(
        [
            "R.....k.", ".....pp.", "........", "........", "........", "........", "........",
            "......K.",
        ],
        Color::Black,
    );
    assert_eq!(board.status(), GameStatus::Check);
}
