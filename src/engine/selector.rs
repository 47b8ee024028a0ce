//! One-ply heuristic move scoring and selection for the automated side.
//!
//! A move scores `10 * value(captured) + (7 - distance to center)`, plus a
//! development bonus for moves leaving row 0 or row 7 while the game is
//! still inside its opening window. `GreedyBest` additionally rewards
//! moves that give check. There is no lookahead beyond that.

use log::trace;
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Move, Square};

/// Multiplier applied to the value of the captured piece.
pub const CAPTURE_WEIGHT: i32 = 10;
/// Added to a move that leaves the opponent in check (`GreedyBest` only).
pub const CHECK_BONUS: i32 = 50;
/// Added to back-rank moves inside the opening window.
pub const DEVELOPMENT_BONUS: i32 = 2;

/// `7 - (|3.5 - row| + |3.5 - col|)`; the sum of two half-integers is whole.
static CENTER_BONUS: Lazy<[i32; 64]> = Lazy::new(|| {
    let mut table = [0; 64];
    for sq in Square::all() {
        let row_dist = (2 * sq.row() as i32 - 7).abs();
        let col_dist = (2 * sq.col() as i32 - 7).abs();
        table[sq.as_index()] = 7 - (row_dist + col_dist) / 2;
    }
    table
});

/// How the automated side picks among its legal moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectionPolicy {
    /// Any legal move with equal probability.
    UniformRandom,
    /// Uniformly among the `k` best-scoring moves.
    TopKRandom(usize),
    /// The single best-scoring move with the check bonus, first on ties.
    GreedyBest,
}

#[derive(Clone, Copy, Debug)]
pub struct HeuristicSelector {
    move_count: u32,
    opening_window: u32,
}

impl HeuristicSelector {
    #[must_use]
    pub const fn new(move_count: u32, opening_window: u32) -> Self {
        HeuristicSelector {
            move_count,
            opening_window,
        }
    }

    /// Score `mv` against the position before it is played.
    #[must_use]
    pub fn evaluate_move(&self, board: &Board, mv: Move) -> i32 {
        let mut score = board
            .piece_on(mv.to())
            .map_or(0, |piece| piece.value() * CAPTURE_WEIGHT);

        score += CENTER_BONUS[mv.to().as_index()];

        if self.move_count < self.opening_window {
            let row = mv.from().row();
            if row == 0 || row == 7 {
                score += DEVELOPMENT_BONUS;
            }
        }
        score
    }

    /// Bonus for a move that leaves the opponent's king attacked.
    fn check_bonus(board: &mut Board, mv: Move) -> i32 {
        let Some(mover) = board.color_on(mv.from()) else {
            return 0;
        };
        let info = board.make_move(mv);
        let gives_check = board.is_in_check(mover.opponent());
        board.unmake_move(mv, info);
        if gives_check {
            CHECK_BONUS
        } else {
            0
        }
    }

    /// Moves paired with their scores, best first. Equal scores keep
    /// their input order.
    pub fn ranked(&self, board: &Board, moves: &[Move]) -> Vec<(Move, i32)> {
        let mut scored: Vec<(Move, i32)> = moves
            .iter()
            .map(|&mv| (mv, self.evaluate_move(board, mv)))
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored
    }

    /// Highest-scoring move without the check bonus, first on ties.
    #[must_use]
    pub fn best(&self, board: &Board, moves: &[Move]) -> Option<Move> {
        self.ranked(board, moves).first().map(|&(mv, _)| mv)
    }

    /// Pick a move from `moves` under `policy`. `None` only when `moves`
    /// is empty.
    pub fn select<R: Rng + ?Sized>(
        &self,
        board: &mut Board,
        moves: &[Move],
        policy: SelectionPolicy,
        rng: &mut R,
    ) -> Option<Move> {
        match policy {
            SelectionPolicy::UniformRandom => moves.choose(rng).copied(),
            SelectionPolicy::TopKRandom(k) => {
                let ranked = self.ranked(board, moves);
                let top = &ranked[..k.max(1).min(ranked.len())];
                for (mv, score) in top {
                    trace!("top-k candidate {mv} scores {score}");
                }
                top.choose(rng).map(|&(mv, _)| mv)
            }
            SelectionPolicy::GreedyBest => {
                let mut best: Option<(Move, i32)> = None;
                for &mv in moves {
                    let score = self.evaluate_move(board, mv) + Self::check_bonus(board, mv);
                    trace!("greedy candidate {mv} scores {score}");
                    if best.map_or(true, |(_, best_score)| score > best_score) {
                        best = Some((mv, score));
                    }
                }
                best.map(|(mv, _)| mv)
            }
        }
    }
}
