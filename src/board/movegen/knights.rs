use super::super::attack_tables::{bit_for_square, KNIGHT_ATTACKS};
use super::super::{Board, Square};

impl Board {
    pub(crate) fn knight_pattern(&self, from: Square, to: Square) -> bool {
        KNIGHT_ATTACKS[from.as_index()] & bit_for_square(to) != 0
    }
}
