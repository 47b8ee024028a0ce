use once_cell::sync::Lazy;

use super::Square;

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| step_masks(&KNIGHT_DELTAS));

pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| step_masks(&KING_DELTAS));

fn step_masks(deltas: &[(isize, isize)]) -> [u64; 64] {
    let mut attacks = [0u64; 64];
    for (idx, mask) in attacks.iter_mut().enumerate() {
        let from = Square::from_index(idx);
        for &(dr, dc) in deltas {
            if let Some(to) = from.offset(dr, dc) {
                *mask |= bit_for_square(to);
            }
        }
    }
    attacks
}

#[inline]
pub(crate) fn bit_for_square(sq: Square) -> u64 {
    1u64 << sq.as_index()
}
