use super::super::{Board, Square};

impl Board {
    /// Returns true iff every square strictly between `from` and `to` is empty.
    ///
    /// The squares must share a rank, file or diagonal; for any other pair
    /// the walk stops after the longer of the two deltas and the answer is
    /// meaningless.
    #[must_use]
    pub fn path_clear(&self, from: Square, to: Square) -> bool {
        let (dr, dc) = from.delta_to(to);
        debug_assert!(
            dr == 0 || dc == 0 || dr.abs() == dc.abs(),
            "path_clear called for a non-aligned pair {from} -> {to}"
        );
        let steps = dr.abs().max(dc.abs());
        let (step_r, step_c) = (dr.signum(), dc.signum());

        (1..steps).all(|i| match from.offset(step_r * i, step_c * i) {
            Some(sq) => self.is_empty(sq),
            None => false,
        })
    }

    pub(crate) fn bishop_pattern(&self, from: Square, to: Square) -> bool {
        let (dr, dc) = from.delta_to(to);
        dr != 0 && dr.abs() == dc.abs() && self.path_clear(from, to)
    }

    pub(crate) fn rook_pattern(&self, from: Square, to: Square) -> bool {
        let (dr, dc) = from.delta_to(to);
        (dr == 0) != (dc == 0) && self.path_clear(from, to)
    }

    pub(crate) fn queen_pattern(&self, from: Square, to: Square) -> bool {
        self.rook_pattern(from, to) || self.bishop_pattern(from, to)
    }
}
