//! Static evaluation.

use super::state::Board;
use super::types::{Side, Square};

impl Board {
    /// Static score of the position from `side`'s point of view: material
    /// weight plus the positional bonus stored beside each occupied square,
    /// summed White-positive and flipped for a Black caller. Deterministic,
    /// no side effects, one pass over the board.
    #[must_use]
    pub fn evaluate(&self, side: Side) -> i32 {
        let mut score = 0;
        for sq in Square::all() {
            let Some(piece) = self.piece_at(sq) else {
                continue;
            };
            let sign = piece.side.sign();
            score += sign * piece.kind.weight();
            score += sign * i32::from(self.bonus(sq));
        }
        score * side.sign()
    }
}
