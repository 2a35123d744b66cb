//! Board module tests, split by category:
//! - `movegen.rs` - move generation
//! - `make_unmake.rs` - apply/undo correctness
//! - `eval.rs` - static evaluation
//! - `search.rs` - fixed-depth search
//! - `proptest.rs` - property-based tests

mod eval;

use crate::board::{Board, Move, Side, Square};

pub(crate) fn sq(notation: &str) -> Square {
    notation.parse().expect("valid square notation")
}

/// Look a move up by its text; panics if the position does not offer it.
pub(crate) fn find_move(
    board: &mut Board,
    side: Side,
    en_passant: Option<Square>,
    text: &str,
) -> Move {
    board
        .parse_move(side, en_passant, text)
        .expect("move should be available")
}
