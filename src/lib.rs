//! quince: a small fixed-depth chess engine.
//!
//! The core holds a position on a padded 0x88 board, generates pseudo-legal
//! moves (castling, en passant and promotion included), mutates the board
//! through an exactly reversible apply/undo pair, evaluates positions with
//! material plus an interleaved positional bonus table, and searches to a
//! fixed depth with negamax, alpha-beta pruning and a captures-only
//! quiescence extension. A thin command-line loop in [`cli`] plays the
//! engine against a human.

pub mod board;
pub mod cli;

pub use board::{
    Board, BoardBuilder, GenMode, KingCapturable, Move, MoveList, MoveParseError, Piece,
    PieceKind, Search, Side, Square, SquareError, MATE_SCORE,
};
