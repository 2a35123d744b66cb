//! Board representation, move generation and search.
//!
//! The board is a padded 0x88 cell array whose spare half carries the
//! positional bonus table. Move generation is pseudo-legal; strict legality
//! is established one ply late by a king-capture signal that the search
//! turns into a terminal score. Side to move and the en passant target are
//! not board state; they are threaded through every call.
//!
//! # Example
//! ```
//! use quince::board::{Board, GenMode, Side};
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves(Side::White, None, GenMode::All).unwrap();
//! assert_eq!(moves.len(), 20);
//! ```

mod builder;
mod error;
mod eval;
mod make_unmake;
mod movegen;
mod parse;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveParseError, SquareError};
pub use movegen::{GenMode, KingCapturable};
pub use search::{Search, MATE_SCORE};
pub use state::Board;
pub use types::{Move, MoveList, Piece, PieceKind, Side, Square};
