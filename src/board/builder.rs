//! Fluent builder for constructing positions.
//!
//! Lets tests and tools set up arbitrary positions piece by piece. Virgin
//! flags travel with the pieces: pass [`Piece::virgin`] for a king or rook
//! that should still be allowed to castle.
//!
//! # Example
//! ```
//! use quince::board::{BoardBuilder, Piece, PieceKind, Side};
//!
//! let board = BoardBuilder::new()
//!     .piece("e1".parse().unwrap(), Piece::new(PieceKind::King, Side::White))
//!     .piece("e8".parse().unwrap(), Piece::new(PieceKind::King, Side::Black))
//!     .piece("a2".parse().unwrap(), Piece::new(PieceKind::PawnUp, Side::White))
//!     .build();
//! assert!(board.piece_at("a2".parse().unwrap()).is_some());
//! ```

use super::state::Board;
use super::types::{Piece, PieceKind, Side, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder holding the standard starting position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back_rank.iter().enumerate() {
            let file = file as u8;
            for side in Side::BOTH {
                let home = if side == Side::White { 0 } else { 7 };
                let piece = if matches!(kind, PieceKind::Rook | PieceKind::King) {
                    Piece::virgin(kind, side)
                } else {
                    Piece::new(kind, side)
                };
                if let Some(sq) = Square::from_file_rank(file, home) {
                    builder.pieces.push((sq, piece));
                }
            }
            for (side, rank) in [(Side::White, 1), (Side::Black, 6)] {
                if let Some(sq) = Square::from_file_rank(file, rank) {
                    builder.pieces.push((sq, Piece::new(side.pawn(), side)));
                }
            }
        }
        builder
    }

    /// Place a piece, replacing whatever the builder held on that square.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.set(square, piece);
        }
        board
    }
}
