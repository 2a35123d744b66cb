//! Applying and reversing moves.
//!
//! The pair is the only thing that writes to a board after construction.
//! `undo_move(apply_move(board, m), m)` restores the board bit for bit for
//! every move the generator produces, virgin flags and all. That is the invariant
//! the whole search rests on.

use super::movegen::reaches_promotion_rank;
use super::state::Board;
use super::types::{Move, Piece, PieceKind, Side};

impl Board {
    /// Apply `m` for `side`.
    ///
    /// Every apply must be matched by exactly one [`undo_move`] with the
    /// same arguments before control returns to whoever issued it, so the
    /// board always reflects the path from the root to the current node.
    ///
    /// [`undo_move`]: Board::undo_move
    pub fn apply_move(&mut self, side: Side, m: &Move) {
        if let Some(rook) = m.rook_square {
            self.clear(rook);
        }
        self.clear(m.captured_square);
        self.clear(m.from);
        self.set(m.to, m.piece.moved());

        // castling: the rook lands on the king's transit square
        if m.rook_square.is_some() {
            if let Some(skip) = m.skip_square {
                self.set(skip, Piece::new(PieceKind::Rook, side));
            }
        }

        if m.piece.kind.is_pawn() && reaches_promotion_rank(m.to, m.step) {
            if let Some(kind) = m.promotion {
                self.set(m.to, Piece::new(kind, side));
            }
        }
    }

    /// Exact inverse of [`apply_move`](Board::apply_move).
    ///
    /// The stored piece codes carry the virgin flags, so a king or rook
    /// that castled or moved gets its flag back along with its square. A
    /// castling rook is restored virgin: only a virgin rook can have
    /// castled in the first place.
    pub fn undo_move(&mut self, side: Side, m: &Move) {
        if let Some(rook) = m.rook_square {
            self.set(rook, Piece::virgin(PieceKind::Rook, side));
        }
        if let Some(skip) = m.skip_square {
            self.clear(skip);
        }
        self.clear(m.to);
        self.set(m.from, m.piece);
        match m.captured {
            Some(piece) => self.set(m.captured_square, piece),
            None => self.clear(m.captured_square),
        }
    }
}
