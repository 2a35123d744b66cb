//! Pseudo-legal move generation.
//!
//! Moves obey per-piece movement rules but may leave their own king
//! capturable; strict legality is established one ply late. When the side
//! asked to move could take the opposing king outright, generation reports
//! [`KingCapturable`] instead of a list, and the search scores that node as
//! terminal. There is no separate attacked-square or pin computation.

use std::fmt;

use super::state::Board;
use super::types::{Move, MoveList, Piece, PieceKind, Side, Square, PROMOTION_KINDS};

/// Which moves a generation call should keep.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GenMode {
    All,
    CapturesOnly,
}

/// Terminal signal: the side asked to move can take the opposing king, so
/// the position it was asked about was never legal to reach.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct KingCapturable;

impl fmt::Display for KingCapturable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a king can be captured")
    }
}

/// True for ray steps with a file component; for pawns these are the
/// capture diagonals, a straight push has none.
const fn diagonal(step: i16) -> bool {
    step & 7 != 0
}

/// A pawn step that would run past the far edge if repeated has just landed
/// on the promotion rank; bit 7 of the overshot index is the same test that
/// ends ray walks.
pub(crate) fn reaches_promotion_rank(to: Square, step: i16) -> bool {
    #[allow(clippy::cast_possible_wrap)]
    let overshoot = to.index() as i16 + step + 1;
    overshoot & 0x80 != 0
}

/// After a quiet single push, a pawn standing on the third row of its march
/// may continue into a double push. Grid rows count from the top: the
/// upward pawn starts on row 6 and transits row 5, the downward one starts
/// on row 1 and transits row 2.
const fn on_double_push_transit(kind: PieceKind, to: Square) -> bool {
    match kind {
        PieceKind::PawnUp => to.row() == 5,
        PieceKind::PawnDown => to.row() == 2,
        _ => false,
    }
}

impl Board {
    /// Generate pseudo-legal moves for `side`.
    ///
    /// `en_passant` is the skip square recorded by the previous move, if
    /// any. Every candidate, even one a captures-only call then discards,
    /// is applied, statically evaluated and reverted once to obtain its
    /// ordering score, which makes generation cost one full-board
    /// evaluation per candidate. That coupling buys the search its move
    /// ordering and is the engine's dominant cost center.
    ///
    /// No ordering of the returned list is guaranteed; callers sort.
    pub fn generate_moves(
        &mut self,
        side: Side,
        en_passant: Option<Square>,
        mode: GenMode,
    ) -> Result<MoveList, KingCapturable> {
        let mut list = MoveList::new();
        for from in Square::all() {
            let Some(piece) = self.piece_at(from) else {
                continue;
            };
            if piece.side != side {
                continue;
            }
            for &step in piece.kind.rays() {
                self.walk_ray(side, en_passant, mode, from, piece, step, &mut list)?;
            }
        }
        Ok(list)
    }

    /// Walk one ray from `from`, emitting every candidate along it.
    ///
    /// Non-sliders stop after one step unless a continuation applies: a
    /// quiet pawn push from the start rank extends into a double push, and
    /// a virgin king's sideways step next to a virgin rook extends into
    /// castling. Both continuations record the transit square they skip, so
    /// the second-step candidate carries it into the move record.
    #[allow(clippy::too_many_arguments)]
    fn walk_ray(
        &mut self,
        side: Side,
        en_passant: Option<Square>,
        mode: GenMode,
        from: Square,
        piece: Piece,
        step: i16,
        list: &mut MoveList,
    ) -> Result<(), KingCapturable> {
        let kind = piece.kind;
        let mut to = from;
        let mut skip_square: Option<Square> = None;
        let mut rook_square: Option<Square> = None;

        loop {
            let Some(next) = to.offset(step) else {
                break;
            };
            to = next;

            // a diagonal pawn step onto the en passant target captures the
            // pawn beside it, not the square landed on
            let mut captured_square = to;
            if kind.is_pawn() && diagonal(step) && en_passant == Some(to) {
                captured_square = to.across_row();
            }
            let captured = self.piece_at(captured_square);

            // Defensive abort: an occupied en passant square right next to
            // the candidate target means the double-push bookkeeping can no
            // longer be trusted; give up on the whole position.
            if let Some(ep) = en_passant {
                if self.piece_at(ep).is_some() && to.index_distance(ep) < 2 {
                    return Err(KingCapturable);
                }
            }

            if captured.is_some_and(|c| c.side == side) {
                break;
            }
            // pawns capture only diagonally and push only onto empty squares
            if kind.is_pawn() && !diagonal(step) != captured.is_none() {
                break;
            }
            if captured.is_some_and(|c| c.kind == PieceKind::King) {
                return Err(KingCapturable);
            }

            let template = Move {
                from,
                to,
                piece,
                step,
                captured_square,
                captured,
                rook_square,
                skip_square,
                promotion: None,
                eval: 0,
            };
            if kind.is_pawn() && reaches_promotion_rank(to, step) {
                for promo in PROMOTION_KINDS {
                    self.emit(
                        side,
                        mode,
                        Move {
                            promotion: Some(promo),
                            ..template
                        },
                        list,
                    );
                }
            } else {
                self.emit(side, mode, template, list);
            }

            if captured.is_some() {
                break;
            }
            if kind.is_slider() {
                continue;
            }
            if kind.is_pawn()
                && !diagonal(step)
                && on_double_push_transit(kind, to)
                && skip_square.is_none()
            {
                skip_square = Some(to);
                continue;
            }
            if kind == PieceKind::King
                && piece.virgin
                && (step == 1 || step == -1)
                && rook_square.is_none()
            {
                if let Some(rook) = self.castling_rook(from, step) {
                    rook_square = Some(rook);
                    skip_square = Some(to);
                    continue;
                }
            }
            break;
        }
        Ok(())
    }

    /// Emit one candidate: probe it with an apply/undo pair to take the
    /// ordering score, then keep it if the mode wants it.
    fn emit(&mut self, side: Side, mode: GenMode, mut m: Move, list: &mut MoveList) {
        self.apply_move(side, &m);
        m.eval = self.evaluate(side);
        self.undo_move(side, &m);
        if mode == GenMode::All || m.is_capture() {
            list.push(m);
        }
    }

    /// The rook a castling continuation would move: the piece at the end of
    /// the king's row in the step direction, still carrying its virgin
    /// flag, with the two squares beside it empty. The third square between
    /// a queenside king and rook is covered by the king's own first step.
    fn castling_rook(&self, from: Square, step: i16) -> Option<Square> {
        let rook = Square::from_raw(if step == 1 {
            from.raw() | 7
        } else {
            from.raw() & !7
        });
        if !self.piece_at(rook)?.virgin {
            return None;
        }
        let beside = Square::from_raw(rook.raw() ^ 1);
        let beyond = Square::from_raw(rook.raw() ^ 2);
        if self.piece_at(beside).is_some() || self.piece_at(beyond).is_some() {
            return None;
        }
        Some(rook)
    }
}
