//! Fixed-depth negamax search with alpha-beta pruning and a quiescence
//! extension at the leaves.
//!
//! There is no transposition table, no iterative deepening and no time
//! control; the depth argument is the only bound on runtime. Terminal
//! positions are discovered one ply late through generation failure and
//! scored at [`MATE_SCORE`]. A stalemated side, whose every move also walks
//! into king capture, scores exactly like a mated one; the two are not
//! distinguished.

use super::movegen::GenMode;
use super::state::Board;
use super::types::{Move, Side, Square};

/// Score magnitude standing for "a king was just found capturable". It is
/// returned identically no matter whose king it was; the negamax sign flip
/// at each level alone decides which side it favors as it propagates to the
/// root.
pub const MATE_SCORE: i32 = 10_000;

/// Context for one search invocation over one board.
///
/// Owns the board mutably for the duration of the search; the strict
/// apply/undo pairing inside guarantees the board comes back in the state
/// it went in.
pub struct Search<'a> {
    board: &'a mut Board,
    /// Best root move observed so far; see [`search`](Search::search) for
    /// the update rule.
    pub best_move: Option<Move>,
    /// Nodes visited, quiescence included.
    pub nodes: u64,
}

impl<'a> Search<'a> {
    pub fn new(board: &'a mut Board) -> Search<'a> {
        Search {
            board,
            best_move: None,
            nodes: 0,
        }
    }

    /// Negamax alpha-beta to `depth` plies, then quiescence.
    ///
    /// Returns the score from `side`'s point of view; a return at
    /// [`MATE_SCORE`] magnitude means the game ends inside the horizon.
    /// `best_move` is rewritten on every iteration of the move loop and
    /// settles on the alpha-raising move once one exists, so a caller gets
    /// some move back even from a lost position. Cutoffs return `beta`
    /// (fail-hard).
    pub fn search(
        &mut self,
        side: Side,
        en_passant: Option<Square>,
        mut alpha: i32,
        beta: i32,
        depth: u32,
    ) -> i32 {
        if depth == 0 {
            return self.quiesce(side, en_passant, alpha, beta);
        }
        self.nodes += 1;

        let Ok(mut moves) = self.board.generate_moves(side, en_passant, GenMode::All) else {
            return MATE_SCORE;
        };
        moves.sort_by_eval_desc();

        let old_alpha = alpha;
        let mut best = None;
        for &m in &moves {
            self.board.apply_move(side, &m);
            let score = -self.search(side.opponent(), m.skip_square, -beta, -alpha, depth - 1);
            self.board.undo_move(side, &m);

            self.best_move = Some(m);

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
                best = Some(m);
            }
        }
        if alpha != old_alpha {
            self.best_move = best;
        }
        alpha
    }

    /// Captures-only extension run at the horizon. Stand-pat first, then
    /// capture chains until they run dry; there is no depth cap beyond
    /// material exhaustion.
    fn quiesce(&mut self, side: Side, en_passant: Option<Square>, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;

        let stand_pat = self.board.evaluate(side);
        if stand_pat >= beta {
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let Ok(mut moves) = self
            .board
            .generate_moves(side, en_passant, GenMode::CapturesOnly)
        else {
            return MATE_SCORE;
        };
        moves.sort_by_eval_desc();

        for &m in &moves {
            self.board.apply_move(side, &m);
            let score = -self.quiesce(side.opponent(), m.skip_square, -beta, -alpha);
            self.board.undo_move(side, &m);

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }
        alpha
    }
}
