//! Static evaluation tests.

use super::{find_move, sq};
use crate::board::{Board, BoardBuilder, Piece, PieceKind, Side};

#[test]
fn test_start_position_is_balanced() {
    let board = Board::new();
    assert_eq!(board.evaluate(Side::White), 0);
    assert_eq!(board.evaluate(Side::Black), 0);
}

#[test]
fn test_material_and_bonus_add_up() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Piece::new(PieceKind::King, Side::White))
        .piece(sq("e8"), Piece::new(PieceKind::King, Side::Black))
        .piece(sq("d5"), Piece::new(PieceKind::Queen, Side::White))
        .build();
    // queen 900 on a +30 square; the kings' -5 home squares cancel out
    assert_eq!(board.evaluate(Side::White), 930);
    assert_eq!(board.evaluate(Side::Black), -930);
}

#[test]
fn test_advancing_toward_center_gains_bonus() {
    let mut board = Board::new();
    let m = find_move(&mut board, Side::White, None, "e2e4");
    board.apply_move(Side::White, &m);
    // e2 carries no bonus, e4 carries 30
    assert_eq!(board.evaluate(Side::White), 30);
    assert_eq!(board.evaluate(Side::Black), -30);
    board.undo_move(Side::White, &m);
    assert_eq!(board.evaluate(Side::White), 0);
}

#[test]
fn test_virgin_flag_does_not_affect_score() {
    let virgin = BoardBuilder::new()
        .piece(sq("a1"), Piece::virgin(PieceKind::Rook, Side::White))
        .piece(sq("e1"), Piece::virgin(PieceKind::King, Side::White))
        .piece(sq("e8"), Piece::new(PieceKind::King, Side::Black))
        .build();
    let moved = BoardBuilder::new()
        .piece(sq("a1"), Piece::new(PieceKind::Rook, Side::White))
        .piece(sq("e1"), Piece::new(PieceKind::King, Side::White))
        .piece(sq("e8"), Piece::new(PieceKind::King, Side::Black))
        .build();
    assert_eq!(virgin.evaluate(Side::White), moved.evaluate(Side::White));
}

#[test]
fn test_both_pawn_kinds_weigh_the_same() {
    let white_pawn = BoardBuilder::new()
        .piece(sq("e1"), Piece::new(PieceKind::King, Side::White))
        .piece(sq("e8"), Piece::new(PieceKind::King, Side::Black))
        .piece(sq("a4"), Piece::new(PieceKind::PawnUp, Side::White))
        .build();
    let black_pawn = BoardBuilder::new()
        .piece(sq("e1"), Piece::new(PieceKind::King, Side::White))
        .piece(sq("e8"), Piece::new(PieceKind::King, Side::Black))
        .piece(sq("a5"), Piece::new(PieceKind::PawnDown, Side::Black))
        .build();
    // a4 and a5 mirror each other in the bonus table
    assert_eq!(
        white_pawn.evaluate(Side::White),
        black_pawn.evaluate(Side::Black)
    );
}
