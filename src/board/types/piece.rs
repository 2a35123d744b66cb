//! Piece, side and kind types.
//!
//! Pieces are stored in board cells as small integer codes: the kind in the
//! low three bits, one of two disjoint side bits above it, and a "virgin"
//! bit recording that a king or rook has never moved. The types here are
//! tagged values over that encoding so generation and evaluation never do
//! raw bit arithmetic themselves.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two sides.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Both sides in index order.
    pub const BOTH: [Side; 2] = [Side::White, Side::Black];

    /// Bit this side contributes to a stored piece code.
    #[inline]
    pub(crate) const fn mask(self) -> i16 {
        match self {
            Side::White => 8,
            Side::Black => 16,
        }
    }

    /// The opposing side.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Scoring sign: evaluation sums are White-positive.
    #[inline]
    pub(crate) const fn sign(self) -> i32 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// The pawn kind that marches in this side's direction of play.
    #[inline]
    #[must_use]
    pub const fn pawn(self) -> PieceKind {
        match self {
            Side::White => PieceKind::PawnUp,
            Side::Black => PieceKind::PawnDown,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Piece kinds.
///
/// Pawns come in two kinds, one per direction of travel, so generation reads
/// the forward direction out of the kind instead of branching on color:
/// `PawnUp` marches toward rank 8 (White's pawn), `PawnDown` toward rank 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    PawnUp,
    PawnDown,
    King,
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PieceKind {
    /// Kind code stored in the low three bits of a cell; 0 means empty.
    #[inline]
    pub(crate) const fn code(self) -> i16 {
        match self {
            PieceKind::PawnUp => 1,
            PieceKind::PawnDown => 2,
            PieceKind::King => 3,
            PieceKind::Knight => 4,
            PieceKind::Bishop => 5,
            PieceKind::Rook => 6,
            PieceKind::Queen => 7,
        }
    }

    #[inline]
    pub(crate) const fn from_code(code: i16) -> Option<PieceKind> {
        match code {
            1 => Some(PieceKind::PawnUp),
            2 => Some(PieceKind::PawnDown),
            3 => Some(PieceKind::King),
            4 => Some(PieceKind::Knight),
            5 => Some(PieceKind::Bishop),
            6 => Some(PieceKind::Rook),
            7 => Some(PieceKind::Queen),
            _ => None,
        }
    }

    /// Returns true for either pawn kind.
    #[inline]
    #[must_use]
    pub const fn is_pawn(self) -> bool {
        matches!(self, PieceKind::PawnUp | PieceKind::PawnDown)
    }

    /// Sliding pieces repeat a ray step until blocked.
    #[inline]
    pub(crate) const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Step offsets on the padded grid, in generation order.
    ///
    /// Pawn rays list the two capture diagonals around the forward push;
    /// the push direction is the one with a zero file component.
    pub(crate) const fn rays(self) -> &'static [i16] {
        match self {
            PieceKind::PawnUp => &[-15, -16, -17],
            PieceKind::PawnDown => &[15, 16, 17],
            PieceKind::King | PieceKind::Queen => &[1, 16, -1, -16, 15, -15, 17, -17],
            PieceKind::Knight => &[14, -14, 18, -18, 31, -31, 33, -33],
            PieceKind::Bishop => &[15, -15, 17, -17],
            PieceKind::Rook => &[1, 16, -1, -16],
        }
    }

    /// Material weight. The king carries none; its loss is signalled through
    /// generation failure, not through material.
    #[inline]
    pub(crate) const fn weight(self) -> i32 {
        match self {
            PieceKind::PawnUp | PieceKind::PawnDown => 100,
            PieceKind::King => 0,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 350,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
        }
    }

    /// Letter used for this kind in a promotion suffix such as `g7g8q`.
    #[inline]
    pub(crate) const fn promotion_char(self) -> Option<char> {
        match self {
            PieceKind::Knight => Some('n'),
            PieceKind::Bishop => Some('b'),
            PieceKind::Rook => Some('r'),
            PieceKind::Queen => Some('q'),
            _ => None,
        }
    }

    /// Board letter, uppercase for White.
    #[must_use]
    pub const fn to_char(self, side: Side) -> char {
        let c = match self {
            PieceKind::PawnUp | PieceKind::PawnDown => 'p',
            PieceKind::King => 'k',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
        };
        match side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }
}

/// Promotion choices in the order the generator emits them.
pub(crate) const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// A piece as stored in a board cell: kind, side, and the virgin flag that
/// records whether a king or rook has ever moved (castling eligibility).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub virgin: bool,
}

impl Piece {
    /// A piece without the virgin flag.
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, side: Side) -> Piece {
        Piece {
            kind,
            side,
            virgin: false,
        }
    }

    /// A piece carrying the virgin flag, as kings and rooks start out.
    #[inline]
    #[must_use]
    pub const fn virgin(kind: PieceKind, side: Side) -> Piece {
        Piece {
            kind,
            side,
            virgin: true,
        }
    }

    /// Cell code for this piece.
    #[inline]
    pub(crate) const fn code(self) -> i16 {
        self.kind.code() | self.side.mask() | if self.virgin { 32 } else { 0 }
    }

    /// Decode a cell code; 0 (and anything without a side bit) is empty.
    #[inline]
    pub(crate) const fn from_code(code: i16) -> Option<Piece> {
        let kind = match PieceKind::from_code(code & 7) {
            Some(kind) => kind,
            None => return None,
        };
        let side = if code & 8 != 0 {
            Side::White
        } else if code & 16 != 0 {
            Side::Black
        } else {
            return None;
        };
        Some(Piece {
            kind,
            side,
            virgin: code & 32 != 0,
        })
    }

    /// The same piece with its virgin flag cleared, as placed after moving.
    #[inline]
    pub(crate) const fn moved(self) -> Piece {
        Piece {
            virgin: false,
            ..self
        }
    }

    /// Board letter, uppercase for White.
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        self.kind.to_char(self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for side in Side::BOTH {
            for kind in [
                PieceKind::PawnUp,
                PieceKind::PawnDown,
                PieceKind::King,
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Rook,
                PieceKind::Queen,
            ] {
                for piece in [Piece::new(kind, side), Piece::virgin(kind, side)] {
                    assert_eq!(Piece::from_code(piece.code()), Some(piece));
                }
            }
        }
    }

    #[test]
    fn test_empty_cell_decodes_to_none() {
        assert_eq!(Piece::from_code(0), None);
    }

    #[test]
    fn test_start_codes_match_encoding_boundaries() {
        // kind | side | virgin, as the cell layout fixes them
        assert_eq!(Piece::new(PieceKind::PawnUp, Side::White).code(), 9);
        assert_eq!(Piece::new(PieceKind::PawnDown, Side::Black).code(), 18);
        assert_eq!(Piece::virgin(PieceKind::King, Side::White).code(), 43);
        assert_eq!(Piece::virgin(PieceKind::Rook, Side::Black).code(), 54);
    }

    #[test]
    fn test_moved_strips_only_virginity() {
        let rook = Piece::virgin(PieceKind::Rook, Side::White);
        let moved = rook.moved();
        assert!(!moved.virgin);
        assert_eq!(moved.kind, rook.kind);
        assert_eq!(moved.side, rook.side);
    }
}
