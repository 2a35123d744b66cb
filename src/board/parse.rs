//! Textual move input.

use super::error::MoveParseError;
use super::movegen::GenMode;
use super::state::Board;
use super::types::{Move, Side, Square};

impl Board {
    /// Match a `<file><rank><file><rank>[nbrq]` string such as `e2e4`,
    /// `e1g1` or `g7g8q` against the moves available to `side`.
    ///
    /// A promotion move is only matched when the trailing letter names its
    /// promotion piece; a four-character string never selects a promotion.
    /// Anything that matches no generated move (including any input while
    /// the position is terminal) is an illegal move, not a panic.
    pub fn parse_move(
        &mut self,
        side: Side,
        en_passant: Option<Square>,
        text: &str,
    ) -> Result<Move, MoveParseError> {
        let text = text.trim();
        let chars: Vec<char> = text.chars().collect();
        if chars.len() < 4 || chars.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }
        let invalid_square = || MoveParseError::InvalidSquare {
            notation: text.to_string(),
        };
        let from: Square = chars[0..2]
            .iter()
            .collect::<String>()
            .parse()
            .map_err(|_| invalid_square())?;
        let to: Square = chars[2..4]
            .iter()
            .collect::<String>()
            .parse()
            .map_err(|_| invalid_square())?;
        let suffix = chars.get(4).copied();

        let illegal = || MoveParseError::IllegalMove {
            notation: text.to_string(),
        };
        let Ok(moves) = self.generate_moves(side, en_passant, GenMode::All) else {
            return Err(illegal());
        };
        for &m in &moves {
            if m.from != from || m.to != to {
                continue;
            }
            match m.promotion {
                None if suffix.is_none() => return Ok(m),
                Some(kind) if suffix == kind.promotion_char() => return Ok(m),
                _ => {}
            }
        }
        Err(illegal())
    }
}
