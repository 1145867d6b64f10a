//! An owned piece: kind plus owner.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A piece on the board or in a hand: a kind owned by one of the players.
///
/// The text form is the kind letter cased by owner (lowercase = Lower,
/// uppercase = Upper), with a `+` prefix for promoted kinds, e.g. `p`,
/// `+P`, `D`. Case carries the owner only at this boundary.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    /// Create a piece from a kind and an owner.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Parse a piece token: optional `+`, then a cased kind letter.
    pub fn from_token(s: &str) -> Option<Piece> {
        let (promoted, rest) = match s.strip_prefix('+') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let mut chars = rest.chars();
        let letter = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        let base = PieceKind::from_letter(letter)?;
        let kind = if promoted { base.promoted()? } else { base };
        let color = if letter.is_ascii_uppercase() {
            Color::Upper
        } else {
            Color::Lower
        };
        Some(Piece::new(kind, color))
    }

    /// Return the two-character board cell for this piece: a space or `+`
    /// followed by the cased kind letter.
    pub fn cell(self) -> [char; 2] {
        let marker = if self.kind.is_promoted() { '+' } else { ' ' };
        [marker, self.color.apply_case(self.kind.letter())]
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_promoted() {
            write!(f, "+")?;
        }
        write!(f, "{}", self.color.apply_case(self.kind.letter()))
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Piece({})", self)
    }
}
