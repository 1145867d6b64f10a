//! The two players.

use std::fmt;
use std::ops::Not;

use crate::square::Square;

/// A player: `Lower` moves on even turn counts, `Upper` on odd.
///
/// Piece letters are lowercased for `Lower` and uppercased for `Upper` at
/// the text boundary; internally the owner is always this explicit enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Lower = 0,
    Upper = 1,
}

impl Color {
    /// Total number of players.
    pub const COUNT: usize = 2;

    /// Both players in index order.
    pub const ALL: [Color; 2] = [Color::Lower, Color::Upper];

    /// Return the index (0 for Lower, 1 for Upper).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposing player.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::Lower => Color::Upper,
            Color::Upper => Color::Lower,
        }
    }

    /// Return the promotion-zone column: the farthest column from this
    /// player's home side (4 for Lower, 0 for Upper).
    #[inline]
    pub const fn promotion_col(self) -> u8 {
        match self {
            Color::Lower => Square::SIZE - 1,
            Color::Upper => 0,
        }
    }

    /// Apply this player's case convention to a piece letter.
    #[inline]
    pub fn apply_case(self, c: char) -> char {
        match self {
            Color::Lower => c.to_ascii_lowercase(),
            Color::Upper => c.to_ascii_uppercase(),
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Lower => write!(f, "lower"),
            Color::Upper => write!(f, "UPPER"),
        }
    }
}
