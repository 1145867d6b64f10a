//! Board squares on the 5×5 grid.

use std::fmt;

/// A square on the 5×5 board, encoded as a `u8`.
///
/// Index = row * 5 + col. Rows are the letter axis (`a`..`e`), columns the
/// digit axis (`1`..`5`), so a1 = 0, a2 = 1, ..., e5 = 24. Index order is
/// ascending letter-digit order, which the check reporting relies on.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Board side length.
    pub const SIZE: u8 = 5;

    /// Total number of squares.
    pub const COUNT: usize = 25;

    /// Create a square from a row and column, both in `0..5`.
    ///
    /// # Panics
    ///
    /// Debug-asserts that both coordinates are in range.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Square {
        debug_assert!(row < Square::SIZE && col < Square::SIZE);
        Square(row * Square::SIZE + col)
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < Square::COUNT as u8 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parse a letter-digit string (e.g. "a1") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let row_byte = bytes[0];
        let col_byte = bytes[1];

        if !(b'a'..=b'e').contains(&row_byte) || !(b'1'..=b'5').contains(&col_byte) {
            return None;
        }

        Some(Square::new(row_byte - b'a', col_byte - b'1'))
    }

    /// Return the zero-based index (0..24).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (letter axis, 0 = `a`).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / Square::SIZE
    }

    /// Return the column (digit axis, 0 = `1`).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % Square::SIZE
    }

    /// Step by a (row, col) delta, returning `None` if the result leaves the board.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row() as i8 + dr;
        let col = self.col() as i8 + dc;
        if (0..Square::SIZE as i8).contains(&row) && (0..Square::SIZE as i8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Iterate over all 25 squares in index order (a1, a2, ..., e5).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..Square::COUNT as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.row()) as char,
            (b'1' + self.col()) as char
        )
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
