//! A set of board squares backed by a 32-bit integer, one bit per square.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use crate::square::Square;

/// A set over the 25 board squares, one bit per square index.
///
/// Bits 25..32 are always clear. Iteration yields squares in ascending
/// index order, i.e. ascending letter-digit order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(u32);

impl SquareSet {
    /// Mask of the 25 valid square bits.
    const MASK: u32 = (1 << Square::COUNT) - 1;

    /// Empty set.
    pub const EMPTY: SquareSet = SquareSet(0);

    /// All 25 squares.
    pub const FULL: SquareSet = SquareSet(Self::MASK);

    /// Return `true` if no squares are in the set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Count the squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return `true` if the given square is in the set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u32 << sq.index())) != 0
    }

    /// Return a new set with the given square added.
    #[inline]
    pub const fn with(self, sq: Square) -> SquareSet {
        SquareSet(self.0 | (1u32 << sq.index()))
    }

    /// Return a new set with the given square removed.
    #[inline]
    pub const fn without(self, sq: Square) -> SquareSet {
        SquareSet(self.0 & !(1u32 << sq.index()))
    }

    /// Add a square in place.
    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u32 << sq.index();
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> SquareSet {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

// --- Operator impls ---

impl BitAnd for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn bitand(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 & rhs.0)
    }
}

impl BitAndAssign for SquareSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: SquareSet) {
        self.0 &= rhs.0;
    }
}

impl BitOr for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn bitor(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: SquareSet) {
        self.0 |= rhs.0;
    }
}

impl Not for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn not(self) -> SquareSet {
        SquareSet(!self.0 & Self::MASK)
    }
}

// --- Iterator ---

impl Iterator for SquareSet {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let index = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Square::from_index(index)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for SquareSet {}

// --- Debug (5x5 grid) ---

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for col in (0..Square::SIZE).rev() {
            write!(f, "  {} ", col + 1)?;
            for row in 0..Square::SIZE {
                if self.contains(Square::new(row, col)) {
                    write!(f, "1 ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "    a b c d e")
    }
}

#[cfg(test)]
mod tests {
    use super::SquareSet;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn empty_and_full() {
        assert!(SquareSet::EMPTY.is_empty());
        assert!(!SquareSet::FULL.is_empty());
        assert_eq!(SquareSet::FULL.count(), 25);
        assert_eq!(!SquareSet::EMPTY, SquareSet::FULL);
        assert_eq!(!SquareSet::FULL, SquareSet::EMPTY);
    }

    #[test]
    fn with_contains_without() {
        let set = SquareSet::EMPTY.with(sq("c3"));
        assert!(set.contains(sq("c3")));
        assert!(!set.contains(sq("c4")));
        assert_eq!(set.count(), 1);

        let cleared = set.without(sq("c3"));
        assert!(cleared.is_empty());
    }

    #[test]
    fn not_stays_within_board() {
        let inverted = !SquareSet::EMPTY.with(sq("a1"));
        assert_eq!(inverted.count(), 24);
        assert!(!inverted.contains(sq("a1")));
        for square in inverted {
            assert!(square.index() < 25);
        }
    }

    #[test]
    fn union_and_intersection() {
        let a = SquareSet::EMPTY.with(sq("a1")).with(sq("b2"));
        let b = SquareSet::EMPTY.with(sq("b2")).with(sq("c3"));
        assert_eq!((a | b).count(), 3);
        assert_eq!((a & b).count(), 1);
        assert!((a & b).contains(sq("b2")));
    }

    #[test]
    fn iterator_ascending_order() {
        let set = SquareSet::EMPTY
            .with(sq("e5"))
            .with(sq("a1"))
            .with(sq("c3"));
        let squares: Vec<_> = set.collect();
        assert_eq!(squares, vec![sq("a1"), sq("c3"), sq("e5")]);
    }

    #[test]
    fn from_iterator() {
        let set: SquareSet = [sq("a1"), sq("a1"), sq("d4")].into_iter().collect();
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn exact_size() {
        let set = SquareSet::EMPTY.with(sq("a1")).with(sq("b1"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(SquareSet::default(), SquareSet::EMPTY);
    }
}
