//! A player's hand of captured pieces.

use crate::error::Violation;
use crate::piece_kind::PieceKind;

// `PieceKind::BASE` in ascending letter order (d g n p r s).
const LETTER_ORDER: [PieceKind; PieceKind::BASE.len()] = [
    PieceKind::Drive,
    PieceKind::Governance,
    PieceKind::Notes,
    PieceKind::Pawn,
    PieceKind::Relay,
    PieceKind::Shield,
];

/// A multiset of captured base-kind pieces available to drop.
///
/// Only base kinds are stored; the turn processor strips promotion before
/// a captured piece enters a hand.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Hand {
    counts: [u8; PieceKind::BASE.len()],
}

impl Hand {
    /// Most copies of one kind a hand can hold: the full piece set has one
    /// per side.
    pub const MAX_PER_KIND: u8 = 2;

    /// Return an empty hand.
    pub fn new() -> Hand {
        Hand::default()
    }

    /// Add one piece of the given kind. Promotion is stripped here as a
    /// backstop; callers normally pass base kinds already. The count
    /// saturates at [`Hand::MAX_PER_KIND`].
    pub fn add(&mut self, kind: PieceKind) {
        let slot = &mut self.counts[kind.demoted().index()];
        *slot = (*slot + 1).min(Hand::MAX_PER_KIND);
    }

    /// Number of held pieces of the given kind.
    #[inline]
    pub fn count(&self, kind: PieceKind) -> u8 {
        self.counts[kind.demoted().index()]
    }

    /// Remove one piece of the given kind, failing if none is held.
    pub fn remove(&mut self, kind: PieceKind) -> Result<(), Violation> {
        let slot = &mut self.counts[kind.demoted().index()];
        if *slot == 0 {
            return Err(Violation::NotInHand { kind });
        }
        *slot -= 1;
        Ok(())
    }

    /// Return `true` if at least one piece of the given kind is held.
    #[inline]
    pub fn contains(&self, kind: PieceKind) -> bool {
        self.counts[kind.demoted().index()] > 0
    }

    /// Return `true` if the hand holds nothing.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Total number of held pieces.
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// Iterate the distinct held kinds in ascending letter order.
    pub fn kinds(&self) -> impl Iterator<Item = PieceKind> + '_ {
        LETTER_ORDER.into_iter().filter(|k| self.contains(*k))
    }

    /// Iterate the held kinds with multiplicity, in ascending letter order.
    pub fn pieces(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.kinds()
            .flat_map(|k| std::iter::repeat_n(k, self.counts[k.index()] as usize))
    }
}
