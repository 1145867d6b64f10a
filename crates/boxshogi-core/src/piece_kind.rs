//! Piece kinds: the six base kinds and their four promoted forms.

use std::fmt;

/// The kind of a piece, without owner information.
///
/// Promotion is one-directional: a base kind maps to at most one promoted
/// kind, and nothing maps a promoted kind back except capture (which strips
/// promotion via [`PieceKind::demoted`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Drive = 0,
    Shield = 1,
    Relay = 2,
    Governance = 3,
    Notes = 4,
    Pawn = 5,
    PromotedRelay = 6,
    PromotedGovernance = 7,
    PromotedNotes = 8,
    PromotedPawn = 9,
}

impl PieceKind {
    /// Total number of piece kinds, promoted forms included.
    pub const COUNT: usize = 10;

    /// All kinds in index order.
    pub const ALL: [PieceKind; 10] = [
        PieceKind::Drive,
        PieceKind::Shield,
        PieceKind::Relay,
        PieceKind::Governance,
        PieceKind::Notes,
        PieceKind::Pawn,
        PieceKind::PromotedRelay,
        PieceKind::PromotedGovernance,
        PieceKind::PromotedNotes,
        PieceKind::PromotedPawn,
    ];

    /// The six base (unpromoted) kinds in index order.
    pub const BASE: [PieceKind; 6] = [
        PieceKind::Drive,
        PieceKind::Shield,
        PieceKind::Relay,
        PieceKind::Governance,
        PieceKind::Notes,
        PieceKind::Pawn,
    ];

    /// Return the index (0..9).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the base letter for this kind (lowercase, promotion ignored).
    #[inline]
    pub const fn letter(self) -> char {
        match self.demoted() {
            PieceKind::Drive => 'd',
            PieceKind::Shield => 's',
            PieceKind::Relay => 'r',
            PieceKind::Governance => 'g',
            PieceKind::Notes => 'n',
            PieceKind::Pawn => 'p',
            // demoted() only returns base kinds
            _ => unreachable!(),
        }
    }

    /// Parse a base-kind letter (case-insensitive) into a piece kind.
    #[inline]
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'd' => Some(PieceKind::Drive),
            's' => Some(PieceKind::Shield),
            'r' => Some(PieceKind::Relay),
            'g' => Some(PieceKind::Governance),
            'n' => Some(PieceKind::Notes),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    /// Return the promoted form, or `None` if this kind cannot promote
    /// (Drive, Shield, and kinds that already are promoted).
    #[inline]
    pub const fn promoted(self) -> Option<PieceKind> {
        match self {
            PieceKind::Relay => Some(PieceKind::PromotedRelay),
            PieceKind::Governance => Some(PieceKind::PromotedGovernance),
            PieceKind::Notes => Some(PieceKind::PromotedNotes),
            PieceKind::Pawn => Some(PieceKind::PromotedPawn),
            _ => None,
        }
    }

    /// Return the base form, stripping promotion if present.
    #[inline]
    pub const fn demoted(self) -> PieceKind {
        match self {
            PieceKind::PromotedRelay => PieceKind::Relay,
            PieceKind::PromotedGovernance => PieceKind::Governance,
            PieceKind::PromotedNotes => PieceKind::Notes,
            PieceKind::PromotedPawn => PieceKind::Pawn,
            base => base,
        }
    }

    /// Return `true` for the four promoted kinds.
    #[inline]
    pub const fn is_promoted(self) -> bool {
        (self as u8) >= (PieceKind::PromotedRelay as u8)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_promoted() {
            write!(f, "+{}", self.letter())
        } else {
            write!(f, "{}", self.letter())
        }
    }
}
