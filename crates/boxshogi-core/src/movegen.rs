//! Per-piece reachability: direction tables and the ray walker.
//!
//! Movement is data, not polymorphism: each kind maps to one or two
//! direction groups, each either stepping (one square) or sliding (repeat
//! until blocked). Vectors are Lower-relative; Upper movement is the point
//! reflection of the same tables.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

/// How reachability is being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMode {
    /// Squares the piece may legally move to: a sliding ray includes its
    /// first occupied square only when that square holds an opponent.
    Ordinary,
    /// Squares the piece covers for check analysis: a ray includes its
    /// first occupied square regardless of owner, and when that occupant
    /// is an opposing Drive the ray also covers the square directly
    /// behind it (the Drive cannot hide in its own shadow).
    AttackSurvey,
}

/// A group of direction vectors sharing one traversal style.
struct DirectionGroup {
    vectors: &'static [(i8, i8)],
    sliding: bool,
}

const ALL_EIGHT: &[(i8, i8)] = &[
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

/// All neighbors except the two rearward diagonals.
const SHIELD_SIX: &[(i8, i8)] = &[(1, 0), (-1, 0), (0, 1), (0, -1), (1, 1), (-1, 1)];

const RELAY_FIVE: &[(i8, i8)] = &[(0, 1), (1, -1), (1, 1), (-1, -1), (-1, 1)];

const ORTHOGONAL: &[(i8, i8)] = &[(1, 0), (-1, 0), (0, 1), (0, -1)];

const DIAGONAL: &[(i8, i8)] = &[(1, 1), (-1, -1), (-1, 1), (1, -1)];

const FORWARD: &[(i8, i8)] = &[(0, 1)];

const fn stepping(vectors: &'static [(i8, i8)]) -> DirectionGroup {
    DirectionGroup {
        vectors,
        sliding: false,
    }
}

const fn sliding(vectors: &'static [(i8, i8)]) -> DirectionGroup {
    DirectionGroup {
        vectors,
        sliding: true,
    }
}

/// Return the direction groups for a kind, Lower-relative.
fn direction_groups(kind: PieceKind) -> &'static [DirectionGroup] {
    const DRIVE: &[DirectionGroup] = &[stepping(ALL_EIGHT)];
    const SHIELD: &[DirectionGroup] = &[stepping(SHIELD_SIX)];
    const RELAY: &[DirectionGroup] = &[stepping(RELAY_FIVE)];
    const GOVERNANCE: &[DirectionGroup] = &[sliding(DIAGONAL)];
    const NOTES: &[DirectionGroup] = &[sliding(ORTHOGONAL)];
    const PAWN: &[DirectionGroup] = &[stepping(FORWARD)];
    const PROMOTED_GOVERNANCE: &[DirectionGroup] = &[sliding(DIAGONAL), stepping(ALL_EIGHT)];
    const PROMOTED_NOTES: &[DirectionGroup] = &[sliding(ORTHOGONAL), stepping(ALL_EIGHT)];

    match kind {
        PieceKind::Drive | PieceKind::PromotedPawn => DRIVE,
        PieceKind::Shield | PieceKind::PromotedRelay => SHIELD,
        PieceKind::Relay => RELAY,
        PieceKind::Governance => GOVERNANCE,
        PieceKind::Notes => NOTES,
        PieceKind::Pawn => PAWN,
        PieceKind::PromotedGovernance => PROMOTED_GOVERNANCE,
        PieceKind::PromotedNotes => PROMOTED_NOTES,
    }
}

/// Walk one direction from `from`, collecting reached squares in order.
fn walk_ray(
    board: &Board,
    piece: Piece,
    from: Square,
    vector: (i8, i8),
    slide: bool,
    mode: MoveMode,
) -> Vec<Square> {
    // Mirror for Upper: point-reflect the Lower-relative vector.
    let (mut dr, mut dc) = vector;
    if piece.color == Color::Upper {
        dr = -dr;
        dc = -dc;
    }

    let mut ray = Vec::new();
    let mut cursor = from;
    while let Some(next) = cursor.offset(dr, dc) {
        match board.piece_at(next) {
            None => {
                ray.push(next);
                if !slide {
                    break;
                }
                cursor = next;
            }
            Some(occupant) => {
                match mode {
                    MoveMode::Ordinary => {
                        if occupant.color != piece.color {
                            ray.push(next);
                        }
                    }
                    MoveMode::AttackSurvey => {
                        ray.push(next);
                        if slide
                            && occupant.kind == PieceKind::Drive
                            && occupant.color != piece.color
                        {
                            if let Some(beyond) = next.offset(dr, dc) {
                                ray.push(beyond);
                            }
                        }
                    }
                }
                break;
            }
        }
    }
    ray
}

/// Return every square the piece reaches from `from`, as a flat set.
pub fn reachable_squares(board: &Board, piece: Piece, from: Square, mode: MoveMode) -> SquareSet {
    let mut set = SquareSet::EMPTY;
    for group in direction_groups(piece.kind) {
        for &vector in group.vectors {
            for sq in walk_ray(board, piece, from, vector, group.sliding, mode) {
                set.insert(sq);
            }
        }
    }
    set
}

/// Return the same reachability without flattening: one ordered sequence
/// per direction, each running up to and including its stopping square.
///
/// The check analyzer uses this to recover which single ray connects an
/// attacker to the Drive, and so which squares an interposition must hit.
pub fn reachable_rays(
    board: &Board,
    piece: Piece,
    from: Square,
    mode: MoveMode,
) -> Vec<Vec<Square>> {
    let mut rays = Vec::new();
    for group in direction_groups(piece.kind) {
        for &vector in group.vectors {
            rays.push(walk_ray(board, piece, from, vector, group.sliding, mode));
        }
    }
    rays
}
