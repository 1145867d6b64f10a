//! Check, checkmate, and check-resolution analysis.

use std::fmt;

use crate::board::Board;
use crate::color::Color;
use crate::hand::Hand;
use crate::movegen::{reachable_rays, reachable_squares, MoveMode};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

/// One way for the checked player to answer a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Drop a held piece onto a blocking square.
    Drop { kind: PieceKind, to: Square },
    /// Move a piece (the Drive or an ally) to a resolving square.
    Move { from: Square, to: Square },
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Drop { kind, to } => write!(f, "drop {} {}", kind.letter(), to),
            Resolution::Move { from, to } => write!(f, "move {} {}", from, to),
        }
    }
}

/// The result of one check analysis pass for a given mover.
///
/// Produced by [`analyze`]; pure data, so re-running the analysis on an
/// unmutated state yields an identical report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Whether the mover's Drive is currently attacked.
    pub in_check: bool,
    /// Number of opposing pieces attacking the Drive.
    pub attacker_count: usize,
    /// Squares the Drive can step to without remaining attacked, ascending.
    pub king_escapes: Vec<Square>,
    /// Every resolving command: drops first, then moves, each group in
    /// ascending destination order.
    pub resolutions: Vec<Resolution>,
}

impl CheckReport {
    /// A check with no resolution is checkmate.
    pub fn is_checkmate(&self) -> bool {
        self.in_check && self.resolutions.is_empty()
    }
}

/// Return `true` if `sq` is covered by any of `by`'s pieces.
pub fn is_attacked(board: &Board, sq: Square, by: Color) -> bool {
    board
        .pieces()
        .filter(|(_, p)| p.color == by)
        .any(|(from, p)| reachable_squares(board, p, from, MoveMode::AttackSurvey).contains(sq))
}

/// Run the full check analysis for `mover`.
///
/// `hand` is the mover's hand, consulted for blocking drops. The board is
/// never mutated; drop legality here is the shallow form (double-pawn and
/// zone rules only), so no recursive mate analysis happens.
pub fn analyze(board: &Board, mover: Color, hand: &Hand) -> CheckReport {
    let king_sq = board.king_square(mover);
    let king = Piece::new(PieceKind::Drive, mover);

    // Union of every opposing piece's covered squares, and the attackers
    // among them.
    let mut threats = SquareSet::EMPTY;
    let mut attackers: Vec<(Square, Piece)> = Vec::new();
    for (from, piece) in board.pieces().filter(|(_, p)| p.color != mover) {
        let covered = reachable_squares(board, piece, from, MoveMode::AttackSurvey);
        threats |= covered;
        if covered.contains(king_sq) {
            attackers.push((from, piece));
        }
    }

    let in_check = threats.contains(king_sq);
    let escapes = reachable_squares(board, king, king_sq, MoveMode::Ordinary) & !threats;
    let king_escapes: Vec<Square> = escapes.collect();

    let mut resolutions = Vec::new();
    if in_check {
        let mut drops = Vec::new();
        let mut moves: Vec<Resolution> = king_escapes
            .iter()
            .map(|&to| Resolution::Move { from: king_sq, to })
            .collect();

        // Interposition and capture only work against a lone attacker; a
        // double check leaves king moves as the only answer.
        if attackers.len() == 1 {
            let (attacker_sq, attacker) = attackers[0];
            let blocks = blocking_squares(board, attacker, attacker_sq, king_sq);
            let mut targets = blocks.with(attacker_sq);
            targets = targets.without(king_sq);

            for (from, piece) in board.pieces().filter(|(_, p)| p.color == mover) {
                if piece.kind == PieceKind::Drive {
                    continue;
                }
                let reach = reachable_squares(board, piece, from, MoveMode::Ordinary);
                for to in reach & targets {
                    moves.push(Resolution::Move { from, to });
                }
            }

            for kind in hand.kinds() {
                for to in blocks {
                    if drop_allowed(board, mover, kind, to) {
                        drops.push(Resolution::Drop { kind, to });
                    }
                }
            }
        }

        drops.sort_by_key(|r| match *r {
            Resolution::Drop { kind, to } => (to, kind.letter()),
            Resolution::Move { .. } => unreachable!(),
        });
        moves.sort_by_key(|r| match *r {
            Resolution::Move { from, to } => (to, from),
            Resolution::Drop { .. } => unreachable!(),
        });
        resolutions.extend(drops);
        resolutions.extend(moves);
    }

    CheckReport {
        in_check,
        attacker_count: attackers.len(),
        king_escapes,
        resolutions,
    }
}

/// Return the squares strictly between an attacker and the Drive along the
/// single attacking ray. Empty when the attacker is adjacent or stepping.
fn blocking_squares(
    board: &Board,
    attacker: Piece,
    attacker_sq: Square,
    king_sq: Square,
) -> SquareSet {
    for ray in reachable_rays(board, attacker, attacker_sq, MoveMode::AttackSurvey) {
        if let Some(pos) = ray.iter().position(|&sq| sq == king_sq) {
            return ray[..pos].iter().copied().collect();
        }
    }
    SquareSet::EMPTY
}

/// Shallow drop legality used while enumerating blocking drops: the square
/// must be empty and pawn drops must respect the double-pawn and zone
/// rules. The drop-mate rule is handled by the turn processor.
pub(crate) fn drop_allowed(board: &Board, mover: Color, kind: PieceKind, to: Square) -> bool {
    if board.is_occupied(to) {
        return false;
    }
    if kind == PieceKind::Pawn {
        if to.col() == mover.promotion_col() {
            return false;
        }
        let doubled = board
            .pieces()
            .any(|(sq, p)| p.color == mover && p.kind == PieceKind::Pawn && sq.col() == to.col());
        if doubled {
            return false;
        }
    }
    true
}
