//! Error types for board validation and rule violations.

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A player does not have exactly one Drive.
    #[error("expected 1 Drive for {color}, found {count}")]
    InvalidDriveCount {
        /// Which player has the wrong Drive count.
        color: Color,
        /// Number of Drives found.
        count: usize,
    },
}

/// Why a command was rejected.
///
/// Any of these ends the game in favor of the opponent; they are kept as
/// distinct variants so logs and tests can name the reason.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// The origin square holds no piece owned by the mover.
    #[error("no piece owned by the mover at {from}")]
    NotMoversPiece {
        /// The claimed origin square.
        from: Square,
    },

    /// The destination is not reachable by the moved piece.
    #[error("{to} is not reachable from {from}")]
    Unreachable {
        /// Origin square.
        from: Square,
        /// Requested destination.
        to: Square,
    },

    /// A promotion was requested that the piece or squares do not allow.
    #[error("illegal promotion of {kind}")]
    BadPromotion {
        /// The kind that was asked to promote.
        kind: PieceKind,
    },

    /// The move leaves the mover's own Drive attacked.
    #[error("move leaves own Drive in check")]
    SelfCheck,

    /// A drop targeted an occupied square.
    #[error("drop destination {to} is occupied")]
    OccupiedDrop {
        /// Requested destination.
        to: Square,
    },

    /// The dropped kind is not in the mover's hand.
    #[error("no {kind} in hand")]
    NotInHand {
        /// The kind that was asked to drop.
        kind: PieceKind,
    },

    /// A pawn drop onto a column already holding one of the mover's
    /// unpromoted pawns.
    #[error("second pawn on column {col}")]
    DoublePawn {
        /// Zero-based column of the rejected drop.
        col: u8,
    },

    /// A pawn drop into the mover's own promotion-zone column.
    #[error("pawn dropped into the promotion zone")]
    PawnZoneDrop,

    /// A pawn drop that would checkmate the opponent on the spot.
    #[error("pawn drop delivers immediate checkmate")]
    DropMate,
}

#[cfg(test)]
mod tests {
    use super::{BoardError, Violation};
    use crate::color::Color;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn board_error_display() {
        let err = BoardError::InvalidDriveCount {
            color: Color::Lower,
            count: 0,
        };
        assert_eq!(format!("{err}"), "expected 1 Drive for lower, found 0");
    }

    #[test]
    fn violation_display() {
        let err = Violation::Unreachable {
            from: Square::from_algebraic("a1").unwrap(),
            to: Square::from_algebraic("c4").unwrap(),
        };
        assert_eq!(format!("{err}"), "c4 is not reachable from a1");

        let err = Violation::NotInHand {
            kind: PieceKind::Pawn,
        };
        assert_eq!(format!("{err}"), "no p in hand");
    }
}
