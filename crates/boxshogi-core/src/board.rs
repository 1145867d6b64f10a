//! The 5×5 board: piece placement and the text grid.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Piece placement on the 5×5 grid.
///
/// Plain value semantics: the turn processor snapshots a board by cloning
/// it and rolls back a rejected command by assigning the clone back.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return an empty board.
    pub fn empty() -> Board {
        Board {
            grid: [None; Square::COUNT],
        }
    }

    /// Return the fixed starting position.
    ///
    /// Lower's back row runs d, s, r, g, n across a1..e1 with a pawn on a2;
    /// Upper mirrors it on the far side (D e5 .. N a5, pawn on e4).
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        let lower = [
            ("d", "a1"),
            ("s", "b1"),
            ("r", "c1"),
            ("g", "d1"),
            ("n", "e1"),
            ("p", "a2"),
        ];
        let upper = [
            ("D", "e5"),
            ("S", "d5"),
            ("R", "c5"),
            ("G", "b5"),
            ("N", "a5"),
            ("P", "e4"),
        ];
        for (token, pos) in lower.into_iter().chain(upper) {
            let piece = Piece::from_token(token).expect("starting tokens are valid");
            let sq = Square::from_algebraic(pos).expect("starting squares are valid");
            board.set_piece(sq, Some(piece));
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.index()]
    }

    /// Place a piece on (or clear) the given square.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.grid[sq.index()] = piece;
    }

    /// Return `true` if the given square holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.grid[sq.index()].is_some()
    }

    /// Iterate over all occupied squares in ascending square order.
    ///
    /// The order is stable across calls on an unmutated board, which the
    /// check analyzer relies on for reproducible reports.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Return the square of the given player's Drive.
    ///
    /// # Panics
    ///
    /// Panics if the board has no Drive for the given player (invalid
    /// board state; [`Board::validate`] rejects such boards).
    pub fn king_square(&self, color: Color) -> Square {
        self.pieces()
            .find(|(_, p)| p.kind == PieceKind::Drive && p.color == color)
            .map(|(sq, _)| sq)
            .expect("board must have a Drive for each player")
    }

    /// Validate the structural integrity of the board: exactly one Drive
    /// per player.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self
                .pieces()
                .filter(|(_, p)| p.kind == PieceKind::Drive && p.color == color)
                .count();
            if count != 1 {
                return Err(BoardError::InvalidDriveCount { color, count });
            }
        }
        Ok(())
    }
}

/// The board prints as the 5×5 text grid, column 5 at the top:
///
/// ```text
/// 5 | N| G| R| S| D|
/// 4 |__|__|__|__| P|
/// 3 |__|__|__|__|__|
/// 2 | p|__|__|__|__|
/// 1 | d| s| r| g| n|
///     a  b  c  d  e
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for col in (0..Square::SIZE).rev() {
            write!(f, "{} |", col + 1)?;
            for row in 0..Square::SIZE {
                match self.piece_at(Square::new(row, col)) {
                    Some(piece) => {
                        let [marker, letter] = piece.cell();
                        write!(f, "{}{}|", marker, letter)?;
                    }
                    None => write!(f, "__|")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "    a  b  c  d  e")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(")?;
        for (sq, piece) in self.pieces() {
            write!(f, " {}@{}", piece, sq)?;
        }
        write!(f, " )")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn empty_board_has_no_pieces() {
        let board = Board::empty();
        assert_eq!(board.pieces().count(), 0);
        assert_eq!(board.piece_at(sq("c3")), None);
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.pieces().count(), 12);
        assert_eq!(board.piece_at(sq("a1")), Piece::from_token("d"));
        assert_eq!(board.piece_at(sq("e1")), Piece::from_token("n"));
        assert_eq!(board.piece_at(sq("a2")), Piece::from_token("p"));
        assert_eq!(board.piece_at(sq("e5")), Piece::from_token("D"));
        assert_eq!(board.piece_at(sq("a5")), Piece::from_token("N"));
        assert_eq!(board.piece_at(sq("e4")), Piece::from_token("P"));
        assert_eq!(board.piece_at(sq("c3")), None);
    }

    #[test]
    fn starting_position_validates() {
        Board::starting_position().validate().unwrap();
    }

    #[test]
    fn set_and_clear() {
        let mut board = Board::empty();
        let pawn = Piece::from_token("p").unwrap();
        board.set_piece(sq("b2"), Some(pawn));
        assert!(board.is_occupied(sq("b2")));
        assert_eq!(board.piece_at(sq("b2")), Some(pawn));

        board.set_piece(sq("b2"), None);
        assert!(!board.is_occupied(sq("b2")));
    }

    #[test]
    fn king_square_lookup() {
        let board = Board::starting_position();
        assert_eq!(board.king_square(Color::Lower), sq("a1"));
        assert_eq!(board.king_square(Color::Upper), sq("e5"));
    }

    #[test]
    fn pieces_iterates_in_square_order() {
        let board = Board::starting_position();
        let squares: Vec<_> = board.pieces().map(|(sq, _)| sq).collect();
        let mut sorted = squares.clone();
        sorted.sort();
        assert_eq!(squares, sorted);
    }

    #[test]
    fn validate_missing_drive() {
        let mut board = Board::starting_position();
        board.set_piece(sq("a1"), None);
        assert!(matches!(
            board.validate(),
            Err(BoardError::InvalidDriveCount {
                color: Color::Lower,
                count: 0
            })
        ));
    }

    #[test]
    fn validate_duplicate_drive() {
        let mut board = Board::starting_position();
        board.set_piece(sq("c3"), Some(Piece::new(PieceKind::Drive, Color::Upper)));
        assert!(matches!(
            board.validate(),
            Err(BoardError::InvalidDriveCount {
                color: Color::Upper,
                count: 2
            })
        ));
    }

    #[test]
    fn display_grid() {
        let board = Board::starting_position();
        let text = board.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "5 | N| G| R| S| D|");
        assert_eq!(lines[1], "4 |__|__|__|__| P|");
        assert_eq!(lines[3], "2 | p|__|__|__|__|");
        assert_eq!(lines[4], "1 | d| s| r| g| n|");
        assert_eq!(lines[5], "    a  b  c  d  e");
    }

    #[test]
    fn display_promoted_cell() {
        let mut board = Board::empty();
        board.set_piece(sq("c3"), Piece::from_token("+P"));
        assert!(board.to_string().contains("|+P|"));
    }
}
