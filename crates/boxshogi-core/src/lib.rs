//! Core game types: board representation, move generation, and game rules
//! for the 5×5 mini-shogi variant.

mod board;
mod check;
mod color;
mod error;
mod game;
mod hand;
mod movegen;
mod piece;
mod piece_kind;
mod square;
mod square_set;

pub use board::Board;
pub use check::{analyze, is_attacked, CheckReport, Resolution};
pub use color::Color;
pub use error::{BoardError, Violation};
pub use game::{Command, GameResult, GameState, LastMove, TurnOutcome, MOVE_LIMIT};
pub use hand::Hand;
pub use movegen::{reachable_rays, reachable_squares, MoveMode};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
pub use square_set::SquareSet;
