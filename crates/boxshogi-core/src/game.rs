//! Game state and the turn processor.

use std::fmt;

use tracing::debug;

use crate::board::Board;
use crate::check::{analyze, drop_allowed, is_attacked, CheckReport};
use crate::color::Color;
use crate::error::Violation;
use crate::hand::Hand;
use crate::movegen::{reachable_squares, MoveMode};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Total half-moves after which a game is drawn.
pub const MOVE_LIMIT: u32 = 400;

/// A player command: either a board move or a drop from hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the piece on `from` to `to`, optionally promoting it.
    Move {
        from: Square,
        to: Square,
        promote: bool,
    },
    /// Drop a held piece of the given kind onto `to`.
    Drop { kind: PieceKind, to: Square },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Move { from, to, promote } => {
                write!(f, "move {} {}", from, to)?;
                if *promote {
                    write!(f, " promote")?;
                }
                Ok(())
            }
            Command::Drop { kind, to } => write!(f, "drop {} {}", kind.letter(), to),
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// The loser's Drive was checkmated.
    Checkmate { winner: Color },
    /// The loser played an illegal or malformed command.
    IllegalMove { winner: Color },
    /// The half-move limit was reached.
    Tie,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Checkmate { winner } => {
                write!(f, "{} player wins.  Checkmate.", winner)
            }
            GameResult::IllegalMove { winner } => {
                write!(f, "{} player wins.  Illegal move.", winner)
            }
            GameResult::Tie => write!(f, "Tie game.  Too many moves."),
        }
    }
}

/// What [`GameState::apply`] did with a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The command was legal and the game continues. `check` carries the
    /// analysis for the next mover when that player stands in check.
    Played { check: Option<CheckReport> },
    /// The command ended the game.
    Finished(GameResult),
}

/// The most recent command fed to the game, kept verbatim for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastMove {
    /// Who issued the command.
    pub by: Color,
    /// The command text as the player gave it.
    pub text: String,
}

/// A full game: board, both hands, and the turn counter.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    hands: [Hand; Color::COUNT],
    turn: u32,
    last_move: Option<LastMove>,
    result: Option<GameResult>,
}

impl GameState {
    /// Build a game from an arbitrary position.
    pub fn new(board: Board, hands: [Hand; Color::COUNT], turn: u32) -> GameState {
        GameState {
            board,
            hands,
            turn,
            last_move: None,
            result: None,
        }
    }

    /// A fresh game from the fixed starting position, lower to move.
    pub fn starting_position() -> GameState {
        GameState::new(Board::starting_position(), [Hand::new(), Hand::new()], 0)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hand(&self, color: Color) -> &Hand {
        &self.hands[color.index()]
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The player whose command the game expects next. Lower moves on even
    /// turns, Upper on odd ones.
    pub fn side_to_move(&self) -> Color {
        if self.turn % 2 == 0 {
            Color::Lower
        } else {
            Color::Upper
        }
    }

    pub fn last_move(&self) -> Option<&LastMove> {
        self.last_move.as_ref()
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Process one command for the side to move.
    ///
    /// An illegal command ends the game in the opponent's favor and leaves
    /// the position exactly as it was before the attempt. A legal command
    /// advances the turn counter and analyzes the next mover's situation.
    pub fn apply(&mut self, command: Command) -> TurnOutcome {
        if let Some(result) = self.result {
            return TurnOutcome::Finished(result);
        }
        let mover = self.side_to_move();

        let board_before = self.board.clone();
        let hands_before = self.hands.clone();
        let attempt = match command {
            Command::Move { from, to, promote } => self.try_move(mover, from, to, promote),
            Command::Drop { kind, to } => self.try_drop(mover, kind, to),
        };
        if let Err(violation) = attempt {
            debug!(command = %command, reason = %violation, "rejected command");
            self.board = board_before;
            self.hands = hands_before;
            let result = GameResult::IllegalMove { winner: !mover };
            return TurnOutcome::Finished(self.finish(mover, command.to_string(), result));
        }

        self.turn += 1;
        self.last_move = Some(LastMove {
            by: mover,
            text: command.to_string(),
        });

        // The move limit trumps any check or mate delivered on the final
        // half-move.
        if self.turn >= MOVE_LIMIT {
            self.result = Some(GameResult::Tie);
            return TurnOutcome::Finished(GameResult::Tie);
        }

        let next = !mover;
        let report = analyze(&self.board, next, self.hand(next));
        if report.is_checkmate() {
            let result = GameResult::Checkmate { winner: mover };
            self.result = Some(result);
            return TurnOutcome::Finished(result);
        }
        TurnOutcome::Played {
            check: report.in_check.then_some(report),
        }
    }

    /// End the game because the side to move produced unparseable input.
    ///
    /// The raw text is recorded as the losing action so reports can echo
    /// it back.
    pub fn forfeit(&mut self, raw: &str) -> GameResult {
        if let Some(result) = self.result {
            return result;
        }
        let mover = self.side_to_move();
        debug!(input = raw, "unparseable command");
        self.finish(
            mover,
            raw.to_string(),
            GameResult::IllegalMove { winner: !mover },
        )
    }

    fn finish(&mut self, by: Color, text: String, result: GameResult) -> GameResult {
        self.last_move = Some(LastMove { by, text });
        self.result = Some(result);
        result
    }

    fn try_move(
        &mut self,
        mover: Color,
        from: Square,
        to: Square,
        promote: bool,
    ) -> Result<(), Violation> {
        let piece = match self.board.piece_at(from) {
            Some(p) if p.color == mover => p,
            _ => return Err(Violation::NotMoversPiece { from }),
        };
        let reach = reachable_squares(&self.board, piece, from, MoveMode::Ordinary);
        if !reach.contains(to) {
            return Err(Violation::Unreachable { from, to });
        }

        let zone = mover.promotion_col();
        let kind = if promote {
            let promoted = piece
                .kind
                .promoted()
                .ok_or(Violation::BadPromotion { kind: piece.kind })?;
            if from.col() != zone && to.col() != zone {
                return Err(Violation::BadPromotion { kind: piece.kind });
            }
            promoted
        } else if piece.kind == PieceKind::Pawn && to.col() == zone {
            // A pawn entering the far column promotes whether asked or not.
            PieceKind::PromotedPawn
        } else {
            piece.kind
        };

        if let Some(captured) = self.board.piece_at(to) {
            self.hands[mover.index()].add(captured.kind.demoted());
        }
        self.board.set_piece(from, None);
        self.board.set_piece(to, Some(Piece::new(kind, mover)));

        if is_attacked(&self.board, self.board.king_square(mover), !mover) {
            return Err(Violation::SelfCheck);
        }
        Ok(())
    }

    fn try_drop(&mut self, mover: Color, kind: PieceKind, to: Square) -> Result<(), Violation> {
        if self.board.is_occupied(to) {
            return Err(Violation::OccupiedDrop { to });
        }
        self.hands[mover.index()].remove(kind)?;
        if kind == PieceKind::Pawn {
            if to.col() == mover.promotion_col() {
                return Err(Violation::PawnZoneDrop);
            }
            if !drop_allowed(&self.board, mover, kind, to) {
                return Err(Violation::DoublePawn { col: to.col() });
            }
        }
        self.board.set_piece(to, Some(Piece::new(kind, mover)));

        // A pawn may never be dropped to deliver checkmate on the spot.
        if kind == PieceKind::Pawn {
            let report = analyze(&self.board, !mover, self.hand(!mover));
            if report.is_checkmate() {
                return Err(Violation::DropMate);
            }
        }
        Ok(())
    }
}
