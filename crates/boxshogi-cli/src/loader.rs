//! Batch-mode game file loading.

use std::fs;
use std::path::Path;

use boxshogi_core::{Board, Color, Hand, Piece, PieceKind, Square};

use crate::error::LoadError;

/// A parsed game file: the initial position and the command queue.
///
/// Commands are kept as raw text; a malformed command forfeits the game
/// when it is reached, the same as any illegal command, so the loader must
/// not reject it up front.
#[derive(Debug)]
pub struct GameFile {
    /// Initial piece placement.
    pub board: Board,
    /// Initial hands, indexed by [`Color::index`].
    pub hands: [Hand; Color::COUNT],
    /// The commands to replay, in order, one line each.
    pub commands: Vec<String>,
}

/// Read and parse a game file from disk.
pub fn load_file(path: &Path) -> Result<GameFile, LoadError> {
    let text = fs::read_to_string(path)?;
    load_str(&text)
}

/// Parse game-file text.
///
/// Line forms, blank lines ignored:
/// - `<piece-token> <square>` places a piece (e.g. `+P c3`)
/// - `UPPER: <letters>` / `lower: <letters>` fill a hand (e.g. `UPPER: p n`)
/// - `move …` / `drop …` append to the command queue
///
/// Once both hand lines have been read, every remaining line is a command,
/// kept raw, so a garbled command word forfeits at replay time instead of
/// failing the load.
pub fn load_str(text: &str) -> Result<GameFile, LoadError> {
    let mut board = Board::empty();
    let mut hands = [Hand::new(), Hand::new()];
    let mut commands = Vec::new();
    let mut hand_lines = 0;

    for (number, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let number = number + 1;

        if hand_lines == 2 {
            commands.push(line.to_string());
        } else if let Some(rest) = line.strip_prefix("UPPER:") {
            parse_hand(&mut hands[Color::Upper.index()], rest, number)?;
            hand_lines += 1;
        } else if let Some(rest) = line.strip_prefix("lower:") {
            parse_hand(&mut hands[Color::Lower.index()], rest, number)?;
            hand_lines += 1;
        } else if line.starts_with("move") || line.starts_with("drop") {
            commands.push(line.to_string());
        } else {
            parse_placement(&mut board, line, number)?;
        }
    }

    board.validate()?;
    Ok(GameFile {
        board,
        hands,
        commands,
    })
}

fn parse_hand(hand: &mut Hand, rest: &str, line: usize) -> Result<(), LoadError> {
    for entry in rest.split_whitespace() {
        let invalid = || LoadError::InvalidHand {
            line,
            text: entry.to_string(),
        };
        let mut chars = entry.chars();
        let kind = match (chars.next(), chars.next()) {
            (Some(c), None) => PieceKind::from_letter(c),
            _ => None,
        }
        .ok_or_else(invalid)?;
        // The piece set has one copy per side, so no hand holds more than
        // two of a kind.
        if hand.count(kind) >= Hand::MAX_PER_KIND {
            return Err(invalid());
        }
        hand.add(kind);
    }
    Ok(())
}

fn parse_placement(board: &mut Board, text: &str, number: usize) -> Result<(), LoadError> {
    let invalid = || LoadError::InvalidPlacement {
        line: number,
        text: text.to_string(),
    };
    let mut tokens = text.split_whitespace();
    let (token, square) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(token), Some(square), None) => (token, square),
        _ => return Err(invalid()),
    };
    let piece = Piece::from_token(token).ok_or_else(invalid)?;
    let sq = Square::from_algebraic(square).ok_or_else(invalid)?;
    board.set_piece(sq, Some(piece));
    Ok(())
}
