//! Player command parsing.

use boxshogi_core::{Command, PieceKind, Square};

use crate::error::ParseError;

/// Parse a single line of player input into a [`Command`].
///
/// Two forms are accepted:
/// - `move <from> <to> [promote|+]`
/// - `drop <piece-letter> <to>`
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    match tokens[0] {
        "move" => parse_move(&tokens[1..]),
        "drop" => parse_drop(&tokens[1..]),
        word => Err(ParseError::UnknownCommand {
            word: word.to_string(),
        }),
    }
}

fn parse_move(tokens: &[&str]) -> Result<Command, ParseError> {
    if tokens.len() < 2 || tokens.len() > 3 {
        return Err(ParseError::WrongArity {
            word: "move".to_string(),
        });
    }
    let from = parse_square(tokens[0])?;
    let to = parse_square(tokens[1])?;
    let promote = match tokens.get(2) {
        None => false,
        Some(&"promote") | Some(&"+") => true,
        Some(other) => {
            return Err(ParseError::UnexpectedToken {
                text: other.to_string(),
            });
        }
    };
    Ok(Command::Move { from, to, promote })
}

fn parse_drop(tokens: &[&str]) -> Result<Command, ParseError> {
    if tokens.len() != 2 {
        return Err(ParseError::WrongArity {
            word: "drop".to_string(),
        });
    }
    let mut chars = tokens[0].chars();
    let kind = match (chars.next(), chars.next()) {
        (Some(c), None) => PieceKind::from_letter(c),
        _ => None,
    }
    .ok_or_else(|| ParseError::InvalidPiece {
        text: tokens[0].to_string(),
    })?;
    let to = parse_square(tokens[1])?;
    Ok(Command::Drop { kind, to })
}

fn parse_square(token: &str) -> Result<Square, ParseError> {
    Square::from_algebraic(token).ok_or_else(|| ParseError::InvalidSquare {
        text: token.to_string(),
    })
}
