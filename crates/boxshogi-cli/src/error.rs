//! Front-end errors: command parsing and game-file loading.

/// Errors from parsing a single player command line.
///
/// Any of these forfeits the game for the player who typed the line; they
/// are kept as distinct variants so logs can name what went wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The line held no tokens.
    #[error("empty command")]
    Empty,

    /// The first token was neither `move` nor `drop`.
    #[error("unknown command: {word}")]
    UnknownCommand {
        /// The offending first token.
        word: String,
    },

    /// A `move` or `drop` had the wrong number of arguments.
    #[error("wrong number of arguments for {word}")]
    WrongArity {
        /// The command word.
        word: String,
    },

    /// A token was not a valid letter-digit square.
    #[error("invalid square: {text}")]
    InvalidSquare {
        /// The token that failed to parse.
        text: String,
    },

    /// A drop named something other than a single base piece letter.
    #[error("invalid piece letter: {text}")]
    InvalidPiece {
        /// The token that failed to parse.
        text: String,
    },

    /// The fourth token of a `move` was not the promotion marker.
    #[error("unexpected token: {text}")]
    UnexpectedToken {
        /// The unrecognized trailing token.
        text: String,
    },
}

/// Errors from loading a batch-mode game file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// An I/O error occurred while reading the file or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// A placement line was not `<piece-token> <square>`.
    #[error("line {line}: invalid placement: {text}")]
    InvalidPlacement {
        /// One-based line number in the file.
        line: usize,
        /// The offending line.
        text: String,
    },

    /// A hand line listed something other than base piece letters.
    #[error("line {line}: invalid hand entry: {text}")]
    InvalidHand {
        /// One-based line number in the file.
        line: usize,
        /// The offending entry.
        text: String,
    },

    /// The assembled position failed structural validation.
    #[error("invalid position: {source}")]
    Board {
        /// The underlying board error.
        #[from]
        source: boxshogi_core::BoardError,
    },
}
