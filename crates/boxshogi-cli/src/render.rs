//! Text rendering of game state for the terminal.
//!
//! All functions here are pure string builders; the session loop decides
//! where the text goes.

use boxshogi_core::{CheckReport, Color, GameState};

/// The input prompt for the given player, without a trailing newline.
pub fn prompt(color: Color) -> String {
    format!("{}>", color)
}

/// The board grid and both capture lines, shown before the first command
/// of an interactive session. Ends with a blank line.
pub fn start_report(state: &GameState) -> String {
    format!("{}\n\n{}\n", state.board(), captures_block(state))
}

/// The full report printed after a command: the action line, the board,
/// both hands, and either the check block or the terminal result line.
///
/// When `check` is given, the listed resolutions are for the player now to
/// move.
pub fn game_report(state: &GameState, check: Option<&CheckReport>) -> String {
    let mut out = String::new();
    if let Some(last) = state.last_move() {
        out.push_str(&format!("{} player action: {}\n", last.by, last.text));
    }
    out.push_str(&format!("{}\n\n", state.board()));
    out.push_str(&captures_block(state));
    out.push('\n');

    if let Some(result) = state.result() {
        out.push_str(&format!("{}\n", result));
    } else if let Some(report) = check {
        out.push_str(&format!("{} player is in check!\n", state.side_to_move()));
        out.push_str("Available moves:\n");
        for resolution in &report.resolutions {
            out.push_str(&format!("{}\n", resolution));
        }
    }
    out
}

/// Both capture lines, Upper first, letters cased by owner and sorted.
/// An empty hand leaves no trailing space after the colon.
fn captures_block(state: &GameState) -> String {
    let mut out = String::new();
    for color in [Color::Upper, Color::Lower] {
        let letters: Vec<String> = state
            .hand(color)
            .pieces()
            .map(|kind| color.apply_case(kind.letter()).to_string())
            .collect();
        let line = format!("Captures {}: {}", color, letters.join(" "));
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use boxshogi_core::{analyze, Color, Command, GameState, Square, TurnOutcome};

    use super::{game_report, prompt, start_report};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn mv(from: &str, to: &str) -> Command {
        Command::Move {
            from: sq(from),
            to: sq(to),
            promote: false,
        }
    }

    #[test]
    fn prompts() {
        assert_eq!(prompt(Color::Lower), "lower>");
        assert_eq!(prompt(Color::Upper), "UPPER>");
    }

    #[test]
    fn start_report_layout() {
        let state = GameState::starting_position();
        let text = start_report(&state);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "5 | N| G| R| S| D|",
                "4 |__|__|__|__| P|",
                "3 |__|__|__|__|__|",
                "2 | p|__|__|__|__|",
                "1 | d| s| r| g| n|",
                "    a  b  c  d  e",
                "",
                "Captures UPPER:",
                "Captures lower:",
                "",
            ]
        );
        assert!(text.ends_with("Captures lower:\n\n"));
    }

    #[test]
    fn report_after_a_quiet_move() {
        let mut state = GameState::starting_position();
        state.apply(mv("a2", "a3"));
        let text = game_report(&state, None);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "lower player action: move a2 a3");
        assert_eq!(lines[3], "3 | p|__|__|__|__|");
        assert_eq!(lines[4], "2 |__|__|__|__|__|");
        assert_eq!(lines[6], "    a  b  c  d  e");
        assert_eq!(lines[7], "");
        assert_eq!(lines[8], "Captures UPPER:");
        assert_eq!(lines[9], "Captures lower:");
        // The trailing blank line survives as one empty element.
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[10], "");
        assert!(text.ends_with("Captures lower:\n\n"));
    }

    #[test]
    fn report_shows_captured_letters_cased() {
        use boxshogi_core::{Board, Hand, Piece};
        let mut board = Board::empty();
        board.set_piece(sq("a1"), Piece::from_token("d"));
        board.set_piece(sq("c1"), Piece::from_token("n"));
        board.set_piece(sq("c4"), Piece::from_token("+P"));
        board.set_piece(sq("e5"), Piece::from_token("D"));
        let mut state = GameState::new(board, [Hand::new(), Hand::new()], 0);
        state.apply(mv("c1", "c4"));
        let text = game_report(&state, None);
        assert!(text.contains("Captures UPPER:\n"));
        assert!(text.contains("Captures lower: p\n"));
    }

    #[test]
    fn report_after_an_illegal_move() {
        let mut state = GameState::starting_position();
        state.apply(mv("a2", "a4"));
        let text = game_report(&state, None);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "lower player action: move a2 a4");
        assert_eq!(
            lines.last().copied(),
            Some("UPPER player wins.  Illegal move.")
        );
        // Blank line between the captures and the result.
        assert_eq!(lines[lines.len() - 2], "");
    }

    #[test]
    fn report_with_check_block() {
        use boxshogi_core::{Board, Hand, Piece};
        let mut board = Board::empty();
        board.set_piece(sq("a1"), Piece::from_token("d"));
        board.set_piece(sq("c5"), Piece::from_token("N"));
        board.set_piece(sq("e5"), Piece::from_token("D"));
        let mut state = GameState::new(board, [Hand::new(), Hand::new()], 1);
        let outcome = state.apply(Command::Move {
            from: sq("c5"),
            to: sq("a5"),
            promote: false,
        });
        let TurnOutcome::Played { check: Some(report) } = outcome else {
            panic!("expected a check");
        };
        let text = game_report(&state, Some(&report));
        assert!(text.contains("UPPER player action: move c5 a5\n"));
        assert!(text.contains("lower player is in check!\nAvailable moves:\n"));
        assert!(text.contains("move a1 b1\n"));
        assert!(text.contains("move a1 b2\n"));
    }

    #[test]
    fn report_is_idempotent_for_an_unchanged_state() {
        let mut state = GameState::starting_position();
        state.apply(mv("a2", "a3"));
        let report = analyze(state.board(), state.side_to_move(), state.hand(state.side_to_move()));
        let first = game_report(&state, report.in_check.then_some(&report));
        let second = game_report(&state, report.in_check.then_some(&report));
        assert_eq!(first, second);
    }
}
