//! The session driver: batch replay and the interactive loop.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::{debug, info};

use boxshogi_core::{CheckReport, GameState, TurnOutcome};

use crate::command::parse_command;
use crate::error::LoadError;
use crate::loader;
use crate::render;

/// What feeding one input line did to the game.
enum Step {
    /// Legal command, nobody in check; the game continues.
    Played,
    /// Legal command leaving the next mover in check. The session stops
    /// here: the checked player must answer, so the engine reports the
    /// resolutions instead of playing on.
    Check(CheckReport),
    /// The game is over.
    Finished,
}

fn step(game: &mut GameState, line: &str) -> Step {
    match parse_command(line) {
        Ok(command) => match game.apply(command) {
            TurnOutcome::Played { check: Some(report) } => Step::Check(report),
            TurnOutcome::Played { check: None } => Step::Played,
            TurnOutcome::Finished(_) => Step::Finished,
        },
        Err(err) => {
            debug!(input = line, error = %err, "malformed command");
            game.forfeit(line);
            Step::Finished
        }
    }
}

/// Replay a queue of raw command lines, writing a report after each one.
///
/// Stops early on a terminal result or a check report; in both cases the
/// remaining queue is ignored.
pub fn replay<'a, W, I>(game: &mut GameState, commands: I, out: &mut W) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a str>,
{
    for line in commands {
        match step(game, line) {
            Step::Played => {
                write!(out, "{}", render::game_report(game, None))?;
                writeln!(out, "{}", render::prompt(game.side_to_move()))?;
            }
            Step::Check(report) => {
                write!(out, "{}", render::game_report(game, Some(&report)))?;
                writeln!(out, "{}", render::prompt(game.side_to_move()))?;
                return Ok(());
            }
            Step::Finished => {
                write!(out, "{}", render::game_report(game, None))?;
                return Ok(());
            }
        }
    }
    Ok(())
}

/// Batch mode: load a game file and replay its command queue to stdout.
pub fn run_file(path: &Path) -> Result<(), LoadError> {
    let file = loader::load_file(path)?;
    info!(
        path = %path.display(),
        commands = file.commands.len(),
        "replaying game file"
    );
    let mut game = GameState::new(file.board, file.hands, 0);
    let mut out = io::stdout().lock();
    replay(
        &mut game,
        file.commands.iter().map(String::as_str),
        &mut out,
    )?;
    Ok(())
}

/// Interactive mode: prompt on stdout, read commands from stdin until the
/// game ends or input closes.
pub fn run_interactive() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = GameState::starting_position();
    interactive_loop(&mut game, stdin.lock(), stdout.lock())
}

fn interactive_loop<R, W>(game: &mut GameState, mut input: R, mut out: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{}", render::start_report(game))?;
    loop {
        write!(out, "{}", render::prompt(game.side_to_move()))?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            info!("input closed");
            return Ok(());
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match step(game, line) {
            Step::Played => write!(out, "{}", render::game_report(game, None))?,
            Step::Check(report) => {
                write!(out, "{}", render::game_report(game, Some(&report)))?;
                writeln!(out, "{}", render::prompt(game.side_to_move()))?;
                return Ok(());
            }
            Step::Finished => {
                write!(out, "{}", render::game_report(game, None))?;
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use boxshogi_core::{Color, GameResult, GameState};

    use super::{interactive_loop, replay};

    fn replay_to_string(game: &mut GameState, commands: &[&str]) -> String {
        let mut out = Vec::new();
        replay(game, commands.iter().copied(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn replay_reports_every_command() {
        let mut game = GameState::starting_position();
        let text = replay_to_string(&mut game, &["move a2 a3", "move e4 e3"]);
        assert!(text.contains("lower player action: move a2 a3\n"));
        assert!(text.contains("UPPER player action: move e4 e3\n"));
        // Two reports, each ending in a prompt for the next player.
        assert!(text.contains("UPPER>\n"));
        assert!(text.ends_with("lower>\n"));
        assert_eq!(game.turn(), 2);
    }

    #[test]
    fn replay_stops_on_illegal_move() {
        let mut game = GameState::starting_position();
        let text = replay_to_string(&mut game, &["move a2 a4", "move e4 e3"]);
        assert!(text.ends_with("UPPER player wins.  Illegal move.\n"));
        // The queue after the forfeit is never applied.
        assert_eq!(game.turn(), 0);
    }

    #[test]
    fn replay_forfeits_on_malformed_input() {
        let mut game = GameState::starting_position();
        let text = replay_to_string(&mut game, &["mvoe a2 a3"]);
        assert!(text.contains("lower player action: mvoe a2 a3\n"));
        assert!(text.ends_with("UPPER player wins.  Illegal move.\n"));
        assert_eq!(
            game.result(),
            Some(GameResult::IllegalMove {
                winner: Color::Upper
            })
        );
    }

    #[test]
    fn replay_stops_on_check_and_prompts_the_checked_player() {
        let file = crate::loader::load_str("d a1\nn c1\nD e5\n").unwrap();
        let mut game = GameState::new(file.board, file.hands, 0);
        let text = replay_to_string(&mut game, &["move c1 e1"]);
        assert!(text.contains("UPPER player is in check!\n"));
        assert!(text.contains("Available moves:\n"));
        assert!(text.ends_with("UPPER>\n"));
    }

    #[test]
    fn interactive_shows_start_position_then_prompts() {
        let mut game = GameState::starting_position();
        let input: &[u8] = b"";
        let mut out = Vec::new();
        interactive_loop(&mut game, input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("5 | N| G| R| S| D|\n"));
        assert!(text.contains("Captures lower:\n"));
        // Inline prompt, no trailing newline after it.
        assert!(text.ends_with("lower>"));
    }

    #[test]
    fn interactive_plays_until_input_closes() {
        let mut game = GameState::starting_position();
        let input: &[u8] = b"move a2 a3\n\nmove e4 e3\n";
        let mut out = Vec::new();
        interactive_loop(&mut game, input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("lower player action: move a2 a3\n"));
        assert!(text.contains("UPPER player action: move e4 e3\n"));
        assert_eq!(game.turn(), 2);
        assert!(text.ends_with("lower>"));
    }

    #[test]
    fn interactive_ends_on_illegal_command() {
        let mut game = GameState::starting_position();
        let input: &[u8] = b"move e4 e3\nmove a2 a3\n";
        let mut out = Vec::new();
        interactive_loop(&mut game, input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("UPPER player wins.  Illegal move.\n"));
        assert_eq!(game.turn(), 0);
    }
}
