//! Terminal front end: command parsing, game-file loading, rendering, and
//! the session loops.

mod command;
mod error;
mod loader;
mod render;
mod session;

pub use command::parse_command;
pub use error::{LoadError, ParseError};
pub use loader::{load_file, load_str, GameFile};
pub use render::{game_report, prompt, start_report};
pub use session::{replay, run_file, run_interactive};
