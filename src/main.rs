use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "5x5 mini-shogi rules engine", long_about = None)]
struct Args {
    /// Replay a game file and print the resulting reports
    #[arg(short = 'f', long = "file", value_name = "FILE", conflicts_with = "interactive", required_unless_present = "interactive")]
    file: Option<PathBuf>,

    /// Play interactively on the terminal
    #[arg(short = 'i', long = "interactive")]
    interactive: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    if let Some(path) = args.file {
        boxshogi_cli::run_file(&path)?;
    } else {
        info!("starting interactive game");
        boxshogi_cli::run_interactive()?;
    }
    Ok(())
}
