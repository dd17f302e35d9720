use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wordsplit")]
#[command(
    about = "Find six-letter dictionary words made of two shorter dictionary words",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Dictionary file, one word per line
    pub input: PathBuf,

    /// Report file (created or overwritten)
    pub output: PathBuf,

    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
