//! Run configuration derived from the command line.

use crate::cli::Cli;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub verbosity: u8,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            verbosity: 0,
        }
    }

    #[must_use]
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self::new(cli.input, cli.output).with_verbosity(cli.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn built_from_cli() {
        let cli = Cli::try_parse_from(["wordsplit", "-v", "in.txt", "out.txt"]).unwrap();

        assert_eq!(
            RunConfig::from(cli),
            RunConfig::new("in.txt", "out.txt").with_verbosity(1)
        );
    }
}
