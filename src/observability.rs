//! Logging setup and pipeline phase names.
//!
//! Diagnostics go to stderr through `tracing`; stdout is left for the
//! timing summary. Each pipeline phase runs inside a span named after its
//! [`Phase`], so log lines carry the phase they were emitted from.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Major stages of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Reading the dictionary file
    Load,
    /// Selecting six-letter candidates
    Filter,
    /// Testing split points of each candidate
    Match,
    /// Writing the report
    Write,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Load, Phase::Filter, Phase::Match, Phase::Write];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Filter => "filter",
            Self::Match => "match",
            Self::Write => "write",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map `-v` occurrences to a filter directive.
#[must_use]
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global stderr subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::new(format!("wordsplit={}", level_for_verbosity(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
