//! The load → filter → match → write pipeline.
//!
//! Each stage is a pure function of its inputs except the two ends, which
//! touch the filesystem. `run` times every phase and returns a
//! [`RunSummary`] for the caller to report.

use crate::config::RunConfig;
use crate::dictionary::{read_dictionary, Dictionary};
use crate::errors::Result;
use crate::filter::six_letter_words;
use crate::matcher::{find_matches, MatchRecord};
use crate::observability::Phase;
use crate::output::write_output;
use std::time::{Duration, Instant};
use tracing::info;

/// Counts and timings from a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub dictionary_words: usize,
    pub candidates: usize,
    pub matches: usize,
    pub phase_timings: Vec<(Phase, Duration)>,
    pub elapsed: Duration,
}

impl RunSummary {
    #[must_use]
    pub fn phase_duration(&self, phase: Phase) -> Option<Duration> {
        self.phase_timings
            .iter()
            .find(|(p, _)| *p == phase)
            .map(|(_, d)| *d)
    }

    /// Total run time in whole milliseconds, rounded to nearest.
    #[must_use]
    pub fn elapsed_ms(&self) -> u128 {
        (self.elapsed.as_nanos() + 500_000) / 1_000_000
    }

    /// Banner printed on success.
    #[must_use]
    pub fn banner(&self) -> String {
        let rule = "-".repeat(45);
        format!(
            "{rule}\nSUCCESS: Application execution time = {} ms\n{rule}",
            self.elapsed_ms()
        )
    }
}

/// Run `f` inside the span for `phase`, recording how long it took.
fn timed<T>(phase: Phase, timings: &mut Vec<(Phase, Duration)>, f: impl FnOnce() -> T) -> T {
    let span = tracing::info_span!("phase", name = phase.as_str());
    let _enter = span.enter();
    let start = Instant::now();
    let value = f();
    let took = start.elapsed();
    tracing::debug!(elapsed = ?took, "phase complete");
    timings.push((phase, took));
    value
}

/// Pure part of the pipeline: filter then match.
#[must_use]
pub fn compound_words(dictionary: &Dictionary) -> Vec<MatchRecord<'_>> {
    let candidates = six_letter_words(dictionary);
    find_matches(&candidates, dictionary)
}

/// Execute a full run. Fails before writing anything if the dictionary
/// cannot be read.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let started = Instant::now();
    let mut timings = Vec::with_capacity(Phase::ALL.len());

    let dictionary = timed(Phase::Load, &mut timings, || read_dictionary(&config.input))?;
    info!(words = dictionary.len(), path = %config.input.display(), "dictionary loaded");

    let candidates = timed(Phase::Filter, &mut timings, || six_letter_words(&dictionary));
    info!(candidates = candidates.len(), "six-letter candidates selected");

    let records = timed(Phase::Match, &mut timings, || {
        find_matches(&candidates, &dictionary)
    });
    info!(matches = records.len(), "split matching finished");

    timed(Phase::Write, &mut timings, || {
        write_output(&config.output, &records)
    })?;

    let summary = RunSummary {
        dictionary_words: dictionary.len(),
        candidates: candidates.len(),
        matches: records.len(),
        phase_timings: timings,
        elapsed: started.elapsed(),
    };
    info!(
        load = ?summary.phase_duration(Phase::Load),
        filter = ?summary.phase_duration(Phase::Filter),
        matching = ?summary.phase_duration(Phase::Match),
        write = ?summary.phase_duration(Phase::Write),
        total = ?summary.elapsed,
        "phase timings"
    );
    Ok(summary)
}
