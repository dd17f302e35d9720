//! Split matching: find candidate words that are two dictionary words joined.
//!
//! For each candidate, every split point that leaves both sides non-empty is
//! tested against the full dictionary. A candidate can produce several
//! records, one per valid split.

use crate::dictionary::Dictionary;
use std::fmt;

/// A candidate word together with one valid way to split it.
///
/// Invariant: `prefix + suffix == whole`, both halves are non-empty, and all
/// three strings are dictionary entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchRecord<'a> {
    pub prefix: &'a str,
    pub suffix: &'a str,
    pub whole: &'a str,
}

impl MatchRecord<'_> {
    /// Byte offset of the split within `whole`.
    #[must_use]
    pub fn split_index(&self) -> usize {
        self.prefix.len()
    }
}

impl fmt::Display for MatchRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} => {}", self.prefix, self.suffix, self.whole)
    }
}

/// Every way to cut `word` into a non-empty prefix and non-empty suffix.
///
/// Cuts fall on char boundaries, so a six-character word always yields
/// five pairs regardless of its byte length.
pub fn split_points(word: &str) -> impl Iterator<Item = (&str, &str)> {
    word.char_indices()
        .skip(1)
        .map(move |(index, _)| word.split_at(index))
}

/// Match all candidates against the dictionary.
///
/// Output is sorted by whole word, then by split position, so repeated runs
/// over the same dictionary produce identical sequences.
#[must_use]
pub fn find_matches<'a>(candidates: &[&'a str], dictionary: &Dictionary) -> Vec<MatchRecord<'a>> {
    let mut records: Vec<MatchRecord<'a>> = candidates
        .iter()
        .flat_map(|&whole| matches_for(whole, dictionary))
        .collect();

    records.sort_unstable_by(|a, b| {
        a.whole
            .cmp(b.whole)
            .then_with(|| a.split_index().cmp(&b.split_index()))
    });
    records
}

fn matches_for<'a, 'd>(
    whole: &'a str,
    dictionary: &'d Dictionary,
) -> impl Iterator<Item = MatchRecord<'a>> + 'd
where
    'a: 'd,
{
    split_points(whole)
        .filter(move |(prefix, suffix)| dictionary.contains(prefix) && dictionary.contains(suffix))
        .map(move |(prefix, suffix)| MatchRecord {
            prefix,
            suffix,
            whole,
        })
}
