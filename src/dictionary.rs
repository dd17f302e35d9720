//! Dictionary loading.
//!
//! A dictionary is a line-delimited word list read into a hash set for
//! O(1) membership tests. Each line is trimmed of surrounding whitespace
//! (which also drops the `\r` of CRLF files). Lines that are blank after
//! trimming are kept as the empty-string entry; no split ever produces an
//! empty prefix or suffix, so that entry never affects matching.

use crate::errors::{DataAccessError, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Deduplicated set of normalized words. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    /// Build a dictionary from raw lines, applying the same normalization as
    /// [`load_dictionary`].
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|line| normalize(line.as_ref()).to_owned())
                .collect(),
        }
    }
}

fn normalize(line: &str) -> &str {
    line.trim()
}

/// Read a dictionary from any buffered line source.
///
/// `origin` only labels errors; it is usually the path the reader was
/// opened from. A line that is not valid UTF-8 fails the whole load.
pub fn load_dictionary<R: BufRead>(reader: R, origin: &Path) -> Result<Dictionary> {
    let mut words = HashSet::new();
    for line in reader.lines() {
        let line = line.map_err(|e| DataAccessError::read(origin, e))?;
        words.insert(normalize(&line).to_owned());
    }

    tracing::debug!(path = %origin.display(), words = words.len(), "dictionary loaded");
    Ok(Dictionary { words })
}

/// Open `path` and load it as a dictionary.
pub fn read_dictionary(path: &Path) -> Result<Dictionary> {
    let file = File::open(path).map_err(|e| DataAccessError::read(path, e))?;
    load_dictionary(BufReader::new(file), path)
}
