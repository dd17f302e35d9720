//! Find six-letter words that are two shorter dictionary words joined.
//!
//! The library is a pipeline of small functions:
//! [`read_dictionary`] → [`six_letter_words`] → [`find_matches`] →
//! [`write_output`]. Only the two ends touch the filesystem; both fail with
//! [`DataAccessError`].

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod errors;
pub mod filter;
pub mod matcher;
pub mod observability;
pub mod output;
pub mod pipeline;

// Re-export commonly used types
pub use crate::config::RunConfig;
pub use crate::dictionary::{load_dictionary, read_dictionary, Dictionary};
pub use crate::errors::{AccessKind, DataAccessError};
pub use crate::filter::{six_letter_words, TARGET_LENGTH};
pub use crate::matcher::{find_matches, split_points, MatchRecord};
pub use crate::output::{render, write_matches, write_output};
pub use crate::pipeline::{compound_words, run, RunSummary};
