//! Length filter selecting the candidate words.

use crate::dictionary::Dictionary;

/// Length, in characters, of the words we try to split.
pub const TARGET_LENGTH: usize = 6;

/// Pure function returning every dictionary entry exactly [`TARGET_LENGTH`]
/// characters long. Entries are borrowed from the dictionary, in unspecified
/// order.
#[must_use]
pub fn six_letter_words(dictionary: &Dictionary) -> Vec<&str> {
    dictionary
        .iter()
        .filter(|word| has_target_length(word))
        .collect()
}

/// Counts Unicode scalar values, not bytes.
fn has_target_length(word: &str) -> bool {
    word.chars().count() == TARGET_LENGTH
}
