//! Rule-based field extractors.
//!
//! Each extractor is a pure function of a [`Narrative`] plus read-only
//! configuration. Scans run sentence by sentence, token by token, left to
//! right, and when a rule fires more than once the most recent match wins.

pub mod address;
pub mod age;
pub mod hospital;
pub mod nationality;

pub use address::extract_address;
pub use age::extract_age;
pub use hospital::extract_hospital;
pub use nationality::extract_nationality;

use crate::token::{Narrative, Token};

/// Folds a per-position rule over the whole narrative, keeping the latest hit.
///
/// The rule receives the sentence's tokens and the index under inspection.
pub(crate) fn last_match<T, F>(narrative: &Narrative, mut rule: F) -> Option<T>
where
    F: FnMut(&[Token], usize) -> Option<T>,
{
    narrative
        .sentences()
        .iter()
        .flat_map(|sentence| {
            let tokens = sentence.tokens();
            (0..tokens.len()).map(move |index| (tokens, index))
        })
        .fold(None, |latest, (tokens, index)| {
            rule(tokens, index).or(latest)
        })
}

/// Fallible variant of [`last_match`]: the first error aborts the scan.
pub(crate) fn try_last_match<T, E, F>(narrative: &Narrative, mut rule: F) -> Result<Option<T>, E>
where
    F: FnMut(&[Token], usize) -> Result<Option<T>, E>,
{
    narrative
        .sentences()
        .iter()
        .flat_map(|sentence| {
            let tokens = sentence.tokens();
            (0..tokens.len()).map(move |index| (tokens, index))
        })
        .try_fold(None, |latest, (tokens, index)| {
            Ok(rule(tokens, index)?.or(latest))
        })
}

/// Upper-cases the first letter of every whitespace-separated word and
/// lower-cases the rest, joining words with single spaces.
#[must_use]
pub fn capwords(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}
