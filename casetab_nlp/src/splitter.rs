//! Sentence splitting on terminal punctuation.

use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)]
static SENTENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^.!?]*[.!?]+|[^.!?]+$").expect("sentence pattern is valid")
});

/// Splits text after each run of `.`, `!` or `?`. Sentences are trimmed and
/// blank ones dropped; trailing text without a terminator is its own sentence.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty() && !is_only_terminators(s))
        .map(str::to_string)
        .collect()
}

fn is_only_terminators(s: &str) -> bool {
    s.chars().all(|c| matches!(c, '.' | '!' | '?'))
}
