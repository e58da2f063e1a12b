//! Word tokenization.
//!
//! Letters and digits form words, and hyphens or apostrophes inside a word keep
//! it whole (`year-old`, `o'clock`). A number glued to a hyphenated compound
//! is split off (`5-year-old` becomes `5` `year-old`). Any other
//! non-space character is a token of its own.

use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)]
static NUMERIC_COMPOUND_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d)-(\p{L})").expect("compound pattern is valid"));

#[allow(clippy::expect_used)]
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['\-][\p{L}\p{N}]+)*|\S").expect("token pattern is valid")
});

#[must_use]
pub fn tokenize(sentence: &str) -> Vec<String> {
    let spaced = NUMERIC_COMPOUND_RE.replace_all(sentence, "$1 $2");
    TOKEN_RE
        .find_iter(&spaced)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separates_trailing_period() {
        assert_eq!(
            tokenize("he is 34 years old ."),
            vec!["he", "is", "34", "years", "old", "."]
        );
    }

    #[test]
    fn splits_number_from_hyphenated_compound() {
        assert_eq!(tokenize("a 5-year-old boy"), vec!["a", "5", "year-old", "boy"]);
    }

    #[test]
    fn keeps_unit_numbers_together() {
        assert_eq!(tokenize("#05-12 blk 5"), vec!["#", "05-12", "blk", "5"]);
    }

    #[test]
    fn punctuation_is_tokenized_separately() {
        assert_eq!(tokenize("(ncid):"), vec!["(", "ncid", ")", ":"]);
    }

    #[test]
    fn keeps_apostrophes_inside_words() {
        assert_eq!(tokenize("st. andrew's"), vec!["st", ".", "andrew's"]);
    }
}
