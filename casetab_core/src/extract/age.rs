//! Age: `<n> year-old` and `<n> years old`.

use std::num::{IntErrorKind, ParseIntError};

use crate::error::{Error, Result};
use crate::extract::try_last_match;
use crate::token::{Narrative, Token};

/// Returns the age stated by the last matching pattern, if any.
///
/// # Errors
/// Returns [`Error::MalformedAgeToken`] when the word in front of an age
/// pattern is not a base-10 integer, and [`Error::AgeOutOfRange`] when it is
/// one too large for a `u32`.
pub fn extract_age(narrative: &Narrative) -> Result<Option<u32>> {
    try_last_match(narrative, |tokens, index| {
        age_word(tokens, index).map(parse_age).transpose()
    })
}

/// The word that should hold the number, when `index` starts an age pattern.
fn age_word(tokens: &[Token], index: usize) -> Option<&str> {
    let previous = tokens.get(index.checked_sub(1)?)?.text();
    match tokens[index].text() {
        "year-old" => Some(previous),
        "years" if tokens.get(index + 1).is_some_and(|next| next.text() == "old") => {
            Some(previous)
        }
        _ => None,
    }
}

fn parse_age(word: &str) -> Result<u32> {
    word.parse().map_err(|e: ParseIntError| {
        let token = word.to_string();
        match e.kind() {
            IntErrorKind::PosOverflow => Error::AgeOutOfRange { token },
            _ => Error::MalformedAgeToken { token },
        }
    })
}
