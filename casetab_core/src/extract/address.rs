//! Address: the span following "stay(ed/ing) at|in".
//!
//! After a trigger, words are collected until the clause stops looking like a
//! location. The scan is a small state machine driven by the tag of the word
//! under the cursor:
//!
//! - anything other than `CC`/`IN` is collected;
//! - `CC` after `home` discards the span; `CC` followed by a past-tense verb
//!   ends it; any other `CC` joins two locations and is collected;
//! - `IN` after `home` restarts the span if it is `at`/`in`, otherwise discards
//!   it; without `home`, `at`/`in` is collected and any other `IN` ends it.

use crate::extract::{capwords, last_match};
use crate::linguistic::Stemmer;
use crate::token::{Narrative, Token};

const TRIGGER_STEM: &str = "stay";
const HOME: &str = "home";
const DROPPED_WORDS: [&str; 2] = [".", ","];

/// Title-cased address of the last stay clause, or empty.
///
/// Every trigger overwrites the result, including triggers whose span ends up
/// empty.
#[must_use]
pub fn extract_address<S>(narrative: &Narrative, stemmer: &S) -> String
where
    S: Stemmer + ?Sized,
{
    last_match(narrative, |tokens, index| {
        is_trigger(tokens, index, stemmer).then(|| {
            let words = AddressScan::new(tokens, index + 2).run();
            finalize(&words)
        })
    })
    .unwrap_or_default()
}

fn is_trigger<S>(tokens: &[Token], index: usize, stemmer: &S) -> bool
where
    S: Stemmer + ?Sized,
{
    let Some(next) = tokens.get(index + 1) else {
        return false;
    };
    next.tag().is_preposition()
        && is_locative(next.text())
        && stemmer.stem(tokens[index].text()) == TRIGGER_STEM
}

const fn is_locative(word: &str) -> bool {
    matches!(word.as_bytes(), b"at" | b"in")
}

fn finalize(words: &[&str]) -> String {
    let kept: Vec<&str> = words
        .iter()
        .copied()
        .filter(|word| !DROPPED_WORDS.contains(word))
        .collect();
    capwords(&kept.join(" "))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Reading the word under the cursor.
    Collecting,
    /// Cursor sits on a coordinating conjunction.
    AfterConjunction,
    /// Cursor sits on a preposition or subordinator.
    AfterPreposition,
    Terminated,
}

struct AddressScan<'a> {
    tokens: &'a [Token],
    cursor: usize,
    buffer: Vec<&'a str>,
}

impl<'a> AddressScan<'a> {
    const fn new(tokens: &'a [Token], start: usize) -> Self {
        Self {
            tokens,
            cursor: start,
            buffer: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<&'a str> {
        let mut state = ScanState::Collecting;
        while state != ScanState::Terminated {
            state = match state {
                ScanState::Collecting => self.collecting(),
                ScanState::AfterConjunction => self.after_conjunction(),
                ScanState::AfterPreposition => self.after_preposition(),
                ScanState::Terminated => ScanState::Terminated,
            };
        }
        self.buffer
    }

    fn collecting(&mut self) -> ScanState {
        let Some(token) = self.current() else {
            return ScanState::Terminated;
        };
        let tag = token.tag();
        if tag.is_coordinating_conjunction() {
            ScanState::AfterConjunction
        } else if tag.is_preposition() {
            ScanState::AfterPreposition
        } else {
            self.accept();
            ScanState::Collecting
        }
    }

    fn after_conjunction(&mut self) -> ScanState {
        if self.holds_home() {
            self.buffer.clear();
            return ScanState::Terminated;
        }
        let verb_follows = self
            .tokens
            .get(self.cursor + 1)
            .is_some_and(|next| next.tag().is_past_verb());
        if verb_follows {
            return ScanState::Terminated;
        }
        self.accept();
        ScanState::Collecting
    }

    fn after_preposition(&mut self) -> ScanState {
        let locative = self.current().is_some_and(|token| is_locative(token.text()));
        match (self.holds_home(), locative) {
            (true, true) => {
                self.buffer.clear();
                self.cursor += 1;
                ScanState::Collecting
            }
            (true, false) => {
                self.buffer.clear();
                ScanState::Terminated
            }
            (false, true) => {
                self.accept();
                ScanState::Collecting
            }
            (false, false) => ScanState::Terminated,
        }
    }

    fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.cursor)
    }

    /// Moves the word under the cursor into the buffer and advances.
    fn accept(&mut self) {
        if let Some(token) = self.current() {
            self.buffer.push(token.text());
        }
        self.cursor += 1;
    }

    fn holds_home(&self) -> bool {
        self.buffer.contains(&HOME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{StemTable, narrative};

    fn address(sentences: &[&str]) -> String {
        extract_address(&narrative(sentences), &StemTable)
    }

    #[test]
    fn plain_address_up_to_sentence_end() {
        assert_eq!(
            address(&["he/PRP stayed/VBD at/IN 10/CD orchard/NN road/NN ./."]),
            "10 Orchard Road"
        );
    }

    #[test]
    fn home_then_locative_restarts_span() {
        assert_eq!(
            address(&["he/PRP stayed/VBD at/IN home/NN at/IN 10/CD orchard/NN road/NN ./."]),
            "10 Orchard Road"
        );
    }

    #[test]
    fn home_then_conjunction_discards_span() {
        assert_eq!(
            address(&["he/PRP stayed/VBD at/IN home/NN and/CC at/IN 10/CD orchard/NN road/NN ./."]),
            ""
        );
    }

    #[test]
    fn home_then_other_preposition_discards_span() {
        assert_eq!(
            address(&["he/PRP stayed/VBD at/IN home/NN since/IN monday/NN ./."]),
            ""
        );
    }

    #[test]
    fn conjunction_before_past_verb_ends_span() {
        assert_eq!(
            address(&["he/PRP stayed/VBD at/IN 5/CD clementi/NN ave/NN and/CC returned/VBD home/NN ./."]),
            "5 Clementi Ave"
        );
    }

    #[test]
    fn conjunction_before_participle_ends_span() {
        assert_eq!(
            address(&["he/PRP stayed/VBD at/IN 5/CD clementi/NN ave/NN and/CC warded/VBN at/IN sgh/NN ./."]),
            "5 Clementi Ave"
        );
    }

    #[test]
    fn conjunction_between_locations_is_kept() {
        assert_eq!(
            address(&["she/PRP stayed/VBD at/IN blk/NN 5/CD and/CC blk/NN 7/CD ./."]),
            "Blk 5 And Blk 7"
        );
    }

    #[test]
    fn trailing_conjunction_is_kept() {
        assert_eq!(address(&["stayed/VBD in/IN jurong/NN and/CC"]), "Jurong And");
    }

    #[test]
    fn nested_locative_is_collected() {
        assert_eq!(
            address(&["he/PRP stays/VBZ in/IN a/DT flat/NN in/IN bedok/NN ./."]),
            "A Flat In Bedok"
        );
    }

    #[test]
    fn other_preposition_ends_span_keeping_words() {
        assert_eq!(
            address(&["he/PRP stayed/VBD at/IN 5/CD clementi/NN ave/NN with/IN family/NN ./."]),
            "5 Clementi Ave"
        );
    }

    #[test]
    fn trigger_needs_locative_preposition() {
        assert_eq!(address(&["he/PRP stayed/VBD with/IN friends/NNS ./."]), "");
        assert_eq!(address(&["he/PRP stayed/VBD home/NN ./."]), "");
    }

    #[test]
    fn trigger_needs_in_tag() {
        assert_eq!(address(&["he/PRP stayed/VBD in/RP 5/CD clementi/NN ./."]), "");
    }

    #[test]
    fn later_clause_overwrites_earlier() {
        assert_eq!(
            address(&[
                "he/PRP stayed/VBD at/IN 10/CD orchard/NN road/NN ./.",
                "his/PRP$ wife/NN is/VBZ staying/VBG in/IN 3/CD bedok/NN north/NN ./.",
            ]),
            "3 Bedok North"
        );
    }

    #[test]
    fn later_empty_clause_still_overwrites() {
        assert_eq!(
            address(&[
                "he/PRP stayed/VBD at/IN 10/CD orchard/NN road/NN ./.",
                "he/PRP then/RB stayed/VBD at/IN home/NN and/CC rested/VBD ./.",
            ]),
            ""
        );
    }

    #[test]
    fn punctuation_words_are_dropped() {
        assert_eq!(
            address(&["stayed/VBD at/IN jurong/NN ,/, west/NN ./."]),
            "Jurong West"
        );
    }

    #[test]
    fn no_trigger_means_empty() {
        assert_eq!(address(&["he/PRP lives/VBZ at/IN 10/CD orchard/NN road/NN ./."]), "");
    }
}
