//! Deterministic stand-ins for the linguistic service used by unit tests.

use std::collections::HashMap;

use crate::linguistic::{LinguisticService, ServiceError, Stemmer};
use crate::token::{Narrative, PosTag, Sentence, Token};

/// Parses `"word/TAG word/TAG ..."` into a sentence.
#[must_use]
pub fn tagged(line: &str) -> Sentence {
    line.split_whitespace()
        .map(|pair| {
            let (word, tag) = pair.rsplit_once('/').unwrap_or((pair, "NN"));
            Token::new(word, tag.parse().unwrap_or(PosTag::NN))
        })
        .collect::<Vec<_>>()
        .into()
}

#[must_use]
pub fn narrative(sentences: &[&str]) -> Narrative {
    sentences.iter().map(|s| tagged(s)).collect::<Vec<_>>().into()
}

/// Fixed stem table covering the trigger words.
pub struct StemTable;

impl Stemmer for StemTable {
    fn stem(&self, word: &str) -> String {
        match word {
            "stay" | "stays" | "stayed" | "staying" => "stay",
            "ward" | "wards" | "warded" | "warding" => "ward",
            other => other,
        }
        .to_string()
    }
}

/// Splits on `" . "`, tags from a fixed word table (digits become `CD`,
/// unknown words `NN`) and stems with [`StemTable`].
pub struct FixedLinguistics {
    tags: HashMap<&'static str, PosTag>,
    fail_on: Option<&'static str>,
}

impl Default for FixedLinguistics {
    fn default() -> Self {
        Self::new()
    }
}

impl FixedLinguistics {
    #[must_use]
    pub fn new() -> Self {
        let tags = [
            ("at", PosTag::IN),
            ("in", PosTag::IN),
            ("with", PosTag::IN),
            ("since", PosTag::IN),
            ("and", PosTag::CC),
            ("or", PosTag::CC),
            ("he", PosTag::PRP),
            ("she", PosTag::PRP),
            ("a", PosTag::DT),
            ("the", PosTag::DT),
            ("is", PosTag::VBZ),
            ("was", PosTag::VBD),
            ("stayed", PosTag::VBD),
            ("returned", PosTag::VBD),
            ("warded", PosTag::VBN),
            (".", PosTag::Period),
        ]
        .into_iter()
        .collect();
        Self {
            tags,
            fail_on: None,
        }
    }

    /// Makes tagging fail for any sentence containing `word`.
    #[must_use]
    pub fn failing_on(mut self, word: &'static str) -> Self {
        self.fail_on = Some(word);
        self
    }
}

impl Stemmer for FixedLinguistics {
    fn stem(&self, word: &str) -> String {
        StemTable.stem(word)
    }
}

impl LinguisticService for FixedLinguistics {
    fn sentences(&self, text: &str) -> Result<Vec<String>, ServiceError> {
        Ok(text
            .split_inclusive(" .")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn tag(&self, sentence: &str) -> Result<Sentence, ServiceError> {
        if let Some(word) = self.fail_on {
            if sentence.split_whitespace().any(|w| w == word) {
                return Err(ServiceError::Tag {
                    sentence: sentence.to_string(),
                    reason: format!("refused word {word:?}"),
                });
            }
        }
        Ok(sentence
            .split_whitespace()
            .map(|word| {
                let tag = if word.chars().all(|c| c.is_ascii_digit()) {
                    PosTag::CD
                } else {
                    self.tags.get(word).copied().unwrap_or(PosTag::NN)
                };
                Token::new(word, tag)
            })
            .collect::<Vec<_>>()
            .into())
    }
}
