use casetab_core::{LinguisticService, Sentence, ServiceError, Stemmer};
use rust_stemmers::Algorithm;
use tracing::trace;

use crate::splitter::split_sentences;
use crate::tagger::tag_words;
use crate::tokenizer::tokenize;

/// Bundled English linguistic service: regex sentence splitter and tokenizer,
/// lexicon tagger and the Snowball English stemmer.
pub struct RuleLinguistics {
    stemmer: rust_stemmers::Stemmer,
}

impl RuleLinguistics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stemmer: rust_stemmers::Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for RuleLinguistics {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleLinguistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleLinguistics")
            .field("stemmer", &"snowball-english")
            .finish()
    }
}

impl Stemmer for RuleLinguistics {
    fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }
}

impl LinguisticService for RuleLinguistics {
    fn sentences(&self, text: &str) -> Result<Vec<String>, ServiceError> {
        if has_control_characters(text) {
            return Err(ServiceError::Split(
                "control characters in text".to_string(),
            ));
        }
        Ok(split_sentences(text))
    }

    fn tag(&self, sentence: &str) -> Result<Sentence, ServiceError> {
        if has_control_characters(sentence) {
            return Err(ServiceError::Tag {
                sentence: sentence.to_string(),
                reason: "control characters in sentence".to_string(),
            });
        }
        let words = tokenize(sentence);
        let tokens = tag_words(&words);
        trace!(tokens = tokens.len(), "Tagged sentence");
        Ok(tokens.into())
    }
}

fn has_control_characters(text: &str) -> bool {
    text.contains(|c: char| c.is_control() && !c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_trigger_word_forms() {
        let service = RuleLinguistics::new();
        for word in ["stay", "stays", "stayed", "staying"] {
            assert_eq!(service.stem(word), "stay", "{word}");
        }
        for word in ["ward", "wards", "warded", "warding"] {
            assert_eq!(service.stem(word), "ward", "{word}");
        }
        assert_ne!(service.stem("award"), "ward");
    }

    #[test]
    fn tags_a_sentence() {
        let service = RuleLinguistics::new();
        let sentence = service.tag("he stayed at 5 clementi ave .");
        let tags: Vec<String> = sentence
            .map(|s| s.tokens().iter().map(|t| t.tag().to_string()).collect())
            .unwrap_or_default();
        assert_eq!(tags, vec!["PRP", "VBD", "IN", "CD", "NN", "NN", "."]);
    }

    #[test]
    fn control_characters_are_rejected() {
        let service = RuleLinguistics::new();
        assert!(matches!(
            service.tag("bad\u{0}input"),
            Err(ServiceError::Tag { .. })
        ));
        assert!(matches!(
            service.sentences("bad\u{7}input ."),
            Err(ServiceError::Split(_))
        ));
    }

    #[test]
    fn tabs_are_accepted() {
        let service = RuleLinguistics::new();
        assert_eq!(
            service.sentences("he stayed\tat home . he left ."),
            Ok(vec!["he stayed\tat home .".to_string(), "he left .".to_string()])
        );
    }
}
