//! Seam to the linguistic-analysis collaborator.
//!
//! Sentence splitting, tokenization, tagging and stemming are not done by the
//! extractors themselves. They go through these traits so the rules can be
//! driven by any tagger that speaks the Penn Treebank tag set.

use thiserror::Error;

use crate::token::Sentence;

/// Failure reported by a linguistic service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("sentence splitting failed: {0}")]
    Split(String),

    #[error("tagging failed for {sentence:?}: {reason}")]
    Tag { sentence: String, reason: String },
}

/// Maps a word to its morphological stem.
pub trait Stemmer {
    fn stem(&self, word: &str) -> String;
}

/// Everything the record assembler needs from the linguistic collaborator.
///
/// Implementations must be deterministic: the same input always yields the
/// same sentences, tags and stems.
pub trait LinguisticService: Stemmer {
    /// Splits lowercased text into sentences, in order.
    fn sentences(&self, text: &str) -> Result<Vec<String>, ServiceError>;

    /// Tokenizes and tags a single sentence.
    fn tag(&self, sentence: &str) -> Result<Sentence, ServiceError>;
}

impl<T: Stemmer + ?Sized> Stemmer for &T {
    fn stem(&self, word: &str) -> String {
        (**self).stem(word)
    }
}

impl<T: LinguisticService + ?Sized> LinguisticService for &T {
    fn sentences(&self, text: &str) -> Result<Vec<String>, ServiceError> {
        (**self).sentences(text)
    }

    fn tag(&self, sentence: &str) -> Result<Sentence, ServiceError> {
        (**self).tag(sentence)
    }
}
