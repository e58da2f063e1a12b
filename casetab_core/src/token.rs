//! Tagged token stream: the shape every extractor consumes.
//!
//! Tokens come out of a [`LinguisticService`](crate::LinguisticService) and are
//! never modified afterwards. Tags follow the Penn Treebank convention, which is
//! what the extraction rules are written against.

use serde::{Deserialize, Serialize};

/// Penn Treebank part-of-speech tag.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    /// Coordinating conjunction: and, or, but
    CC,
    /// Cardinal number
    CD,
    DT,
    EX,
    FW,
    /// Preposition or subordinating conjunction: at, in, because
    IN,
    JJ,
    JJR,
    JJS,
    LS,
    MD,
    NN,
    NNS,
    NNP,
    NNPS,
    PDT,
    POS,
    PRP,
    PRPS,
    RB,
    RBR,
    RBS,
    RP,
    SYM,
    TO,
    UH,
    VB,
    /// Verb, past tense: took
    VBD,
    VBG,
    /// Verb, past participle: taken
    VBN,
    VBP,
    VBZ,
    WDT,
    WP,
    WPS,
    WRB,
    /// Sentence-final punctuation
    Period,
    Comma,
    Colon,
    OpenParen,
    CloseParen,
    OpenQuote,
    CloseQuote,
    Dollar,
    Pound,
}

impl PosTag {
    /// Returns the Penn Treebank spelling of the tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CC => "CC",
            Self::CD => "CD",
            Self::DT => "DT",
            Self::EX => "EX",
            Self::FW => "FW",
            Self::IN => "IN",
            Self::JJ => "JJ",
            Self::JJR => "JJR",
            Self::JJS => "JJS",
            Self::LS => "LS",
            Self::MD => "MD",
            Self::NN => "NN",
            Self::NNS => "NNS",
            Self::NNP => "NNP",
            Self::NNPS => "NNPS",
            Self::PDT => "PDT",
            Self::POS => "POS",
            Self::PRP => "PRP",
            Self::PRPS => "PRP$",
            Self::RB => "RB",
            Self::RBR => "RBR",
            Self::RBS => "RBS",
            Self::RP => "RP",
            Self::SYM => "SYM",
            Self::TO => "TO",
            Self::UH => "UH",
            Self::VB => "VB",
            Self::VBD => "VBD",
            Self::VBG => "VBG",
            Self::VBN => "VBN",
            Self::VBP => "VBP",
            Self::VBZ => "VBZ",
            Self::WDT => "WDT",
            Self::WP => "WP",
            Self::WPS => "WP$",
            Self::WRB => "WRB",
            Self::Period => ".",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::OpenQuote => "``",
            Self::CloseQuote => "''",
            Self::Dollar => "$",
            Self::Pound => "#",
        }
    }

    /// Preposition or subordinating conjunction (`IN`).
    #[must_use]
    pub const fn is_preposition(self) -> bool {
        matches!(self, Self::IN)
    }

    /// Coordinating conjunction (`CC`).
    #[must_use]
    pub const fn is_coordinating_conjunction(self) -> bool {
        matches!(self, Self::CC)
    }

    /// Simple past (`VBD`) or past participle (`VBN`).
    #[must_use]
    pub const fn is_past_verb(self) -> bool {
        matches!(self, Self::VBD | Self::VBN)
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PosTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = match s {
            "CC" => Self::CC,
            "CD" => Self::CD,
            "DT" => Self::DT,
            "EX" => Self::EX,
            "FW" => Self::FW,
            "IN" => Self::IN,
            "JJ" => Self::JJ,
            "JJR" => Self::JJR,
            "JJS" => Self::JJS,
            "LS" => Self::LS,
            "MD" => Self::MD,
            "NN" => Self::NN,
            "NNS" => Self::NNS,
            "NNP" => Self::NNP,
            "NNPS" => Self::NNPS,
            "PDT" => Self::PDT,
            "POS" => Self::POS,
            "PRP" => Self::PRP,
            "PRP$" => Self::PRPS,
            "RB" => Self::RB,
            "RBR" => Self::RBR,
            "RBS" => Self::RBS,
            "RP" => Self::RP,
            "SYM" => Self::SYM,
            "TO" => Self::TO,
            "UH" => Self::UH,
            "VB" => Self::VB,
            "VBD" => Self::VBD,
            "VBG" => Self::VBG,
            "VBN" => Self::VBN,
            "VBP" => Self::VBP,
            "VBZ" => Self::VBZ,
            "WDT" => Self::WDT,
            "WP" => Self::WP,
            "WP$" => Self::WPS,
            "WRB" => Self::WRB,
            "." => Self::Period,
            "," => Self::Comma,
            ":" => Self::Colon,
            "(" => Self::OpenParen,
            ")" => Self::CloseParen,
            "``" => Self::OpenQuote,
            "''" => Self::CloseQuote,
            "$" => Self::Dollar,
            "#" => Self::Pound,
            _ => return Err(format!("unknown part-of-speech tag: {s}")),
        };
        Ok(tag)
    }
}

/// A word together with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    text: String,
    tag: PosTag,
}

impl Token {
    #[must_use]
    pub fn new(text: impl Into<String>, tag: PosTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn tag(&self) -> PosTag {
        self.tag
    }
}

/// Ordered tokens of one sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<Vec<Token>> for Sentence {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

/// All sentences of one case description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    sentences: Vec<Sentence>,
}

impl Narrative {
    #[must_use]
    pub const fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    #[must_use]
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Total token count across sentences.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }
}

impl From<Vec<Sentence>> for Narrative {
    fn from(sentences: Vec<Sentence>) -> Self {
        Self::new(sentences)
    }
}

/// Joins token texts with single spaces, tags discarded.
#[must_use]
pub fn join_words(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::text)
        .collect::<Vec<_>>()
        .join(" ")
}
