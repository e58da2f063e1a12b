//! Lexicon and suffix based part-of-speech tagger.
//!
//! Closed-class words (prepositions, conjunctions, determiners, pronouns,
//! auxiliaries) come from fixed lexicons; open-class words are guessed from
//! their suffix. Regular `-ed` forms and ambiguous irregular forms are tagged
//! `VBN` after a form of "be" or "have" (an adverb may sit in between) and
//! `VBD` otherwise.

use std::collections::HashMap;

use casetab_core::{PosTag, Token};
use once_cell::sync::Lazy;

const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "although", "among", "around", "as",
    "at", "because", "before", "behind", "below", "beneath", "beside", "besides", "between",
    "beyond", "by", "despite", "during", "except", "for", "from", "if", "in", "inside", "into",
    "like", "near", "of", "off", "on", "onto", "outside", "over", "per", "since", "than", "that",
    "though", "through", "throughout", "till", "toward", "towards", "under", "unless", "until",
    "upon", "via", "whereas", "whether", "while", "with", "within", "without",
];

const CONJUNCTIONS: &[&str] = &["and", "but", "nor", "or", "plus", "yet", "&"];

const DETERMINERS: &[&str] = &[
    "a", "an", "another", "any", "each", "either", "every", "neither", "no", "some", "the",
    "these", "this", "those",
];

const PRONOUNS: &[&str] = &[
    "he", "her", "hers", "herself", "him", "himself", "i", "it", "itself", "me", "myself", "one",
    "she", "them", "themselves", "they", "us", "we", "you",
];

const POSSESSIVES: &[&str] = &["his", "its", "my", "our", "their", "your"];

const MODALS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would",
];

const WH_WORDS: &[(&str, PosTag)] = &[
    ("which", PosTag::WDT),
    ("who", PosTag::WP),
    ("whom", PosTag::WP),
    ("what", PosTag::WP),
    ("whose", PosTag::WPS),
    ("where", PosTag::WRB),
    ("when", PosTag::WRB),
    ("why", PosTag::WRB),
    ("how", PosTag::WRB),
];

/// Forms of "be" and "have" that turn a following past form into a participle.
const AUXILIARIES: &[&str] = &[
    "am", "are", "be", "been", "being", "had", "has", "have", "having", "is", "was", "were",
];

const FIXED: &[(&str, PosTag)] = &[
    ("am", PosTag::VBP),
    ("are", PosTag::VBP),
    ("be", PosTag::VB),
    ("been", PosTag::VBN),
    ("being", PosTag::VBG),
    ("did", PosTag::VBD),
    ("do", PosTag::VBP),
    ("does", PosTag::VBZ),
    ("had", PosTag::VBD),
    ("has", PosTag::VBZ),
    ("have", PosTag::VBP),
    ("is", PosTag::VBZ),
    ("was", PosTag::VBD),
    ("were", PosTag::VBD),
    ("there", PosTag::EX),
    ("to", PosTag::TO),
    ("not", PosTag::RB),
    ("also", PosTag::RB),
    ("then", PosTag::RB),
    ("later", PosTag::RB),
    ("subsequently", PosTag::RB),
    ("home", PosTag::NN),
    ("old", PosTag::JJ),
    ("year-old", PosTag::JJ),
    ("permanent", PosTag::JJ),
    ("all", PosTag::PDT),
    ("both", PosTag::DT),
];

/// Irregular simple-past forms.
const PAST: &[&str] = &[
    "ate", "became", "began", "came", "drove", "flew", "gave", "got", "knew", "rode", "ran", "rose",
    "saw", "took", "went", "woke", "wrote",
];

/// Irregular past participles.
const PARTICIPLES: &[&str] = &[
    "begun", "driven", "eaten", "flown", "given", "gone", "gotten", "known", "ridden", "risen",
    "seen", "taken", "woken", "written",
];

/// Irregular forms used both as simple past and participle.
const PAST_OR_PARTICIPLE: &[&str] = &[
    "bought", "brought", "built", "felt", "fled", "found", "heard", "held", "kept", "led", "left",
    "lost", "made", "met", "paid", "said", "sent", "spent", "stood", "taught", "thought", "told",
];

/// Words ending in `-ed` that are not verb forms.
const NOT_PAST: &[&str] = &[
    "bed", "bleed", "breed", "embed", "feed", "hundred", "need", "red", "seed", "shed", "sled",
    "speed", "shred", "weed",
];

/// Words ending in `-ly` that are not adverbs.
const NOT_ADVERB: &[&str] = &[
    "ally", "anomaly", "apply", "assembly", "belly", "bully", "family", "fly", "holy", "italy",
    "jelly", "july", "lily", "rally", "reply", "supply", "ugly",
];

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

#[derive(Clone, Copy)]
enum Entry {
    Tag(PosTag),
    /// Past form whose tag depends on a preceding auxiliary.
    PastForm,
}

static LEXICON: Lazy<HashMap<&'static str, Entry>> = Lazy::new(|| {
    let mut lexicon = HashMap::new();
    let classes: [(&[&str], PosTag); 8] = [
        (PREPOSITIONS, PosTag::IN),
        (CONJUNCTIONS, PosTag::CC),
        (DETERMINERS, PosTag::DT),
        (PRONOUNS, PosTag::PRP),
        (POSSESSIVES, PosTag::PRPS),
        (MODALS, PosTag::MD),
        (PAST, PosTag::VBD),
        (PARTICIPLES, PosTag::VBN),
    ];
    for (words, tag) in classes {
        for word in words {
            lexicon.insert(*word, Entry::Tag(tag));
        }
    }
    for word in NUMBER_WORDS {
        // "one" stays a pronoun
        lexicon.entry(*word).or_insert(Entry::Tag(PosTag::CD));
    }
    for word in NOT_PAST.iter().chain(NOT_ADVERB) {
        lexicon.insert(*word, Entry::Tag(PosTag::NN));
    }
    for word in PAST_OR_PARTICIPLE {
        lexicon.insert(*word, Entry::PastForm);
    }
    for (word, tag) in WH_WORDS.iter().chain(FIXED) {
        lexicon.insert(*word, Entry::Tag(*tag));
    }
    lexicon
});

/// Tags a tokenized sentence.
#[must_use]
pub fn tag_words<S: AsRef<str>>(words: &[S]) -> Vec<Token> {
    let mut after_auxiliary = false;
    words
        .iter()
        .map(|word| {
            let word = word.as_ref();
            let tag = tag_word(word, after_auxiliary);
            after_auxiliary = if AUXILIARIES.contains(&word) {
                true
            } else {
                after_auxiliary && matches!(tag, PosTag::RB)
            };
            Token::new(word, tag)
        })
        .collect()
}

fn tag_word(word: &str, after_auxiliary: bool) -> PosTag {
    let past = || {
        if after_auxiliary {
            PosTag::VBN
        } else {
            PosTag::VBD
        }
    };

    if let Some(tag) = punctuation(word) {
        return tag;
    }
    if word.starts_with(|c: char| c.is_ascii_digit()) {
        return PosTag::CD;
    }
    match LEXICON.get(word) {
        Some(Entry::Tag(tag)) => return *tag,
        Some(Entry::PastForm) => return past(),
        None => {}
    }

    let len = word.chars().count();
    if len > 3 && word.ends_with("ed") {
        past()
    } else if len > 4 && word.ends_with("ing") {
        PosTag::VBG
    } else if len > 3 && word.ends_with("ly") {
        PosTag::RB
    } else if len > 3
        && word.ends_with('s')
        && !["ss", "us", "is"].iter().any(|end| word.ends_with(end))
    {
        PosTag::NNS
    } else {
        PosTag::NN
    }
}

fn punctuation(word: &str) -> Option<PosTag> {
    let mut chars = word.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    if c.is_alphanumeric() {
        return None;
    }
    Some(match c {
        '.' | '!' | '?' => PosTag::Period,
        ',' => PosTag::Comma,
        ':' | ';' | '-' => PosTag::Colon,
        '(' | '[' | '{' => PosTag::OpenParen,
        ')' | ']' | '}' => PosTag::CloseParen,
        '"' | '\'' => PosTag::OpenQuote,
        '$' => PosTag::Dollar,
        '#' => PosTag::Pound,
        _ => PosTag::SYM,
    })
}
