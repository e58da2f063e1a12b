#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Bundled English linguistic service for casetab.

mod service;
pub mod splitter;
pub mod tagger;
pub mod tokenizer;

pub use service::RuleLinguistics;
pub use splitter::split_sentences;
pub use tagger::tag_words;
pub use tokenizer::tokenize;
