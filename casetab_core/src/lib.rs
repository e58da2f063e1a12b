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

//! Rule-based extraction of case fields (age, nationality, hospital, address)
//! from tagged patient-case narratives.

pub mod assembler;
pub mod error;
pub mod extract;
pub mod linguistic;
pub mod lookup;
pub mod token;

#[cfg(test)]
mod testing;

pub use assembler::{Assembler, CasePair, Record, ResultTable, pair_lines, parse_case_number};
pub use error::{Error, Result};
pub use extract::{capwords, extract_address, extract_age, extract_hospital, extract_nationality};
pub use linguistic::{LinguisticService, ServiceError, Stemmer};
pub use lookup::{Lookups, ReferenceList};
pub use token::{Narrative, PosTag, Sentence, Token, join_words};
