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

//! File surfaces of casetab: case descriptions in, reference lists in, result
//! table out.

pub mod error;
pub mod input;
pub mod reference;
pub mod table;

pub use error::{Error, Result};
pub use input::read_case_pairs;
pub use reference::{load_lookups, load_reference_list};
pub use table::{write_csv, write_json, write_table};
