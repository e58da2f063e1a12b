//! Record assembly: one [`Record`] per (header, narrative) pair.
//!
//! The assembler prepares each narrative through the linguistic service, runs
//! the four extractors independently and appends the merged record to a
//! [`ResultTable`]. Narratives never influence each other, so the parallel
//! path produces exactly the same table as the sequential one.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::extract::{extract_address, extract_age, extract_hospital, extract_nationality};
use crate::linguistic::LinguisticService;
use crate::lookup::Lookups;
use crate::token::Narrative;

/// Extracted fields of one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Case Number")]
    pub case_number: i64,
    #[serde(rename = "Age")]
    pub age: Option<u32>,
    #[serde(rename = "Nationality")]
    pub nationality: String,
    #[serde(rename = "Hospital")]
    pub hospital: String,
    #[serde(rename = "Address")]
    pub address: String,
}

impl Record {
    /// Output column names, in order.
    pub const COLUMNS: [&'static str; 5] =
        ["Case Number", "Age", "Nationality", "Hospital", "Address"];
}

/// Append-only table of records in processing order.
///
/// The row index of a record is its insertion position, independent of the
/// case number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    records: Vec<Record>,
}

impl ResultTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and returns its row index.
    pub fn push(&mut self, record: Record) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    #[must_use]
    pub fn get(&self, row: usize) -> Option<&Record> {
        self.records.get(row)
    }

    /// `(row index, record)` pairs in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &Record)> {
        self.records.iter().enumerate()
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Record> for ResultTable {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// A header line and the narrative line that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CasePair {
    pub header: String,
    pub narrative: String,
}

/// Groups non-blank lines into consecutive (header, narrative) pairs.
///
/// # Errors
/// Returns [`Error::DanglingHeader`] when the last header has no narrative.
pub fn pair_lines<I, S>(lines: I) -> Result<Vec<CasePair>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut pairs = Vec::new();
    let mut pending: Option<String> = None;
    for line in lines {
        let line = line.as_ref().trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }
        match pending.take() {
            Some(header) => pairs.push(CasePair {
                header,
                narrative: line.to_string(),
            }),
            None => pending = Some(line.to_string()),
        }
    }
    pending.map_or(Ok(pairs), |header| Err(Error::DanglingHeader { header }))
}

/// Parses `"Case <n>"`: exactly two whitespace-separated fields, the second a
/// base-10 integer.
///
/// # Errors
/// Returns [`Error::MalformedHeader`] for any other shape.
pub fn parse_case_number(line: &str) -> Result<i64> {
    let malformed = |reason: &str| Error::MalformedHeader {
        line: line.to_string(),
        reason: reason.to_string(),
    };
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [_, number] = fields.as_slice() else {
        return Err(malformed(&format!(
            "expected 2 fields, found {}",
            fields.len()
        )));
    };
    number
        .parse()
        .map_err(|_| malformed(&format!("{number:?} is not an integer")))
}

/// Runs the extractors over narratives using a linguistic service and the
/// run's reference lists.
pub struct Assembler<'a, L: ?Sized> {
    service: &'a L,
    lookups: &'a Lookups,
}

impl<'a, L> Assembler<'a, L>
where
    L: LinguisticService + ?Sized,
{
    pub const fn new(service: &'a L, lookups: &'a Lookups) -> Self {
        Self { service, lookups }
    }

    /// Spaces out periods, lowercases, splits into sentences, strips commas
    /// and tags each sentence.
    ///
    /// # Errors
    /// Propagates linguistic service failures.
    pub fn prepare(&self, text: &str) -> Result<Narrative> {
        let lowered = text.replace('.', " .").to_lowercase();
        let sentences = self
            .service
            .sentences(&lowered)?
            .iter()
            .map(|sentence| self.service.tag(&sentence.replace(',', "")))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Narrative::new(sentences))
    }

    /// Builds the record for one pair.
    ///
    /// # Errors
    /// Fails on a malformed header, a non-numeric age word or a linguistic
    /// service failure. Errors after the header is parsed carry the case
    /// number.
    pub fn assemble(&self, pair: &CasePair) -> Result<Record> {
        let case_number = parse_case_number(&pair.header)?;
        self.extract(case_number, &pair.narrative)
            .map_err(|e| e.in_case(case_number))
    }

    fn extract(&self, case_number: i64, text: &str) -> Result<Record> {
        let narrative = self.prepare(text)?;
        let age = extract_age(&narrative)?;
        let nationality = extract_nationality(&narrative, &self.lookups.countries);
        let hospital = extract_hospital(&narrative, &self.lookups.hospitals, self.service);
        let address = extract_address(&narrative, self.service);
        debug!(
            case_number,
            tokens = narrative.token_count(),
            ?age,
            %nationality,
            %hospital,
            %address,
            "Extracted case"
        );
        Ok(Record {
            case_number,
            age,
            nationality,
            hospital,
            address,
        })
    }

    /// Processes pairs one after another, stopping at the first failure.
    ///
    /// # Errors
    /// See [`Assembler::assemble`].
    pub fn run(&self, pairs: &[CasePair]) -> Result<ResultTable> {
        let total = pairs.len();
        let mut table = ResultTable::new();
        for (i, pair) in pairs.iter().enumerate() {
            debug!("processing {} / {}", i + 1, total);
            let row = table.push(self.assemble(pair)?);
            debug!(row, header = %pair.header, "Appended record");
        }
        info!("Assembled {} records", table.len());
        Ok(table)
    }
}

impl<L> Assembler<'_, L>
where
    L: LinguisticService + Sync + ?Sized,
{
    /// Processes pairs on the rayon pool; rows keep input order.
    ///
    /// # Errors
    /// See [`Assembler::assemble`].
    pub fn run_parallel(&self, pairs: &[CasePair]) -> Result<ResultTable> {
        let records = pairs
            .par_iter()
            .map(|pair| self.assemble(pair))
            .collect::<Result<Vec<_>>>()?;
        info!("Assembled {} records in parallel", records.len());
        Ok(records.into_iter().collect())
    }
}
