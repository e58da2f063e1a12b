//! Reference list loading from single-column CSV files.
//!
//! The name column is located by its header. The country file may carry an
//! extra column of `;`-separated adjectival forms (`Malaysian;Malay`) that the
//! nationality rule accepts in place of the country name.

use std::path::Path;

use casetab_config::ReferenceConfig;
use casetab_core::{Lookups, ReferenceList};
use tracing::{debug, info};

use crate::error::{Error, Result};

const ALIAS_SEPARATOR: char = ';';

/// Loads names from `column` of the CSV file at `path`, keeping file order.
///
/// When `alias_column` is given and present, its values become aliases of the
/// name on the same row. A missing alias column is not an error.
pub fn load_reference_list(
    path: &Path,
    column: &str,
    alias_column: Option<&str>,
) -> Result<ReferenceList> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let name_index = find_column(&headers, column).ok_or_else(|| Error::MissingColumn {
        path: path.to_path_buf(),
        column: column.to_string(),
    })?;
    let alias_index = alias_column.and_then(|alias| find_column(&headers, alias));
    if alias_column.is_some() && alias_index.is_none() {
        debug!("No alias column in {}", path.display());
    }

    let mut list = ReferenceList::new();
    for row in reader.records() {
        let row = row?;
        let Some(name) = row.get(name_index).filter(|name| !name.is_empty()) else {
            continue;
        };
        let aliases = alias_index
            .and_then(|i| row.get(i))
            .map(|cell| cell.split(ALIAS_SEPARATOR).map(str::trim).collect::<Vec<_>>())
            .unwrap_or_default();
        list.insert_with_aliases(name, aliases);
    }

    info!("Loaded {} names from {}", list.len(), path.display());
    Ok(list)
}

fn find_column(headers: &csv::StringRecord, column: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(column))
}

/// Loads the country and hospital lists for a run.
pub fn load_lookups(countries: &Path, hospitals: &Path, columns: &ReferenceConfig) -> Result<Lookups> {
    let countries = load_reference_list(
        countries,
        &columns.country_column,
        Some(columns.demonym_column.as_str()),
    )?;
    let hospitals = load_reference_list(hospitals, &columns.hospital_column, None)?;
    Ok(Lookups::new(countries, hospitals))
}
