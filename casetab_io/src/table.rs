//! Result table output.
//!
//! CSV rows follow table order with a fixed header; a missing age is an empty
//! cell. JSON output is an array of objects keyed by the same column names,
//! with `null` for a missing age.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use casetab_config::OutputFormat;
use casetab_core::{Record, ResultTable};
use tracing::info;

use crate::error::{Error, Result};

pub fn write_csv<W: Write>(table: &ResultTable, writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(Record::COLUMNS)?;
    for (_, record) in table.rows() {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|e| Error::io("<csv writer>", e))?;
    Ok(())
}

pub fn write_json<W: Write>(table: &ResultTable, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, table.records())?;
    writeln!(writer).map_err(|e| Error::io("<json writer>", e))?;
    Ok(())
}

/// Writes the table to `path`, creating the parent directory when missing.
pub fn write_table(table: &ResultTable, path: &Path, format: OutputFormat) -> Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    match format {
        OutputFormat::Csv => write_csv(table, &mut writer)?,
        OutputFormat::Json => write_json(table, &mut writer)?,
    }
    writer.flush().map_err(|e| Error::io(path, e))?;
    info!(
        "Wrote {} rows to {} ({format})",
        table.len(),
        path.display()
    );
    Ok(())
}
