//! CSV codec for patent tables.
//!
//! Parses an uploaded delimited file into a [`pipeline::Table`] and
//! serialises a processed table back out: comma separated, header row first,
//! columns in table order (original columns, then `Category`), UTF-8.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** The [`pipeline`] crate never sees CSV; it receives and
//! returns [`pipeline::Table`] values only.

use std::io::{Read, Write};

use pipeline::{Table, TableError};
use thiserror::Error;
use tracing::debug;

/// File name offered for the sorted download.
pub const DEFAULT_OUTPUT_NAME: &str = "patent_titles_classified.csv";

/// Failures while reading or writing CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// The input is not well-formed CSV (bad quoting, invalid UTF-8). The
    /// message carries the line/record position.
    #[error("Could not parse CSV: {0}")]
    Parse(#[source] csv::Error),

    /// The CSV parsed but does not form a valid table (a row longer than the
    /// header).
    #[error("Invalid table: {0}")]
    Table(#[from] TableError),

    /// Writing the output failed.
    #[error("Could not write CSV: {0}")]
    Write(#[source] csv::Error),

    #[error("Could not write CSV: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads a CSV document with a header row into a [`Table`].
///
/// A leading UTF-8 byte-order mark is ignored. Cells and headers are kept
/// verbatim (no trimming), including empty and repeated headers. Rows shorter
/// than the header are padded with empty cells; longer rows are rejected. An
/// input with no header line yields a table with no columns.
pub fn read_table<R: Read>(reader: R) -> Result<Table, CsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(CsvError::Parse)?
        .iter()
        .map(str::to_string)
        .collect();

    let rows = reader
        .records()
        .map(|record| {
            record
                .map(|r| r.iter().map(str::to_string).collect::<Vec<_>>())
                .map_err(CsvError::Parse)
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(columns = headers.len(), rows = rows.len(), "CSV parsed");
    Ok(Table::from_strings(headers, rows)?)
}

/// Writes `table` as CSV with a header row.
pub fn write_table<W: Write>(table: &Table, writer: W) -> Result<(), CsvError> {
    let mut writer = csv::Writer::from_writer(writer);

    writer
        .write_record(table.columns().iter().map(|c| c.as_str()))
        .map_err(CsvError::Write)?;
    for record in table.rows() {
        writer.write_record(record.cells()).map_err(CsvError::Write)?;
    }
    writer.flush()?;
    Ok(())
}

/// Serialises `table` into an in-memory CSV document.
pub fn to_csv_bytes(table: &Table) -> Result<Vec<u8>, CsvError> {
    let mut buffer = Vec::new();
    write_table(table, &mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
