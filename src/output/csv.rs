//! CSV output for the crawl report.
//!
//! Writes the same filtered selection as the terminal renderer, one record
//! per entry. CSV rows never touch the reported-file counter; the summary
//! only reflects what was printed to the terminal.

use crate::cli::CsvEntry;
use crate::data::{FileReportEntry, UnitFilter};
use crate::output::terminal::select;
use anyhow::Result;
use csv::Writer;
use humansize::{format_size, BINARY};
use std::fs::File;

/// Writes the filtered report to `path` as CSV.
pub fn render(entries: &[FileReportEntry], floor: f64, filter: UnitFilter, path: &str) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = Writer::from_writer(file);

    for entry in select(entries, floor, filter) {
        writer.serialize(CsvEntry {
            unit: entry.unit.to_string(),
            scaled_size: entry.scaled,
            size_bytes: entry.bytes,
            size_human: format_size(entry.bytes, BINARY),
            permissions: entry.perms.clone(),
            path: entry.path.display().to_string(),
        })?;
    }
    writer.flush()?;

    eprintln!("CSV output written to: {}", path);
    Ok(())
}
