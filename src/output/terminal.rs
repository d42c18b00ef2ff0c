//! Terminal output for the crawl report.

use crate::context::DirContext;
use crate::data::{FileReportEntry, UnitFilter};

/// Prints the column header once, ahead of any report rows.
pub fn print_header() {
    println!("Size \tPermissions \tFilePath");
}

/// Applies the final size floor and unit filter to `entries`.
///
/// An entry survives iff its scaled size is at least `floor` and its unit
/// passes `filter`. With the defaults (floor 0, unbounded) everything
/// survives. Kept separate from printing so the selection is testable.
pub fn select<'a>(
    entries: &'a [FileReportEntry],
    floor: f64,
    filter: UnitFilter,
) -> Vec<&'a FileReportEntry> {
    entries
        .iter()
        .filter(|entry| entry.scaled >= floor && filter.matches(entry.unit))
        .collect()
}

/// Prints every entry that survives the filters, bumping the context's
/// reported-file counter once per printed row.
///
/// Must only ever be called from the consuming side of a crawl; workers
/// never print.
pub fn render(entries: &[FileReportEntry], floor: f64, filter: UnitFilter, ctx: &mut DirContext) {
    for entry in select(entries, floor, filter) {
        ctx.record_reported();
        println!("{}", entry.line);
    }
}
