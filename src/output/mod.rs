//! Output renderers for the crawl report.
//!
//! The terminal renderer is the primary surface: a header, one row per
//! entry that survives the size and unit filters, and a count kept on the
//! consuming [`crate::context::DirContext`]. The CSV renderer writes the
//! same filtered selection to a file for further processing.

pub mod csv;
pub mod terminal;

pub use terminal::{print_header, render as render_terminal, select};

pub use csv::render as render_csv;
