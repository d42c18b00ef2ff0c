//! CLI interface definitions for the `rufind` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//! - [`CsvEntry`]: the record shape used for CSV export
//!
//! The `--data-size` option parses into [`UnitFilter`] through its
//! `FromStr` impl, so an unrecognized token surfaces as the same
//! `InvalidUnit` error the rest of the crate uses.
//!
//! # Example
//!
//! ```bash
//! rufind /var --subpaths --data-size mb --size 10 --exclude /var/cache
//! ```

use crate::data::UnitFilter;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the `rufind` crawler.
#[derive(Parser, Debug)]
#[command(
    name = "rufind",
    version,
    about = "Crawls the supplied path and prints every file with its size and permissions"
)]
pub struct Args {
    /// Path to crawl (defaults to the current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Only report files classified into this unit (b, kb, mb, gb, tb, pb, eb)
    #[arg(long = "data-size", alias = "ds", value_name = "UNIT", default_value = "unbounded")]
    pub data_size: UnitFilter,

    /// Only report files whose scaled size is at least this value
    #[arg(long, value_name = "N", default_value_t = 0.0)]
    pub size: f64,

    /// File or folder to exclude, together with everything below it
    #[arg(long, value_name = "PATH")]
    pub exclude: Option<PathBuf>,

    /// Crawl subdirectories too
    #[arg(long)]
    pub subpaths: bool,

    /// Limit the number of CPU threads used (default: use all available)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Write the filtered report to a CSV file as well
    #[arg(long, value_name = "FILE")]
    pub output: Option<String>,
}

/// A single record of CSV output.
///
/// # Fields
/// * `unit` - size unit the entry classified into ("b", "kb", ...)
/// * `scaled_size` - size scaled down into that unit, rounded
/// * `size_bytes` - raw size in bytes
/// * `size_human` - human-readable size (e.g., "1.2 MiB")
/// * `permissions` - 9-character symbolic permission string
/// * `path` - full path to the file
#[derive(Debug, serde::Serialize)]
pub struct CsvEntry {
    pub unit: String,
    pub scaled_size: f64,
    pub size_bytes: u64,
    pub size_human: String,
    pub permissions: String,
    pub path: String,
}
