//! Data structures for size classification and report entries.
//!
//! This module defines the size-unit model used throughout `rufind`:
//!
//! - [`SizeUnit`]: the unit a byte count classifies into, always a real unit
//! - [`UnitFilter`]: a unit *or* the `unbounded` sentinel, used only when
//!   matching entries against the `--data-size` option
//! - [`FileReportEntry`]: one classified file, ready to print
//!
//! Unit boundaries are half-open intervals at exact powers of 1024, so a
//! file of exactly 1024 bytes is kilobytes, never bytes. `unbounded` is
//! deliberately kept out of [`SizeUnit`]: classification can never produce
//! it, and code that scales a byte count never has to handle it.

use crate::error::FileError;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;
const TB: f64 = GB * 1024.0;
const PB: f64 = TB * 1024.0;
const EB: f64 = PB * 1024.0;
/// Classification cap: byte counts at or above 1024^8 have no unit.
const CAP: f64 = EB * 1024.0 * 1024.0;

/// The size unit a byte count classifies into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum SizeUnit {
    B,
    Kb,
    Mb,
    Gb,
    Tb,
    Pb,
    Eb,
}

impl SizeUnit {
    /// Classifies a byte count into the unique unit whose half-open range
    /// contains it.
    ///
    /// # Errors
    /// Returns [`FileError::OutOfRange`] when `bytes` is negative or at or
    /// above the 1024^8 cap.
    pub fn classify(bytes: f64) -> Result<Self, FileError> {
        match bytes {
            b if (0.0..KB).contains(&b) => Ok(SizeUnit::B),
            b if (KB..MB).contains(&b) => Ok(SizeUnit::Kb),
            b if (MB..GB).contains(&b) => Ok(SizeUnit::Mb),
            b if (GB..TB).contains(&b) => Ok(SizeUnit::Gb),
            b if (TB..PB).contains(&b) => Ok(SizeUnit::Tb),
            b if (PB..EB).contains(&b) => Ok(SizeUnit::Pb),
            b if (EB..CAP).contains(&b) => Ok(SizeUnit::Eb),
            _ => Err(FileError::OutOfRange(bytes)),
        }
    }

    /// Divides a byte count down into this unit.
    pub fn scale(&self, bytes: f64) -> f64 {
        bytes / self.divisor()
    }

    fn divisor(&self) -> f64 {
        match self {
            SizeUnit::B => 1.0,
            SizeUnit::Kb => KB,
            SizeUnit::Mb => MB,
            SizeUnit::Gb => GB,
            SizeUnit::Tb => TB,
            SizeUnit::Pb => PB,
            SizeUnit::Eb => EB,
        }
    }

    /// Suffix printed directly after the scaled size in report rows.
    pub fn suffix(&self) -> &'static str {
        match self {
            SizeUnit::B => "b",
            SizeUnit::Kb => "kb",
            SizeUnit::Mb => "mb",
            SizeUnit::Gb => "gb",
            SizeUnit::Tb => "tb",
            SizeUnit::Pb => "pb",
            SizeUnit::Eb => "eb",
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A size unit widened with the `unbounded` sentinel.
///
/// Only the `--data-size` filter boundary uses this type; `unbounded` means
/// "no unit filter requested" and is never a classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitFilter {
    Unit(SizeUnit),
    Unbounded,
}

impl UnitFilter {
    /// Whether an entry with the given unit passes this filter.
    pub fn matches(&self, unit: SizeUnit) -> bool {
        match self {
            UnitFilter::Unbounded => true,
            UnitFilter::Unit(want) => *want == unit,
        }
    }
}

impl FromStr for UnitFilter {
    type Err = FileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" => Ok(UnitFilter::Unit(SizeUnit::B)),
            "kb" => Ok(UnitFilter::Unit(SizeUnit::Kb)),
            "mb" => Ok(UnitFilter::Unit(SizeUnit::Mb)),
            "gb" => Ok(UnitFilter::Unit(SizeUnit::Gb)),
            "tb" => Ok(UnitFilter::Unit(SizeUnit::Tb)),
            "pb" => Ok(UnitFilter::Unit(SizeUnit::Pb)),
            "eb" => Ok(UnitFilter::Unit(SizeUnit::Eb)),
            "unbounded" => Ok(UnitFilter::Unbounded),
            _ => Err(FileError::InvalidUnit(s.to_string())),
        }
    }
}

/// One classified file, ready to report.
///
/// `scaled` is the byte count divided down into `unit` and rounded to the
/// nearest integer, ties away from zero. `line` is the finished report row.
#[derive(Debug, Clone)]
pub struct FileReportEntry {
    pub unit: SizeUnit,
    pub scaled: f64,
    pub bytes: u64,
    pub perms: String,
    pub path: PathBuf,
    pub line: String,
}
