//! Error types for the `rufind` crawl pipeline.
//!
//! Every path-validation, enumeration, and classification failure is a
//! [`FileError`], so callers can tell a missing folder from a permission
//! problem or an empty crawl result. The binary converts these into
//! human-readable messages via `anyhow` at the top level.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while validating paths, crawling directories, or
/// classifying file sizes.
#[derive(Debug, Error)]
pub enum FileError {
    /// The path does not exist.
    #[error("Folder {} is invalid or missing", .0.display())]
    NotFound(PathBuf),

    /// The path exists but is not a directory.
    #[error("The specified path {} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The directory exists but cannot be entered or read.
    #[error("Invalid permissions to enumerate files of this folder {}", .0.display())]
    PermissionDenied(PathBuf),

    /// The directory has no readable entries, so there is nothing to crawl.
    #[error("Nothing to crawl under {}", .0.display())]
    EmptyResult(PathBuf),

    /// The byte count lies beyond the largest supported size unit.
    #[error("File size of {0} bytes is beyond the largest supported unit")]
    OutOfRange(f64),

    /// The size-unit token was not recognized.
    #[error("'{0}' is not a valid size unit (expected one of b, kb, mb, gb, tb, pb, eb)")]
    InvalidUnit(String),
}
