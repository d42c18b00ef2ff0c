//! Directory enumeration and file classification.
//!
//! This module handles:
//! - Listing the immediate children of a directory
//! - Recursive traversal using `WalkDir`
//! - Listing the top-level children of the filesystem root
//! - Statting paths and turning them into classified [`FileReportEntry`]s,
//!   in parallel via `rayon`
//!
//! The empty-result policy is deliberate: an ordinary directory with zero
//! readable entries is the error [`FileError::EmptyResult`] rather than an
//! empty success, because there is nothing to crawl. Only the filesystem
//! root is exempt and returns whatever is found.

use crate::data::{FileReportEntry, SizeUnit};
use crate::error::FileError;
use crate::utils::format_mode;
use rayon::prelude::*;
use std::io::ErrorKind;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Validates that `path` exists, is a directory, and can be read.
pub fn check_dir(path: &Path) -> Result<(), FileError> {
    if !path.try_exists().unwrap_or(false) {
        return Err(FileError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(FileError::NotADirectory(path.to_path_buf()));
    }
    if let Err(err) = path.read_dir() {
        return Err(read_error(path, &err));
    }
    Ok(())
}

fn read_error(path: &Path, err: &std::io::Error) -> FileError {
    match err.kind() {
        ErrorKind::PermissionDenied => FileError::PermissionDenied(path.to_path_buf()),
        ErrorKind::NotFound => FileError::NotFound(path.to_path_buf()),
        _ => FileError::PermissionDenied(path.to_path_buf()),
    }
}

/// Lists the direct children of `dir`, in discovery order.
///
/// # Errors
/// Path-validation errors from [`check_dir`], or [`FileError::EmptyResult`]
/// when the directory has zero readable entries.
pub fn list_immediate(dir: &Path) -> Result<Vec<PathBuf>, FileError> {
    check_dir(dir)?;
    let reader = dir.read_dir().map_err(|err| read_error(dir, &err))?;
    let paths: Vec<PathBuf> = reader
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    if paths.is_empty() {
        return Err(FileError::EmptyResult(dir.to_path_buf()));
    }
    Ok(paths)
}

/// Walks `dir` depth-first and returns every descendant file and directory.
///
/// Symlinks are not followed. Unreadable entries along the way are skipped;
/// same empty-result policy as [`list_immediate`].
pub fn list_recursive(dir: &Path) -> Result<Vec<PathBuf>, FileError> {
    check_dir(dir)?;
    let paths: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .follow_links(false)
        .same_file_system(false)
        .into_iter()
        .filter_map(|entry| entry.ok().map(|e| e.into_path()))
        .collect();
    if paths.is_empty() {
        return Err(FileError::EmptyResult(dir.to_path_buf()));
    }
    Ok(paths)
}

/// Lists the immediate children of the filesystem root.
///
/// Unlike the other listings this never treats an empty result as an error;
/// only a failure to read `/` itself is fatal, and that failure aborts the
/// whole root crawl.
pub fn list_root_children() -> Result<Vec<PathBuf>, FileError> {
    let root = Path::new("/");
    let reader = root.read_dir().map_err(|err| read_error(root, &err))?;
    Ok(reader
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect())
}

/// Stats every path and builds a classified report entry for each.
///
/// Order is preserved. Paths that cannot be statted, or whose size falls
/// outside every unit, are dropped silently; a root-wide crawl always has
/// a few of those.
pub fn classify_paths(paths: &[PathBuf]) -> Vec<FileReportEntry> {
    paths
        .par_iter()
        .filter_map(|path| classify_one(path))
        .collect()
}

fn classify_one(path: &Path) -> Option<FileReportEntry> {
    let meta = std::fs::metadata(path).ok()?;
    let bytes = meta.len();
    let unit = SizeUnit::classify(bytes as f64).ok()?;
    let scaled = unit.scale(bytes as f64).round();
    let perms = format_mode(meta.permissions().mode());
    let line = format!("{}{}\t {} \t {}", scaled, unit, perms, path.display());
    Some(FileReportEntry {
        unit,
        scaled,
        bytes,
        perms,
        path: path.to_path_buf(),
        line,
    })
}
