//! Per-crawl directory state and the reported-file counter.
//!
//! A [`DirContext`] owns one crawl's notion of the "current directory" plus
//! the count of entries actually printed for it. The root fan-out hands every
//! worker its own context, so no directory state is ever shared between
//! threads, and only the printing side ever touches a counter.

use crate::error::FileError;
use crate::scan::check_dir;
use std::path::{Path, PathBuf};

/// One crawl's current directory and printed-entry count.
#[derive(Debug)]
pub struct DirContext {
    current: PathBuf,
    reported: u64,
}

impl DirContext {
    /// Creates a context rooted at the process working directory.
    pub fn new() -> Self {
        DirContext {
            current: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            reported: 0,
        }
    }

    /// The directory this context currently points at.
    pub fn current_path(&self) -> &Path {
        &self.current
    }

    /// Validates `to` and makes it the current directory for this context.
    ///
    /// # Errors
    /// [`FileError::NotFound`] if the path does not exist,
    /// [`FileError::NotADirectory`] if it is not a directory, and
    /// [`FileError::PermissionDenied`] if it cannot be entered.
    pub fn change_directory(&mut self, to: &Path) -> Result<(), FileError> {
        check_dir(to)?;
        self.current = to.to_path_buf();
        Ok(())
    }

    /// Records one printed report row.
    pub fn record_reported(&mut self) {
        self.reported += 1;
    }

    /// Count of rows recorded so far.
    pub fn reported(&self) -> u64 {
        self.reported
    }

    /// Teardown summary line; `None` until something was printed.
    pub fn summary(&self) -> Option<String> {
        (self.reported > 0).then(|| format!("Scanned {} files in total", self.reported))
    }
}

impl Default for DirContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DirContext {
    fn drop(&mut self) {
        if let Some(line) = self.summary() {
            println!("{line}");
        }
    }
}
