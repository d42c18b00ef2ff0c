//! Utility functions for the `rufind` crawler.
//!
//! This module provides:
//! - POSIX permission-bit decoding into the familiar `rwxr-xr-x` form
//! - Path-component-aware exclusion filtering
//!
//! Both are pure functions; all filesystem access lives in [`crate::scan`].

use std::path::{Path, PathBuf};

/// Permission string shown when a mode carries no permission information.
pub const NO_PERMS: &str = "---------";

/// Decodes the low nine POSIX mode bits into a 9-character symbolic string.
///
/// Each octal triple (owner, group, other) is checked with direct bit tests:
/// bit 4 reads, bit 2 writes, bit 1 executes. Anything above the permission
/// bits (file type, setuid and friends) is masked off first.
///
/// # Examples
/// ```
/// use rufind::utils::format_mode;
/// assert_eq!(format_mode(0o755), "rwxr-xr-x");
/// assert_eq!(format_mode(0o100644), "rw-r--r--");
/// ```
pub fn format_mode(mode: u32) -> String {
    let bits = mode & 0o777;
    let mut out = String::with_capacity(9);
    for shift in [6u32, 3, 0] {
        let triple = (bits >> shift) & 0o7;
        out.push(if triple & 0o4 != 0 { 'r' } else { '-' });
        out.push(if triple & 0o2 != 0 { 'w' } else { '-' });
        out.push(if triple & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}

/// Drops every path equal to or nested under `exclude`, preserving order.
///
/// Matching is per path component, so excluding `/tmp` removes `/tmp/a`
/// but keeps `/tmpfoo`. With no exclusion this is a no-op.
pub fn filter_excluded(paths: Vec<PathBuf>, exclude: Option<&Path>) -> Vec<PathBuf> {
    let Some(exclude) = exclude else {
        return paths;
    };
    paths
        .into_iter()
        .filter(|path| !path.starts_with(exclude))
        .collect()
}
