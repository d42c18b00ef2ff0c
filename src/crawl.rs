//! Crawl pipelines: the serial walk used for ordinary targets and the
//! parallel fan-out used when the filesystem root is crawled with
//! subdirectories.
//!
//! Top-level root subtrees are independent and I/O-bound, so a root-wide
//! crawl would otherwise serialize on disk latency per subtree. The fan-out
//! spawns one worker per top-level child on the rayon pool; each worker owns
//! its own [`DirContext`], enumerates, excludes, and classifies, then sends
//! one [`WorkerBatch`] down a crossbeam channel. The single consumer on the
//! calling thread is the only place that prints or counts, so no locks are
//! needed and output never interleaves.
//!
//! Ordering: none across subtrees (first completed, first consumed);
//! enumeration order within one batch.

use crate::context::DirContext;
use crate::data::FileReportEntry;
use crate::error::FileError;
use crate::scan;
use crate::utils::filter_excluded;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Mount point that is never walked recursively, even when subdirectories
/// were requested: a runtime pseudo-filesystem where a structural walk
/// mostly hits sockets and pipes.
const SHALLOW_MOUNT: &str = "/run";

/// How one worker's crawl of a top-level subtree ended.
///
/// Both empty cases print the same way (not at all); the split exists so
/// tests can tell a skipped subtree from a genuinely bare one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// The subtree was enumerated; the batch holds whatever survived.
    Scanned,
    /// The worker could not enter or read the subtree and gave up on it.
    Skipped,
}

/// Classified entries from one top-level subtree, in enumeration order.
#[derive(Debug)]
pub struct WorkerBatch {
    pub entries: Vec<FileReportEntry>,
    pub outcome: BatchOutcome,
}

impl WorkerBatch {
    fn skipped() -> Self {
        WorkerBatch {
            entries: Vec::new(),
            outcome: BatchOutcome::Skipped,
        }
    }
}

/// Enumerates one subtree, applies the exclusion, and classifies survivors.
///
/// Failures stay inside the worker: a child that cannot be entered or read
/// contributes a skipped batch instead of aborting its siblings. `/run` is
/// listed non-recursively, everything else is walked in full.
pub fn scan_subtree(child: &Path, exclude: Option<&Path>) -> WorkerBatch {
    let mut ctx = DirContext::new();
    if ctx.change_directory(child).is_err() {
        return WorkerBatch::skipped();
    }

    let listed = if child == Path::new(SHALLOW_MOUNT) {
        scan::list_immediate(ctx.current_path())
    } else {
        scan::list_recursive(ctx.current_path())
    };
    let paths = match listed {
        Ok(paths) => paths,
        // An empty subtree is a valid scan, not a skip.
        Err(FileError::EmptyResult(_)) => {
            return WorkerBatch {
                entries: Vec::new(),
                outcome: BatchOutcome::Scanned,
            };
        }
        Err(_) => return WorkerBatch::skipped(),
    };

    let paths = filter_excluded(paths, exclude);
    WorkerBatch {
        entries: scan::classify_paths(&paths),
        outcome: BatchOutcome::Scanned,
    }
}

/// Crawls every directory in `children` in parallel, streaming each worker's
/// batch to `sink` as it completes.
///
/// `sink` runs on the calling thread only, so it may freely print and mutate
/// shared counters. The call returns once every worker has finished and the
/// channel has drained; dropping the last sender is the completion signal.
pub fn crawl_fanout<F>(children: Vec<PathBuf>, exclude: Option<&Path>, mut sink: F)
where
    F: FnMut(WorkerBatch) + Send,
{
    let (tx, rx) = crossbeam_channel::unbounded();
    rayon::scope(|scope| {
        for child in children {
            let tx = tx.clone();
            scope.spawn(move |_| {
                // A send only fails if the consumer is gone, and then
                // there is nobody left to report to anyway.
                let _ = tx.send(scan_subtree(&child, exclude));
            });
        }
        drop(tx);
        for batch in rx {
            sink(batch);
        }
    });
}

/// Serial pipeline for ordinary (non-root) targets: enumerate the context's
/// current directory, filter, and classify in-process.
pub fn crawl_serial(
    ctx: &DirContext,
    subpaths: bool,
    exclude: Option<&Path>,
) -> Result<Vec<FileReportEntry>> {
    let pb = spinner()?;
    let target = ctx.current_path();
    let listed = if subpaths && target != Path::new(SHALLOW_MOUNT) {
        scan::list_recursive(target)
    } else {
        scan::list_immediate(target)
    };
    pb.finish_with_message("Scan complete ✅");

    let paths = filter_excluded(listed?, exclude);
    Ok(scan::classify_paths(&paths))
}

/// Terminal spinner shown while the filesystem walk runs.
fn spinner() -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner} Scanning files... [{elapsed}]")
            .context("Failed to set progress template")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}
