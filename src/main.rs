//! Main entry point for the `rufind` CLI application.
//!
//! `rufind` crawls a directory and prints every file with its size, scaled
//! into a power-of-1024 unit, and its POSIX permissions. It supports size
//! and unit filtering, a single-path exclusion, and a parallel fan-out over
//! the top-level subtrees when the filesystem root is crawled with
//! subdirectories.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Validates the target and exclusion paths up front; both are fatal when
//!   invalid
//! - Delegates enumeration and classification to [`crawl`] and [`scan`]
//! - Streams the root fan-out through a single printing consumer
//!
//! # Flags of Interest
//! - `--subpaths`: include subdirectories in the crawl
//! - `--data-size UNIT`: only report files classified into that unit
//! - `--size N`: floor on the scaled size
//! - `--exclude PATH`: drop a path and everything below it
//! - `--output FILE`: also export the filtered report as CSV

use anyhow::{Context, Result};
use clap::Parser;
use rufind::cli::Args;
use rufind::context::DirContext;
use rufind::error::FileError;
use rufind::{crawl, output, scan};
use std::path::{Path, PathBuf};

/// Sets up the thread pool configuration based on CLI arguments.
fn setup_thread_pool(args: &Args) -> Result<()> {
    if let Some(n_threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n_threads)
            .build_global()
            .context("Failed to configure thread pool")?;
        println!("🔧 Using {} CPU thread(s)", n_threads);
    } else {
        println!("🔧 Using all {} available CPU threads", num_cpus::get());
    }
    Ok(())
}

/// Resolves the exclusion path and checks it is a real directory.
fn resolve_exclude(args: &Args) -> Result<Option<PathBuf>> {
    let Some(raw) = &args.exclude else {
        return Ok(None);
    };
    let resolved = raw
        .canonicalize()
        .map_err(|_| FileError::NotFound(raw.clone()))?;
    let mut probe = DirContext::new();
    probe.change_directory(&resolved)?;
    Ok(Some(resolved))
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_thread_pool(&args)?;

    let mut ctx = DirContext::new();
    let exclude = resolve_exclude(&args)?;

    // Absolute paths throughout, so exclusion matching and report rows see
    // one representation.
    let target = args
        .path
        .canonicalize()
        .map_err(|_| FileError::NotFound(args.path.clone()))?;
    if target != ctx.current_path() {
        println!("About to change to {}", target.display());
    }
    ctx.change_directory(&target)?;

    println!(
        "About to search {} directory{}{}",
        ctx.current_path().display(),
        if args.subpaths {
            " with its subdirectories"
        } else {
            ""
        },
        exclude
            .as_ref()
            .map(|e| format!(" excluding {} and all its subdirectories", e.display()))
            .unwrap_or_default()
    );

    // Root-wide crawl with subdirectories: fan out over the top-level
    // subtrees and stream batches back to this thread for printing.
    if ctx.current_path() == Path::new("/") && args.subpaths {
        let children = scan::list_root_children()?;
        output::print_header();
        let mut csv_rows = args.output.as_ref().map(|_| Vec::new());
        crawl::crawl_fanout(children, exclude.as_deref(), |batch| {
            output::render_terminal(&batch.entries, args.size, args.data_size, &mut ctx);
            if let Some(rows) = csv_rows.as_mut() {
                rows.extend(batch.entries);
            }
        });
        if let (Some(file), Some(rows)) = (&args.output, &csv_rows) {
            output::render_csv(rows, args.size, args.data_size, file)?;
        }
        return Ok(());
    }

    let entries = crawl::crawl_serial(&ctx, args.subpaths, exclude.as_deref())?;
    output::print_header();
    output::render_terminal(&entries, args.size, args.data_size, &mut ctx);
    if let Some(file) = &args.output {
        output::render_csv(&entries, args.size, args.data_size, file)?;
    }
    Ok(())
}
