use rufind::crawl::{crawl_fanout, scan_subtree, BatchOutcome};
use rufind::data::{SizeUnit, UnitFilter};
use rufind::error::FileError;
use rufind::output::select;
use rufind::scan::{classify_paths, list_immediate, list_recursive};
use rufind::utils::filter_excluded;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Tempdir whose path is canonicalized, so enumerated paths, exclusion
/// paths, and expectations all share one representation.
fn canonical_tempdir() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let root = dir.path().canonicalize().expect("Failed to canonicalize");
    (dir, root)
}

#[test]
fn test_list_immediate_returns_direct_children_only() {
    let (_guard, root) = canonical_tempdir();
    let sub = root.join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(root.join("top.txt"), "top").unwrap();
    fs::write(sub.join("nested.txt"), "nested").unwrap();

    let paths = list_immediate(&root).unwrap();
    assert_eq!(paths.len(), 2);
    assert!(paths.contains(&root.join("top.txt")));
    assert!(paths.contains(&sub));
    assert!(!paths.contains(&sub.join("nested.txt")));
}

#[test]
fn test_list_immediate_empty_directory_is_an_error() {
    let (_guard, root) = canonical_tempdir();
    let err = list_immediate(&root).unwrap_err();
    assert!(matches!(err, FileError::EmptyResult(_)));
}

#[test]
fn test_listing_rejects_missing_and_file_targets() {
    let (_guard, root) = canonical_tempdir();
    let file = root.join("plain.txt");
    fs::write(&file, "x").unwrap();

    assert!(matches!(
        list_immediate(&root.join("missing")),
        Err(FileError::NotFound(_))
    ));
    assert!(matches!(
        list_recursive(&root.join("missing")),
        Err(FileError::NotFound(_))
    ));
    assert!(matches!(
        list_immediate(&file),
        Err(FileError::NotADirectory(_))
    ));
    assert!(matches!(
        list_recursive(&file),
        Err(FileError::NotADirectory(_))
    ));
}

#[test]
fn test_list_recursive_collects_all_descendants() {
    let (_guard, root) = canonical_tempdir();
    let sub = root.join("sub");
    let deeper = sub.join("deeper");
    fs::create_dir_all(&deeper).unwrap();
    fs::write(root.join("a.txt"), "a").unwrap();
    fs::write(deeper.join("b.txt"), "b").unwrap();

    let paths = list_recursive(&root).unwrap();
    assert!(paths.contains(&root.join("a.txt")));
    assert!(paths.contains(&sub));
    assert!(paths.contains(&deeper));
    assert!(paths.contains(&deeper.join("b.txt")));
    // The walk reports descendants, not the root itself.
    assert!(!paths.contains(&root));
}

#[test]
fn test_classification_end_to_end_with_unit_filter() {
    let (_guard, root) = canonical_tempdir();
    fs::write(root.join("small.txt"), vec![0u8; 500]).unwrap();
    fs::write(root.join("medium.txt"), vec![0u8; 2048]).unwrap();
    fs::write(root.join("large.bin"), vec![0u8; 3_145_728]).unwrap();

    let paths = list_recursive(&root).unwrap();
    let entries = classify_paths(&paths);
    assert_eq!(entries.len(), 3);

    // With the mb filter and no floor, only the 3 MiB file survives.
    let kept = select(&entries, 0.0, UnitFilter::Unit(SizeUnit::Mb));
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].path, root.join("large.bin"));
    assert_eq!(kept[0].scaled, 3.0);
    assert!(kept[0].line.starts_with("3mb\t"));
    assert!(kept[0].line.ends_with(&root.join("large.bin").display().to_string()));

    // The small files classified where they should.
    let small = entries.iter().find(|e| e.path.ends_with("small.txt")).unwrap();
    assert_eq!(small.unit, SizeUnit::B);
    let medium = entries.iter().find(|e| e.path.ends_with("medium.txt")).unwrap();
    assert_eq!(medium.unit, SizeUnit::Kb);
    assert_eq!(medium.scaled, 2.0);
}

/// Excluding a subtree must match a run over the same tree with that
/// subtree deleted.
#[test]
fn test_exclusion_equals_deleted_subtree() {
    let build = |with_junk: bool| -> (TempDir, PathBuf) {
        let (guard, root) = canonical_tempdir();
        let keep = root.join("keep");
        fs::create_dir(&keep).unwrap();
        fs::write(keep.join("kept.txt"), vec![0u8; 1500]).unwrap();
        fs::write(root.join("top.txt"), "top").unwrap();
        if with_junk {
            let junk = root.join("junk");
            fs::create_dir(&junk).unwrap();
            fs::write(junk.join("dropped.txt"), vec![0u8; 4096]).unwrap();
        }
        (guard, root)
    };

    let relative_set = |root: &Path, paths: Vec<PathBuf>| -> Vec<PathBuf> {
        let mut rel: Vec<PathBuf> = paths
            .into_iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        rel.sort();
        rel
    };

    let (_g1, with_junk) = build(true);
    let (_g2, without_junk) = build(false);

    let junk = with_junk.join("junk");
    let excluded = filter_excluded(list_recursive(&with_junk).unwrap(), Some(junk.as_path()));
    let plain = list_recursive(&without_junk).unwrap();

    assert_eq!(
        relative_set(&with_junk, excluded),
        relative_set(&without_junk, plain)
    );
}

#[test]
fn test_exclusion_is_component_aware_on_disk() {
    let (_guard, root) = canonical_tempdir();
    let sub = root.join("sub");
    let subfoo = root.join("subfoo");
    fs::create_dir(&sub).unwrap();
    fs::create_dir(&subfoo).unwrap();
    fs::write(sub.join("inside.txt"), "x").unwrap();
    fs::write(subfoo.join("outside.txt"), "y").unwrap();

    let kept = filter_excluded(list_recursive(&root).unwrap(), Some(sub.as_path()));
    assert!(!kept.iter().any(|p| p.starts_with(&sub)));
    assert!(kept.contains(&subfoo.join("outside.txt")));
}

/// The root fan-out must report the same set of lines as a serial crawl
/// over the union of the same top-level subtrees.
#[test]
fn test_fanout_matches_serial_union() {
    let (_guard, root) = canonical_tempdir();
    for (name, payload) in [("alpha", 300usize), ("beta", 2048), ("gamma", 1_048_576)] {
        let sub = root.join(name);
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join(format!("{name}.dat")), vec![0u8; payload]).unwrap();
        fs::write(sub.join("extra.txt"), "extra").unwrap();
    }
    fs::create_dir(root.join("bare")).unwrap();
    fs::write(root.join("loose-file"), "not a directory").unwrap();

    let children = list_immediate(&root).unwrap();

    let mut streamed: Vec<String> = Vec::new();
    let mut batches = 0usize;
    crawl_fanout(children.clone(), None, |batch| {
        batches += 1;
        streamed.extend(batch.entries.iter().map(|e| e.line.clone()));
    });
    // One batch per top-level child, whatever its fate.
    assert_eq!(batches, children.len());

    let mut serial: Vec<String> = children
        .iter()
        .flat_map(|child| scan_subtree(child, None).entries)
        .map(|e| e.line)
        .collect();

    streamed.sort();
    serial.sort();
    assert_eq!(streamed, serial);
    // 3 populated subtrees, two files each; the bare dir and the loose
    // file contribute nothing.
    assert_eq!(streamed.len(), 6);
}

/// Applying the exclusion inside each worker is the same as applying it
/// centrally over the union.
#[test]
fn test_fanout_exclusion_matches_central_filter() {
    let (_guard, root) = canonical_tempdir();
    for name in ["one", "two"] {
        let sub = root.join(name);
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("data.bin"), vec![0u8; 2048]).unwrap();
    }
    let victim = root.join("two").join("victim");
    fs::create_dir(&victim).unwrap();
    fs::write(victim.join("secret.txt"), "secret").unwrap();

    let children = list_immediate(&root).unwrap();

    let mut streamed: Vec<String> = Vec::new();
    crawl_fanout(children.clone(), Some(victim.as_path()), |batch| {
        streamed.extend(batch.entries.iter().map(|e| e.line.clone()));
    });

    let mut central: Vec<String> = children
        .iter()
        .flat_map(|child| scan_subtree(child, None).entries)
        .filter(|e| !e.path.starts_with(&victim))
        .map(|e| e.line)
        .collect();

    streamed.sort();
    central.sort();
    assert_eq!(streamed, central);
    assert!(!streamed.iter().any(|line| line.contains("secret.txt")));
}

#[test]
fn test_fanout_worker_failures_do_not_abort_siblings() {
    let (_guard, root) = canonical_tempdir();
    let good = root.join("good");
    fs::create_dir(&good).unwrap();
    fs::write(good.join("fine.txt"), vec![0u8; 1024]).unwrap();
    fs::write(root.join("imposter"), "plain file at top level").unwrap();

    let children = vec![
        good.clone(),
        root.join("imposter"),
        root.join("never-existed"),
    ];

    let mut outcomes = Vec::new();
    let mut lines = Vec::new();
    crawl_fanout(children, None, |batch| {
        outcomes.push(batch.outcome);
        lines.extend(batch.entries.iter().map(|e| e.line.clone()));
    });

    assert_eq!(outcomes.len(), 3);
    assert_eq!(
        outcomes.iter().filter(|o| **o == BatchOutcome::Skipped).count(),
        2
    );
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("fine.txt"));
}
