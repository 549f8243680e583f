//! Traversal engine tests against temporary directory trees.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

use super::{Entry, Progress, ScanError, ScanRequest, count, walk};
use crate::core::ignore::IgnoreSpec;
use crate::core::scope::SelectionScope;

fn write_file(root: &Path, rel: &str, len: usize) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, vec![b'x'; len]).unwrap();
}

/// p/
/// ├── a.txt (10 B)
/// ├── b/
/// │   └── c.log (2048 B)
/// ├── my-build/
/// │   └── out.bin
/// └── web/
///     ├── index.html
///     └── node_modules/
///         └── dep/
///             └── lib.js
fn fixture() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write_file(root, "a.txt", 10);
    write_file(root, "b/c.log", 2048);
    write_file(root, "my-build/out.bin", 3);
    write_file(root, "web/index.html", 5);
    write_file(root, "web/node_modules/dep/lib.js", 7);
    tmp
}

fn rel_paths(root: &Path, entries: &[Entry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| {
            e.path
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

fn scan(root: &Path, ignore: &IgnoreSpec, scope: &SelectionScope) -> Vec<Entry> {
    let request = ScanRequest {
        root,
        ignore,
        scope,
        cancel: None,
    };
    walk(&request, None).unwrap()
}

#[test]
fn walks_preorder_sorted_without_root() {
    let tmp = fixture();
    let entries = scan(tmp.path(), &IgnoreSpec::new(), &SelectionScope::default());
    assert_eq!(
        rel_paths(tmp.path(), &entries),
        vec![
            "a.txt",
            "b",
            "b/c.log",
            "my-build",
            "my-build/out.bin",
            "web",
            "web/index.html",
            "web/node_modules",
            "web/node_modules/dep",
            "web/node_modules/dep/lib.js",
        ]
    );
}

#[test]
fn records_file_sizes_and_zero_for_dirs() {
    let tmp = fixture();
    let entries = scan(tmp.path(), &IgnoreSpec::new(), &SelectionScope::default());
    let a = entries.iter().find(|e| e.path.ends_with("a.txt")).unwrap();
    let b = entries.iter().find(|e| e.path.ends_with("b")).unwrap();
    let c = entries.iter().find(|e| e.path.ends_with("c.log")).unwrap();
    assert!(!a.is_dir);
    assert_eq!(a.size, 10);
    assert!(b.is_dir);
    assert_eq!(b.size, 0);
    assert_eq!(c.size, 2048);
}

#[test]
fn ignored_extension_skips_file_but_keeps_directory() {
    let tmp = fixture();
    let mut ignore = IgnoreSpec::new();
    ignore.add_ext("log");
    let entries = scan(tmp.path(), &ignore, &SelectionScope::default());
    let paths = rel_paths(tmp.path(), &entries);
    assert!(paths.contains(&"b".to_string()));
    assert!(!paths.iter().any(|p| p.ends_with(".log")));
}

#[test]
fn ignored_directory_prunes_whole_subtree() {
    let tmp = fixture();
    let mut ignore = IgnoreSpec::new();
    ignore.add_dir("node_modules");
    ignore.add_dir("build");
    let entries = scan(tmp.path(), &ignore, &SelectionScope::default());
    let paths = rel_paths(tmp.path(), &entries);
    assert_eq!(
        paths,
        vec!["a.txt", "b", "b/c.log", "web", "web/index.html"]
    );
    // No survivor has an ignored ancestor.
    for entry in &entries {
        for ancestor in entry.path.ancestors().take_while(|a| *a != tmp.path()) {
            assert!(!ignore.should_ignore(ancestor, ancestor.is_dir()));
        }
    }
}

#[test]
fn scope_restricts_by_raw_prefix() {
    let tmp = fixture();
    let scope = SelectionScope::new(vec![tmp.path().join("web")]);
    let entries = scan(tmp.path(), &IgnoreSpec::new(), &scope);
    let paths = rel_paths(tmp.path(), &entries);
    assert_eq!(
        paths,
        vec![
            "web",
            "web/index.html",
            "web/node_modules",
            "web/node_modules/dep",
            "web/node_modules/dep/lib.js",
        ]
    );
    for entry in &entries {
        assert!(scope.admits(&entry.path));
    }
}

#[test]
fn scope_combines_with_ignore_rules() {
    let tmp = fixture();
    let scope = SelectionScope::new(vec![tmp.path().join("web"), tmp.path().join("a.txt")]);
    let mut ignore = IgnoreSpec::new();
    ignore.add_dir("node_modules");
    let entries = scan(tmp.path(), &ignore, &scope);
    assert_eq!(
        rel_paths(tmp.path(), &entries),
        vec!["a.txt", "web", "web/index.html"]
    );
}

#[test]
fn scope_outside_the_tree_yields_nothing() {
    let tmp = fixture();
    let scope = SelectionScope::new(vec![PathBuf::from("/definitely/not/here")]);
    let entries = scan(tmp.path(), &IgnoreSpec::new(), &scope);
    assert!(entries.is_empty());
}

#[test]
fn progress_reports_against_precounted_total() {
    let tmp = fixture();
    let ignore = IgnoreSpec::new();
    let scope = SelectionScope::default();
    let request = ScanRequest {
        root: tmp.path(),
        ignore: &ignore,
        scope: &scope,
        cancel: None,
    };
    let mut events: Vec<Progress> = Vec::new();
    let mut on_progress = |p: Progress| events.push(p);
    let entries = walk(&request, Some(&mut on_progress)).unwrap();

    assert_eq!(events.len(), entries.len());
    assert!(events.iter().all(|p| p.total == entries.len()));
    for (i, p) in events.iter().enumerate() {
        assert_eq!(p.scanned, i + 1);
    }
    let last = events.last().unwrap();
    assert_eq!(last.ratio(), Some(1.0));
}

#[test]
fn count_matches_walk_with_same_filters() {
    let tmp = fixture();
    let mut ignore = IgnoreSpec::new();
    ignore.add_dir("node_modules");
    ignore.add_ext("log");
    let scope = SelectionScope::default();
    let request = ScanRequest {
        root: tmp.path(),
        ignore: &ignore,
        scope: &scope,
        cancel: None,
    };
    assert_eq!(count(&request).unwrap(), walk(&request, None).unwrap().len());
}

#[test]
fn empty_directory_yields_no_entries() {
    let tmp = TempDir::new().unwrap();
    let entries = scan(tmp.path(), &IgnoreSpec::new(), &SelectionScope::default());
    assert!(entries.is_empty());
}

#[test]
fn missing_root_is_an_access_error() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope");
    let ignore = IgnoreSpec::new();
    let scope = SelectionScope::default();
    let request = ScanRequest {
        root: &missing,
        ignore: &ignore,
        scope: &scope,
        cancel: None,
    };
    match walk(&request, None) {
        Err(ScanError::Access { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected access error, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn unreadable_directory_aborts_the_walk() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = fixture();
    let locked = tmp.path().join("b");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    // Privileged users can still read it; nothing to test then.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }
    let ignore = IgnoreSpec::new();
    let scope = SelectionScope::default();
    let request = ScanRequest {
        root: tmp.path(),
        ignore: &ignore,
        scope: &scope,
        cancel: None,
    };
    let result = walk(&request, None);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    match result {
        Err(ScanError::Access { path, .. }) => assert_eq!(path, locked),
        other => panic!("expected access error, got {:?}", other),
    }
}

#[test]
fn cancelled_token_stops_the_scan() {
    let tmp = fixture();
    let ignore = IgnoreSpec::new();
    let scope = SelectionScope::default();
    let token = CancellationToken::new();
    token.cancel();
    let request = ScanRequest {
        root: tmp.path(),
        ignore: &ignore,
        scope: &scope,
        cancel: Some(&token),
    };
    assert!(matches!(walk(&request, None), Err(ScanError::Cancelled)));
    assert!(matches!(count(&request), Err(ScanError::Cancelled)));
}

#[test]
fn progress_ratio_unknown_until_total() {
    assert_eq!(Progress::default().ratio(), None);
    let p = Progress {
        scanned: 1,
        total: 4,
    };
    assert_eq!(p.ratio(), Some(0.25));
}

// Linux filesystems accept arbitrary bytes in names.
#[cfg(target_os = "linux")]
#[test]
fn ignored_extension_applies_to_non_utf8_names() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(OsStr::from_bytes(b"bad\xff.log")), "x").unwrap();
    fs::write(tmp.path().join(OsStr::from_bytes(b"bad\xff.txt")), "x").unwrap();
    let mut ignore = IgnoreSpec::new();
    ignore.add_ext("log");

    let entries = scan(tmp.path(), &ignore, &SelectionScope::default());
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].path.file_name().unwrap().as_encoded_bytes(),
        b"bad\xff.txt"
    );
}
