//! Traversal engine: walks a directory tree in pre-order, prunes ignored and
//! out-of-scope entries, and emits what survives.
//!
//! With a progress callback the tree is walked twice: a counting pass to learn
//! the total, then a collecting pass that reports `scanned/total`.

mod error;
#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use tokio_util::sync::CancellationToken;
use walkdir::{DirEntry, WalkDir};

use crate::core::ignore::IgnoreSpec;
use crate::core::scope::SelectionScope;

pub use error::ScanError;

/// A filesystem entry that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Path as produced by the walk (root joined with the relative components).
    pub path: PathBuf,
    pub is_dir: bool,
    /// Size in bytes. Always 0 for directories.
    pub size: u64,
}

impl Entry {
    /// Final path segment, or the whole path when it has none.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Entries emitted so far against the expected total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub scanned: usize,
    pub total: usize,
}

impl Progress {
    /// Completed fraction in `0.0..=1.0`, or `None` while the total is unknown.
    pub fn ratio(&self) -> Option<f64> {
        (self.total > 0).then(|| (self.scanned as f64 / self.total as f64).min(1.0))
    }
}

/// Parameters of one scan. Borrowed from the immutable run configuration.
pub struct ScanRequest<'a> {
    pub root: &'a Path,
    pub ignore: &'a IgnoreSpec,
    pub scope: &'a SelectionScope,
    /// Checked before every traversal step.
    pub cancel: Option<&'a CancellationToken>,
}

impl ScanRequest<'_> {
    /// Prune predicate. The root itself is never filtered.
    fn admits(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return true;
        }
        let is_dir = entry.file_type().is_dir();
        !self.ignore.should_ignore(entry.path(), is_dir) && self.scope.admits(entry.path())
    }

    fn check_cancelled(&self) -> Result<(), ScanError> {
        match self.cancel {
            Some(token) if token.is_cancelled() => Err(ScanError::Cancelled),
            _ => Ok(()),
        }
    }

    /// Pre-order walk with pruning applied; siblings sorted by file name.
    fn entries(&self) -> impl Iterator<Item = Result<DirEntry, ScanError>> + '_ {
        WalkDir::new(self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |e| self.admits(e))
            .map(move |item| {
                self.check_cancelled()?;
                item.map_err(|e| error::from_walkdir(e, self.root))
            })
    }
}

/// Count the entries a walk would emit, without collecting them.
pub fn count(request: &ScanRequest<'_>) -> Result<usize, ScanError> {
    log::debug!("counting entries under {}", request.root.display());
    let mut total = 0;
    for item in request.entries() {
        if item?.depth() > 0 {
            total += 1;
        }
    }
    log::debug!("counted {} entries under {}", total, request.root.display());
    Ok(total)
}

/// Walk `request.root` and return the surviving entries in emission order.
///
/// The root is not part of the result. Any access error aborts the walk.
pub fn walk(
    request: &ScanRequest<'_>,
    mut on_progress: Option<&mut dyn FnMut(Progress)>,
) -> Result<Vec<Entry>, ScanError> {
    let total = match on_progress {
        Some(_) => count(request)?,
        None => 0,
    };

    log::debug!("collecting entries under {}", request.root.display());
    let mut entries = Vec::new();
    for item in request.entries() {
        let dent = item?;
        if dent.depth() == 0 {
            continue;
        }
        let is_dir = dent.file_type().is_dir();
        let size = if is_dir {
            0
        } else {
            dent.metadata()
                .map_err(|e| error::from_walkdir(e, request.root))?
                .len()
        };
        entries.push(Entry {
            path: dent.into_path(),
            is_dir,
            size,
        });
        if let Some(report) = on_progress.as_mut() {
            report(Progress {
                scanned: entries.len(),
                total,
            });
        }
    }
    log::debug!(
        "collected {} entries under {}",
        entries.len(),
        request.root.display()
    );
    Ok(entries)
}
