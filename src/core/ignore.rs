//! Ignore rules applied during directory traversal.
//!
//! Directories are matched by a trailing-substring test on the full path,
//! files by their final extension.

use std::collections::HashSet;
use std::path::Path;

/// Directory suffixes and file extensions excluded from a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSpec {
    dir_suffixes: Vec<String>,
    extensions: HashSet<String>,
}

impl IgnoreSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory suffix. Empty values and duplicates are dropped.
    pub fn add_dir(&mut self, suffix: &str) {
        let suffix = suffix.trim();
        if suffix.is_empty() || self.dir_suffixes.iter().any(|s| s == suffix) {
            return;
        }
        self.dir_suffixes.push(suffix.to_string());
    }

    /// Add a file extension. Accepts `log` or `.log`; stored as `.log`.
    pub fn add_ext(&mut self, ext: &str) {
        let ext = ext.trim();
        let bare = ext.strip_prefix('.').unwrap_or(ext);
        if bare.is_empty() {
            return;
        }
        self.extensions.insert(format!(".{}", bare));
    }

    pub fn dir_suffixes(&self) -> &[String] {
        &self.dir_suffixes
    }

    pub fn extensions(&self) -> &HashSet<String> {
        &self.extensions
    }

    pub fn is_empty(&self) -> bool {
        self.dir_suffixes.is_empty() && self.extensions.is_empty()
    }

    /// Returns `true` if the entry at `path` is excluded.
    ///
    /// A directory is excluded when its path ends with any configured suffix
    /// (plain substring test, so `build` also matches `my-build`). A file is
    /// excluded when its extension is in the extension set (case-sensitive).
    pub fn should_ignore(&self, path: &Path, is_dir: bool) -> bool {
        if is_dir {
            let raw = path.as_os_str().as_encoded_bytes();
            self.dir_suffixes
                .iter()
                .any(|s| raw.ends_with(s.as_bytes()))
        } else {
            extension_of(path)
                .and_then(|ext| std::str::from_utf8(ext).ok())
                .is_some_and(|ext| self.extensions.contains(ext))
        }
    }
}

/// Raw extension of the final path segment, from its last `.` (dot included).
/// `.bashrc` yields `.bashrc`; a name without a dot has no extension. The
/// rest of the name does not need to be valid UTF-8.
fn extension_of(path: &Path) -> Option<&[u8]> {
    let name = path.file_name()?.as_encoded_bytes();
    name.iter().rposition(|&b| b == b'.').map(|idx| &name[idx..])
}
