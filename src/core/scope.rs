//! Selection scope: restricts a scan to paths under chosen prefixes.

use std::path::{Path, PathBuf};

/// Allowed path prefixes. Empty means no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionScope {
    prefixes: Vec<PathBuf>,
}

impl SelectionScope {
    pub fn new(prefixes: Vec<PathBuf>) -> Self {
        Self { prefixes }
    }

    pub fn prefixes(&self) -> &[PathBuf] {
        &self.prefixes
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// True when the scope is empty or `path` starts with one of the prefixes.
    ///
    /// This is a raw string-prefix test, not path-segment containment:
    /// a scope of `/a/b` also admits `/a/bc`.
    pub fn admits(&self, path: &Path) -> bool {
        if self.prefixes.is_empty() {
            return true;
        }
        let raw = path.as_os_str().as_encoded_bytes();
        self.prefixes
            .iter()
            .any(|p| raw.starts_with(p.as_os_str().as_encoded_bytes()))
    }
}
