//! Display helpers: entry paths and human-readable sizes.

use std::path::{Component, Path};

const BYTES_IN_KB: u64 = 1024;
const BYTES_IN_MB: u64 = 1024 * 1024;
const BYTES_IN_GB: u64 = 1024 * 1024 * 1024;

/// How paths are printed in path-list mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    Absolute,
    Relative,
}

/// Path of an entry as shown to the user.
///
/// `Relative` strips `root` and joins components with `/` (`"."` for the root
/// itself). A path outside `root` is shown unchanged.
pub fn display_path(path: &Path, root: &Path, style: PathStyle) -> String {
    match style {
        PathStyle::Absolute => path.display().to_string(),
        PathStyle::Relative => match path.strip_prefix(root) {
            Ok(rel) => to_slash(rel),
            Err(_) => path.display().to_string(),
        },
    }
}

/// Join the normal components of `rel` with forward slashes.
fn to_slash(rel: &Path) -> String {
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

/// Format a byte count: `"<n> B"`, then `KB`/`MB`/`GB` with two decimals.
/// Tier boundaries are strict, so 1024 is already `"1.00 KB"`.
pub fn format_size(bytes: u64) -> String {
    if bytes < BYTES_IN_KB {
        format!("{} B", bytes)
    } else if bytes < BYTES_IN_MB {
        format!("{:.2} KB", bytes as f64 / BYTES_IN_KB as f64)
    } else if bytes < BYTES_IN_GB {
        format!("{:.2} MB", bytes as f64 / BYTES_IN_MB as f64)
    } else {
        format!("{:.2} GB", bytes as f64 / BYTES_IN_GB as f64)
    }
}
