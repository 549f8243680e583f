//! Render mode selection and dispatch to the list/tree renderers.

use std::path::Path;

use super::format::PathStyle;
use super::scanner::Entry;
use super::tree;

/// Output representation. A path style implies path-list mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Tree,
    PathList(PathStyle),
}

impl RenderMode {
    /// Pick the mode from an optional explicit path style.
    pub fn from_style(style: Option<PathStyle>) -> Self {
        match style {
            Some(style) => Self::PathList(style),
            None => Self::Tree,
        }
    }
}

/// Render `entries` scanned under `root` as a single text blob.
pub fn render(entries: &[Entry], root: &Path, mode: RenderMode) -> String {
    match mode {
        RenderMode::Tree => tree::build_tree(entries, root),
        RenderMode::PathList(style) => tree::build_list(entries, root, style),
    }
}
