//! Renderers for a scanned listing: flat path list and branch-drawn tree.

use std::collections::HashMap;
use std::path::Path;

use super::format::{PathStyle, display_path, format_size};
use super::scanner::Entry;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const BLANK_INDENT: &str = "    ";

/// One line per file entry, in emission order.
///
/// Directories are implied by the paths of the files below them and get no
/// line of their own.
pub fn build_list(entries: &[Entry], root: &Path, style: PathStyle) -> String {
    let mut out = String::new();
    for entry in entries.iter().filter(|e| !e.is_dir) {
        out.push_str(&display_path(&entry.path, root, style));
        out.push('\n');
    }
    out
}

/// Branch-drawn tree headed by the root's base name.
///
/// Entries are grouped under their parent directory; siblings keep emission
/// order. Directories print as `name/`, files as `name (size)`.
pub fn build_tree(entries: &[Entry], root: &Path) -> String {
    let mut children: HashMap<&Path, Vec<&Entry>> = HashMap::new();
    for entry in entries {
        if let Some(parent) = entry.path.parent() {
            children.entry(parent).or_default().push(entry);
        }
    }

    let mut out = root_label(root);
    if !out.ends_with('/') {
        out.push('/');
    }
    out.push('\n');
    render_children(&mut out, root, "", &children);
    out
}

fn root_label(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

fn node_label(entry: &Entry) -> String {
    if entry.is_dir {
        format!("{}/", entry.name())
    } else {
        format!("{} ({})", entry.name(), format_size(entry.size))
    }
}

fn render_children(
    out: &mut String,
    dir: &Path,
    indent: &str,
    children: &HashMap<&Path, Vec<&Entry>>,
) {
    let Some(group) = children.get(dir) else {
        return;
    };
    for (i, child) in group.iter().enumerate() {
        let (branch, continuation) = if i + 1 == group.len() {
            (LAST_BRANCH, BLANK_INDENT)
        } else {
            (BRANCH, PIPE_INDENT)
        };
        out.push_str(indent);
        out.push_str(branch);
        out.push_str(&node_label(child));
        out.push('\n');
        render_children(out, &child.path, &format!("{}{}", indent, continuation), children);
    }
}
