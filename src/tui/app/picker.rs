//! Directory picker state: current directory, its subdirectories, and the mark.
//!
//! Listing a directory is filesystem I/O, so it never happens here. Navigation
//! only records where the picker wants to be and sets `loading`; the UI loop
//! runs [`DirListing::read`] off-thread and hands the result back through
//! [`PickerState::apply_listing`].

use std::fs;
use std::path::{Path, PathBuf};

use ratatui::widgets::ListState;

/// Label of the first row, which stands for the current directory itself.
pub(crate) const CURRENT_DIR_LABEL: &str = "./";

/// Subdirectories of one directory, read on the blocking pool.
#[derive(Debug)]
pub struct DirListing {
    pub dir: PathBuf,
    pub show_hidden: bool,
    pub result: Result<Vec<PathBuf>, String>,
}

impl DirListing {
    /// Read the sorted subdirectories of `dir`. Blocks on the filesystem.
    pub fn read(dir: PathBuf, show_hidden: bool) -> Self {
        let result = list_subdirs(&dir, show_hidden).map_err(|e| {
            log::warn!("Cannot list {}: {}", dir.display(), e);
            e.to_string()
        });
        Self {
            dir,
            show_hidden,
            result,
        }
    }
}

pub struct PickerState {
    /// Directory being browsed.
    pub(crate) dir: PathBuf,
    /// Subdirectories of `dir`, sorted by name. Row 0 is `dir` itself.
    pub(crate) subdirs: Vec<PathBuf>,
    pub(crate) selected_index: usize,
    pub(crate) list_state: ListState,
    /// Directory marked with Enter; a second Enter starts the scan.
    pub(crate) marked: Option<PathBuf>,
    pub(crate) show_hidden: bool,
    /// A listing of `dir` has been requested and not yet applied.
    pub(crate) loading: bool,
    /// Error from listing `dir`, shown instead of the list.
    pub(crate) error: Option<String>,
    /// Directory we came up from; the cursor lands on it once listed.
    return_to: Option<PathBuf>,
}

impl PickerState {
    /// Picker on `dir`, waiting for its first listing.
    pub fn open(dir: PathBuf) -> Self {
        Self {
            dir,
            subdirs: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            marked: None,
            show_hidden: false,
            loading: true,
            error: None,
            return_to: None,
        }
    }

    /// Install a finished listing. Listings for a directory or hidden-state
    /// the picker has since moved away from are dropped; returns whether it applied.
    pub fn apply_listing(&mut self, listing: DirListing) -> bool {
        if listing.dir != self.dir || listing.show_hidden != self.show_hidden {
            log::debug!("Dropping stale listing of {}", listing.dir.display());
            return false;
        }
        match listing.result {
            Ok(subdirs) => {
                self.subdirs = subdirs;
                self.error = None;
            }
            Err(e) => {
                self.subdirs.clear();
                self.error = Some(e);
            }
        }
        self.loading = false;
        self.selected_index = self.selected_index.min(self.subdirs.len());
        if let Some(left) = self.return_to.take()
            && let Some(pos) = self.subdirs.iter().position(|d| *d == left)
        {
            self.selected_index = pos + 1;
        }
        true
    }

    /// Number of rows, including the current-directory row.
    pub(crate) fn row_count(&self) -> usize {
        self.subdirs.len() + 1
    }

    /// Path under the cursor.
    pub(crate) fn highlighted(&self) -> &Path {
        match self.selected_index {
            0 => &self.dir,
            i => self.subdirs.get(i - 1).map(PathBuf::as_path).unwrap_or(&self.dir),
        }
    }

    pub(crate) fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub(crate) fn move_down(&mut self) {
        self.selected_index = (self.selected_index + 1).min(self.row_count() - 1);
    }

    /// Descend into the highlighted subdirectory. Returns true when a new
    /// listing is needed.
    pub(crate) fn open_highlighted(&mut self) -> bool {
        if self.selected_index == 0 {
            return false;
        }
        let target = self.highlighted().to_path_buf();
        self.navigate(target, None);
        true
    }

    /// Go to the parent directory; the cursor returns to the directory we left.
    pub(crate) fn open_parent(&mut self) -> bool {
        let Some(parent) = self.dir.parent().map(Path::to_path_buf) else {
            return false;
        };
        let left = self.dir.clone();
        self.navigate(parent, Some(left));
        true
    }

    fn navigate(&mut self, dir: PathBuf, return_to: Option<PathBuf>) {
        self.dir = dir;
        self.subdirs.clear();
        self.error = None;
        self.selected_index = 0;
        self.return_to = return_to;
        self.loading = true;
    }

    pub(crate) fn toggle_hidden(&mut self) -> bool {
        self.show_hidden = !self.show_hidden;
        self.loading = true;
        true
    }

    pub(crate) fn mark_highlighted(&mut self) {
        self.marked = Some(self.highlighted().to_path_buf());
    }

    pub(crate) fn clear_mark(&mut self) {
        self.marked = None;
    }

    /// Display label for a subdirectory row.
    pub(crate) fn label(path: &Path) -> String {
        path.file_name()
            .map(|n| format!("{}/", n.to_string_lossy()))
            .unwrap_or_else(|| path.display().to_string())
    }
}

fn list_subdirs(dir: &Path, show_hidden: bool) -> std::io::Result<Vec<PathBuf>> {
    let mut subdirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if !show_hidden && entry.file_name().as_encoded_bytes().starts_with(b".") {
            continue;
        }
        subdirs.push(entry.path());
    }
    subdirs.sort();
    Ok(subdirs)
}
