//! Centralized path helpers for config and cache directories.

use std::path::PathBuf;

use crate::core::app;

/// File name of the default ignore-config inside the config directory.
const IGNORE_FILE_NAME: &str = "ignore";

/// Project directories (config, cache) from the standard platform locations.
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io", app::VENDOR, app::NAME)
}

/// Config directory (~/.config/dirtree/).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Cache directory (~/.cache/dirtree/). Holds the TUI log file.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}

/// Default ignore-config location (~/.config/dirtree/ignore), loaded when present.
pub fn default_ignore_file() -> Option<PathBuf> {
    config_dir().map(|d| d.join(IGNORE_FILE_NAME))
}
