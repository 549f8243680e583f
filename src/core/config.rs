//! Run configuration: assembled once from command-line flags and the
//! ignore-config file, then shared read-only by every component.

use std::env;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use super::format::PathStyle;
use super::ignore::IgnoreSpec;
use super::paths;
use super::render::RenderMode;
use super::scope::SelectionScope;
use super::sink::Sink;

/// Immutable configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory to scan when no interactive choice is made.
    pub root: PathBuf,
    pub ignore: IgnoreSpec,
    pub scope: SelectionScope,
    pub render: RenderMode,
    pub sink: Sink,
}

/// Raw option values collected by the command line.
#[derive(Debug, Default)]
pub struct Flags {
    pub relative: bool,
    pub absolute: bool,
    pub output: Option<PathBuf>,
    pub clipboard: bool,
    pub ignore_dirs: Vec<String>,
    pub ignore_exts: Vec<String>,
    pub ignore_config: Option<PathBuf>,
    pub scope: Vec<PathBuf>,
}

/// Errors detected before any traversal starts.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("--relative and --absolute are mutually exclusive")]
    ConflictingPathStyles,
    #[error("cannot read ignore config {}: {source}", path.display())]
    IgnoreFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),
}

/// Resolve the requested path style. Both flags at once is a conflict.
pub fn path_style(relative: bool, absolute: bool) -> Result<Option<PathStyle>, ConfigError> {
    match (relative, absolute) {
        (true, true) => Err(ConfigError::ConflictingPathStyles),
        (true, false) => Ok(Some(PathStyle::Relative)),
        (false, true) => Ok(Some(PathStyle::Absolute)),
        (false, false) => Ok(None),
    }
}

/// Build the configuration rooted at the current directory.
pub fn load(flags: &Flags) -> Result<Config, ConfigError> {
    // Conflicts abort before touching the filesystem.
    path_style(flags.relative, flags.absolute)?;
    let cwd = env::current_dir().map_err(ConfigError::CurrentDir)?;
    build(flags, cwd, paths::default_ignore_file())
}

/// Build the configuration for an explicit root. The default ignore file is
/// read only when no `--ignore-config` was given, and only if it exists.
fn build(
    flags: &Flags,
    root: PathBuf,
    default_ignore_file: Option<PathBuf>,
) -> Result<Config, ConfigError> {
    let render = RenderMode::from_style(path_style(flags.relative, flags.absolute)?);

    let mut ignore = IgnoreSpec::new();
    for dir in &flags.ignore_dirs {
        ignore.add_dir(dir);
    }
    for ext in &flags.ignore_exts {
        ignore.add_ext(ext);
    }
    match &flags.ignore_config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| ConfigError::IgnoreFile {
                path: path.clone(),
                source,
            })?;
            parse_ignore_config(&text, &mut ignore);
        }
        None => {
            if let Some(path) = default_ignore_file.filter(|p| p.is_file()) {
                match fs::read_to_string(&path) {
                    Ok(text) => parse_ignore_config(&text, &mut ignore),
                    Err(e) => log::warn!("Skipping ignore config {}: {}", path.display(), e),
                }
            }
        }
    }
    if !ignore.is_empty() {
        log::debug!(
            "ignore dirs: {:?}, ignore exts: {:?}",
            ignore.dir_suffixes(),
            ignore.extensions()
        );
    }

    let scope = SelectionScope::new(flags.scope.iter().map(|p| resolve(&root, p)).collect());
    if !scope.is_empty() {
        log::debug!("scope: {:?}", scope.prefixes());
    }

    Ok(Config {
        root,
        ignore,
        scope,
        render,
        sink: Sink::from_flags(flags.clipboard, flags.output.clone()),
    })
}

/// Apply `dir:<suffix>` and `ext:<ext>` lines to `spec`. Other lines are skipped.
pub fn parse_ignore_config(text: &str, spec: &mut IgnoreSpec) {
    for line in text.lines().map(str::trim) {
        if let Some(dir) = line.strip_prefix("dir:") {
            spec.add_dir(dir);
        } else if let Some(ext) = line.strip_prefix("ext:") {
            spec.add_ext(ext);
        }
    }
}

/// Make `path` absolute against `base`, dropping `.` components.
fn resolve(base: &Path, path: &Path) -> PathBuf {
    base.join(path)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
