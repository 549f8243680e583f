//! Scan error types.

use std::io;
use std::path::PathBuf;

/// Errors that abort a scan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// A filesystem entry could not be enumerated or stat'd.
    #[error("cannot access {}: {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The scan was cancelled through its token.
    #[error("scan cancelled")]
    Cancelled,
}

/// Map a walkdir error into an access error, keeping the offending path.
pub(super) fn from_walkdir(err: walkdir::Error, root: &std::path::Path) -> ScanError {
    let path = err
        .path()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| root.to_path_buf());
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other(message));
    ScanError::Access { path, source }
}
