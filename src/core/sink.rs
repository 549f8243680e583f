//! Output destinations for rendered text: stdout, a file, or the clipboard.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Where the rendered text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
    Clipboard,
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("cannot write {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write to stdout: {0}")]
    Stdout(#[source] io::Error),
    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),
}

impl Sink {
    /// Clipboard wins over an output file; stdout is the fallback.
    pub fn from_flags(clipboard: bool, output: Option<PathBuf>) -> Self {
        match (clipboard, output) {
            (true, _) => Self::Clipboard,
            (false, Some(path)) => Self::File(path),
            (false, None) => Self::Stdout,
        }
    }

    /// Deliver `text` to this sink.
    pub fn write(&self, text: &str) -> Result<(), SinkError> {
        match self {
            Self::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(text.as_bytes())
                    .and_then(|_| out.flush())
                    .map_err(SinkError::Stdout)
            }
            Self::File(path) => fs::write(path, text).map_err(|source| SinkError::File {
                path: path.clone(),
                source,
            }),
            Self::Clipboard => {
                arboard::Clipboard::new().and_then(|mut c| c.set_text(text.to_string()))?;
                log::info!("Copied {} bytes to the clipboard", text.len());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn clipboard_takes_precedence() {
        assert_eq!(
            Sink::from_flags(true, Some(PathBuf::from("out.txt"))),
            Sink::Clipboard
        );
        assert_eq!(
            Sink::from_flags(false, Some(PathBuf::from("out.txt"))),
            Sink::File(PathBuf::from("out.txt"))
        );
        assert_eq!(Sink::from_flags(false, None), Sink::Stdout);
    }

    #[test]
    fn file_sink_writes_text() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tree.txt");
        Sink::File(path.clone()).write("p/\n").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "p/\n");
    }

    #[test]
    fn file_sink_reports_path_on_failure() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing-dir").join("tree.txt");
        let err = Sink::File(path.clone()).write("x").unwrap_err();
        assert!(err.to_string().contains("missing-dir"));
    }
}
