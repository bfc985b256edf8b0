//! Error types shared by the analyzer, the spelling pass and the CLI.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The input document does not exist.
    #[error("could not find file {}", path.display())]
    MissingInput { path: PathBuf },

    /// Readability was requested for text with no sentences or no words.
    #[error("text contains no sentences or no words")]
    EmptyText,

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The console report could not be written.
    #[error("could not write report: {0}")]
    Report(#[from] io::Error),

    /// Word list could not be read or parsed.
    #[error("dictionary error: {0}")]
    Dictionary(String),
}

impl AnalyzerError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AnalyzerError::Io {
            path: path.into(),
            source,
        }
    }

    /// Maps a failed read of `path` to `MissingInput` when the file is absent.
    pub fn from_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            AnalyzerError::MissingInput { path }
        } else {
            AnalyzerError::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_becomes_missing_input() {
        let err = AnalyzerError::from_read(
            "data/in/nope.txt",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, AnalyzerError::MissingInput { .. }));
        assert_eq!(err.to_string(), "could not find file data/in/nope.txt");
    }

    #[test]
    fn other_read_errors_stay_io() {
        let err = AnalyzerError::from_read(
            "locked.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, AnalyzerError::Io { .. }));
    }
}
