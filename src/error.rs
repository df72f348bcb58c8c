//! Application error types.
//!
//! Every failure the formatter can hit, from a missing input file to an
//! invalid line width, with enough context to print an actionable message.

use std::path::PathBuf;

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// Input file does not exist
    #[error("File '{}' not found.", .path.display())]
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// Input directory for a batch run does not exist
    #[error("Directory '{}' not found.", .path.display())]
    DirectoryNotFound {
        /// Directory that was requested.
        path: PathBuf,
    },

    /// Directory scan found nothing to format
    #[error("No input files found in '{}'.", .path.display())]
    NoFilesFound {
        /// Directory that was scanned.
        path: PathBuf,
    },

    /// IO or encoding error with path context
    #[error("{source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },
}

impl Error {
    /// Create an IO error with path context.
    ///
    /// A `NotFound` error becomes [`Error::FileNotFound`] so callers can tell
    /// a missing input apart from every other read failure.
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        let path = path.into();
        match (source.kind(), path) {
            (std::io::ErrorKind::NotFound, Some(path)) => Self::FileNotFound { path },
            (_, path) => Self::Io { source, path },
        }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Whether this error is a missing-file error.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}
