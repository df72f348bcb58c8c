//! Structured results of formatting runs.
//!
//! The pipeline never prints. It returns these values and the CLI renders
//! them as status lines or JSON.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Error;

/// Why a file could not be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The input file does not exist.
    NotFound,
    /// Any other read, decode or write failure.
    Io,
}

/// Result of formatting one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// The file was wrapped and written.
    Formatted {
        /// Input file.
        input: PathBuf,
        /// Written output file.
        output: PathBuf,
        /// Number of lines written.
        lines: usize,
    },
    /// The file was skipped.
    Failed {
        /// Input file.
        input: PathBuf,
        /// Failure category.
        kind: FailureKind,
        /// Human-readable description.
        message: String,
    },
}

impl FileOutcome {
    /// Build a failure outcome from an error.
    pub fn failed(input: &Path, error: &Error) -> Self {
        let kind = if error.is_not_found() { FailureKind::NotFound } else { FailureKind::Io };
        Self::Failed {
            input: input.to_path_buf(),
            kind,
            message: error.to_string(),
        }
    }

    /// Input file this outcome belongs to.
    pub fn input(&self) -> &Path {
        match self {
            Self::Formatted { input, .. } | Self::Failed { input, .. } => input,
        }
    }

    /// Whether the file was written.
    pub const fn is_formatted(&self) -> bool {
        matches!(self, Self::Formatted { .. })
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Formatted { input, output, lines } => {
                writeln!(f, "✓ Successfully formatted '{}'", input.display())?;
                writeln!(f, "✓ Output saved to '{}'", output.display())?;
                write!(f, "✓ Total lines: {lines}")
            }
            Self::Failed { message, .. } => write!(f, "✗ Error: {message}"),
        }
    }
}

/// Results of formatting a directory, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Directory that was scanned.
    pub input_dir: PathBuf,
    /// Directory outputs were written to.
    pub output_dir: PathBuf,
    /// One outcome per discovered file.
    pub files: Vec<FileOutcome>,
}

impl BatchReport {
    /// Number of files written.
    pub fn formatted(&self) -> usize {
        self.files.iter().filter(|o| o.is_formatted()).count()
    }

    /// Number of files that failed.
    pub fn failed(&self) -> usize {
        self.files.len() - self.formatted()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, outcome) in self.files.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{outcome}")?;
        }
        Ok(())
    }
}
