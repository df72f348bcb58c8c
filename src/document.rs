//! An input document held fully in memory.

use std::path::Path;

use crate::config::FormatConfig;
use crate::error::{Error, Result};
use crate::gutenberg;
use crate::wrap::LineWrapper;

/// Raw text of one input file. Never modified after reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    /// Read a UTF-8 file from disk.
    ///
    /// A missing file is reported as [`Error::FileNotFound`]; invalid UTF-8
    /// and every other failure as [`Error::Io`].
    pub fn read(path: &Path) -> Result<Self> {
        let text = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
        Ok(Self::from_text(text))
    }

    /// Wrap already-loaded text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Book title from the Gutenberg metadata, if any.
    pub fn title(&self) -> Option<String> {
        gutenberg::extract_title(&self.text)
    }

    /// The text left after boilerplate stripping.
    pub fn body(&self, config: &FormatConfig) -> &str {
        let mut body = self.text.as_str();
        if config.strip_header {
            body = gutenberg::strip_header(body);
        }
        if config.strip_footer {
            body = gutenberg::strip_footer(body);
        }
        body
    }

    /// Strip and wrap the document into display lines.
    pub fn reflow(&self, config: &FormatConfig, wrapper: LineWrapper) -> Vec<String> {
        wrapper.wrap(self.body(config))
    }
}
