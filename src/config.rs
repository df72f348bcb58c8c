//! Formatter configuration.
//!
//! One [`FormatConfig`] drives both the single-file and the directory
//! pipelines; the CLI layer converts its arguments into it.

use crate::constants::display::{DEFAULT_CHARS_PER_LINE, DEFAULT_ROWS_PER_PAGE};
use crate::error::{Error, Result};
use crate::wrap::{LineWrapper, Measure};

/// Configuration for a formatting run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)] // Independent feature toggles
pub struct FormatConfig {
    /// Maximum line length, in units of `measure`
    pub chars_per_line: usize,
    /// Rows per device page. Validated but never used to group lines.
    pub rows_per_page: usize,
    /// Drop everything up to and including the Gutenberg start marker line
    pub strip_header: bool,
    /// Drop the Gutenberg end marker line and everything after it
    pub strip_footer: bool,
    /// Name outputs after the embedded book title when one is found
    pub gutenberg_names: bool,
    /// How line length is counted
    pub measure: Measure,
    /// Process batch files on the rayon pool
    pub parallel: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            chars_per_line: DEFAULT_CHARS_PER_LINE,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            strip_header: true,
            strip_footer: false,
            gutenberg_names: false,
            measure: Measure::Chars,
            parallel: false,
        }
    }
}

impl FormatConfig {
    /// Set the maximum line length.
    #[must_use]
    pub const fn with_chars_per_line(mut self, chars_per_line: usize) -> Self {
        self.chars_per_line = chars_per_line;
        self
    }

    /// Set the rows per page.
    #[must_use]
    pub const fn with_rows_per_page(mut self, rows_per_page: usize) -> Self {
        self.rows_per_page = rows_per_page;
        self
    }

    /// Enable or disable title-based output names.
    #[must_use]
    pub const fn with_gutenberg_names(mut self, enabled: bool) -> Self {
        self.gutenberg_names = enabled;
        self
    }

    /// Enable or disable header stripping.
    #[must_use]
    pub const fn with_strip_header(mut self, enabled: bool) -> Self {
        self.strip_header = enabled;
        self
    }

    /// Enable or disable footer stripping.
    #[must_use]
    pub const fn with_strip_footer(mut self, enabled: bool) -> Self {
        self.strip_footer = enabled;
        self
    }

    /// Select the line length measure.
    #[must_use]
    pub const fn with_measure(mut self, measure: Measure) -> Self {
        self.measure = measure;
        self
    }

    /// Enable or disable parallel batch processing.
    #[must_use]
    pub const fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Reject settings the formatter cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.chars_per_line == 0 {
            return Err(Error::config(
                "chars_per_line must be greater than zero",
                "Pass a positive --chars-per-line (default 21)",
            ));
        }
        if self.rows_per_page == 0 {
            return Err(Error::config(
                "rows_per_page must be greater than zero",
                "Pass a positive --rows-per-page (default 8)",
            ));
        }
        Ok(())
    }

    /// Validate and build the line wrapper for this configuration.
    pub fn wrapper(&self) -> Result<LineWrapper> {
        self.validate()?;
        LineWrapper::new(self.chars_per_line, self.measure)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_defaults_match_device_geometry() {
        let config = FormatConfig::default();
        assert_eq!(config.chars_per_line, 21);
        assert_eq!(config.rows_per_page, 8);
        assert!(config.strip_header);
        assert!(!config.strip_footer);
        assert!(!config.gutenberg_names);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let config = FormatConfig::default().with_chars_per_line(0);
        match config.validate() {
            Err(Error::Config { message, .. }) => assert!(message.contains("chars_per_line")),
            other => panic!("Expected Config error, got {other:?}"),
        }
        assert!(config.wrapper().is_err());
    }

    #[test]
    fn test_zero_rows_is_rejected() {
        let config = FormatConfig::default().with_rows_per_page(0);
        assert!(matches!(config.validate(), Err(Error::Config { .. })));
    }

    #[test]
    fn test_builder_methods_apply() {
        let config = FormatConfig::default()
            .with_chars_per_line(30)
            .with_gutenberg_names(true)
            .with_strip_header(false)
            .with_strip_footer(true)
            .with_measure(Measure::Columns)
            .with_parallel(true);
        assert_eq!(config.chars_per_line, 30);
        assert!(config.gutenberg_names);
        assert!(!config.strip_header);
        assert!(config.strip_footer);
        assert_eq!(config.measure, Measure::Columns);
        assert!(config.parallel);
        assert_eq!(config.wrapper().unwrap().width(), 30);
    }
}
