//! Application constants.
//!
//! Centralizes magic numbers and literal strings for better maintainability.

/// Display geometry defaults for the target e-reader.
pub mod display {
    /// Default maximum characters per line.
    pub const DEFAULT_CHARS_PER_LINE: usize = 21;

    /// Default rows per page. Accepted and validated, never applied to output.
    pub const DEFAULT_ROWS_PER_PAGE: usize = 8;
}

/// Project Gutenberg boilerplate markers and metadata prefixes.
pub mod gutenberg {
    /// Marker on the line just before the book content starts.
    pub const START_MARKER: &str = "*** START OF THE PROJECT GUTENBERG EBOOK";

    /// Marker on the line just after the book content ends.
    pub const END_MARKER: &str = "*** END OF THE PROJECT GUTENBERG EBOOK";

    /// Metadata line prefix carrying the book title.
    pub const TITLE_PREFIX: &str = "Title:";

    /// Banner line prefix carrying the book title.
    pub const EBOOK_OF_PREFIX: &str = "The Project Gutenberg eBook of";
}

/// Output naming and discovery constants.
pub mod naming {
    /// Suffix appended to the input stem when no title is used.
    pub const FORMATTED_SUFFIX: &str = "_formatted";

    /// Extension for title-derived and single-file default outputs.
    pub const TEXT_EXTENSION: &str = "txt";

    /// Case-insensitive substring a file name must contain to be picked up by a batch run.
    pub const DISCOVERY_NEEDLE: &str = "txt";

    /// Default batch input directory.
    pub const DEFAULT_INPUT_DIR: &str = "input_dir";

    /// Default batch output directory.
    pub const DEFAULT_OUTPUT_DIR: &str = "output_dir";
}
