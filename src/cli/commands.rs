//! Subcommands and their arguments.
//!
//! clap types stop here: each argument set converts into a
//! [`FormatConfig`] before anything runs.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use ereflow::constants::display::{DEFAULT_CHARS_PER_LINE, DEFAULT_ROWS_PER_PAGE};
use ereflow::constants::naming::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use ereflow::{FormatConfig, Measure};

/// The two ways to run the formatter
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format one text file
    File(FileArgs),

    /// Format every file with "txt" in its name under a directory tree
    Dir(DirArgs),
}

/// Arguments for the `file` command.
#[derive(Args, Debug)]
pub struct FileArgs {
    /// Text file to format
    pub input: PathBuf,

    /// Where to write the result (default: <stem>_formatted.txt next to the input)
    pub output: Option<PathBuf>,

    /// Name the default output after the Gutenberg book title
    #[arg(long)]
    pub gutenberg: bool,

    /// Layout options
    #[command(flatten)]
    pub format: FormatArgs,
}

/// Arguments for the `dir` command.
#[derive(Args, Debug)]
pub struct DirArgs {
    /// Directory of input files to format
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Directory to write formatted files (created if missing)
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Use Gutenberg metadata for output file names
    #[arg(long)]
    pub gutenberg: bool,

    /// Format files in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Layout options
    #[command(flatten)]
    pub format: FormatArgs,
}

/// Layout options shared by both commands.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Maximum characters per line
    #[arg(long, default_value_t = DEFAULT_CHARS_PER_LINE)]
    pub chars_per_line: usize,

    /// Rows per device page (accepted for compatibility, does not change output)
    #[arg(long, default_value_t = DEFAULT_ROWS_PER_PAGE)]
    pub rows_per_page: usize,

    /// Keep the Gutenberg header instead of stripping it
    #[arg(long)]
    pub keep_header: bool,

    /// Also strip the Gutenberg license footer
    #[arg(long)]
    pub strip_footer: bool,

    /// How to count line length
    #[arg(long, value_enum, default_value_t = MeasureArg::Chars)]
    pub measure: MeasureArg,
}

/// Line length measure as spelled on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureArg {
    /// Count characters
    Chars,
    /// Count terminal display columns
    Columns,
}

impl From<MeasureArg> for Measure {
    fn from(m: MeasureArg) -> Self {
        match m {
            MeasureArg::Chars => Self::Chars,
            MeasureArg::Columns => Self::Columns,
        }
    }
}

impl FormatArgs {
    /// Build the formatter configuration.
    pub fn into_config(self, gutenberg: bool, parallel: bool) -> FormatConfig {
        FormatConfig::default()
            .with_chars_per_line(self.chars_per_line)
            .with_rows_per_page(self.rows_per_page)
            .with_strip_header(!self.keep_header)
            .with_strip_footer(self.strip_footer)
            .with_gutenberg_names(gutenberg)
            .with_measure(self.measure.into())
            .with_parallel(parallel)
    }
}
