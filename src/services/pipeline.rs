//! Single-file pipeline: read, strip, wrap, write.

use std::path::Path;

use crate::config::FormatConfig;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::report::FileOutcome;
use crate::services::naming::OutputTarget;
use crate::wrap::LineWrapper;

/// Format one file, converting any failure into a [`FileOutcome::Failed`].
pub fn process_file(
    input: &Path,
    target: &OutputTarget,
    config: &FormatConfig,
    wrapper: LineWrapper,
) -> FileOutcome {
    match format_file(input, target, config, wrapper) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::warn!("Failed to format {}: {e}", input.display());
            FileOutcome::failed(input, &e)
        }
    }
}

/// Format one file, propagating the first error.
pub fn format_file(
    input: &Path,
    target: &OutputTarget,
    config: &FormatConfig,
    wrapper: LineWrapper,
) -> Result<FileOutcome> {
    let document = Document::read(input)?;

    let title = if config.gutenberg_names { document.title() } else { None };
    let output = target.resolve(input, title.as_deref());

    let lines = document.reflow(config, wrapper);
    write_lines(&output, &lines)?;

    tracing::debug!(
        "Formatted {} -> {} ({} lines)",
        input.display(),
        output.display(),
        lines.len()
    );

    Ok(FileOutcome::Formatted {
        input: input.to_path_buf(),
        output,
        lines: lines.len(),
    })
}

/// Write lines joined by `\n`, without a trailing newline.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    fs_err::write(path, lines.join("\n")).map_err(|source| Error::Io {
        source,
        path: Some(path.to_path_buf()),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::report::FailureKind;
    use std::fs;
    use std::path::PathBuf;

    fn run(input: &Path, target: &OutputTarget, config: &FormatConfig) -> FileOutcome {
        process_file(input, target, config, config.wrapper().unwrap())
    }

    #[test]
    fn test_adjacent_output_without_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("fox.txt");
        fs::write(&input, "the quick brown fox jumps").unwrap();

        let config = FormatConfig::default().with_chars_per_line(10);
        let outcome = run(&input, &OutputTarget::Adjacent, &config);

        let output = dir.path().join("fox_formatted.txt");
        assert_eq!(
            outcome,
            FileOutcome::Formatted { input: input.clone(), output: output.clone(), lines: 3 }
        );
        assert_eq!(fs::read_to_string(output).unwrap(), "the quick\nbrown fox\njumps");
    }

    #[test]
    fn test_explicit_output_and_gutenberg_title_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("pg.txt");
        fs::write(&input, "Title: Walden\n*** START OF THE PROJECT GUTENBERG EBOOK ***\nbody text").unwrap();
        let output = dir.path().join("custom.out");

        let config = FormatConfig::default().with_gutenberg_names(true);
        let outcome = run(&input, &OutputTarget::Explicit(output.clone()), &config);

        assert!(outcome.is_formatted());
        assert_eq!(fs::read_to_string(output).unwrap(), "body text");
    }

    #[test]
    fn test_gutenberg_title_names_adjacent_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("pg.txt");
        fs::write(&input, "Title: Walden; or, Life in the Woods\nbody").unwrap();

        let config = FormatConfig::default().with_gutenberg_names(true).with_strip_header(false);
        let outcome = run(&input, &OutputTarget::Adjacent, &config);

        match outcome {
            FileOutcome::Formatted { output, .. } => {
                assert_eq!(output, dir.path().join("Walden_or_Life_in_the_Woods.txt"));
            }
            FileOutcome::Failed { message, .. } => panic!("unexpected failure: {message}"),
        }
    }

    #[test]
    fn test_empty_body_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("only_header.txt");
        fs::write(&input, "boilerplate\n*** START OF THE PROJECT GUTENBERG EBOOK").unwrap();

        let config = FormatConfig::default();
        let outcome = run(&input, &OutputTarget::Adjacent, &config);

        let output = dir.path().join("only_header_formatted.txt");
        assert_eq!(outcome, FileOutcome::Formatted { input, output: output.clone(), lines: 0 });
        assert_eq!(fs::read_to_string(output).unwrap(), "");
    }

    #[test]
    fn test_missing_input_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.txt");
        let outcome = run(&input, &OutputTarget::Adjacent, &FormatConfig::default());

        match outcome {
            FileOutcome::Failed { kind, message, .. } => {
                assert_eq!(kind, FailureKind::NotFound);
                assert!(message.ends_with("not found."));
            }
            FileOutcome::Formatted { .. } => panic!("Expected failure"),
        }
        assert!(!dir.path().join("missing_formatted.txt").exists());
    }

    #[test]
    fn test_invalid_utf8_is_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("latin1.txt");
        fs::write(&input, [0x63, 0x61, 0x66, 0xe9]).unwrap();

        let outcome = run(&input, &OutputTarget::Adjacent, &FormatConfig::default());
        assert!(matches!(outcome, FileOutcome::Failed { kind: FailureKind::Io, .. }));
    }

    #[test]
    fn test_unwritable_output_is_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("ok.txt");
        fs::write(&input, "words").unwrap();
        let output = PathBuf::from(dir.path()).join("no_such_dir").join("out.txt");

        let outcome = run(&input, &OutputTarget::Explicit(output), &FormatConfig::default());
        assert!(matches!(outcome, FileOutcome::Failed { kind: FailureKind::Io, .. }));
    }
}
