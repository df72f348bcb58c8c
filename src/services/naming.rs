//! Output path derivation.
//!
//! Outputs are named after the input stem (`book_formatted.txt`) unless a
//! Gutenberg title is available and survives sanitization (`Moby_Dick.txt`).

use std::path::{Path, PathBuf};

use crate::constants::naming::{FORMATTED_SUFFIX, TEXT_EXTENSION};
use crate::gutenberg::sanitize_title;

/// Where a formatted file should be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Exactly this path.
    Explicit(PathBuf),
    /// Next to the input file.
    Adjacent,
    /// Inside this directory, under a derived name.
    Directory(PathBuf),
}

impl OutputTarget {
    /// Resolve the output path for `input`, using `title` when one was extracted.
    pub fn resolve(&self, input: &Path, title: Option<&str>) -> PathBuf {
        match self {
            Self::Explicit(path) => path.clone(),
            Self::Adjacent => input.with_file_name(adjacent_output_name(input, title)),
            Self::Directory(dir) => dir.join(derive_output_name(input, title)),
        }
    }
}

/// Derive an output file name for `input`.
///
/// Uses `{sanitized_title}.txt` when the title sanitizes to something
/// non-empty, otherwise `{stem}_formatted{.ext}`.
pub fn derive_output_name(input: &Path, title: Option<&str>) -> String {
    title_name(title).unwrap_or_else(|| {
        let stem = stem_of(input);
        input.extension().map_or_else(
            || format!("{stem}{FORMATTED_SUFFIX}"),
            |ext| format!("{stem}{FORMATTED_SUFFIX}.{}", ext.to_string_lossy()),
        )
    })
}

/// Output file name used by single-file mode when no output path is given.
///
/// Same title rule as [`derive_output_name`]; the fallback always ends in `.txt`.
pub fn adjacent_output_name(input: &Path, title: Option<&str>) -> String {
    title_name(title)
        .unwrap_or_else(|| format!("{}{FORMATTED_SUFFIX}.{TEXT_EXTENSION}", stem_of(input)))
}

fn title_name(title: Option<&str>) -> Option<String> {
    let sanitized = sanitize_title(title?);
    (!sanitized.is_empty()).then(|| format!("{sanitized}.{TEXT_EXTENSION}"))
}

fn stem_of(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_title_wins_when_sanitized_non_empty() {
        let name = derive_output_name(Path::new("pg2701.txt"), Some("Moby Dick; or, The Whale"));
        assert_eq!(name, "Moby_Dick_or_The_Whale.txt");
    }

    #[test]
    fn test_fallback_without_title() {
        assert_eq!(derive_output_name(Path::new("dir/pg2701.txt"), None), "pg2701_formatted.txt");
    }

    #[test]
    fn test_fallback_when_title_sanitizes_empty() {
        assert_eq!(derive_output_name(Path::new("book.txt"), Some("?!")), "book_formatted.txt");
        assert_eq!(derive_output_name(Path::new("book.txt"), Some("")), "book_formatted.txt");
    }

    #[test]
    fn test_fallback_keeps_original_extension() {
        assert_eq!(derive_output_name(Path::new("notes.TXT"), None), "notes_formatted.TXT");
        assert_eq!(derive_output_name(Path::new("a.b.txt2"), None), "a.b_formatted.txt2");
        assert_eq!(derive_output_name(Path::new("README_txt"), None), "README_txt_formatted");
    }

    #[test]
    fn test_adjacent_output_always_txt() {
        assert_eq!(adjacent_output_name(Path::new("story.md"), None), "story_formatted.txt");
        assert_eq!(adjacent_output_name(Path::new("story.md"), Some("Walden")), "Walden.txt");
    }

    #[test]
    fn test_resolve_targets() {
        let input = Path::new("books/pg1.txt");
        assert_eq!(
            OutputTarget::Adjacent.resolve(input, None),
            PathBuf::from("books/pg1_formatted.txt")
        );
        assert_eq!(
            OutputTarget::Directory(PathBuf::from("out")).resolve(input, Some("Walden")),
            PathBuf::from("out/Walden.txt")
        );
        assert_eq!(
            OutputTarget::Explicit(PathBuf::from("x.txt")).resolve(input, Some("Walden")),
            PathBuf::from("x.txt")
        );
    }
}
