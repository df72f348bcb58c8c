//! Project Gutenberg boilerplate and metadata handling.
//!
//! Gutenberg plain-text books wrap the actual content between a start and an
//! end marker line, and carry the book title in a `Title:` metadata line or in
//! the opening banner. This module strips the boilerplate and extracts a
//! filesystem-safe title.

use crate::constants::gutenberg::{END_MARKER, EBOOK_OF_PREFIX, START_MARKER, TITLE_PREFIX};

/// Characters that end a line: `\n`, `\r`, and `\r\n` as one break.
const LINE_BREAKS: [char; 2] = ['\n', '\r'];

/// Drop everything up to and including the line holding the start marker.
///
/// Text without the marker is returned unchanged. A marker with no line
/// break after it leaves nothing to show, so the result is empty.
pub fn strip_header(text: &str) -> &str {
    let Some(start) = text.find(START_MARKER) else {
        return text;
    };

    let rest = &text[start..];
    let Some(offset) = rest.find(LINE_BREAKS) else {
        return "";
    };

    let after = &rest[offset + 1..];
    if rest[offset..].starts_with('\r') {
        after.strip_prefix('\n').unwrap_or(after)
    } else {
        after
    }
}

/// Drop the line holding the end marker and everything after it.
///
/// Text without the marker is returned unchanged.
pub fn strip_footer(text: &str) -> &str {
    let Some(end) = text.find(END_MARKER) else {
        return text;
    };

    let line_start = text[..end].rfind(LINE_BREAKS).map_or(0, |nl| nl + 1);
    &text[..line_start]
}

/// Find the book title in raw (unstripped) text.
///
/// The first line starting with `Title:` or with the
/// `The Project Gutenberg eBook of` banner wins; its remainder is trimmed.
/// Lines may end in `\n`, `\r\n` or a lone `\r`.
pub fn extract_title(text: &str) -> Option<String> {
    text.split(LINE_BREAKS).find_map(|line| {
        line.strip_prefix(TITLE_PREFIX)
            .or_else(|| line.strip_prefix(EBOOK_OF_PREFIX))
            .map(|rest| rest.trim().to_string())
    })
}

/// Turn a title into a filename stem.
///
/// Characters that are neither alphanumeric nor whitespace are removed and
/// whitespace runs collapse to a single `_`. May return an empty string.
pub fn sanitize_title(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join("_")
}
