//! Greedy fixed-width line wrapping.
//!
//! Text is split on any run of whitespace and words are packed left to right
//! into lines no longer than the configured width. A word is never split: a
//! single word wider than the line is emitted whole on its own line.

use unicode_width::UnicodeWidthStr;

use crate::error::{Error, Result};

/// How the length of a line is counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Measure {
    /// Unicode scalar values.
    #[default]
    Chars,
    /// Terminal display columns (wide glyphs count as two).
    Columns,
}

impl Measure {
    /// Length of `text` under this measure.
    pub fn length(self, text: &str) -> usize {
        match self {
            Self::Chars => text.chars().count(),
            Self::Columns => text.width(),
        }
    }
}

/// Packs words into lines of at most `width` units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWrapper {
    width: usize,
    measure: Measure,
}

impl LineWrapper {
    /// Create a wrapper. The width must be positive.
    pub fn new(width: usize, measure: Measure) -> Result<Self> {
        if width == 0 {
            return Err(Error::config(
                "line width must be greater than zero",
                "Pass a positive --chars-per-line (default 21)",
            ));
        }
        Ok(Self { width, measure })
    }

    /// Maximum line length.
    pub const fn width(self) -> usize {
        self.width
    }

    /// Wrap `text` into lines.
    ///
    /// Word order is preserved and each input word appears exactly once.
    /// Every line fits the width unless it holds a single over-long word.
    pub fn wrap(self, text: &str) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_len = 0;

        for word in text.split_whitespace() {
            let word_len = self.measure.length(word);
            let candidate_len = if current.is_empty() {
                word_len
            } else {
                current_len + 1 + word_len
            };

            if candidate_len <= self.width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_len = candidate_len;
            } else {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                current.push_str(word);
                current_len = word_len;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }

        lines
    }
}

/// Wrap `text` at `chars_per_line` characters.
///
/// A width of zero is rejected with [`Error::Config`].
pub fn wrap(text: &str, chars_per_line: usize) -> Result<Vec<String>> {
    Ok(LineWrapper::new(chars_per_line, Measure::Chars)?.wrap(text))
}
