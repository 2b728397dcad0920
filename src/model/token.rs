//! Word and line chunks produced by a tokenizer.
//!
//! Chunks only carry offsets into the document text they were cut from. The
//! text itself is paired with them later through [`TextChunks`](super::TextChunks).

use serde::{Deserialize, Serialize};

/// A word-level chunk of a document.
///
/// A tokenizer emits one `Plain` token per word or punctuation run and a
/// `Newline` token for every explicit line break. Whitespace between plain
/// tokens is not represented, it is looked up in the backing text instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Token {
    /// A span of non-whitespace text, `offset_start..offset_end`.
    Plain {
        offset_start: usize,
        offset_end: usize,
    },
    /// An explicit line break. Always counts as a word separator.
    Newline,
}

impl Token {
    /// Create a plain token covering `offset_start..offset_end`.
    #[must_use]
    pub const fn plain(offset_start: usize, offset_end: usize) -> Self {
        Self::Plain {
            offset_start,
            offset_end,
        }
    }

    /// Returns true for an explicit line break.
    #[must_use]
    pub const fn is_newline(&self) -> bool {
        matches!(self, Self::Newline)
    }

    /// The token's text, or `None` for a newline or an out-of-range span.
    #[must_use]
    pub fn text<'t>(&self, text: &'t str) -> Option<&'t str> {
        match *self {
            Self::Plain {
                offset_start,
                offset_end,
            } => text.get(offset_start..offset_end),
            Self::Newline => None,
        }
    }
}

/// A single line of a document.
///
/// `non_space_chars` is counted by the tokenizer when the line is cut and is
/// what the line strategy uses to spot blank and near-blank lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    pub offset_start: usize,
    pub offset_end: usize,
    pub non_space_chars: usize,
}

impl Line {
    #[must_use]
    pub const fn new(offset_start: usize, offset_end: usize, non_space_chars: usize) -> Self {
        Self {
            offset_start,
            offset_end,
            non_space_chars,
        }
    }

    /// The line's text without its terminator.
    #[must_use]
    pub fn text<'t>(&self, text: &'t str) -> Option<&'t str> {
        text.get(self.offset_start..self.offset_end)
    }

    /// Returns true when the line has at most `threshold` non-space chars.
    #[must_use]
    pub const fn is_unimportant(&self, threshold: usize) -> bool {
        self.non_space_chars <= threshold
    }
}
