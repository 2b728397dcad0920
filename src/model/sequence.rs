//! Index-addressable views over tokenized documents.

use super::{Line, Token};

/// A sequence the optimizer can compare element by element against another
/// sequence of the same type.
pub trait ChunkSequence {
    /// Number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns true when the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true when `self[index]` equals `other[other_index]`.
    ///
    /// Indices past the end of either sequence compare unequal.
    fn same_at(&self, index: usize, other: &Self, other_index: usize) -> bool;
}

impl<T: PartialEq> ChunkSequence for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn same_at(&self, index: usize, other: &Self, other_index: usize) -> bool {
        match (self.get(index), other.get(other_index)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Chunks that can be compared through the text they were cut from.
pub trait TextChunk {
    /// Returns true when `self` in `text` has the same content as `other` in
    /// `other_text`.
    fn same_content(&self, text: &str, other: &Self, other_text: &str) -> bool;
}

impl TextChunk for Token {
    fn same_content(&self, text: &str, other: &Self, other_text: &str) -> bool {
        match (self, other) {
            (Self::Newline, Self::Newline) => true,
            (Self::Plain { .. }, Self::Plain { .. }) => {
                match (self.text(text), other.text(other_text)) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                }
            }
            _ => false,
        }
    }
}

impl TextChunk for Line {
    fn same_content(&self, text: &str, other: &Self, other_text: &str) -> bool {
        match (self.text(text), other.text(other_text)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Chunks paired with the document text their offsets point into.
#[derive(Debug, Clone, Copy)]
pub struct TextChunks<'a, T> {
    text: &'a str,
    chunks: &'a [T],
}

impl<'a, T> TextChunks<'a, T> {
    #[must_use]
    pub const fn new(text: &'a str, chunks: &'a [T]) -> Self {
        Self { text, chunks }
    }

    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    #[must_use]
    pub const fn chunks(&self) -> &'a [T] {
        self.chunks
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.chunks.get(index)
    }
}

impl<T: TextChunk> ChunkSequence for TextChunks<'_, T> {
    fn len(&self) -> usize {
        self.chunks.len()
    }

    fn same_at(&self, index: usize, other: &Self, other_index: usize) -> bool {
        match (self.chunks.get(index), other.chunks.get(other_index)) {
            (Some(a), Some(b)) => a.same_content(self.text, b, other.text),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_sequence() {
        let left = ['a', 'b', 'c'];
        let right = ['b', 'c'];
        assert!(left[..].same_at(1, &right[..], 0));
        assert!(!left[..].same_at(0, &right[..], 0));
        assert!(!left[..].same_at(2, &right[..], 2));
        assert_eq!(ChunkSequence::len(&left[..]), 3);
    }

    #[test]
    fn test_tokens_compare_by_content() {
        let text1 = "abc def";
        let text2 = "def";
        let tokens1 = [Token::plain(0, 3), Token::plain(4, 7), Token::Newline];
        let tokens2 = [Token::plain(0, 3), Token::Newline];
        let seq1 = TextChunks::new(text1, &tokens1);
        let seq2 = TextChunks::new(text2, &tokens2);

        assert!(seq1.same_at(1, &seq2, 0));
        assert!(!seq1.same_at(0, &seq2, 0));
        assert!(seq1.same_at(2, &seq2, 1));
        assert!(!seq1.same_at(1, &seq2, 1));
    }

    #[test]
    fn test_lines_compare_by_content() {
        let text1 = "one\n\ntwo";
        let text2 = "two\none";
        let lines1 = [Line::new(0, 3, 3), Line::new(4, 4, 0), Line::new(5, 8, 3)];
        let lines2 = [Line::new(0, 3, 3), Line::new(4, 7, 3)];
        let seq1 = TextChunks::new(text1, &lines1);
        let seq2 = TextChunks::new(text2, &lines2);

        assert!(seq1.same_at(0, &seq2, 1));
        assert!(seq1.same_at(2, &seq2, 0));
        assert!(!seq1.same_at(1, &seq2, 0));
    }
}
