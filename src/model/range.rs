//! Matched spans over two parallel sequences.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two compared sequences a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The first (old) sequence
    Left,
    /// The second (new) sequence
    Right,
}

impl Side {
    #[must_use]
    pub const fn from_left(is_left: bool) -> Self {
        if is_left {
            Self::Left
        } else {
            Self::Right
        }
    }

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Pick the value that belongs to this side.
    pub fn select<T>(self, left: T, right: T) -> T {
        match self {
            Self::Left => left,
            Self::Right => right,
        }
    }
}

/// Elements `start1..end1` of the first sequence paired with `start2..end2`
/// of the second.
///
/// For an unchanged range both spans have the same length. Change ranges
/// (the gaps between unchanged ones) may have different lengths, and one of
/// the two spans may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start1: usize,
    pub end1: usize,
    pub start2: usize,
    pub end2: usize,
}

impl Range {
    #[must_use]
    pub const fn new(start1: usize, end1: usize, start2: usize, end2: usize) -> Self {
        Self {
            start1,
            end1,
            start2,
            end2,
        }
    }

    /// Length of the span on the first sequence.
    #[must_use]
    pub const fn len1(&self) -> usize {
        self.end1.saturating_sub(self.start1)
    }

    /// Length of the span on the second sequence.
    #[must_use]
    pub const fn len2(&self) -> usize {
        self.end2.saturating_sub(self.start2)
    }

    /// Returns true when both spans are empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start1 == self.end1 && self.start2 == self.end2
    }

    #[must_use]
    pub const fn start(&self, side: Side) -> usize {
        match side {
            Side::Left => self.start1,
            Side::Right => self.start2,
        }
    }

    #[must_use]
    pub const fn end(&self, side: Side) -> usize {
        match side {
            Side::Left => self.end1,
            Side::Right => self.end2,
        }
    }

    /// Returns true when `self` ends exactly where `next` starts on `side`.
    #[must_use]
    pub const fn touches(&self, next: &Self, side: Side) -> bool {
        self.end(side) == next.start(side)
    }

    /// Returns true when `self` lies entirely before `next` on both sides.
    #[must_use]
    pub const fn precedes(&self, next: &Self) -> bool {
        self.end1 <= next.start1 && self.end2 <= next.start2
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}) - [{}, {})",
            self.start1, self.end1, self.start2, self.end2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_select() {
        assert_eq!(Side::Left.select("a", "b"), "a");
        assert_eq!(Side::Right.select("a", "b"), "b");
        assert_eq!(Side::from_left(false), Side::Right);
        assert_eq!(Side::Left.other(), Side::Right);
    }

    #[test]
    fn test_range_lengths() {
        let range = Range::new(2, 5, 10, 10);
        assert_eq!(range.len1(), 3);
        assert_eq!(range.len2(), 0);
        assert!(!range.is_empty());
        assert!(Range::new(4, 4, 7, 7).is_empty());
    }

    #[test]
    fn test_range_side_accessors() {
        let range = Range::new(1, 3, 4, 6);
        assert_eq!(range.start(Side::Left), 1);
        assert_eq!(range.end(Side::Right), 6);
    }

    #[test]
    fn test_touches_and_precedes() {
        let first = Range::new(0, 3, 0, 3);
        let second = Range::new(3, 5, 4, 6);
        assert!(first.touches(&second, Side::Left));
        assert!(!first.touches(&second, Side::Right));
        assert!(first.precedes(&second));
        assert!(!second.precedes(&first));
    }

    #[test]
    fn test_display() {
        assert_eq!(Range::new(0, 2, 1, 3).to_string(), "[0, 2) - [1, 3)");
    }
}
