//! Optimized alignments handed to renderers.
//!
//! A [`FairAlignment`] stores the unchanged ranges of a comparison together
//! with the lengths of both sequences, which is enough to recover every
//! changed region as the gap between two unchanged ones.

use crate::error::{InvalidAlignmentKind, OptimizeError, Result};
use crate::model::Range;
use serde::{Deserialize, Serialize};

/// Ordered, non-overlapping unchanged ranges over two sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairAlignment {
    unchanged: Vec<Range>,
    length1: usize,
    length2: usize,
}

/// One region of an alignment, unchanged or changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffFragment {
    pub range: Range,
    pub is_unchanged: bool,
}

impl FairAlignment {
    /// Create an alignment, validating that `unchanged` is a proper fair
    /// alignment over sequences of `length1` and `length2` elements.
    pub fn new(unchanged: Vec<Range>, length1: usize, length2: usize) -> Result<Self> {
        let mut previous: Option<Range> = None;
        for (index, range) in unchanged.iter().enumerate() {
            check_range(index, *range, previous, length1, length2)?;
            previous = Some(*range);
        }
        Ok(Self::from_checked(unchanged, length1, length2))
    }

    /// Wrap ranges the optimizer has already validated.
    pub(crate) fn from_checked(unchanged: Vec<Range>, length1: usize, length2: usize) -> Self {
        Self {
            unchanged,
            length1,
            length2,
        }
    }

    /// Length of the first sequence.
    #[must_use]
    pub const fn length1(&self) -> usize {
        self.length1
    }

    /// Length of the second sequence.
    #[must_use]
    pub const fn length2(&self) -> usize {
        self.length2
    }

    #[must_use]
    pub fn unchanged(&self) -> &[Range] {
        &self.unchanged
    }

    pub fn iter_unchanged(&self) -> impl Iterator<Item = Range> + '_ {
        self.unchanged.iter().copied()
    }

    /// Changed regions: the non-empty gaps around and between unchanged ranges.
    pub fn iter_changes(&self) -> impl Iterator<Item = Range> + '_ {
        self.iter_all()
            .filter(|fragment| !fragment.is_unchanged)
            .map(|fragment| fragment.range)
    }

    /// Every region in document order, alternating changed and unchanged.
    pub fn iter_all(&self) -> impl Iterator<Item = DiffFragment> + '_ {
        let tail = Range::new(self.length1, self.length1, self.length2, self.length2);
        let mut last1 = 0;
        let mut last2 = 0;

        self.unchanged
            .iter()
            .copied()
            .chain(std::iter::once(tail))
            .flat_map(move |range| {
                let gap = Range::new(last1, range.start1, last2, range.start2);
                last1 = range.end1;
                last2 = range.end2;

                let change = (!gap.is_empty()).then_some(DiffFragment {
                    range: gap,
                    is_unchanged: false,
                });
                let unchanged = (!range.is_empty()).then_some(DiffFragment {
                    range,
                    is_unchanged: true,
                });
                change.into_iter().chain(unchanged)
            })
    }

    /// Number of elements matched on each side.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.unchanged.iter().map(Range::len1).sum()
    }

    /// Returns true when both sequences are entirely unchanged.
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.length1 == self.length2 && self.matched_count() == self.length1
    }

    #[must_use]
    pub fn into_ranges(self) -> Vec<Range> {
        self.unchanged
    }
}

/// Check one unchanged range against its predecessor and the sequence bounds.
pub(crate) fn check_range(
    index: usize,
    range: Range,
    previous: Option<Range>,
    length1: usize,
    length2: usize,
) -> Result<()> {
    let fail = |kind| Err(OptimizeError::invalid_alignment(index, range, kind));

    if range.start1 > range.end1 || range.start2 > range.end2 {
        return fail(InvalidAlignmentKind::Inverted);
    }
    if range.is_empty() {
        return fail(InvalidAlignmentKind::Empty);
    }
    if range.len1() != range.len2() {
        return fail(InvalidAlignmentKind::UnequalLength {
            len1: range.len1(),
            len2: range.len2(),
        });
    }
    if range.end1 > length1 {
        return fail(InvalidAlignmentKind::OutOfBounds { length: length1 });
    }
    if range.end2 > length2 {
        return fail(InvalidAlignmentKind::OutOfBounds { length: length2 });
    }
    if let Some(previous) = previous {
        if !previous.precedes(&range) {
            return fail(InvalidAlignmentKind::Overlapping { previous });
        }
    }
    Ok(())
}
