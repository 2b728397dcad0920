//! Boundary optimization over a fair alignment.
//!
//! A fair alignment from a sequence-comparison engine is correct but often
//! picks an arbitrary split where a repeated pattern makes several splits
//! equally valid:
//!
//! ```text
//! "[A]XA[B]" - "[A][B]"    two chunks where one would do: "AX[AB]" - "[AB]"
//! "[AX A][Z]" - "[AX A]Y A[Z]"    a change that cuts through words
//! ```
//!
//! [`ChunkOptimizer`] walks the unchanged ranges in order, merges neighbours
//! whenever one can absorb the other, and otherwise lets a [`ShiftStrategy`]
//! move the split to a better place. The amount of unchanged content never
//! changes, only where the boundaries sit.
//!
//! Two strategies are provided: [`WordShift`] keeps changes aligned to
//! whitespace, [`LineShift`] to blank or near-blank lines.
//!
//! # Example
//!
//! ```
//! use diff_boundary::model::Range;
//! use diff_boundary::optimizer::{ChunkOptimizer, ShiftContext, ShiftStrategy};
//! use diff_boundary::progress::NeverCancel;
//!
//! struct KeepSplit;
//!
//! impl ShiftStrategy<[char]> for KeepSplit {
//!     fn shift(&self, _ctx: &ShiftContext<'_, [char]>) -> isize {
//!         0
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "keep-split"
//!     }
//! }
//!
//! let old: Vec<char> = "abb".chars().collect();
//! let new: Vec<char> = "ab".chars().collect();
//! let fair = vec![Range::new(0, 1, 0, 1), Range::new(2, 3, 1, 2)];
//!
//! let optimized = ChunkOptimizer::new(&old[..], &new[..], KeepSplit)
//!     .build(fair, &NeverCancel)
//!     .expect("valid alignment");
//! assert_eq!(optimized.unchanged(), &[Range::new(0, 2, 0, 2)]);
//! ```

mod line;
mod word;

pub use line::LineShift;
pub use word::WordShift;

use crate::alignment::{check_range, FairAlignment};
use crate::compare::{expand_backward, expand_forward};
use crate::config::Granularity;
use crate::error::{OptimizeError, Result};
use crate::model::{ChunkSequence, Line, Range, Side, TextChunks, Token};
use crate::progress::ProgressIndicator;

// ============================================================================
// Strategy Trait
// ============================================================================

/// Everything a strategy needs to judge one ambiguous pair of ranges.
///
/// `range1` precedes `range2` and the two touch on `touch_side`: there the
/// changed region between them is empty, on the other side it is not.
#[derive(Debug)]
pub struct ShiftContext<'a, S: ?Sized> {
    pub data1: &'a S,
    pub data2: &'a S,
    pub touch_side: Side,
    /// How far `range1` could grow forward and still match
    pub equal_forward: usize,
    /// How far `range2` could grow backward and still match
    pub equal_backward: usize,
    pub range1: Range,
    pub range2: Range,
}

impl<'a, S: ?Sized> ShiftContext<'a, S> {
    /// The sequence on which the two ranges touch.
    #[must_use]
    pub fn touch_data(&self) -> &'a S {
        self.touch_side.select(self.data1, self.data2)
    }

    /// The sequence holding the changed content between the two ranges.
    #[must_use]
    pub fn change_data(&self) -> &'a S {
        self.touch_side.other().select(self.data1, self.data2)
    }

    /// Index of the first element of `range2` on the touching side.
    #[must_use]
    pub const fn touch_start(&self) -> usize {
        self.range2.start(self.touch_side)
    }
}

/// Policy deciding where the split between two touching ranges goes.
///
/// Returns the number of elements to move the split by: positive moves it
/// forward (`range1` grows), negative moves it backward (`range2` grows), zero
/// keeps it. Results outside `-equal_backward..=equal_forward` are ignored.
pub trait ShiftStrategy<S: ?Sized> {
    fn shift(&self, ctx: &ShiftContext<'_, S>) -> isize;

    /// Get the name of this strategy for logging/debugging.
    fn name(&self) -> &'static str;
}

// ============================================================================
// Optimizer
// ============================================================================

/// What to do with the last two accumulated ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PairAction {
    Keep,
    Merge(Range),
    Shift(Range, Range),
}

#[derive(Debug, Default)]
struct PassStats {
    input: usize,
    merges: usize,
    shifts: usize,
}

/// Post-processes a fair alignment between `data1` and `data2`.
pub struct ChunkOptimizer<'a, S: ?Sized, H> {
    data1: &'a S,
    data2: &'a S,
    strategy: H,
}

impl<'a, S, H> ChunkOptimizer<'a, S, H>
where
    S: ChunkSequence + ?Sized,
    H: ShiftStrategy<S>,
{
    pub fn new(data1: &'a S, data2: &'a S, strategy: H) -> Self {
        Self {
            data1,
            data2,
            strategy,
        }
    }

    /// Get the strategy this optimizer consults.
    pub fn strategy(&self) -> &H {
        &self.strategy
    }

    /// Run the pass over the unchanged ranges of a fair alignment.
    ///
    /// `ranges` must be ordered, non-overlapping, non-empty, equal-length on
    /// both sides and within bounds; the first offending range fails the pass
    /// with [`OptimizeError::InvalidAlignment`]. `indicator` is polled once
    /// per range and once more before the result is built; cancellation fails
    /// the pass with
    /// [`OptimizeError::Cancelled`] and discards all work done so far.
    pub fn build<I>(&self, ranges: I, indicator: &dyn ProgressIndicator) -> Result<FairAlignment>
    where
        I: IntoIterator<Item = Range>,
    {
        let length1 = self.data1.len();
        let length2 = self.data2.len();
        let mut accumulated: Vec<Range> = Vec::new();
        let mut previous: Option<Range> = None;
        let mut stats = PassStats::default();

        for (index, range) in ranges.into_iter().enumerate() {
            if indicator.is_canceled() {
                tracing::debug!(processed = index, "Boundary optimization cancelled");
                return Err(OptimizeError::Cancelled);
            }
            check_range(index, range, previous, length1, length2)?;
            previous = Some(range);
            stats.input += 1;

            accumulated.push(range);
            self.process_last_ranges(&mut accumulated, &mut stats);
        }

        // Also covers an empty stream, where the loop never polls.
        if indicator.is_canceled() {
            tracing::debug!(processed = stats.input, "Boundary optimization cancelled");
            return Err(OptimizeError::Cancelled);
        }

        tracing::debug!(
            strategy = self.strategy.name(),
            input = stats.input,
            output = accumulated.len(),
            merges = stats.merges,
            shifts = stats.shifts,
            "Boundary optimization complete"
        );

        Ok(FairAlignment::from_checked(accumulated, length1, length2))
    }

    /// Optimize the last two ranges until nothing more can be merged.
    ///
    /// Only merges loop: a merged range may now absorb its predecessor. A shift
    /// leaves the pair unmergeable, so it ends the loop.
    fn process_last_ranges(&self, ranges: &mut Vec<Range>, stats: &mut PassStats) {
        loop {
            let [.., range1, range2] = ranges[..] else {
                return;
            };
            match self.optimize_pair(range1, range2) {
                PairAction::Keep => return,
                PairAction::Merge(merged) => {
                    tracing::trace!(%range1, %range2, %merged, "Merged ranges");
                    ranges.truncate(ranges.len() - 2);
                    ranges.push(merged);
                    stats.merges += 1;
                }
                PairAction::Shift(shifted1, shifted2) => {
                    tracing::trace!(%range1, %range2, %shifted1, %shifted2, "Shifted boundary");
                    ranges.truncate(ranges.len() - 2);
                    ranges.push(shifted1);
                    ranges.push(shifted2);
                    stats.shifts += 1;
                    return;
                }
            }
        }
    }

    fn optimize_pair(&self, range1: Range, range2: Range) -> PairAction {
        // A gap on both sides is a replaced region; nothing here is ambiguous.
        if !range1.touches(&range2, Side::Left) && !range1.touches(&range2, Side::Right) {
            return PairAction::Keep;
        }

        let count1 = range1.len1();
        let count2 = range2.len1();

        let equal_forward = expand_forward(
            self.data1,
            self.data2,
            range1.end1,
            range1.end2,
            range1.end1 + count2,
            range1.end2 + count2,
        );
        let equal_backward = expand_backward(
            self.data1,
            self.data2,
            range2.start1.saturating_sub(count1),
            range2.start2.saturating_sub(count1),
            range2.start1,
            range2.start2,
        );

        if equal_forward == 0 && equal_backward == 0 {
            return PairAction::Keep;
        }

        // [A]B[B] -> [AB]B
        if equal_forward == count2 {
            return PairAction::Merge(Range::new(
                range1.start1,
                range1.end1 + count2,
                range1.start2,
                range1.end2 + count2,
            ));
        }

        // [A]A[B] -> A[AB]
        if equal_backward == count1 {
            return PairAction::Merge(Range::new(
                range2.start1 - count1,
                range2.end1,
                range2.start2 - count1,
                range2.end2,
            ));
        }

        let ctx = ShiftContext {
            data1: self.data1,
            data2: self.data2,
            touch_side: Side::from_left(range1.touches(&range2, Side::Left)),
            equal_forward,
            equal_backward,
            range1,
            range2,
        };
        let shift = self.strategy.shift(&ctx);
        if shift == 0 {
            return PairAction::Keep;
        }

        match apply_shift(range1, range2, shift, equal_forward, equal_backward) {
            Some((shifted1, shifted2)) => PairAction::Shift(shifted1, shifted2),
            None => {
                tracing::warn!(
                    strategy = self.strategy.name(),
                    shift,
                    equal_forward,
                    equal_backward,
                    "Ignoring shift outside the ambiguous window"
                );
                PairAction::Keep
            }
        }
    }
}

/// Move the split between two ranges, or `None` if `shift` leaves the window
/// in which both sides are known to match.
fn apply_shift(
    range1: Range,
    range2: Range,
    shift: isize,
    equal_forward: usize,
    equal_backward: usize,
) -> Option<(Range, Range)> {
    let distance = shift.unsigned_abs();
    let (shifted1, shifted2) = if shift > 0 {
        if distance > equal_forward {
            return None;
        }
        (
            Range::new(
                range1.start1,
                range1.end1 + distance,
                range1.start2,
                range1.end2 + distance,
            ),
            Range::new(
                range2.start1 + distance,
                range2.end1,
                range2.start2 + distance,
                range2.end2,
            ),
        )
    } else {
        if distance > equal_backward {
            return None;
        }
        (
            Range::new(
                range1.start1,
                range1.end1 - distance,
                range1.start2,
                range1.end2 - distance,
            ),
            Range::new(
                range2.start1 - distance,
                range2.end1,
                range2.start2 - distance,
                range2.end2,
            ),
        )
    };

    debug_assert!(shifted1.start1 < shifted1.end1 && shifted2.start1 < shifted2.end1);
    Some((shifted1, shifted2))
}

// ============================================================================
// Convenience entry points
// ============================================================================

/// Optimize a fair alignment with any sequence type and strategy.
pub fn optimize<S, H, I>(
    data1: &S,
    data2: &S,
    ranges: I,
    strategy: H,
    indicator: &dyn ProgressIndicator,
) -> Result<FairAlignment>
where
    S: ChunkSequence + ?Sized,
    H: ShiftStrategy<S>,
    I: IntoIterator<Item = Range>,
{
    ChunkOptimizer::new(data1, data2, strategy).build(ranges, indicator)
}

/// Optimize a word-level alignment, preferring splits at whitespace.
pub fn optimize_words<I>(
    words1: TextChunks<'_, Token>,
    words2: TextChunks<'_, Token>,
    ranges: I,
    indicator: &dyn ProgressIndicator,
) -> Result<FairAlignment>
where
    I: IntoIterator<Item = Range>,
{
    optimize(&words1, &words2, ranges, WordShift, indicator)
}

/// A pair of tokenized documents at either granularity.
#[derive(Debug, Clone, Copy)]
pub enum Documents<'a> {
    Words(TextChunks<'a, Token>, TextChunks<'a, Token>),
    Lines(TextChunks<'a, Line>, TextChunks<'a, Line>),
}

impl Documents<'_> {
    #[must_use]
    pub const fn granularity(&self) -> Granularity {
        match self {
            Self::Words(..) => Granularity::Words,
            Self::Lines(..) => Granularity::Lines,
        }
    }
}

/// Optimize a line-level alignment, preferring splits at unimportant lines.
pub fn optimize_lines<I>(
    lines1: TextChunks<'_, Line>,
    lines2: TextChunks<'_, Line>,
    ranges: I,
    strategy: LineShift,
    indicator: &dyn ProgressIndicator,
) -> Result<FairAlignment>
where
    I: IntoIterator<Item = Range>,
{
    optimize(&lines1, &lines2, ranges, strategy, indicator)
}
