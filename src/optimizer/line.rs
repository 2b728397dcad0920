//! Line-level shift strategy.
//!
//! Prefers insertions and deletions bounded by empty (or "unimportant")
//! lines:
//!
//! ```text
//! good: "ABooYZ [ABuuYZ ]ABzzYZ" - "ABooYZ []ABzzYZ"
//! bad:  "ABooYZ AB[uuYZ AB]zzYZ" - "ABooYZ AB[]zzYZ"
//! ```

use super::{ShiftContext, ShiftStrategy};
use crate::config::DEFAULT_UNIMPORTANT_LINE_THRESHOLD;
use crate::model::{Line, TextChunks};

/// Moves splits onto blank or near-blank lines.
///
/// Tries, in order: an empty unchanged line next to the split, an empty line
/// at the edge of the change, and the same two searches again with lines of
/// up to `threshold` non-space chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineShift {
    threshold: usize,
}

impl LineShift {
    #[must_use]
    pub const fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    /// Non-space char count at or below which a line is unimportant.
    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }
}

impl Default for LineShift {
    fn default() -> Self {
        Self::new(DEFAULT_UNIMPORTANT_LINE_THRESHOLD)
    }
}

type LineContext<'a, 't> = ShiftContext<'a, TextChunks<'t, Line>>;

impl<'t> ShiftStrategy<TextChunks<'t, Line>> for LineShift {
    fn shift(&self, ctx: &LineContext<'_, 't>) -> isize {
        unchanged_boundary_shift(ctx, 0)
            .or_else(|| changed_boundary_shift(ctx, 0))
            .or_else(|| unchanged_boundary_shift(ctx, self.threshold))
            .or_else(|| changed_boundary_shift(ctx, self.threshold))
            .unwrap_or(0)
    }

    fn name(&self) -> &'static str {
        "line"
    }
}

/// Search for an unimportant line among the unchanged lines around the split,
/// so the change goes right before or after it.
fn unchanged_boundary_shift(ctx: &LineContext<'_, '_>, threshold: usize) -> Option<isize> {
    let lines = ctx.touch_data();
    let touch_start = ctx.touch_start();

    let shift_forward =
        find_next_unimportant_line(lines, touch_start, ctx.equal_forward + 1, threshold);
    let shift_backward = touch_start.checked_sub(1).and_then(|offset| {
        find_prev_unimportant_line(lines, offset, ctx.equal_backward + 1, threshold)
    });
    pick_shift(shift_forward, shift_backward)
}

/// Search for an unimportant line at the edges of the changed lines, so the
/// change starts or ends with it.
fn changed_boundary_shift(ctx: &LineContext<'_, '_>, threshold: usize) -> Option<isize> {
    let change_side = ctx.touch_side.other();
    let lines = ctx.change_data();
    let change_start = ctx.range1.end(change_side);
    let change_end = ctx.range2.start(change_side);

    let shift_forward =
        find_next_unimportant_line(lines, change_start, ctx.equal_forward + 1, threshold);
    let shift_backward = change_end.checked_sub(1).and_then(|offset| {
        find_prev_unimportant_line(lines, offset, ctx.equal_backward + 1, threshold)
    });
    pick_shift(shift_forward, shift_backward)
}

fn find_next_unimportant_line(
    lines: &TextChunks<'_, Line>,
    offset: usize,
    count: usize,
    threshold: usize,
) -> Option<usize> {
    (0..count).find(|&i| {
        lines
            .get(offset + i)
            .is_some_and(|line| line.is_unimportant(threshold))
    })
}

fn find_prev_unimportant_line(
    lines: &TextChunks<'_, Line>,
    offset: usize,
    count: usize,
    threshold: usize,
) -> Option<usize> {
    (0..count).find(|&i| {
        offset
            .checked_sub(i)
            .and_then(|index| lines.get(index))
            .is_some_and(|line| line.is_unimportant(threshold))
    })
}

/// A split that is already in place wins; otherwise forward beats backward.
fn pick_shift(shift_forward: Option<usize>, shift_backward: Option<usize>) -> Option<isize> {
    match (shift_forward, shift_backward) {
        (None, None) => None,
        (Some(0), _) | (_, Some(0)) => Some(0),
        (Some(forward), _) => Some(forward as isize),
        (None, Some(backward)) => Some(-(backward as isize)),
    }
}
