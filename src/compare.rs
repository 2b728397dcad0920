//! Equality-expansion primitives.
//!
//! Both functions count how many positions of two bounded windows agree,
//! walking from one edge of the windows towards the other. Bounds past the
//! end of a sequence are clamped to its length.

use crate::model::ChunkSequence;

/// Count equal element pairs walking forward from `(start1, start2)`.
///
/// Stops at the first mismatch or when either window `start..end` runs out.
pub fn expand_forward<S>(
    data1: &S,
    data2: &S,
    start1: usize,
    start2: usize,
    end1: usize,
    end2: usize,
) -> usize
where
    S: ChunkSequence + ?Sized,
{
    let end1 = end1.min(data1.len());
    let end2 = end2.min(data2.len());
    let window = end1.saturating_sub(start1).min(end2.saturating_sub(start2));

    (0..window)
        .take_while(|&i| data1.same_at(start1 + i, data2, start2 + i))
        .count()
}

/// Count equal element pairs walking backward from `(end1 - 1, end2 - 1)`.
///
/// Stops at the first mismatch or when either window `start..end` runs out.
pub fn expand_backward<S>(
    data1: &S,
    data2: &S,
    start1: usize,
    start2: usize,
    end1: usize,
    end2: usize,
) -> usize
where
    S: ChunkSequence + ?Sized,
{
    let end1 = end1.min(data1.len());
    let end2 = end2.min(data2.len());
    let window = end1.saturating_sub(start1).min(end2.saturating_sub(start2));

    (1..=window)
        .take_while(|&i| data1.same_at(end1 - i, data2, end2 - i))
        .count()
}
