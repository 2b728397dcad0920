//! Word-level shift strategy.
//!
//! Keeps the number of modified "sentences" low, where a sentence is a run of
//! words with no whitespace between them:
//!
//! ```text
//! good: "[AX] [AZ]" - "[AX] AY [AZ]"
//! bad:  "[AX A][Z]" - "[AX A]Y A[Z]"
//! ```
//!
//! e.g. `1.0.123 1.0.155` vs `1.0.123 1.0.134 1.0.155` should report
//! `1.0.134 ` as inserted, not `34 1.0.1`.

use super::{ShiftContext, ShiftStrategy};
use crate::model::{TextChunks, Token};

/// Moves splits onto whitespace between words.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordShift;

impl<'t> ShiftStrategy<TextChunks<'t, Token>> for WordShift {
    fn shift(&self, ctx: &ShiftContext<'_, TextChunks<'t, Token>>) -> isize {
        let words = ctx.touch_data();
        let touch_start = ctx.touch_start();
        let Some(before_touch) = touch_start.checked_sub(1) else {
            return 0;
        };

        if is_separated_with_whitespace(words, before_touch, touch_start) {
            return 0;
        }

        // [X]A Y[A ZA] -> [XA] YA [ZA]
        if let Some(shift) = find_sequence_edge_shift(words, touch_start, ctx.equal_forward, true) {
            return shift as isize;
        }

        // [AX A]Y A[Z] -> [AX] AY [AZ]
        if let Some(shift) =
            find_sequence_edge_shift(words, before_touch, ctx.equal_backward, false)
        {
            return -(shift as isize);
        }

        0
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

/// Distance to the nearest whitespace-separated word pair, scanning at most
/// `count` pairs away from `offset`.
fn find_sequence_edge_shift(
    words: &TextChunks<'_, Token>,
    offset: usize,
    count: usize,
    left_to_right: bool,
) -> Option<usize> {
    (0..count)
        .find(|&i| {
            let pair = if left_to_right {
                Some((offset + i, offset + i + 1))
            } else {
                offset
                    .checked_sub(i + 1)
                    .map(|first| (first, offset - i))
            };
            pair.is_some_and(|(first, second)| is_separated_with_whitespace(words, first, second))
        })
        .map(|i| i + 1)
}

fn is_separated_with_whitespace(words: &TextChunks<'_, Token>, first: usize, second: usize) -> bool {
    let (Some(word1), Some(word2)) = (words.get(first), words.get(second)) else {
        return false;
    };

    match (*word1, *word2) {
        (Token::Newline, _) | (_, Token::Newline) => true,
        (
            Token::Plain {
                offset_end: gap_start,
                ..
            },
            Token::Plain {
                offset_start: gap_end,
                ..
            },
        ) => words
            .text()
            .get(gap_start..gap_end)
            .is_some_and(|gap| gap.chars().any(char::is_whitespace)),
    }
}
