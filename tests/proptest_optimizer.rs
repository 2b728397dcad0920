//! Property-based tests for the boundary optimizer.
//!
//! Random documents are aligned with a plain LCS so the optimizer sees the
//! same kind of fair alignment a real comparison engine hands it. Checks that
//! the pass keeps the alignment valid and never changes how much is matched.

use diff_boundary::compare::{expand_backward, expand_forward};
use diff_boundary::{
    optimize_lines, optimize_words, ChunkSequence, FairAlignment, Line, LineShift, NeverCancel,
    Range, Side, TextChunks, Token,
};
use proptest::prelude::*;

/// One token per non-whitespace char; `\n` is a newline token.
fn char_tokens(text: &str) -> Vec<Token> {
    text.char_indices()
        .filter_map(|(offset, ch)| match ch {
            '\n' => Some(Token::Newline),
            c if c.is_whitespace() => None,
            c => Some(Token::plain(offset, offset + c.len_utf8())),
        })
        .collect()
}

fn split_lines(text: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut start = 0;
    for part in text.split('\n') {
        let non_space = part.chars().filter(|c| !c.is_whitespace()).count();
        lines.push(Line::new(start, start + part.len(), non_space));
        start += part.len() + 1;
    }
    lines
}

/// Longest-common-subsequence alignment with consecutive matches coalesced.
fn lcs_alignment<S: ChunkSequence + ?Sized>(data1: &S, data2: &S) -> Vec<Range> {
    let (n, m) = (data1.len(), data2.len());
    let mut table = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            table[i][j] = if data1.same_at(i, data2, j) {
                table[i + 1][j + 1] + 1
            } else {
                table[i + 1][j].max(table[i][j + 1])
            };
        }
    }

    let mut ranges: Vec<Range> = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if data1.same_at(i, data2, j) {
            match ranges.last_mut() {
                Some(last) if last.end1 == i && last.end2 == j => {
                    last.end1 += 1;
                    last.end2 += 1;
                }
                _ => ranges.push(Range::new(i, i + 1, j, j + 1)),
            }
            i += 1;
            j += 1;
        } else if table[i + 1][j] >= table[i][j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }
    ranges
}

/// True when no adjacent pair leaves any room to merge or shift.
fn is_unambiguous<S: ChunkSequence + ?Sized>(data1: &S, data2: &S, ranges: &[Range]) -> bool {
    ranges.windows(2).all(|pair| {
        let (range1, range2) = (pair[0], pair[1]);
        if !range1.touches(&range2, Side::Left) && !range1.touches(&range2, Side::Right) {
            return true;
        }
        let (count1, count2) = (range1.len1(), range2.len1());
        let forward = expand_forward(
            data1,
            data2,
            range1.end1,
            range1.end2,
            range1.end1 + count2,
            range1.end2 + count2,
        );
        let backward = expand_backward(
            data1,
            data2,
            range2.start1.saturating_sub(count1),
            range2.start2.saturating_sub(count1),
            range2.start1,
            range2.start2,
        );
        forward == 0 && backward == 0
    })
}

fn all_ranges_match<S: ChunkSequence + ?Sized>(data1: &S, data2: &S, ranges: &[Range]) -> bool {
    ranges.iter().all(|range| {
        (0..range.len1()).all(|k| data1.same_at(range.start1 + k, data2, range.start2 + k))
    })
}

fn matched(ranges: &[Range]) -> usize {
    ranges.iter().map(Range::len1).sum()
}

fn word_text() -> impl Strategy<Value = String> {
    "[ab. \n]{0,24}"
}

fn line_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!["", "}", "  ", "alpha", "beta"]),
        0..16,
    )
    .prop_map(|lines| lines.join("\n"))
}

proptest! {
    // Alignments are quadratic to build, so fewer cases than the type tests.
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn word_pass_conserves_matches(old in word_text(), new in word_text()) {
        let (old_tokens, new_tokens) = (char_tokens(&old), char_tokens(&new));
        let words1 = TextChunks::new(&old, &old_tokens);
        let words2 = TextChunks::new(&new, &new_tokens);
        let fair = lcs_alignment(&words1, &words2);

        let optimized = optimize_words(words1, words2, fair.clone(), &NeverCancel)
            .expect("LCS alignment is fair");

        prop_assert_eq!(optimized.matched_count(), matched(&fair));
        prop_assert!(optimized.unchanged().len() <= fair.len());
        prop_assert!(all_ranges_match(&words1, &words2, optimized.unchanged()));
        prop_assert!(
            FairAlignment::new(optimized.into_ranges(), old_tokens.len(), new_tokens.len()).is_ok()
        );
    }

    #[test]
    fn line_pass_conserves_matches(old in line_text(), new in line_text(), threshold in 0usize..4) {
        let (old_lines, new_lines) = (split_lines(&old), split_lines(&new));
        let lines1 = TextChunks::new(&old, &old_lines);
        let lines2 = TextChunks::new(&new, &new_lines);
        let fair = lcs_alignment(&lines1, &lines2);

        let optimized = optimize_lines(lines1, lines2, fair.clone(), LineShift::new(threshold), &NeverCancel)
            .expect("LCS alignment is fair");

        prop_assert_eq!(optimized.matched_count(), matched(&fair));
        prop_assert!(all_ranges_match(&lines1, &lines2, optimized.unchanged()));
        prop_assert!(
            FairAlignment::new(optimized.into_ranges(), old_lines.len(), new_lines.len()).is_ok()
        );
    }

    #[test]
    fn unambiguous_alignment_is_untouched(old in word_text(), new in word_text()) {
        let (old_tokens, new_tokens) = (char_tokens(&old), char_tokens(&new));
        let words1 = TextChunks::new(&old, &old_tokens);
        let words2 = TextChunks::new(&new, &new_tokens);
        let fair = lcs_alignment(&words1, &words2);
        if !is_unambiguous(&words1, &words2, &fair) {
            return Ok(());
        }

        let optimized = optimize_words(words1, words2, fair.clone(), &NeverCancel)
            .expect("LCS alignment is fair");

        prop_assert_eq!(optimized.into_ranges(), fair);
    }

    #[test]
    fn changes_cover_the_rest(old in line_text(), new in line_text()) {
        let (old_lines, new_lines) = (split_lines(&old), split_lines(&new));
        let lines1 = TextChunks::new(&old, &old_lines);
        let lines2 = TextChunks::new(&new, &new_lines);
        let fair = lcs_alignment(&lines1, &lines2);

        let optimized = optimize_lines(lines1, lines2, fair, LineShift::default(), &NeverCancel)
            .expect("LCS alignment is fair");

        let changed1: usize = optimized.iter_changes().map(|r| r.len1()).sum();
        let changed2: usize = optimized.iter_changes().map(|r| r.len2()).sum();
        prop_assert_eq!(changed1 + optimized.matched_count(), old_lines.len());
        prop_assert_eq!(changed2 + optimized.matched_count(), new_lines.len());
    }
}
