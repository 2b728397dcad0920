#![no_main]
use diff_boundary::{
    optimize_lines, optimize_words, ChunkSequence, Line, LineShift, NeverCancel, Range,
    TextChunks, Token,
};
use libfuzzer_sys::fuzz_target;

/// Greedy diagonal alignment: ordered and non-overlapping, though not minimal.
fn greedy_alignment<S: ChunkSequence + ?Sized>(data1: &S, data2: &S) -> Vec<Range> {
    let mut ranges: Vec<Range> = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < data1.len() && j < data2.len() {
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
        } else if (i + j) % 2 == 0 {
            i += 1;
        } else {
            j += 1;
        }
    }
    ranges
}

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

/// Fuzz both strategies over two documents separated by `|`.
///
/// The pass must never panic, and must accept any alignment built from
/// matching elements.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Some((old, new)) = text.split_once('|') else {
        return;
    };

    let (old_tokens, new_tokens) = (char_tokens(old), char_tokens(new));
    let words1 = TextChunks::new(old, &old_tokens);
    let words2 = TextChunks::new(new, &new_tokens);
    let fair = greedy_alignment(&words1, &words2);
    let matched: usize = fair.iter().map(Range::len1).sum();
    let optimized = optimize_words(words1, words2, fair, &NeverCancel);
    assert!(optimized.is_ok_and(|alignment| alignment.matched_count() == matched));

    let (old_lines, new_lines) = (split_lines(old), split_lines(new));
    let lines1 = TextChunks::new(old, &old_lines);
    let lines2 = TextChunks::new(new, &new_lines);
    let fair = greedy_alignment(&lines1, &lines2);
    let matched: usize = fair.iter().map(Range::len1).sum();
    let optimized = optimize_lines(lines1, lines2, fair, LineShift::default(), &NeverCancel);
    assert!(optimized.is_ok_and(|alignment| alignment.matched_count() == matched));
});
