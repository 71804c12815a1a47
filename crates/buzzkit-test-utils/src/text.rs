//! Synthetic text with a controlled word count and buzzword density.

/// Filler token containing no built-in buzzword as a substring.
pub const FILLER: &str = "lorem";

/// `words` space-separated tokens, the first `hits` of which are `buzzword`
/// and the rest [`FILLER`].
///
/// `buzzword` should be a single word so the space count stays `words - 1`.
///
/// # Panics
///
/// If `hits > words` or `words == 0`.
pub fn synthetic_text(words: usize, hits: usize, buzzword: &str) -> String {
    assert!(words > 0, "need at least one word");
    assert!(hits <= words, "more hits ({hits}) than words ({words})");
    let mut tokens = vec![buzzword; hits];
    tokens.extend(std::iter::repeat_n(FILLER, words - hits));
    tokens.join(" ")
}

/// `words` filler tokens.
pub fn filler_text(words: usize) -> String {
    synthetic_text(words, 0, FILLER)
}

/// Brute-force non-overlapping occurrence count, independent of the
/// library's own counting.
pub fn naive_count(text: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    let (text, needle) = (text.as_bytes(), needle.as_bytes());
    let mut count = 0;
    let mut i = 0;
    while i + needle.len() <= text.len() {
        if &text[i..i + needle.len()] == needle {
            count += 1;
            i += needle.len();
        } else {
            i += 1;
        }
    }
    count
}
