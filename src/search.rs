//! Literal find and replace.
//!
//! Case-sensitive substring search, the way the panel's find bar works: no
//! regex, no word boundaries. Ranges are char offsets into the document.

use std::ops::Range;

use ropey::Rope;

use crate::document::Document;

/// All non-overlapping occurrences of `needle`, in document order.
pub fn find_all(text: &Rope, needle: &str) -> Vec<Range<usize>> {
    if needle.is_empty() {
        return Vec::new();
    }
    let haystack = text.to_string();
    let needle_chars = needle.chars().count();

    let mut matches = Vec::new();
    let mut char_pos = 0;
    let mut byte_pos = 0;
    for (byte_idx, found) in haystack.match_indices(needle) {
        // match_indices yields non-overlapping hits in ascending byte order;
        // advance the running char counter to each one.
        char_pos += haystack[byte_pos..byte_idx].chars().count();
        byte_pos = byte_idx + found.len();
        matches.push(char_pos..char_pos + needle_chars);
        char_pos += needle_chars;
    }
    matches
}

/// The first occurrence at or after char offset `from`, wrapping around to
/// the start of the document when nothing follows.
pub fn find_next(text: &Rope, needle: &str, from: usize) -> Option<Range<usize>> {
    let matches = find_all(text, needle);
    matches
        .iter()
        .find(|range| range.start >= from)
        .or_else(|| matches.first())
        .cloned()
}

/// Replace every occurrence of `needle` in `doc` with `replacement`.
/// Returns the number of replacements; zero leaves the document untouched
/// (and clean).
pub fn replace_all(doc: &mut Document, needle: &str, replacement: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    let contents = doc.contents();
    let count = contents.matches(needle).count();
    if count > 0 {
        doc.set_text(&contents.replace(needle, replacement));
    }
    count
}
