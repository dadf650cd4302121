//! Depth-balanced bracket matching.
//!
//! Given a document and a cursor position that sits on a bracket character,
//! [`find_matching_bracket`] scans in the requested direction and returns the
//! position of the depth-balanced partner. The scan is a single linear pass
//! with a signed depth counter, so nested same-type pairs are skipped
//! correctly (`(a(b)c)` matched from the outer `(` lands on the outer `)`).
//!
//! The matcher is lexically naive by design: bracket characters inside string
//! and comment literals participate in matching like any other occurrence.

use ropey::Rope;

/// The fixed table of delimiter pairs the matcher recognizes.
pub const BRACKET_PAIRS: &[(char, char)] = &[('(', ')'), ('[', ']'), ('{', '}')];

/// Direction of the matching scan.
///
/// Callers pick the direction; the usual convention is forward from an
/// opening bracket and backward from a closing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    Forward,
    Backward,
}

/// Returns the partner of `ch` if it is a known bracket character.
pub fn bracket_partner(ch: char) -> Option<char> {
    BRACKET_PAIRS.iter().find_map(|&(open, close)| {
        if ch == open {
            Some(close)
        } else if ch == close {
            Some(open)
        } else {
            None
        }
    })
}

/// True when `ch` opens one of the recognized pairs.
pub fn is_opening_bracket(ch: char) -> bool {
    BRACKET_PAIRS.iter().any(|&(open, _)| ch == open)
}

/// True when `ch` closes one of the recognized pairs.
pub fn is_closing_bracket(ch: char) -> bool {
    BRACKET_PAIRS.iter().any(|&(_, close)| ch == close)
}

/// Find the depth-balanced partner of the bracket at `position`.
///
/// Every occurrence of the character at `position` increments the depth and
/// every occurrence of its partner decrements it; the scan stops at the first
/// position where the depth returns to zero.
///
/// # Arguments
/// * `text` - The document text.
/// * `position` - Char index of the bracket to match.
/// * `direction` - Which way to scan.
///
/// # Returns
/// The char index of the partner, or `None` when `position` is out of range,
/// the character there is not a bracket, or the brackets are unbalanced in
/// the scanned direction. `None` is a normal result, not an error: most
/// cursor positions do not sit on a bracket.
pub fn find_matching_bracket(text: &Rope, position: usize, direction: ScanDirection) -> Option<usize> {
    if position >= text.len_chars() {
        return None;
    }
    let origin = text.char(position);
    let partner = bracket_partner(origin)?;

    let mut depth: usize = 0;
    match direction {
        ScanDirection::Forward => {
            let mut index = position;
            for ch in text.chars_at(position) {
                if ch == origin {
                    depth += 1;
                } else if ch == partner {
                    depth -= 1;
                    if depth == 0 {
                        return Some(index);
                    }
                }
                index += 1;
            }
            None
        }
        ScanDirection::Backward => {
            // chars_at(position + 1) followed by prev() yields the origin
            // char first, then walks toward the start of the buffer.
            let mut chars = text.chars_at(position + 1);
            let mut index = position + 1;
            while let Some(ch) = chars.prev() {
                index -= 1;
                if ch == origin {
                    depth += 1;
                } else if ch == partner {
                    depth -= 1;
                    if depth == 0 {
                        return Some(index);
                    }
                }
            }
            None
        }
    }
}
