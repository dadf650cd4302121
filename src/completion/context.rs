//! Classification of the text to the left of the cursor.
//!
//! The resolver looks only at the current line up to the cursor column and
//! decides between two shapes:
//! - `expr.partial`, a dotted attribute access whose `expr` part can be
//!   handed to the host for evaluation;
//! - a bare (possibly empty) identifier prefix.
//!
//! A dot escaped with a backslash does not split an expression.

use once_cell::sync::Lazy;
use regex::Regex;

/// Trailing `<expr>.<partial>` shape: a dotted name chain (each segment
/// optionally a no-argument call), then the splitting dot, then the partial
/// identifier. The splitting dot must follow a chain segment directly, so a
/// backslash-escaped dot never splits.
static DOTTED_TAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\w+(?:\(\))?(?:\.\w+(?:\(\))?)*)\s*\.(\w*)$").expect("dotted tail pattern")
});

/// Trailing run of word characters (always matches, possibly empty).
static BARE_TAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w*)$").expect("bare tail pattern"));

/// What the user is typing at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineContext {
    /// `<expr>.<partial>`: attribute access on an evaluable expression.
    /// `expr` is trimmed of surrounding whitespace and non-empty.
    DottedAttribute { expr: String, prefix: String },

    /// A bare identifier prefix, possibly empty.
    BareIdentifier { prefix: String },
}

impl LineContext {
    /// The partial identifier being typed, whatever the shape.
    pub fn prefix(&self) -> &str {
        match self {
            LineContext::DottedAttribute { prefix, .. } => prefix,
            LineContext::BareIdentifier { prefix } => prefix,
        }
    }
}

/// Classify the head of `line_text` ending at char column `column`.
///
/// Columns beyond the end of the line are clamped to the end.
pub fn classify_line(line_text: &str, column: usize) -> LineContext {
    let head: String = line_text.chars().take(column).collect();

    if let Some(caps) = DOTTED_TAIL.captures(&head) {
        let expr = caps[1].trim();
        if !expr.is_empty() {
            return LineContext::DottedAttribute {
                expr: expr.to_string(),
                prefix: caps[2].to_string(),
            };
        }
    }

    let prefix = BARE_TAIL
        .captures(&head)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();
    LineContext::BareIdentifier { prefix }
}
