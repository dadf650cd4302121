//! Regex-based syntax tokenization.
//!
//! One line in, a run of classified spans out. The scanner tries each
//! pattern in table order at the current position and emits the first match;
//! anything unrecognized advances one character as [`TokenKind::Plain`].
//! Lines are tokenized independently, so a string literal spanning multiple
//! lines is only recognized on its opening line (the same line-oriented
//! naivety as the bracket matcher).

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

use crate::completion::keywords::{BUILTINS, KEYWORDS};

/// Syntax class of a token span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Comment,
    Str,
    Number,
    Keyword,
    Builtin,
    Identifier,
    Operator,
    Whitespace,
    Plain,
}

/// A classified span of one line. `start..end` are byte offsets into the
/// line string handed to [`tokenize_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub start: usize,
    pub end: usize,
    pub kind: TokenKind,
}

struct TokenPattern {
    kind: TokenKind,
    regex: Regex,
}

static PATTERNS: Lazy<Vec<TokenPattern>> = Lazy::new(|| {
    // Order matters: comments swallow the rest of the line, strings swallow
    // embedded operators, and words are split keyword/builtin/identifier
    // after the fact.
    let table: &[(TokenKind, &str)] = &[
        (TokenKind::Comment, r"^#.*"),
        (TokenKind::Str, r#"^"(?:[^"\\]|\\.)*"?"#),
        (TokenKind::Str, r"^'(?:[^'\\]|\\.)*'?"),
        (TokenKind::Number, r"^\d+(?:\.\d+)?(?:[eE][+-]?\d+)?"),
        (TokenKind::Identifier, r"^\w+"),
        (TokenKind::Whitespace, r"^\s+"),
        (TokenKind::Operator, r"^[+\-*/%=<>!&|^~@.,:;()\[\]{}]+"),
    ];
    table
        .iter()
        .map(|&(kind, pattern)| TokenPattern {
            kind,
            regex: Regex::new(pattern).expect("token pattern"),
        })
        .collect()
});

static KEYWORD_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| KEYWORDS.iter().copied().collect());

static BUILTIN_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| BUILTINS.iter().copied().collect());

/// Tokenize a single line into contiguous classified spans.
pub fn tokenize_line(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < line.len() {
        let rest = &line[pos..];
        let mut matched = None;
        for pattern in PATTERNS.iter() {
            if let Some(m) = pattern.regex.find(rest) {
                if m.end() > 0 {
                    matched = Some((pattern.kind, m.end()));
                    break;
                }
            }
        }

        match matched {
            Some((kind, len)) => {
                let kind = if kind == TokenKind::Identifier {
                    classify_word(&rest[..len])
                } else {
                    kind
                };
                tokens.push(Token { start: pos, end: pos + len, kind });
                pos += len;
            }
            None => {
                // Unrecognized character; emit it alone and move on.
                let len = rest.chars().next().map_or(1, |c| c.len_utf8());
                tokens.push(Token { start: pos, end: pos + len, kind: TokenKind::Plain });
                pos += len;
            }
        }
    }

    tokens
}

fn classify_word(word: &str) -> TokenKind {
    if KEYWORD_SET.contains(word) {
        TokenKind::Keyword
    } else if BUILTIN_SET.contains(word) {
        TokenKind::Builtin
    } else {
        TokenKind::Identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<(TokenKind, String)> {
        tokenize_line(line)
            .into_iter()
            .map(|t| (t.kind, line[t.start..t.end].to_string()))
            .collect()
    }

    #[test]
    fn test_keywords_and_identifiers() {
        let tokens = kinds("def area(r):");
        assert_eq!(tokens[0], (TokenKind::Keyword, "def".to_string()));
        assert_eq!(tokens[2], (TokenKind::Identifier, "area".to_string()));
    }

    #[test]
    fn test_builtin_classification() {
        let tokens = kinds("print(len(xs))");
        assert_eq!(tokens[0], (TokenKind::Builtin, "print".to_string()));
        assert_eq!(tokens[2], (TokenKind::Builtin, "len".to_string()));
        assert_eq!(tokens[4], (TokenKind::Identifier, "xs".to_string()));
    }

    #[test]
    fn test_comment_swallows_rest_of_line() {
        let tokens = kinds("x = 1  # the answer");
        let last = tokens.last().unwrap();
        assert_eq!(last.0, TokenKind::Comment);
        assert_eq!(last.1, "# the answer");
    }

    #[test]
    fn test_string_literals() {
        let tokens = kinds(r#"s = "a # not a comment""#);
        assert_eq!(tokens.last().unwrap().0, TokenKind::Str);

        let tokens = kinds(r"t = 'it\'s'");
        assert_eq!(tokens.last().unwrap(), &(TokenKind::Str, r"'it\'s'".to_string()));
    }

    #[test]
    fn test_unterminated_string_still_a_string() {
        let tokens = kinds(r#"s = "unclosed"#);
        assert_eq!(tokens.last().unwrap().0, TokenKind::Str);
    }

    #[test]
    fn test_numbers() {
        let tokens = kinds("x = 3.14e-2 + 7");
        assert!(tokens.contains(&(TokenKind::Number, "3.14e-2".to_string())));
        assert_eq!(tokens.last().unwrap(), &(TokenKind::Number, "7".to_string()));
    }

    #[test]
    fn test_spans_are_contiguous() {
        let line = "for i in range(10):  # loop";
        let tokens = tokenize_line(line);
        let mut pos = 0;
        for token in &tokens {
            assert_eq!(token.start, pos);
            pos = token.end;
        }
        assert_eq!(pos, line.len());
    }
}
