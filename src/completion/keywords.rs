//! Static completion candidates.
//!
//! These are the language keywords and common builtins offered whenever no
//! dotted expression is in play, and the fallback whenever dynamic
//! introspection fails. The lists never change at runtime.

/// Language keywords.
pub const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break",
    "class", "continue", "def", "del", "elif", "else", "except", "finally",
    "for", "from", "global", "if", "import", "in", "is", "lambda", "nonlocal",
    "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

/// Builtin functions and frequently imported modules.
pub const BUILTINS: &[&str] = &[
    "abs", "bool", "dict", "dir", "enumerate", "filter", "float", "getattr",
    "hasattr", "help", "int", "isinstance", "len", "list", "map", "max",
    "min", "open", "print", "range", "repr", "round", "set", "setattr",
    "sorted", "str", "sum", "tuple", "type", "zip",
    // Modules the panel's scripts reach for constantly.
    "io", "math", "os", "sys",
];

/// Attribute names starting with this marker are considered private and are
/// excluded from dotted-completion candidates.
pub const PRIVATE_MARKER: char = '_';

/// The full static candidate list, keywords first, in declaration order.
pub fn static_candidates() -> Vec<String> {
    KEYWORDS
        .iter()
        .chain(BUILTINS.iter())
        .map(|s| s.to_string())
        .collect()
}
