//! Contextual completion resolution.
//!
//! This module decides what the user is typing at the cursor and produces a
//! candidate list for the popup widget:
//! - A bare identifier prefix gets the static keyword/builtin list.
//! - A dotted expression tail (`expr.partial`) gets the attribute names of
//!   the dynamically evaluated `expr`, falling back to the static list when
//!   evaluation fails (the expected steady state while typing).
//!
//! The resolver never filters by prefix; that belongs to the popup, which
//! also owns replacing the prefix span on accept.

pub mod context;
pub mod keywords;
pub mod resolve;

pub use context::{LineContext, classify_line};
pub use keywords::{KEYWORDS, BUILTINS, PRIVATE_MARKER, static_candidates};
pub use resolve::{Resolution, resolve_completions};
