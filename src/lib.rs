pub mod brackets;
pub mod completion;
pub mod config;
pub mod console;
pub mod document;
pub mod error;
pub mod eval;
pub mod highlight;
pub mod logging;
pub mod panel;
pub mod search;

pub use brackets::{ScanDirection, find_matching_bracket};
pub use completion::{Resolution, resolve_completions};
pub use config::PanelConfig;
pub use console::{OutputConsole, OutputSink};
pub use document::Document;
pub use error::PanelError;
pub use eval::{EvalError, NullHost, ScriptHost};
pub use panel::Panel;
