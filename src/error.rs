//! Library error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the host across the panel boundary.
#[derive(Debug, Error)]
pub enum PanelError {
    /// Save was requested on a document that has never been given a path.
    #[error("document has no file path; use save-as")]
    NoPath,

    /// A tab index that does not name an open tab.
    #[error("no such tab: {0}")]
    UnknownTab(usize),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid panel configuration: {0}")]
    Config(#[from] serde_json::Error),
}
