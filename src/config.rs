//! Panel configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PanelError;

/// Editor and console palette, as `#rrggbb` strings the host feeds straight
/// into its styling layer. Defaults match the panel's dark theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub editor_background: String,
    pub editor_foreground: String,
    pub gutter_background: String,
    pub gutter_foreground: String,
    pub current_line: String,
    pub console_background: String,
    pub console_foreground: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            editor_background: "#272822".to_string(),
            editor_foreground: "#f8f8f2".to_string(),
            gutter_background: "#3e3d32".to_string(),
            gutter_foreground: "#75715e".to_string(),
            current_line: "#49483e".to_string(),
            console_background: "#1e1e1e".to_string(),
            console_foreground: "#e6e6e6".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Seconds between autosave passes; `None` disables autosave.
    pub autosave_interval_secs: Option<u64>,
    /// Width of one indentation step, in spaces.
    pub tab_width: usize,
    pub theme: Theme,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            autosave_interval_secs: Some(60),
            tab_width: 4,
            theme: Theme::default(),
        }
    }
}

impl PanelConfig {
    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PanelError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| PanelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Persist configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PanelError> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| PanelError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
