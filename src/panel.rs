//! Panel state and lifecycle.
//!
//! One [`Panel`] is one editor side panel: its open tabs, output console,
//! configuration, and the host interpreter capability. The host plugin
//! loader calls [`Panel::create`] when the panel is shown and
//! [`Panel::dispose`] when it is torn down; the instance is plain owned
//! data, so a host that wants several panels just creates several.
//!
//! Everything here runs synchronously on the host's UI thread. The only
//! time-based behavior, autosave, is driven by the host calling
//! [`Panel::tick`] from its timer callback.

use std::ops::Range;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::brackets::{ScanDirection, find_matching_bracket, is_closing_bracket, is_opening_bracket};
use crate::completion::{Resolution, resolve_completions};
use crate::config::PanelConfig;
use crate::console::{OutputConsole, run_code};
use crate::document::Document;
use crate::error::PanelError;
use crate::eval::ScriptHost;

pub struct Panel {
    config: PanelConfig,
    host: Box<dyn ScriptHost>,
    tabs: Vec<Document>,
    active: usize,
    console: OutputConsole,
    last_autosave: Option<Instant>,
}

impl Panel {
    /// Create an owned panel instance with one empty tab.
    pub fn create(config: PanelConfig, host: Box<dyn ScriptHost>) -> Self {
        info!(autosave = ?config.autosave_interval_secs, "panel created");
        Self {
            config,
            host,
            tabs: vec![Document::empty()],
            active: 0,
            console: OutputConsole::new(),
            last_autosave: None,
        }
    }

    /// Tear the panel down, flushing dirty documents that have a backing
    /// file. Unsaved pathless tabs are discarded, as on host shutdown.
    pub fn dispose(mut self) {
        let mut flushed = 0usize;
        for doc in &mut self.tabs {
            if doc.is_dirty() && doc.path().is_some() {
                if let Err(err) = doc.save() {
                    debug!(error = %err, "flush on dispose failed");
                } else {
                    flushed += 1;
                }
            }
        }
        info!(flushed, "panel disposed");
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn console(&self) -> &OutputConsole {
        &self.console
    }

    pub fn clear_output(&mut self) {
        self.console.clear();
    }

    // --- tabs -----------------------------------------------------------

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn active_tab(&self) -> usize {
        self.active
    }

    pub fn set_active_tab(&mut self, index: usize) -> Result<(), PanelError> {
        if index >= self.tabs.len() {
            return Err(PanelError::UnknownTab(index));
        }
        self.active = index;
        Ok(())
    }

    pub fn active_document(&self) -> &Document {
        &self.tabs[self.active]
    }

    pub fn active_document_mut(&mut self) -> &mut Document {
        &mut self.tabs[self.active]
    }

    /// Open a new empty tab and focus it.
    pub fn new_tab(&mut self) -> usize {
        self.tabs.push(Document::empty());
        self.active = self.tabs.len() - 1;
        self.active
    }

    /// Open `path` in a tab and focus it. A tab already bound to the same
    /// path is focused instead of opening a duplicate.
    pub fn open_file(&mut self, path: impl AsRef<Path>) -> Result<usize, PanelError> {
        let path = path.as_ref();
        if let Some(existing) = self.tabs.iter().position(|doc| doc.path() == Some(path)) {
            self.active = existing;
            return Ok(existing);
        }

        let doc = Document::load(path)?;
        self.console.info(&format!("Opened file: {}", path.display()));

        // Loading into a single pristine empty tab replaces it.
        if self.tabs.len() == 1 && self.tabs[0].path().is_none() && self.tabs[0].len_chars() == 0 {
            self.tabs[0] = doc;
            self.active = 0;
        } else {
            self.tabs.push(doc);
            self.active = self.tabs.len() - 1;
        }
        Ok(self.active)
    }

    /// Close a tab. The panel always keeps at least one tab open.
    pub fn close_tab(&mut self, index: usize) -> Result<(), PanelError> {
        if index >= self.tabs.len() {
            return Err(PanelError::UnknownTab(index));
        }
        self.tabs.remove(index);
        if self.tabs.is_empty() {
            self.tabs.push(Document::empty());
        }
        // Removing a tab before the active one shifts the whole tail left;
        // follow it so focus stays on the same document.
        if index < self.active {
            self.active -= 1;
        }
        if self.active >= self.tabs.len() {
            self.active = self.tabs.len() - 1;
        }
        Ok(())
    }

    // --- files ----------------------------------------------------------

    pub fn save_active(&mut self) -> Result<(), PanelError> {
        self.tabs[self.active].save()?;
        let notice = match self.tabs[self.active].path() {
            Some(path) => format!("Saved file: {}", path.display()),
            None => "Saved file".to_string(),
        };
        self.console.info(&notice);
        Ok(())
    }

    pub fn save_active_as(&mut self, path: impl AsRef<Path>) -> Result<(), PanelError> {
        let path = path.as_ref();
        self.tabs[self.active].save_as(path)?;
        self.console.info(&format!("Saved file: {}", path.display()));
        Ok(())
    }

    /// Timer callback from the host. When the autosave interval has
    /// elapsed, every dirty document with a backing file is saved; pathless
    /// scratch tabs are left alone.
    pub fn tick(&mut self, now: Instant) {
        let Some(interval_secs) = self.config.autosave_interval_secs else {
            return;
        };
        match self.last_autosave {
            None => {
                // First tick establishes the baseline instead of saving.
                self.last_autosave = Some(now);
            }
            Some(last) if now.duration_since(last).as_secs() >= interval_secs => {
                self.last_autosave = Some(now);
                for doc in &mut self.tabs {
                    if doc.is_dirty() && doc.path().is_some() {
                        match doc.save() {
                            Ok(()) => debug!(path = ?doc.path(), "autosaved"),
                            Err(err) => debug!(error = %err, "autosave failed"),
                        }
                    }
                }
            }
            Some(_) => {}
        }
    }

    // --- editing queries ------------------------------------------------

    /// The bracket pair to highlight for the current cursor, if the cursor
    /// sits on a bracket with a balanced partner. Opening brackets scan
    /// forward, closing ones backward.
    pub fn matching_bracket(&self) -> Option<(usize, usize)> {
        let doc = self.active_document();
        let position = doc.cursor();
        if position >= doc.len_chars() {
            return None;
        }
        let ch = doc.text().char(position);
        let direction = if is_opening_bracket(ch) {
            ScanDirection::Forward
        } else if is_closing_bracket(ch) {
            ScanDirection::Backward
        } else {
            return None;
        };
        find_matching_bracket(doc.text(), position, direction).map(|partner| (position, partner))
    }

    /// Completion candidates for the cursor position of the active tab.
    pub fn completions(&mut self) -> Resolution {
        let (line, column) = self.tabs[self.active].current_line();
        resolve_completions(&line, column, self.host.as_mut())
    }

    /// Accept a completion: replace the resolved prefix span (which ends at
    /// the cursor) with `candidate` and leave the cursor after it.
    pub fn accept_completion(&mut self, resolution: &Resolution, candidate: &str) {
        let doc = &mut self.tabs[self.active];
        let cursor = doc.cursor();
        let prefix_len = resolution.prefix.chars().count();
        doc.replace_span(cursor.saturating_sub(prefix_len), cursor, candidate);
    }

    // --- running --------------------------------------------------------

    /// Run the active tab's full text through the host interpreter.
    pub fn run_active(&mut self) {
        let code = self.tabs[self.active].contents();
        debug!(chars = code.chars().count(), "running active tab");
        run_code(self.host.as_mut(), &mut self.console, &code);
    }

    // --- find/replace ---------------------------------------------------

    /// Find the next occurrence at or after the cursor (wrapping). The
    /// cursor moves past the match, so repeated calls walk the document.
    pub fn find_next(&mut self, needle: &str) -> Option<Range<usize>> {
        let doc = &mut self.tabs[self.active];
        let found = crate::search::find_next(doc.text(), needle, doc.cursor())?;
        doc.set_cursor(found.end);
        Some(found)
    }

    pub fn replace_all(&mut self, needle: &str, replacement: &str) -> usize {
        crate::search::replace_all(&mut self.tabs[self.active], needle, replacement)
    }
}

impl std::fmt::Debug for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Panel")
            .field("tabs", &self.tabs.len())
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
