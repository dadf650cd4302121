//! Rope-backed text documents.
//!
//! A [`Document`] owns the buffer for one editor tab: the text, the cursor
//! (a char offset), the optional backing file path, and a dirty flag.
//! Queries like bracket matching and completion take read-only snapshots of
//! this state; mutation happens only through the explicit edit calls here,
//! each of which marks the document dirty and keeps the cursor in range.

use std::fs;
use std::path::{Path, PathBuf};

use ropey::Rope;
use tracing::debug;

use crate::error::PanelError;

#[derive(Debug, Clone)]
pub struct Document {
    text: Rope,
    path: Option<PathBuf>,
    cursor: usize,
    dirty: bool,
}

impl Document {
    /// A new, empty, pathless document.
    pub fn empty() -> Self {
        Self { text: Rope::new(), path: None, cursor: 0, dirty: false }
    }

    /// A pathless document seeded with `text`.
    pub fn from_text(text: &str) -> Self {
        Self { text: Rope::from_str(text), path: None, cursor: 0, dirty: false }
    }

    /// Load a UTF-8 text file into a new document bound to `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PanelError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| PanelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), chars = contents.chars().count(), "loaded document");
        Ok(Self {
            text: Rope::from_str(&contents),
            path: Some(path.to_path_buf()),
            cursor: 0,
            dirty: false,
        })
    }

    /// Write the document to its bound path and clear the dirty flag.
    pub fn save(&mut self) -> Result<(), PanelError> {
        let path = self.path.clone().ok_or(PanelError::NoPath)?;
        self.write_to(&path)?;
        self.dirty = false;
        Ok(())
    }

    /// Write the document to `path`, bind it there, and clear the dirty flag.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<(), PanelError> {
        let path = path.as_ref().to_path_buf();
        self.write_to(&path)?;
        self.path = Some(path);
        self.dirty = false;
        Ok(())
    }

    fn write_to(&self, path: &Path) -> Result<(), PanelError> {
        fs::write(path, self.contents()).map_err(|source| PanelError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn text(&self) -> &Rope {
        &self.text
    }

    /// The full document text as an owned string.
    pub fn contents(&self) -> String {
        self.text.to_string()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn len_chars(&self) -> usize {
        self.text.len_chars()
    }

    /// Cursor position as a char offset into the buffer.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamping to the buffer length.
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.text.len_chars());
    }

    /// Cursor position as a (line, column) pair of char indices.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let line = self.text.char_to_line(self.cursor);
        let column = self.cursor - self.text.line_to_char(line);
        (line, column)
    }

    /// Char offset of (line, column), clamped to valid positions.
    pub fn offset_at(&self, line: usize, column: usize) -> usize {
        let line = line.min(self.text.len_lines().saturating_sub(1));
        let line_start = self.text.line_to_char(line);
        let line_len = self.text.line(line).len_chars();
        line_start + column.min(line_len)
    }

    /// The text of line `line`, without inspecting neighbours. The trailing
    /// newline, if present, is stripped.
    pub fn line_text(&self, line: usize) -> String {
        if line >= self.text.len_lines() {
            return String::new();
        }
        let mut text: String = self.text.line(line).chars().collect();
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        text
    }

    /// The line under the cursor and the cursor's column within it.
    pub fn current_line(&self) -> (String, usize) {
        let (line, column) = self.cursor_line_col();
        (self.line_text(line), column)
    }

    /// Insert `text` at char offset `offset` (clamped) and place the cursor
    /// after the insertion.
    pub fn insert(&mut self, offset: usize, text: &str) {
        let offset = offset.min(self.text.len_chars());
        self.text.insert(offset, text);
        self.cursor = offset + text.chars().count();
        self.dirty = true;
    }

    /// Remove the char range `start..end` (clamped) and leave the cursor at
    /// the start of the removal.
    pub fn remove(&mut self, start: usize, end: usize) {
        let len = self.text.len_chars();
        let start = start.min(len);
        let end = end.min(len);
        if start >= end {
            return;
        }
        self.text.remove(start..end);
        self.cursor = start;
        self.dirty = true;
    }

    /// Replace the char range `start..end` with `text`, cursor after the
    /// replacement.
    pub fn replace_span(&mut self, start: usize, end: usize, text: &str) {
        let len = self.text.len_chars();
        let start = start.min(len);
        let end = end.min(len).max(start);
        if start < end {
            self.text.remove(start..end);
        }
        self.text.insert(start, text);
        self.cursor = start + text.chars().count();
        self.dirty = true;
    }

    /// Replace the entire buffer. Used by file loads into an existing tab
    /// and by whole-document operations like replace-all.
    pub fn set_text(&mut self, text: &str) {
        self.text = Rope::from_str(text);
        self.cursor = self.cursor.min(self.text.len_chars());
        self.dirty = true;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_moves_cursor_and_dirties() {
        let mut doc = Document::empty();
        assert!(!doc.is_dirty());
        doc.insert(0, "hello");
        assert_eq!(doc.contents(), "hello");
        assert_eq!(doc.cursor(), 5);
        assert!(doc.is_dirty());
    }

    #[test]
    fn test_replace_span() {
        let mut doc = Document::from_text("os.pa");
        doc.replace_span(3, 5, "path");
        assert_eq!(doc.contents(), "os.path");
        assert_eq!(doc.cursor(), 7);
    }

    #[test]
    fn test_replace_empty_span_inserts() {
        let mut doc = Document::from_text("os.");
        doc.replace_span(3, 3, "getcwd");
        assert_eq!(doc.contents(), "os.getcwd");
    }

    #[test]
    fn test_cursor_line_col_round_trip() {
        let mut doc = Document::from_text("first\nsecond\nthird");
        doc.set_cursor(doc.offset_at(1, 3));
        assert_eq!(doc.cursor_line_col(), (1, 3));
        assert_eq!(doc.current_line().0, "second");
    }

    #[test]
    fn test_line_text_strips_newline() {
        let doc = Document::from_text("a\nb\n");
        assert_eq!(doc.line_text(0), "a");
        assert_eq!(doc.line_text(1), "b");
        assert_eq!(doc.line_text(7), "");
    }

    #[test]
    fn test_offset_clamping() {
        let mut doc = Document::from_text("ab");
        doc.set_cursor(99);
        assert_eq!(doc.cursor(), 2);
        assert_eq!(doc.offset_at(5, 5), 2);
    }

    #[test]
    fn test_remove_degenerate_range_is_no_op() {
        let mut doc = Document::from_text("abc");
        doc.remove(2, 2);
        assert_eq!(doc.contents(), "abc");
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_save_without_path_fails() {
        let mut doc = Document::from_text("x");
        assert!(matches!(doc.save(), Err(PanelError::NoPath)));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.py");

        let mut doc = Document::from_text("print('hi')\n");
        doc.save_as(&path).unwrap();
        assert!(!doc.is_dirty());
        assert_eq!(doc.path(), Some(path.as_path()));

        let loaded = Document::load(&path).unwrap();
        assert_eq!(loaded.contents(), "print('hi')\n");
        assert!(!loaded.is_dirty());
    }
}
