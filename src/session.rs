//! Editing session: one buffer, one selection, one command surface.
//!
//! [`EditorSession`] is what the platform layer owns. Input glue calls the
//! command methods (or [`EditorSession::apply`] with a [`Command`]); the
//! renderer reads [`EditorSession::view`] once per redraw. Commands take
//! `&mut self` and reads take `&self`, so a redraw can never observe a
//! half-applied edit.
//!
//! # Examples
//!
//! ```
//! use txtcore::EditorSession;
//!
//! let mut session = EditorSession::new();
//! session.paste_text("hello\nworld").unwrap();
//! session.move_up(false, false).unwrap();
//! session.end(true, false).unwrap();
//! assert_eq!(session.selected_text(), b"");
//!
//! session.home(true, false).unwrap();
//! assert_eq!(session.selected_text(), b"hello");
//!
//! session.type_char(b'J').unwrap();
//! assert_eq!(session.text(), "J\nworld");
//!
//! session.undo().unwrap();
//! session.undo().unwrap();
//! assert_eq!(session.text(), "hello\nworld");
//! ```

use std::borrow::Cow;
use std::ops::Range;

use crate::error::{Error, Result};
use crate::input::{Command, KeyEvent};
use crate::text::{HistoryOptions, Selection, StoreOptions, TextBuffer};

/// Session configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditorOptions {
    /// Text storage options.
    pub store: StoreOptions,
    /// Undo history options.
    pub history: HistoryOptions,
}

/// Read-only snapshot for one redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct View<'a> {
    /// Text units followed by a `0` terminator.
    pub text: &'a [u8],
    /// Number of text units, terminator excluded.
    pub len: usize,
    /// Selection anchor.
    pub cursor: usize,
    /// Signed distance from anchor to caret.
    pub cursor_length: isize,
}

impl View<'_> {
    /// Offset of the caret.
    #[must_use]
    pub fn caret(&self) -> usize {
        self.cursor.saturating_add_signed(self.cursor_length)
    }

    /// Highlighted range.
    #[must_use]
    pub fn selection(&self) -> Range<usize> {
        let caret = self.caret();
        self.cursor.min(caret)..self.cursor.max(caret)
    }
}

/// A buffer paired with its selection.
#[derive(Clone, Debug, Default)]
pub struct EditorSession {
    buffer: TextBuffer,
    selection: Selection,
}

impl EditorSession {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with custom options.
    #[must_use]
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            buffer: TextBuffer::with_options(options.store, options.history),
            selection: Selection::new(),
        }
    }

    /// Create a session over `text`, caret at the start, no history.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: TextBuffer::with_text(text),
            selection: Selection::new(),
        }
    }

    /// Get the text buffer.
    #[must_use]
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Get the selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Replace the selection. Both ends must lie within the text.
    pub fn set_selection(&mut self, anchor: usize, caret: usize) -> Result<()> {
        let len = self.buffer.len();
        if let Some(&offset) = [anchor, caret].iter().find(|&&offset| offset > len) {
            return Err(Error::OutOfRange { offset, len });
        }
        self.selection = Selection::with_range(anchor, caret);
        Ok(())
    }

    /// The current text units.
    #[must_use]
    pub fn contents(&self) -> &[u8] {
        self.buffer.contents()
    }

    /// The current text as UTF-8, replacing invalid units.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        self.buffer.store().text()
    }

    /// Number of text units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Selection anchor.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.selection.cursor()
    }

    /// Signed distance from anchor to caret.
    #[must_use]
    pub fn cursor_length(&self) -> isize {
        self.selection.cursor_length()
    }

    /// The selected units.
    #[must_use]
    pub fn selected_text(&self) -> &[u8] {
        self.selection.selected_text(&self.buffer)
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> View<'_> {
        View {
            text: self.buffer.terminated(),
            len: self.buffer.len(),
            cursor: self.selection.cursor(),
            cursor_length: self.selection.cursor_length(),
        }
    }

    /// Type one unit.
    pub fn type_char(&mut self, c: u8) -> Result<bool> {
        self.selection.add_char(&mut self.buffer, c)
    }

    /// Insert `text` as one edit.
    pub fn paste_text(&mut self, text: impl AsRef<[u8]>) -> Result<bool> {
        self.selection.add_text(&mut self.buffer, text.as_ref())
    }

    /// Move the caret one unit left, extending with `shift`.
    pub fn move_left(&mut self, shift: bool, ctrl: bool) -> Result<bool> {
        Ok(self.selection.move_left(&self.buffer, shift, ctrl))
    }

    /// Move the caret one unit right, extending with `shift`.
    pub fn move_right(&mut self, shift: bool, ctrl: bool) -> Result<bool> {
        Ok(self.selection.move_right(&self.buffer, shift, ctrl))
    }

    /// Move the caret to the previous line, keeping the column.
    pub fn move_up(&mut self, shift: bool, ctrl: bool) -> Result<bool> {
        self.selection.move_up(&self.buffer, shift, ctrl)
    }

    /// Move the caret to the next line, keeping the column.
    pub fn move_down(&mut self, shift: bool, ctrl: bool) -> Result<bool> {
        self.selection.move_down(&self.buffer, shift, ctrl)
    }

    /// Go to the line start, or the buffer start with `ctrl`.
    pub fn home(&mut self, shift: bool, ctrl: bool) -> Result<bool> {
        self.selection.home(&self.buffer, shift, ctrl)
    }

    /// Go to the line end, or the buffer end with `ctrl`.
    pub fn end(&mut self, shift: bool, ctrl: bool) -> Result<bool> {
        self.selection.end(&self.buffer, shift, ctrl)
    }

    /// Delete the selection or the unit before the caret.
    pub fn backspace(&mut self, shift: bool, ctrl: bool) -> Result<bool> {
        self.selection.backspace(&mut self.buffer, shift, ctrl)
    }

    /// Delete the selection or the unit after the caret.
    pub fn delete(&mut self, shift: bool, ctrl: bool) -> Result<bool> {
        self.selection.del(&mut self.buffer, shift, ctrl)
    }

    /// Select the whole buffer.
    pub fn select_all(&mut self) -> Result<bool> {
        Ok(self.selection.select_all(&self.buffer))
    }

    /// Undo the last edit; the caret lands where it happened.
    pub fn undo(&mut self) -> Result<bool> {
        let Some(caret) = self.buffer.undo_step()? else {
            return Ok(false);
        };
        self.selection.collapse_to(caret);
        Ok(true)
    }

    /// Redo the last undone edit; the caret lands where it happened.
    pub fn redo(&mut self) -> Result<bool> {
        let Some(caret) = self.buffer.redo_step()? else {
            return Ok(false);
        };
        self.selection.collapse_to(caret);
        Ok(true)
    }

    /// Execute a command.
    pub fn apply(&mut self, command: &Command) -> Result<bool> {
        match command {
            Command::TypeChar(c) => self.type_char(*c),
            Command::Paste(text) => self.paste_text(text),
            Command::MoveLeft { shift, ctrl } => self.move_left(*shift, *ctrl),
            Command::MoveRight { shift, ctrl } => self.move_right(*shift, *ctrl),
            Command::MoveUp { shift, ctrl } => self.move_up(*shift, *ctrl),
            Command::MoveDown { shift, ctrl } => self.move_down(*shift, *ctrl),
            Command::Home { shift, ctrl } => self.home(*shift, *ctrl),
            Command::End { shift, ctrl } => self.end(*shift, *ctrl),
            Command::Backspace { shift, ctrl } => self.backspace(*shift, *ctrl),
            Command::Delete { shift, ctrl } => self.delete(*shift, *ctrl),
            Command::SelectAll => self.select_all(),
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
        }
    }

    /// Map a key event through the default bindings and execute it.
    ///
    /// Unbound keys return `Ok(false)`.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Result<bool> {
        match Command::from_key(event) {
            Some(command) => self.apply(&command),
            None => Ok(false),
        }
    }
}
