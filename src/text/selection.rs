//! Caret and selection over a [`TextBuffer`].
//!
//! A [`Selection`] is an anchor plus a caret. The caret is the edge the user
//! moves; the anchor stays put while Shift is held. Readers that want the
//! classic encoding get it from [`Selection::cursor`] (the anchor) and
//! [`Selection::cursor_length`] (signed distance from anchor to caret):
//!
//! ```text
//!   "hello"      anchor 1, caret 4   cursor 1, cursor_length  3   -> "ell"
//!   "hello"      anchor 4, caret 1   cursor 4, cursor_length -3   -> "ell"
//! ```
//!
//! Commands interpret key semantics and compute target offsets; every
//! change to the text is delegated to [`TextBuffer`]. Each command reports
//! whether anything visible changed.
//!
//! A `Selection` holds no reference to its buffer. The buffer is passed to
//! each command, and [`EditorSession`](crate::EditorSession) pairs one
//! selection with one buffer for its whole lifetime.

use std::ops::Range;

use crate::error::Result;
use crate::text::buffer::TextBuffer;

/// Anchor/caret pair. Both stay within `[0, len]` of the buffer they are
/// used with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    anchor: usize,
    caret: usize,
}

impl Selection {
    /// A caret at offset 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A caret at `offset` with nothing selected.
    #[must_use]
    pub fn caret_at(offset: usize) -> Self {
        Self {
            anchor: offset,
            caret: offset,
        }
    }

    /// A selection from `anchor` to `caret`.
    #[must_use]
    pub fn with_range(anchor: usize, caret: usize) -> Self {
        Self { anchor, caret }
    }

    /// The fixed end.
    #[must_use]
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// The moving end.
    #[must_use]
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Anchor offset in the signed encoding.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.anchor
    }

    /// Signed distance from the anchor to the caret.
    #[must_use]
    pub fn cursor_length(&self) -> isize {
        self.caret as isize - self.anchor as isize
    }

    /// Lower bound of the selection.
    #[must_use]
    pub fn min(&self) -> usize {
        self.anchor.min(self.caret)
    }

    /// Upper bound of the selection.
    #[must_use]
    pub fn max(&self) -> usize {
        self.anchor.max(self.caret)
    }

    /// Selected offsets as a half-open range.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.min()..self.max()
    }

    /// Check if anything is selected.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.anchor != self.caret
    }

    /// The selected units of `buffer`, empty if the range no longer fits.
    #[must_use]
    pub fn selected_text<'a>(&self, buffer: &'a TextBuffer) -> &'a [u8] {
        buffer.contents().get(self.range()).unwrap_or_default()
    }

    /// Drop the selection and put the caret at `offset`.
    pub fn collapse_to(&mut self, offset: usize) {
        self.anchor = offset;
        self.caret = offset;
    }

    /// Pull both ends back inside `[0, len]`.
    pub fn clamp(&mut self, len: usize) {
        self.anchor = self.anchor.min(len);
        self.caret = self.caret.min(len);
    }

    /// Type a single unit, replacing any selection. `0` is ignored.
    pub fn add_char(&mut self, buffer: &mut TextBuffer, c: u8) -> Result<bool> {
        if c == 0 {
            return Ok(false);
        }
        self.add_text(buffer, &[c])
    }

    /// Insert `text`, replacing any selection, and leave the caret after it.
    pub fn add_text(&mut self, buffer: &mut TextBuffer, text: &[u8]) -> Result<bool> {
        if text.is_empty() {
            return Ok(false);
        }
        let start = self.min();
        buffer.add_text(self.anchor, self.cursor_length(), text)?;
        self.collapse_to(start + text.len());
        Ok(true)
    }

    /// Move one unit left, or collapse the selection onto its caret.
    pub fn move_left(&mut self, _buffer: &TextBuffer, shift: bool, _ctrl: bool) -> bool {
        if shift {
            if self.caret == 0 {
                return false;
            }
            self.caret -= 1;
            return true;
        }

        if self.has_selection() {
            self.collapse_to(self.caret);
            true
        } else if self.caret > 0 {
            self.collapse_to(self.caret - 1);
            true
        } else {
            false
        }
    }

    /// Move one unit right, or collapse the selection onto its caret.
    pub fn move_right(&mut self, buffer: &TextBuffer, shift: bool, _ctrl: bool) -> bool {
        let len = buffer.len();
        if shift {
            if self.caret >= len {
                return false;
            }
            self.caret += 1;
            return true;
        }

        if self.has_selection() {
            self.collapse_to(self.caret);
            true
        } else if self.caret < len {
            self.collapse_to(self.caret + 1);
            true
        } else {
            false
        }
    }

    /// Move the caret to the same column on the previous line.
    ///
    /// The column is clamped to the end of a shorter line. Nothing happens on
    /// the first line.
    pub fn move_up(&mut self, buffer: &TextBuffer, shift: bool, _ctrl: bool) -> Result<bool> {
        let line_start = buffer.find_line_start(self.caret)?;
        if line_start == 0 {
            return Ok(false);
        }

        let column = self.caret - line_start;
        let prev_start = buffer.find_line_start(line_start - 1)?;
        let target = (prev_start + column).min(line_start - 1);
        Ok(self.move_caret_to(target, shift))
    }

    /// Move the caret to the same column on the next line.
    ///
    /// The column is clamped to the end of a shorter line; a last line
    /// without trailing newline ends at `len`. On the last line the caret
    /// goes to `len`.
    pub fn move_down(&mut self, buffer: &TextBuffer, shift: bool, _ctrl: bool) -> Result<bool> {
        let len = buffer.len();
        if self.caret >= len {
            return Ok(false);
        }

        let line_start = buffer.find_line_start(self.caret)?;
        let next_start = buffer.find_next_line_start(self.caret)?;
        let target = if next_start == len && buffer.contents().last() != Some(&b'\n') {
            len
        } else {
            let column = self.caret - line_start;
            let next_end = buffer.find_line_end(next_start)?;
            (next_start + column).min(next_end)
        };
        Ok(self.move_caret_to(target, shift))
    }

    /// Select the whole buffer, caret at the end.
    pub fn select_all(&mut self, buffer: &TextBuffer) -> bool {
        let before = *self;
        self.anchor = 0;
        self.caret = buffer.len();
        *self != before
    }

    /// Delete the selection, or the unit before the caret.
    pub fn backspace(&mut self, buffer: &mut TextBuffer, _shift: bool, _ctrl: bool) -> Result<bool> {
        if self.has_selection() {
            return self.delete_selection(buffer);
        }
        if self.caret == 0 {
            return Ok(false);
        }

        buffer.remove_text(self.caret, -1)?;
        self.collapse_to(self.caret - 1);
        Ok(true)
    }

    /// Delete the selection, or the unit after the caret.
    pub fn del(&mut self, buffer: &mut TextBuffer, _shift: bool, _ctrl: bool) -> Result<bool> {
        if self.has_selection() {
            return self.delete_selection(buffer);
        }
        if self.caret >= buffer.len() {
            return Ok(false);
        }

        buffer.remove_text(self.caret, 1)?;
        Ok(true)
    }

    /// Go to the start of the line, or of the buffer with `ctrl`.
    pub fn home(&mut self, buffer: &TextBuffer, shift: bool, ctrl: bool) -> Result<bool> {
        let target = if ctrl {
            0
        } else {
            buffer.find_line_start(self.caret)?
        };
        Ok(self.move_caret_to(target, shift))
    }

    /// Go to the end of the line (before its newline), or of the buffer with
    /// `ctrl`.
    pub fn end(&mut self, buffer: &TextBuffer, shift: bool, ctrl: bool) -> Result<bool> {
        let target = if ctrl {
            buffer.len()
        } else {
            buffer.find_line_end(self.caret)?
        };
        Ok(self.move_caret_to(target, shift))
    }

    fn delete_selection(&mut self, buffer: &mut TextBuffer) -> Result<bool> {
        let start = self.min();
        buffer.remove_text(self.anchor, self.cursor_length())?;
        self.collapse_to(start);
        Ok(true)
    }

    fn move_caret_to(&mut self, target: usize, extend: bool) -> bool {
        let before = *self;
        self.caret = target;
        if !extend {
            self.anchor = target;
        }
        *self != before
    }
}
