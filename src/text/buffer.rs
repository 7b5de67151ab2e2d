//! Text buffer with undo/redo history.
//!
//! [`TextBuffer`] is the single mutation entry point of the editing core. It
//! pairs a [`TextStore`] with an [`EditHistory`] and keeps the two in sync:
//! every change to the stored text is recorded as exactly one event, and
//! undo/redo replay those events against the store.
//!
//! All offsets are validated before anything is touched, so a rejected call
//! leaves both the text and the history as they were.

use std::fmt;

use crate::error::{Error, Result};
use crate::event::emit_event;
use crate::text::history::{EditEvent, EditHistory, EditKind, HistoryOptions};
use crate::text::store::{StoreOptions, TextStore};

/// Text storage plus its edit history.
#[derive(Clone, Debug, Default)]
pub struct TextBuffer {
    store: TextStore,
    history: EditHistory,
}

impl TextBuffer {
    /// Create an empty text buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with custom storage and history options.
    #[must_use]
    pub fn with_options(store: StoreOptions, history: HistoryOptions) -> Self {
        Self {
            store: TextStore::with_options(store),
            history: EditHistory::with_options(history),
        }
    }

    /// Create a buffer with initial text and an empty history.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            store: TextStore::with_text(text.as_bytes(), StoreOptions::default()),
            history: EditHistory::new(),
        }
    }

    /// Get the underlying store.
    #[must_use]
    pub fn store(&self) -> &TextStore {
        &self.store
    }

    /// Get the edit history.
    #[must_use]
    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// The current text units.
    #[must_use]
    pub fn contents(&self) -> &[u8] {
        self.store.contents()
    }

    /// The current text units followed by a `0` terminator.
    #[must_use]
    pub fn terminated(&self) -> &[u8] {
        self.store.terminated()
    }

    /// Number of text units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Number of lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.store.line_count()
    }

    /// See [`TextStore::find_line_start`].
    pub fn find_line_start(&self, from: usize) -> Result<usize> {
        self.store.find_line_start(from)
    }

    /// See [`TextStore::find_next_line_start`].
    pub fn find_next_line_start(&self, from: usize) -> Result<usize> {
        self.store.find_next_line_start(from)
    }

    /// See [`TextStore::find_line_end`].
    pub fn find_line_end(&self, from: usize) -> Result<usize> {
        self.store.find_line_end(from)
    }

    /// Insert `text` at `position`, first replacing a selection.
    ///
    /// `selection_length` is signed: positive selects forward from
    /// `position`, negative selects backward. A non-empty selection is
    /// removed as its own history event and the text lands at the
    /// selection's lower bound, so both signs give the same result.
    pub fn add_text(&mut self, position: usize, selection_length: isize, text: &[u8]) -> Result<()> {
        let (start, selected) = normalize_span(position, selection_length, self.len())?;
        self.store.reserve(self.len() - selected + text.len())?;

        if selected > 0 {
            self.delete_span(start, selected)?;
        }
        self.insert_span(start, text)
    }

    /// Remove `size` units at `position`.
    ///
    /// A negative `size` removes the units just before `position`.
    pub fn remove_text(&mut self, position: usize, size: isize) -> Result<()> {
        let (start, size) = normalize_span(position, size, self.len())?;
        self.delete_span(start, size)
    }

    /// Reverse the most recent edit. Returns `false` if there is none.
    pub fn undo(&mut self) -> Result<bool> {
        Ok(self.undo_step()?.is_some())
    }

    /// Reapply the most recently undone edit. Returns `false` if there is none.
    pub fn redo(&mut self) -> Result<bool> {
        Ok(self.redo_step()?.is_some())
    }

    /// Number of edits that can be undone.
    #[must_use]
    pub fn undo_count(&self) -> usize {
        self.history.undo_count()
    }

    /// Number of undone edits that can be redone.
    #[must_use]
    pub fn redo_count(&self) -> usize {
        self.history.redo_count()
    }

    /// Check if undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Forget all recorded edits. The text is kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Undo and report where the caret belongs afterwards.
    pub(crate) fn undo_step(&mut self) -> Result<Option<usize>> {
        let Some(event) = self.history.undo_target() else {
            return Ok(None);
        };

        let caret = match event.kind {
            EditKind::Insertion => {
                self.store.delete(event.position, event.len())?;
                event.position
            }
            EditKind::Deletion => {
                self.store.insert(event.position, &event.span)?;
                event.end()
            }
        };
        emit_event("history.undo", &describe(event));

        self.history.commit_undo();
        Ok(Some(caret))
    }

    /// Redo and report where the caret belongs afterwards.
    pub(crate) fn redo_step(&mut self) -> Result<Option<usize>> {
        let Some(event) = self.history.redo_target() else {
            return Ok(None);
        };

        let caret = match event.kind {
            EditKind::Insertion => {
                self.store.insert(event.position, &event.span)?;
                event.end()
            }
            EditKind::Deletion => {
                self.store.delete(event.position, event.len())?;
                event.position
            }
        };
        emit_event("history.redo", &describe(event));

        self.history.commit_redo();
        Ok(Some(caret))
    }

    fn insert_span(&mut self, position: usize, text: &[u8]) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.store.insert(position, text)?;
        self.history.push(EditEvent::insertion(position, text.to_vec()));
        Ok(())
    }

    fn delete_span(&mut self, position: usize, size: usize) -> Result<()> {
        if size == 0 {
            return Ok(());
        }
        let removed = self.store.span(position, size)?.to_vec();
        self.store.delete(position, size)?;
        self.history.push(EditEvent::deletion(position, removed));
        Ok(())
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.store.text())
    }
}

/// Turn a signed span anchored at `position` into `(start, size)`.
fn normalize_span(position: usize, size: isize, len: usize) -> Result<(usize, usize)> {
    if position > len {
        return Err(Error::OutOfRange {
            offset: position,
            len,
        });
    }

    let magnitude = size.unsigned_abs();
    let start = if size < 0 {
        position
            .checked_sub(magnitude)
            .ok_or(Error::SpanOutOfRange {
                position: 0,
                size: magnitude,
                len,
            })?
    } else {
        position
    };

    match start.checked_add(magnitude) {
        Some(end) if end <= len => Ok((start, magnitude)),
        _ => Err(Error::SpanOutOfRange {
            position: start,
            size: magnitude,
            len,
        }),
    }
}

fn describe(event: &EditEvent) -> String {
    let kind = match event.kind {
        EditKind::Insertion => "insert",
        EditKind::Deletion => "delete",
    };
    format!("kind={kind} position={} len={}", event.position, event.len())
}
