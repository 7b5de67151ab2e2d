//! Undo/redo event log.
//!
//! Every applied edit is recorded as a self-reversible [`EditEvent`]: the
//! kind of edit, where it happened, and the exact units it inserted or
//! removed. Events form one chronological chain rooted at a sentinel, with a
//! single `current` index marking the state the buffer is in. Undo replays
//! the current event backwards and steps toward the sentinel; redo steps
//! forward and replays. Recording a new edit while redo events exist discards
//! them for good.
//!
//! The log owns no buffer text, only the spans needed to reverse each edit.

use crate::event::{LogLevel, emit_event, emit_log};

/// Kind of a recorded edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKind {
    Insertion,
    Deletion,
}

/// One reversible edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditEvent {
    /// Insertion or deletion.
    pub kind: EditKind,
    /// Offset the edit was applied at.
    pub position: usize,
    /// Units inserted (Insertion) or removed (Deletion).
    pub span: Vec<u8>,
}

impl EditEvent {
    /// An insertion of `span` at `position`.
    #[must_use]
    pub fn insertion(position: usize, span: Vec<u8>) -> Self {
        Self {
            kind: EditKind::Insertion,
            position,
            span,
        }
    }

    /// A deletion of `span` that started at `position`.
    #[must_use]
    pub fn deletion(position: usize, span: Vec<u8>) -> Self {
        Self {
            kind: EditKind::Deletion,
            position,
            span,
        }
    }

    fn sentinel() -> Self {
        Self::insertion(0, Vec::new())
    }

    /// Number of units this edit touched.
    #[must_use]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Check if the span is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Offset just past the affected span.
    #[must_use]
    pub fn end(&self) -> usize {
        self.position + self.span.len()
    }
}

/// History configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HistoryOptions {
    /// Maximum number of undoable events kept. `None` keeps everything.
    pub max_depth: Option<usize>,
}

/// Branch-truncating edit log.
///
/// `events[0]` is the sentinel and is never replayed or removed. `current`
/// always indexes a live event; everything after it is the redo branch.
#[derive(Clone, Debug)]
pub struct EditHistory {
    events: Vec<EditEvent>,
    current: usize,
    max_depth: Option<usize>,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EditHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(HistoryOptions::default())
    }

    /// Create an empty history with custom options.
    #[must_use]
    pub fn with_options(options: HistoryOptions) -> Self {
        Self {
            events: vec![EditEvent::sentinel()],
            current: 0,
            max_depth: options.max_depth,
        }
    }

    /// Events behind `current`.
    #[must_use]
    pub fn undo_count(&self) -> usize {
        self.current
    }

    /// Events ahead of `current`.
    #[must_use]
    pub fn redo_count(&self) -> usize {
        self.events.len() - 1 - self.current
    }

    /// Check if undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.current > 0
    }

    /// Check if redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.current + 1 < self.events.len()
    }

    /// Configured depth limit.
    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Recorded events in chronological order, sentinel excluded.
    #[must_use]
    pub fn events(&self) -> &[EditEvent] {
        &self.events[1..]
    }

    /// Append an event after `current`, discarding the redo branch.
    ///
    /// Returns how many redo events were dropped.
    pub fn push(&mut self, event: EditEvent) -> usize {
        let dropped = self.redo_count();
        if dropped > 0 {
            self.events.truncate(self.current + 1);
            emit_log(
                LogLevel::Debug,
                &format!("discarded {dropped} redo events"),
            );
            emit_event("history.truncate", &format!("dropped={dropped}"));
        }

        self.events.push(event);
        self.current += 1;
        self.enforce_depth();
        dropped
    }

    /// The event an undo would reverse.
    #[must_use]
    pub fn undo_target(&self) -> Option<&EditEvent> {
        self.can_undo().then(|| &self.events[self.current])
    }

    /// The event a redo would replay.
    #[must_use]
    pub fn redo_target(&self) -> Option<&EditEvent> {
        self.events.get(self.current + 1)
    }

    /// Step `current` back once the undo target has been reversed.
    pub fn commit_undo(&mut self) {
        if self.can_undo() {
            self.current -= 1;
        }
    }

    /// Step `current` forward once the redo target has been replayed.
    pub fn commit_redo(&mut self) {
        if self.can_redo() {
            self.current += 1;
        }
    }

    /// Drop every event, keeping only the sentinel.
    pub fn clear(&mut self) {
        self.events.truncate(1);
        self.current = 0;
    }

    fn enforce_depth(&mut self) {
        let Some(max_depth) = self.max_depth else {
            return;
        };
        if self.current > max_depth {
            let excess = self.current - max_depth;
            self.events.drain(1..=excess);
            self.current -= excess;
        }
    }
}
