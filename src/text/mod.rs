//! Text storage, edit history and selection.
//!
//! Layers, leaves first:
//!
//! - [`TextStore`]: contiguous units with insert/delete and line scans
//! - [`EditHistory`]: reversible edit events with a single current pointer
//! - [`TextBuffer`]: store + history, the only way to change text
//! - [`Selection`]: anchor/caret navigation and selection-aware editing
//!
//! # Examples
//!
//! ```
//! use txtcore::text::{Selection, TextBuffer};
//!
//! let mut buffer = TextBuffer::with_text("hello");
//! let mut selection = Selection::with_range(4, 2);
//!
//! // Typing replaces the selection, whichever way it was made.
//! selection.add_text(&mut buffer, b"rr").unwrap();
//! assert_eq!(buffer.to_string(), "herro");
//! assert_eq!(selection.caret(), 4);
//!
//! // The replacement is two events: the removal and the insertion.
//! assert!(buffer.undo().unwrap());
//! assert!(buffer.undo().unwrap());
//! assert_eq!(buffer.to_string(), "hello");
//! ```

mod buffer;
mod history;
mod selection;
mod store;

pub use buffer::TextBuffer;
pub use history::{EditEvent, EditHistory, EditKind, HistoryOptions};
pub use selection::Selection;
pub use store::{DEFAULT_BLOCK_SIZE, StoreOptions, TextStore};
