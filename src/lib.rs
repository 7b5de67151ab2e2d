//! `txtcore` - in-memory text editing core
//!
//! A flat byte buffer with bounds-checked insert/delete, an event-replay
//! undo/redo history, and an anchor/caret selection with line-aware
//! navigation. Windowing, rendering, fonts and clipboard access live in the
//! host; they drive an [`EditorSession`] through commands and read it back
//! through [`EditorSession::view`].
//!
//! # Examples
//!
//! ```
//! use txtcore::{Command, EditorSession, KeyCode, KeyEvent};
//!
//! let mut session = EditorSession::new();
//! for c in "hello".chars() {
//!     session.handle_key(&KeyEvent::char(c)).unwrap();
//! }
//! session.apply(&Command::Backspace { shift: false, ctrl: false }).unwrap();
//! assert_eq!(session.text(), "hell");
//!
//! session.handle_key(&KeyEvent::with_ctrl(KeyCode::Char('z'))).unwrap();
//! assert_eq!(session.text(), "hello");
//! ```

// Crate-level lint configuration
#![allow(clippy::cast_possible_wrap)] // Offsets never exceed isize::MAX
#![allow(clippy::module_name_repetitions)] // Allow TextBuffer in text::buffer etc
#![allow(clippy::missing_errors_doc)] // Every fallible op returns crate::Error
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::fn_params_excessive_bools)] // shift/ctrl flags mirror the key state

pub mod error;
pub mod event;
pub mod input;
pub mod session;
pub mod text;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use event::{
    LogLevel, clear_event_callback, clear_log_callback, emit_event, emit_log, set_event_callback,
    set_log_callback,
};
pub use input::{Command, KeyCode, KeyEvent, KeyModifiers};
pub use session::{EditorOptions, EditorSession, View};
pub use text::{
    EditEvent, EditHistory, EditKind, HistoryOptions, Selection, StoreOptions, TextBuffer,
    TextStore,
};
