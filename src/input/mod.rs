//! Keyboard input and the commands it maps to.
//!
//! The platform layer turns raw key presses into [`KeyEvent`]s;
//! [`Command::from_key`] maps those onto the editing command surface that
//! [`EditorSession::apply`](crate::EditorSession::apply) executes.

mod command;
mod keyboard;

pub use command::Command;
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
