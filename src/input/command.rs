//! Editing commands and the default key bindings.

use crate::input::keyboard::{KeyCode, KeyEvent};

/// One editing or navigation command.
///
/// Motions and deletions carry the Shift/Ctrl state they were issued with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Insert a single unit, replacing any selection.
    TypeChar(u8),
    /// Insert a run of units, replacing any selection.
    Paste(Vec<u8>),
    MoveLeft { shift: bool, ctrl: bool },
    MoveRight { shift: bool, ctrl: bool },
    MoveUp { shift: bool, ctrl: bool },
    MoveDown { shift: bool, ctrl: bool },
    Home { shift: bool, ctrl: bool },
    End { shift: bool, ctrl: bool },
    Backspace { shift: bool, ctrl: bool },
    Delete { shift: bool, ctrl: bool },
    SelectAll,
    Undo,
    Redo,
}

impl Command {
    /// A paste of `text`.
    #[must_use]
    pub fn paste(text: &str) -> Self {
        Self::Paste(text.as_bytes().to_vec())
    }

    /// Check if this command can change the text.
    #[must_use]
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::TypeChar(_)
                | Self::Paste(_)
                | Self::Backspace { .. }
                | Self::Delete { .. }
                | Self::Undo
                | Self::Redo
        )
    }

    /// Translate a key event using the default bindings.
    ///
    /// - arrows, Home, End, Backspace, Delete pass Shift/Ctrl through
    /// - Enter types `\n`, Tab types `\t`
    /// - Ctrl+A selects all, Ctrl+Z undoes, Ctrl+Shift+Z and Ctrl+Y redo
    /// - printable ASCII types itself
    ///
    /// Everything else (Escape, Alt/Super chords, non-ASCII characters) has
    /// no binding.
    #[must_use]
    pub fn from_key(event: &KeyEvent) -> Option<Self> {
        let shift = event.shift();
        let ctrl = event.ctrl();

        match event.code {
            KeyCode::Left => Some(Self::MoveLeft { shift, ctrl }),
            KeyCode::Right => Some(Self::MoveRight { shift, ctrl }),
            KeyCode::Up => Some(Self::MoveUp { shift, ctrl }),
            KeyCode::Down => Some(Self::MoveDown { shift, ctrl }),
            KeyCode::Home => Some(Self::Home { shift, ctrl }),
            KeyCode::End => Some(Self::End { shift, ctrl }),
            KeyCode::Backspace => Some(Self::Backspace { shift, ctrl }),
            KeyCode::Delete => Some(Self::Delete { shift, ctrl }),
            _ if event.is_shortcut() => None,
            KeyCode::Char(c) if ctrl => Self::from_ctrl_char(c, shift),
            code => code.typed_unit().map(Self::TypeChar),
        }
    }

    fn from_ctrl_char(c: char, shift: bool) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'z' if shift => Some(Self::Redo),
            'z' => Some(Self::Undo),
            'y' => Some(Self::Redo),
            'a' => Some(Self::SelectAll),
            _ => None,
        }
    }
}
