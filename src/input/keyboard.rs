//! Key presses as the platform layer reports them.
//!
//! Only the keys the editor binds are modelled. A [`KeyEvent`] is a key plus
//! the modifiers held; what it does is decided by
//! [`Command::from_key`](crate::Command::from_key).

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during a press.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        /// Shift extends the selection.
        const SHIFT = 0b0000_0001;
        /// Alt/Option.
        const ALT = 0b0000_0010;
        /// Control selects document-wide motions and shortcuts.
        const CTRL = 0b0000_0100;
        /// Super/Command/Windows.
        const SUPER = 0b0000_1000;
        /// Modifiers that turn a character into a host shortcut.
        const SHORTCUT = Self::ALT.bits() | Self::SUPER.bits();
    }
}

/// A key the editor reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Backspace,
    Delete,
    Enter,
    Tab,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Esc,
    /// A character key (includes space).
    Char(char),
}

impl KeyCode {
    /// The text unit this key types on its own, if any.
    ///
    /// Enter types `\n`, Tab types `\t`, printable ASCII types itself.
    #[must_use]
    pub fn typed_unit(self) -> Option<u8> {
        match self {
            Self::Enter => Some(b'\n'),
            Self::Tab => Some(b'\t'),
            Self::Char(c) if c.is_ascii() && !c.is_ascii_control() => u8::try_from(c).ok(),
            _ => None,
        }
    }
}

/// One key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// A press with no modifiers.
    #[must_use]
    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    /// A plain character press.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    /// `code` with Ctrl held.
    #[must_use]
    pub fn with_ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CTRL)
    }

    /// `code` with Shift held.
    #[must_use]
    pub fn with_shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SHIFT)
    }

    #[must_use]
    pub fn ctrl(&self) -> bool {
        self.modifiers.contains(KeyModifiers::CTRL)
    }

    /// Check if Alt or Super is held, making this a host shortcut.
    #[must_use]
    pub fn is_shortcut(&self) -> bool {
        self.modifiers.intersects(KeyModifiers::SHORTCUT)
    }
}
