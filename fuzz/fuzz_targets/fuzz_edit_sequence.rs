//! Fuzz target for key-driven editing sessions.
//!
//! Replays arbitrary key sequences against an [`EditorSession`] and checks
//! that the selection stays inside the text and that undoing everything
//! returns to the starting document.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use txtcore::{EditorSession, KeyCode, KeyEvent, KeyModifiers};

#[derive(Arbitrary, Debug)]
struct Session {
    /// Starting document.
    initial: String,
    /// Keys to press.
    keys: Vec<Key>,
}

#[derive(Arbitrary, Debug)]
struct Key {
    code: Code,
    shift: bool,
    ctrl: bool,
}

#[derive(Arbitrary, Debug)]
enum Code {
    Char(char),
    Enter,
    Tab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

impl Key {
    fn event(&self) -> KeyEvent {
        let code = match self.code {
            Code::Char(c) => KeyCode::Char(c),
            Code::Enter => KeyCode::Enter,
            Code::Tab => KeyCode::Tab,
            Code::Backspace => KeyCode::Backspace,
            Code::Delete => KeyCode::Delete,
            Code::Left => KeyCode::Left,
            Code::Right => KeyCode::Right,
            Code::Up => KeyCode::Up,
            Code::Down => KeyCode::Down,
            Code::Home => KeyCode::Home,
            Code::End => KeyCode::End,
        };
        let mut modifiers = KeyModifiers::empty();
        modifiers.set(KeyModifiers::SHIFT, self.shift);
        modifiers.set(KeyModifiers::CTRL, self.ctrl);
        KeyEvent::new(code, modifiers)
    }
}

fuzz_target!(|input: Session| {
    let initial: String = input.initial.chars().filter(char::is_ascii).take(512).collect();
    let mut session = EditorSession::with_text(&initial);

    for key in input.keys.iter().take(256) {
        session
            .handle_key(&key.event())
            .expect("commands on a live session never go out of range");

        let view = session.view();
        let range = view.selection();
        assert!(range.end <= view.len);
        assert_eq!(view.text.len(), view.len + 1);
        assert_eq!(view.text[view.len], 0);
    }

    while session.undo().expect("undo replays recorded spans") {}
    assert_eq!(session.contents(), initial.as_bytes());
});
