//! Fuzz target for raw buffer edits with unchecked offsets.
//!
//! Out-of-range spans must be rejected without touching the text; accepted
//! edits must match a plain `Vec` model.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use txtcore::{HistoryOptions, StoreOptions, TextBuffer};

#[derive(Arbitrary, Debug)]
enum Edit {
    Add {
        position: u16,
        selection: i16,
        text: Vec<u8>,
    },
    Remove {
        position: u16,
        size: i16,
    },
    Undo,
    Redo,
}

#[derive(Arbitrary, Debug)]
struct Input {
    block_size: u8,
    edits: Vec<Edit>,
}

fn span(position: usize, size: isize, len: usize) -> Option<(usize, usize)> {
    if position > len {
        return None;
    }
    let start = position.checked_add_signed(size.min(0))?;
    let end = position.checked_add_signed(size.max(0))?;
    (end <= len).then_some((start, end))
}

fuzz_target!(|input: Input| {
    let store = StoreOptions {
        block_size: usize::from(input.block_size),
    };
    let mut buffer = TextBuffer::with_options(store, HistoryOptions::default());

    for edit in input.edits.iter().take(128) {
        let before = buffer.contents().to_vec();
        match edit {
            Edit::Add {
                position,
                selection,
                text,
            } => {
                let (position, selection) = (usize::from(*position), isize::from(*selection));
                let text = &text[..text.len().min(64)];
                let result = buffer.add_text(position, selection, text);
                match span(position, selection, before.len()) {
                    Some((start, end)) => {
                        assert!(result.is_ok());
                        let mut model = before;
                        model.splice(start..end, text.iter().copied());
                        assert_eq!(buffer.contents(), model.as_slice());
                    }
                    None => {
                        assert!(result.is_err());
                        assert_eq!(buffer.contents(), before.as_slice());
                    }
                }
            }
            Edit::Remove { position, size } => {
                let (position, size) = (usize::from(*position), isize::from(*size));
                let result = buffer.remove_text(position, size);
                match span(position, size, before.len()) {
                    Some((start, end)) => {
                        assert!(result.is_ok());
                        let mut model = before;
                        model.drain(start..end);
                        assert_eq!(buffer.contents(), model.as_slice());
                    }
                    None => {
                        assert!(result.is_err());
                        assert_eq!(buffer.contents(), before.as_slice());
                    }
                }
            }
            Edit::Undo => {
                let _ = buffer.undo();
            }
            Edit::Redo => {
                let _ = buffer.redo();
            }
        }
        assert_eq!(buffer.terminated().last(), Some(&0));
    }
});
