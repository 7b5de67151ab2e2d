//! Edge case tests for buffer, history and selection operations.
//!
//! Covers boundary offsets, rejected spans, history limits and the worked
//! editing scenarios the public API is expected to reproduce exactly.

use txtcore::{
    EditKind, Error, HistoryOptions, Selection, StoreOptions, TextBuffer, TextStore,
};

// ============================================================================
// Boundary Conditions
// ============================================================================

mod boundary_conditions {
    use super::*;

    #[test]
    fn empty_buffer_is_terminated() {
        let buffer = TextBuffer::new();
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.terminated(), b"\0");
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.store().capacity(), 16);
    }

    #[test]
    fn zero_block_size_still_grows() {
        let mut store = TextStore::with_options(StoreOptions { block_size: 0 });
        assert_eq!(store.block_size(), 1);
        store.insert(0, b"abc").unwrap();
        assert_eq!(store.contents(), b"abc");
        assert_eq!(store.capacity(), 4);
    }

    #[test]
    fn insert_at_both_ends() {
        let mut buffer = TextBuffer::with_text("mid");
        buffer.add_text(0, 0, b"<").unwrap();
        buffer.add_text(buffer.len(), 0, b">").unwrap();
        assert_eq!(buffer.to_string(), "<mid>");
    }

    #[test]
    fn remove_everything() {
        let mut buffer = TextBuffer::with_text("gone");
        buffer.remove_text(4, -4).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.terminated(), b"\0");
        buffer.undo().unwrap();
        assert_eq!(buffer.to_string(), "gone");
    }

    #[test]
    fn capacity_survives_shrinking() {
        let mut buffer = TextBuffer::new();
        buffer.add_text(0, 0, &[b'x'; 40]).unwrap();
        let grown = buffer.store().capacity();
        assert_eq!(grown, 48);
        buffer.remove_text(0, 40).unwrap();
        assert_eq!(buffer.store().capacity(), grown);
    }

    #[test]
    fn exact_block_fill_leaves_room_for_terminator() {
        let mut store = TextStore::new();
        store.insert(0, &[b'a'; 16]).unwrap();
        assert_eq!(store.len(), 16);
        assert_eq!(store.capacity(), 32);
        assert_eq!(store.terminated().last(), Some(&0));
    }
}

// ============================================================================
// Rejected Spans
// ============================================================================

mod rejected_spans {
    use super::*;

    fn assert_untouched(buffer: &TextBuffer, text: &str, undo_count: usize) {
        assert_eq!(buffer.to_string(), text);
        assert_eq!(buffer.undo_count(), undo_count);
    }

    #[test]
    fn insert_past_end() {
        let mut buffer = TextBuffer::with_text("abc");
        let err = buffer.add_text(4, 0, b"x").unwrap_err();
        assert!(matches!(err, Error::OutOfRange { offset: 4, len: 3 }));
        assert_untouched(&buffer, "abc", 0);
    }

    #[test]
    fn selection_past_end() {
        let mut buffer = TextBuffer::with_text("abc");
        let err = buffer.add_text(1, 3, b"x").unwrap_err();
        assert!(matches!(err, Error::SpanOutOfRange { .. }));
        assert_untouched(&buffer, "abc", 0);
    }

    #[test]
    fn backward_selection_before_start() {
        let mut buffer = TextBuffer::with_text("abc");
        assert!(buffer.add_text(1, -2, b"x").unwrap_err().is_range());
        assert!(buffer.remove_text(2, -3).unwrap_err().is_range());
        assert_untouched(&buffer, "abc", 0);
    }

    #[test]
    fn remove_past_end() {
        let mut buffer = TextBuffer::with_text("abc");
        assert!(buffer.remove_text(3, 1).unwrap_err().is_range());
        assert!(buffer.remove_text(9, 0).unwrap_err().is_range());
        assert_untouched(&buffer, "abc", 0);
    }

    #[test]
    fn scans_past_end() {
        let buffer = TextBuffer::with_text("ab\ncd");
        assert!(buffer.find_line_start(6).is_err());
        assert!(buffer.find_line_end(6).is_err());
        assert!(buffer.find_next_line_start(5).is_err());
        assert_eq!(buffer.find_line_start(5).unwrap(), 3);
        assert_eq!(buffer.find_line_end(5).unwrap(), 5);
    }

    #[test]
    fn store_span_bounds() {
        let store = TextStore::with_text(b"hello", StoreOptions::default());
        assert_eq!(store.span(1, 3).unwrap(), b"ell");
        assert_eq!(store.span(5, 0).unwrap(), b"");
        assert!(store.span(3, 3).is_err());
        assert!(store.span(6, 0).is_err());
    }
}

// ============================================================================
// Line Scans
// ============================================================================

mod line_scans {
    use super::*;

    #[test]
    fn worked_example() {
        let buffer = TextBuffer::with_text("hello\ntest\nbla");
        assert_eq!(buffer.find_line_start(7).unwrap(), 6);
        assert_eq!(buffer.find_next_line_start(7).unwrap(), 11);
        assert_eq!(buffer.find_line_start(6).unwrap(), 6);
        assert_eq!(buffer.find_line_start(5).unwrap(), 0);
        assert_eq!(buffer.find_next_line_start(11).unwrap(), 14);
        assert_eq!(buffer.line_count(), 3);
    }

    #[test]
    fn newline_at_offset_belongs_to_its_line() {
        let buffer = TextBuffer::with_text("ab\n\ncd");
        assert_eq!(buffer.find_line_start(2).unwrap(), 0);
        assert_eq!(buffer.find_next_line_start(2).unwrap(), 3);
        assert_eq!(buffer.find_line_start(3).unwrap(), 3);
        assert_eq!(buffer.find_line_end(3).unwrap(), 3);
        assert_eq!(buffer.find_next_line_start(3).unwrap(), 4);
    }

    #[test]
    fn trailing_newline_opens_empty_line() {
        let buffer = TextBuffer::with_text("ab\n");
        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.find_line_start(3).unwrap(), 3);
        assert_eq!(buffer.find_next_line_start(2).unwrap(), 3);
    }
}

// ============================================================================
// History
// ============================================================================

mod history {
    use super::*;

    #[test]
    fn hello_helololo_scenario() {
        let mut buffer = TextBuffer::new();
        buffer.add_text(0, 0, b"hello").unwrap();
        buffer.add_text(3, 0, b"olo").unwrap();
        assert_eq!(buffer.to_string(), "helololo");
        assert_eq!(buffer.undo_count(), 2);
        assert_eq!(buffer.redo_count(), 0);

        assert!(buffer.undo().unwrap());
        assert_eq!(buffer.to_string(), "hello");
        assert!(buffer.undo().unwrap());
        assert_eq!(buffer.to_string(), "");
        assert!(!buffer.undo().unwrap());

        assert!(buffer.redo().unwrap());
        assert!(buffer.redo().unwrap());
        assert_eq!(buffer.to_string(), "helololo");
        assert!(!buffer.redo().unwrap());
    }

    #[test]
    fn replacement_is_two_events() {
        let mut buffer = TextBuffer::with_text("hello");
        buffer.add_text(2, 2, b"rr").unwrap();
        assert_eq!(buffer.to_string(), "herro");
        assert_eq!(buffer.undo_count(), 2);

        let kinds: Vec<EditKind> = buffer.history().events().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, [EditKind::Deletion, EditKind::Insertion]);

        buffer.undo().unwrap();
        assert_eq!(buffer.to_string(), "heo");
        buffer.undo().unwrap();
        assert_eq!(buffer.to_string(), "hello");
    }

    #[test]
    fn empty_edits_are_not_recorded() {
        let mut buffer = TextBuffer::with_text("abc");
        buffer.add_text(1, 0, b"").unwrap();
        buffer.remove_text(1, 0).unwrap();
        assert_eq!(buffer.undo_count(), 0);
    }

    #[test]
    fn selection_only_replacement_with_empty_text() {
        let mut buffer = TextBuffer::with_text("abc");
        buffer.add_text(0, 2, b"").unwrap();
        assert_eq!(buffer.to_string(), "c");
        assert_eq!(buffer.undo_count(), 1);
    }

    #[test]
    fn depth_limit_drops_oldest() {
        let options = HistoryOptions { max_depth: Some(3) };
        let mut buffer = TextBuffer::with_options(StoreOptions::default(), options);
        for (i, c) in b"abcde".iter().enumerate() {
            buffer.add_text(i, 0, &[*c]).unwrap();
        }
        assert_eq!(buffer.undo_count(), 3);
        while buffer.undo().unwrap() {}
        assert_eq!(buffer.to_string(), "ab");
    }

    #[test]
    fn clear_history_keeps_text() {
        let mut buffer = TextBuffer::new();
        buffer.add_text(0, 0, b"keep").unwrap();
        buffer.undo().unwrap();
        buffer.redo().unwrap();
        buffer.clear_history();
        assert!(!buffer.can_undo());
        assert!(!buffer.can_redo());
        assert_eq!(buffer.to_string(), "keep");
    }
}

// ============================================================================
// Selection Scenarios
// ============================================================================

mod selection_scenarios {
    use super::*;

    #[test]
    fn herro_from_forward_and_backward_selection() {
        for (anchor, caret) in [(2, 4), (4, 2)] {
            let mut buffer = TextBuffer::with_text("hello");
            let mut sel = Selection::with_range(anchor, caret);
            sel.add_text(&mut buffer, b"rr").unwrap();
            assert_eq!(buffer.to_string(), "herro");
            assert_eq!(sel, Selection::caret_at(4));
        }
    }

    #[test]
    fn backspace_then_delete_around_caret() {
        let mut buffer = TextBuffer::with_text("abcd");
        let mut sel = Selection::caret_at(2);
        assert!(sel.backspace(&mut buffer, false, false).unwrap());
        assert_eq!(buffer.to_string(), "acd");
        assert_eq!(sel.caret(), 1);
        assert!(sel.del(&mut buffer, false, false).unwrap());
        assert_eq!(buffer.to_string(), "ad");
        assert_eq!(sel.caret(), 1);
    }

    #[test]
    fn delete_backward_selection_reaching_end() {
        let mut buffer = TextBuffer::with_text("hello");
        let mut sel = Selection::with_range(5, 2);
        assert!(sel.del(&mut buffer, false, false).unwrap());
        assert_eq!(buffer.to_string(), "he");
        assert_eq!(sel, Selection::caret_at(2));
    }

    #[test]
    fn down_from_last_line_without_newline() {
        let buffer = TextBuffer::with_text("hello\nbla");
        let mut sel = Selection::caret_at(4);
        sel.move_down(&buffer, false, false).unwrap();
        assert_eq!(sel.caret(), 6 + 3);
        assert!(!sel.move_down(&buffer, false, false).unwrap());
    }

    #[test]
    fn select_all_on_empty_buffer() {
        let buffer = TextBuffer::new();
        let mut sel = Selection::new();
        assert!(!sel.select_all(&buffer));
        assert!(!sel.has_selection());
    }

    #[test]
    fn shift_home_end_extend() {
        let buffer = TextBuffer::with_text("one\ntwo three\n");
        let mut sel = Selection::caret_at(7);
        sel.end(&buffer, true, false).unwrap();
        assert_eq!(sel.selected_text(&buffer), b" three");
        sel.home(&buffer, true, false).unwrap();
        assert_eq!(sel.selected_text(&buffer), b"two");
        assert_eq!(sel.cursor(), 7);
        assert_eq!(sel.cursor_length(), -3);
    }
}
