// Unit tests for the transcript buffer
//
// These tests verify that incremental recognition results fold into the
// buffer correctly: finalized text accumulates, the interim tail is
// replaced, and the event cursor prevents reprocessing.

use voice_notes::{RecognitionFragment, ResultEvent, TranscriptBuffer};

fn fragment(text: &str, is_final: bool) -> RecognitionFragment {
    RecognitionFragment {
        transcript: text.to_string(),
        is_final,
    }
}

#[test]
fn test_interim_then_final() {
    let mut buffer = TranscriptBuffer::new();

    // First event: one interim fragment
    buffer.absorb(&ResultEvent {
        result_index: 0,
        results: vec![fragment("hello ", false)],
    });

    assert_eq!(buffer.interim_text(), "hello ");
    assert_eq!(buffer.final_text(), "");

    // Second event: the engine finalized the fragment
    buffer.absorb(&ResultEvent {
        result_index: 0,
        results: vec![fragment("hello world", true)],
    });

    assert_eq!(buffer.final_text(), "hello world ");
    assert_eq!(buffer.interim_text(), "");
}

#[test]
fn test_cursor_skips_absorbed_fragments() {
    let mut buffer = TranscriptBuffer::new();

    buffer.absorb(&ResultEvent {
        result_index: 0,
        results: vec![fragment("first", true)],
    });

    // The cumulative set still contains the finalized fragment, but the
    // cursor points past it; it must not be appended twice.
    buffer.absorb(&ResultEvent {
        result_index: 1,
        results: vec![fragment("first", true), fragment("second", true)],
    });

    assert_eq!(buffer.final_text(), "first second ");
}

#[test]
fn test_interim_is_replaced_not_accumulated() {
    let mut buffer = TranscriptBuffer::new();

    buffer.absorb(&ResultEvent {
        result_index: 0,
        results: vec![fragment("he", false)],
    });
    buffer.absorb(&ResultEvent {
        result_index: 0,
        results: vec![fragment("hello", false)],
    });

    assert_eq!(buffer.interim_text(), "hello");
    assert_eq!(buffer.final_text(), "");
}

#[test]
fn test_multiple_interim_fragments_concatenate() {
    let mut buffer = TranscriptBuffer::new();

    buffer.absorb(&ResultEvent {
        result_index: 0,
        results: vec![fragment("one ", false), fragment("two", false)],
    });

    assert_eq!(buffer.interim_text(), "one two");
}

#[test]
fn test_final_fragments_are_space_joined() {
    let mut buffer = TranscriptBuffer::new();

    buffer.absorb(&ResultEvent {
        result_index: 0,
        results: vec![fragment("buy milk", true)],
    });
    buffer.absorb(&ResultEvent {
        result_index: 1,
        results: vec![fragment("buy milk", true), fragment("and bread", true)],
    });

    assert_eq!(buffer.final_text(), "buy milk and bread ");
}

#[test]
fn test_committed_text_is_trimmed() {
    let mut buffer = TranscriptBuffer::new();

    buffer.absorb(&ResultEvent {
        result_index: 0,
        results: vec![fragment("  remember this  ", true)],
    });

    assert_eq!(buffer.committed_text().as_deref(), Some("remember this"));
}

#[test]
fn test_whitespace_only_commits_nothing() {
    let mut buffer = TranscriptBuffer::new();

    buffer.absorb(&ResultEvent {
        result_index: 0,
        results: vec![fragment("   ", true)],
    });

    assert_eq!(buffer.committed_text(), None);
}

#[test]
fn test_interim_text_is_never_committed() {
    let mut buffer = TranscriptBuffer::new();

    buffer.absorb(&ResultEvent {
        result_index: 0,
        results: vec![fragment("provisional words", false)],
    });

    assert_eq!(buffer.committed_text(), None);
}

#[test]
fn test_clear_resets_both_sides() {
    let mut buffer = TranscriptBuffer::new();

    buffer.absorb(&ResultEvent {
        result_index: 0,
        results: vec![fragment("done", true), fragment("more", false)],
    });
    assert!(!buffer.is_empty());

    buffer.clear();

    assert!(buffer.is_empty());
    assert_eq!(buffer.final_text(), "");
    assert_eq!(buffer.interim_text(), "");
}
