use design_patterns::memento::{Document, DocumentSnapshot, Editor, History, Originator};
use proptest::prelude::*;

#[test]
fn test_editor_scenario() {
    let mut doc = Document::new();
    let mut history = History::new();

    history.push(doc.capture());
    doc.write("Hello, ");
    history.push(doc.capture());
    doc.write("World!");
    assert_eq!(doc.content(), "Hello, World!");

    let undo = |doc: &mut Document, history: &mut History<_>| {
        if let Some(snapshot) = history.pop() {
            doc.restore(&snapshot);
        }
    };

    undo(&mut doc, &mut history);
    assert_eq!(doc.content(), "Hello, ");
    undo(&mut doc, &mut history);
    assert_eq!(doc.content(), "");
    undo(&mut doc, &mut history);
    assert_eq!(doc.content(), "");
}

#[test]
fn test_lifo_states() {
    let mut doc = Document::new();
    let mut history = History::new();
    let mut states = Vec::new();

    for text in ["S0", "S1", "S2"] {
        doc.write(text);
        states.push(doc.content().to_string());
        history.push(doc.capture());
    }

    let mut restored = Vec::new();
    while let Some(snapshot) = history.pop() {
        doc.restore(&snapshot);
        restored.push(doc.content().to_string());
    }

    states.reverse();
    assert_eq!(restored, states);
    assert_eq!(restored, vec!["S0S1S2", "S0S1", "S0"]);
}

#[test]
fn test_fresh_history_pop() {
    let mut history: History<DocumentSnapshot> = History::default();
    assert!(history.pop().is_none());
}

proptest! {
    #[test]
    fn prop_undo_walks_back_every_write(writes in prop::collection::vec("[a-z ]{0,8}", 0..20)) {
        let mut editor = Editor::new();
        let mut seen = vec![editor.content().to_string()];
        for text in &writes {
            editor.write(text);
            seen.push(editor.content().to_string());
        }

        seen.pop();
        while let Some(expected) = seen.pop() {
            prop_assert!(editor.undo());
            prop_assert_eq!(editor.content(), expected.as_str());
        }
        prop_assert!(!editor.undo());
        prop_assert_eq!(editor.content(), "");
    }

    #[test]
    fn prop_redo_replays_undone_writes(writes in prop::collection::vec("[a-z]{1,5}", 1..10), undos in 0usize..10) {
        let mut editor = Editor::new();
        for text in &writes {
            editor.write(text);
        }
        let full = editor.content().to_string();

        let undone = (0..undos).filter(|_| editor.undo()).count();
        prop_assert_eq!(undone, undos.min(writes.len()));
        for _ in 0..undone {
            prop_assert!(editor.redo());
        }
        prop_assert_eq!(editor.content(), full.as_str());
    }

    #[test]
    fn prop_limited_history_keeps_newest(values in prop::collection::vec(any::<u16>(), 0..50), limit in 1usize..8) {
        let mut history = History::with_limit(limit);
        for value in &values {
            history.push(*value);
        }

        let kept = values.len().min(limit);
        prop_assert_eq!(history.len(), kept);
        let expected: Vec<u16> = values.iter().rev().take(kept).copied().collect();
        let popped: Vec<u16> = std::iter::from_fn(|| history.pop()).collect();
        prop_assert_eq!(popped, expected);
    }
}
