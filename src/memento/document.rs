use super::history::{History, Originator};

/// Saved content of a [`Document`]. Opaque outside this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
    content: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Document {
    content: String,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, text: &str) {
        self.content.push_str(text);
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Originator for Document {
    type Snapshot = DocumentSnapshot;

    fn capture(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            content: self.content.clone(),
        }
    }

    fn restore(&mut self, snapshot: &DocumentSnapshot) {
        self.content.clone_from(&snapshot.content);
    }
}

/// Takes a snapshot before every write so each write can be undone.
#[derive(Debug, Default)]
pub struct Editor {
    document: Document,
    undo: History<DocumentSnapshot>,
    redo: Vec<DocumentSnapshot>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(history: History<DocumentSnapshot>) -> Self {
        Editor {
            document: Document::new(),
            undo: history,
            redo: Vec::new(),
        }
    }

    pub fn write(&mut self, text: &str) {
        self.undo.push(self.document.capture());
        self.redo.clear();
        self.document.write(text);
    }

    /// Rolls back the last write. Returns `false` (and changes nothing) when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.undo.pop() else {
            tracing::debug!("nothing to undo");
            return false;
        };
        self.redo.push(self.document.capture());
        self.document.restore(&snapshot);
        tracing::debug!(undo_depth = self.undo.len(), "undo");
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.redo.pop() else {
            tracing::debug!("nothing to redo");
            return false;
        };
        self.undo.push(self.document.capture());
        self.document.restore(&snapshot);
        tracing::debug!(redo_depth = self.redo.len(), "redo");
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn content(&self) -> &str {
        self.document.content()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_restore_round_trip() {
        let mut doc = Document::new();
        doc.write("draft");
        let saved = doc.capture();

        doc.write(" v2");
        assert_eq!(doc.content(), "draft v2");

        doc.restore(&saved);
        assert_eq!(doc.content(), "draft");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut doc = Document::new();
        doc.write("a");
        let saved = doc.capture();
        doc.write("b");

        let mut other = Document::new();
        other.restore(&saved);
        assert_eq!(other.content(), "a");
    }

    #[test]
    fn test_restore_overwrites() {
        let mut doc = Document::new();
        let empty = doc.capture();
        doc.write("something long");
        doc.restore(&empty);
        assert_eq!(doc.content(), "");
    }

    #[test]
    fn test_editor_undo_sequence() {
        let mut editor = Editor::new();
        editor.write("Hello, ");
        editor.write("World!");
        assert_eq!(editor.content(), "Hello, World!");

        assert!(editor.undo());
        assert_eq!(editor.content(), "Hello, ");
        assert!(editor.undo());
        assert_eq!(editor.content(), "");
        assert!(!editor.undo());
        assert_eq!(editor.content(), "");
    }

    #[test]
    fn test_redo() {
        let mut editor = Editor::new();
        editor.write("a");
        editor.write("b");
        editor.undo();
        editor.undo();
        assert!(editor.can_redo());

        assert!(editor.redo());
        assert_eq!(editor.content(), "a");
        assert!(editor.redo());
        assert_eq!(editor.content(), "ab");
        assert!(!editor.redo());
    }

    #[test]
    fn test_write_clears_redo() {
        let mut editor = Editor::new();
        editor.write("Hello, ");
        editor.write("this is Memento pattern. ");
        editor.undo();
        editor.write("This is an example.");

        assert!(!editor.can_redo());
        assert_eq!(editor.content(), "Hello, This is an example.");
    }

    #[test]
    fn test_limited_history() {
        let mut editor = Editor::with_history(History::with_limit(1));
        editor.write("a");
        editor.write("b");

        assert!(editor.undo());
        assert_eq!(editor.content(), "a");
        assert!(!editor.can_undo());
        assert!(!editor.undo());
        assert_eq!(editor.content(), "a");
    }
}
