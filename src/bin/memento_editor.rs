// Memento: undo/redo in a text editor
// The editor snapshots the document before every write.

use colored::Colorize;
use design_patterns::memento::{Document, Editor, History, Originator};
use design_patterns::{telemetry, Config};
use std::path::PathBuf;
use std::process::ExitCode;

fn editor_example(config: &Config) {
    let mut editor = Editor::with_history(History::from_limit(config.history.limit));

    editor.write("Hello, ");
    editor.write("this is Memento pattern. ");
    println!("After writes: {:?}", editor.content());

    editor.undo();
    println!("After undo:   {:?}", editor.content());

    editor.redo();
    println!("After redo:   {:?}", editor.content());

    editor.undo();
    editor.write("This is an example implemented in Rust.");
    println!("New branch:   {:?}", editor.content());
    println!("Can redo:     {}", editor.can_redo());
}

fn empty_undo_example() {
    let mut editor = Editor::new();
    editor.write("Hello, ");
    editor.write("World!");

    for _ in 0..3 {
        let changed = editor.undo();
        let marker = if changed { "undone".green() } else { "nothing to undo".yellow() };
        println!("  {} -> {:?}", marker, editor.content());
    }
}

fn manual_history_example() {
    let mut doc = Document::new();
    let mut history = History::new();

    for text in ["one ", "two ", "three"] {
        history.push(doc.capture());
        doc.write(text);
    }
    println!("Document: {:?} ({} snapshots)", doc.content(), history.len());

    while let Some(snapshot) = history.pop() {
        doc.restore(&snapshot);
        println!("  restored {:?}", doc.content());
    }
}

fn main() -> ExitCode {
    telemetry::init();

    let path = std::env::args().nth(1).map(PathBuf::from);
    let config = match Config::load_or_default(path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", "Memento: Text Editor".bold());
    println!("====================\n");

    println!("=== Editor with Undo/Redo ===");
    editor_example(&config);
    println!();

    println!("=== Undo Past the Beginning ===");
    empty_undo_example();
    println!();

    println!("=== Document + History by Hand ===");
    manual_history_example();

    ExitCode::SUCCESS
}
