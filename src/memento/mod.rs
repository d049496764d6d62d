//! Memento: capture state before a change, hand it back on undo.

mod document;
mod game;
mod history;

pub use document::{Document, DocumentSnapshot, Editor};
pub use game::{Checkpoints, Game, GameSnapshot};
pub use history::{History, Originator};
