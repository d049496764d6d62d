// Design Patterns: Flyweight and Memento
// Shared-instance caching and snapshot-based undo history.

//! # Flyweight & Memento
//!
//! ## Flyweight
//! - [`flyweight::FlyweightCache`]: get-or-create cache handing out shared `Arc` handles
//! - [`flyweight::Library`]: books shared by title, borrow records carry the extrinsic state
//! - [`flyweight::TextDocument`]: glyphs shared by symbol + style
//! - [`flyweight::FontFactory`]: fonts shared by style
//!
//! ## Memento
//! - [`memento::History`]: LIFO stack of snapshots
//! - [`memento::Editor`]: snapshot before every write, undo/redo
//! - [`memento::Game`]: checkpoints kept by index
//!
//! Run the demos with:
//! ```bash
//! cargo run --bin flyweight_library
//! cargo run --bin flyweight_text_editor
//! cargo run --bin flyweight_fonts
//! cargo run --bin memento_editor
//! cargo run --bin memento_game
//! ```

pub mod config;
pub mod error;
pub mod flyweight;
pub mod memento;
pub mod telemetry;

pub use config::Config;
pub use error::{PatternError, Result};
