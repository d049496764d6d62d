//! Flyweight: share immutable instances keyed by their intrinsic attributes.

mod book;
mod cache;
mod font;
mod glyph;

pub use book::{Book, BorrowRecord, Library, MemoryReport};
pub use cache::{is_same_instance, CacheStats, FlyweightCache};
pub use font::{ConcreteFont, Font, FontFactory};
pub use glyph::{
    DocumentStats, Element, Glyph, GlyphFactory, GlyphKey, NamedStyle, Style, StyleDistribution,
    TextDocument, LINE_WIDTH,
};
