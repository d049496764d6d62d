use super::cache::FlyweightCache;
use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

pub const LINE_WIDTH: usize = 80;
const CELL_WIDTH: usize = 10;
const LINE_HEIGHT: usize = 20;

/// Intrinsic typography shared by many glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Style {
    pub font: String,
    pub size: u32,
    pub color: String,
}

impl Style {
    pub fn new(font: impl Into<String>, size: u32, color: impl Into<String>) -> Self {
        Style {
            font: font.into(),
            size,
            color: color.into(),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}pt {}", self.font, self.size, self.color)
    }
}

/// Cache key for a glyph: the symbol plus its full style.
///
/// Compared field by field, so `(size 1, "2Red")` and `(size 12, "Red")`
/// never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlyphKey {
    pub symbol: char,
    pub style: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedStyle {
    Title,
    Heading,
    Body,
    Caption,
    Highlight,
}

impl NamedStyle {
    /// Case-insensitive; anything unrecognised is body text.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "title" => NamedStyle::Title,
            "heading" => NamedStyle::Heading,
            "caption" => NamedStyle::Caption,
            "highlight" => NamedStyle::Highlight,
            _ => NamedStyle::Body,
        }
    }

    pub fn style(self) -> Style {
        match self {
            NamedStyle::Title => Style::new("Arial", 18, "Black"),
            NamedStyle::Heading => Style::new("Times New Roman", 14, "Blue"),
            NamedStyle::Body => Style::new("Arial", 12, "Black"),
            NamedStyle::Caption => Style::new("Arial", 10, "Gray"),
            NamedStyle::Highlight => Style::new("Arial", 12, "Red"),
        }
    }
}

/// A character flyweight. Position and rendering context are passed in.
#[derive(Debug, PartialEq, Eq)]
pub struct Glyph {
    symbol: char,
    style: Style,
}

impl Glyph {
    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn render(&self, x: usize, y: usize, context: &str) -> String {
        format!(
            "'{}' at ({}, {}) | {} | {}",
            self.symbol, x, y, self.style, context
        )
    }

    /// Point size after zoom, truncated.
    pub fn scaled_size(&self, zoom: f64) -> u32 {
        (f64::from(self.style.size) * zoom) as u32
    }

    pub fn style_info(&self) -> String {
        format!("'{}': {}", self.symbol, self.style)
    }
}

/// Font, color and size histograms over the cached glyphs.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StyleDistribution {
    pub fonts: BTreeMap<String, usize>,
    pub colors: BTreeMap<String, usize>,
    pub sizes: BTreeMap<u32, usize>,
}

#[derive(Debug, Default)]
pub struct GlyphFactory {
    glyphs: FlyweightCache<GlyphKey, Glyph>,
}

impl GlyphFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        GlyphFactory {
            glyphs: FlyweightCache::with_capacity(capacity),
        }
    }

    pub fn glyph(&self, symbol: char, style: &Style) -> Arc<Glyph> {
        let key = GlyphKey {
            symbol,
            style: style.clone(),
        };
        self.glyphs.get_or_create(key, |key| Glyph {
            symbol: key.symbol,
            style: key.style.clone(),
        })
    }

    pub fn glyph_with_style(&self, symbol: char, style: NamedStyle) -> Arc<Glyph> {
        self.glyph(symbol, &style.style())
    }

    pub fn count(&self) -> usize {
        self.glyphs.count()
    }

    pub fn cache(&self) -> &FlyweightCache<GlyphKey, Glyph> {
        &self.glyphs
    }

    /// Distinct glyphs cached for this font and size, any symbol or color.
    pub fn count_with(&self, font: &str, size: u32) -> usize {
        let mut count = 0;
        self.glyphs.for_each(|key, _| {
            if key.style.font == font && key.style.size == size {
                count += 1;
            }
        });
        count
    }

    pub fn distribution(&self) -> StyleDistribution {
        let mut dist = StyleDistribution::default();
        self.glyphs.for_each(|_, glyph| {
            *dist.fonts.entry(glyph.style.font.clone()).or_default() += 1;
            *dist.colors.entry(glyph.style.color.clone()).or_default() += 1;
            *dist.sizes.entry(glyph.style.size).or_default() += 1;
        });
        dist
    }

    /// Drops oversized (> 20pt) and yellow glyphs. Returns how many went.
    pub fn optimize(&self) -> usize {
        self.glyphs
            .retain(|_, glyph| glyph.style.size <= 20 && glyph.style.color != "Yellow")
    }

    pub fn clear(&self) {
        self.glyphs.clear();
    }

    /// Cached glyphs ordered by style then symbol, for display.
    pub fn listing(&self) -> Vec<Arc<Glyph>> {
        self.glyphs
            .snapshot()
            .into_iter()
            .map(|(_, glyph)| glyph)
            .sorted_by(|a, b| (&a.style, a.symbol).cmp(&(&b.style, b.symbol)))
            .collect()
    }
}

/// One placed glyph: the shared flyweight plus where it sits.
#[derive(Debug, Clone)]
pub struct Element {
    pub glyph: Arc<Glyph>,
    pub position: usize,
    pub line: usize,
    pub column: usize,
}

impl Element {
    fn at(glyph: Arc<Glyph>, position: usize) -> Self {
        Element {
            glyph,
            position,
            line: position / LINE_WIDTH,
            column: position % LINE_WIDTH,
        }
    }

    fn render(&self, context: &str) -> String {
        self.glyph
            .render(self.column * CELL_WIDTH, self.line * LINE_HEIGHT, context)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentStats {
    pub characters: usize,
    pub flyweights: usize,
    /// `flyweights / characters`; lower is better.
    pub efficiency: Option<f64>,
    pub saved: usize,
    pub saved_percent: Option<f64>,
}

/// A document whose characters are shared glyphs.
///
/// Spaces added through [`TextDocument::add_text`] occupy a position but no
/// glyph.
#[derive(Debug)]
pub struct TextDocument {
    title: String,
    factory: Arc<GlyphFactory>,
    elements: Vec<Option<Element>>,
}

impl TextDocument {
    pub fn new(title: impl Into<String>, factory: Arc<GlyphFactory>) -> Self {
        TextDocument {
            title: title.into(),
            factory,
            elements: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[Option<Element>] {
        &self.elements
    }

    pub fn add_char(&mut self, symbol: char, style: &Style) -> Element {
        let glyph = self.factory.glyph(symbol, style);
        self.place(glyph)
    }

    pub fn add_char_with_style(&mut self, symbol: char, style: NamedStyle) -> Element {
        let glyph = self.factory.glyph_with_style(symbol, style);
        self.place(glyph)
    }

    pub fn add_text(&mut self, text: &str, style: &Style) {
        for symbol in text.chars() {
            if symbol == ' ' {
                self.elements.push(None);
            } else {
                self.add_char(symbol, style);
            }
        }
    }

    fn place(&mut self, glyph: Arc<Glyph>) -> Element {
        let element = Element::at(glyph, self.elements.len());
        self.elements.push(Some(element.clone()));
        element
    }

    pub fn render(&self) -> Vec<String> {
        self.elements
            .iter()
            .flatten()
            .map(|element| element.render(&self.title))
            .collect()
    }

    /// Renders positions `start..=end`, clamped to the document.
    pub fn render_range(&self, start: usize, end: usize) -> Vec<String> {
        if self.elements.is_empty() || start > end {
            return Vec::new();
        }
        let end = end.min(self.elements.len() - 1);
        let context = format!("{} (partial)", self.title);
        self.elements
            .get(start..=end)
            .unwrap_or_default()
            .iter()
            .flatten()
            .map(|element| element.render(&context))
            .collect()
    }

    pub fn positions_of(&self, symbol: char) -> Vec<&Element> {
        self.elements
            .iter()
            .flatten()
            .filter(|element| element.glyph.symbol() == symbol)
            .collect()
    }

    pub fn text(&self) -> String {
        self.elements
            .iter()
            .map(|element| element.as_ref().map_or(' ', |e| e.glyph.symbol()))
            .collect()
    }

    /// Measured against the factory, which may be shared with other documents.
    pub fn statistics(&self) -> DocumentStats {
        let characters = self.elements.len();
        let flyweights = self.factory.count();
        let saved = characters.saturating_sub(flyweights);
        let nonempty = characters > 0;
        DocumentStats {
            characters,
            flyweights,
            efficiency: nonempty.then(|| flyweights as f64 / characters as f64),
            saved,
            saved_percent: nonempty.then(|| saved as f64 / characters as f64 * 100.0),
        }
    }
}
