use super::cache::FlyweightCache;
use super::glyph::Style;
use std::sync::Arc;

pub trait Font: Send + Sync {
    fn apply(&self, text: &str) -> String;
    fn style(&self) -> &Style;
}

#[derive(Debug)]
pub struct ConcreteFont {
    style: Style,
}

impl Font for ConcreteFont {
    fn apply(&self, text: &str) -> String {
        format!(
            "Text: '{}' with Font: {}, Size: {}, Color: {}",
            text, self.style.font, self.style.size, self.style.color
        )
    }

    fn style(&self) -> &Style {
        &self.style
    }
}

/// Shares one [`ConcreteFont`] per (font, size, color).
#[derive(Debug, Default)]
pub struct FontFactory {
    fonts: FlyweightCache<Style, ConcreteFont>,
}

impl FontFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        FontFactory {
            fonts: FlyweightCache::with_capacity(capacity),
        }
    }

    pub fn font(&self, font: &str, size: u32, color: &str) -> Arc<dyn Font> {
        self.font_for(Style::new(font, size, color))
    }

    pub fn font_for(&self, style: Style) -> Arc<dyn Font> {
        self.fonts.get_or_create(style, |style| ConcreteFont {
            style: style.clone(),
        })
    }

    pub fn count(&self) -> usize {
        self.fonts.count()
    }

    pub fn stats(&self) -> super::CacheStats {
        self.fonts.stats()
    }
}
