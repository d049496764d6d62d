// Flyweight: a text editor built from shared glyphs
// Symbol + font + size + color is shared; position on the page is not.

use colored::Colorize;
use design_patterns::flyweight::{GlyphFactory, NamedStyle, Style, TextDocument};
use design_patterns::{telemetry, Config};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

fn print_statistics(doc: &TextDocument) {
    let stats = doc.statistics();
    println!("  Title: {}", doc.title());
    println!("  Total characters: {}", stats.characters);
    println!("  Unique glyph flyweights: {}", stats.flyweights);
    if let (Some(efficiency), Some(percent)) = (stats.efficiency, stats.saved_percent) {
        println!("  Efficiency ratio: {:.3} (lower is better)", efficiency);
        println!("  Instances saved: {} ({:.1}%)", stats.saved, percent);
    }
}

fn print_positions(doc: &TextDocument, symbol: char) {
    let found = doc.positions_of(symbol);
    if found.is_empty() {
        println!("  '{}' not found", symbol);
    }
    for element in found {
        println!(
            "  Position {}: line {}, column {} | {}",
            element.position,
            element.line,
            element.column,
            element.glyph.style_info()
        );
    }
}

fn basic_editing_example(factory: &Arc<GlyphFactory>) {
    let mut doc = TextDocument::new("Basic Text Example", Arc::clone(factory));
    let body = Style::new("Arial", 12, "Black");
    for symbol in "Hello World".chars().filter(|c| *c != ' ') {
        doc.add_char(symbol, &body);
    }
    print_statistics(&doc);
    println!("\nPositions of 'l':");
    print_positions(&doc, 'l');
}

fn styled_document_example(factory: &Arc<GlyphFactory>) {
    let mut doc = TextDocument::new("Styled Document Example", Arc::clone(factory));
    let sections = [
        ("Report", "title"),
        ("Chapter1", "heading"),
        ("Thisisthecontent", "body"),
        ("Important", "highlight"),
    ];
    for (text, style) in sections {
        println!("  Adding {:?} as {}", text, style);
        let style = NamedStyle::parse(style);
        for symbol in text.chars() {
            doc.add_char_with_style(symbol, style);
        }
    }
    print_statistics(&doc);

    let dist = factory.distribution();
    println!("\n  Fonts:  {:?}", dist.fonts);
    println!("  Colors: {:?}", dist.colors);
    println!("  Sizes:  {:?}", dist.sizes);
}

fn mass_processing_example(factory: &Arc<GlyphFactory>) {
    let mut doc = TextDocument::new("Large Document Example", Arc::clone(factory));
    let words = ["the", "and", "for", "are", "but", "not", "you", "all"];
    let styles = [
        Style::new("Arial", 12, "Black"),
        Style::new("Times New Roman", 14, "Blue"),
    ];

    for round in 0..10 {
        let style = &styles[round % styles.len()];
        for word in words {
            doc.add_text(word, style);
            doc.add_text(" ", style);
        }
    }
    print_statistics(&doc);
    println!("  Arial 12pt glyph types: {}", factory.count_with("Arial", 12));
}

fn rendering_example(factory: &Arc<GlyphFactory>) {
    let mut doc = TextDocument::new("Feature Demo Document", Arc::clone(factory));
    doc.add_text("Rust ", &Style::new("Arial", 16, "Blue"));
    doc.add_text("Programming ", &Style::new("Times New Roman", 14, "Black"));
    doc.add_text("Language", &Style::new("Arial", 12, "Red"));

    println!("Full render:");
    for line in doc.render() {
        println!("  {}", line);
    }

    println!("\nPartial render (5-15):");
    for line in doc.render_range(5, 15) {
        println!("  {}", line);
    }

    println!("\nSearch:");
    print_positions(&doc, 'a');
    print_positions(&doc, 'J');
    println!("\nContent: {:?}", doc.text());
}

fn factory_state_example(factory: &GlyphFactory) {
    for glyph in factory.listing().iter().take(10) {
        println!("  {}", glyph.style_info());
    }
    let stats = factory.cache().stats();
    println!(
        "  {} glyphs cached, {} hits / {} misses",
        stats.entries, stats.hits, stats.misses
    );

    println!("\nOptimizing (dropping > 20pt and yellow glyphs):");
    factory.glyph('W', &Style::new("Arial", 24, "Black"));
    factory.glyph('Y', &Style::new("Arial", 12, "Yellow"));
    let before = factory.count();
    let removed = factory.optimize();
    println!("  {} -> {} glyphs (removed {})", before, factory.count(), removed);
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

    println!("{}", "Flyweight: Text Editor".bold());
    println!("======================\n");

    let factory = Arc::new(GlyphFactory::with_capacity(config.cache.initial_capacity));

    println!("=== Basic Editing ===");
    basic_editing_example(&factory);
    println!();

    println!("=== Styled Document ===");
    styled_document_example(&factory);
    println!();

    println!("=== Mass Text Processing ===");
    mass_processing_example(&factory);
    println!();

    println!("=== Rendering and Search ===");
    rendering_example(&factory);
    println!();

    println!("=== Factory State ===");
    factory_state_example(&factory);

    ExitCode::SUCCESS
}
