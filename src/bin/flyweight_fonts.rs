// Flyweight: shared fonts

use colored::Colorize;
use design_patterns::flyweight::{is_same_instance, FontFactory};
use design_patterns::{telemetry, Config};
use std::path::PathBuf;
use std::process::ExitCode;

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

    println!("{}", "Flyweight: Fonts".bold());
    println!("================\n");

    let factory = FontFactory::with_capacity(config.cache.initial_capacity);

    let font1 = factory.font("Arial", 12, "Black");
    println!("{}", font1.apply("Hello, World!"));
    let font2 = factory.font("Arial", 12, "Black");
    println!("{}", font2.apply("Flyweight Pattern"));
    let font3 = factory.font("Times New Roman", 14, "Blue");
    println!("{}", font3.apply("Design Patterns"));
    let font4 = factory.font("Arial", 12, "Black");
    println!("{}", font4.apply("Another Text"));

    println!();
    println!("font1 and font4 shared: {}", is_same_instance(&font1, &font4));
    println!("font1 and font3 shared: {}", is_same_instance(&font1, &font3));

    // Concatenated keys would merge these two.
    let tiny = factory.font("Arial", 1, "2Red");
    let red = factory.font("Arial", 12, "Red");
    println!("Arial/1/2Red vs Arial/12/Red shared: {}", is_same_instance(&tiny, &red));

    let stats = factory.stats();
    println!(
        "\n{} fonts for {} requests (hit ratio {:.2})",
        factory.count(),
        stats.requests(),
        stats.hit_ratio().unwrap_or_default()
    );

    ExitCode::SUCCESS
}
