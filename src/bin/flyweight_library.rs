// Flyweight: a library lending shared books
// Every borrow of the same title reuses one Book; the borrower and date
// live in the borrow record.

use colored::Colorize;
use design_patterns::flyweight::Library;
use design_patterns::{telemetry, Config};
use std::path::PathBuf;
use std::process::ExitCode;

fn borrow(library: &mut Library, title: &str, borrower: &str, date: &str) {
    let before = library.flyweight_count();
    library.borrow_book(title, borrower, date);
    let status = if library.flyweight_count() > before {
        "new flyweight".green()
    } else {
        "reused".yellow()
    };
    println!("  '{}' borrowed by {} on {} [{}]", title, borrower, date, status);
}

fn print_memory(library: &Library) {
    let report = library.memory_report();
    println!("  Borrow records:   {}", report.records);
    println!("  Unique flyweights: {}", report.flyweights);
    if let Some(efficiency) = report.efficiency {
        println!("  Efficiency:       {:.2} (lower is better)", efficiency);
        println!("  Instances saved:  {}", report.saved);
    }
}

fn borrowing_example(library: &mut Library) {
    borrow(library, "Harry Potter", "Kim", "2024-01-15");
    borrow(library, "The Lord of the Rings", "Lee", "2024-01-16");
    borrow(library, "The Little Prince", "Park", "2024-01-17");
    borrow(library, "1984", "Jung", "2024-01-18");
}

fn duplicate_borrowing_example(library: &mut Library) {
    borrow(library, "Harry Potter", "Choi", "2024-01-19");
    borrow(library, "Harry Potter", "Han", "2024-01-20");
    borrow(library, "The Lord of the Rings", "Kim", "2024-01-21");

    for (i, record) in library.records().iter().enumerate() {
        println!("  [{}] {}", i + 1, record.details());
    }
}

fn bulk_borrowing_example(library: &mut Library) {
    print_memory(library);

    let students = ["Student1", "Student2", "Student3", "Student4", "Student5"];
    for (i, student) in students.iter().enumerate() {
        let date = format!("2024-01-{}", 22 + i);
        library.borrow_book("Harry Potter", student, &date);
    }

    println!("\nAfter {} more borrows of the same title:", students.len());
    print_memory(library);
}

fn reading_example(library: &Library) {
    for line in library.read_all() {
        println!("  {}", line);
    }

    println!("\nRecords for 'Harry Potter':");
    for record in library.records_for("Harry Potter") {
        println!("  {}", record.details());
    }
}

fn cache_example(library: &Library) {
    for book in library.cached_books() {
        println!("  {}", book.identity());
    }
    println!("  Total flyweights: {}", library.flyweight_count());
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

    println!("{}", "Flyweight: Library".bold());
    println!("==================\n");

    let mut library = Library::with_capacity(config.cache.initial_capacity);

    println!("=== Borrowing Different Books ===");
    borrowing_example(&mut library);
    println!();

    println!("=== Borrowing the Same Books Again ===");
    duplicate_borrowing_example(&mut library);
    println!();

    println!("=== Memory Analysis ===");
    bulk_borrowing_example(&mut library);
    println!();

    println!("=== Reading Borrowed Books ===");
    reading_example(&library);
    println!();

    println!("=== Cached Books ===");
    cache_example(&library);

    ExitCode::SUCCESS
}
