use super::cache::FlyweightCache;
use std::sync::Arc;

/// A book shared by every borrower of the same title.
///
/// Only the title lives here; who borrowed it and when is kept by the
/// [`BorrowRecord`].
#[derive(Debug, PartialEq, Eq)]
pub struct Book {
    title: String,
}

impl Book {
    fn new(title: &str) -> Self {
        Book {
            title: title.to_string(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn read(&self) -> String {
        format!("reading the book titled: {}", self.title)
    }

    pub fn read_with_context(&self, reader: &str, page: u32) -> String {
        format!("{} is reading '{}' at page {}", reader, self.title, page)
    }

    /// Address-based tag, equal for every handle to the same flyweight.
    pub fn identity(&self) -> String {
        format!("Book@{:p}[{}]", self as *const Book, self.title)
    }
}

#[derive(Debug, Clone)]
pub struct BorrowRecord {
    book: Arc<Book>,
    borrower: String,
    date: String,
}

impl BorrowRecord {
    pub fn book(&self) -> &Arc<Book> {
        &self.book
    }

    pub fn title(&self) -> &str {
        self.book.title()
    }

    pub fn borrower(&self) -> &str {
        &self.borrower
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn details(&self) -> String {
        format!(
            "'{}' borrowed by {} on {} (instance: {})",
            self.book.title(),
            self.borrower,
            self.date,
            self.book.identity()
        )
    }
}

/// How many book instances the shared cache avoided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryReport {
    pub records: usize,
    pub flyweights: usize,
    /// `flyweights / records`; lower is better. `None` with no records.
    pub efficiency: Option<f64>,
    pub saved: usize,
}

#[derive(Debug, Default)]
pub struct Library {
    books: FlyweightCache<String, Book>,
    records: Vec<BorrowRecord>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Library {
            books: FlyweightCache::with_capacity(capacity),
            records: Vec::new(),
        }
    }

    /// Lends `title`, reusing the shared [`Book`] if anyone borrowed it before.
    pub fn borrow_book(&mut self, title: &str, borrower: &str, date: &str) -> &BorrowRecord {
        let book = self.books.get_or_create(title.to_string(), |title| Book::new(title));
        tracing::debug!(title, borrower, date, "book borrowed");
        self.records.push(BorrowRecord {
            book,
            borrower: borrower.to_string(),
            date: date.to_string(),
        });
        &self.records[self.records.len() - 1]
    }

    pub fn records(&self) -> &[BorrowRecord] {
        &self.records
    }

    pub fn records_for<'a>(&'a self, title: &'a str) -> impl Iterator<Item = &'a BorrowRecord> + 'a {
        self.records.iter().filter(move |record| record.title() == title)
    }

    pub fn read_all(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| format!("{} is {}", record.borrower, record.book.read()))
            .collect()
    }

    pub fn flyweight_count(&self) -> usize {
        self.books.count()
    }

    pub fn cached_books(&self) -> Vec<Arc<Book>> {
        let mut books: Vec<_> = self.books.snapshot().into_iter().map(|(_, book)| book).collect();
        books.sort_by(|a, b| a.title().cmp(b.title()));
        books
    }

    pub fn memory_report(&self) -> MemoryReport {
        let records = self.records.len();
        let flyweights = self.books.count();
        MemoryReport {
            records,
            flyweights,
            efficiency: (records > 0).then(|| flyweights as f64 / records as f64),
            saved: records.saturating_sub(flyweights),
        }
    }

    /// Forgets the shared books; existing records keep their handles.
    pub fn clear_cache(&mut self) {
        self.books.clear();
    }
}
