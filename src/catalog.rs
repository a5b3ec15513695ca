//! In-memory catalog and the pure operations over it.
//!
//! Nothing here touches the file system; [`crate::library::Library`] pairs a
//! catalog with a store and persists after every mutation.

use std::fmt;

use crate::types::{Book, SearchField};

/// Ordered book records, insertion order preserved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// Append a record at the end. No duplicate or range check.
    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    /// New catalog without any record whose title equals `title`,
    /// ignoring case.
    pub fn without_title(&self, title: &str) -> Catalog {
        let needle = title.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.title.to_lowercase() != needle)
            .cloned()
            .collect()
    }

    /// Records whose `field` contains `query`, ignoring case.
    ///
    /// An empty query matches every record.
    pub fn search(&self, query: &str, field: SearchField) -> Vec<&Book> {
        let needle = query.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.field(field).to_lowercase().contains(&needle))
            .collect()
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            total: self.books.len(),
            read: self.books.iter().filter(|book| book.read).count(),
        }
    }
}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Self { books }
    }
}

impl FromIterator<Book> for Catalog {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Self {
            books: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

/// Catalog totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    pub total: usize,
    pub read: usize,
}

impl Statistics {
    /// Share of read books in percent; 0 for an empty catalog
    pub fn read_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.read as f64 / self.total as f64 * 100.0
    }

    /// Percentage with two decimals, e.g. `33.33`
    pub fn formatted_percentage(&self) -> String {
        format!("{:.2}", self.read_percentage())
    }

    /// Lines as shown by every front end
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Total books: {}", self.total),
            format!("Percentage read: {}%", self.formatted_percentage()),
        ]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}
