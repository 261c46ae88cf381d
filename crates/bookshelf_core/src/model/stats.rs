//! Aggregate statistics over the catalog.

use crate::model::book::Book;

/// Count and read-ratio summary of a catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogStats {
    pub total: usize,
    pub read: usize,
    /// Percentage in `[0, 100]`; `0.0` for an empty catalog.
    pub percent_read: f64,
}

impl CatalogStats {
    /// Computes statistics with one linear scan.
    pub fn from_books(books: &[Book]) -> Self {
        let total = books.len();
        let read = books.iter().filter(|book| book.read).count();
        let percent_read = if total == 0 {
            0.0
        } else {
            read as f64 / total as f64 * 100.0
        };
        Self {
            total,
            read,
            percent_read,
        }
    }

    /// Returns the `(total, percent_read)` pair exposed to presentation layers.
    pub fn as_pair(&self) -> (usize, f64) {
        (self.total, self.percent_read)
    }
}
