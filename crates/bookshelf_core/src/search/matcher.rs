//! Case-insensitive book matching.
//!
//! # Invariants
//! - Search matches a substring of either `title` or `author`.
//! - An empty query matches every record.
//! - Title equality for removal is exact after lowercasing, never substring.

use crate::model::book::Book;

/// Prepared free-text query over title and author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookQuery {
    needle: String,
}

impl BookQuery {
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        book.title.to_lowercase().contains(&self.needle)
            || book.author.to_lowercase().contains(&self.needle)
    }
}

/// Case-insensitive exact title comparison used by removal.
pub fn title_matches(title: &str, candidate: &str) -> bool {
    title.to_lowercase() == candidate.to_lowercase()
}
