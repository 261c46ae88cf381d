//! Catalog use-case service.
//!
//! # Responsibility
//! - Own the in-memory book sequence and keep its durable mirror in sync.
//! - Provide add/remove/search/list/statistics entry points for UI hosts.
//!
//! # Invariants
//! - Insertion order is preserved; duplicate titles are allowed.
//! - Every successful mutation rewrites the full backing store before
//!   returning.
//! - The in-memory update precedes persistence; a failed persist is returned
//!   without rolling memory back.

use crate::model::book::{Book, BookValidationError, YearInput};
use crate::model::stats::CatalogStats;
use crate::repo::catalog_repo::{
    CatalogRepository, JsonFileCatalogRepository, LoadOutcome, RepoError,
};
use crate::search::matcher::{title_matches, BookQuery};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Service error for catalog use-cases.
#[derive(Debug)]
pub enum CatalogError {
    /// Input could not be coerced into a book record.
    Validation(BookValidationError),
    /// Backing store read or write failure.
    Repo(RepoError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid book: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<BookValidationError> for CatalogError {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for CatalogError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Catalog store facade over a repository implementation.
pub struct CatalogService<R: CatalogRepository> {
    repo: R,
    books: Vec<Book>,
    load_outcome: LoadOutcome,
}

/// Catalog store backed by a JSON file.
pub type CatalogStore = CatalogService<JsonFileCatalogRepository>;

impl CatalogService<JsonFileCatalogRepository> {
    /// Opens the JSON library file at `path`.
    ///
    /// A missing or unparseable file yields an empty catalog.
    ///
    /// # Errors
    /// - Returns an error only when the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> CatalogResult<Self> {
        Self::load(JsonFileCatalogRepository::new(path))
    }
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Loads the catalog through `repo` and takes ownership of it.
    pub fn load(repo: R) -> CatalogResult<Self> {
        let loaded = repo.load_books()?;
        Ok(Self {
            repo,
            books: loaded.books,
            load_outcome: loaded.outcome,
        })
    }

    /// How the catalog was obtained at startup.
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Appends one book and persists the full catalog.
    ///
    /// # Errors
    /// - `Validation` when `year` cannot be coerced; nothing is changed.
    /// - `Repo` when persistence fails; the book stays in memory.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<YearInput>,
        genre: impl Into<String>,
        read: bool,
    ) -> CatalogResult<()> {
        let book = Book::new(title, author, year, genre, read)?;
        self.add_book(book)
    }

    /// Appends an already-built record and persists the full catalog.
    pub fn add_book(&mut self, book: Book) -> CatalogResult<()> {
        debug!(
            "event=book_add module=service status=start count_before={}",
            self.books.len()
        );
        self.books.push(book);
        self.persist()
    }

    /// Removes every book whose title equals `title` ignoring case.
    ///
    /// Returns the number of removed records; zero is not an error.
    pub fn remove(&mut self, title: &str) -> CatalogResult<usize> {
        let before = self.books.len();
        self.books
            .retain(|book| !title_matches(book.title.as_str(), title));
        let removed = before - self.books.len();
        self.persist()?;
        info!(
            "event=book_remove module=service status=ok removed={} remaining={}",
            removed,
            self.books.len()
        );
        Ok(removed)
    }

    /// Lazily yields books whose title or author contains `query`,
    /// ignoring case, in catalog order.
    ///
    /// An empty query yields every book.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Book> + 'a {
        let query = BookQuery::new(query);
        self.books.iter().filter(move |book| query.matches(book))
    }

    /// Full catalog in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Total count and percentage of read books.
    pub fn statistics(&self) -> CatalogStats {
        CatalogStats::from_books(&self.books)
    }

    fn persist(&self) -> CatalogResult<()> {
        self.repo.persist_books(&self.books)?;
        Ok(())
    }
}
