//! Catalog repository contracts and JSON file implementation.
//!
//! # Responsibility
//! - Read the whole catalog from its backing store at startup.
//! - Overwrite the backing store with the full catalog on every mutation.
//!
//! # Invariants
//! - A missing file loads as an empty catalog (`LoadOutcome::Missing`).
//! - A file that fails to parse as a JSON array of books loads as an empty
//!   catalog (`LoadOutcome::Corrupt`); there is no partial recovery.
//! - Any other read failure and every write failure is returned to the caller.

use crate::model::book::Book;
use log::{error, info, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Instant;

const JSON_INDENT: &[u8] = b"    ";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for catalog reads and writes.
#[derive(Debug)]
pub enum RepoError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "library file `{}` I/O failed: {source}", path.display())
            }
            Self::Serialize(err) => write!(f, "failed to serialize catalog: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// How the catalog was obtained from the backing store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// File parsed; holds the number of records read.
    Loaded(usize),
    /// No file yet, typically the first run.
    Missing,
    /// File present but unparseable; holds the parse error message.
    Corrupt(String),
}

/// Result of a repository load: the books plus how they were obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCatalog {
    pub books: Vec<Book>,
    pub outcome: LoadOutcome,
}

impl LoadedCatalog {
    fn empty(outcome: LoadOutcome) -> Self {
        Self {
            books: Vec::new(),
            outcome,
        }
    }
}

/// Storage seam for the catalog store.
pub trait CatalogRepository {
    /// Reads the full catalog, recovering missing/corrupt stores as empty.
    fn load_books(&self) -> RepoResult<LoadedCatalog>;
    /// Replaces the stored catalog with `books`.
    fn persist_books(&self, books: &[Book]) -> RepoResult<()>;
}

/// Catalog stored as one pretty-printed JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalogRepository {
    path: PathBuf,
}

impl JsonFileCatalogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> RepoError {
        RepoError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl CatalogRepository for JsonFileCatalogRepository {
    fn load_books(&self) -> RepoResult<LoadedCatalog> {
        let started_at = Instant::now();
        let raw = match std::fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=catalog_load module=repo status=missing path={}",
                    self.path.display()
                );
                return Ok(LoadedCatalog::empty(LoadOutcome::Missing));
            }
            Err(err) => {
                error!(
                    "event=catalog_load module=repo status=error error_code=read_failed path={} error={}",
                    self.path.display(),
                    err
                );
                return Err(self.io_error(err));
            }
        };

        match serde_json::from_slice::<Vec<Book>>(&raw) {
            Ok(books) => {
                info!(
                    "event=catalog_load module=repo status=ok count={} duration_ms={}",
                    books.len(),
                    started_at.elapsed().as_millis()
                );
                let count = books.len();
                Ok(LoadedCatalog {
                    books,
                    outcome: LoadOutcome::Loaded(count),
                })
            }
            Err(err) => {
                warn!(
                    "event=catalog_load module=repo status=corrupt path={} error={}",
                    self.path.display(),
                    err
                );
                Ok(LoadedCatalog::empty(LoadOutcome::Corrupt(err.to_string())))
            }
        }
    }

    fn persist_books(&self, books: &[Book]) -> RepoResult<()> {
        let started_at = Instant::now();
        let payload = encode_catalog(books)?;
        if let Err(err) = std::fs::write(&self.path, payload) {
            error!(
                "event=catalog_persist module=repo status=error error_code=write_failed path={} error={}",
                self.path.display(),
                err
            );
            return Err(self.io_error(err));
        }

        info!(
            "event=catalog_persist module=repo status=ok count={} duration_ms={}",
            books.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}

/// Serializes books as a 4-space indented JSON array with trailing newline.
pub fn encode_catalog(books: &[Book]) -> RepoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    books.serialize(&mut serializer)?;
    buffer.push(b'\n');
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::encode_catalog;
    use crate::model::book::Book;

    #[test]
    fn encode_uses_four_space_indent_and_field_order() {
        let book = Book::new("Dune", "Herbert", 1965, "Sci-Fi", false).unwrap();
        let text = String::from_utf8(encode_catalog(&[book]).unwrap()).unwrap();
        let expected = "[\n    {\n        \"title\": \"Dune\",\n        \"author\": \"Herbert\",\n        \"year\": 1965,\n        \"genre\": \"Sci-Fi\",\n        \"read\": false\n    }\n]\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn encode_empty_catalog_is_empty_array() {
        let text = String::from_utf8(encode_catalog(&[]).unwrap()).unwrap();
        assert_eq!(text, "[]\n");
    }
}
