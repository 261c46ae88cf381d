//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the catalog operations as stable, sync functions via FRB.
//! - Translate core errors into response envelopes instead of throwing.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every call opens the library file, runs one operation and drops the
//!   store; no catalog state is cached between calls.

use bookshelf_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AppConfig, Book, CatalogStats, CatalogStore,
};
use log::info;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static LIBRARY_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Book row rendered by the host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryBookItem {
    pub title: String,
    pub author: String,
    pub year: u32,
    pub genre: String,
    pub read: bool,
}

/// Response envelope for add/remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

/// Response envelope for search/list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryListResponse {
    pub ok: bool,
    /// Matching books in catalog order (empty on failure).
    pub items: Vec<LibraryBookItem>,
    pub message: String,
}

/// Response envelope for statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryStatsResponse {
    pub ok: bool,
    pub total: u64,
    pub read: u64,
    /// Percentage in `[0, 100]`.
    pub percent_read: f64,
    pub message: String,
}

impl LibraryActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

impl LibraryListResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            items: Vec::new(),
            message: message.into(),
        }
    }
}

/// Adds one book; `year` is coerced from text by core.
///
/// # FFI contract
/// - Sync call, file-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn library_add_book(
    title: String,
    author: String,
    year: String,
    genre: String,
    read: bool,
) -> LibraryActionResponse {
    add_book_at(&resolve_library_path(), title, author, year, genre, read)
}

/// Removes every book whose title matches ignoring case.
///
/// Removing an unknown title succeeds with a zero count.
#[flutter_rust_bridge::frb(sync)]
pub fn library_remove_book(title: String) -> LibraryActionResponse {
    remove_book_at(&resolve_library_path(), title.as_str())
}

/// Searches title and author by case-insensitive substring.
///
/// An empty query returns the whole catalog.
#[flutter_rust_bridge::frb(sync)]
pub fn library_search(query: String) -> LibraryListResponse {
    search_at(&resolve_library_path(), query.as_str())
}

/// Lists the whole catalog in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn library_list() -> LibraryListResponse {
    list_at(&resolve_library_path())
}

/// Returns total and read-percentage statistics.
#[flutter_rust_bridge::frb(sync)]
pub fn library_statistics() -> LibraryStatsResponse {
    statistics_at(&resolve_library_path())
}

fn add_book_at(
    path: &Path,
    title: String,
    author: String,
    year: String,
    genre: String,
    read: bool,
) -> LibraryActionResponse {
    let mut store = match CatalogStore::open(path) {
        Ok(store) => store,
        Err(err) => return LibraryActionResponse::failure(format!("library_add_book failed: {err}")),
    };
    match store.add(title, author, year, genre, read) {
        Ok(()) => LibraryActionResponse::success("Book added successfully!"),
        Err(err) => LibraryActionResponse::failure(format!("library_add_book failed: {err}")),
    }
}

fn remove_book_at(path: &Path, title: &str) -> LibraryActionResponse {
    let mut store = match CatalogStore::open(path) {
        Ok(store) => store,
        Err(err) => {
            return LibraryActionResponse::failure(format!("library_remove_book failed: {err}"))
        }
    };
    match store.remove(title) {
        Ok(removed) => LibraryActionResponse::success(format!("Removed {removed} book(s).")),
        Err(err) => LibraryActionResponse::failure(format!("library_remove_book failed: {err}")),
    }
}

fn search_at(path: &Path, query: &str) -> LibraryListResponse {
    match CatalogStore::open(path) {
        Ok(store) => {
            let items = store.search(query).map(to_book_item).collect::<Vec<_>>();
            let message = if items.is_empty() {
                "No matching books found.".to_string()
            } else {
                format!("Found {} book(s).", items.len())
            };
            LibraryListResponse {
                ok: true,
                items,
                message,
            }
        }
        Err(err) => LibraryListResponse::failure(format!("library_search failed: {err}")),
    }
}

fn list_at(path: &Path) -> LibraryListResponse {
    match CatalogStore::open(path) {
        Ok(store) => {
            let items = store.books().iter().map(to_book_item).collect::<Vec<_>>();
            let message = if items.is_empty() {
                "Your library is empty.".to_string()
            } else {
                format!("{} book(s) in library.", items.len())
            };
            LibraryListResponse {
                ok: true,
                items,
                message,
            }
        }
        Err(err) => LibraryListResponse::failure(format!("library_list failed: {err}")),
    }
}

fn statistics_at(path: &Path) -> LibraryStatsResponse {
    match CatalogStore::open(path) {
        Ok(store) => to_stats_response(store.statistics()),
        Err(err) => LibraryStatsResponse {
            ok: false,
            total: 0,
            read: 0,
            percent_read: 0.0,
            message: format!("library_statistics failed: {err}"),
        },
    }
}

fn to_book_item(book: &Book) -> LibraryBookItem {
    LibraryBookItem {
        title: book.title.clone(),
        author: book.author.clone(),
        year: book.year,
        genre: book.genre.clone(),
        read: book.read,
    }
}

fn to_stats_response(stats: CatalogStats) -> LibraryStatsResponse {
    LibraryStatsResponse {
        ok: true,
        total: stats.total as u64,
        read: stats.read as u64,
        percent_read: stats.percent_read,
        message: format!(
            "Total Books: {}, Percentage Read: {:.2}%",
            stats.total, stats.percent_read
        ),
    }
}

fn resolve_library_path() -> PathBuf {
    LIBRARY_PATH
        .get_or_init(|| library_path_from(AppConfig::from_env()))
        .clone()
}

fn library_path_from(config: AppConfig) -> PathBuf {
    info!(
        "event=config_resolve module=ffi status=ok library_path={}",
        config.library_path.display()
    );
    config.library_path
}

#[cfg(test)]
mod tests {
    use super::{
        add_book_at, library_path_from, list_at, remove_book_at, search_at, statistics_at,
    };
    use bookshelf_core::config::{LIBRARY_PATH_ENV, LOG_LEVEL_ENV};
    use bookshelf_core::AppConfig;
    use std::path::PathBuf;

    #[test]
    fn library_path_survives_invalid_log_level() {
        let config = AppConfig::from_lookup(|key| match key {
            LIBRARY_PATH_ENV => Some("/data/my_books.json".to_string()),
            LOG_LEVEL_ENV => Some("verbose".to_string()),
            _ => None,
        });
        assert_eq!(
            library_path_from(config),
            PathBuf::from("/data/my_books.json")
        );
    }

    #[test]
    fn add_search_and_statistics_flow() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");

        let added = add_book_at(
            &path,
            "Dune".to_string(),
            "Herbert".to_string(),
            "1965".to_string(),
            "Sci-Fi".to_string(),
            true,
        );
        assert!(added.ok, "{}", added.message);
        let added = add_book_at(
            &path,
            "Emma".to_string(),
            "Austen".to_string(),
            "1815".to_string(),
            "Classic".to_string(),
            false,
        );
        assert!(added.ok, "{}", added.message);

        let found = search_at(&path, "DUNE");
        assert!(found.ok);
        assert_eq!(found.items.len(), 1);
        assert_eq!(found.items[0].year, 1965);

        let stats = statistics_at(&path);
        assert!(stats.ok);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.percent_read, 50.0);
        assert_eq!(stats.message, "Total Books: 2, Percentage Read: 50.00%");
    }

    #[test]
    fn invalid_year_returns_failure_envelope() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");

        let response = add_book_at(
            &path,
            "Dune".to_string(),
            "Herbert".to_string(),
            "soon".to_string(),
            "Sci-Fi".to_string(),
            false,
        );
        assert!(!response.ok);
        assert!(response.message.contains("not a number"));
        assert!(list_at(&path).items.is_empty());
    }

    #[test]
    fn remove_reports_count_and_empty_list_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        add_book_at(
            &path,
            "Dune".to_string(),
            "Herbert".to_string(),
            "1965".to_string(),
            "Sci-Fi".to_string(),
            false,
        );

        let removed = remove_book_at(&path, "dune");
        assert!(removed.ok);
        assert_eq!(removed.message, "Removed 1 book(s).");

        let listed = list_at(&path);
        assert!(listed.ok);
        assert_eq!(listed.message, "Your library is empty.");
        assert_eq!(search_at(&path, "dune").message, "No matching books found.");
    }

    #[test]
    fn unreadable_library_path_returns_failure() {
        let dir = tempfile::tempdir().unwrap();
        let stats = statistics_at(dir.path());
        assert!(!stats.ok);
        assert!(stats.message.starts_with("library_statistics failed"));
    }
}
