//! Core domain logic for the Bookshelf personal library catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use config::{AppConfig, ConfigError, DEFAULT_LIBRARY_FILE};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::book::{Book, BookValidationError, YearInput};
pub use model::stats::CatalogStats;
pub use repo::catalog_repo::{
    CatalogRepository, JsonFileCatalogRepository, LoadOutcome, LoadedCatalog, RepoError,
    RepoResult,
};
pub use search::matcher::BookQuery;
pub use service::catalog_service::{CatalogError, CatalogResult, CatalogService, CatalogStore};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
