//! Command-line argument model.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bookshelf: personal library catalog backed by a JSON file
#[derive(Debug, Parser)]
#[command(name = "bookshelf")]
#[command(version)]
#[command(about = "Personal library catalog backed by a JSON file")]
pub struct Cli {
    /// Library file (overrides BOOKSHELF_LIBRARY_PATH)
    #[arg(long, global = true)]
    pub library: Option<PathBuf>,

    /// Log level (overrides BOOKSHELF_LOG_LEVEL)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Absolute log directory (overrides BOOKSHELF_LOG_DIR)
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Adds a new book
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        /// Publication year; decimals are truncated
        #[arg(long, allow_hyphen_values = true)]
        year: String,

        #[arg(long)]
        genre: String,

        /// Marks the book as already read
        #[arg(long)]
        read: bool,
    },

    /// Removes every book with this title (case-insensitive)
    Remove { title: String },

    /// Searches titles and authors (case-insensitive substring); an empty query lists every book
    Search {
        #[arg(default_value = "")]
        query: String,
    },

    /// Displays all books
    List,

    /// Shows total count and percentage read
    Stats,
}
