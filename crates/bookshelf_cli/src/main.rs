//! Command-line shell over the Bookshelf core.
//!
//! # Responsibility
//! - Resolve configuration, optionally start logging, open the store.
//! - Dispatch one subcommand and render its result to stdout.

mod args;
mod render;

use anyhow::{Context, Result};
use args::{Cli, Commands};
use bookshelf_core::{init_logging, AppConfig, CatalogStore, LoadOutcome};
use clap::Parser;
use log::info;
use std::io::Write;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli, AppConfig::from_env());

    if let Some((level, log_dir)) = config
        .logging_settings()
        .context("invalid logging configuration")?
    {
        init_logging(level, &log_dir.to_string_lossy()).context("failed to start logging")?;
    }

    let library_path = config.library_path;
    let mut store = CatalogStore::open(&library_path)
        .with_context(|| format!("failed to open library `{}`", library_path.display()))?;
    if let LoadOutcome::Corrupt(reason) = store.load_outcome() {
        eprintln!(
            "warning: `{}` could not be parsed ({reason}); starting with an empty library",
            library_path.display()
        );
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Add {
            title,
            author,
            year,
            genre,
            read,
        } => {
            store.add(title, author, year, genre, read)?;
            writeln!(out, "Book added successfully!")?;
        }
        Commands::Remove { title } => {
            let removed = store.remove(&title)?;
            info!("event=cli_remove module=cli status=ok removed={removed}");
            writeln!(out, "Book removed successfully! ({removed} removed)")?;
        }
        Commands::Search { query } => {
            render::write_books(&mut out, store.search(&query), "No matching books found.")?;
        }
        Commands::List => {
            render::write_books(&mut out, store.books(), "Your library is empty.")?;
        }
        Commands::Stats => {
            render::write_stats(&mut out, &store.statistics())?;
        }
    }

    Ok(())
}

/// Applies command-line flags on top of environment settings.
fn resolve_config(cli: &Cli, env: AppConfig) -> AppConfig {
    env.with_overrides(
        cli.library.clone(),
        cli.log_level.clone(),
        cli.log_dir.clone(),
    )
}
