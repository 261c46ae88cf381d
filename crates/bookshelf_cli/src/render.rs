//! Plain-text rendering of catalog results.

use bookshelf_core::{Book, CatalogStats};
use std::io::{self, Write};

pub fn write_book(out: &mut impl Write, book: &Book) -> io::Result<()> {
    writeln!(out, "### {}", book.title)?;
    writeln!(out, "- Author: {}", book.author)?;
    writeln!(out, "- Year: {}", book.year)?;
    writeln!(out, "- Genre: {}", book.genre)?;
    writeln!(out, "- Status: {}", book.status_label())
}

/// Writes each book, or `empty_message` when there are none.
pub fn write_books<'a>(
    out: &mut impl Write,
    books: impl IntoIterator<Item = &'a Book>,
    empty_message: &str,
) -> io::Result<usize> {
    let mut count = 0;
    for book in books {
        if count > 0 {
            writeln!(out)?;
        }
        write_book(out, book)?;
        count += 1;
    }
    if count == 0 {
        writeln!(out, "{empty_message}")?;
    }
    Ok(count)
}

pub fn write_stats(out: &mut impl Write, stats: &CatalogStats) -> io::Result<()> {
    writeln!(out, "Total Books: {}", stats.total)?;
    writeln!(out, "Percentage Read: {:.2}%", stats.percent_read)
}
