//! Headless command execution.
//!
//! Each subcommand opens nothing itself: it receives the already-opened
//! [`Library`] and a writer, so the same code serves `main` and the tests.

use std::io::Write;
use tracing::info;

use crate::cli::Commands;
use crate::error::{Result, ShelfError};
use crate::library::Library;
use crate::types::Book;

/// Result of a headless command, mapped to the process exit code by `main`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Success,
    /// The command ran but reported a user-facing failure (e.g. not found)
    Failure,
}

impl CommandOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

/// Run one subcommand against `library`, writing user output to `out`
pub fn run_command<W: Write>(
    command: &Commands,
    library: &mut Library,
    out: &mut W,
) -> Result<CommandOutcome> {
    match command {
        Commands::Add {
            title,
            author,
            year,
            genre,
            read,
        } => {
            let book = Book::new(title.as_str(), author.as_str(), *year, genre.as_str(), *read);
            info!("Adding book from command line: {}", book);
            library.add(book)?;
            writeln!(out, "✓ Book added successfully!")?;
        }
        Commands::Remove { title } => match library.remove(title) {
            Ok(removed) => {
                writeln!(out, "✓ Book removed successfully! ({} record(s))", removed)?;
            }
            Err(ShelfError::NotFound(_)) => {
                writeln!(out, "✗ Book not found!")?;
                return Ok(CommandOutcome::Failure);
            }
            Err(e) => return Err(e),
        },
        Commands::Search { query, by } => {
            let hits = library.search(query, *by);
            if hits.is_empty() {
                writeln!(out, "⚠ No matching books found.")?;
            }
            for book in hits {
                writeln!(out, "{}", book)?;
            }
        }
        Commands::List => {
            if library.books().is_empty() {
                writeln!(out, "⚠ No books in your library.")?;
            }
            for book in library.books() {
                writeln!(out, "{}", book)?;
            }
        }
        Commands::Stats => {
            writeln!(out, "{}", library.statistics())?;
        }
    }
    Ok(CommandOutcome::Success)
}
