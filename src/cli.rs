use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::store::DEFAULT_LIBRARY_FILE;
use crate::types::{SearchField, YEAR_MAX, YEAR_MIN};

/// shelftui - A personal book catalog in your terminal
#[derive(Parser, Debug)]
#[command(name = "shelftui")]
#[command(about = "Manage a personal book catalog from a TUI or the command line")]
#[command(version)]
pub struct Cli {
    /// Path to the catalog file (JSON array of books)
    #[arg(short, long, global = true, default_value = DEFAULT_LIBRARY_FILE)]
    pub library: PathBuf,

    /// Write logs to this file (the TUI discards logs otherwise)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add a book to the catalog
    Add {
        /// Book title
        #[arg(short, long)]
        title: String,
        /// Author name
        #[arg(short, long)]
        author: String,
        /// Publication year
        #[arg(short, long, value_parser = clap::value_parser!(i32).range(YEAR_MIN as i64..=YEAR_MAX as i64))]
        year: i32,
        /// Genre
        #[arg(short, long, default_value = "")]
        genre: String,
        /// Mark the book as read
        #[arg(short, long)]
        read: bool,
    },
    /// Remove every book with this title (case-insensitive)
    Remove {
        /// Title to remove
        title: String,
    },
    /// Search books by title or author
    Search {
        /// Text to look for (case-insensitive substring)
        query: String,
        /// Field to search
        #[arg(short, long, default_value_t = SearchField::Title)]
        by: SearchField,
    },
    /// List every book in the catalog
    List,
    /// Show catalog statistics
    Stats,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
