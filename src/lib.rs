//! shelftui Library
//!
//! This library provides the core functionality for the shelftui book
//! catalog: the book model, the in-memory catalog and its operations, the
//! JSON store, and the terminal UI built on top of them.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod components;
pub mod config;
pub mod error;
pub mod input;
pub mod library;
pub mod store;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use catalog::{Catalog, Statistics};
pub use commands::{run_command, CommandOutcome};
pub use config::Settings;
pub use error::{Result, ShelfError};
pub use library::Library;
pub use store::{LoadOutcome, Store};
pub use types::{Book, ReadStatus, SearchField, YEAR_MAX, YEAR_MIN};
