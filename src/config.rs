//! Runtime settings resolved from the command line.
//!
//! The only knobs are where the catalog lives and where logs go. The log
//! filter itself comes from `RUST_LOG` through tracing-subscriber.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::store::{Store, DEFAULT_LIBRARY_FILE};

/// Default log filter when `RUST_LOG` is unset and logs go to a file
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default log filter for headless commands logging to stderr
pub const HEADLESS_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Catalog file
    pub library_path: PathBuf,
    /// Optional log destination
    pub log_file: Option<PathBuf>,
    /// True when no subcommand was given and the TUI should run
    pub interactive: bool,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            library_path: cli.library.clone(),
            log_file: cli.log_file.clone(),
            interactive: cli.command.is_none(),
        }
    }

    /// Log filter used when `RUST_LOG` is unset
    pub fn default_log_filter(&self) -> &'static str {
        if self.log_file.is_none() && !self.interactive {
            HEADLESS_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }

    /// Store bound to the configured catalog file
    pub fn store(&self) -> Store {
        Store::new(&self.library_path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library_path: PathBuf::from(DEFAULT_LIBRARY_FILE),
            log_file: None,
            interactive: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_settings_from_cli() {
        let cli = Cli::try_parse_from([
            "shelftui",
            "--library",
            "books.json",
            "--log-file",
            "shelf.log",
            "stats",
        ])
        .unwrap();
        let settings = Settings::from_cli(&cli);
        assert_eq!(settings.library_path, PathBuf::from("books.json"));
        assert_eq!(settings.log_file, Some(PathBuf::from("shelf.log")));
        assert!(!settings.interactive);
        assert_eq!(settings.store().path(), PathBuf::from("books.json").as_path());
    }

    #[test]
    fn test_headless_commands_log_quietly() {
        let cli = Cli::try_parse_from(["shelftui", "list"]).unwrap();
        assert_eq!(Settings::from_cli(&cli).default_log_filter(), "warn");

        let cli = Cli::try_parse_from(["shelftui", "--log-file", "shelf.log", "list"]).unwrap();
        assert_eq!(Settings::from_cli(&cli).default_log_filter(), "info");

        assert_eq!(Settings::default().default_log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_settings_default_matches_cli_default() {
        let cli = Cli::try_parse_from(["shelftui"]).unwrap();
        assert_eq!(Settings::from_cli(&cli), Settings::default());
    }
}
