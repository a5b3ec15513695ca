//! shelftui - Main entry point
//!
//! Without a subcommand the interactive TUI runs; with one, the command is
//! executed headlessly against the same catalog file.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io::stdout;
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use shelftui::cli::Cli;
use shelftui::config::Settings;
use shelftui::{run_command, App, Library};

/// Initialize tracing with the destination the run mode allows
fn init_logging(settings: &Settings) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.default_log_filter()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match &settings.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {:?}", path))?;
            builder
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_writer(Mutex::new(file))
                .init();
        }
        // The TUI owns the terminal
        None if settings.interactive => builder.with_writer(std::io::sink).init(),
        None => builder.with_target(false).with_writer(std::io::stderr).init(),
    }
    Ok(())
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let settings = Settings::from_cli(&cli);

    init_logging(&settings)?;
    info!("shelftui starting up");
    debug!("Settings: {:?}", settings);

    let mut library = Library::open(settings.store());

    match cli.command {
        Some(ref command) => {
            let mut out = stdout();
            let outcome = run_command(command, &mut library, &mut out).map_err(|e| {
                error!("Command failed: {}", e);
                e
            })?;
            if outcome.exit_code() != 0 {
                std::process::exit(outcome.exit_code());
            }
        }
        None => {
            info!("No command specified, launching TUI");
            run_tui(library)?;
        }
    }

    Ok(())
}

/// Run the interactive TUI until the user quits
fn run_tui(library: Library) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode().context("Failed to enable raw mode")?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let result = (|| -> Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        let mut app = App::new(library);
        app.run(&mut terminal)?;
        Ok(())
    })();

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result
}
