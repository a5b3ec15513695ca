//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, MenuItem, etc.)
//! - Main module - App struct and event loop
//!
//! Key handling is separate from the terminal so every interaction can be
//! driven from tests: [`App::handle_key_event`] mutates state and the
//! library, and [`App::run`] only polls events and draws.

mod state;

// Re-export state types for external use
pub use state::{AppMode, AppState, MenuItem, ResultsView, StatusKind, StatusMessage};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::components::keybindings::KeybindingContext;
use crate::error::{Result, ShelfError};
use crate::input::{FormKind, FormSubmission, InputResult};
use crate::library::Library;
use crate::store::LoadOutcome;
use crate::types::Book;
use crate::ui::UiRenderer;

/// Main application struct
pub struct App {
    state: AppState,
    library: Library,
    ui_renderer: UiRenderer,
    /// Keybinding context for navigation hints
    keybinding_context: KeybindingContext,
}

impl App {
    /// Create a new application instance around an opened library
    pub fn new(library: Library) -> Self {
        info!("Creating new App instance");
        let mut state = AppState {
            library_label: library.store().path().display().to_string(),
            ..AppState::default()
        };
        if let LoadOutcome::Malformed(_) = library.load_outcome() {
            // Still an empty catalog; only hinted at, never an error
            state.status = StatusMessage::info("Starting with an empty library");
        }

        Self {
            state,
            library,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Get reference to keybinding context
    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Main event loop: draw, wait for a key, handle it
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            terminal.draw(|f| {
                self.ui_renderer
                    .render_with_context(f, &self.state, &self.keybinding_context);
            })?;

            if crossterm::event::poll(Duration::from_millis(250))? {
                match crossterm::event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        if self.handle_key_event(key_event)? {
                            break; // Exit requested
                        }
                    }
                    Event::Resize(width, height) => {
                        debug!("Terminal resized to {}x{}", width, height);
                    }
                    _ => {}
                }
            }
        }

        info!("Leaving main application loop");
        Ok(())
    }

    /// Handle keyboard input events.
    ///
    /// Returns `Ok(true)` when the user asked to quit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<bool> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return Ok(true);
        }

        if self.state.help_visible {
            if matches!(key_event.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.toggle_help();
            }
            return Ok(false);
        }

        let mode = self.state.mode;
        if mode.is_form() {
            self.handle_form_input(key_event)?;
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Char('?') => self.toggle_help(),
            _ => match mode {
                AppMode::MainMenu => return self.handle_main_menu_input(key_event),
                AppMode::Results => self.handle_results_input(key_event),
                AppMode::Statistics => {
                    if matches!(
                        key_event.code,
                        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('b')
                    ) {
                        self.state.back_to_menu();
                    }
                }
                AppMode::AddBook | AppMode::RemoveBook | AppMode::SearchBooks => {}
            },
        }
        Ok(false)
    }

    fn handle_main_menu_input(&mut self, key_event: KeyEvent) -> Result<bool> {
        let count = MenuItem::count();
        match key_event.code {
            KeyCode::Up => {
                self.state.main_menu_selection = if self.state.main_menu_selection == 0 {
                    count - 1
                } else {
                    self.state.main_menu_selection - 1
                };
            }
            KeyCode::Down => {
                self.state.main_menu_selection = (self.state.main_menu_selection + 1) % count;
            }
            KeyCode::Home => self.state.main_menu_selection = 0,
            KeyCode::End => self.state.main_menu_selection = count - 1,
            KeyCode::Enter => return self.handle_main_menu_selection(),
            _ => {}
        }
        Ok(false)
    }

    fn handle_main_menu_selection(&mut self) -> Result<bool> {
        let item = self.state.selected_menu_item();
        debug!("Main menu selection: {}", item);
        match item {
            MenuItem::AddBook => self.state.open_form(FormKind::AddBook),
            MenuItem::RemoveBook => self.state.open_form(FormKind::RemoveBook),
            MenuItem::SearchBooks => self.state.open_form(FormKind::SearchBooks),
            MenuItem::ViewAll => self.show_all_books(),
            MenuItem::Statistics => {
                self.state.statistics = Some(self.library.statistics());
                self.state.mode = AppMode::Statistics;
            }
            MenuItem::Quit => return Ok(true),
        }
        Ok(false)
    }

    fn handle_results_input(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Up => {
                if let Some(ref mut view) = self.state.results {
                    view.scroll_up();
                }
            }
            KeyCode::Down => {
                if let Some(ref mut view) = self.state.results {
                    view.scroll_down();
                }
            }
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('b') => {
                let return_mode = self
                    .state
                    .results
                    .take()
                    .map(|view| view.return_mode)
                    .unwrap_or(AppMode::MainMenu);
                if return_mode.is_form() && self.state.form.is_some() {
                    self.state.mode = return_mode;
                } else {
                    self.state.back_to_menu();
                }
            }
            _ => {}
        }
    }

    fn handle_form_input(&mut self, key_event: KeyEvent) -> Result<()> {
        let Some(form) = self.state.form.as_mut() else {
            self.state.back_to_menu();
            return Ok(());
        };

        match form.handle_input(key_event) {
            InputResult::Continue => {}
            InputResult::Cancel => self.state.back_to_menu(),
            InputResult::Submit => {
                let submission = form.submission();
                match submission {
                    Ok(request) => self.execute_submission(request)?,
                    Err(e) => {
                        debug!("Form rejected: {}", e);
                        self.state.status = StatusMessage::error(user_message(&e));
                    }
                }
            }
        }
        Ok(())
    }

    /// Run a validated form request against the library
    fn execute_submission(&mut self, request: FormSubmission) -> Result<()> {
        match request {
            FormSubmission::Add(book) => match self.library.add(book) {
                Ok(()) => {
                    self.state.status = StatusMessage::success("Book added successfully!");
                    self.state.open_form(FormKind::AddBook);
                }
                Err(e) => self.report_failure("add", &e),
            },
            FormSubmission::Remove(title) => match self.library.remove(&title) {
                Ok(_) => {
                    self.state.status = StatusMessage::success("Book removed successfully!");
                    self.state.open_form(FormKind::RemoveBook);
                }
                Err(e) if e.is_not_found() => {
                    self.state.status = StatusMessage::error("Book not found!");
                }
                Err(e) => self.report_failure("remove", &e),
            },
            FormSubmission::Search { query, field } => {
                let hits: Vec<Book> = self
                    .library
                    .search(&query, field)
                    .into_iter()
                    .cloned()
                    .collect();
                debug!("Search {:?} by {} matched {}", query, field, hits.len());
                self.state.status = if hits.is_empty() {
                    StatusMessage::error("No matching books found.")
                } else {
                    StatusMessage::info(format!("{} matching book(s)", hits.len()))
                };
                self.state.results = Some(ResultsView::new(
                    format!("Search results for \"{}\" by {}", query, field),
                    hits,
                    "No matching books found.",
                    AppMode::SearchBooks,
                ));
                self.state.mode = AppMode::Results;
            }
        }
        Ok(())
    }

    fn show_all_books(&mut self) {
        let books = self.library.books().to_vec();
        self.state.status = if books.is_empty() {
            StatusMessage::warning("No books in your library.")
        } else {
            StatusMessage::info(format!("{} book(s) in your library", books.len()))
        };
        self.state.results = Some(ResultsView::new(
            "Your Library",
            books,
            "No books in your library.",
            AppMode::MainMenu,
        ));
        self.state.mode = AppMode::Results;
    }

    fn report_failure(&mut self, operation: &str, e: &ShelfError) {
        error!("Failed to {} book: {}", operation, e);
        self.state.status = StatusMessage::error(user_message(e));
    }
}

/// Text shown to the user for an error
fn user_message(e: &ShelfError) -> String {
    match e {
        ShelfError::Validation(msg) => msg.clone(),
        ShelfError::NotFound(_) => "Book not found!".to_string(),
        other => {
            warn!("Unexpected error surfaced to UI: {}", other);
            format!("Could not save the library: {}", other)
        }
    }
}
