//! User interface rendering module
//!
//! This module is organized into submodules for better maintainability:
//! - `header` - Banner, title, status bar, nav bar and help hooks
//! - `menus` - Main menu rendering
//! - `forms` - Add / remove / search form rendering
//! - `views` - Results list and statistics rendering

mod forms;
mod header;
mod menus;
mod views;

use crate::app::{AppMode, AppState};
use crate::components::keybindings::KeybindingContext;
use crate::theme::UiConstants;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

// Re-export for external use
pub use forms::form_lines;
pub use header::{nav_bar_line, HeaderRenderer};
pub use views::statistics_lines;

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to specialized
/// submodules for different parts of the UI.
pub struct UiRenderer {
    /// Header renderer instance
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let keybinding_ctx = KeybindingContext::new();
        self.render_with_context(f, state, &keybinding_ctx);
    }

    /// Render the complete UI with keybinding context
    pub fn render_with_context(
        &self,
        f: &mut Frame,
        state: &AppState,
        keybinding_ctx: &KeybindingContext,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::HEADER_HEIGHT),     // Banner
                Constraint::Length(UiConstants::TITLE_HEIGHT),      // Title
                Constraint::Min(3),                                 // Main content
                Constraint::Length(UiConstants::STATUS_BAR_HEIGHT), // Status
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),    // Nav bar
            ])
            .split(f.area());

        self.header
            .render_header(f, chunks[0], &state.library_label);
        self.header.render_title(f, chunks[1], state.mode.name());

        let content_area = chunks[2];
        match state.mode {
            AppMode::MainMenu => menus::render_main_menu_in_area(f, state, content_area),
            AppMode::AddBook | AppMode::RemoveBook | AppMode::SearchBooks => {
                if let Some(ref form) = state.form {
                    forms::render_form_in_area(f, form, content_area);
                }
            }
            AppMode::Results => {
                if let Some(ref view) = state.results {
                    views::render_results_in_area(f, view, content_area);
                }
            }
            AppMode::Statistics => {
                if let Some(ref stats) = state.statistics {
                    views::render_statistics_in_area(f, stats, content_area);
                }
            }
        }

        header::render_status_bar(f, chunks[3], &state.status);
        header::render_nav_bar(f, state, keybinding_ctx, chunks[4]);

        // Render help overlay if visible (on top of everything)
        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }
}
