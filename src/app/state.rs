//! Application state definitions
//!
//! Contains the state types for the TUI: the current mode, the main menu,
//! the active form, the results and statistics views and the status line.

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::catalog::Statistics;
use crate::input::{BookForm, FormKind};
use crate::types::Book;

/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum MenuItem {
    #[strum(serialize = "Add Book")]
    AddBook,
    #[strum(serialize = "Remove Book")]
    RemoveBook,
    #[strum(serialize = "Search Books")]
    SearchBooks,
    #[strum(serialize = "View All Books")]
    ViewAll,
    #[strum(serialize = "Statistics")]
    Statistics,
    #[strum(serialize = "Quit")]
    Quit,
}

impl MenuItem {
    pub fn all() -> Vec<MenuItem> {
        Self::iter().collect()
    }

    /// Menu entry at a selection index, if any
    pub fn at(index: usize) -> Option<MenuItem> {
        Self::iter().nth(index)
    }

    pub fn count() -> usize {
        Self::iter().count()
    }

    /// Short description shown next to the menu
    pub fn description(&self) -> &'static str {
        match self {
            Self::AddBook => "Record a new book: title, author, year, genre and whether you have read it.",
            Self::RemoveBook => "Delete every book whose title matches, ignoring case.",
            Self::SearchBooks => "Find books whose title or author contains some text.",
            Self::ViewAll => "List every book in the catalog in the order it was added.",
            Self::Statistics => "Total number of books and the share you have read.",
            Self::Quit => "Leave shelftui. The catalog is already saved.",
        }
    }
}

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Main menu - entry point for all functionality
    MainMenu,
    /// Add-book form
    AddBook,
    /// Remove-book form
    RemoveBook,
    /// Search form
    SearchBooks,
    /// List of book summaries (search hits or the whole catalog)
    Results,
    /// Catalog statistics
    Statistics,
}

impl AppMode {
    /// Form kind edited in this mode, if it is a form mode
    pub fn form_kind(&self) -> Option<FormKind> {
        match self {
            Self::AddBook => Some(FormKind::AddBook),
            Self::RemoveBook => Some(FormKind::RemoveBook),
            Self::SearchBooks => Some(FormKind::SearchBooks),
            _ => None,
        }
    }

    /// Modes where typed characters go into a text field
    pub fn is_form(&self) -> bool {
        self.form_kind().is_some()
    }

    pub fn from_form_kind(kind: FormKind) -> Self {
        match kind {
            FormKind::AddBook => Self::AddBook,
            FormKind::RemoveBook => Self::RemoveBook,
            FormKind::SearchBooks => Self::SearchBooks,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::MainMenu => "Main Menu",
            Self::AddBook => "Add Book",
            Self::RemoveBook => "Remove Book",
            Self::SearchBooks => "Search Books",
            Self::Results => "Results",
            Self::Statistics => "Statistics",
        }
    }
}

/// Severity of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Feedback shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// A list of books shown as summary lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub title: String,
    pub books: Vec<Book>,
    /// Warning shown instead of the list when `books` is empty
    pub empty_message: String,
    pub scroll_offset: usize,
    /// Mode to go back to when the view is closed
    pub return_mode: AppMode,
}

impl ResultsView {
    pub fn new(
        title: impl Into<String>,
        books: Vec<Book>,
        empty_message: impl Into<String>,
        return_mode: AppMode,
    ) -> Self {
        Self {
            title: title.into(),
            books,
            empty_message: empty_message.into(),
            scroll_offset: 0,
            return_mode,
        }
    }

    /// Summary lines in display order
    pub fn lines(&self) -> Vec<String> {
        self.books.iter().map(Book::summary).collect()
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.books.len() {
            self.scroll_offset += 1;
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Main menu selection state
    pub main_menu_selection: usize,
    /// Form being filled in, for form modes
    pub form: Option<BookForm>,
    /// Results list, for `AppMode::Results`
    pub results: Option<ResultsView>,
    /// Snapshot shown in `AppMode::Statistics`
    pub statistics: Option<Statistics>,
    /// Status message for user feedback
    pub status: StatusMessage,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Catalog file shown in the header
    pub library_label: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::MainMenu,
            main_menu_selection: 0,
            form: None,
            results: None,
            statistics: None,
            status: StatusMessage::info("Welcome to your Personal Library Manager"),
            help_visible: false,
            library_label: String::new(),
        }
    }
}

impl AppState {
    /// Currently highlighted menu entry
    pub fn selected_menu_item(&self) -> MenuItem {
        MenuItem::at(self.main_menu_selection).unwrap_or(MenuItem::AddBook)
    }

    /// Open a fresh form and switch to its mode
    pub fn open_form(&mut self, kind: FormKind) {
        self.form = Some(BookForm::new(kind));
        self.mode = AppMode::from_form_kind(kind);
    }

    /// Drop any open view and return to the main menu
    pub fn back_to_menu(&mut self) {
        self.form = None;
        self.results = None;
        self.statistics = None;
        self.mode = AppMode::MainMenu;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order_matches_display() {
        let names: Vec<String> = MenuItem::all().iter().map(|m| m.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "Add Book",
                "Remove Book",
                "Search Books",
                "View All Books",
                "Statistics",
                "Quit"
            ]
        );
        assert_eq!(MenuItem::at(MenuItem::count()), None);
    }

    #[test]
    fn test_form_modes() {
        assert!(AppMode::AddBook.is_form());
        assert!(!AppMode::Results.is_form());
        assert_eq!(
            AppMode::from_form_kind(FormKind::SearchBooks),
            AppMode::SearchBooks
        );
    }

    #[test]
    fn test_results_scroll_bounds() {
        let books = vec![
            Book::new("A", "X", 2000, "G", false),
            Book::new("B", "Y", 2001, "G", true),
        ];
        let mut view = ResultsView::new("x", books, "none", AppMode::MainMenu);
        assert_eq!(view.lines()[1], "B by Y (2001) - G - Read");
        view.scroll_up();
        assert_eq!(view.scroll_offset, 0);
        view.scroll_down();
        view.scroll_down();
        assert_eq!(view.scroll_offset, 1);
    }
}
