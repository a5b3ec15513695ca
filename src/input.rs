//! Input handling module
//!
//! Form-based capture of the fields each catalog operation needs. A form is
//! a list of typed fields with one focused at a time; key events edit the
//! focused field and the form reports when the user submits or cancels.

use crossterm::event::{KeyCode, KeyEvent};
use strum::Display;

use crate::error::{Result, ShelfError};
use crate::types::{year_in_range, Book, SearchField, YEAR_MAX, YEAR_MIN};

/// Longest year string the year field accepts
const YEAR_DIGITS: usize = 4;

/// Which operation a form collects input for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FormKind {
    #[strum(serialize = "Add a New Book")]
    AddBook,
    #[strum(serialize = "Remove a Book")]
    RemoveBook,
    #[strum(serialize = "Search for a Book")]
    SearchBooks,
}

/// Typed value held by a form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free text
    Text(String),
    /// Digits only, validated against the year range on submit
    Year(String),
    /// On/off checkbox
    Checkbox(bool),
    /// Radio choice between title and author
    SearchBy(SearchField),
}

impl FieldValue {
    /// Text shown in the form for this value
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) | Self::Year(s) => s.clone(),
            Self::Checkbox(true) => "[x]".to_string(),
            Self::Checkbox(false) => "[ ]".to_string(),
            Self::SearchBy(field) => format!("< {} >", field),
        }
    }

    /// Fields toggled with Space/Left/Right rather than typed into
    pub fn is_toggle(&self) -> bool {
        matches!(self, Self::Checkbox(_) | Self::SearchBy(_))
    }
}

/// One labelled field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub value: FieldValue,
    /// Value is still the pre-filled default; the first typed character
    /// replaces it instead of appending
    pub pristine: bool,
}

impl FormField {
    fn new(label: &'static str, value: FieldValue) -> Self {
        Self {
            label,
            value,
            pristine: false,
        }
    }

    fn prefilled(label: &'static str, value: FieldValue) -> Self {
        Self {
            pristine: true,
            ..Self::new(label, value)
        }
    }
}

/// What a submitted form asks the catalog to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSubmission {
    Add(Book),
    Remove(String),
    Search { query: String, field: SearchField },
}

/// Outcome of feeding a key to a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// User submitted the form
    Submit,
    /// User cancelled
    Cancel,
    /// Continue processing input
    Continue,
}

/// Form state for one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookForm {
    pub kind: FormKind,
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl BookForm {
    pub fn new(kind: FormKind) -> Self {
        let fields = match kind {
            FormKind::AddBook => vec![
                FormField::new("Title", FieldValue::Text(String::new())),
                FormField::new("Author", FieldValue::Text(String::new())),
                FormField::prefilled("Publication Year", FieldValue::Year(YEAR_MIN.to_string())),
                FormField::new("Genre", FieldValue::Text(String::new())),
                FormField::new("Have you read this book?", FieldValue::Checkbox(false)),
            ],
            FormKind::RemoveBook => vec![FormField::new(
                "Title of the book to remove",
                FieldValue::Text(String::new()),
            )],
            FormKind::SearchBooks => vec![
                FormField::new("Title or author", FieldValue::Text(String::new())),
                FormField::new("Search by", FieldValue::SearchBy(SearchField::default())),
            ],
        };
        Self {
            kind,
            fields,
            focused: 0,
        }
    }

    /// Hint line rendered under the form
    pub fn instructions(&self) -> &'static str {
        match self.kind {
            FormKind::AddBook => {
                "Tab/Up/Down: Move | Space: Toggle read | Enter: Next/Add | Esc: Back"
            }
            FormKind::RemoveBook => "Enter: Remove | Esc: Back",
            FormKind::SearchBooks => {
                "Tab/Up/Down: Move | Left/Right: Title/Author | Enter: Next/Search | Esc: Back"
            }
        }
    }

    pub fn focused_field(&self) -> &FormField {
        &self.fields[self.focused]
    }

    fn focused_value_mut(&mut self) -> &mut FieldValue {
        &mut self.fields[self.focused].value
    }

    pub fn is_last_field(&self) -> bool {
        self.focused + 1 == self.fields.len()
    }

    pub fn focus_next(&mut self) {
        if !self.is_last_field() {
            self.focused += 1;
        }
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    /// Handle keyboard input for the form
    pub fn handle_input(&mut self, key_event: KeyEvent) -> InputResult {
        match key_event.code {
            KeyCode::Esc => return InputResult::Cancel,
            KeyCode::Enter => {
                if self.is_last_field() {
                    return InputResult::Submit;
                }
                self.focus_next();
            }
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
            KeyCode::Left | KeyCode::Right => self.toggle_focused(),
            KeyCode::Backspace => self.erase_char(),
            KeyCode::Char(c) => {
                if self.focused_field().value.is_toggle() {
                    if c == ' ' {
                        self.toggle_focused();
                    }
                } else {
                    self.type_char(c);
                }
            }
            _ => {}
        }
        InputResult::Continue
    }

    /// Append to the focused text or year field, replacing a pre-filled default
    fn type_char(&mut self, c: char) {
        let field = &mut self.fields[self.focused];
        let max_len = match field.value {
            FieldValue::Year(_) if !c.is_ascii_digit() => return,
            FieldValue::Year(_) => YEAR_DIGITS,
            _ => usize::MAX,
        };
        if let FieldValue::Text(s) | FieldValue::Year(s) = &mut field.value {
            if std::mem::take(&mut field.pristine) {
                s.clear();
            }
            if s.chars().count() < max_len {
                s.push(c);
            }
        }
    }

    fn erase_char(&mut self) {
        let field = &mut self.fields[self.focused];
        if let FieldValue::Text(s) | FieldValue::Year(s) = &mut field.value {
            if std::mem::take(&mut field.pristine) {
                s.clear();
            } else {
                s.pop();
            }
        }
    }

    fn toggle_focused(&mut self) {
        match self.focused_value_mut() {
            FieldValue::Checkbox(checked) => *checked = !*checked,
            FieldValue::SearchBy(field) => *field = field.toggled(),
            _ => {}
        }
    }

    fn text(&self, index: usize) -> String {
        match &self.fields[index].value {
            FieldValue::Text(s) | FieldValue::Year(s) => s.clone(),
            _ => String::new(),
        }
    }

    /// Validate the collected fields and build the request.
    ///
    /// Only the year is checked; empty text fields are allowed.
    pub fn submission(&self) -> Result<FormSubmission> {
        match self.kind {
            FormKind::AddBook => {
                let year = parse_year(&self.text(2))?;
                let read = matches!(self.fields[4].value, FieldValue::Checkbox(true));
                Ok(FormSubmission::Add(Book::new(
                    self.text(0),
                    self.text(1),
                    year,
                    self.text(3),
                    read,
                )))
            }
            FormKind::RemoveBook => Ok(FormSubmission::Remove(self.text(0))),
            FormKind::SearchBooks => {
                let field = match self.fields[1].value {
                    FieldValue::SearchBy(field) => field,
                    _ => SearchField::default(),
                };
                Ok(FormSubmission::Search {
                    query: self.text(0),
                    field,
                })
            }
        }
    }
}

/// Parse a publication year and check it against the accepted range
pub fn parse_year(raw: &str) -> Result<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ShelfError::validation("Publication year is required"));
    }
    let year: i32 = raw
        .parse()
        .map_err(|_| ShelfError::validation(format!("'{}' is not a valid year", raw)))?;
    if !year_in_range(year) {
        return Err(ShelfError::validation(format!(
            "Publication year must be between {} and {}",
            YEAR_MIN, YEAR_MAX
        )));
    }
    Ok(year)
}
