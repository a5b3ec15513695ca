//! Book record and the typed enums used around it
//!
//! Search fields and read status are proper Rust enums rather than strings,
//! so front ends can iterate and parse them without typos.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// Earliest publication year accepted at the input boundary
pub const YEAR_MIN: i32 = 1000;

/// Latest publication year accepted at the input boundary
pub const YEAR_MAX: i32 = 2025;

/// One book in the catalog.
///
/// There is no identifier field. The title, compared case-insensitively,
/// is the key for removal and need not be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read: bool,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            read,
        }
    }

    /// Read flag as a displayable status
    pub fn status(&self) -> ReadStatus {
        ReadStatus::from(self.read)
    }

    /// Value of the field a search looks at
    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Title => &self.title,
            SearchField::Author => &self.author,
        }
    }

    /// One-line summary: `title by author (year) - genre - Read|Unread`
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} ({}) - {} - {}",
            self.title,
            self.author,
            self.year,
            self.genre,
            self.status()
        )
    }
}

/// Which text field a search matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    #[default]
    Title,
    Author,
}

impl SearchField {
    /// The other field; used by radio-style toggles
    pub fn toggled(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Title,
        }
    }
}

/// Read flag rendered for humans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ReadStatus {
    Read,
    Unread,
}

impl From<bool> for ReadStatus {
    fn from(read: bool) -> Self {
        if read { Self::Read } else { Self::Unread }
    }
}

/// Check a year against the accepted input range
pub fn year_in_range(year: i32) -> bool {
    (YEAR_MIN..=YEAR_MAX).contains(&year)
}
