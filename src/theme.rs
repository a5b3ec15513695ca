//! Centralized theme and styling for the TUI
//!
//! This module provides a single source of truth for all colors, styles,
//! and visual constants used throughout the application.
//!
//! # Usage
//! ```rust
//! use shelftui::theme::{Colors, Styles, Theme};
//! use shelftui::app::StatusKind;
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let error_style = Theme::status_style(StatusKind::Error);
//! ```

use ratatui::style::{Color, Modifier, Style};

use crate::app::StatusKind;

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
/// All colors should be defined here rather than hardcoded in components
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Primary dark background - used for most panels and dialogs
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Alternative dark background - used for the focused form field
    pub const BG_SECONDARY: Color = Color::Rgb(30, 30, 40);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors (branding, emphasis)
    // -------------------------------------------------------------------------

    /// Primary accent color - used for borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - used for selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors (status, feedback)
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const INFO: Color = Color::LightBlue;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected item highlight
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Selected item text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;

    /// Navigation hint text
    pub const NAV_HINT: Color = Color::DarkGray;

    /// Banner art
    pub const HEADER: Color = Color::Cyan;

    // -------------------------------------------------------------------------
    // Book Colors
    // -------------------------------------------------------------------------

    /// Summary lines of books marked read
    pub const BOOK_READ: Color = Color::LightGreen;

    /// Summary lines of unread books
    pub const BOOK_UNREAD: Color = Color::Gray;
}

// =============================================================================
// STYLE PRESETS
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Active border style
    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    /// Inactive border style
    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Panel background
    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::BG_PRIMARY)
    }

    /// Selected/highlighted item
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Focused form field value
    pub fn focused() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .bg(Colors::BG_SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Form field label
    pub fn label() -> Style {
        Style::default().fg(Colors::PRIMARY)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }

    /// Key name inside the nav bar
    pub fn nav_key() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Theme context providing semantic style lookups
pub struct Theme;

impl Theme {
    /// Style for the status bar according to message kind
    pub fn status_style(kind: StatusKind) -> Style {
        let color = match kind {
            StatusKind::Info => Colors::INFO,
            StatusKind::Success => Colors::SUCCESS,
            StatusKind::Warning => Colors::WARNING,
            StatusKind::Error => Colors::ERROR,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Prefix icon for the status bar
    pub fn status_icon(kind: StatusKind) -> &'static str {
        match kind {
            StatusKind::Info => "ℹ ",
            StatusKind::Success => "✔ ",
            StatusKind::Warning => "⚠ ",
            StatusKind::Error => "✘ ",
        }
    }

    /// Style for a book summary line
    pub fn book_style(read: bool) -> Style {
        if read {
            Style::default().fg(Colors::BOOK_READ)
        } else {
            Style::default().fg(Colors::BOOK_UNREAD)
        }
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Default dialog max width
    pub const DIALOG_MAX_WIDTH: u16 = 80;

    /// Minimum dialog width
    pub const DIALOG_MIN_WIDTH: u16 = 40;

    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Banner height
    pub const HEADER_HEIGHT: u16 = 5;

    /// Title bar height
    pub const TITLE_HEIGHT: u16 = 3;

    /// Status bar height
    pub const STATUS_BAR_HEIGHT: u16 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_styles_differ() {
        assert_ne!(
            Theme::status_style(StatusKind::Success),
            Theme::status_style(StatusKind::Error)
        );
    }

    #[test]
    fn test_book_style_by_read_flag() {
        assert_eq!(Theme::book_style(true).fg, Some(Colors::BOOK_READ));
        assert_eq!(Theme::book_style(false).fg, Some(Colors::BOOK_UNREAD));
    }
}
