//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current application mode.
//! The registry only feeds the nav bar and help overlay; key dispatch lives in `App`.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    Home,
    End,
    Select,
    NextField,
    PreviousField,
    Toggle,
    Submit,
    Back,
    Quit,
    ForceQuit,
    Help,
    ScrollUp,
    ScrollDown,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (outside forms, where letters are typed)
    global_bindings: Vec<Keybinding>,
    /// Bindings that work in every mode
    always_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
            always_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
        ];
        self.always_bindings = vec![Keybinding::with_modifiers(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyAction::ForceQuit,
            "Ctrl+C",
            "Quit immediately",
        )];

        self.mode_bindings.insert(
            AppMode::MainMenu,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
                Keybinding::new(KeyCode::Home, KeyAction::Home, "Home", "Go to first"),
                Keybinding::new(KeyCode::End, KeyAction::End, "End", "Go to last"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Select"),
            ],
        );

        // Forms share navigation; the toggle key only matters where a
        // checkbox or radio field exists
        let form_bindings = |submit: &str, toggle: Option<&str>| {
            let mut bindings = vec![
                Keybinding::new(KeyCode::Tab, KeyAction::NextField, "Tab", "Next field"),
                Keybinding::new(KeyCode::BackTab, KeyAction::PreviousField, "S-Tab", "Previous field"),
                Keybinding::new(KeyCode::Enter, KeyAction::Submit, "Enter", submit),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back to menu"),
            ];
            if let Some(label) = toggle {
                bindings.insert(
                    2,
                    Keybinding::new(KeyCode::Char(' '), KeyAction::Toggle, "Space", label),
                );
            }
            bindings
        };

        self.mode_bindings.insert(
            AppMode::AddBook,
            form_bindings("Next / Add book", Some("Toggle read")),
        );
        self.mode_bindings
            .insert(AppMode::RemoveBook, form_bindings("Remove book", None));
        self.mode_bindings.insert(
            AppMode::SearchBooks,
            form_bindings("Next / Search", Some("Title/Author")),
        );

        self.mode_bindings.insert(
            AppMode::Results,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::ScrollUp, "Up", "Scroll up"),
                Keybinding::new(KeyCode::Down, KeyAction::ScrollDown, "Down", "Scroll down"),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::Statistics,
            vec![Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back to menu")],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }

        // Letters are text input inside forms
        if !mode.is_form() {
            bindings.extend(self.global_bindings.iter());
        }
        bindings.extend(self.always_bindings.iter());

        bindings
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);

        let priority_actions = match mode {
            AppMode::MainMenu => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::Select,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::AddBook | AppMode::SearchBooks => vec![
                KeyAction::NextField,
                KeyAction::Toggle,
                KeyAction::Submit,
                KeyAction::Back,
            ],
            AppMode::RemoveBook => vec![KeyAction::Submit, KeyAction::Back],
            AppMode::Results => vec![
                KeyAction::ScrollUp,
                KeyAction::ScrollDown,
                KeyAction::Back,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::Statistics => vec![KeyAction::Back, KeyAction::Help, KeyAction::Quit],
        };

        // Combine Up/Down into single item for cleaner display
        let mut items: Vec<NavBarItem> = Vec::new();
        let mut has_nav = false;
        let mut has_scroll = false;

        for action in priority_actions {
            let is_nav = matches!(action, KeyAction::NavigateUp | KeyAction::NavigateDown);
            let is_scroll = matches!(action, KeyAction::ScrollUp | KeyAction::ScrollDown);
            if (is_nav && has_nav) || (is_scroll && has_scroll) {
                continue;
            }

            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                if is_nav {
                    items.push(NavBarItem::new("Up/Dn", "Navigate"));
                    has_nav = true;
                } else if is_scroll {
                    items.push(NavBarItem::new("Up/Dn", "Scroll"));
                    has_scroll = true;
                } else {
                    items.push(NavBarItem::new(&binding.display, &binding.description));
                }
            }
        }

        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let groups: [(&str, fn(&KeyAction) -> bool); 3] = [
            ("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::NavigateUp
                        | KeyAction::NavigateDown
                        | KeyAction::Home
                        | KeyAction::End
                        | KeyAction::NextField
                        | KeyAction::PreviousField
                        | KeyAction::ScrollUp
                        | KeyAction::ScrollDown
                )
            }),
            ("Actions", |a| {
                matches!(a, KeyAction::Select | KeyAction::Submit | KeyAction::Toggle)
            }),
            ("General", |a| {
                matches!(
                    a,
                    KeyAction::Back | KeyAction::Help | KeyAction::Quit | KeyAction::ForceQuit
                )
            }),
        ];

        let bindings = self.get_bindings(mode);
        groups
            .iter()
            .filter_map(|(title, belongs)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| belongs(&b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

impl NavBarItem {
    fn new(key_display: &str, action_label: &str) -> Self {
        Self {
            key_display: key_display.to_string(),
            action_label: action_label.to_string(),
        }
    }
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forms_hide_letter_shortcuts() {
        let ctx = KeybindingContext::new();
        let bindings = ctx.get_bindings(&AppMode::AddBook);
        assert!(!bindings.iter().any(|b| b.action == KeyAction::Quit));
        assert!(bindings.iter().any(|b| b.action == KeyAction::ForceQuit));
    }

    #[test]
    fn test_main_menu_nav_items_combine_up_down() {
        let ctx = KeybindingContext::new();
        let items = ctx.get_nav_items(&AppMode::MainMenu);
        assert_eq!(items[0], NavBarItem::new("Up/Dn", "Navigate"));
        assert_eq!(items.iter().filter(|i| i.key_display == "Up/Dn").count(), 1);
        assert!(items.iter().any(|i| i.action_label == "Quit"));
    }

    #[test]
    fn test_remove_form_has_no_toggle() {
        let ctx = KeybindingContext::new();
        let items = ctx.get_nav_items(&AppMode::RemoveBook);
        assert!(!items.iter().any(|i| i.key_display == "Space"));
    }

    #[test]
    fn test_help_content_sections() {
        let ctx = KeybindingContext::new();
        let sections = ctx.get_help_content(&AppMode::SearchBooks);
        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Navigation", "Actions", "General"]);
    }
}
