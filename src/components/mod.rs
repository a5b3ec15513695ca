//! Reusable TUI components
//!
//! - `keybindings` - Mode-aware keybinding registry feeding the nav bar and help
//! - `help_overlay` - Centered help window

pub mod help_overlay;
pub mod keybindings;
