//! Header and common widget rendering
//!
//! This module contains the banner, title rendering, the status bar,
//! the navigation bar and the help overlay hook.

use crate::app::{AppState, StatusMessage};
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::{KeybindingContext, NavBarItem};
use crate::theme::{Colors, Styles, Theme};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header renderer containing the banner
pub struct HeaderRenderer {
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Render the banner and the catalog file it works on
    pub fn render_header(&self, f: &mut Frame, area: Rect, library_label: &str) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut lines = self.header_lines.clone();
        if !library_label.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("catalog: {}", library_label),
                Styles::text_muted(),
            )));
        }

        let header = Paragraph::new(lines)
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    /// Render a title section
    pub fn render_title(&self, f: &mut Frame, area: Rect, title: &str) {
        let title_widget = Paragraph::new(title)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Colors::PRIMARY));
        f.render_widget(title_widget, area);
    }

    fn create_header() -> Vec<Line<'static>> {
        [
            "┌─┐┬ ┬┌─┐┬  ┌─┐",
            "└─┐├─┤├┤ │  ├┤ ",
            "└─┘┴ ┴└─┘┴─┘└  ",
            "📚 Personal Library Manager",
        ]
        .into_iter()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(Colors::HEADER))))
        .collect()
    }
}

/// Render the status bar with the last feedback message
pub fn render_status_bar(f: &mut Frame, area: Rect, status: &StatusMessage) {
    let line = Line::from(vec![
        Span::styled(Theme::status_icon(status.kind), Theme::status_style(status.kind)),
        Span::styled(status.text.clone(), Theme::status_style(status.kind)),
    ]);
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Status ")
            .border_style(Styles::border_inactive()),
    );
    f.render_widget(widget, area);
}

/// Spans for a row of key hints
pub fn nav_bar_line(items: &[NavBarItem]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Styles::nav_hint()));
        }
        spans.push(Span::styled(item.key_display.clone(), Styles::nav_key()));
        spans.push(Span::styled(format!(" {}", item.action_label), Styles::nav_hint()));
    }
    Line::from(spans)
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let nav_items = keybinding_ctx.get_nav_items(&state.mode);
    let nav_bar = Paragraph::new(nav_bar_line(&nav_items)).alignment(Alignment::Center);
    f.render_widget(nav_bar, area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(&state.mode, keybinding_ctx);
    help_overlay.render(f, f.area());
}
