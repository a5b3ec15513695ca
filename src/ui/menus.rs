//! Menu rendering module
//!
//! Renders the main menu with a description panel for the highlighted entry.

use crate::app::{AppState, MenuItem};
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

fn menu_icon(item: MenuItem) -> &'static str {
    match item {
        MenuItem::AddBook => "➕",
        MenuItem::RemoveBook => "❌",
        MenuItem::SearchBooks => "🔍",
        MenuItem::ViewAll => "📖",
        MenuItem::Statistics => "📊",
        MenuItem::Quit => "◀️ ",
    }
}

/// Render main menu in specified area
pub fn render_main_menu_in_area(f: &mut Frame, state: &AppState, area: Rect) {
    // Split content into menu and description
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let menu_items: Vec<ListItem> = MenuItem::all()
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let selected = index == state.main_menu_selection;
            let style = if selected {
                Style::default()
                    .fg(Colors::SECONDARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Colors::FG_PRIMARY)
            };
            let prefix = if selected { "▸ " } else { "  " };
            ListItem::new(format!("{}{} {}", prefix, menu_icon(item), item)).style(style)
        })
        .collect();

    let menu = List::new(menu_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Menu ")
                .title_style(Styles::title())
                .border_style(Styles::border_active()),
        )
        .style(Styles::panel_bg());

    f.render_widget(menu, content_chunks[0]);

    // Description panel
    let description = state.selected_menu_item().description();
    let desc_widget = Paragraph::new(description)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" About ")
                .title_style(Styles::title())
                .border_style(Styles::border_active()),
        )
        .style(Styles::panel_bg().fg(Colors::FG_SECONDARY))
        .wrap(Wrap { trim: false });

    f.render_widget(desc_widget, content_chunks[1]);
}
