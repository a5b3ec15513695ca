//! Results and statistics views

use crate::app::ResultsView;
use crate::catalog::Statistics;
use crate::theme::{Colors, Styles, Theme};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Render a list of book summaries, or its empty warning
pub fn render_results_in_area(f: &mut Frame, view: &ResultsView, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", view.title, view.books.len()))
        .title_style(Styles::title())
        .border_style(Styles::border_active());

    if view.books.is_empty() {
        let warning = Paragraph::new(Line::from(Span::styled(
            format!("⚠ {}", view.empty_message),
            Style::default().fg(Colors::WARNING),
        )))
        .block(block)
        .alignment(Alignment::Center)
        .style(Styles::panel_bg());
        f.render_widget(warning, area);
        return;
    }

    let items: Vec<ListItem> = view
        .books
        .iter()
        .skip(view.scroll_offset)
        .map(|book| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    book.title.clone(),
                    Theme::book_style(book.read).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(
                        " by {} ({}) - {} - {}",
                        book.author,
                        book.year,
                        book.genre,
                        book.status()
                    ),
                    Theme::book_style(book.read),
                ),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block).style(Styles::panel_bg()), area);
}

/// Lines of the statistics panel
pub fn statistics_lines(stats: &Statistics) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Total books:     ", Styles::title()),
            Span::styled(stats.total.to_string(), Styles::text()),
        ]),
        Line::from(vec![
            Span::styled("Books read:      ", Styles::title()),
            Span::styled(stats.read.to_string(), Styles::text()),
        ]),
        Line::from(vec![
            Span::styled("Percentage read: ", Styles::title()),
            Span::styled(
                format!("{}%", stats.formatted_percentage()),
                Style::default().fg(Colors::SUCCESS).add_modifier(Modifier::BOLD),
            ),
        ]),
    ]
}

/// Render catalog statistics
pub fn render_statistics_in_area(f: &mut Frame, stats: &Statistics, area: Rect) {
    let widget = Paragraph::new(statistics_lines(stats))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Library Statistics ")
                .title_style(Styles::title())
                .border_style(Styles::border_active()),
        )
        .style(Styles::panel_bg())
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
