//! Form rendering module
//!
//! Draws the add / remove / search forms: one row per field, the focused
//! row highlighted, and the form's key hints underneath.

use crate::input::{BookForm, FieldValue};
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width reserved for field labels
const LABEL_WIDTH: usize = 26;

/// Lines for every field of the form
pub fn form_lines(form: &BookForm) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, field) in form.fields.iter().enumerate() {
        let focused = i == form.focused;
        let marker = if focused { "▸ " } else { "  " };
        let mut value = field.value.display();
        if focused && !field.value.is_toggle() {
            value.push('_');
        }
        let value_style = if field.pristine {
            Styles::text_muted()
        } else if focused {
            Styles::focused()
        } else if let FieldValue::Checkbox(true) = field.value {
            Style::default().fg(Colors::SUCCESS)
        } else {
            Styles::text()
        };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Colors::SECONDARY)),
            Span::styled(format!("{:<width$}", field.label, width = LABEL_WIDTH), Styles::label()),
            Span::styled(value, value_style),
        ]));
        lines.push(Line::from(""));
    }
    lines
}

/// Render a form in the specified area
pub fn render_form_in_area(f: &mut Frame, form: &BookForm, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let widget = Paragraph::new(form_lines(form))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", form.kind))
                .title_style(Styles::title())
                .border_style(Styles::border_active()),
        )
        .style(Styles::panel_bg());
    f.render_widget(widget, chunks[0]);

    f.render_widget(
        Paragraph::new(form.instructions()).style(Style::default().fg(Colors::FG_SECONDARY)),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::FormKind;

    fn text_of(lines: &[Line<'static>]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.to_string()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_form_lines_show_labels_and_cursor() {
        let form = BookForm::new(FormKind::AddBook);
        let text = text_of(&form_lines(&form));
        assert!(text.contains("Title"));
        assert!(text.contains("Publication Year"));
        assert!(text.contains("1000"));
        assert!(text.contains("[ ]"));
        assert!(text.contains("▸ Title"));
    }

    #[test]
    fn test_search_form_shows_radio() {
        let form = BookForm::new(FormKind::SearchBooks);
        let text = text_of(&form_lines(&form));
        assert!(text.contains("< title >"));
    }
}
