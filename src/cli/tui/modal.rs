//! Modal overlay system for the TUI

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::state::FormInputs;
use super::theme::Theme;
use crate::view::{Dialog, FormField};

/// Calculate centered modal area
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render the add/edit book dialog
pub fn render_book_form(frame: &mut Frame, area: Rect, dialog: &Dialog, form: &FormInputs, theme: &Theme) {
    let modal_area = centered_rect(60, 50, area);
    frame.render_widget(Clear, modal_area);

    let modal_block = Block::default()
        .title(format!(" {} ", dialog.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.modal_border);

    let inner_area = modal_block.inner(modal_area);
    frame.render_widget(modal_block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title field
            Constraint::Length(3), // Author field
            Constraint::Min(0),    // Spacing
            Constraint::Length(1), // Help text
        ])
        .split(inner_area);

    render_field(frame, chunks[0], form, FormField::Title, theme);
    render_field(frame, chunks[1], form, FormField::Author, theme);

    let help_text = Line::from(vec![
        Span::styled("[Enter]", theme.key_hint),
        Span::raw(format!(" {}  ", dialog.confirm_label())),
        Span::styled("[Tab]", theme.key_hint),
        Span::raw(" Next field  "),
        Span::styled("[Esc]", theme.key_hint),
        Span::raw(" Close"),
    ]);
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(theme.muted);
    frame.render_widget(help, chunks[3]);
}

fn render_field(frame: &mut Frame, area: Rect, form: &FormInputs, field: FormField, theme: &Theme) {
    let focused = form.current_field == field;
    let input = form.input(field);

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(theme.field_label(focused));

    let spans = if focused {
        let (before, after) = split_at_cursor(input.value(), input.cursor());
        vec![
            Span::raw(before.to_string()),
            Span::styled("█", theme.focused),
            Span::raw(after.to_string()),
        ]
    } else if input.value().is_empty() {
        vec![Span::styled(
            format!("Enter {}", field.label().to_lowercase()),
            theme.muted,
        )]
    } else {
        vec![Span::raw(input.value().to_string())]
    };

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Split text at a character cursor position
pub fn split_at_cursor(text: &str, cursor: usize) -> (&str, &str) {
    let byte = text.char_indices().nth(cursor).map_or(text.len(), |(i, _)| i);
    text.split_at(byte)
}
