//! Catalog table screen: search bar, sortable table, pagination and dialogs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::cli::tui::modal::{render_book_form, split_at_cursor};
use crate::cli::tui::state::{Mode, ScreenState};
use crate::cli::tui::theme::Theme;
use crate::view::SortKey;

pub fn render(frame: &mut Frame, state: &ScreenState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Book table
            Constraint::Length(1), // Pagination
            Constraint::Length(1), // Help / status
        ])
        .split(frame.area());

    render_header(frame, chunks[0], state, theme);
    render_search_bar(frame, chunks[1], state, theme);
    render_table(frame, chunks[2], state, theme);
    render_pagination(frame, chunks[3], state, theme);
    render_footer(frame, chunks[4], state, theme);

    if state.mode == Mode::Dialog {
        if let Some(dialog) = state.view.dialog() {
            render_book_form(frame, frame.area(), dialog, &state.form, theme);
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &ScreenState, theme: &Theme) {
    let header = Line::from(vec![
        Span::styled(" Book Catalog ", theme.success),
        Span::raw(format!(
            " {} books • {} matching",
            state.view.len(),
            state.view.matching_count()
        )),
    ]);

    let paragraph = Paragraph::new(header).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_search_bar(frame: &mut Frame, area: Rect, state: &ScreenState, theme: &Theme) {
    let active = state.mode == Mode::Search;
    let value = state.search_input.value();

    let mut spans = vec![Span::raw("Search: ")];
    if active {
        let (before, after) = split_at_cursor(value, state.search_input.cursor());
        spans.push(Span::raw(before.to_string()));
        spans.push(Span::styled("█", theme.focused));
        spans.push(Span::raw(after.to_string()));
    } else if value.is_empty() {
        spans.push(Span::styled("press / to search", theme.muted));
    } else {
        spans.push(Span::raw(value.to_string()));
    }

    let border = if active { theme.focused } else { theme.muted };
    let input = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(input, area);
}

fn column_header(state: &ScreenState, key: SortKey) -> String {
    let label = match key {
        SortKey::Id => "id",
        SortKey::Title => "Title",
        SortKey::Author => "Author",
    };
    format!("{} {}", label, state.view.sort_indicator(key))
}

fn render_table(frame: &mut Frame, area: Rect, state: &ScreenState, theme: &Theme) {
    let rows_on_page = state.view.display();

    let header = Row::new(vec![
        Cell::from(column_header(state, SortKey::Id)),
        Cell::from(column_header(state, SortKey::Title)),
        Cell::from(column_header(state, SortKey::Author)),
        Cell::from("Action"),
    ])
    .style(theme.header);

    let rows: Vec<Row> = rows_on_page
        .iter()
        .enumerate()
        .map(|(index, book)| {
            let actions = if index == state.selected_row && state.mode == Mode::Browse {
                Line::from(vec![
                    Span::styled("[e]", theme.key_hint),
                    Span::raw(" Edit "),
                    Span::styled("[d]", theme.key_hint),
                    Span::raw(" Delete"),
                ])
            } else {
                Line::from("")
            };
            Row::new(vec![
                Cell::from(book.id.to_string()),
                Cell::from(book.title.clone()),
                Cell::from(book.author.clone()),
                Cell::from(actions),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Percentage(45),
        Constraint::Percentage(30),
        Constraint::Min(16),
    ];

    let title = if rows_on_page.is_empty() {
        Line::from(Span::styled(" No books match ", theme.error))
    } else {
        Line::from(" Books ")
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL))
        .row_highlight_style(theme.selected);

    let mut table_state = TableState::default();
    if !rows_on_page.is_empty() {
        table_state.select(Some(state.selected_row));
    }
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn render_pagination(frame: &mut Frame, area: Rect, state: &ScreenState, theme: &Theme) {
    let mut spans = vec![Span::raw(" Pages: ")];
    for page in state.view.page_numbers() {
        spans.push(Span::styled(
            format!(" {} ", page),
            theme.page_button(page == state.view.page()),
        ));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &ScreenState, theme: &Theme) {
    if let Some(status) = &state.status {
        let line = Line::from(Span::styled(format!(" {}", status), theme.highlight));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let hints: &[(&str, &str)] = match state.mode {
        Mode::Browse => &[
            ("↑↓", "Move"),
            ("←→", "Page"),
            ("/", "Search"),
            ("a", "Add"),
            ("i/t/u", "Sort"),
            ("q", "Quit"),
        ],
        Mode::Search => &[("Enter", "Keep"), ("Esc", "Clear")],
        Mode::Dialog => &[("Enter", "Save"), ("Esc", "Close")],
    };

    let mut spans = vec![Span::raw(" ")];
    for (key, label) in hints {
        spans.push(Span::styled(*key, theme.key_hint));
        spans.push(Span::raw(format!(" {}  ", label)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).style(theme.muted), area);
}
