use book_catalog::cli::tui::screens::catalog::render;
use book_catalog::cli::tui::state::ScreenState;
use book_catalog::cli::tui::theme::Theme;
use book_catalog::CatalogView;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;

fn draw(state: &ScreenState) -> Vec<String> {
    let backend = TestBackend::new(120, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    let theme = Theme::default();
    terminal.draw(|frame| render(frame, state, &theme)).unwrap();

    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn screen_contains(lines: &[String], text: &str) -> bool {
    lines.iter().any(|line| line.contains(text))
}

fn press(state: &mut ScreenState, c: char) {
    state.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
}

#[test]
fn test_first_page_is_rendered() {
    let state = ScreenState::new(CatalogView::seeded());
    let lines = draw(&state);

    assert!(screen_contains(&lines, "Book Catalog"));
    assert!(screen_contains(&lines, "10 books • 10 matching"));
    assert!(screen_contains(&lines, "Harry Potter and the Sorcerer's Stone"));
    assert!(screen_contains(&lines, "Henrietta Consuelo Sansom"));
    assert!(!screen_contains(&lines, "Discovery of India"));
    assert!(screen_contains(&lines, "press / to search"));
}

#[test]
fn test_unsorted_headers_show_down_arrows() {
    let state = ScreenState::new(CatalogView::seeded());
    let lines = draw(&state);
    assert!(screen_contains(&lines, "id ▼"));
    assert!(screen_contains(&lines, "Title ▼"));
    assert!(screen_contains(&lines, "Author ▼"));
}

#[test]
fn test_active_ascending_column_shows_up_arrow() {
    let mut state = ScreenState::new(CatalogView::seeded());
    press(&mut state, 't');
    let lines = draw(&state);
    assert!(screen_contains(&lines, "Title ▲"));
    assert!(screen_contains(&lines, "Author ▼"));

    press(&mut state, 't');
    let lines = draw(&state);
    assert!(screen_contains(&lines, "Title ▼"));
    assert!(screen_contains(&lines, "To Kill a Mockingbird"));
}

#[test]
fn test_pagination_lists_every_page() {
    let state = ScreenState::new(CatalogView::seeded());
    let lines = draw(&state);
    assert!(screen_contains(&lines, "Pages:  1   2"));
}

#[test]
fn test_selected_row_shows_actions() {
    let state = ScreenState::new(CatalogView::seeded());
    let lines = draw(&state);
    let row = lines
        .iter()
        .find(|line| line.contains("Harry Potter"))
        .unwrap();
    assert!(row.contains("[e] Edit [d] Delete"));
}

#[test]
fn test_empty_search_result_title() {
    let mut state = ScreenState::new(CatalogView::seeded());
    press(&mut state, '/');
    for c in "zzz".chars() {
        press(&mut state, c);
    }
    state.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    let lines = draw(&state);
    assert!(screen_contains(&lines, "No books match"));
    assert!(screen_contains(&lines, "Search: zzz"));
    assert!(screen_contains(&lines, "10 books • 0 matching"));
}

#[test]
fn test_add_dialog_is_drawn() {
    let mut state = ScreenState::new(CatalogView::seeded());
    press(&mut state, 'a');
    let lines = draw(&state);
    assert!(screen_contains(&lines, "Add Book"));
}

#[test]
fn test_edit_dialog_shows_current_values() {
    let mut state = ScreenState::new(CatalogView::seeded());
    press(&mut state, 'e');
    let lines = draw(&state);
    assert!(screen_contains(&lines, "Edit Book"));
    assert!(screen_contains(&lines, "J.K. Rowling"));
}

#[test]
fn test_status_replaces_hints() {
    let mut state = ScreenState::new(CatalogView::seeded());
    press(&mut state, 'd');
    let lines = draw(&state);
    assert!(screen_contains(
        &lines,
        "Deleted \"Harry Potter and the Sorcerer's Stone\""
    ));
}
