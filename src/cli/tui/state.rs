use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use crate::catalog::BookId;
use crate::view::{CatalogView, Dialog, DialogKind, FormField, SortKey};

/// Which control currently receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browse,
    Search,
    Dialog,
}

/// Text inputs backing the open add/edit dialog
#[derive(Debug, Default)]
pub struct FormInputs {
    pub title: Input,
    pub author: Input,
    pub current_field: FormField,
}

impl FormInputs {
    pub fn from_dialog(dialog: &Dialog) -> Self {
        Self {
            title: Input::new(dialog.form.title.clone()),
            author: Input::new(dialog.form.author.clone()),
            current_field: FormField::Title,
        }
    }

    pub fn input(&self, field: FormField) -> &Input {
        match field {
            FormField::Title => &self.title,
            FormField::Author => &self.author,
        }
    }

    fn current_mut(&mut self) -> &mut Input {
        match self.current_field {
            FormField::Title => &mut self.title,
            FormField::Author => &mut self.author,
        }
    }
}

/// Result of routing one key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
    Quit,
}

/// Everything the catalog screen renders from
#[derive(Debug)]
pub struct ScreenState {
    pub view: CatalogView,
    pub mode: Mode,
    /// Row highlighted on the current page
    pub selected_row: usize,
    pub search_input: Input,
    pub form: FormInputs,
    /// One-line feedback shown in the footer
    pub status: Option<String>,
}

impl ScreenState {
    pub fn new(view: CatalogView) -> Self {
        Self {
            view,
            mode: Mode::Browse,
            selected_row: 0,
            search_input: Input::default(),
            form: FormInputs::default(),
            status: None,
        }
    }

    /// Id of the highlighted row, if the page has any rows
    pub fn selected_id(&self) -> Option<BookId> {
        self.view.display().get(self.selected_row).map(|b| b.id)
    }

    /// Route a key press to the handler for the current mode
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::Search => self.handle_search_key(key),
            Mode::Dialog => self.handle_dialog_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyOutcome::Ignored;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_row = self.selected_row.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected_row += 1;
                self.clamp_selection();
            }
            KeyCode::Left | KeyCode::PageUp => {
                self.view.previous_page();
                self.selected_row = 0;
            }
            KeyCode::Right | KeyCode::PageDown => {
                self.view.next_page();
                self.selected_row = 0;
            }
            KeyCode::Char(c @ '1'..='9') => {
                let page = c as usize - '0' as usize;
                if page > self.view.page_count() {
                    return KeyOutcome::Ignored;
                }
                self.view.set_page(page);
                self.selected_row = 0;
            }
            KeyCode::Char('/') => {
                self.mode = Mode::Search;
            }
            KeyCode::Char('a') => {
                self.view.open_add();
                self.open_form();
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                let Some(id) = self.selected_id() else {
                    return KeyOutcome::Ignored;
                };
                if self.view.open_edit(id) {
                    self.open_form();
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                let Some(id) = self.selected_id() else {
                    return KeyOutcome::Ignored;
                };
                if let Some(book) = self.view.remove(id) {
                    self.status = Some(format!("Deleted \"{}\"", book.title));
                }
                self.clamp_selection();
            }
            KeyCode::Char('i') => self.sort_by(SortKey::Id),
            KeyCode::Char('t') => self.sort_by(SortKey::Title),
            KeyCode::Char('u') => self.sort_by(SortKey::Author),
            KeyCode::Char('c') => {
                self.view.clear_sort();
                self.selected_row = 0;
            }
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Handled
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Esc => {
                self.search_input.reset();
                self.view.search("");
                self.mode = Mode::Browse;
            }
            KeyCode::Enter => {
                self.mode = Mode::Browse;
            }
            _ => {
                if self.search_input.handle_event(&Event::Key(key)).is_none() {
                    return KeyOutcome::Ignored;
                }
                self.view.search(self.search_input.value());
            }
        }
        self.clamp_selection();
        KeyOutcome::Handled
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Esc => {
                self.view.cancel_dialog();
                self.mode = Mode::Browse;
            }
            KeyCode::Enter => {
                let adding = self
                    .view
                    .dialog()
                    .is_some_and(|d| d.kind == DialogKind::Add);
                self.status = match self.view.confirm_dialog() {
                    Some(id) if adding => Some(format!("Added book {}", id)),
                    Some(id) => Some(format!("Saved book {}", id)),
                    None if adding => Some("No book ids left to allocate".to_string()),
                    None => Some("Book no longer exists".to_string()),
                };
                self.mode = Mode::Browse;
                self.clamp_selection();
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.form.current_field = self.form.current_field.next();
            }
            _ => {
                let field = self.form.current_field;
                if self.form.current_mut().handle_event(&Event::Key(key)).is_none() {
                    return KeyOutcome::Ignored;
                }
                let value = self.form.input(field).value().to_string();
                self.view.update_form(field, value);
            }
        }
        KeyOutcome::Handled
    }

    fn open_form(&mut self) {
        if let Some(dialog) = self.view.dialog() {
            self.form = FormInputs::from_dialog(dialog);
            self.mode = Mode::Dialog;
        }
    }

    fn sort_by(&mut self, key: SortKey) {
        self.view.sort_by(key);
        self.selected_row = 0;
    }

    fn clamp_selection(&mut self) {
        let rows = self.view.display().len();
        self.selected_row = self.selected_row.min(rows.saturating_sub(1));
    }
}
