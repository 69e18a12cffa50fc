//! CatalogView: the working set plus transient screen state
//!
//! All operations are synchronous. Unknown ids are silent no-ops; `add` is
//! the only fallible call, once the id space is spent.
//! The displayed page is recomputed from the working set on every call to
//! [`CatalogView::display`].

pub mod form;
pub mod pipeline;
pub mod sort;

pub use form::{Dialog, DialogKind, FormBuffer, FormField};
pub use pipeline::PAGE_SIZE;
pub use sort::{SortDirection, SortKey, SortState};

use std::ops::RangeInclusive;

use tracing::{debug, warn};

use crate::catalog::{Book, BookId, Catalog};
use crate::Result;

/// View controller owning the catalog and its screen state
#[derive(Debug, Clone)]
pub struct CatalogView {
    catalog: Catalog,
    query: String,
    sort: SortState,
    page: usize,
    dialog: Option<Dialog>,
}

impl CatalogView {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            query: String::new(),
            sort: SortState::default(),
            page: 1,
            dialog: None,
        }
    }

    /// View over the built-in seed books
    pub fn seeded() -> Self {
        Self::new(Catalog::seeded())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn books(&self) -> &[Book] {
        self.catalog.books()
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.catalog.get(id)
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    /// Current 1-based page
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    // --- derived list ---

    /// Filtered and sorted rows across all pages
    pub fn matching(&self) -> Vec<&Book> {
        pipeline::derive(self.catalog.books(), &self.query, self.sort)
    }

    pub fn matching_count(&self) -> usize {
        pipeline::filter(self.catalog.books(), &self.query).len()
    }

    pub fn page_count(&self) -> usize {
        pipeline::page_count(self.matching_count(), PAGE_SIZE)
    }

    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.page_count()
    }

    /// Rows on the current page
    pub fn display(&self) -> Vec<&Book> {
        let rows = self.matching();
        pipeline::paginate(&rows, self.page, PAGE_SIZE).to_vec()
    }

    /// Header arrow for a column
    pub fn sort_indicator(&self, key: SortKey) -> &'static str {
        self.sort.indicator(key)
    }

    // --- list controls ---

    /// Set the active query; the empty query matches every book
    pub fn search(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.reclamp_page();
        debug!(query = %self.query, matches = self.matching_count(), "Search updated");
    }

    /// Pick a sort column: the active column toggles direction, a new one starts ascending
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort = self.sort.select(key);
        debug!(key = %key, direction = ?self.sort.direction, "Sort updated");
    }

    /// Return to working-set order
    pub fn clear_sort(&mut self) {
        self.sort = SortState::default();
        debug!("Sort cleared");
    }

    /// Select a page, clamped into `1..=page_count`
    pub fn set_page(&mut self, page: usize) {
        let count = self.page_count();
        let clamped = pipeline::clamp_page(page, count);
        if clamped != page {
            debug!(requested = page, clamped, count, "Page request clamped");
        }
        self.page = clamped;
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    // --- working-set mutations ---

    /// Append a new book. Empty title or author is accepted.
    pub fn add(&mut self, title: impl Into<String>, author: impl Into<String>) -> Result<BookId> {
        let id = self.catalog.insert(title.into(), author.into())?;
        debug!(id = %id, "Book added");
        Ok(id)
    }

    /// Replace title and author of `id`; returns whether a book was changed
    pub fn edit(&mut self, id: BookId, title: impl Into<String>, author: impl Into<String>) -> bool {
        let changed = self.catalog.update(id, title.into(), author.into());
        if changed {
            self.reclamp_page();
            debug!(id = %id, "Book edited");
        } else {
            debug!(id = %id, "Edit ignored for unknown id");
        }
        changed
    }

    /// Delete `id`; returns the removed book if it existed
    pub fn remove(&mut self, id: BookId) -> Option<Book> {
        let removed = self.catalog.remove(id);
        if removed.is_some() {
            self.reclamp_page();
            debug!(id = %id, "Book removed");
        } else {
            debug!(id = %id, "Remove ignored for unknown id");
        }
        removed
    }

    // --- dialogs ---

    /// Open the add dialog with an empty form
    pub fn open_add(&mut self) {
        self.dialog = Some(Dialog {
            kind: DialogKind::Add,
            form: FormBuffer::default(),
        });
    }

    /// Open the edit dialog pre-filled from `id`; no-op if `id` is absent
    pub fn open_edit(&mut self, id: BookId) -> bool {
        match self.catalog.get(id) {
            Some(book) => {
                self.dialog = Some(Dialog {
                    kind: DialogKind::Edit(id),
                    form: FormBuffer::from_book(book),
                });
                true
            }
            None => false,
        }
    }

    /// Stage a value in the open dialog's form
    pub fn update_form(&mut self, field: FormField, value: impl Into<String>) {
        if let Some(dialog) = self.dialog.as_mut() {
            dialog.form.set(field, value);
        }
    }

    /// Close the dialog, discarding its form buffer
    pub fn cancel_dialog(&mut self) {
        if self.dialog.take().is_some() {
            debug!("Dialog cancelled");
        }
    }

    /// Commit the open dialog and close it.
    ///
    /// Returns the id that was added or edited, or `None` when no dialog was
    /// open, the book being edited no longer exists, or no id was left to add.
    pub fn confirm_dialog(&mut self) -> Option<BookId> {
        let Dialog { kind, form } = self.dialog.take()?;
        match kind {
            DialogKind::Add => match self.add(form.title, form.author) {
                Ok(id) => Some(id),
                Err(e) => {
                    warn!(error = %e, "Add rejected");
                    None
                }
            },
            DialogKind::Edit(id) => self.edit(id, form.title, form.author).then_some(id),
        }
    }

    fn reclamp_page(&mut self) {
        self.page = pipeline::clamp_page(self.page, self.page_count());
    }
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new(Catalog::new())
    }
}
