use crate::catalog::{Book, BookId};

/// Text staged in an open add/edit dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBuffer {
    pub title: String,
    pub author: String,
}

impl FormBuffer {
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Author => &self.author,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        match field {
            FormField::Title => self.title = value.into(),
            FormField::Author => self.author = value.into(),
        }
    }
}

/// Which field is focused in the book form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Author,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Author,
            FormField::Author => FormField::Title,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Author => "Author",
        }
    }
}

/// What confirming the dialog will do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Add,
    Edit(BookId),
}

/// An open add/edit dialog and its form buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub form: FormBuffer,
}

impl Dialog {
    pub fn title(&self) -> &'static str {
        match self.kind {
            DialogKind::Add => "Add Book",
            DialogKind::Edit(_) => "Edit Book",
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        match self.kind {
            DialogKind::Add => "Add Book",
            DialogKind::Edit(_) => "Save Changes",
        }
    }
}
