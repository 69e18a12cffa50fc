//! The working set: an ordered collection of books with id allocation
//!
//! Records are kept in insertion order. Display order is never stored here;
//! it is derived by the view pipeline on every read.

pub mod book;
pub mod seed;

pub use book::{Book, BookId};

use std::collections::HashSet;

use crate::{CatalogError, Result};

/// In-memory collection of books
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    /// High-water mark for id allocation; never decreases, so ids are never reused.
    /// Wider than `BookId` so it can step past `u32::MAX` once the id space is spent.
    next_id: u64,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            next_id: 1,
        }
    }

    /// Catalog holding the built-in seed books
    pub fn seeded() -> Self {
        // Built-in ids are unique
        Self::from_books_unchecked(seed::default_books())
    }

    /// Build a catalog from existing records.
    ///
    /// Rejects duplicate ids, and seeds whose largest id leaves no room to
    /// allocate a new one.
    pub fn from_books(books: Vec<Book>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.id) {
                return Err(CatalogError::DuplicateId(book.id));
            }
        }
        if let Some(max) = books.iter().map(|b| b.id).max() {
            if max.0.checked_add(1).is_none() {
                return Err(CatalogError::Seed(format!(
                    "book id {} leaves no room for new ids",
                    max
                )));
            }
        }
        Ok(Self::from_books_unchecked(books))
    }

    fn from_books_unchecked(books: Vec<Book>) -> Self {
        let next_id = books
            .iter()
            .map(|b| u64::from(b.id.0))
            .max()
            .map_or(1, |max| max + 1);
        Self { books, next_id }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Append a new book and return its freshly allocated id.
    ///
    /// Fails with [`CatalogError::IdsExhausted`] once `u32::MAX` has been handed out.
    pub fn insert(&mut self, title: String, author: String) -> Result<BookId> {
        let raw = u32::try_from(self.next_id).map_err(|_| CatalogError::IdsExhausted)?;
        let id = BookId(raw);
        self.next_id += 1;
        self.books.push(Book { id, title, author });
        Ok(id)
    }

    /// Replace title and author of the matching book.
    ///
    /// Returns `false` and leaves the set untouched when `id` is absent.
    pub fn update(&mut self, id: BookId, title: String, author: String) -> bool {
        match self.books.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                book.title = title;
                book.author = author;
                true
            }
            None => false,
        }
    }

    /// Remove the matching book, returning it if it was present
    pub fn remove(&mut self, id: BookId) -> Option<Book> {
        let position = self.books.iter().position(|b| b.id == id)?;
        Some(self.books.remove(position))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_seeded_catalog() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.get(BookId(4)).unwrap().author, "JK Rowling");
    }

    #[test]
    fn test_insert_allocates_after_max() {
        let mut catalog = Catalog::from_books(vec![Book::new(3, "a", "b"), Book::new(8, "c", "d")]).unwrap();
        assert_eq!(catalog.insert("e".into(), "f".into()).unwrap(), BookId(9));
        assert_eq!(catalog.insert("g".into(), "h".into()).unwrap(), BookId(10));
    }

    #[test]
    fn test_ids_not_reused_after_removing_max() {
        let mut catalog = Catalog::seeded();
        assert!(catalog.remove(BookId(10)).is_some());
        let id = catalog.insert("New".into(), "Author".into()).unwrap();
        assert_eq!(id, BookId(11));
    }

    #[test]
    fn test_ids_not_reused_after_removing_middle() {
        // Length-based allocation would hand out 10 again here
        let mut catalog = Catalog::seeded();
        catalog.remove(BookId(2));
        let id = catalog.insert("New".into(), "Author".into()).unwrap();
        assert_eq!(id, BookId(11));
        let ids: HashSet<BookId> = catalog.books().iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Catalog::from_books(vec![Book::new(1, "a", "b"), Book::new(1, "c", "d")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(BookId(1))));
    }

    #[test]
    fn test_empty_catalog_starts_at_one() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.insert(String::new(), String::new()).unwrap(), BookId(1));
    }

    #[test]
    fn test_update_and_remove_missing_are_noops() {
        let mut catalog = Catalog::seeded();
        let before = catalog.books().to_vec();
        assert!(!catalog.update(BookId(99), "x".into(), "y".into()));
        assert!(catalog.remove(BookId(99)).is_none());
        assert_eq!(catalog.books(), before.as_slice());
    }

    #[test]
    fn test_seed_with_max_id_rejected() {
        let err = Catalog::from_books(vec![Book::new(u32::MAX, "a", "b")]).unwrap_err();
        assert!(matches!(err, CatalogError::Seed(_)));
    }

    #[test]
    fn test_insert_stops_at_end_of_id_space() {
        let mut catalog = Catalog::from_books(vec![Book::new(u32::MAX - 1, "a", "b")]).unwrap();
        assert_eq!(catalog.insert("c".into(), "d".into()).unwrap(), BookId(u32::MAX));

        let err = catalog.insert("e".into(), "f".into()).unwrap_err();
        assert!(matches!(err, CatalogError::IdsExhausted));
        assert_eq!(catalog.len(), 2);

        let ids: HashSet<BookId> = catalog.books().iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), 2);
    }
}
