//! Seed data for the working set
//!
//! The built-in list mirrors the catalog the screen has always opened with.
//! An alternative list can be imported from a JSON or YAML file; it is read
//! once at startup and never written back.

use std::path::Path;

use super::Book;
use crate::{CatalogError, Result};

/// The ten books the catalog starts with
pub fn default_books() -> Vec<Book> {
    vec![
        Book::new(1, "Harry Potter and the Sorcerer's Stone", "J.K. Rowling"),
        Book::new(2, "To Kill a Mockingbird", "Harper Lee"),
        Book::new(3, "The Great Gatsby", "F. Scott Fitzgerald"),
        Book::new(4, "The Living Mountain", "JK Rowling"),
        Book::new(5, "Henrietta Consuelo Sansom", "Charles Dickens"),
        Book::new(6, "The Merchant of Venice ", "William Shakespeare"),
        Book::new(7, "first really profitable lesson", "Mark Twain"),
        Book::new(8, "Discovery of India", "Jawaharlal Nehru"),
        Book::new(9, "Making India Awesome", "Chetan Bhagat"),
        Book::new(10, "A Passage to England ", "Nirad C. Chaudhuri"),
    ]
}

/// Seed file encodings, picked by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    Json,
    Yaml,
}

impl SeedFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(SeedFormat::Json),
            Some("yaml") | Some("yml") => Ok(SeedFormat::Yaml),
            other => Err(CatalogError::Seed(format!(
                "unsupported seed file extension {:?} for {}",
                other.unwrap_or(""),
                path.display()
            ))),
        }
    }
}

/// Parse a list of books from text in the given format
pub fn parse_books(contents: &str, format: SeedFormat) -> Result<Vec<Book>> {
    let books = match format {
        SeedFormat::Json => serde_json::from_str(contents)?,
        SeedFormat::Yaml => serde_yaml_ng::from_str(contents)?,
    };
    Ok(books)
}

/// Load seed books from a JSON or YAML file
pub fn load_seed_file<P: AsRef<Path>>(path: P) -> Result<Vec<Book>> {
    let path = path.as_ref();
    let format = SeedFormat::from_path(path)?;

    let contents = std::fs::read_to_string(path).map_err(|e| {
        CatalogError::Seed(format!("Failed to read seed file {}: {}", path.display(), e))
    })?;

    let books = parse_books(&contents, format)?;
    tracing::info!(path = %path.display(), count = books.len(), "Loaded seed books");
    Ok(books)
}
