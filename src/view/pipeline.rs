//! Derived-list pipeline: filter, then sort, then paginate
//!
//! Every function here is pure over borrowed books. The view calls them on
//! each read so the displayed page can never go stale.

use super::sort::SortState;
use crate::catalog::Book;

/// Rows per page
pub const PAGE_SIZE: usize = 5;

/// Books whose title or author contains `query`, ignoring case, in working-set order
pub fn filter<'a>(books: &'a [Book], query: &str) -> Vec<&'a Book> {
    let needle = query.to_lowercase();
    books.iter().filter(|b| b.matches_lowercase(&needle)).collect()
}

/// Stable in-place sort; ties keep their filtered order in both directions
pub fn sort(rows: &mut [&Book], state: SortState) {
    if let Some(key) = state.key {
        rows.sort_by(|a, b| state.direction.apply(key.compare(a, b)));
    }
}

/// Number of pages needed for `len` rows; an empty list still has one page
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a 1-based page number into `1..=count`
pub fn clamp_page(page: usize, count: usize) -> usize {
    page.clamp(1, count.max(1))
}

/// Rows shown on 1-based `page`; empty when the page is past the end
pub fn paginate<'r, 'a>(rows: &'r [&'a Book], page: usize, page_size: usize) -> &'r [&'a Book] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= rows.len() {
        return &[];
    }
    let end = (start + page_size).min(rows.len());
    &rows[start..end]
}

/// filter → sort in one step
pub fn derive<'a>(books: &'a [Book], query: &str, state: SortState) -> Vec<&'a Book> {
    let mut rows = filter(books, query);
    sort(&mut rows, state);
    rows
}
