use book_catalog::{Book, BookId, CatalogView, SortDirection, SortKey, PAGE_SIZE};
use pretty_assertions::assert_eq;

fn ids(rows: &[&Book]) -> Vec<u32> {
    rows.iter().map(|b| b.id.0).collect()
}

fn all_pages(view: &mut CatalogView) -> Vec<u32> {
    let mut out = Vec::new();
    for page in view.page_numbers() {
        view.set_page(page);
        out.extend(ids(&view.display()));
    }
    out
}

#[test]
fn test_seed_data_pages() {
    let mut view = CatalogView::seeded();
    assert_eq!(PAGE_SIZE, 5);
    assert_eq!(view.page(), 1);
    assert_eq!(ids(&view.display()), vec![1, 2, 3, 4, 5]);

    view.set_page(2);
    assert_eq!(ids(&view.display()), vec![6, 7, 8, 9, 10]);
}

#[test]
fn test_search_rowling_case_insensitive() {
    let mut view = CatalogView::seeded();
    view.search("rowling");
    assert_eq!(ids(&view.display()), vec![1, 4]);

    view.search("ROWLING");
    assert_eq!(ids(&view.display()), vec![1, 4]);
}

#[test]
fn test_search_matches_title_too() {
    let mut view = CatalogView::seeded();
    view.search("india");
    assert_eq!(ids(&view.display()), vec![8, 9]);
    view.search("");
    assert_eq!(view.matching_count(), 10);
}

#[test]
fn test_sort_title_toggle_reverses_visible_order() {
    let mut view = CatalogView::seeded();

    view.sort_by(SortKey::Title);
    assert_eq!(view.sort().direction, SortDirection::Ascending);
    let ascending: Vec<String> = view.display().iter().map(|b| b.title.clone()).collect();
    assert_eq!(
        ascending,
        vec![
            "A Passage to England ",
            "Discovery of India",
            "first really profitable lesson",
            "Harry Potter and the Sorcerer's Stone",
            "Henrietta Consuelo Sansom",
        ]
    );

    view.sort_by(SortKey::Title);
    assert_eq!(view.sort().direction, SortDirection::Descending);
    let descending: Vec<String> = view.display().iter().map(|b| b.title.clone()).collect();
    assert_eq!(
        descending,
        vec![
            "To Kill a Mockingbird",
            "The Merchant of Venice ",
            "The Living Mountain",
            "The Great Gatsby",
            "Making India Awesome",
        ]
    );
}

#[test]
fn test_switching_sort_key_starts_ascending() {
    let mut view = CatalogView::seeded();
    view.sort_by(SortKey::Title);
    view.sort_by(SortKey::Title);
    view.sort_by(SortKey::Author);
    assert_eq!(view.sort().key, Some(SortKey::Author));
    assert_eq!(view.sort().direction, SortDirection::Ascending);
    assert_eq!(view.display()[0].author, "Charles Dickens");
}

#[test]
fn test_sort_by_id_descending() {
    let mut view = CatalogView::seeded();
    view.sort_by(SortKey::Id);
    view.sort_by(SortKey::Id);
    assert_eq!(ids(&view.display()), vec![10, 9, 8, 7, 6]);
    view.clear_sort();
    assert_eq!(ids(&view.display()), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_pages_cover_every_match_once() {
    let mut view = CatalogView::seeded();
    for i in 0..7 {
        view.add(format!("Extra {i}"), "Anon").unwrap();
    }
    view.sort_by(SortKey::Author);
    assert_eq!(view.matching_count(), 17);
    assert_eq!(view.page_count(), 4);

    let joined = all_pages(&mut view);
    assert_eq!(joined, ids(&view.matching()));

    let mut sorted = joined.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), 17);
}

#[test]
fn test_search_then_sort_then_page() {
    let mut view = CatalogView::seeded();
    view.search("the");
    view.sort_by(SortKey::Title);
    view.sort_by(SortKey::Title);
    let titles: Vec<&str> = view.matching().iter().map(|b| b.title.as_str()).collect();
    for title in &titles {
        let book = view.books().iter().find(|b| b.title == *title).unwrap();
        assert!(
            book.title.to_lowercase().contains("the") || book.author.to_lowercase().contains("the")
        );
    }
    let mut expected = titles.clone();
    expected.sort_by_key(|t| std::cmp::Reverse(t.to_lowercase()));
    assert_eq!(titles, expected);
}

#[test]
fn test_add_remove_roundtrip_keeps_ids() {
    let mut view = CatalogView::seeded();
    let before: Vec<BookId> = view.books().iter().map(|b| b.id).collect();

    let id = view.add("New", "Writer").unwrap();
    assert!(!before.contains(&id));
    view.remove(id);

    let after: Vec<BookId> = view.books().iter().map(|b| b.id).collect();
    assert_eq!(before, after);
}

#[test]
fn test_edit_existing_and_missing() {
    let mut view = CatalogView::seeded();
    assert!(view.edit(BookId(7), "Roughing It", "Mark Twain"));
    assert_eq!(view.get(BookId(7)).unwrap().title, "Roughing It");

    let before = view.books().to_vec();
    assert!(!view.edit(BookId(100), "x", "y"));
    assert_eq!(view.books(), before.as_slice());
}

#[test]
fn test_double_delete_is_silent() {
    let mut view = CatalogView::seeded();
    assert!(view.remove(BookId(3)).is_some());
    assert!(view.remove(BookId(3)).is_none());
    assert_eq!(view.len(), 9);
}

#[test]
fn test_delete_everything_leaves_one_empty_page() {
    let mut view = CatalogView::seeded();
    for id in 1..=10 {
        view.remove(BookId(id));
    }
    assert!(view.is_empty());
    assert_eq!(view.page_count(), 1);
    assert_eq!(view.page(), 1);
    assert!(view.display().is_empty());
}

#[test]
fn test_edit_out_of_filter_returns_to_first_page() {
    let mut view = CatalogView::seeded();
    view.search("i");
    view.set_page(2);
    assert_eq!(view.page(), 2);

    for id in 6..=10 {
        view.edit(BookId(id), "Emma", "Jane Austen");
    }
    assert_eq!(view.matching_count(), 5);
    assert_eq!(view.page(), 1);
    assert_eq!(ids(&view.display()), vec![1, 2, 3, 4, 5]);
}
