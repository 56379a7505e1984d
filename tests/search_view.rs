// tests/search_view.rs

use archive_catalog::data::{Catalog, SearchView};
use archive_catalog::feed::Product;

fn p(key: &str, artist: &str, title: Option<&str>) -> Product {
    Product {
        key: key.into(),
        artist: artist.into(),
        title: title.map(Into::into),
        price: None,
        note: None,
    }
}

fn sample() -> Catalog {
    Catalog::new(vec![
        p("1", "Кино", Some("Группа крови")),
        p("2", "Аквариум", Some("Радио Африка")),
        p("3", "Pink Floyd", Some("The Wall")),
        p("4", "Zemfira", None),
        p("5", "Joy Division", Some("Closer")),
    ])
}

fn keys(view: &SearchView<'_>) -> Vec<String> {
    view.take(usize::MAX).map(|p| p.key.clone()).collect()
}

#[test]
fn empty_query_keeps_everything_in_order() {
    let cat = sample();
    let view = SearchView::from_query(&cat, "");
    assert_eq!(view.len(), 5);
    assert_eq!(view.row_ix, vec![0, 1, 2, 3, 4]);
}

#[test]
fn matches_title_or_artist_ignoring_case() {
    let cat = sample();
    assert_eq!(keys(&SearchView::from_query(&cat, "WALL")), ["3"]);
    assert_eq!(keys(&SearchView::from_query(&cat, "pink")), ["3"]);
    assert_eq!(keys(&SearchView::from_query(&cat, "zem")), ["4"]);
}

#[test]
fn cyrillic_is_lowercased_too() {
    let cat = sample();
    assert_eq!(keys(&SearchView::from_query(&cat, "КРОВИ")), ["1"]);
    assert_eq!(keys(&SearchView::from_query(&cat, "аквариум")), ["2"]);
}

#[test]
fn substring_spanning_fields_does_not_match() {
    let cat = sample();
    // "Кино – Группа" is display text, not a field
    let view = SearchView::from_query(&cat, "кино – группа");
    assert!(view.is_empty());
}

#[test]
fn shared_substring_keeps_catalog_order() {
    let cat = sample();
    // Latin "o"; the Cyrillic titles only contain "о" (U+043E)
    let view = SearchView::from_query(&cat, "o");
    assert_eq!(keys(&view), ["3", "5"]);
}

#[test]
fn get_follows_projection() {
    let cat = sample();
    let view = SearchView::from_query(&cat, "i");
    assert_eq!(view.row_ix, vec![2, 3, 4]);
    assert_eq!(view.get(1).map(|p| p.key.as_str()), Some("4"));
    assert!(view.get(3).is_none());
}
