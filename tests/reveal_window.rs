// tests/reveal_window.rs
//
// Reveal window + controller behavior without any UI: page growth, caps,
// resets on search, and sentinel geometry through the Visibility capability.

use archive_catalog::catalog::{CatalogController, ListSlice, ListState, RevealWindow, Span, Viewport};
use archive_catalog::config::options::CatalogOptions;
use archive_catalog::feed::Product;

fn product(i: usize, artist: &str, title: &str) -> Product {
    Product {
        key: i.to_string(),
        artist: artist.into(),
        title: Some(title.into()),
        price: Some("1000".into()),
        note: None,
    }
}

fn catalog(n: usize) -> Vec<Product> {
    (0..n).map(|i| product(i, &format!("Artist {i}"), &format!("Album {i}"))).collect()
}

fn controller(n: usize) -> CatalogController {
    let mut c = CatalogController::new(&CatalogOptions::default());
    c.set_catalog(catalog(n));
    c
}

#[test]
fn forty_five_rows_reveal_in_three_steps() {
    let mut c = controller(45);

    assert_eq!(c.visible_products().len(), 20);
    assert_eq!(c.state(), ListState::Partial { shown: 20, total: 45 });

    assert!(c.reveal_more());
    assert_eq!(c.visible_products().len(), 40);
    assert!(c.state().has_sentinel());

    assert!(c.reveal_more());
    assert_eq!(c.visible_products().len(), 45);
    assert_eq!(c.state(), ListState::Complete { total: 45 });
    assert!(!c.state().has_sentinel());
    assert_eq!(c.state().summary(), "45 of 45");

    // Nothing left to reveal
    assert!(!c.reveal_more());
    assert_eq!(c.revealed(), 45);
}

#[test]
fn search_matching_nothing_shows_empty_state() {
    let mut c = controller(45);
    c.set_query("no such record");

    assert_eq!(c.state(), ListState::Empty);
    assert!(!c.state().has_sentinel());
    assert!(c.visible_products().is_empty());
    assert!(!c.reveal_more());
}

#[test]
fn search_change_resets_window() {
    let mut c = controller(45);
    c.reveal_more();
    c.reveal_more();
    assert_eq!(c.revealed(), 45);

    // "Artist 1" hits 1, 10..19 → 11 rows
    assert!(c.set_query("artist 1"));
    assert_eq!(c.filtered_len(), 11);
    assert_eq!(c.revealed(), 11);
    assert_eq!(c.state(), ListState::Complete { total: 11 });

    // Back to everything: starts over at one page, not 45
    assert!(c.set_query(""));
    assert_eq!(c.revealed(), 20);
}

#[test]
fn same_query_is_not_a_change() {
    let mut c = controller(45);
    c.set_query("album");
    c.reveal_more();
    assert_eq!(c.revealed(), 40);

    assert!(!c.set_query("album"));
    assert_eq!(c.revealed(), 40);
}

#[test]
fn reveal_count_is_capped_and_monotonic() {
    for total in [0usize, 1, 19, 20, 21, 39, 40, 41, 100] {
        let mut w = RevealWindow::new(20);
        let mut last = w.revealed(total);
        assert!(last <= total);

        for _ in 0..10 {
            w.on_sentinel_visible(total);
            let now = w.revealed(total);
            assert!(now <= total, "total={total} now={now}");
            assert!(now >= last, "total={total} went {last} → {now}");
            last = now;
        }
        assert_eq!(last, total);
    }
}

#[test]
fn every_query_change_resets_to_page_size() {
    let mut w = RevealWindow::new(20);
    for q in ["a", "ab", "abc", "", "x"] {
        w.on_sentinel_visible(100);
        w.on_sentinel_visible(100);
        assert!(w.set_query(q));
        assert_eq!(w.revealed(100), 20);
    }
}

#[test]
fn sentinel_fires_once_per_position() {
    let mut w = RevealWindow::new(20);
    let view = Viewport::new(0.0, 600.0);

    // Sentinel below the fold, out of reach
    assert!(!w.observe_sentinel(&view, Span::new(900.0, 920.0), 100.0, 45));
    assert_eq!(w.revealed(45), 20);

    // Within 100px of the bottom edge
    assert!(w.observe_sentinel(&view, Span::new(680.0, 700.0), 100.0, 45));
    assert_eq!(w.revealed(45), 40);

    // Moved further down (more rows rendered) and out of reach: no growth
    assert!(!w.observe_sentinel(&view, Span::new(1500.0, 1520.0), 100.0, 45));
    assert_eq!(w.revealed(45), 40);

    // Scrolled down to it
    let view = view.scrolled(1000.0);
    assert!(w.observe_sentinel(&view, Span::new(1500.0, 1520.0), 100.0, 45));
    assert_eq!(w.state(45), ListState::Complete { total: 45 });

    // No sentinel anymore
    assert!(!w.observe_sentinel(&view, Span::new(1500.0, 1520.0), 100.0, 45));
}

#[test]
fn sentinel_in_the_same_spot_does_not_fire_again() {
    let mut w = RevealWindow::new(20);
    let view = Viewport::new(0.0, 600.0);
    let spot = Span::new(500.0, 520.0);

    let fires: Vec<bool> = (0..3).map(|_| w.observe_sentinel(&view, spot, 100.0, 100)).collect();
    assert_eq!(fires, [true, false, false]);
    assert_eq!(w.revealed(100), 40);

    // New rows pushed it down, still in reach
    assert!(w.observe_sentinel(&view, Span::new(560.0, 580.0), 100.0, 100));
    assert!(!w.observe_sentinel(&view, Span::new(560.0, 580.0), 100.0, 100));
    assert_eq!(w.revealed(100), 60);

    // Leaving and coming back to the same spot re-arms it
    assert!(!w.observe_sentinel(&view.scrolled(-2000.0), Span::new(560.0, 580.0), 100.0, 100));
    assert!(w.observe_sentinel(&view, Span::new(560.0, 580.0), 100.0, 100));
    assert_eq!(w.revealed(100), 80);
}

#[test]
fn search_change_rearms_sentinel_in_place() {
    let mut w = RevealWindow::new(20);
    let view = Viewport::new(0.0, 600.0);
    let spot = Span::new(500.0, 520.0);

    assert!(w.observe_sentinel(&view, spot, 100.0, 100));
    w.set_query("kino");
    assert!(w.observe_sentinel(&view, spot, 100.0, 100));
    assert_eq!(w.revealed(100), 40);
}

#[test]
fn slice_matches_single_search_pass() {
    let mut c = controller(45);
    c.set_query("artist 1");

    let slice = c.slice();
    assert_eq!(slice.total, c.filtered_len());
    assert_eq!(slice.indices.len(), c.revealed());
    let keys: Vec<String> = slice.indices.iter().map(|ix| ix.to_string()).collect();
    let visible: Vec<String> = c.visible_products().iter().map(|p| p.key.clone()).collect();
    assert_eq!(keys, visible);
    assert_eq!(c.state_for(slice.total), c.state());

    let empty = CatalogController::new(&CatalogOptions::default()).slice();
    assert_eq!(empty, ListSlice::default());
}

#[test]
fn controller_uses_configured_page_size() {
    let opts = CatalogOptions { page_size: 5, ..CatalogOptions::default() };
    let mut c = CatalogController::new(&opts);
    c.set_catalog(catalog(12));

    assert_eq!(c.revealed(), 5);
    c.observe_sentinel(&true, Span::new(0.0, 10.0));
    assert_eq!(c.revealed(), 10);
    c.observe_sentinel(&false, Span::new(0.0, 10.0));
    assert_eq!(c.revealed(), 10);
    c.observe_sentinel(&true, Span::new(0.0, 10.0));
    assert_eq!(c.revealed(), 12);
}

#[test]
fn loading_until_catalog_arrives() {
    let mut c = CatalogController::new(&CatalogOptions::default());
    assert!(c.is_loading());
    assert_eq!(c.filtered_len(), 0);

    c.set_catalog(catalog(3));
    assert!(!c.is_loading());
    assert_eq!(c.state(), ListState::Complete { total: 3 });
}
