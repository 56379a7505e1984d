// tests/cli_render.rs
//
// What the headless front end prints for a given controller state.
// Only built with `--features cli`.
#![cfg(feature = "cli")]

use archive_catalog::{
    catalog::CatalogController,
    cli::{self, Args},
    config::options::CatalogOptions,
    feed::Product,
};
use clap::Parser;

fn controller(products: Vec<Product>) -> CatalogController {
    let mut c = CatalogController::new(&CatalogOptions { page_size: 2, ..Default::default() });
    c.set_catalog(products);
    c
}

fn render(c: &CatalogController) -> String {
    let mut buf = Vec::new();
    cli::render(&mut buf, c).unwrap();
    String::from_utf8(buf).unwrap()
}

fn record(key: &str, artist: &str, title: Option<&str>, note: Option<&str>) -> Product {
    Product {
        key: key.into(),
        artist: artist.into(),
        title: title.map(Into::into),
        price: Some("2000".into()),
        note: note.map(Into::into),
    }
}

#[test]
fn partial_list_then_summary() {
    let c = controller(vec![
        record("1", "Кино", Some("Звезда по имени Солнце"), Some("MINT")),
        record("2", "Zemfira", None, None),
        record("3", "Joy Division", Some("Closer"), None),
    ]);

    assert_eq!(
        render(&c),
        "1\tКино – Звезда по имени Солнце\tЦена: 2000 ₽\tMINT\n\
         2\tZemfira\tЦена: 2000 ₽\n\
         2 of 3\n"
    );
}

#[test]
fn empty_search_prints_nothing_found() {
    let mut c = controller(vec![record("1", "Кино", None, None)]);
    c.set_query("beatles");
    assert_eq!(render(&c), "Ничего не найдено\n");
}

#[test]
fn flags_layer_over_defaults() {
    let args = Args::parse_from([
        "catalog",
        "--sheet",
        "abc",
        "--positive-column",
        "f",
        "--oldest-first",
        "--page-size",
        "5",
    ]);
    let opts = args.to_options();

    assert!(opts.feed.url.contains("/d/abc/"));
    assert_eq!(opts.feed.rule.positive.as_deref(), Some("F"));
    assert!(!opts.feed.newest_first);
    assert_eq!(opts.catalog.page_size, 5);
}

#[test]
fn no_positive_column_drops_the_threshold() {
    let opts = Args::parse_from(["catalog", "--no-positive-column"]).to_options();
    assert!(opts.feed.rule.positive.is_none());
}
