// src/cli.rs
//
// Headless front end: load the feed, apply a search, simulate N sentinel
// events, and print what the catalog page would show.

use std::io::{self, BufWriter, Write};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    catalog::{CatalogController, ListState},
    config::{
        consts::TXT_NOTHING_FOUND,
        options::{AppOptions, FeedOptions},
    },
    feed,
    progress::Progress,
};

#[derive(Debug, Parser)]
#[command(name = "catalog", version, about = "Print the Archive catalog from the published sheet")]
pub struct Args {
    /// Search text (matches title or artist, case-insensitive)
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Extra pages to reveal after the first one
    #[arg(short, long, default_value_t = 0)]
    pub pages: usize,

    /// Rows per page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Feed URL (defaults to the shop's published sheet)
    #[arg(long, conflicts_with = "sheet")]
    pub url: Option<String>,

    /// Spreadsheet id, expanded to the gviz JSON endpoint
    #[arg(long)]
    pub sheet: Option<String>,

    /// Column that must hold a positive number (stock)
    #[arg(long, value_name = "COL", conflicts_with = "no_positive_column")]
    pub positive_column: Option<String>,

    /// Only require the identifying columns
    #[arg(long)]
    pub no_positive_column: bool,

    /// Keep feed order instead of newest first
    #[arg(long)]
    pub oldest_first: bool,
}

impl Args {
    /// Layer the flags over the defaults.
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();

        if let Some(url) = &self.url {
            opts.feed.url = url.clone();
        } else if let Some(id) = &self.sheet {
            opts.feed.url = FeedOptions::url_for(id);
        }

        if self.no_positive_column {
            opts.feed.rule.positive = None;
        } else if let Some(col) = &self.positive_column {
            opts.feed.rule.positive = Some(col.trim().to_ascii_uppercase());
        }

        if self.oldest_first {
            opts.feed.newest_first = false;
        }
        if let Some(n) = self.page_size {
            opts.catalog.page_size = n;
        }
        opts
    }
}

struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Feed parsed: {} rows", total);
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    run_with(&args)
}

pub fn run_with(args: &Args) -> Result<()> {
    let opts = args.to_options();

    let products = feed::load_catalog(&opts.feed, Some(&mut CliProgress))
        .wrap_err_with(|| format!("loading feed {}", opts.feed.url))?;

    let mut controller = CatalogController::new(&opts.catalog);
    controller.set_catalog(products);
    controller.set_query(&args.search);
    for _ in 0..args.pages {
        if !controller.reveal_more() {
            break;
        }
    }

    let mut out = BufWriter::new(io::stdout().lock());
    render(&mut out, &controller)?;
    out.flush()?;
    Ok(())
}

/// Same content as the catalog page: one line per revealed card, then the
/// state line.
pub fn render(out: &mut impl Write, controller: &CatalogController) -> io::Result<()> {
    for p in controller.visible_products() {
        write!(out, "{}\t{}\t{}", p.key, p.display_name(), p.price_line())?;
        if let Some(note) = &p.note {
            write!(out, "\t{}", note)?;
        }
        writeln!(out)?;
    }

    match controller.state() {
        ListState::Empty => writeln!(out, "{}", TXT_NOTHING_FOUND)?,
        state => writeln!(out, "{}", state.summary())?,
    }
    Ok(())
}
