// src/bin/cli.rs
use archive_catalog::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    archive_catalog::log::init();
    cli::run()
}
