#![warn(
    clippy::all,
    // clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    // clippy::unwrap_used
)]
use std::io::IsTerminal;

use clap::Parser;

use logger::LogExt;
use render::Renderer;
use special::EntryTable;

mod cli;
pub mod config;
mod logger;
pub mod render;
pub mod special;

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = cli::Cli::parse();
    let config = config::init(cli.config.as_deref()).log_error("Could not load the configuration file")?;
    let table = config.table().log_error("Could not build the event table")?;

    log::debug!("Loaded {} entries (config: {:?})", table.len(), cli.config);

    if cli.list {
        print_list(&table);
        return Ok(());
    }

    let renderer = Renderer {
        signature: config.signature.as_deref(),
        color: render::use_color(config.color, cli.no_color, std::io::stdout().is_terminal()),
    };

    let view = render::page_for(&table, cli.date.as_deref(), config.today());

    print!("{}", renderer.page(&view));

    Ok(())
}

fn print_list(table: &EntryTable) {
    for entry in table.by_date() {
        println!("{}", render::list_line(entry));
    }
}
