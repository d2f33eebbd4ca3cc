use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[clap(bin_name = env!("CARGO_PKG_NAME"), version = env!("CARGO_PKG_VERSION"), about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Cli {
    /// Path to the configuration file
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Check this day (YYYY-MM-DD) instead of today
    #[clap(short, long)]
    pub date: Option<String>,

    /// Print every known entry ordered by date
    #[clap(short, long, conflicts_with = "date")]
    pub list: bool,

    /// Disable colored output
    #[clap(long)]
    pub no_color: bool,
}
