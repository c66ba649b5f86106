use anyhow::Result;
use clap::Parser;
use route_tabs::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let result = cli::run(cli);

    if let Err(ref e) = result {
        log::error!("route-tabs failed: {e:#}");
    }
    result
}
