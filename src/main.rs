use anyhow::Result;
use clap::Parser;
use std::path::Path;

use icon_disable::driver;

/// Takes no options: icons are always read from and written to ./icons
#[derive(Debug, Parser)]
#[clap(
    name = "icon-disable",
    version,
    about = "Generate grayed out \"disabled\" variants of the extension icons"
)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    // Per-icon failures are reported on the console only; the run itself succeeds.
    driver::generate_disabled_icons(Path::new("."));
    Ok(())
}
