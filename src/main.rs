// src/main.rs
use anyhow::Result;
use clap::Parser;

use markdex::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    markdex::run(cli)
}
