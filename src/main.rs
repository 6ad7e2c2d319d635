// src/main.rs
use anyhow::Result;
use clap::Parser;

use dbgen::cli::{self, Args};
use dbgen::{logger, warn};

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.verbose);

    let warnings = cli::run(&args)?;

    if args.test && warnings > 0 {
        warn!("main"; "{warnings} validation warnings recorded");
        std::process::exit(1);
    }
    Ok(())
}
