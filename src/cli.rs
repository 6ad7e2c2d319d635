// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::emit::write_artifacts;
use crate::core::loader::load_database;
use crate::core::ranking::rank_tags;
use crate::core::resolver::ValidationContext;
use crate::core::schema::{TAGS_FILE_NAME, declared_tags, load_tag_groups};
use crate::utils::{GitHistory, History};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Catalog root to scan (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Directory the JSON artifacts and sitemap are written to
    #[arg(short, long, default_value = "build")]
    pub output: PathBuf,

    /// Fail on the first validation warning
    #[arg(short, long)]
    pub strict: bool,

    /// Report all warnings, still write output, and exit non-zero if any occurred
    #[arg(short, long)]
    pub test: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Runs the full pipeline with git-backed timestamps.
///
/// # Errors
///
/// Propagates fatal parse errors, I/O failures, and (in strict mode) the
/// first validation warning.
pub fn run(args: &Args) -> Result<u64> {
    run_with_history(args, &GitHistory)
}

/// Pipeline entry point with an injectable history source.
///
/// Returns the number of validation warnings recorded; the caller decides
/// what the count means for the exit code.
///
/// # Errors
///
/// Same as [`run`].
pub fn run_with_history(args: &Args, history: &dyn History) -> Result<u64> {
    let groups = load_tag_groups(&args.directory.join(TAGS_FILE_NAME))?;
    let declared = declared_tags(&groups);

    let mut ctx = ValidationContext::new(args.strict);
    let database = load_database(&args.directory, &groups, &mut ctx, history)?;
    let ranked = rank_tags(&declared, &database);

    write_artifacts(&args.output, &database, &ranked, &groups)?;

    Ok(ctx.warnings())
}
