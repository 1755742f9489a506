//! `process-directory` — scores a directory of RDF files.
//!
//! Every `*.ttl` file in the directory is unioned with the contextual data
//! (the catalogue itself, governance frameworks, and similar records) and
//! scored; `<name>-care.ttl` and `<name>-fair.ttl` artifacts land in a
//! `scores` subdirectory.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use scores_engine::batch::{process_directory, DirectoryOptions};
use scores_engine::fetch::HttpFetcher;
use scores_engine::validation::ProfileValidator;

/// Process a directory of RDF files.
#[derive(Parser)]
#[command(name = "process-directory", about = "Process a directory of RDF files")]
struct Args {
    /// The directory of RDF files to process.
    #[arg(short, long)]
    directory: PathBuf,

    /// A directory containing any contextual data required to score the
    /// metadata records, e.g. the data catalogue itself, governance
    /// frameworks etc.
    #[arg(short, long)]
    context_directory: PathBuf,

    /// Validate each record against the catalogue profile before scoring.
    #[arg(short, long)]
    validate: bool,

    /// Skip calculating CARE scores.
    #[arg(long)]
    skip_care: bool,

    /// Skip calculating FAIR scores.
    #[arg(long)]
    skip_fair: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let fetcher = HttpFetcher::new()?;
    let options = DirectoryOptions {
        validate: args.validate,
        skip_care: args.skip_care,
        skip_fair: args.skip_fair,
    };

    let written = process_directory(
        &args.directory,
        &args.context_directory,
        &fetcher,
        &ProfileValidator,
        &options,
    )?;

    for path in &written {
        println!("{}", path.display());
    }
    eprintln!("wrote {} score file(s)", written.len());
    Ok(())
}
